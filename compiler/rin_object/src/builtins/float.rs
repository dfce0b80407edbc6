//! `Float`: IEEE-754 double.
//!
//! Every operation is the plain machine operation, so a zero divisor
//! produces an infinity or NaN rather than an error, and `%` keeps the
//! sign of the dividend.

use rin_ir::{member, TypeId};

use crate::cast::{cast_unchecked, kind};
use crate::errors::EvalResult;
use crate::table::MethodTable;
use crate::value::Value;

type FloatOp = fn(f64, f64) -> f64;

const FLOAT: &[TypeId] = &[TypeId::FLOAT];

#[expect(clippy::float_cmp, reason = "comparisons follow IEEE semantics")]
pub(super) fn table() -> MethodTable {
    MethodTable::new()
        .method(member::UNARY_PLUS, &[], |receiver, _| Ok(Value::float(float(receiver))))
        .method(member::UNARY_MINUS, &[], |receiver, _| Ok(Value::float(-float(receiver))))
        .method(member::ADD, FLOAT, binary(|a, b| a + b))
        .method(member::SUB, FLOAT, binary(|a, b| a - b))
        .method(member::MULTIPLY, FLOAT, binary(|a, b| a * b))
        .method(member::DIVIDE, FLOAT, binary(|a, b| a / b))
        .method(member::MODULO, FLOAT, binary(|a, b| a % b))
        .method(member::EQUALS, FLOAT, compare(|a, b| a == b))
        .method(member::NOT_EQUALS, FLOAT, compare(|a, b| a != b))
        .method(member::LESS, FLOAT, compare(|a, b| a < b))
        .method(member::GREATER, FLOAT, compare(|a, b| a > b))
        .method(member::LESS_EQUALS, FLOAT, compare(|a, b| a <= b))
        .method(member::GREATER_EQUALS, FLOAT, compare(|a, b| a >= b))
        .method(member::ASSIGN_PLUS, FLOAT, assign(|a, b| a + b))
        .method(member::ASSIGN_MINUS, FLOAT, assign(|a, b| a - b))
        .method(member::ASSIGN_MULTIPLY, FLOAT, assign(|a, b| a * b))
        .method(member::ASSIGN_DIVIDE, FLOAT, assign(|a, b| a / b))
        .method(member::ASSIGN_MODULO, FLOAT, assign(|a, b| a % b))
        .method(member::TO_STRING, &[], super::display)
}

#[inline]
fn float(value: &Value) -> f64 {
    cast_unchecked::<kind::Float>(value).raw()
}

fn binary(op: FloatOp) -> impl Fn(&Value, &[Value]) -> EvalResult + Send + Sync {
    move |receiver: &Value, args: &[Value]| Ok(Value::float(op(float(receiver), float(&args[0]))))
}

fn compare(op: fn(f64, f64) -> bool) -> impl Fn(&Value, &[Value]) -> EvalResult + Send + Sync {
    move |receiver: &Value, args: &[Value]| Ok(Value::bool(op(float(receiver), float(&args[0]))))
}

fn assign(op: FloatOp) -> impl Fn(&Value, &[Value]) -> EvalResult + Send + Sync {
    move |receiver: &Value, args: &[Value]| {
        let rhs = float(&args[0]);
        cast_unchecked::<kind::Float>(receiver).cell().update(|x| *x = op(*x, rhs));
        Ok(Value::none())
    }
}
