//! `Int`: 64-bit signed integer.
//!
//! Arithmetic is checked: overflow fails with `IntegerOverflow` and a zero
//! divisor with `DivisionByZero` / `ModuloByZero`. `//` and `%` truncate
//! toward zero. `/` is true division and yields a Float.

use rin_ir::{member, TypeId};

use crate::cast::{cast_unchecked, kind};
use crate::errors::{
    division_by_zero, integer_overflow, modulo_by_zero, unimplemented_feature, EvalError,
    EvalResult,
};
use crate::table::MethodTable;
use crate::value::Value;

type IntOp = fn(i64, i64) -> Result<i64, EvalError>;

const INT: &[TypeId] = &[TypeId::INT];

pub(super) fn table() -> MethodTable {
    MethodTable::new()
        .method(member::UNARY_PLUS, &[], |receiver, _| Ok(Value::int(int(receiver))))
        .method(member::UNARY_MINUS, &[], |receiver, _| {
            int(receiver)
                .checked_neg()
                .map(Value::int)
                .ok_or_else(|| integer_overflow("negation"))
        })
        .method(member::UNARY_COMPL, &[], |receiver, _| Ok(Value::int(!int(receiver))))
        .method(member::ADD, INT, binary(add))
        .method(member::SUB, INT, binary(sub))
        .method(member::MULTIPLY, INT, binary(mul))
        .method(member::INT_DIVIDE, INT, binary(int_div))
        .method(member::MODULO, INT, binary(rem))
        .method(member::DIVIDE, INT, divide)
        .method(member::RANGE, INT, |_, _| Err(unimplemented_feature("ranges")))
        .method(member::INCRANGE, INT, |_, _| Err(unimplemented_feature("ranges")))
        .method(member::EQUALS, INT, compare(|a, b| a == b))
        .method(member::NOT_EQUALS, INT, compare(|a, b| a != b))
        .method(member::LESS, INT, compare(|a, b| a < b))
        .method(member::GREATER, INT, compare(|a, b| a > b))
        .method(member::LESS_EQUALS, INT, compare(|a, b| a <= b))
        .method(member::GREATER_EQUALS, INT, compare(|a, b| a >= b))
        .method(member::ASSIGN_PLUS, INT, assign(add))
        .method(member::ASSIGN_MINUS, INT, assign(sub))
        .method(member::ASSIGN_MULTIPLY, INT, assign(mul))
        .method(member::ASSIGN_INT_DIVIDE, INT, assign(int_div))
        .method(member::ASSIGN_MODULO, INT, assign(rem))
        .method(member::TO_STRING, &[], super::display)
}

#[inline]
fn int(value: &Value) -> i64 {
    cast_unchecked::<kind::Int>(value).raw()
}

fn add(a: i64, b: i64) -> Result<i64, EvalError> {
    a.checked_add(b).ok_or_else(|| integer_overflow("addition"))
}

fn sub(a: i64, b: i64) -> Result<i64, EvalError> {
    a.checked_sub(b).ok_or_else(|| integer_overflow("subtraction"))
}

fn mul(a: i64, b: i64) -> Result<i64, EvalError> {
    a.checked_mul(b).ok_or_else(|| integer_overflow("multiplication"))
}

fn int_div(a: i64, b: i64) -> Result<i64, EvalError> {
    if b == 0 {
        return Err(division_by_zero());
    }
    // i64::MIN / -1 is the only remaining failure
    a.checked_div(b).ok_or_else(|| integer_overflow("integer division"))
}

fn rem(a: i64, b: i64) -> Result<i64, EvalError> {
    if b == 0 {
        return Err(modulo_by_zero());
    }
    a.checked_rem(b).ok_or_else(|| integer_overflow("modulo"))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "true division converts both operands to f64"
)]
fn divide(receiver: &Value, args: &[Value]) -> EvalResult {
    Ok(Value::float(int(receiver) as f64 / int(&args[0]) as f64))
}

fn binary(op: IntOp) -> impl Fn(&Value, &[Value]) -> EvalResult + Send + Sync {
    move |receiver: &Value, args: &[Value]| op(int(receiver), int(&args[0])).map(Value::int)
}

fn compare(op: fn(i64, i64) -> bool) -> impl Fn(&Value, &[Value]) -> EvalResult + Send + Sync {
    move |receiver: &Value, args: &[Value]| Ok(Value::bool(op(int(receiver), int(&args[0]))))
}

/// Compound form of `op`: writes the result into the receiver and yields
/// None. On failure the receiver is left unchanged.
fn assign(op: IntOp) -> impl Fn(&Value, &[Value]) -> EvalResult + Send + Sync {
    move |receiver: &Value, args: &[Value]| {
        let rhs = int(&args[0]);
        let target = cast_unchecked::<kind::Int>(receiver);
        target.cell().update(|n| {
            *n = op(*n, rhs)?;
            Ok(Value::none())
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
