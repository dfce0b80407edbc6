//! `Str`: owned UTF-8 text.

use rin_ir::{member, TypeId};

use crate::cast::{cast_unchecked, kind};
use crate::errors::{integer_overflow, EvalError, EvalResult};
use crate::table::MethodTable;
use crate::value::Value;

const STR: &[TypeId] = &[TypeId::STR];
const INT: &[TypeId] = &[TypeId::INT];

pub(super) fn table() -> MethodTable {
    MethodTable::new()
        .method(member::ADD, STR, |receiver, args| {
            let mut joined = text(receiver);
            cast_unchecked::<kind::Str>(&args[0])
                .cell()
                .with(|rhs| joined.push_str(rhs));
            Ok(Value::string(joined))
        })
        .method(member::MULTIPLY, INT, |receiver, args| {
            let count = cast_unchecked::<kind::Int>(&args[0]).raw();
            let repeated = cast_unchecked::<kind::Str>(receiver)
                .cell()
                .with(|s| repeat(s, count))?;
            Ok(Value::string(repeated))
        })
        .method(member::EQUALS, STR, compare(|a, b| a == b))
        .method(member::NOT_EQUALS, STR, compare(|a, b| a != b))
        .method(member::LESS, STR, compare(|a, b| a < b))
        .method(member::GREATER, STR, compare(|a, b| a > b))
        .method(member::LESS_EQUALS, STR, compare(|a, b| a <= b))
        .method(member::GREATER_EQUALS, STR, compare(|a, b| a >= b))
        .method(member::ASSIGN_PLUS, STR, |receiver, args| {
            let rhs = text(&args[0]);
            cast_unchecked::<kind::Str>(receiver)
                .cell()
                .update(|s| s.push_str(&rhs));
            Ok(Value::none())
        })
        .method(member::ASSIGN_MULTIPLY, INT, |receiver, args| {
            let count = cast_unchecked::<kind::Int>(&args[0]).raw();
            cast_unchecked::<kind::Str>(receiver).cell().update(|s| {
                *s = repeat(s, count)?;
                Ok(Value::none())
            })
        })
        .method(member::TO_STRING, &[], super::display)
}

#[inline]
fn text(value: &Value) -> String {
    cast_unchecked::<kind::Str>(value).text()
}

/// `s` repeated `count` times; a count of zero or less yields empty text.
///
/// Fails with `IntegerOverflow` when the result could not be a Rust string
/// and with a custom error when the allocation itself is refused.
fn repeat(s: &str, count: i64) -> Result<String, EvalError> {
    let Ok(count) = usize::try_from(count) else {
        return Ok(String::new());
    };
    let Some(len) = s
        .len()
        .checked_mul(count)
        .filter(|&len| isize::try_from(len).is_ok())
    else {
        return Err(integer_overflow("string repetition"));
    };
    if len == 0 {
        return Ok(String::new());
    }
    let mut repeated = String::new();
    if repeated.try_reserve_exact(len).is_err() {
        return Err(EvalError::new(format!(
            "out of memory repeating a string to {len} bytes"
        )));
    }
    for _ in 0..count {
        repeated.push_str(s);
    }
    Ok(repeated)
}

fn compare(op: fn(&str, &str) -> bool) -> impl Fn(&Value, &[Value]) -> EvalResult + Send + Sync {
    move |receiver: &Value, args: &[Value]| {
        let lhs = cast_unchecked::<kind::Str>(receiver);
        let rhs = cast_unchecked::<kind::Str>(&args[0]);
        let result = lhs.cell().with(|a| rhs.cell().with(|b| op(a, b)));
        Ok(Value::bool(result))
    }
}
