//! Method tables of the built-in types.
//!
//! Each type binds exactly the operators it supports. Anything it leaves
//! out fails with `MethodNotFound` at dispatch time.
//!
//! Bodies run after the call protocol has validated the receiver and the
//! argument types, so they read payloads through unchecked casts.

mod float;
mod int;
mod string;

use rin_ir::{member, TypeId};

use crate::cast::{cast_unchecked, kind};
use crate::errors::EvalResult;
use crate::table::MethodTable;
use crate::types::TypeIdExt;
use crate::value::Value;

/// Every built-in type paired with its table.
pub(crate) fn tables() -> [(TypeId, MethodTable); 8] {
    [
        (TypeId::OBJECT, object_table()),
        (TypeId::TYPE, type_table()),
        (TypeId::FUNCTION, function_table()),
        (TypeId::NONE, none_table()),
        (TypeId::BOOL, bool_table()),
        (TypeId::INT, int::table()),
        (TypeId::FLOAT, float::table()),
        (TypeId::STR, string::table()),
    ]
}

/// `to_string` shared by every built-in: the value's display form.
fn display(receiver: &Value, _args: &[Value]) -> EvalResult {
    Ok(Value::string(receiver.to_string()))
}

/// Root fallback so every instance can be printed.
fn object_table() -> MethodTable {
    MethodTable::new().method(member::TO_STRING, &[], display)
}

fn none_table() -> MethodTable {
    MethodTable::new().method(member::TO_STRING, &[], display)
}

fn bool_table() -> MethodTable {
    MethodTable::new()
        .method(member::UNARY_NEGATE, &[], |receiver, _| {
            Ok(Value::bool(!cast_unchecked::<kind::Bool>(receiver).raw()))
        })
        .method(member::TO_STRING, &[], display)
}

fn type_table() -> MethodTable {
    MethodTable::new()
        .method(member::NAME, &[], |receiver, _| {
            let ty = cast_unchecked::<kind::Type>(receiver).target();
            Ok(Value::string(ty.name()))
        })
        .method(member::IS_SUBCLASS, &[TypeId::TYPE], |receiver, args| {
            let ty = cast_unchecked::<kind::Type>(receiver).target();
            let other = cast_unchecked::<kind::Type>(&args[0]).target();
            Ok(Value::bool(ty.is_subclass(other)))
        })
        .method(member::TO_STRING, &[], display)
}

fn function_table() -> MethodTable {
    MethodTable::new().method(member::TO_STRING, &[], display)
}
