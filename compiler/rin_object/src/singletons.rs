//! Process-wide None, True and False.
//!
//! Each is created on first use, is never mutated, and lives until the
//! process exits. Every operator that yields "no value" or a boolean hands
//! out a clone of one of these handles, so identity comparison against
//! them is always meaningful.

use std::sync::LazyLock;

use rin_ir::TypeId;

use crate::value::{Payload, Value};

static NONE: LazyLock<Value> = LazyLock::new(|| Value::with_payload(TypeId::NONE, Payload::None));
static TRUE: LazyLock<Value> =
    LazyLock::new(|| Value::with_payload(TypeId::BOOL, Payload::Bool(true)));
static FALSE: LazyLock<Value> =
    LazyLock::new(|| Value::with_payload(TypeId::BOOL, Payload::Bool(false)));

#[inline]
pub(crate) fn none() -> &'static Value {
    &NONE
}

#[inline]
pub(crate) fn true_value() -> &'static Value {
    &TRUE
}

#[inline]
pub(crate) fn false_value() -> &'static Value {
    &FALSE
}
