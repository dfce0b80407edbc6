//! Generic dispatch entry points.
//!
//! Every operator goes through the same forwarding algorithm: resolve the
//! operator's conventional member name on the receiver's type chain,
//! require the member to be callable, and invoke it with the remaining
//! operands (nothing for unary operators, the right operand for binary and
//! compound assignment operators, the argument list for calls). Adding a
//! type never touches this module; it only installs a table.

use rin_ir::{member, names, AssignOp, BinaryOp, Name, TypeId, UnaryOp};

use crate::cast::{cast, kind};
use crate::errors::{
    arity_mismatch, method_not_found, not_callable, unimplemented_feature, unsupported_operator,
    EvalError, EvalResult,
};
use crate::table::Member;
use crate::types::registry;
use crate::value::{Payload, ScalarCell, Value};

/// Invoke the member `method` of `receiver` with `args`.
///
/// Fails with `MethodNotFound` if nothing on the type chain binds the name,
/// or `NotCallable` if the binding is not a function.
pub fn call_method(receiver: &Value, method: &str, args: &[Value]) -> EvalResult {
    match names().get(method) {
        Some(interned) => call_method_named(receiver, interned, args),
        // A name nobody interned cannot be bound in any table.
        None => Err(method_not_found(method, receiver.type_name())),
    }
}

/// [`call_method`] for an already interned member name.
pub fn call_method_named(receiver: &Value, method: Name, args: &[Value]) -> EvalResult {
    invoke_member(receiver, method, args, method_not_found)
}

#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(receiver = receiver.type_name(), method = names().lookup(method), argc = args.len())
)]
fn invoke_member(
    receiver: &Value,
    method: Name,
    args: &[Value],
    missing: impl FnOnce(&str, &str) -> EvalError,
) -> EvalResult {
    let method_name = names().lookup(method);
    match registry().resolve(receiver.type_id(), method) {
        Some(Member::Method(m)) => m.invoke(method_name, receiver, args),
        Some(Member::Value(bound)) => match bound.payload() {
            Payload::Function(function) => function.call(args),
            _ => Err(not_callable(method_name, receiver.type_name())),
        },
        None => Err(missing(method_name, receiver.type_name())),
    }
}

/// Dispatch an operator to its conventional member, naming the operator's
/// symbol if the receiver does not support it.
fn invoke_operator(
    receiver: &Value,
    member_name: &str,
    symbol: &str,
    args: &[Value],
) -> EvalResult {
    invoke_member(receiver, names().intern(member_name), args, |method, type_name| {
        unsupported_operator(symbol, method, type_name)
    })
}

/// Look up a member as a first-class value.
///
/// Methods come back as Function values bound to `receiver`; value
/// members come back as stored.
pub fn get_member(receiver: &Value, name: &str) -> EvalResult {
    let resolved = names()
        .get(name)
        .and_then(|interned| Some((interned, registry().resolve(receiver.type_id(), interned)?)));
    match resolved {
        Some((interned, Member::Method(m))) => {
            Ok(Value::function(m.bind(interned, receiver.clone())))
        }
        Some((_, Member::Value(bound))) => Ok(bound.clone()),
        None => Err(method_not_found(name, receiver.type_name())),
    }
}

/// Evaluate a prefix operator.
#[inline]
pub fn evaluate_unary(operand: &Value, op: UnaryOp) -> EvalResult {
    invoke_operator(operand, op.member_name(), op.as_symbol(), &[])
}

/// Evaluate an infix operator with `lhs` as the receiver.
#[inline]
pub fn evaluate_binary(lhs: &Value, rhs: &Value, op: BinaryOp) -> EvalResult {
    invoke_operator(lhs, op.member_name(), op.as_symbol(), std::slice::from_ref(rhs))
}

/// Evaluate a compound assignment, mutating `target` in place.
#[inline]
pub fn evaluate_assign(target: &Value, rhs: &Value, op: AssignOp) -> EvalResult {
    invoke_operator(target, op.member_name(), op.as_symbol(), std::slice::from_ref(rhs))
}

/// Call `callee` with `args`.
///
/// Function values are invoked directly; any other receiver is called
/// through its `__call__` member.
pub fn call(callee: &Value, args: &[Value]) -> EvalResult {
    match callee.payload() {
        Payload::Function(function) => function.call(args),
        _ => call_method(callee, member::CALL, args),
    }
}

/// Call `to_string` on `value` and return the text.
///
/// Fails with `InvalidCast` if the member returns something other than a
/// Str.
pub fn to_display_string(value: &Value) -> Result<String, EvalError> {
    let rendered = call_method(value, member::TO_STRING, &[])?;
    Ok(cast::<kind::Str>(&rendered)?.text())
}

/// Create an instance of `ty`.
///
/// Builds the default native value of the nearest built-in ancestor, then
/// runs `new` with `args` if the type chain defines it. Without `new`,
/// only an empty argument list is accepted.
pub fn construct(ty: TypeId, args: &[Value]) -> EvalResult {
    let instance = default_instance(ty)?;
    let new = names().intern(member::NEW);
    if registry().resolve(ty, new).is_some() {
        call_method_named(&instance, new, args)?;
    } else if !args.is_empty() {
        return Err(arity_mismatch(member::NEW, 0, args.len()));
    }
    Ok(instance)
}

fn default_instance(ty: TypeId) -> EvalResult {
    let base = registry().builtin_ancestor(ty);
    let payload = match base {
        TypeId::NONE if ty == base => return Ok(Value::none()),
        TypeId::BOOL if ty == base => return Ok(Value::bool(false)),
        TypeId::NONE => Payload::None,
        TypeId::BOOL => Payload::Bool(false),
        TypeId::INT => Payload::Int(ScalarCell::new(0)),
        TypeId::FLOAT => Payload::Float(ScalarCell::new(0.0)),
        TypeId::STR => Payload::Str(ScalarCell::new(String::new())),
        TypeId::TYPE | TypeId::FUNCTION => {
            return Err(unimplemented_feature("constructing Type and Function values"));
        }
        _ => Payload::Plain,
    };
    Ok(Value::with_payload(ty, payload))
}

impl Value {
    // Unary operators

    pub fn unary_plus(&self) -> EvalResult {
        evaluate_unary(self, UnaryOp::Plus)
    }

    pub fn unary_minus(&self) -> EvalResult {
        evaluate_unary(self, UnaryOp::Minus)
    }

    pub fn unary_negate(&self) -> EvalResult {
        evaluate_unary(self, UnaryOp::Negate)
    }

    pub fn unary_complement(&self) -> EvalResult {
        evaluate_unary(self, UnaryOp::Complement)
    }

    // Binary operators

    pub fn binary_multiply(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::Mul)
    }

    pub fn binary_divide(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::Div)
    }

    pub fn binary_modulo(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::Mod)
    }

    pub fn binary_int_divide(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::IntDiv)
    }

    pub fn binary_add(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::Add)
    }

    pub fn binary_sub(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::Sub)
    }

    pub fn binary_range(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::Range)
    }

    pub fn binary_incrange(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::RangeInclusive)
    }

    pub fn binary_equals(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::Eq)
    }

    pub fn binary_not_equals(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::NotEq)
    }

    pub fn binary_less(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::Lt)
    }

    pub fn binary_greater(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::Gt)
    }

    pub fn binary_less_equals(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::LtEq)
    }

    pub fn binary_greater_equals(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::GtEq)
    }

    pub fn binary_and(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::And)
    }

    pub fn binary_or(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::Or)
    }

    pub fn binary_xor(&self, rhs: &Value) -> EvalResult {
        evaluate_binary(self, rhs, BinaryOp::Xor)
    }

    // Compound assignment

    pub fn assign_plus(&self, rhs: &Value) -> EvalResult {
        evaluate_assign(self, rhs, AssignOp::Add)
    }

    pub fn assign_minus(&self, rhs: &Value) -> EvalResult {
        evaluate_assign(self, rhs, AssignOp::Sub)
    }

    pub fn assign_multiply(&self, rhs: &Value) -> EvalResult {
        evaluate_assign(self, rhs, AssignOp::Mul)
    }

    pub fn assign_divide(&self, rhs: &Value) -> EvalResult {
        evaluate_assign(self, rhs, AssignOp::Div)
    }

    pub fn assign_int_divide(&self, rhs: &Value) -> EvalResult {
        evaluate_assign(self, rhs, AssignOp::IntDiv)
    }

    pub fn assign_modulo(&self, rhs: &Value) -> EvalResult {
        evaluate_assign(self, rhs, AssignOp::Mod)
    }

    // Calls

    /// See [`call`].
    pub fn call(&self, args: &[Value]) -> EvalResult {
        call(self, args)
    }

    /// See [`call_method`].
    pub fn call_method(&self, method: &str, args: &[Value]) -> EvalResult {
        call_method(self, method, args)
    }

    /// See [`get_member`].
    pub fn get_member(&self, name: &str) -> EvalResult {
        get_member(self, name)
    }
}
