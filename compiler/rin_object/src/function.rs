//! Function values and the call protocol.

use std::fmt;
use std::sync::Arc;

use rin_ir::{names, Name, TypeId};

use crate::errors::{argument_type_mismatch, arity_mismatch, EvalError, EvalResult};
use crate::types::TypeIdExt;
use crate::value::Value;

/// Native function body. Receives arguments that already passed the
/// arity and type checks.
pub type NativeFn = dyn Fn(&[Value]) -> EvalResult + Send + Sync;

/// A callable: native body plus its required parameter types.
///
/// Cloning shares the body. Equality between function values is identity
/// of the body.
#[derive(Clone)]
pub struct FunctionValue {
    name: Name,
    params: Arc<[TypeId]>,
    body: Arc<NativeFn>,
}

impl FunctionValue {
    /// Anonymous function.
    pub fn new(
        params: &[TypeId],
        body: impl Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        Self::from_parts(Name::EMPTY, params.into(), body)
    }

    /// Function with a display name, used in error messages.
    pub fn named(
        name: &str,
        params: &[TypeId],
        body: impl Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        Self::from_parts(names().intern(name), params.into(), body)
    }

    pub(crate) fn from_parts(
        name: Name,
        params: Arc<[TypeId]>,
        body: impl Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        FunctionValue {
            name,
            params,
            body: Arc::new(body),
        }
    }

    /// Display name, if the function has one.
    pub fn name(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            None
        } else {
            Some(names().lookup(self.name))
        }
    }

    #[inline]
    pub fn params(&self) -> &[TypeId] {
        &self.params
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Call the function.
    ///
    /// Fails with `ArityMismatch` if the argument count differs from the
    /// arity, or with `ArgumentTypeMismatch` for the first argument whose
    /// runtime type is not a subclass of its declared parameter type. The
    /// body only runs after every check has passed, and its result is
    /// returned unchanged.
    pub fn call(&self, args: &[Value]) -> EvalResult {
        check_signature(self.name().unwrap_or(""), &self.params, args)?;
        (self.body)(args)
    }

    /// Whether both values share the same body.
    #[inline]
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "<function {name}>"),
            None => write!(f, "<function>"),
        }
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name())
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Validate a call's arguments against declared parameter types.
pub(crate) fn check_signature(
    name: &str,
    params: &[TypeId],
    args: &[Value],
) -> Result<(), EvalError> {
    if args.len() != params.len() {
        return Err(arity_mismatch(name, params.len(), args.len()));
    }
    for (position, (arg, &expected)) in args.iter().zip(params.iter()).enumerate() {
        let got = arg.type_id();
        if !got.is_subclass(expected) {
            return Err(argument_type_mismatch(
                name,
                position,
                expected.name(),
                got.name(),
            ));
        }
    }
    Ok(())
}
