//! Per-type member tables.
//!
//! A table maps member names to either a native method or a bound value.
//! One table is shared by every instance of its type; methods receive the
//! instance explicitly as their receiver.

use std::fmt;
use std::sync::Arc;

use rin_ir::{names, Name, TypeId};
use rustc_hash::FxHashMap;

use crate::errors::EvalResult;
use crate::function::{check_signature, FunctionValue};
use crate::value::Value;

/// Native method body: receiver plus the already-validated arguments.
pub type MethodFn = dyn Fn(&Value, &[Value]) -> EvalResult + Send + Sync;

/// A native method with its declared parameter types.
#[derive(Clone)]
pub struct Method {
    params: Arc<[TypeId]>,
    body: Arc<MethodFn>,
}

impl Method {
    pub fn new(
        params: &[TypeId],
        body: impl Fn(&Value, &[Value]) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        Method {
            params: params.into(),
            body: Arc::new(body),
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

    /// Validate `args` against the signature, then run the body.
    ///
    /// The body never runs if validation fails.
    pub fn invoke(&self, name: &str, receiver: &Value, args: &[Value]) -> EvalResult {
        check_signature(name, &self.params, args)?;
        (self.body)(receiver, args)
    }

    /// A Function value that invokes this method on `receiver`.
    pub fn bind(&self, name: Name, receiver: Value) -> FunctionValue {
        let body = Arc::clone(&self.body);
        FunctionValue::from_parts(name, Arc::clone(&self.params), move |args| {
            body(&receiver, args)
        })
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// What a member name is bound to.
#[derive(Clone, Debug)]
pub enum Member {
    Method(Method),
    /// An arbitrary value. Dispatch can only invoke it if it is a Function.
    Value(Value),
}

/// Name to member mapping for one type.
#[derive(Clone, Debug, Default)]
pub struct MethodTable {
    members: FxHashMap<Name, Member>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert_method`](Self::insert_method).
    #[must_use]
    pub fn method(
        mut self,
        name: &str,
        params: &[TypeId],
        body: impl Fn(&Value, &[Value]) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        self.insert_method(name, Method::new(params, body));
        self
    }

    /// Bind `name` to a native method, replacing any earlier binding.
    pub fn insert_method(&mut self, name: &str, method: Method) {
        self.members.insert(names().intern(name), Member::Method(method));
    }

    /// Bind `name` to a value, replacing any earlier binding.
    pub fn insert_value(&mut self, name: &str, value: Value) {
        self.members.insert(names().intern(name), Member::Value(value));
    }

    #[inline]
    pub fn get(&self, name: Name) -> Option<&Member> {
        self.members.get(&name)
    }

    pub fn contains(&self, name: &str) -> bool {
        names()
            .get(name)
            .is_some_and(|name| self.members.contains_key(&name))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Bound member names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.members.keys().map(|&name| names().lookup(name))
    }
}
