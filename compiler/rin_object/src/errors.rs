//! Error types for dispatch and the built-in types.
//!
//! `EvalErrorKind` provides typed error categories so callers can match on
//! the failure instead of parsing messages. Factory functions (e.g.,
//! `method_not_found()`) are the public API; they populate both `kind` and
//! `message`.
//!
//! Every failure is returned as a value. The two internal-consistency kinds
//! (`MethodNotFound`, `NotCallable`) are reported as non-recoverable so an
//! embedder that wants fail-fast behavior can abort on them.

use crate::value::Value;
use std::fmt;

/// Result of a dispatch or built-in operation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Dispatch
    MethodNotFound {
        method: String,
        type_name: String,
    },
    NotCallable {
        member: String,
        type_name: String,
    },

    // Call protocol
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    ArgumentTypeMismatch {
        name: String,
        position: usize,
        expected: String,
        got: String,
    },

    // Casts
    InvalidCast {
        from: String,
        to: String,
    },

    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        operation: String,
    },

    // Type registry
    DuplicateType {
        name: String,
    },

    UnimplementedFeature {
        feature: String,
    },

    Io {
        message: String,
    },

    /// Catch-all for embedder-defined failures.
    Custom {
        message: String,
    },
}

impl EvalErrorKind {
    /// Missing or non-callable members mean a type's table disagrees with
    /// what the evaluator expected. Everything else is an ordinary runtime
    /// failure of the program being run.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::MethodNotFound { .. } | Self::NotCallable { .. })
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MethodNotFound { method, type_name } => {
                write!(f, "no method '{method}' on type {type_name}")
            }
            Self::NotCallable { member, type_name } => {
                write!(f, "member '{member}' of {type_name} is not callable")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                if name.is_empty() {
                    write!(f, "expected {expected} {arg_word}, got {got}")
                } else {
                    write!(f, "{name} expects {expected} {arg_word}, got {got}")
                }
            }
            Self::ArgumentTypeMismatch {
                name,
                position,
                expected,
                got,
            } => {
                if name.is_empty() {
                    write!(f, "argument {position} expects {expected}, got {got}")
                } else {
                    write!(f, "{name}: argument {position} expects {expected}, got {got}")
                }
            }
            Self::InvalidCast { from, to } => write!(f, "invalid cast from {from} to {to}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::DuplicateType { name } => write!(f, "type {name} is already defined"),
            Self::UnimplementedFeature { feature } => {
                write!(f, "not yet implemented: {feature}")
            }
            Self::Io { message } => write!(f, "i/o error: {message}"),
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message.
    ///
    /// For factory-created errors, this equals `kind.to_string()`, except
    /// that operator lookups also name the operator's symbol.
    pub message: String,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer the factory functions when a structured
    /// kind is available.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Whether a caller can reasonably continue after this error.
    pub fn is_recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        io_error(&err.to_string())
    }
}

// Factory functions

/// No member with the given name on the receiver's type chain.
#[cold]
pub fn method_not_found(method: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MethodNotFound {
        method: method.to_string(),
        type_name: type_name.to_string(),
    })
}

/// [`method_not_found`] for an operator member, naming the source symbol
/// in the message. The kind stays `MethodNotFound`.
#[cold]
pub fn unsupported_operator(symbol: &str, method: &str, type_name: &str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::MethodNotFound {
            method: method.to_string(),
            type_name: type_name.to_string(),
        },
        message: format!("unsupported operator '{symbol}' ({method}) on type {type_name}"),
    }
}

/// Member exists but holds a value that cannot be invoked.
#[cold]
pub fn not_callable(member: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        member: member.to_string(),
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Argument at `position` (zero-based) is not a subclass of the declared type.
#[cold]
pub fn argument_type_mismatch(name: &str, position: usize, expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgumentTypeMismatch {
        name: name.to_string(),
        position,
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn invalid_cast(from: &str, to: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidCast {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Modulo by zero error.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

#[cold]
pub fn duplicate_type(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateType {
        name: name.to_string(),
    })
}

#[cold]
pub fn unimplemented_feature(feature: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnimplementedFeature {
        feature: feature.to_string(),
    })
}

#[cold]
pub fn io_error(message: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Io {
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests;
