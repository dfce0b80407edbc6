//! Runtime type identifier.
//!
//! A `TypeId` is the canonical handle for one registered runtime type.
//! The registry hands out exactly one id per type name, so type identity
//! is an O(1) integer comparison rather than a name comparison.

use std::fmt;

/// Canonical handle for a registered runtime type.
///
/// # Pre-registered Types
/// The built-in types occupy fixed indices, registered in this order when
/// the type registry is first touched:
/// - `OBJECT` is the root of the hierarchy
/// - `TYPE`, `FUNCTION`, `NONE`, `BOOL`, `INT`, `FLOAT`, `STR` all have
///   `OBJECT` as their parent
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub const OBJECT: TypeId = TypeId(0);
    pub const TYPE: TypeId = TypeId(1);
    pub const FUNCTION: TypeId = TypeId(2);
    pub const NONE: TypeId = TypeId(3);
    pub const BOOL: TypeId = TypeId(4);
    pub const INT: TypeId = TypeId(5);
    pub const FLOAT: TypeId = TypeId(6);
    pub const STR: TypeId = TypeId(7);

    /// Built-in types in registration order.
    pub const BUILTINS: [TypeId; 8] = [
        Self::OBJECT,
        Self::TYPE,
        Self::FUNCTION,
        Self::NONE,
        Self::BOOL,
        Self::INT,
        Self::FLOAT,
        Self::STR,
    ];

    /// First index handed out to types declared at runtime.
    pub const FIRST_DECLARED: u32 = 8;

    /// Create a `TypeId` from a raw registry index.
    #[inline]
    pub const fn from_raw(index: u32) -> Self {
        TypeId(index)
    }

    /// Get the raw registry index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Registry slot for this id.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is one of the pre-registered built-in types.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::FIRST_DECLARED
    }

    /// Name of a built-in type, or `None` for declared types.
    pub const fn builtin_name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("Object"),
            1 => Some("Type"),
            2 => Some("Function"),
            3 => Some("NoneType"),
            4 => Some("Bool"),
            5 => Some("Int"),
            6 => Some("Float"),
            7 => Some("Str"),
            _ => None,
        }
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => write!(f, "TypeId({name})"),
            None => write!(f, "TypeId({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests;
