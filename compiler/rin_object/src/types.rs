//! Process-wide type registry.
//!
//! The registry hands out exactly one `TypeId` per type name, so type
//! identity is an integer comparison. Each type records its single parent
//! and, once installed, its method table. Tables are shared by every
//! instance of the type; member resolution walks the parent chain and the
//! first table that binds the name wins.
//!
//! # Lifecycle
//!
//! The registry is created on first use with the built-in types already
//! declared and their tables installed, and is never torn down. Type
//! definitions are leaked so lookups can return `&'static` references
//! without holding the registry lock.
//!
//! # Two-phase construction
//!
//! `declare` publishes a type before it has any members and `install`
//! attaches the table afterwards, so a table may name its own type (or a
//! type declared later) in parameter lists.

use std::sync::{LazyLock, OnceLock};

use parking_lot::RwLock;
use rin_ir::{names, Name, TypeId};
use rustc_hash::FxHashMap;

use crate::builtins;
use crate::errors::{duplicate_type, EvalError};
use crate::table::{Member, MethodTable};

/// Definition of one registered type.
pub struct TypeDef {
    id: TypeId,
    name: Name,
    parent: Option<TypeId>,
    methods: OnceLock<MethodTable>,
}

impl TypeDef {
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        names().lookup(self.name)
    }

    /// Parent type; `None` only for the root `Object`.
    #[inline]
    pub fn parent(&self) -> Option<TypeId> {
        self.parent
    }

    /// This type's own table, if one has been installed.
    pub fn methods(&self) -> Option<&MethodTable> {
        self.methods.get()
    }
}

#[derive(Default)]
struct RegistryInner {
    by_name: FxHashMap<Name, TypeId>,
    defs: Vec<&'static TypeDef>,
}

impl RegistryInner {
    fn def(&self, ty: TypeId) -> &'static TypeDef {
        match self.defs.get(ty.index()) {
            Some(def) => def,
            None => panic!("{ty:?} is not registered"),
        }
    }

    fn push(&mut self, name: Name, parent: Option<TypeId>) -> Result<TypeId, EvalError> {
        let Ok(raw) = u32::try_from(self.defs.len()) else {
            return Err(EvalError::new("type registry is full"));
        };
        let id = TypeId::from_raw(raw);
        let def: &'static TypeDef = Box::leak(Box::new(TypeDef {
            id,
            name,
            parent,
            methods: OnceLock::new(),
        }));
        self.defs.push(def);
        self.by_name.insert(name, id);
        Ok(id)
    }
}

/// Registry of every runtime type.
pub struct TypeRegistry {
    inner: RwLock<RegistryInner>,
}

impl TypeRegistry {
    /// Create a registry holding the built-in types and their tables.
    pub(crate) fn with_builtins() -> Self {
        let registry = TypeRegistry {
            inner: RwLock::new(RegistryInner::default()),
        };
        {
            let mut inner = registry.inner.write();
            for ty in TypeId::BUILTINS {
                let Some(name) = ty.builtin_name() else {
                    unreachable!("{ty:?} is listed as built-in without a name");
                };
                let parent = (ty != TypeId::OBJECT).then_some(TypeId::OBJECT);
                match inner.push(names().intern(name), parent) {
                    Ok(id) => debug_assert_eq!(id, ty),
                    Err(err) => unreachable!("registering {name}: {err}"),
                }
            }
        }
        for (ty, table) in builtins::tables() {
            if let Err(err) = registry.install(ty, table) {
                unreachable!("installing built-in table: {err}");
            }
        }
        registry
    }

    /// Declare a type with the given parent and return its canonical id.
    ///
    /// Re-declaring an existing name with the same parent returns the
    /// existing id; a different parent fails with `DuplicateType`.
    ///
    /// # Panics
    /// Panics if `parent` was not handed out by this registry.
    pub fn declare(&self, name: &str, parent: TypeId) -> Result<TypeId, EvalError> {
        let interned = names().intern(name);
        let mut inner = self.inner.write();
        // Validates the parent before anything is published.
        inner.def(parent);
        if let Some(&existing) = inner.by_name.get(&interned) {
            return if inner.def(existing).parent == Some(parent) {
                Ok(existing)
            } else {
                Err(duplicate_type(name))
            };
        }
        let id = inner.push(interned, Some(parent))?;
        tracing::debug!(name, id = id.raw(), parent = parent.raw(), "declared type");
        Ok(id)
    }

    /// Attach `table` as the members of `ty`. Each type accepts exactly one
    /// table; a second install fails with `DuplicateType`.
    pub fn install(&self, ty: TypeId, table: MethodTable) -> Result<(), EvalError> {
        let def = self.def(ty);
        let members = table.len();
        if def.methods.set(table).is_err() {
            return Err(duplicate_type(def.name()));
        }
        tracing::debug!(name = def.name(), members, "installed method table");
        Ok(())
    }

    /// Find a type by name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        let interned = names().get(name)?;
        self.inner.read().by_name.get(&interned).copied()
    }

    /// Definition of a registered type.
    ///
    /// # Panics
    /// Panics if `ty` was not handed out by this registry.
    pub fn def(&self, ty: TypeId) -> &'static TypeDef {
        self.inner.read().def(ty)
    }

    pub fn name(&self, ty: TypeId) -> &'static str {
        self.def(ty).name()
    }

    pub fn parent(&self, ty: TypeId) -> Option<TypeId> {
        self.def(ty).parent
    }

    /// Whether `ty` is `other` or inherits from it.
    ///
    /// Reflexive and transitive; `Object` is a superclass of everything.
    pub fn is_subclass(&self, ty: TypeId, other: TypeId) -> bool {
        let inner = self.inner.read();
        let mut current = Some(ty);
        while let Some(t) = current {
            if t == other {
                return true;
            }
            current = inner.def(t).parent;
        }
        false
    }

    /// Resolve `member` on `ty`, searching its own table first and then
    /// each ancestor's.
    pub fn resolve(&self, ty: TypeId, member: Name) -> Option<&'static Member> {
        let inner = self.inner.read();
        let mut current = Some(ty);
        while let Some(t) = current {
            let def = inner.def(t);
            if let Some(found) = def.methods.get().and_then(|table| table.get(member)) {
                return Some(found);
            }
            current = def.parent;
        }
        None
    }

    /// Nearest built-in type on the parent chain of `ty` (itself included).
    ///
    /// Decides the native payload of a freshly constructed instance.
    pub fn builtin_ancestor(&self, ty: TypeId) -> TypeId {
        let inner = self.inner.read();
        let mut current = ty;
        while !current.is_builtin() {
            match inner.def(current).parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current
    }

    /// Number of registered types, built-ins included.
    pub fn len(&self) -> usize {
        self.inner.read().defs.len()
    }

    /// Always false: the built-in types are registered on creation.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(TypeRegistry::with_builtins);

/// The process-wide type registry.
pub fn registry() -> &'static TypeRegistry {
    &REGISTRY
}

/// Registry queries on `TypeId`, answered by the process-wide registry.
pub trait TypeIdExt: Copy {
    /// Registered name.
    fn name(self) -> &'static str;

    fn parent(self) -> Option<TypeId>;

    /// See [`TypeRegistry::is_subclass`].
    fn is_subclass(self, other: TypeId) -> bool;
}

impl TypeIdExt for TypeId {
    #[inline]
    fn name(self) -> &'static str {
        registry().name(self)
    }

    #[inline]
    fn parent(self) -> Option<TypeId> {
        registry().parent(self)
    }

    #[inline]
    fn is_subclass(self, other: TypeId) -> bool {
        registry().is_subclass(self, other)
    }
}
