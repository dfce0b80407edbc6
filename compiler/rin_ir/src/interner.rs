//! Sharded string interner for member and type names.
//!
//! Every interned string is leaked, so lookups hand back `&'static str`
//! and a name stays valid for the life of the process. Each shard has its
//! own lock; interning an already known string only takes a read lock.
//!
//! The runtime uses a single process-wide interner, [`names()`], so member
//! tables built anywhere agree on the `Name` for a given member.

use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use crate::operators::member;
use crate::Name;

#[derive(Default)]
struct Shard {
    slots: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl Shard {
    fn insert(&mut self, shard: usize, s: &str) -> Name {
        let Some(slot) = u32::try_from(self.strings.len())
            .ok()
            .filter(|&slot| slot <= Name::MAX_SLOT)
        else {
            shard_full(shard);
        };
        let leaked: &'static str = Box::leak(Box::<str>::from(s));
        self.strings.push(leaked);
        self.slots.insert(leaked, slot);
        Name::from_parts(shard, slot)
    }
}

#[cold]
fn shard_full(shard: usize) -> ! {
    panic!("name interner shard {shard} is full")
}

/// Thread-safe string interner.
pub struct StringInterner {
    shards: [RwLock<Shard>; Name::SHARDS],
}

impl StringInterner {
    /// Create an interner holding the empty string and every conventional
    /// member name.
    pub fn new() -> Self {
        let interner = StringInterner {
            shards: std::array::from_fn(|_| RwLock::new(Shard::default())),
        };
        interner.shards[0].write().insert(0, "");
        for name in member::ALL {
            interner.intern(name);
        }
        interner
    }

    fn shard_of(s: &str) -> usize {
        if s.is_empty() {
            return 0;
        }
        let mut hasher = FxHasher::default();
        s.hash(&mut hasher);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "only the low bits select a shard"
        )]
        let bucket = hasher.finish() as usize;
        bucket % Name::SHARDS
    }

    /// Intern `s`, returning the existing name if it is already known.
    ///
    /// # Panics
    /// Panics if the target shard has run out of slots.
    pub fn intern(&self, s: &str) -> Name {
        let shard = Self::shard_of(s);
        if let Some(&slot) = self.shards[shard].read().slots.get(s) {
            return Name::from_parts(shard, slot);
        }
        let mut guard = self.shards[shard].write();
        // Another thread may have won the race for the write lock.
        match guard.slots.get(s) {
            Some(&slot) => Name::from_parts(shard, slot),
            None => guard.insert(shard, s),
        }
    }

    /// Name of `s` if it has already been interned. Never inserts.
    pub fn get(&self, s: &str) -> Option<Name> {
        let shard = Self::shard_of(s);
        let slot = self.shards[shard].read().slots.get(s).copied()?;
        Some(Name::from_parts(shard, slot))
    }

    /// Text of a name produced by this interner.
    ///
    /// # Panics
    /// Panics if `name` came from a different interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        match self.shards[name.shard()].read().strings.get(name.slot()) {
            Some(&s) => s,
            None => panic!("{name:?} was not produced by this interner"),
        }
    }

    /// Number of distinct strings interned, the empty string included.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().strings.len()).sum()
    }

    /// Always false: the empty string is interned on creation.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

static NAMES: LazyLock<StringInterner> = LazyLock::new(StringInterner::new);

/// The process-wide interner shared by member tables and the type registry.
pub fn names() -> &'static StringInterner {
    &NAMES
}

#[cfg(test)]
mod tests;
