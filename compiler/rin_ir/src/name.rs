//! Interned member and type names.

use std::fmt;

/// Handle to a string held by a [`StringInterner`](crate::StringInterner).
///
/// The low bits select the interner shard and the remaining bits index
/// into that shard, so a name is decoded without touching any lock other
/// than its own shard's.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty string, interned by every interner.
    pub const EMPTY: Name = Name(0);

    pub(crate) const SHARD_BITS: u32 = 3;
    pub(crate) const SHARDS: usize = 1 << Self::SHARD_BITS;
    /// Largest slot index a shard can hand out.
    pub(crate) const MAX_SLOT: u32 = u32::MAX >> Self::SHARD_BITS;

    #[inline]
    pub(crate) const fn from_parts(shard: usize, slot: u32) -> Self {
        debug_assert!(shard < Self::SHARDS);
        debug_assert!(slot <= Self::MAX_SLOT);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "shard is below SHARDS, which fits in SHARD_BITS"
        )]
        let shard = shard as u32;
        Name((slot << Self::SHARD_BITS) | shard)
    }

    #[inline]
    pub(crate) const fn shard(self) -> usize {
        (self.0 & (Self::SHARDS as u32 - 1)) as usize
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        (self.0 >> Self::SHARD_BITS) as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}:{})", self.shard(), self.slot())
    }
}
