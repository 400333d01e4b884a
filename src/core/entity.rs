//! Knowledge-card instance identification.
//!
//! Every physical knowledge card in a game carries a unique `InstanceId`.
//! Two copies of the same static card share a `KnowledgeId` but never an
//! `InstanceId`.
//!
//! ## Allocation
//!
//! Ids are minted by the game state from a monotonically increasing counter,
//! starting at 1. An id is never reused for a different physical card, even
//! after the card is discarded.
//!
//! ```
//! use knowledge_duel::core::{InstanceAllocator, InstanceId};
//!
//! let mut ids = InstanceAllocator::default();
//! let a = ids.mint();
//! let b = ids.mint();
//!
//! assert_eq!(a, InstanceId(1));
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for one physical knowledge card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Counter that mints fresh instance ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceAllocator {
    next: u32,
}

impl Default for InstanceAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl InstanceAllocator {
    /// Mint a fresh id.
    pub fn mint(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `mint` will return.
    #[must_use]
    pub fn peek(&self) -> InstanceId {
        InstanceId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = InstanceAllocator::default();

        let minted: Vec<_> = (0..5).map(|_| ids.mint()).collect();

        assert_eq!(
            minted,
            vec![InstanceId(1), InstanceId(2), InstanceId(3), InstanceId(4), InstanceId(5)]
        );
        assert_eq!(ids.peek(), InstanceId(6));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId(42)), "#42");
    }

    #[test]
    fn test_serialization_is_transparent() {
        let json = serde_json::to_string(&InstanceId(123)).unwrap();
        assert_eq!(json, "123");
        let deserialized: InstanceId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, InstanceId(123));
    }
}
