//! Card identification.
//!
//! Every card dealt in a session gets a unique `CardId`. Ids come from a
//! monotonic `CardIdAllocator` owned by the session, so a card dealt after a
//! reset never reuses the id of a card from an earlier deck.
//!
//! ```
//! use memory_match::core::{CardId, CardIdAllocator};
//!
//! let mut ids = CardIdAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//!
//! assert_ne!(a, b);
//! assert_eq!(a, CardId(0));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a dealt card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Monotonic source of fresh card ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused id.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_sequential() {
        let mut ids = CardIdAllocator::new();

        assert_eq!(ids.alloc(), CardId(0));
        assert_eq!(ids.alloc(), CardId(1));
        assert_eq!(ids.alloc(), CardId(2));
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
