//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of consumable slots a player carries into a run
pub const SLOT_COUNT: usize = 4;

/// Position of a consumable slot (0-based, never renumbered)
pub type SlotIndex = usize;

/// Identifier of a consumable resource as used by the game backend
///
/// `0` is reserved for an empty slot.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl ResourceId {
    pub const EMPTY: ResourceId = ResourceId(0);

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Consumable ids as they sit in the player's slots this turn
pub type RawInventorySlots = [ResourceId; SLOT_COUNT];

/// Build a slot array from plain ids, padding missing slots with empties
///
/// Returns `None` when more than `SLOT_COUNT` ids are given.
pub fn slots_from_ids(ids: &[u32]) -> Option<RawInventorySlots> {
    if ids.len() > SLOT_COUNT {
        return None;
    }
    let mut slots = [ResourceId::EMPTY; SLOT_COUNT];
    for (slot, id) in slots.iter_mut().zip(ids) {
        *slot = ResourceId(*id);
    }
    Some(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_id() {
        assert!(ResourceId::EMPTY.is_empty());
        assert!(!ResourceId(131).is_empty());
    }

    #[test]
    fn test_slots_from_ids_pads() {
        let slots = slots_from_ids(&[131, 155]).unwrap();
        assert_eq!(
            slots,
            [ResourceId(131), ResourceId(155), ResourceId::EMPTY, ResourceId::EMPTY]
        );
    }

    #[test]
    fn test_slots_from_ids_rejects_overflow() {
        assert!(slots_from_ids(&[1, 2, 3, 4, 5]).is_none());
    }
}
