//! Slot-indexed view of the consumables a player currently holds

use std::collections::BTreeMap;

use crate::catalog::{ResourceCatalog, ResourceDefinition};
use crate::core::types::{ResourceId, SlotIndex};

/// Occupied slots keyed by their original position
///
/// Ordered by slot index, so iteration always visits lower slots first.
pub type AvailableResources = BTreeMap<SlotIndex, ResourceId>;

/// Map occupied slots to the id they hold, skipping empty slots
///
/// Slot indices are kept as-is and the same id may appear in several slots.
pub fn extract_available(slots: &[ResourceId]) -> AvailableResources {
    slots
        .iter()
        .enumerate()
        .filter(|(_, id)| !id.is_empty())
        .map(|(slot, id)| (slot, *id))
        .collect()
}

/// Resolve available slots against the catalog
///
/// Ids the catalog does not know are skipped: they cannot be evaluated,
/// and rejecting unknown ids is the loadout validator's job.
pub fn resolve_available<'c>(
    available: &AvailableResources,
    catalog: &'c ResourceCatalog,
) -> Vec<(SlotIndex, &'c ResourceDefinition)> {
    available
        .iter()
        .filter_map(|(slot, id)| match catalog.lookup(*id) {
            Some(def) => Some((*slot, def)),
            None => {
                tracing::debug!("Slot {} holds unknown resource {}", slot, id);
                None
            }
        })
        .collect()
}
