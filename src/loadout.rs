//! Pre-run loadout validation
//!
//! A loadout is the list of consumables a player straps into their slots
//! before entering a dungeon. Validation is fail-fast: the first slot
//! (lowest index) holding an unknown id is reported.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{ResourceCatalog, ResourceDefinition};
use crate::core::error::{PolicyError, Result};
use crate::core::types::{RawInventorySlots, ResourceId, SlotIndex, SLOT_COUNT};

/// A resolved, non-empty loadout slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutEntry {
    pub slot: SlotIndex,
    pub resource: ResourceDefinition,
}

/// Loadout that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedLoadout {
    /// Selection padded to the full slot count
    pub slots: RawInventorySlots,
    /// One entry per non-empty slot, in slot order
    pub resolved: Vec<LoadoutEntry>,
}

/// Validates loadouts against a catalog
pub struct LoadoutValidator<'a> {
    catalog: &'a ResourceCatalog,
}

impl<'a> LoadoutValidator<'a> {
    pub fn new(catalog: &'a ResourceCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve every non-empty id, failing on the first unknown one
    pub fn validate(&self, loadout: &[ResourceId]) -> Result<ValidatedLoadout> {
        if loadout.len() > SLOT_COUNT {
            return Err(PolicyError::InvalidState(format!(
                "loadout has {} slots, at most {} allowed",
                loadout.len(),
                SLOT_COUNT
            )));
        }

        let mut slots = [ResourceId::EMPTY; SLOT_COUNT];
        let mut resolved = Vec::new();

        for (slot, id) in loadout.iter().enumerate() {
            if id.is_empty() {
                continue;
            }
            let resource = self.catalog.lookup(*id).ok_or_else(|| {
                tracing::warn!("Loadout slot {} references unknown resource {}", slot, id);
                PolicyError::UnknownResource { id: *id }
            })?;

            slots[slot] = *id;
            resolved.push(LoadoutEntry {
                slot,
                resource: resource.clone(),
            });
        }

        tracing::debug!("Validated loadout {:?}", slots);
        Ok(ValidatedLoadout { slots, resolved })
    }

    /// Validate and also check the player owns enough of each resource
    ///
    /// A resource may fill at most as many slots as the player owns.
    pub fn validate_with_balances(
        &self,
        loadout: &[ResourceId],
        owned: &AHashMap<ResourceId, u32>,
    ) -> Result<ValidatedLoadout> {
        let validated = self.validate(loadout)?;

        let mut selected: AHashMap<ResourceId, u32> = AHashMap::new();
        for entry in &validated.resolved {
            *selected.entry(entry.resource.id).or_insert(0) += 1;
        }

        // Slot order keeps the reported resource stable
        for entry in &validated.resolved {
            let id = entry.resource.id;
            let count = selected[&id];
            let have = owned.get(&id).copied().unwrap_or(0);
            if count > have {
                return Err(PolicyError::InsufficientBalance {
                    id,
                    selected: count,
                    owned: have,
                });
            }
        }

        Ok(validated)
    }
}
