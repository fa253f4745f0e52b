//! Registry of consumable resources
//!
//! The catalog is built once (from the built-in table or a TOML file) and
//! handed to whoever needs it. It is never mutated after construction.

mod definition;
mod loader;

pub use definition::{ResourceCategory, ResourceDefinition};
pub use loader::load_catalog;

use ahash::AHashMap;

use crate::core::error::{PolicyError, Result};
use crate::core::types::ResourceId;

/// Immutable id -> definition registry
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    definitions: AHashMap<ResourceId, ResourceDefinition>,
}

impl ResourceCatalog {
    /// Build a catalog, rejecting duplicate or reserved ids
    pub fn new(definitions: impl IntoIterator<Item = ResourceDefinition>) -> Result<Self> {
        let mut map = AHashMap::new();
        for def in definitions {
            if def.id.is_empty() {
                return Err(PolicyError::InvalidConfig(format!(
                    "resource '{}' uses reserved id 0",
                    def.name
                )));
            }
            let id = def.id;
            if map.insert(id, def).is_some() {
                return Err(PolicyError::InvalidConfig(format!(
                    "duplicate resource id {}",
                    id
                )));
            }
        }
        Ok(Self { definitions: map })
    }

    /// The consumables known to the live game
    pub fn builtin() -> Self {
        use ResourceCategory::*;

        let table = [
            (131, "Big Heal Juice", 20, Health),
            (155, "Mid Heal Juice", 12, Health),
            (151, "Lil Heal Juice", 6, Health),
            (132, "Big Charge Juice", 0, Charge),
            (156, "Mid Charge Juice", 0, Charge),
            (130, "Big Boom Juice", 0, Damage),
            (154, "Mid Boom Juice", 0, Damage),
            (150, "Lil Boom Juice", 0, Damage),
            (157, "Mid Armor Juice", 0, Defense),
            (133, "Transfuser", 0, Special),
        ];

        let definitions = table
            .into_iter()
            .map(|(id, name, heal, category)| {
                (
                    ResourceId(id),
                    ResourceDefinition::new(id, name, heal, category),
                )
            })
            .collect();

        Self { definitions }
    }

    pub fn lookup(&self, id: ResourceId) -> Option<&ResourceDefinition> {
        self.definitions.get(&id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All definitions ordered by id
    pub fn definitions(&self) -> Vec<&ResourceDefinition> {
        let mut defs: Vec<_> = self.definitions.values().collect();
        defs.sort_by_key(|d| d.id);
        defs
    }
}
