//! Static resource definitions

use serde::{Deserialize, Serialize};

use crate::core::types::ResourceId;

/// What a consumable does when used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Health,
    Charge,
    Damage,
    Defense,
    Special,
}

impl ResourceCategory {
    pub fn is_healing(&self) -> bool {
        matches!(self, ResourceCategory::Health)
    }
}

/// Immutable definition of one consumable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub id: ResourceId,
    pub name: String,
    /// Health restored on use (0 for non-healing consumables)
    #[serde(default)]
    pub heal_amount: u32,
    pub category: ResourceCategory,
}

impl ResourceDefinition {
    pub fn new(
        id: impl Into<ResourceId>,
        name: impl Into<String>,
        heal_amount: u32,
        category: ResourceCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            heal_amount,
            category,
        }
    }
}
