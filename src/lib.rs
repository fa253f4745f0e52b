//! Potion Policy - turn-by-turn healing decisions for dungeon runs

pub mod catalog;
pub mod core;
pub mod encounter;
pub mod inventory;
pub mod loadout;
pub mod policy;

pub use crate::catalog::{ResourceCatalog, ResourceCategory, ResourceDefinition};
pub use crate::core::{PolicyConfig, PolicyError, RawInventorySlots, ResourceId, Result};
pub use crate::encounter::{CombatState, MoveStats, RiskLevel};
pub use crate::loadout::{LoadoutValidator, ValidatedLoadout};
pub use crate::policy::{DecisionPolicy, DecisionResult, DecisionStage};
