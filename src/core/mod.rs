pub mod config;
pub mod error;
pub mod types;

pub use config::{load_policy_config, EncounterConfig, PolicyConfig, ThresholdConfig};
pub use error::{PolicyError, Result};
pub use types::{RawInventorySlots, ResourceId, SlotIndex, SLOT_COUNT};
