//! Per-turn combat snapshot and the risk math computed from it

pub mod risk;
pub mod state;

pub use risk::{
    death_risk, effective_health, healing_efficiency, max_enemy_damage, RiskAssessment, RiskLevel,
};
pub use state::{CombatState, MoveStats};
