//! Death-risk and healing-efficiency scoring
//!
//! Everything here is a pure function of one `CombatState`.

use serde::{Deserialize, Serialize};

use crate::core::error::{PolicyError, Result};
use crate::encounter::state::CombatState;

/// How close the player is to dying, in enemy hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Next hit can kill
    Critical,
    /// Two hits can kill
    High,
    /// Three hits can kill
    Medium,
    Low,
}

impl RiskLevel {
    /// Numeric weight of this level (1.0 = certain death next hit)
    pub fn score(&self) -> f32 {
        match self {
            RiskLevel::Critical => 1.0,
            RiskLevel::High => 0.8,
            RiskLevel::Medium => 0.4,
            RiskLevel::Low => 0.1,
        }
    }
}

/// Damage the player can absorb before dying
pub fn effective_health(state: &CombatState) -> u32 {
    state.player_health.saturating_add(state.player_shield)
}

/// Highest damage among the enemy's moves
pub fn max_enemy_damage(state: &CombatState) -> Result<u32> {
    state
        .enemy_move_stats
        .values()
        .map(|m| m.damage)
        .max()
        .ok_or_else(|| PolicyError::InvalidState("enemy_move_stats must not be empty".into()))
}

/// Current health as a fraction of max health
///
/// Computed in `f64`, which holds every `u32` health value exactly.
pub fn health_ratio(state: &CombatState) -> Result<f64> {
    if state.player_max_health == 0 {
        return Err(PolicyError::InvalidState(
            "player_max_health must be positive".into(),
        ));
    }
    Ok(state.player_health as f64 / state.player_max_health as f64)
}

/// Classify death risk by how many max-damage hits the player survives
///
/// Ties resolve to the more severe level.
pub fn death_risk(state: &CombatState) -> Result<RiskLevel> {
    let max_damage = max_enemy_damage(state)?;
    Ok(classify(effective_health(state), max_damage))
}

fn classify(effective: u32, max_damage: u32) -> RiskLevel {
    let effective = effective as u64;
    let max_damage = max_damage as u64;

    if effective <= max_damage {
        RiskLevel::Critical
    } else if effective <= max_damage * 2 {
        RiskLevel::High
    } else if effective <= max_damage * 3 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Fraction of `heal_amount` that would actually restore health
///
/// 0.0 when the player is at full health (the heal is wasted) or the
/// resource heals nothing; otherwise in (0, 1], 1.0 meaning no overheal.
pub fn healing_efficiency(state: &CombatState, heal_amount: u32) -> f32 {
    let missing = state.player_max_health.saturating_sub(state.player_health);
    if missing == 0 || heal_amount == 0 {
        return 0.0;
    }
    heal_amount.min(missing) as f32 / heal_amount as f32
}

/// Risk figures computed once per turn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub health: u32,
    pub max_health: u32,
    pub effective_health: u32,
    pub max_enemy_damage: u32,
    pub health_ratio: f64,
    pub level: RiskLevel,
}

impl RiskAssessment {
    pub fn assess(state: &CombatState) -> Result<Self> {
        state.validate()?;
        let effective = effective_health(state);
        let max_damage = max_enemy_damage(state)?;

        Ok(Self {
            health: state.player_health,
            max_health: state.player_max_health,
            effective_health: effective,
            max_enemy_damage: max_damage,
            health_ratio: health_ratio(state)?,
            level: classify(effective, max_damage),
        })
    }

    /// True when the health ratio is strictly below `ratio`
    pub fn health_below(&self, ratio: f64) -> bool {
        self.health_ratio < ratio
    }

    /// True when effective health is within `hits` max-damage hits
    pub fn dies_within(&self, hits: u32) -> bool {
        self.effective_health as u64 <= self.max_enemy_damage as u64 * hits as u64
    }
}
