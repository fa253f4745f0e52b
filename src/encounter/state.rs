//! Combat snapshot supplied by the game backend each turn

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::config::EncounterConfig;
use crate::core::error::{PolicyError, Result};

/// Stats of one enemy move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStats {
    pub damage: u32,
}

/// Snapshot of an encounter at the start of the player's turn
///
/// Field names match the backend's JSON so a response body deserializes
/// directly. The policy never mutates a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    pub player_health: u32,
    pub player_max_health: u32,
    pub player_shield: u32,
    /// 1-based floor number
    pub current_floor: u32,
    /// 1-based room number within the floor
    pub current_room: u32,
    /// Enemy moves keyed by move identifier
    pub enemy_move_stats: BTreeMap<String, MoveStats>,
}

impl CombatState {
    /// Check the invariants every consumer of a snapshot relies on
    pub fn validate(&self) -> Result<()> {
        if self.player_max_health == 0 {
            return Err(PolicyError::InvalidState(
                "player_max_health must be positive".into(),
            ));
        }
        if self.player_health > self.player_max_health {
            return Err(PolicyError::InvalidState(format!(
                "player_health ({}) exceeds player_max_health ({})",
                self.player_health, self.player_max_health
            )));
        }
        if self.enemy_move_stats.is_empty() {
            return Err(PolicyError::InvalidState(
                "enemy_move_stats must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Check that floor and room fall inside the run's structure
    pub fn validate_position(&self, encounters: &EncounterConfig) -> Result<()> {
        if !(1..=encounters.floors).contains(&self.current_floor) {
            return Err(PolicyError::InvalidState(format!(
                "current_floor {} outside 1..={}",
                self.current_floor, encounters.floors
            )));
        }
        if !(1..=encounters.rooms_per_floor).contains(&self.current_room) {
            return Err(PolicyError::InvalidState(format!(
                "current_room {} outside 1..={}",
                self.current_room, encounters.rooms_per_floor
            )));
        }
        Ok(())
    }

    /// Parse a snapshot from the backend's JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let state: CombatState = serde_json::from_str(json)?;
        state.validate()?;
        Ok(state)
    }
}
