//! Run position and the decision stages of the staged policy
//!
//! A run is split into early encounters, where heals are hoarded, and the
//! final encounter, where they are spent freely. An absolute emergency
//! overrides both.

use serde::{Deserialize, Serialize};

use crate::core::config::EncounterConfig;
use crate::encounter::CombatState;

/// Which rule produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionStage {
    /// No healing resource to evaluate
    NoCandidate,
    /// Next hit can kill
    Emergency,
    /// Any encounter before the final one
    EarlyConservation,
    /// Last encounter of the run
    FinalEncounter,
}

impl DecisionStage {
    pub fn label(&self) -> &'static str {
        match self {
            DecisionStage::NoCandidate => "no candidate",
            DecisionStage::Emergency => "absolute emergency",
            DecisionStage::EarlyConservation => "early conservation",
            DecisionStage::FinalEncounter => "final encounter",
        }
    }
}

/// Where the current encounter sits in the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterPosition {
    /// 1-based index across the whole run
    pub index: u32,
    pub total: u32,
    pub is_final: bool,
}

impl EncounterPosition {
    /// Locate a snapshot in the run; floor and room must already be in range
    pub fn locate(state: &CombatState, encounters: &EncounterConfig) -> Self {
        let index = state
            .current_floor
            .saturating_sub(1)
            .saturating_mul(encounters.rooms_per_floor)
            .saturating_add(state.current_room);
        let is_final = state.current_floor == encounters.floors
            && state.current_room == encounters.rooms_per_floor;

        Self {
            index,
            total: encounters.total_encounters(),
            is_final,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounter::MoveStats;
    use std::collections::BTreeMap;

    fn at(floor: u32, room: u32) -> CombatState {
        CombatState {
            player_health: 10,
            player_max_health: 10,
            player_shield: 0,
            current_floor: floor,
            current_room: room,
            enemy_move_stats: BTreeMap::from([("hit".to_string(), MoveStats { damage: 1 })]),
        }
    }

    #[test]
    fn test_first_encounter() {
        let pos = EncounterPosition::locate(&at(1, 1), &EncounterConfig::default());
        assert_eq!(pos.index, 1);
        assert_eq!(pos.total, 16);
        assert!(!pos.is_final);
    }

    #[test]
    fn test_index_spans_floors() {
        let pos = EncounterPosition::locate(&at(3, 2), &EncounterConfig::default());
        assert_eq!(pos.index, 10);
    }

    #[test]
    fn test_final_encounter() {
        let pos = EncounterPosition::locate(&at(4, 4), &EncounterConfig::default());
        assert_eq!(pos.index, 16);
        assert!(pos.is_final);
    }

    #[test]
    fn test_last_room_of_earlier_floor_is_not_final() {
        let pos = EncounterPosition::locate(&at(3, 4), &EncounterConfig::default());
        assert!(!pos.is_final);
    }

    #[test]
    fn test_custom_structure() {
        let encounters = EncounterConfig {
            floors: 2,
            rooms_per_floor: 3,
        };
        let pos = EncounterPosition::locate(&at(2, 3), &encounters);
        assert_eq!(pos.index, 6);
        assert_eq!(pos.total, 6);
        assert!(pos.is_final);
    }
}
