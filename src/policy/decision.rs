//! Decision output and healing candidate selection

use serde::{Deserialize, Serialize};

use crate::catalog::ResourceDefinition;
use crate::core::types::SlotIndex;
use crate::encounter::{healing_efficiency, CombatState, RiskAssessment};
use crate::policy::stages::DecisionStage;

/// Recommendation for the current turn
///
/// `slot`, `resource` and `efficiency` are only set when `should_use` is
/// true. A hold is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub should_use: bool,
    pub slot: Option<SlotIndex>,
    pub resource: Option<ResourceDefinition>,
    pub efficiency: Option<f32>,
    pub reasoning: String,
    pub stage: DecisionStage,
    pub assessment: RiskAssessment,
}

impl DecisionResult {
    pub fn use_candidate(
        candidate: HealCandidate,
        stage: DecisionStage,
        assessment: RiskAssessment,
        reasoning: String,
    ) -> Self {
        Self {
            should_use: true,
            slot: Some(candidate.slot),
            resource: Some(candidate.resource),
            efficiency: Some(candidate.efficiency),
            reasoning,
            stage,
            assessment,
        }
    }

    pub fn hold(stage: DecisionStage, assessment: RiskAssessment, reasoning: String) -> Self {
        Self {
            should_use: false,
            slot: None,
            resource: None,
            efficiency: None,
            reasoning,
            stage,
            assessment,
        }
    }
}

/// A healing resource in a specific slot, scored for this turn
#[derive(Debug, Clone, PartialEq)]
pub struct HealCandidate {
    pub slot: SlotIndex,
    pub resource: ResourceDefinition,
    pub efficiency: f32,
}

/// Pick the most efficient healing resource
///
/// `held` must be ordered by slot. Only a strictly better efficiency
/// replaces the current best, so ties go to the lowest slot.
pub fn select_candidate<'a>(
    state: &CombatState,
    held: impl IntoIterator<Item = (SlotIndex, &'a ResourceDefinition)>,
) -> Option<HealCandidate> {
    let mut best: Option<HealCandidate> = None;

    for (slot, resource) in held {
        if !resource.category.is_healing() {
            continue;
        }
        let efficiency = healing_efficiency(state, resource.heal_amount);
        tracing::debug!(
            "Slot {} {} heals {} at efficiency {:.3}",
            slot,
            resource.name,
            resource.heal_amount,
            efficiency
        );

        let better = best.as_ref().map_or(true, |b| efficiency > b.efficiency);
        if better {
            best = Some(HealCandidate {
                slot,
                resource: resource.clone(),
                efficiency,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResourceCategory;
    use crate::encounter::MoveStats;
    use std::collections::BTreeMap;

    fn state(health: u32, max: u32) -> CombatState {
        CombatState {
            player_health: health,
            player_max_health: max,
            player_shield: 0,
            current_floor: 1,
            current_room: 1,
            enemy_move_stats: BTreeMap::from([("hit".to_string(), MoveStats { damage: 5 })]),
        }
    }

    fn heal(id: u32, amount: u32) -> ResourceDefinition {
        ResourceDefinition::new(id, format!("Heal {}", amount), amount, ResourceCategory::Health)
    }

    #[test]
    fn test_picks_closest_to_missing() {
        let big = heal(1, 20);
        let mid = heal(2, 12);
        let lil = heal(3, 6);
        // missing 12: mid is exact, big overheals, lil is fully used too
        let best = select_candidate(&state(18, 30), [(0, &big), (1, &mid), (2, &lil)]).unwrap();
        assert_eq!(best.slot, 1);
        assert_eq!(best.efficiency, 1.0);
    }

    #[test]
    fn test_tie_goes_to_lowest_slot() {
        let a = heal(1, 6);
        let b = heal(2, 6);
        let best = select_candidate(&state(5, 30), [(1, &a), (2, &b)]).unwrap();
        assert_eq!(best.slot, 1);
    }

    #[test]
    fn test_skips_non_healing() {
        let bomb = ResourceDefinition::new(9, "Bomb", 0, ResourceCategory::Damage);
        assert!(select_candidate(&state(5, 30), [(0, &bomb)]).is_none());
    }

    #[test]
    fn test_full_health_still_yields_candidate() {
        let a = heal(1, 6);
        let best = select_candidate(&state(30, 30), [(3, &a)]).unwrap();
        assert_eq!(best.slot, 3);
        assert_eq!(best.efficiency, 0.0);
    }
}
