//! Staged healing policy
//!
//! Decides once per turn whether to drink a healing resource:
//! - Emergency: the next hit can kill, so heal regardless of position
//! - Early conservation: before the final encounter, heal only when both
//!   in danger and critically low
//! - Final encounter: heal whenever health is low or the fight is risky

mod decision;
mod stages;

pub use decision::{select_candidate, DecisionResult, HealCandidate};
pub use stages::{DecisionStage, EncounterPosition};

use crate::catalog::ResourceCatalog;
use crate::core::config::PolicyConfig;
use crate::core::error::Result;
use crate::core::types::ResourceId;
use crate::encounter::{CombatState, RiskAssessment};
use crate::inventory::{extract_available, resolve_available};
use crate::loadout::{LoadoutValidator, ValidatedLoadout};

/// Healing policy bound to a catalog and a config
///
/// Holds no per-turn state; one instance can serve any number of runs,
/// from any thread.
#[derive(Debug, Clone)]
pub struct DecisionPolicy {
    catalog: ResourceCatalog,
    config: PolicyConfig,
}

impl DecisionPolicy {
    pub fn new(catalog: ResourceCatalog, config: PolicyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Policy with the default encounter structure and thresholds
    pub fn with_defaults(catalog: ResourceCatalog) -> Self {
        Self {
            catalog,
            config: PolicyConfig::default(),
        }
    }

    /// Check a pre-run loadout against this policy's catalog
    pub fn validate_loadout(&self, loadout: &[ResourceId]) -> Result<ValidatedLoadout> {
        LoadoutValidator::new(&self.catalog).validate(loadout)
    }

    /// Recommend whether to use a healing resource this turn
    pub fn decide(&self, state: &CombatState, slots: &[ResourceId]) -> Result<DecisionResult> {
        let assessment = RiskAssessment::assess(state)?;
        state.validate_position(&self.config.encounters)?;

        let available = extract_available(slots);
        let held = resolve_available(&available, &self.catalog);

        let candidate = match select_candidate(state, held.iter().map(|(s, d)| (*s, *d))) {
            Some(candidate) => candidate,
            None => {
                let unknown = available.len() - held.len();
                let reasoning = match (held.len(), unknown) {
                    (0, 0) => "no health resource available: inventory is empty".to_string(),
                    (0, unknown) => format!(
                        "no health resource available: {} unknown resource id(s) held",
                        unknown
                    ),
                    (known, 0) => format!(
                        "no health resource available: {} held resource(s), none heal",
                        known
                    ),
                    (known, unknown) => format!(
                        "no health resource available: {} held resource(s), none heal; \
                         {} unknown resource id(s) ignored",
                        known, unknown
                    ),
                };
                return Ok(DecisionResult::hold(
                    DecisionStage::NoCandidate,
                    assessment,
                    reasoning,
                ));
            }
        };

        let position = EncounterPosition::locate(state, &self.config.encounters);
        let result = self.apply_stages(candidate, position, assessment);

        if result.should_use {
            tracing::info!(
                "Use slot {:?} ({}): {}",
                result.slot,
                result.resource.as_ref().map_or("?", |r| r.name.as_str()),
                result.reasoning
            );
        } else {
            tracing::debug!("Hold: {}", result.reasoning);
        }

        Ok(result)
    }

    fn apply_stages(
        &self,
        candidate: HealCandidate,
        position: EncounterPosition,
        assessment: RiskAssessment,
    ) -> DecisionResult {
        let t = &self.config.thresholds;
        let effective = assessment.effective_health;
        let max_damage = assessment.max_enemy_damage;
        let health = assessment.health;
        let max_health = assessment.max_health;
        let ratio_pct = assessment.health_ratio * 100.0;
        let danger_line = max_damage as u64 * t.danger_hits as u64;
        let in_danger = assessment.dies_within(t.danger_hits);

        if assessment.dies_within(t.emergency_hits) {
            let reasoning = format!(
                "absolute emergency: effective health {} <= {} ({}x max enemy damage {}), \
                 using {} from slot {} (efficiency {:.2})",
                effective,
                max_damage as u64 * t.emergency_hits as u64,
                t.emergency_hits,
                max_damage,
                candidate.resource.name,
                candidate.slot,
                candidate.efficiency
            );
            return DecisionResult::use_candidate(
                candidate,
                DecisionStage::Emergency,
                assessment,
                reasoning,
            );
        }

        if !position.is_final {
            let critically_low = assessment.health_below(t.early_health_ratio);
            if in_danger && critically_low {
                let reasoning = format!(
                    "early conservation override at encounter #{}/{}: health {}/{} = {:.1}% < {:.1}% \
                     and effective health {} <= {} ({}x max enemy damage {}), using {} from slot {}",
                    position.index,
                    position.total,
                    health,
                    max_health,
                    ratio_pct,
                    t.early_health_ratio * 100.0,
                    effective,
                    danger_line,
                    t.danger_hits,
                    max_damage,
                    candidate.resource.name,
                    candidate.slot
                );
                return DecisionResult::use_candidate(
                    candidate,
                    DecisionStage::EarlyConservation,
                    assessment,
                    reasoning,
                );
            }

            let reasoning = format!(
                "early conservation hold at encounter #{}/{}: health {}/{} = {:.1}% {} {:.1}%, \
                 effective health {} {} {} ({}x max enemy damage {}), saving for final encounter",
                position.index,
                position.total,
                health,
                max_health,
                ratio_pct,
                if critically_low { "<" } else { ">=" },
                t.early_health_ratio * 100.0,
                effective,
                if in_danger { "<=" } else { ">" },
                danger_line,
                t.danger_hits,
                max_damage
            );
            return DecisionResult::hold(DecisionStage::EarlyConservation, assessment, reasoning);
        }

        let low_health = assessment.health_below(t.final_health_ratio);
        if low_health || in_danger {
            let reasoning = format!(
                "final encounter: health {}/{} = {:.1}% {} {:.1}%, effective health {} {} {} \
                 ({}x max enemy damage {}), using {} from slot {}",
                health,
                max_health,
                ratio_pct,
                if low_health { "<" } else { ">=" },
                t.final_health_ratio * 100.0,
                effective,
                if in_danger { "<=" } else { ">" },
                danger_line,
                t.danger_hits,
                max_damage,
                candidate.resource.name,
                candidate.slot
            );
            return DecisionResult::use_candidate(
                candidate,
                DecisionStage::FinalEncounter,
                assessment,
                reasoning,
            );
        }

        let reasoning = format!(
            "final encounter hold: health {}/{} = {:.1}% >= {:.1}% and effective health {} > {} \
             ({}x max enemy damage {})",
            health,
            max_health,
            ratio_pct,
            t.final_health_ratio * 100.0,
            effective,
            danger_line,
            t.danger_hits,
            max_damage
        );
        DecisionResult::hold(DecisionStage::FinalEncounter, assessment, reasoning)
    }
}
