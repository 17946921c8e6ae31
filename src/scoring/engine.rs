//! Scoring engine orchestrator.
//!
//! [`ScoringContext::prepare`] resolves the draft against the catalog
//! and builds every shared per-batch context once; [`score_all`] then
//! scores the whole catalog against it and sorts the result. Single
//! candidate and batch scoring go through the same context, so repeated
//! calls with identical inputs are bit-identical.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::data::models::{Champion, CounterMatrix, DraftState, TeamSide, TeamState};
use crate::error::AppError;

use super::base::{compute_base_score, BaseContext};
use super::composition::{compute_composition_score, CompositionContext};
use super::counter::compute_counter_score;
use super::explain::generate_explanations;
use super::flexibility::compute_flexibility_score;
use super::risk::{compute_risk_penalty, RiskContext};
use super::stage::{detect_stage, DraftStage};
use super::synergy::compute_synergy_score;
use super::threat::{compute_threat_score, ThreatContext};
use super::weights::WeightConfig;
use super::{clamp_score, round2};

/// Per-component scores, each in [0, 100]. `risk` is a penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub synergy: f64,
    pub counter: f64,
    pub composition: f64,
    pub threat: f64,
    pub flexibility: f64,
    pub risk: f64,
}

/// Final scoring result for one candidate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredChampion {
    pub champion_id: String,
    pub name: String,
    pub final_score: f64,
    pub breakdown: ScoreBreakdown,
    pub explanations: Vec<String>,
}

/// Everything resolved and precomputed once per (catalog, draft)
/// snapshot. Read-only while scoring, so batches need no coordination.
pub struct ScoringContext<'a> {
    allies: Vec<Champion>,
    enemies: Vec<Champion>,
    opposing_slots: &'a TeamState,
    counter_matrix: &'a CounterMatrix,
    catalog_size: usize,
    stage: DraftStage,
    weights: WeightConfig,
    base: BaseContext,
    composition: CompositionContext,
    threat: ThreatContext,
    risk: RiskContext,
}

fn resolve_team(
    slots: &TeamState,
    by_id: &HashMap<&str, &Champion>,
) -> Result<Vec<Champion>, AppError> {
    slots
        .picked_ids()
        .into_iter()
        .map(|id| {
            by_id
                .get(id)
                .map(|c| (*c).clone())
                .ok_or_else(|| AppError::UnknownChampion(id.to_string()))
        })
        .collect()
}

impl<'a> ScoringContext<'a> {
    /// Resolve the draft and precompute all shared scoring state.
    ///
    /// Fails fast on a champion id that is not in the catalog — that is
    /// a broken caller contract, not a neutral-default situation.
    pub fn prepare(
        all_champions: &'a [Champion],
        draft: &'a DraftState,
        side: TeamSide,
        counter_matrix: &'a CounterMatrix,
    ) -> Result<Self, AppError> {
        let by_id: HashMap<&str, &Champion> =
            all_champions.iter().map(|c| (c.id.as_str(), c)).collect();

        let (own_slots, opposing_slots) = match side {
            TeamSide::Ally => (&draft.ally, &draft.enemy),
            TeamSide::Enemy => (&draft.enemy, &draft.ally),
        };

        let allies = resolve_team(own_slots, &by_id)?;
        let enemies = resolve_team(opposing_slots, &by_id)?;

        let total_picks = allies.len() + enemies.len();
        let stage = detect_stage(total_picks);
        let weights = WeightConfig::for_stage(stage);
        weights.validate()?;

        Ok(ScoringContext {
            base: BaseContext::prepare(all_champions),
            composition: CompositionContext::prepare(&allies),
            threat: ThreatContext::prepare(&enemies),
            risk: RiskContext::prepare(&allies),
            allies,
            enemies,
            opposing_slots,
            counter_matrix,
            catalog_size: all_champions.len(),
            stage,
            weights,
        })
    }

    pub fn stage(&self) -> DraftStage {
        self.stage
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn composition(&self) -> &CompositionContext {
        &self.composition
    }

    /// Score one candidate against this snapshot.
    pub fn score(&self, champion: &Champion) -> ScoredChampion {
        let breakdown = ScoreBreakdown {
            base: compute_base_score(champion, self.catalog_size, &self.base),
            synergy: compute_synergy_score(champion, &self.allies),
            counter: compute_counter_score(champion, self.counter_matrix, self.opposing_slots),
            composition: compute_composition_score(champion, &self.allies, &self.composition),
            threat: compute_threat_score(champion, &self.enemies, &self.threat),
            flexibility: compute_flexibility_score(champion),
            risk: compute_risk_penalty(champion, &self.risk),
        };

        let w = &self.weights;
        let raw = w.base * breakdown.base
            + w.synergy * breakdown.synergy
            + w.counter * breakdown.counter
            + w.composition * breakdown.composition
            + w.threat * breakdown.threat
            + w.flexibility * breakdown.flexibility
            - w.risk * breakdown.risk;

        let final_score = clamp_score(round2(raw));
        let explanations = generate_explanations(&breakdown, &self.allies);

        ScoredChampion {
            champion_id: champion.id.clone(),
            name: champion.name.clone(),
            final_score,
            breakdown,
            explanations,
        }
    }

    /// Score a whole catalog and sort by descending final score. The
    /// sort is stable, so equal scores keep catalog order.
    pub fn score_batch(&self, champions: &[Champion]) -> Vec<ScoredChampion> {
        let mut scored: Vec<ScoredChampion> = champions.iter().map(|c| self.score(c)).collect();
        scored.sort_by(|a, b| {
            b.final_score
                .partial_cmp(&a.final_score)
                .unwrap_or(Ordering::Equal)
        });
        scored
    }
}

/// Score every champion in the catalog against the draft snapshot and
/// return the list sorted by descending final score. Ties keep catalog
/// order (the sort is stable). Candidate-pool exclusion of picked and
/// banned champions is the caller's responsibility.
pub fn score_all(
    all_champions: &[Champion],
    draft: &DraftState,
    side: TeamSide,
    counter_matrix: &CounterMatrix,
) -> Result<Vec<ScoredChampion>, AppError> {
    if all_champions.is_empty() {
        return Ok(Vec::new());
    }

    let context = ScoringContext::prepare(all_champions, draft, side, counter_matrix)?;
    Ok(context.score_batch(all_champions))
}
