//! Base score: raw meta strength independent of draft context.
//!
//! `0.50 × winrate percentile + 0.30 × tier score + 0.20 × pick-rate
//! confidence`. The percentile uses inclusive tie ranks: a champion's
//! rank is the count of champions with winrate ≤ its own, so tied
//! champions share the maximal rank of their group. The rank table and
//! the median pick rate are computed once per batch in [`BaseContext`]
//! (one sort, O(N log N)) and shared across all candidates.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::data::models::Champion;

use super::clamp_score;

/// Shared per-batch context: winrate rank table and median pick rate.
#[derive(Debug, Clone)]
pub struct BaseContext {
    median_pick_rate: f64,
    winrate_ranks: HashMap<String, usize>,
}

impl BaseContext {
    pub fn prepare(all_champions: &[Champion]) -> Self {
        if all_champions.is_empty() {
            return BaseContext {
                median_pick_rate: 1.0,
                winrate_ranks: HashMap::new(),
            };
        }

        let mut pick_rates: Vec<f64> = all_champions.iter().map(|c| c.pick_rate).collect();
        pick_rates.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let mid = pick_rates.len() / 2;
        let median = if pick_rates.len() % 2 != 0 {
            pick_rates[mid]
        } else {
            (pick_rates[mid - 1] + pick_rates[mid]) / 2.0
        };
        // Floor at 1 so the confidence division never blows up
        let median_pick_rate = if median > 0.0 { median } else { 1.0 };

        let mut sorted: Vec<&Champion> = all_champions.iter().collect();
        sorted.sort_by(|a, b| a.winrate.partial_cmp(&b.winrate).unwrap_or(Ordering::Equal));

        let mut winrate_ranks = HashMap::with_capacity(sorted.len());
        let mut i = 0;
        while i < sorted.len() {
            let mut last = i;
            while last + 1 < sorted.len() && sorted[last + 1].winrate == sorted[i].winrate {
                last += 1;
            }
            // Every champion in the tied group gets the group's top rank
            let rank = last + 1;
            for c in &sorted[i..=last] {
                winrate_ranks.insert(c.id.clone(), rank);
            }
            i = last + 1;
        }

        BaseContext {
            median_pick_rate,
            winrate_ranks,
        }
    }

    pub fn rank_of(&self, champion_id: &str) -> usize {
        self.winrate_ranks.get(champion_id).copied().unwrap_or(0)
    }

    pub fn median_pick_rate(&self) -> f64 {
        self.median_pick_rate
    }
}

/// Compute the base score for one candidate using the shared context.
pub fn compute_base_score(champion: &Champion, catalog_size: usize, context: &BaseContext) -> f64 {
    if catalog_size == 0 {
        return 50.0;
    }

    let rank = context.rank_of(&champion.id);
    let winrate_percentile = (rank as f64 / catalog_size as f64) * 100.0;
    let tier_score = champion.tier.score();
    let pick_rate_confidence = (champion.pick_rate / context.median_pick_rate).min(1.0) * 100.0;

    let raw = 0.50 * winrate_percentile + 0.30 * tier_score + 0.20 * pick_rate_confidence;
    clamp_score(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::{DamageProfile, Role, Tier};

    fn champ(id: &str, winrate: f64, pick_rate: f64, tier: Tier) -> Champion {
        Champion {
            id: id.to_string(),
            name: id.to_string(),
            roles: vec![Role::Mid],
            winrate,
            pick_rate,
            ban_rate: 0.0,
            tier,
            damage_profile: DamageProfile {
                ad: 0.5,
                ap: 0.5,
                true_dmg: 0.0,
            },
            durability_score: 5.0,
            engage_score: 5.0,
            peel_score: 5.0,
            cc_score: 5.0,
            scaling_score: 5.0,
            early_game_score: 5.0,
            mobility_score: 5.0,
            healing_score: 5.0,
            shield_score: 5.0,
            waveclear_score: 5.0,
            tags: vec![],
        }
    }

    #[test]
    fn empty_catalog_is_neutral() {
        let context = BaseContext::prepare(&[]);
        let c = champ("ahri", 52.0, 10.0, Tier::S);
        assert_eq!(compute_base_score(&c, 0, &context), 50.0);
    }

    #[test]
    fn tied_winrates_share_the_maximal_rank() {
        let catalog = vec![
            champ("a", 50.0, 10.0, Tier::A),
            champ("b", 50.0, 10.0, Tier::A),
            champ("c", 52.0, 10.0, Tier::A),
        ];
        let context = BaseContext::prepare(&catalog);

        assert_eq!(context.rank_of("a"), 2);
        assert_eq!(context.rank_of("b"), 2);
        assert_eq!(context.rank_of("c"), 3);
    }

    #[test]
    fn top_champion_with_median_pick_rate_scores_100() {
        let catalog = vec![champ("solo", 55.0, 10.0, Tier::SPlus)];
        let context = BaseContext::prepare(&catalog);

        // percentile 100, tier 100, confidence 100
        assert_eq!(compute_base_score(&catalog[0], 1, &context), 100.0);
    }

    #[test]
    fn pick_rate_confidence_is_capped() {
        let catalog = vec![
            champ("popular", 50.0, 40.0, Tier::B),
            champ("mid", 51.0, 10.0, Tier::B),
            champ("niche", 52.0, 2.0, Tier::B),
        ];
        let context = BaseContext::prepare(&catalog);
        assert_eq!(context.median_pick_rate(), 10.0);

        // 40 / 10 caps at 1.0: confidence term contributes exactly 20
        let score = compute_base_score(&catalog[0], 3, &context);
        let expected = 0.50 * (1.0 / 3.0) * 100.0 + 0.30 * 60.0 + 0.20 * 100.0;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_median_pick_rate_is_floored() {
        let catalog = vec![
            champ("a", 50.0, 0.0, Tier::C),
            champ("b", 51.0, 0.0, Tier::C),
        ];
        let context = BaseContext::prepare(&catalog);
        assert_eq!(context.median_pick_rate(), 1.0);
    }

    #[test]
    fn rank_table_matches_pairwise_definition() {
        let catalog = vec![
            champ("a", 48.5, 5.0, Tier::B),
            champ("b", 51.0, 8.0, Tier::A),
            champ("c", 51.0, 3.0, Tier::A),
            champ("d", 53.5, 12.0, Tier::S),
            champ("e", 47.0, 1.0, Tier::D),
        ];
        let context = BaseContext::prepare(&catalog);

        for c in &catalog {
            let pairwise = catalog.iter().filter(|o| o.winrate <= c.winrate).count();
            assert_eq!(context.rank_of(&c.id), pairwise, "rank mismatch for {}", c.id);
        }
    }
}
