use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The 5 static roles on a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Baron,
    Jungle,
    Mid,
    Dragon,
    Support,
}

/// Fixed role order used everywhere the engine iterates over slots.
/// Keeping this order stable is what makes scoring deterministic.
pub const ALL_ROLES: [Role; 5] = [
    Role::Baron,
    Role::Jungle,
    Role::Mid,
    Role::Dragon,
    Role::Support,
];

impl Role {
    pub fn from_label(label: &str) -> Option<Role> {
        match label {
            "baron" => Some(Role::Baron),
            "jungle" => Some(Role::Jungle),
            "mid" => Some(Role::Mid),
            "dragon" => Some(Role::Dragon),
            "support" => Some(Role::Support),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Baron => "baron",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Dragon => "dragon",
            Role::Support => "support",
        }
    }
}

/// Champion tier rankings, as published by the stats site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "S+")]
    SPlus,
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    /// Numeric score for the base component (S+ highest).
    pub fn score(&self) -> f64 {
        match self {
            Tier::SPlus => 100.0,
            Tier::S => 90.0,
            Tier::A => 75.0,
            Tier::B => 60.0,
            Tier::C => 45.0,
            Tier::D => 30.0,
        }
    }
}

/// Gameplay tags used for synergy, composition, and threat analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChampionTag {
    Engage,
    Poke,
    Dive,
    Peel,
    Frontline,
    Hypercarry,
    Burst,
    Sustain,
    Scaling,
    Early,
    Splitpush,
    Antiheal,
    #[serde(rename = "cc-heavy")]
    CcHeavy,
    Waveclear,
    Assassin,
    Shield,
}

/// Damage type distribution (each value 0–1, fractions sum to ~1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageProfile {
    pub ad: f64,
    pub ap: f64,
    #[serde(rename = "true")]
    pub true_dmg: f64,
}

/// A selectable champion with meta statistics and derived attribute
/// scores (0–10). Produced by the external data pipeline; the engine
/// treats it as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Champion {
    pub id: String,
    pub name: String,
    pub roles: Vec<Role>,
    /// Win rate percentage (0–100)
    pub winrate: f64,
    /// Pick rate percentage (0–100)
    pub pick_rate: f64,
    /// Ban rate percentage (0–100)
    pub ban_rate: f64,
    pub tier: Tier,
    pub damage_profile: DamageProfile,
    pub durability_score: f64,
    pub engage_score: f64,
    pub peel_score: f64,
    pub cc_score: f64,
    pub scaling_score: f64,
    pub early_game_score: f64,
    pub mobility_score: f64,
    pub healing_score: f64,
    pub shield_score: f64,
    pub waveclear_score: f64,
    pub tags: Vec<ChampionTag>,
}

impl Champion {
    pub fn has_tag(&self, tag: ChampionTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn plays_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Categorical matchup labels from the stats site, mapped to signed
/// advantage values when the counter matrix is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchupCategory {
    #[serde(rename = "Extreme Advantage")]
    ExtremeAdvantage,
    #[serde(rename = "Major Advantage")]
    MajorAdvantage,
    #[serde(rename = "Minor Advantage")]
    MinorAdvantage,
    #[serde(rename = "Even")]
    Even,
    #[serde(rename = "Minor Disadvantage")]
    MinorDisadvantage,
    #[serde(rename = "Major Disadvantage")]
    MajorDisadvantage,
    #[serde(rename = "Extreme Disadvantage")]
    ExtremeDisadvantage,
}

impl MatchupCategory {
    /// Signed advantage value in [-5, +5].
    pub fn value(&self) -> f64 {
        match self {
            MatchupCategory::ExtremeAdvantage => 5.0,
            MatchupCategory::MajorAdvantage => 3.0,
            MatchupCategory::MinorAdvantage => 1.0,
            MatchupCategory::Even => 0.0,
            MatchupCategory::MinorDisadvantage => -1.0,
            MatchupCategory::MajorDisadvantage => -3.0,
            MatchupCategory::ExtremeDisadvantage => -5.0,
        }
    }
}

/// Sparse pairwise advantage matrix: champion id → opponent id → value.
/// Missing entries are neutral (0).
#[derive(Debug, Clone, Default)]
pub struct CounterMatrix {
    entries: HashMap<String, HashMap<String, f64>>,
}

impl CounterMatrix {
    pub fn new() -> Self {
        CounterMatrix {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, champion_id: &str, opponent_id: &str, value: f64) {
        self.entries
            .entry(champion_id.to_string())
            .or_default()
            .insert(opponent_id.to_string(), value);
    }

    /// Advantage of `champion_id` over `opponent_id`; 0 when unknown.
    pub fn advantage(&self, champion_id: &str, opponent_id: &str) -> f64 {
        self.entries
            .get(champion_id)
            .and_then(|m| m.get(opponent_id))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which side the recommendation is being computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Ally,
    Enemy,
}

/// Five optional role slots for one side of the draft.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TeamState {
    pub baron: Option<String>,
    pub jungle: Option<String>,
    pub mid: Option<String>,
    pub dragon: Option<String>,
    pub support: Option<String>,
}

impl TeamState {
    pub fn slot(&self, role: Role) -> Option<&str> {
        match role {
            Role::Baron => self.baron.as_deref(),
            Role::Jungle => self.jungle.as_deref(),
            Role::Mid => self.mid.as_deref(),
            Role::Dragon => self.dragon.as_deref(),
            Role::Support => self.support.as_deref(),
        }
    }

    pub fn set_slot(&mut self, role: Role, champion_id: String) {
        let slot = match role {
            Role::Baron => &mut self.baron,
            Role::Jungle => &mut self.jungle,
            Role::Mid => &mut self.mid,
            Role::Dragon => &mut self.dragon,
            Role::Support => &mut self.support,
        };
        *slot = Some(champion_id);
    }

    /// Champion ids of filled slots, in fixed role order.
    pub fn picked_ids(&self) -> Vec<&str> {
        ALL_ROLES.iter().filter_map(|r| self.slot(*r)).collect()
    }

    pub fn picks(&self) -> usize {
        ALL_ROLES.iter().filter(|r| self.slot(**r).is_some()).count()
    }
}

/// Snapshot of the whole draft: role slots and bans per side.
/// The engine only reads slot occupancy; bans are the caller's concern
/// when building the candidate pool.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftState {
    pub ally: TeamState,
    pub enemy: TeamState,
    pub ally_bans: Vec<String>,
    pub enemy_bans: Vec<String>,
}

impl DraftState {
    pub fn total_picks(&self) -> usize {
        self.ally.picks() + self.enemy.picks()
    }
}
