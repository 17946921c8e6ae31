//! Risk penalty: team-wide vulnerabilities the candidate would create
//! or worsen.
//!
//! Evaluated on the hypothetical team of locked allies plus the
//! candidate. Inactive below 2 locked allies (too little signal). Each
//! triggered condition adds a fixed penalty; the result is subtracted
//! from the aggregate, never added.

use crate::data::models::{Champion, ChampionTag};

/// Per-member threshold flags that feed the risk conditions.
#[derive(Debug, Clone, Copy, Default)]
struct RiskFlags {
    ad: bool,
    ap: bool,
    frontline: bool,
    engage: bool,
    peel: bool,
    waveclear: bool,
    early: bool,
    scaling: bool,
}

fn member_flags(c: &Champion) -> RiskFlags {
    RiskFlags {
        ad: c.damage_profile.ad > 0.6,
        ap: c.damage_profile.ap > 0.6,
        frontline: c.durability_score >= 7.0,
        engage: c.engage_score >= 6.0,
        peel: c.peel_score >= 5.0,
        waveclear: c.waveclear_score >= 5.0,
        early: c.has_tag(ChampionTag::Early),
        scaling: c.has_tag(ChampionTag::Scaling),
    }
}

/// Shared per-batch context: threshold counts over the locked allies.
#[derive(Debug, Clone, Default)]
pub struct RiskContext {
    n_allies: usize,
    ad: usize,
    ap: usize,
    frontline: usize,
    engage: usize,
    peel: usize,
    waveclear: usize,
    early: usize,
    scaling: usize,
}

impl RiskContext {
    pub fn prepare(allies: &[Champion]) -> Self {
        let mut ctx = RiskContext {
            n_allies: allies.len(),
            ..RiskContext::default()
        };
        for ally in allies {
            let f = member_flags(ally);
            ctx.ad += f.ad as usize;
            ctx.ap += f.ap as usize;
            ctx.frontline += f.frontline as usize;
            ctx.engage += f.engage as usize;
            ctx.peel += f.peel as usize;
            ctx.waveclear += f.waveclear as usize;
            ctx.early += f.early as usize;
            ctx.scaling += f.scaling as usize;
        }
        ctx
    }
}

/// Compute the risk penalty for adding the candidate to the team.
/// Returns 0 below 2 locked allies.
pub fn compute_risk_penalty(champion: &Champion, context: &RiskContext) -> f64 {
    if context.n_allies < 2 {
        return 0.0;
    }

    let f = member_flags(champion);
    let team_size = context.n_allies + 1;
    let ad = context.ad + f.ad as usize;
    let ap = context.ap + f.ap as usize;
    let frontline = context.frontline + f.frontline as usize;
    let engage = context.engage + f.engage as usize;
    let peel = context.peel + f.peel as usize;
    let waveclear = context.waveclear + f.waveclear as usize;
    let early = context.early + f.early as usize;
    let scaling = context.scaling + f.scaling as usize;

    let mut penalty: f64 = 0.0;
    if ad == team_size && team_size >= 3 {
        penalty += 20.0;
    }
    if ap == team_size && team_size >= 3 {
        penalty += 20.0;
    }
    if frontline == 0 && team_size >= 3 {
        penalty += 15.0;
    }
    if engage == 0 && team_size >= 3 {
        penalty += 10.0;
    }
    if peel == 0 && team_size >= 3 {
        penalty += 10.0;
    }
    if waveclear == 0 && team_size >= 3 {
        penalty += 15.0;
    }
    if scaling >= 3 && early == 0 {
        penalty += 10.0;
    }

    penalty.clamp(0.0, 100.0)
}
