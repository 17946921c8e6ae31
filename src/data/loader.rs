//! Snapshot loading and validation.
//!
//! The external data pipeline writes two JSON snapshots: the champion
//! catalog and the counter matchup list. Everything is validated here,
//! once, so the scoring engine can assume well-typed inputs and never
//! needs runtime guards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AppError;

use super::models::{Champion, CounterMatrix, MatchupCategory};

/// Champion catalog snapshot as written by the data pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub patch: String,
    pub fetched_at: DateTime<Utc>,
    pub champions: Vec<Champion>,
}

#[derive(Debug, Deserialize)]
struct CounterFile {
    entries: Vec<CounterEntry>,
}

#[derive(Debug, Deserialize)]
struct CounterEntry {
    champion: String,
    opponent: String,
    category: MatchupCategory,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AppError::JsonError {
        path: path.display().to_string(),
        source,
    })
}

/// Load and validate the champion catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, AppError> {
    let catalog: Catalog = read_json(path)?;

    let mut seen_ids = HashSet::new();
    for champion in &catalog.champions {
        validate_champion(champion)?;
        if !seen_ids.insert(champion.id.as_str()) {
            return Err(AppError::InvalidData(format!(
                "duplicate champion id '{}'",
                champion.id
            )));
        }
    }

    Ok(catalog)
}

/// Load the counter matchup snapshot and build the advantage matrix.
/// Duplicate pairs take the last entry; self matchups are rejected.
pub fn load_counters(path: &Path, catalog: &Catalog) -> Result<CounterMatrix, AppError> {
    let file: CounterFile = read_json(path)?;

    let known: HashSet<&str> = catalog.champions.iter().map(|c| c.id.as_str()).collect();
    let mut matrix = CounterMatrix::new();

    for entry in &file.entries {
        if entry.champion == entry.opponent {
            return Err(AppError::InvalidData(format!(
                "self matchup for '{}'",
                entry.champion
            )));
        }
        if !known.contains(entry.champion.as_str()) {
            return Err(AppError::UnknownChampion(entry.champion.clone()));
        }
        if !known.contains(entry.opponent.as_str()) {
            return Err(AppError::UnknownChampion(entry.opponent.clone()));
        }
        matrix.insert(&entry.champion, &entry.opponent, entry.category.value());
    }

    Ok(matrix)
}

fn validate_champion(c: &Champion) -> Result<(), AppError> {
    if c.id.is_empty() {
        return Err(AppError::InvalidData("empty champion id".to_string()));
    }
    if c.roles.is_empty() || c.roles.len() > 3 {
        return Err(AppError::InvalidData(format!(
            "champion '{}' must have 1-3 roles, has {}",
            c.id,
            c.roles.len()
        )));
    }

    for (label, value) in [
        ("winrate", c.winrate),
        ("pickRate", c.pick_rate),
        ("banRate", c.ban_rate),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(AppError::InvalidData(format!(
                "champion '{}': {} {} out of range [0, 100]",
                c.id, label, value
            )));
        }
    }

    let profile = &c.damage_profile;
    for (label, value) in [
        ("ad", profile.ad),
        ("ap", profile.ap),
        ("true", profile.true_dmg),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(AppError::InvalidData(format!(
                "champion '{}': damage fraction {} {} out of range [0, 1]",
                c.id, label, value
            )));
        }
    }
    let total = profile.ad + profile.ap + profile.true_dmg;
    if (total - 1.0).abs() > 0.05 {
        return Err(AppError::InvalidData(format!(
            "champion '{}': damage profile sums to {:.2}, expected 1.0",
            c.id, total
        )));
    }

    for (label, value) in [
        ("durabilityScore", c.durability_score),
        ("engageScore", c.engage_score),
        ("peelScore", c.peel_score),
        ("ccScore", c.cc_score),
        ("scalingScore", c.scaling_score),
        ("earlyGameScore", c.early_game_score),
        ("mobilityScore", c.mobility_score),
        ("healingScore", c.healing_score),
        ("shieldScore", c.shield_score),
        ("waveclearScore", c.waveclear_score),
    ] {
        if !(0.0..=10.0).contains(&value) {
            return Err(AppError::InvalidData(format!(
                "champion '{}': {} {} out of range [0, 10]",
                c.id, label, value
            )));
        }
    }

    Ok(())
}
