use std::path::PathBuf;

use crate::error::AppError;

/// Resolved locations of the two data snapshots.
#[derive(Debug, Clone)]
pub struct Config {
    pub champions_path: PathBuf,
    pub counters_path: PathBuf,
}

impl Config {
    /// Resolve snapshot paths: an explicit flag wins, otherwise fall
    /// back to the platform data directory where the sync pipeline
    /// drops its files.
    pub fn resolve(
        champions: Option<PathBuf>,
        counters: Option<PathBuf>,
    ) -> Result<Self, AppError> {
        let champions_path = match champions {
            Some(path) => path,
            None => default_snapshot("champions.json")?,
        };
        let counters_path = match counters {
            Some(path) => path,
            None => default_snapshot("counters.json")?,
        };

        Ok(Config {
            champions_path,
            counters_path,
        })
    }
}

fn default_snapshot(file: &str) -> Result<PathBuf, AppError> {
    let dir = dirs::data_dir().ok_or_else(|| {
        AppError::ConfigError("could not determine the platform data directory".to_string())
    })?;
    let path = dir.join("draft_assist").join(file);
    if !path.exists() {
        return Err(AppError::ConfigError(format!(
            "{} not found; pass --data/--counters or place snapshots in {}",
            file,
            path.parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )));
    }
    Ok(path)
}
