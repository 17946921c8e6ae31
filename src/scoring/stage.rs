//! Draft stage detection.
//!
//! Stage transitions by total known picks across both teams:
//!   Early = [0, 2], Mid = [3, 6], Late = [7, 10].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStage {
    Early,
    Mid,
    Late,
}

impl DraftStage {
    pub fn label(&self) -> &'static str {
        match self {
            DraftStage::Early => "Early",
            DraftStage::Mid => "Mid",
            DraftStage::Late => "Late",
        }
    }
}

/// Detect the current draft stage from the count of filled role slots.
pub fn detect_stage(total_picks: usize) -> DraftStage {
    if total_picks <= 2 {
        DraftStage::Early
    } else if total_picks <= 6 {
        DraftStage::Mid
    } else {
        DraftStage::Late
    }
}
