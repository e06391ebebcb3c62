use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::game::{Action, PlayResult};

/// Current replay format version.
pub const REPLAY_VERSION: u32 = 1;

/// Score summary stored alongside the action log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayScore {
    pub score: u64,
    pub max_combo: u32,
    pub perfect_count: u32,
    pub great_count: u32,
    pub good_count: u32,
    pub miss_count: u32,
    pub empty_press_count: u32,
    pub expired_count: u32,
}

impl From<&PlayResult> for ReplayScore {
    fn from(result: &PlayResult) -> Self {
        Self {
            score: result.score,
            max_combo: result.max_combo,
            perfect_count: result.perfect_count,
            great_count: result.great_count,
            good_count: result.good_count,
            miss_count: result.miss_count,
            empty_press_count: result.empty_press_count,
            expired_count: result.expired_count,
        }
    }
}

/// Replay data for a play session: every action the game consumed, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayData {
    pub version: u32,
    /// SHA-256 of the chart the replay was recorded on.
    pub chart_sha256: String,
    pub hit_window_ms: f64,
    pub tick_period_ms: u64,
    pub actions: Vec<Action>,
    #[serde(default)]
    pub score: ReplayScore,
}

impl ReplayData {
    pub fn new(chart_sha256: String, hit_window_ms: f64, tick_period_ms: u64) -> Self {
        Self {
            version: REPLAY_VERSION,
            chart_sha256,
            hit_window_ms,
            tick_period_ms,
            actions: Vec::new(),
            score: ReplayScore::default(),
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| anyhow!("JSON serialization error: {e}"))
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: Self =
            serde_json::from_str(json).map_err(|e| anyhow!("JSON deserialization error: {e}"))?;
        if data.version > REPLAY_VERSION {
            return Err(anyhow!(
                "unsupported replay version {} (newest supported: {REPLAY_VERSION})",
                data.version
            ));
        }
        Ok(data)
    }
}
