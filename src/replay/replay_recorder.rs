//! Replay recorder for capturing consumed actions.

use super::replay_data::{ReplayData, ReplayScore};
use crate::game::{Action, PlayResult};

/// Records every action the game loop reduces.
#[derive(Debug, Clone)]
pub struct ReplayRecorder {
    replay_data: ReplayData,
}

impl ReplayRecorder {
    /// Create a new recorder for the given chart and timing settings.
    pub fn new(chart_sha256: String, hit_window_ms: f64, tick_period_ms: u64) -> Self {
        Self {
            replay_data: ReplayData::new(chart_sha256, hit_window_ms, tick_period_ms),
        }
    }

    pub fn record(&mut self, action: Action) {
        self.replay_data.actions.push(action);
    }

    pub fn extend(&mut self, actions: impl IntoIterator<Item = Action>) {
        self.replay_data.actions.extend(actions);
    }

    pub fn action_count(&self) -> usize {
        self.replay_data.actions.len()
    }

    /// Set the final score data.
    pub fn set_score(&mut self, result: &PlayResult) {
        self.replay_data.score = ReplayScore::from(result);
    }

    /// Take the completed replay data.
    pub fn into_replay_data(self) -> ReplayData {
        self.replay_data
    }
}
