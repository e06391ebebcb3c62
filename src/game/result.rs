use serde::{Deserialize, Serialize};

use super::GameState;
use crate::chart::Chart;

/// Summary of a finished (or abandoned) game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayResult {
    pub chart_sha256: String,
    pub score: u64,
    pub max_combo: u32,
    pub perfect_count: u32,
    pub great_count: u32,
    pub good_count: u32,
    pub miss_count: u32,
    pub empty_press_count: u32,
    pub expired_count: u32,
    pub total_notes: u32,
    pub fast_count: u32,
    pub slow_count: u32,
}

impl PlayResult {
    pub fn from_state(chart: &Chart, state: &GameState) -> Self {
        let score = &state.score;
        Self {
            chart_sha256: chart.sha256.clone(),
            score: score.score,
            max_combo: score.max_combo,
            perfect_count: score.perfect_count,
            great_count: score.great_count,
            good_count: score.good_count,
            miss_count: score.miss_count,
            empty_press_count: score.empty_press_count,
            expired_count: score.expired_count,
            total_notes: chart.note_count() as u32,
            fast_count: state.timing.fast_count,
            slow_count: state.timing.slow_count,
        }
    }

    /// Weighted accuracy over playable notes (degenerate notes excluded).
    pub fn accuracy(&self) -> f64 {
        let playable = self.total_notes.saturating_sub(self.expired_count);
        if playable == 0 {
            return 0.0;
        }
        let earned = self.perfect_count * 3 + self.great_count * 2 + self.good_count;
        earned as f64 / (playable * 3) as f64 * 100.0
    }

    pub fn is_full_combo(&self) -> bool {
        self.miss_count == 0
            && self.empty_press_count == 0
            && self.perfect_count + self.great_count + self.good_count > 0
    }

    pub fn rank(&self) -> &'static str {
        let acc = self.accuracy();
        if acc >= 100.0 {
            "MAX"
        } else if acc >= 95.0 {
            "S"
        } else if acc >= 90.0 {
            "A"
        } else if acc >= 80.0 {
            "B"
        } else if acc >= 70.0 {
            "C"
        } else if acc >= 60.0 {
            "D"
        } else {
            "F"
        }
    }
}
