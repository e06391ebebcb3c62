use anyhow::{Result, bail};
use tracing::{info, warn};

use super::replay_data::{ReplayData, ReplayScore};
use crate::chart::Chart;
use crate::game::{Action, GameState, PlayResult, Reducer};
use crate::runtime::run_to_end;

/// Re-fold a recorded action log from `initial`.
pub fn replay_actions(reducer: &Reducer, initial: GameState, actions: &[Action]) -> GameState {
    run_to_end(reducer, initial, actions).0
}

/// Replays a recording against a chart and checks it reproduces the stored score.
pub struct ReplayPlayer {
    data: ReplayData,
}

impl ReplayPlayer {
    pub fn new(data: ReplayData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &ReplayData {
        &self.data
    }

    /// Fail if the replay was recorded on another chart or hit window.
    pub fn validate(&self, chart: &Chart, reducer: &Reducer) -> Result<()> {
        if self.data.chart_sha256 != chart.sha256 {
            bail!(
                "replay chart {} does not match loaded chart {}",
                self.data.chart_sha256,
                chart.sha256
            );
        }
        let window = reducer.judge().hit_window_ms();
        if (self.data.hit_window_ms - window).abs() > f64::EPSILON {
            bail!(
                "replay hit window {} ms differs from configured {} ms",
                self.data.hit_window_ms,
                window
            );
        }
        Ok(())
    }

    pub fn play(&self, chart: &Chart, reducer: &Reducer) -> Result<GameState> {
        self.validate(chart, reducer)?;
        Ok(replay_actions(
            reducer,
            reducer.initial_state(chart),
            &self.data.actions,
        ))
    }

    /// Play the replay and compare the result with the recorded score.
    ///
    /// Returns the final state alongside its result so callers need not fold
    /// the actions a second time.
    pub fn verify(&self, chart: &Chart, reducer: &Reducer) -> Result<(GameState, PlayResult)> {
        let state = self.play(chart, reducer)?;
        let result = PlayResult::from_state(chart, &state);
        let replayed = ReplayScore::from(&result);
        if replayed != self.data.score {
            warn!(
                recorded = self.data.score.score,
                replayed = replayed.score,
                "Replay score mismatch"
            );
            bail!("replay does not reproduce its recorded score");
        }
        info!(actions = self.data.actions.len(), score = result.score, "Replay verified");
        Ok((state, result))
    }
}
