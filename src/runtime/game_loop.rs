use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::game::{GameState, Reducer, sort_actions};
use crate::render::RenderSink;
use crate::replay::ReplayRecorder;
use crate::traits::render::RenderTarget;

use super::ActionReceiver;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every note left play.
    Ended,
    /// All producers hung up first.
    Disconnected,
}

/// The single consumer of the action queue.
///
/// Owns the only mutable copy of the game state while running: each batch of
/// queued actions is ordered, reduced one by one, and mirrored to the sink.
pub struct GameLoop<T: RenderTarget> {
    reducer: Reducer,
    sink: RenderSink<T>,
    recorder: Option<ReplayRecorder>,
    stop_reason: Option<StopReason>,
}

impl<T: RenderTarget> GameLoop<T> {
    pub fn new(reducer: Reducer, target: T) -> Self {
        Self {
            reducer,
            sink: RenderSink::new(target),
            recorder: None,
            stop_reason: None,
        }
    }

    /// Record every reduced action into `recorder`.
    pub fn with_recorder(mut self, recorder: ReplayRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn sink(&self) -> &RenderSink<T> {
        &self.sink
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn take_recorder(&mut self) -> Option<ReplayRecorder> {
        self.recorder.take()
    }

    pub fn into_sink(self) -> RenderSink<T> {
        self.sink
    }

    /// Fold the queue into `initial` until the game ends or the producers
    /// disconnect, then tear the sink down.
    pub fn run(&mut self, receiver: &ActionReceiver, initial: GameState) -> Result<GameState> {
        info!(notes = initial.live_count(), "Game loop started");
        let folded = self.fold_queue(receiver, initial);
        let teardown = self
            .sink
            .teardown()
            .context("Failed to tear down render proxies");

        let state = folded?;
        teardown?;
        info!(
            reason = ?self.stop_reason,
            score = state.score.score,
            time_ms = state.time_ms,
            "Game loop finished"
        );
        Ok(state)
    }

    fn fold_queue(&mut self, receiver: &ActionReceiver, initial: GameState) -> Result<GameState> {
        let mut state = initial;
        self.sink
            .present(&state)
            .context("Failed to present initial state")?;

        while let Some(mut batch) = receiver.next_batch() {
            sort_actions(&mut batch);
            debug!(size = batch.len(), "Reducing batch");

            for action in &batch {
                state = self.reducer.reduce(state, action);
                if let Some(recorder) = self.recorder.as_mut() {
                    recorder.record(*action);
                }
                self.sink
                    .present(&state)
                    .context("Failed to present game state")?;

                if state.ended {
                    self.stop_reason = Some(StopReason::Ended);
                    return Ok(state);
                }
            }
        }

        self.stop_reason = Some(StopReason::Disconnected);
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::game::Action;
    use crate::model::{Lane, Note};
    use crate::render::{RecordingTarget, RenderCommand};
    use crate::runtime::action_queue;

    fn chart() -> Chart {
        Chart::from_notes(vec![
            Note::new(1, Lane::Lane0, 1000.0, 2000.0),
            Note::new(2, Lane::Lane1, 1000.0, 2000.0),
        ])
    }

    #[test]
    fn batch_is_ordered_before_reduction() {
        let chart = chart();
        let reducer = Reducer::default();
        let (tx, rx) = action_queue();

        // Arrival order puts the expiring tick ahead of the press.
        tx.send(Action::Tick { elapsed_ms: 1000.0 });
        tx.send(Action::Tick { elapsed_ms: 3050.0 });
        tx.send(Action::KeyPress {
            lane: Lane::Lane0,
            at_ms: 3050.0,
        });
        tx.send(Action::Tick { elapsed_ms: 4000.0 });
        drop(tx);

        let mut game = GameLoop::new(reducer.clone(), RecordingTarget::new())
            .with_recorder(ReplayRecorder::new(chart.sha256.clone(), 50.0, 500));
        let state = game.run(&rx, reducer.initial_state(&chart)).unwrap();

        assert_eq!(state.score.hit_count(), 1);
        assert_eq!(state.score.miss_count, 1);
        assert!(state.ended);
        assert_eq!(game.stop_reason(), Some(StopReason::Ended));

        let data = game.take_recorder().unwrap().into_replay_data();
        assert_eq!(data.actions.len(), 4);
        assert!(matches!(data.actions[1], Action::KeyPress { .. }));
    }

    #[test]
    fn disconnect_stops_and_tears_down() {
        let chart = chart();
        let reducer = Reducer::default();
        let (tx, rx) = action_queue();
        tx.send(Action::Tick { elapsed_ms: 1500.0 });
        drop(tx);

        let mut game = GameLoop::new(reducer.clone(), RecordingTarget::new());
        let state = game.run(&rx, reducer.initial_state(&chart)).unwrap();

        assert!(!state.ended);
        assert_eq!(state.live_count(), 2);
        assert_eq!(game.stop_reason(), Some(StopReason::Disconnected));

        let sink = game.into_sink();
        assert!(sink.target().is_empty());
        let removals = sink
            .target()
            .commands()
            .iter()
            .filter(|c| matches!(c, RenderCommand::Remove(_)))
            .count();
        assert_eq!(removals, 2);
    }
}
