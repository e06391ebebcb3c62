use tracing::trace;

use crate::chart::Chart;
use crate::config::GameConfig;
use crate::model::{Lane, Playfield};

use super::{Action, GameState, JudgeGrade, JudgeSystem, Judgement, LiveNote, NotePhase};

/// Pure state transition function for the game.
///
/// `reduce` has no hidden state: the same state and action always produce the
/// same next state, so a recorded action stream can be re-folded for replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reducer {
    judge: JudgeSystem,
    playfield: Playfield,
}

impl Reducer {
    pub fn new(judge: JudgeSystem, playfield: Playfield) -> Self {
        Self { judge, playfield }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            JudgeSystem::new(config.judge.clone()),
            config.playfield.clone(),
        )
    }

    pub fn judge(&self) -> &JudgeSystem {
        &self.judge
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn initial_state(&self, chart: &Chart) -> GameState {
        GameState::new(chart, &self.playfield)
    }

    pub fn reduce(&self, state: GameState, action: &Action) -> GameState {
        match *action {
            Action::Tick { elapsed_ms } => self.tick(state, elapsed_ms),
            Action::KeyPress { lane, at_ms } => self.key_press(state, lane, at_ms),
        }
    }

    /// Fold a sequence of actions from `state`.
    pub fn fold<'a, I>(&self, state: GameState, actions: I) -> GameState
    where
        I: IntoIterator<Item = &'a Action>,
    {
        actions
            .into_iter()
            .fold(state, |state, action| self.reduce(state, action))
    }

    fn tick(&self, mut state: GameState, elapsed_ms: f64) -> GameState {
        // Ticks carry absolute time; never let it run backwards.
        let now = if elapsed_ms.is_nan() {
            state.time_ms
        } else {
            elapsed_ms.max(state.time_ms)
        };

        state.exited.clear();
        let mut remaining = Vec::with_capacity(state.live_notes.len());

        for entity in std::mem::take(&mut state.live_notes) {
            if entity.note.is_degenerate() {
                trace!(note = %entity.id(), "Expiring degenerate note");
                state.score.add_expired();
                state.exited.push(entity.transition(NotePhase::Expired));
                continue;
            }

            let mut entity = if entity.phase == NotePhase::Pending && entity.note.start_time_ms <= now
            {
                entity.transition(NotePhase::Active)
            } else {
                entity
            };

            if entity.phase != NotePhase::Active {
                remaining.push(entity);
                continue;
            }

            if self.judge.is_missed(now - entity.note.hit_time_ms()) {
                trace!(note = %entity.id(), time_ms = now, "Note missed");
                state.score.add_miss();
                state.last_judgement = Some(Judgement::Missed { note: entity.id() });
                entity.position = self.playfield.position_at(&entity.note, now);
                state.exited.push(entity.transition(NotePhase::Missed));
                continue;
            }

            entity.position = self.playfield.position_at(&entity.note, now);
            remaining.push(entity);
        }

        state.live_notes = remaining;
        state.time_ms = now;
        state.ended = state.ended || state.live_notes.is_empty();
        state
    }

    fn key_press(&self, mut state: GameState, lane: Lane, at_ms: f64) -> GameState {
        state.exited.clear();

        // live_notes is ordered by start time, so the first eligible note is
        // the earliest-scheduled one.
        let target = state
            .live_notes
            .iter()
            .enumerate()
            .find_map(|(index, entity)| {
                self.grade_press(entity, lane, at_ms)
                    .map(|grade| (index, grade))
            });

        match target {
            Some((index, grade)) => {
                let mut entity = state.live_notes.remove(index);
                if entity.phase == NotePhase::Pending {
                    entity = entity.transition(NotePhase::Active);
                }
                let timing_diff_ms = at_ms - entity.note.hit_time_ms();
                let points = state.score.add_hit(grade);
                state.timing.record(grade, timing_diff_ms);
                state.last_judgement = Some(Judgement::Hit {
                    note: entity.id(),
                    grade,
                    timing_diff_ms,
                    points,
                });
                trace!(note = %entity.id(), ?grade, timing_diff_ms, points, "Note hit");

                entity.position = self.playfield.position_at(&entity.note, at_ms);
                state.exited.push(entity.transition(NotePhase::Hit));
                state.ended = state.ended || state.live_notes.is_empty();
            }
            None => {
                trace!(?lane, at_ms, "Press matched no note");
                state.score.add_empty_press();
                state.last_judgement = Some(Judgement::EmptyPress);
            }
        }

        state
    }

    /// Grade a press against one entity, or `None` if it is not eligible.
    ///
    /// A pending note whose start has been reached counts as active: a press
    /// can arrive before the tick that would activate it.
    fn grade_press(&self, entity: &LiveNote, lane: Lane, at_ms: f64) -> Option<JudgeGrade> {
        let note = &entity.note;
        if note.lane != lane || note.is_degenerate() {
            return None;
        }
        let reached = match entity.phase {
            NotePhase::Active => true,
            NotePhase::Pending => note.start_time_ms <= at_ms,
            _ => false,
        };
        if !reached {
            return None;
        }
        self.judge.judge(at_ms - note.hit_time_ms())
    }
}
