use crate::chart::Chart;
use crate::model::{NoteId, Playfield};

use super::{JudgeGrade, LiveNote, NotePhase, ScoreManager, TimingStats};

/// Outcome of the most recent judgement, for feedback display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Judgement {
    Hit {
        note: NoteId,
        grade: JudgeGrade,
        /// Press time minus hit time.
        timing_diff_ms: f64,
        points: u64,
    },
    /// A note passed its window unjudged.
    Missed { note: NoteId },
    /// A press matched no note.
    EmptyPress,
}

/// Single authoritative snapshot of a running game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Elapsed ms since game start, as of the last tick.
    pub time_ms: f64,
    /// Pending and active notes ordered by start time, then id.
    pub live_notes: Vec<LiveNote>,
    /// Notes that left play during the last reduction.
    pub exited: Vec<LiveNote>,
    pub score: ScoreManager,
    pub timing: TimingStats,
    pub last_judgement: Option<Judgement>,
    pub ended: bool,
}

impl GameState {
    /// Seed every chart note as pending at its lane origin.
    pub fn new(chart: &Chart, playfield: &Playfield) -> Self {
        let mut live_notes: Vec<LiveNote> = chart
            .notes
            .iter()
            .map(|note| LiveNote::pending(note.clone(), playfield.origin(note.lane)))
            .collect();
        live_notes.sort_by(|a, b| {
            a.note
                .start_time_ms
                .total_cmp(&b.note.start_time_ms)
                .then_with(|| a.note.id.cmp(&b.note.id))
        });

        Self {
            time_ms: 0.0,
            live_notes,
            exited: Vec::new(),
            score: ScoreManager::new(),
            timing: TimingStats::default(),
            last_judgement: None,
            ended: false,
        }
    }

    pub fn live_count(&self) -> usize {
        self.live_notes.len()
    }

    pub fn active_count(&self) -> usize {
        self.live_notes
            .iter()
            .filter(|n| n.phase == NotePhase::Active)
            .count()
    }

    pub fn find_live(&self, id: NoteId) -> Option<&LiveNote> {
        self.live_notes.iter().find(|n| n.id() == id)
    }
}
