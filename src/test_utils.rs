//! Test utilities for building notes and charts.
//!
//! This module provides helpers for creating test fixtures in a fluent manner.

pub mod builders {
    use crate::chart::Chart;
    use crate::model::{Lane, Note};

    /// Builder for creating test notes.
    #[derive(Debug, Clone)]
    pub struct NoteBuilder {
        note: Note,
    }

    impl NoteBuilder {
        /// A played note whose hit instant is `start_ms + duration_ms`.
        pub fn played(lane: Lane, start_ms: f64, duration_ms: f64) -> Self {
            Self {
                note: Note::new(0, lane, start_ms, duration_ms),
            }
        }

        /// A note with no travel time.
        pub fn degenerate(lane: Lane, start_ms: f64) -> Self {
            Self::played(lane, start_ms, 0.0)
        }

        pub fn background(mut self) -> Self {
            self.note.user_played = false;
            self
        }

        pub fn build(self, id: u32) -> Note {
            Note { id: crate::model::NoteId(id), ..self.note }
        }
    }

    /// Builder for creating test charts. Ids are assigned in insertion order
    /// starting at 1.
    #[derive(Debug, Default)]
    pub struct ChartBuilder {
        notes: Vec<NoteBuilder>,
    }

    impl ChartBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn note(mut self, note: NoteBuilder) -> Self {
            self.notes.push(note);
            self
        }

        /// One played note per lane, all sharing the same timing.
        pub fn chord(mut self, start_ms: f64, duration_ms: f64) -> Self {
            for &lane in Lane::all() {
                self.notes
                    .push(NoteBuilder::played(lane, start_ms, duration_ms));
            }
            self
        }

        pub fn build(self) -> Chart {
            let notes = self
                .notes
                .into_iter()
                .enumerate()
                .map(|(i, b)| b.build(i as u32 + 1))
                .collect();
            Chart::from_notes(notes)
        }
    }
}
