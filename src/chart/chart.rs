use std::fmt;
use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::model::{LANE_COUNT, Note, NoteId};

/// Parsed, ordered sequence of notes for one song.
#[derive(Debug, Clone)]
pub struct Chart {
    pub notes: Vec<Arc<Note>>,
    /// Notes that cannot travel (zero or negative duration).
    pub warnings: Vec<DegenerateNoteWarning>,
    /// SHA-256 of the chart source, hex encoded.
    pub sha256: String,
}

/// A loaded note whose duration is zero or negative.
#[derive(Debug, Clone, PartialEq)]
pub struct DegenerateNoteWarning {
    pub id: NoteId,
    /// Source line, when the note came from a file.
    pub line: Option<usize>,
    pub duration_ms: f64,
}

impl fmt::Display for DegenerateNoteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "{} (line {}) has non-positive duration {}ms",
                self.id, line, self.duration_ms
            ),
            None => write!(
                f,
                "{} has non-positive duration {}ms",
                self.id, self.duration_ms
            ),
        }
    }
}

impl Chart {
    /// Build a chart directly from notes (fixtures, generated charts).
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let sha256 = fingerprint(&notes);
        let warnings = notes
            .iter()
            .filter(|n| n.is_degenerate())
            .map(|n| DegenerateNoteWarning {
                id: n.id,
                line: None,
                duration_ms: n.duration_ms,
            })
            .collect();

        Self {
            notes: notes.into_iter().map(Arc::new).collect(),
            warnings,
            sha256,
        }
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Number of notes in the player's part.
    pub fn user_note_count(&self) -> usize {
        self.notes.iter().filter(|n| n.user_played).count()
    }

    pub fn lane_counts(&self) -> [usize; LANE_COUNT] {
        let mut counts = [0; LANE_COUNT];
        for note in &self.notes {
            counts[note.lane.index()] += 1;
        }
        counts
    }

    pub fn get(&self, id: NoteId) -> Option<&Arc<Note>> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Latest hit instant in the chart (0 for an empty chart).
    pub fn end_time_ms(&self) -> f64 {
        self.notes
            .iter()
            .map(|n| n.hit_time_ms().max(n.start_time_ms))
            .filter(|t| t.is_finite())
            .fold(0.0, f64::max)
    }
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn fingerprint(notes: &[Note]) -> String {
    let canonical: String = notes
        .iter()
        .map(|note| {
            format!(
                "{},{},{},{},{}\n",
                note.id.0,
                note.lane.index(),
                note.instrument,
                note.start_time_ms,
                note.duration_ms
            )
        })
        .collect();
    sha256_hex(canonical.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Lane;

    fn sample() -> Chart {
        Chart::from_notes(vec![
            Note::new(1, Lane::Lane0, 0.0, 1000.0),
            Note::new(2, Lane::Lane1, 500.0, 1000.0),
            Note::new(3, Lane::Lane1, 800.0, 0.0),
        ])
    }

    #[test]
    fn degenerate_notes_are_reported() {
        let chart = sample();
        assert_eq!(chart.warnings.len(), 1);
        assert_eq!(chart.warnings[0].id, NoteId(3));
        assert!(chart.warnings[0].to_string().contains("note-3"));
    }

    #[test]
    fn lane_counts_and_end_time() {
        let chart = sample();
        assert_eq!(chart.lane_counts(), [1, 2, 0, 0]);
        assert!((chart.end_time_ms() - 1500.0).abs() < f64::EPSILON);
        assert!(chart.get(NoteId(2)).is_some());
        assert!(chart.get(NoteId(9)).is_none());
    }

    #[test]
    fn fingerprint_is_stable() {
        assert_eq!(sample().sha256, sample().sha256);
        assert_eq!(sample().sha256.len(), 64);
    }

    #[test]
    fn sha256_hex_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
