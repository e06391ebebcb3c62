use serde::{Deserialize, Serialize};

/// Total number of lanes on the playfield.
pub const LANE_COUNT: usize = 4;

/// Represents a lane in the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Lane {
    Lane0,
    Lane1,
    Lane2,
    Lane3,
}

impl Lane {
    /// Returns all lanes in order.
    pub fn all() -> &'static [Lane] {
        &[Lane::Lane0, Lane::Lane1, Lane::Lane2, Lane::Lane3]
    }

    /// Returns the lane index (0-based).
    pub fn index(self) -> usize {
        match self {
            Lane::Lane0 => 0,
            Lane::Lane1 => 1,
            Lane::Lane2 => 2,
            Lane::Lane3 => 3,
        }
    }

    /// Create a lane from a 0-based index.
    pub fn from_index(index: usize) -> Option<Lane> {
        match index {
            0 => Some(Lane::Lane0),
            1 => Some(Lane::Lane1),
            2 => Some(Lane::Lane2),
            3 => Some(Lane::Lane3),
            _ => None,
        }
    }

    /// Map a pitch to its lane by pitch class.
    pub fn from_pitch(pitch: i32) -> Lane {
        match pitch.rem_euclid(LANE_COUNT as i32) {
            0 => Lane::Lane0,
            1 => Lane::Lane1,
            2 => Lane::Lane2,
            _ => Lane::Lane3,
        }
    }
}

/// Identifier of a note, unique within its chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(pub u32);

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "note-{}", self.0)
    }
}

/// A single note in the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub lane: Lane,
    pub instrument: String,
    pub velocity: f64,
    pub pitch: i32,
    /// Whether the note belongs to the player's part.
    pub user_played: bool,
    pub start_time_ms: f64,
    /// Travel time from spawn to the hit line.
    pub duration_ms: f64,
}

impl Note {
    /// Create a player note with neutral instrument metadata.
    pub fn new(id: u32, lane: Lane, start_time_ms: f64, duration_ms: f64) -> Self {
        Self {
            id: NoteId(id),
            lane,
            instrument: String::new(),
            velocity: 0.0,
            pitch: lane.index() as i32,
            user_played: true,
            start_time_ms,
            duration_ms,
        }
    }

    /// The instant the note reaches the hit line.
    pub fn hit_time_ms(&self) -> f64 {
        self.start_time_ms + self.duration_ms
    }

    /// Returns true if the note has no usable travel duration.
    pub fn is_degenerate(&self) -> bool {
        !(self.duration_ms.is_finite() && self.duration_ms > 0.0)
    }
}
