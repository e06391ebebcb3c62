use serde::{Deserialize, Serialize};

use super::note::{LANE_COUNT, Lane, Note};
use super::vector::Vector;

/// Screen geometry of the four-lane play area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    /// Horizontal centre of each lane, indexed by `Lane::index()`.
    pub lane_x: [f64; LANE_COUNT],
    /// Where notes appear.
    pub spawn_y: f64,
    /// Where notes must be hit.
    pub hit_line_y: f64,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            lane_x: [40.0, 80.0, 120.0, 160.0],
            spawn_y: 0.0,
            hit_line_y: 350.0,
        }
    }
}

impl Playfield {
    /// Spawn point of a lane.
    pub fn origin(&self, lane: Lane) -> Vector {
        Vector::new(self.lane_x[lane.index()], self.spawn_y)
    }

    /// Full travel from spawn to the hit line.
    pub fn travel(&self) -> Vector {
        Vector::new(0.0, self.hit_line_y - self.spawn_y)
    }

    /// Position of a note at an absolute time.
    ///
    /// Progress is `(time - start) / duration`, so the note sits on the hit line
    /// exactly at its hit time and keeps moving past it afterwards. Notes with no
    /// usable duration stay at their origin.
    pub fn position_at(&self, note: &Note, time_ms: f64) -> Vector {
        let origin = self.origin(note.lane);
        if note.is_degenerate() {
            return origin;
        }
        let progress = ((time_ms - note.start_time_ms) / note.duration_ms).max(0.0);
        origin.add(self.travel().scale(progress))
    }
}
