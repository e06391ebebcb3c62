use anyhow::Result;

use crate::game::{LiveNote, NotePhase};
use crate::model::{Lane, NoteId, Vector};

/// Visual attributes of one note proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyAttrs {
    pub lane: Lane,
    pub position: Vector,
    pub phase: NotePhase,
    pub instrument: String,
    pub velocity: f64,
    pub user_played: bool,
}

impl ProxyAttrs {
    pub fn from_live(entity: &LiveNote) -> Self {
        Self {
            lane: entity.note.lane,
            position: entity.position,
            phase: entity.phase,
            instrument: entity.note.instrument.clone(),
            velocity: entity.note.velocity,
            user_played: entity.note.user_played,
        }
    }
}

/// Abstraction over the visual surface notes are drawn on.
/// Implementations: TracingTarget (headless), RecordingTarget (testing).
pub trait RenderTarget {
    /// Create the proxy for `id` if missing, then apply `attrs`.
    fn upsert(&mut self, id: NoteId, attrs: &ProxyAttrs) -> Result<()>;

    /// Remove the proxy for `id`. Removing an absent proxy is a no-op.
    fn remove(&mut self, id: NoteId) -> Result<()>;
}
