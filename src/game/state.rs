use std::sync::Arc;

use crate::model::{Note, NoteId, Vector};

/// Lifecycle of an on-screen note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotePhase {
    Pending,
    Active,
    Hit,
    Missed,
    Expired,
}

impl NotePhase {
    pub fn is_live(self) -> bool {
        matches!(self, Self::Pending | Self::Active)
    }

    pub fn is_terminal(self) -> bool {
        !self.is_live()
    }

    /// Allowed edges: pending -> active -> {hit, missed}, and pending -> expired
    /// for notes that cannot travel.
    pub fn can_transition_to(self, next: NotePhase) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Active)
                | (Self::Pending, Self::Expired)
                | (Self::Active, Self::Hit)
                | (Self::Active, Self::Missed)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Hit => "hit",
            Self::Missed => "missed",
            Self::Expired => "expired",
        }
    }
}

/// A chart note in play.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveNote {
    pub note: Arc<Note>,
    pub position: Vector,
    pub phase: NotePhase,
}

impl LiveNote {
    pub fn pending(note: Arc<Note>, position: Vector) -> Self {
        Self {
            note,
            position,
            phase: NotePhase::Pending,
        }
    }

    pub fn id(&self) -> NoteId {
        self.note.id
    }

    pub(crate) fn transition(mut self, next: NotePhase) -> Self {
        debug_assert!(
            self.phase.can_transition_to(next),
            "illegal transition {:?} -> {:?} for {}",
            self.phase,
            next,
            self.note.id
        );
        self.phase = next;
        self
    }
}
