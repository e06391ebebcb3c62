use serde::{Deserialize, Serialize};

use crate::game::Action;
use crate::model::{LANE_COUNT, Lane};
use crate::traits::input::KeyEvent;

/// Serializable key code representation using string names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SerializableKeyCode(pub String);

impl SerializableKeyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Keyboard bindings for the four lanes, indexed by `Lane::index()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyBindings {
    pub lanes: [SerializableKeyCode; LANE_COUNT],
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            lanes: [
                SerializableKeyCode::new("KeyH"),
                SerializableKeyCode::new("KeyJ"),
                SerializableKeyCode::new("KeyK"),
                SerializableKeyCode::new("KeyL"),
            ],
        }
    }
}

impl KeyBindings {
    /// Lane bound to a key code, if any.
    pub fn lane_for(&self, code: &str) -> Option<Lane> {
        self.lanes
            .iter()
            .position(|k| k.as_str() == code)
            .and_then(Lane::from_index)
    }

    /// Map a raw event to a lane press. Releases, repeats and unbound keys
    /// give `None`.
    pub fn map(&self, event: &KeyEvent) -> Option<Action> {
        if !event.pressed || event.repeat {
            return None;
        }
        let lane = self.lane_for(&event.code)?;
        Some(Action::KeyPress {
            lane,
            at_ms: event.time_ms,
        })
    }

    pub fn key_for(&self, lane: Lane) -> &str {
        self.lanes[lane.index()].as_str()
    }

    /// Rebind a lane. Fails if the key is already bound to another lane.
    pub fn bind(&mut self, lane: Lane, code: impl Into<String>) -> Result<(), String> {
        let code = code.into();
        if let Some(existing) = self.lane_for(&code)
            && existing != lane
        {
            return Err(format!("{code} is already bound to {existing:?}"));
        }
        self.lanes[lane.index()] = SerializableKeyCode(code);
        Ok(())
    }
}
