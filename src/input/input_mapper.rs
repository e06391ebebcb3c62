use crate::game::Action;
use crate::model::LANE_COUNT;
use crate::traits::input::KeyEvent;

use super::KeyBindings;

/// Turns raw key events into lane `KeyPress` actions.
///
/// Only the first press of a held key counts. Releases, auto-repeats and
/// unbound keys produce nothing.
#[derive(Debug, Clone)]
pub struct InputMapper {
    bindings: KeyBindings,
    held: [bool; LANE_COUNT],
}

impl InputMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: [false; LANE_COUNT],
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn map(&mut self, event: &KeyEvent) -> Option<Action> {
        let lane = self.bindings.lane_for(&event.code)?;
        let held = &mut self.held[lane.index()];

        if !event.pressed {
            *held = false;
            return None;
        }
        if *held {
            return None;
        }
        let action = self.bindings.map(event)?;
        *held = true;
        Some(action)
    }
}
