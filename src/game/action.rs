use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::Lane;

/// A discrete input to the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Clock tick carrying absolute elapsed time since game start.
    Tick { elapsed_ms: f64 },
    /// Lane key pressed at an absolute time.
    KeyPress { lane: Lane, at_ms: f64 },
}

impl Action {
    pub fn time_ms(&self) -> f64 {
        match *self {
            Action::Tick { elapsed_ms } => elapsed_ms,
            Action::KeyPress { at_ms, .. } => at_ms,
        }
    }

    /// Tie-break rank at equal timestamps: key presses go first so a hit at
    /// the instant of expiry is judged rather than missed.
    pub fn priority(&self) -> u8 {
        match self {
            Action::KeyPress { .. } => 0,
            Action::Tick { .. } => 1,
        }
    }

    pub fn cmp_order(a: &Action, b: &Action) -> Ordering {
        a.time_ms()
            .total_cmp(&b.time_ms())
            .then_with(|| a.priority().cmp(&b.priority()))
    }
}

/// Stable sort into reduction order.
pub fn sort_actions(actions: &mut [Action]) {
    actions.sort_by(Action::cmp_order);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_press_precedes_tick_at_same_instant() {
        let mut actions = vec![
            Action::Tick { elapsed_ms: 500.0 },
            Action::KeyPress {
                lane: Lane::Lane1,
                at_ms: 500.0,
            },
            Action::Tick { elapsed_ms: 0.0 },
        ];
        sort_actions(&mut actions);

        assert_eq!(actions[0], Action::Tick { elapsed_ms: 0.0 });
        assert!(matches!(actions[1], Action::KeyPress { .. }));
        assert_eq!(actions[2], Action::Tick { elapsed_ms: 500.0 });
    }

    #[test]
    fn sort_is_stable_for_equal_presses() {
        let mut actions = vec![
            Action::KeyPress {
                lane: Lane::Lane3,
                at_ms: 100.0,
            },
            Action::KeyPress {
                lane: Lane::Lane0,
                at_ms: 100.0,
            },
        ];
        sort_actions(&mut actions);
        assert!(matches!(actions[0], Action::KeyPress { lane: Lane::Lane3, .. }));
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_string(&Action::Tick { elapsed_ms: 500.0 }).unwrap();
        assert_eq!(json, r#"{"type":"tick","elapsed_ms":500.0}"#);

        let parsed: Action =
            serde_json::from_str(r#"{"type":"key_press","lane":"Lane2","at_ms":10.0}"#).unwrap();
        assert_eq!(
            parsed,
            Action::KeyPress {
                lane: Lane::Lane2,
                at_ms: 10.0
            }
        );
    }
}
