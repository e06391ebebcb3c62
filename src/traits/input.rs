use serde::{Deserialize, Serialize};

/// Raw key event from an input device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Physical key code name (e.g. "KeyH").
    pub code: String,
    /// true = pressed, false = released.
    pub pressed: bool,
    /// OS auto-repeat while held.
    #[serde(default)]
    pub repeat: bool,
    /// Timestamp in milliseconds from game start.
    pub time_ms: f64,
}

impl KeyEvent {
    pub fn press(code: impl Into<String>, time_ms: f64) -> Self {
        Self {
            code: code.into(),
            pressed: true,
            repeat: false,
            time_ms,
        }
    }

    pub fn release(code: impl Into<String>, time_ms: f64) -> Self {
        Self {
            code: code.into(),
            pressed: false,
            repeat: false,
            time_ms,
        }
    }
}

/// Abstraction over input sources.
/// Implementations: ScriptedInput (autoplay, replays, testing).
pub trait InputProvider {
    /// Events with timestamps up to and including `time_ms` not yet returned.
    fn poll_up_to(&mut self, time_ms: f64) -> Vec<KeyEvent>;

    /// Whether the source will produce no more events.
    fn is_finished(&self) -> bool;
}
