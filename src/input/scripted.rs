//! Pre-recorded input: autoplay performances and replays.

use crate::chart::Chart;
use crate::model::Lane;
use crate::traits::input::{InputProvider, KeyEvent};

use super::KeyBindings;

/// Delivers a fixed list of key events in time order.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    events: Vec<KeyEvent>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(mut events: Vec<KeyEvent>) -> Self {
        sort_events(&mut events);
        Self { events, cursor: 0 }
    }

    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }

    /// Time of the next undelivered event.
    pub fn next_time_ms(&self) -> Option<f64> {
        self.events.get(self.cursor).map(|e| e.time_ms)
    }
}

impl InputProvider for ScriptedInput {
    fn poll_up_to(&mut self, time_ms: f64) -> Vec<KeyEvent> {
        let start = self.cursor;
        while self.cursor < self.events.len() && self.events[self.cursor].time_ms <= time_ms {
            self.cursor += 1;
        }
        self.events[start..self.cursor].to_vec()
    }

    fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }
}

/// Time order, with a release ahead of a press at the same instant so a
/// key let go and struck again registers the second strike.
fn sort_events(events: &mut [KeyEvent]) {
    events.sort_by(|a, b| {
        a.time_ms
            .total_cmp(&b.time_ms)
            .then(a.pressed.cmp(&b.pressed))
    });
}

/// Press duration used by autoplay before releasing.
const AUTOPLAY_HOLD_MS: f64 = 20.0;
/// Smallest spacing between two autoplay presses on one lane.
const AUTOPLAY_MIN_GAP_MS: f64 = 1.0;

/// Generate a performance that presses every playable note at its hit time
/// plus `offset_ms`.
///
/// Each key is released no later than the next press on its lane, so notes
/// closer together than the hold still get their own strike. Same-lane notes
/// sharing a hit time are struck `AUTOPLAY_MIN_GAP_MS` apart.
pub fn autoplay_events(chart: &Chart, bindings: &KeyBindings, offset_ms: f64) -> Vec<KeyEvent> {
    let mut events = Vec::with_capacity(chart.note_count() * 2);
    for &lane in Lane::all() {
        let mut targets: Vec<f64> = chart
            .notes
            .iter()
            .filter(|n| n.lane == lane && !n.is_degenerate())
            .map(|n| (n.hit_time_ms() + offset_ms).max(0.0))
            .collect();
        targets.sort_by(f64::total_cmp);

        let mut presses: Vec<f64> = Vec::with_capacity(targets.len());
        for target in targets {
            let at = match presses.last() {
                Some(&prev) => target.max(prev + AUTOPLAY_MIN_GAP_MS),
                None => target,
            };
            presses.push(at);
        }

        let code = bindings.key_for(lane);
        for (i, &at) in presses.iter().enumerate() {
            let release = match presses.get(i + 1) {
                Some(&next) => (at + AUTOPLAY_HOLD_MS).min(next),
                None => at + AUTOPLAY_HOLD_MS,
            };
            events.push(KeyEvent::press(code, at));
            events.push(KeyEvent::release(code, release));
        }
    }
    sort_events(&mut events);
    events
}
