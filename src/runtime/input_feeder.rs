use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::input::{InputMapper, KeyBindings};
use crate::traits::input::InputProvider;
use crate::traits::time::TimeProvider;

use super::ActionSender;

const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Deliver an input source's key presses to the action queue in real time.
///
/// Events keep their own timestamps; the thread only waits until each one is
/// due. It exits when the source is exhausted or the consumer hangs up.
pub fn spawn_input_feeder<I>(
    mut input: I,
    bindings: KeyBindings,
    time: Arc<dyn TimeProvider>,
    sender: ActionSender,
) -> JoinHandle<()>
where
    I: InputProvider + Send + 'static,
{
    thread::spawn(move || {
        let mut mapper = InputMapper::new(bindings);
        let origin = time.now_ms();
        let mut sent = 0usize;

        while !input.is_finished() {
            let now = time.now_ms() - origin;
            for event in input.poll_up_to(now) {
                if let Some(action) = mapper.map(&event) {
                    if !sender.send(action) {
                        debug!(sent, "Input feeder stopped: queue closed");
                        return;
                    }
                    sent += 1;
                }
            }
            thread::sleep(POLL_INTERVAL);
        }
        debug!(sent, "Input feeder finished");
    })
}
