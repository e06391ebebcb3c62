use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::game::Action;
use crate::traits::time::TimeProvider;

use super::ActionSender;

/// Periodic tick producer.
pub struct Clock;

impl Clock {
    /// Emit `Tick { elapsed_ms }` every `period_ms` on a background thread.
    ///
    /// Elapsed time is read from `time` relative to the moment of spawning,
    /// so ticks stay absolute even if the thread oversleeps.
    pub fn spawn(
        period_ms: u64,
        time: Arc<dyn TimeProvider>,
        sender: ActionSender,
    ) -> ClockHandle {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();
        let period = Duration::from_millis(period_ms.max(1));

        let handle = thread::spawn(move || {
            let origin = time.now_ms();
            debug!(period_ms, "Clock started");
            while !stop_flag.load(Ordering::Acquire) {
                thread::sleep(period);
                if stop_flag.load(Ordering::Acquire) {
                    break;
                }
                let elapsed_ms = time.now_ms() - origin;
                if !sender.send(Action::Tick { elapsed_ms }) {
                    break;
                }
            }
            debug!("Clock stopped");
        });

        ClockHandle {
            stop,
            handle: Some(handle),
        }
    }
}

/// Owner of a running clock thread. Dropping the handle stops the clock.
pub struct ClockHandle {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ClockHandle {
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("Clock thread panicked");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
