//! Threads and channels that drive a real-time game.
//!
//! Producers (the clock and input feeders) push actions into one queue;
//! [`GameLoop`] is its only consumer. [`simulate`] runs the same fold without
//! threads for instant playback and tests.

mod action_queue;
mod clock;
mod game_loop;
mod input_feeder;
mod simulate;

pub use action_queue::{ActionReceiver, ActionSender, action_queue};
pub use clock::{Clock, ClockHandle};
pub use game_loop::{GameLoop, StopReason};
pub use input_feeder::spawn_input_feeder;
pub use simulate::{Simulation, run_to_end, simulate, tick_schedule};
