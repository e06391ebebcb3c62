use std::sync::mpsc;
use std::time::Duration;

use crate::game::Action;

/// Producer half of the action queue. Clone one per producer thread.
#[derive(Debug, Clone)]
pub struct ActionSender {
    tx: mpsc::Sender<Action>,
}

impl ActionSender {
    /// Enqueue an action. Returns false once the consumer is gone.
    pub fn send(&self, action: Action) -> bool {
        self.tx.send(action).is_ok()
    }
}

/// Single consumer half of the action queue.
#[derive(Debug)]
pub struct ActionReceiver {
    rx: mpsc::Receiver<Action>,
}

impl ActionReceiver {
    /// Block for the next action. `None` once every sender has hung up.
    pub fn recv(&self) -> Option<Action> {
        self.rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<Action> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Everything already queued, without blocking.
    pub fn drain(&self) -> Vec<Action> {
        self.rx.try_iter().collect()
    }

    /// Block for one action, then take whatever else is already queued.
    pub fn next_batch(&self) -> Option<Vec<Action>> {
        let first = self.recv()?;
        let mut batch = vec![first];
        batch.extend(self.rx.try_iter());
        Some(batch)
    }
}

/// Create the channel that carries ticks and key presses to the game loop.
pub fn action_queue() -> (ActionSender, ActionReceiver) {
    let (tx, rx) = mpsc::channel();
    (ActionSender { tx }, ActionReceiver { rx })
}
