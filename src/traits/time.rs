use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Abstraction over time sources.
/// Implementations: SystemTimeProvider (production), MockTimeProvider (testing).
pub trait TimeProvider: Send + Sync {
    /// Current time in microseconds from an arbitrary epoch.
    fn now_us(&self) -> i64;

    /// Current time in milliseconds.
    fn now_ms(&self) -> f64 {
        self.now_us() as f64 / 1000.0
    }
}

/// System time provider using std::time::Instant.
pub struct SystemTimeProvider {
    start: std::time::Instant,
}

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Default for SystemTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for SystemTimeProvider {
    fn now_us(&self) -> i64 {
        self.start.elapsed().as_micros() as i64
    }
}

/// Mock time provider for deterministic testing.
/// Clones share the same clock.
#[derive(Clone, Default)]
pub struct MockTimeProvider {
    current_us: Arc<AtomicI64>,
}

impl MockTimeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time(&self, us: i64) {
        self.current_us.store(us, Ordering::SeqCst);
    }

    pub fn advance(&self, delta_us: i64) {
        self.current_us.fetch_add(delta_us, Ordering::SeqCst);
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_us(&self) -> i64 {
        self.current_us.load(Ordering::SeqCst)
    }
}
