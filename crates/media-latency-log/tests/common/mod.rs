//! Shared test doubles: an in-memory sink and a hand-driven clock.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use media_latency_log::{LatencyLogger, LatencySink, MonotonicClock};
use parking_lot::Mutex;

/// Sink that captures emitted lines in memory, with a toggleable gate.
pub struct MemorySink {
    enabled: AtomicBool,
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            enabled: AtomicBool::new(true),
            lines: Mutex::new(Vec::new()),
        })
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl LatencySink for MemorySink {
    fn enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn write(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// Clock advanced explicitly by the test.
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Duration::ZERO),
        })
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }

    /// Force an absolute reading, including one earlier than the current.
    pub fn set(&self, to: Duration) {
        *self.now.lock() = to;
    }
}

impl MonotonicClock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}

/// Block until the worker has emitted at least `count` lines.
///
/// The worker runs asynchronously; tests that advance a manual clock between
/// events need to know the previous event has already been written.
pub fn wait_for_emitted(logger: &LatencyLogger, count: u64) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while logger.metrics().events_emitted < count {
        assert!(
            Instant::now() < deadline,
            "timed out waiting for {count} emitted events, metrics: {}",
            logger.metrics()
        );
        std::thread::sleep(Duration::from_millis(1));
    }
}
