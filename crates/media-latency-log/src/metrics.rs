//! Counters for the logger's own behavior
//!
//! The logger drops events silently by design (disabled sink, worker not
//! started). These counters make that visible without touching the hot path
//! with locks.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

/// Shared atomic counters, written by producers and the worker thread.
#[derive(Debug, Default)]
pub(crate) struct LoggerMetrics {
    enqueued: AtomicU64,
    dropped: AtomicU64,
    emitted: AtomicU64,
}

impl LoggerMetrics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_enqueued(&self) {
        self.enqueued.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            events_enqueued: self.enqueued.load(Ordering::Relaxed),
            events_dropped: self.dropped.load(Ordering::Relaxed),
            events_emitted: self.emitted.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of the logger's counters.
///
/// All counters are monotonically increasing over the logger's lifetime.
/// After [`shutdown`](crate::LatencyLogger::shutdown) returns,
/// `events_enqueued == events_emitted` holds: every event accepted onto the
/// queue was flushed before the worker exited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Events accepted onto the worker queue
    pub events_enqueued: u64,
    /// Events discarded because no worker was running
    pub events_dropped: u64,
    /// Lines written to the sink by the worker thread
    pub events_emitted: u64,
}

impl MetricsSnapshot {
    /// Events accepted but not yet written by the worker.
    pub fn in_flight(&self) -> u64 {
        self.events_enqueued.saturating_sub(self.events_emitted)
    }

    /// Fraction of offered events that were discarded.
    pub fn drop_rate(&self) -> f64 {
        let offered = self.events_enqueued.saturating_add(self.events_dropped);
        if offered == 0 {
            return 0.0;
        }
        (self.events_dropped as f64) / (offered as f64)
    }
}

impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MetricsSnapshot(enqueued={}, dropped={}, emitted={}, drop_rate={:.4}%)",
            self.events_enqueued,
            self.events_dropped,
            self.events_emitted,
            self.drop_rate() * 100.0
        )
    }
}
