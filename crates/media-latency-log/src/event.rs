//! Latency event values dispatched to the worker thread

use crate::Category;

/// A single latency measurement.
///
/// Events are immutable, stack-allocated values. One is created per
/// [`log`](crate::LatencyLogger::log) call, sent over the channel, consumed
/// exactly once by the worker thread, and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyEvent {
    /// Pipeline stage being measured
    pub category: Category,
    /// Caller-supplied handle distinguishing concurrent sources within one
    /// category (e.g. a specific track)
    pub sub_id: u64,
    /// Measured value; units are category-specific
    pub value: i64,
}

impl LatencyEvent {
    /// Create a new event.
    #[inline]
    pub const fn new(category: Category, sub_id: u64, value: i64) -> Self {
        Self {
            category,
            sub_id,
            value,
        }
    }
}
