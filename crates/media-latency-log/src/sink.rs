//! Debug-log sink seam
//!
//! The host logging facility sits behind [`LatencySink`] so the emission
//! path can be redirected in tests and alternative hosts. The production
//! implementation routes lines through the `tracing` ecosystem.

/// `tracing` target under which [`TracingSink`] emits lines.
///
/// Subscribers enable or disable the logger at runtime by filtering on this
/// target at DEBUG level (e.g. `RUST_LOG=media_latency=debug`).
pub const TRACE_TARGET: &str = "media_latency";

/// Destination for formatted latency log lines.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: [`enabled`](LatencySink::enabled)
/// is consulted on arbitrary producer threads, while
/// [`write`](LatencySink::write) is called only from the worker thread.
pub trait LatencySink: Send + Sync {
    /// Runtime gate consulted before an event is constructed and dispatched.
    ///
    /// When this returns `false`, producers skip event creation entirely.
    /// The flag may change at any time; a stale answer only means one event
    /// more or less in the log.
    fn enabled(&self) -> bool;

    /// Emit one formatted line at debug severity.
    fn write(&self, line: &str);
}

/// Production sink emitting through `tracing` at DEBUG severity under the
/// [`TRACE_TARGET`] target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink.
    pub const fn new() -> Self {
        Self
    }
}

impl LatencySink for TracingSink {
    fn enabled(&self) -> bool {
        tracing::enabled!(target: "media_latency", tracing::Level::DEBUG)
    }

    fn write(&self, line: &str) {
        tracing::debug!(target: "media_latency", "{line}");
    }
}
