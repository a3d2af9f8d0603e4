//! # media-latency-log
//!
//! Asynchronous latency event logging for media pipelines.
//!
//! Producers record timestamped numeric events tagged by a [`Category`] and a
//! sub-identifier; the logger marshals them to a dedicated background worker
//! thread that formats and emits each event to a debug-log sink, so logging
//! never blocks the calling thread.
//!
//! ## Guarantees
//!
//! - **Producers never block**: dispatch is a non-blocking channel send
//!   behind a read lock.
//! - **FIFO emission**: one worker thread consumes the queue, so lines appear
//!   in enqueue order with elapsed times computed at emission.
//! - **Clean teardown**: [`LatencyLogger::shutdown`] drains every queued
//!   event before the worker exits, and a shut-down logger can never be
//!   revived by a later `init()`.
//! - **Best effort**: with no worker running (before `init()`, after
//!   `shutdown()`, or after a failed thread spawn) events are dropped
//!   silently; this facility is never on a correctness-critical path.
//!
//! ## Architecture
//!
//! - [`logger`] - Core logger: lazy worker startup, dispatch, teardown
//! - [`category`] - The fixed event categories and their display names
//! - [`event`] - Immutable event values sent to the worker
//! - [`sink`] - Debug-log sink seam ([`TracingSink`] is the production one)
//! - [`clock`] - Monotonic clock seam
//! - [`metrics`] - Counters for enqueued/dropped/emitted events
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```rust
//! use media_latency_log::prelude::*;
//!
//! let logger = LatencyLogger::with_defaults();
//! logger.init();
//!
//! // From any producer thread:
//! logger.log(Category::AudioStream, 1, 512);
//!
//! // At application shutdown:
//! logger.shutdown()?;
//! # Ok::<(), LatencyLogError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod category;
pub mod clock;
pub mod error;
pub mod event;
pub mod logger;
pub mod metrics;
pub mod sink;

pub mod prelude;

pub use category::Category;
pub use clock::{MonotonicClock, SystemClock};
pub use error::{LatencyLogError, LatencyLogResult};
pub use event::LatencyEvent;
pub use logger::{LatencyLogger, LoggerConfig};
pub use metrics::MetricsSnapshot;
pub use sink::{LatencySink, TRACE_TARGET, TracingSink};
