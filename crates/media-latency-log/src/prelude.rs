//! Prelude for media-latency-log.
//!
//! Re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use media_latency_log::prelude::*;
//!
//! let logger = LatencyLogger::with_defaults();
//! logger.init();
//! logger.log(Category::NetStat, 0, 42);
//! logger.shutdown()?;
//! # Ok::<(), LatencyLogError>(())
//! ```

pub use crate::category::Category;
pub use crate::clock::{MonotonicClock, SystemClock};
pub use crate::error::{LatencyLogError, LatencyLogResult};
pub use crate::event::LatencyEvent;
pub use crate::logger::{LatencyLogger, LoggerConfig};
pub use crate::metrics::MetricsSnapshot;
pub use crate::sink::{LatencySink, TRACE_TARGET, TracingSink};
