//! Core latency logger: lazy worker startup, event dispatch, teardown.
//!
//! Producers call [`LatencyLogger::log`] from arbitrary threads; events are
//! marshalled over a channel to one dedicated worker thread that formats and
//! emits them, so logging never blocks the caller. The application owns the
//! logger, hands clones of an `Arc<LatencyLogger>` to producers, and drives
//! the `init`/`shutdown` lifecycle itself.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::Category;
use crate::clock::{MonotonicClock, SystemClock};
use crate::error::{LatencyLogError, LatencyLogResult};
use crate::event::LatencyEvent;
use crate::metrics::{LoggerMetrics, MetricsSnapshot};
use crate::sink::{LatencySink, TracingSink};

/// Configuration for [`LatencyLogger`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// OS-visible name of the worker thread.
    pub thread_name: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            thread_name: "latency-logger".to_string(),
        }
    }
}

impl LoggerConfig {
    /// Configuration with a custom worker thread name.
    pub fn with_thread_name(thread_name: impl Into<String>) -> Self {
        Self {
            thread_name: thread_name.into(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread name is empty or contains NUL bytes
    /// (rejected by [`std::thread::Builder::name`]).
    pub fn validate(&self) -> LatencyLogResult<()> {
        if self.thread_name.is_empty() {
            return Err(LatencyLogError::invalid_configuration(
                "thread_name must not be empty",
            ));
        }
        if self.thread_name.contains('\0') {
            return Err(LatencyLogError::invalid_configuration(
                "thread_name must not contain NUL bytes",
            ));
        }
        Ok(())
    }
}

/// Start-timestamp sentinel.
///
/// `Poisoned` is terminal: once [`LatencyLogger::shutdown`] has run, a later
/// `init()` must not revive the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Epoch {
    Unset,
    Started(Duration),
    Poisoned,
}

struct Worker {
    sender: Sender<LatencyEvent>,
    handle: JoinHandle<()>,
}

struct LoggerState {
    worker: Option<Worker>,
    epoch: Epoch,
}

/// Asynchronous latency event logger.
///
/// # Concurrency
///
/// State transitions on the worker handle and epoch are serialized by a
/// single lock; [`log`](Self::log) takes only the read side to reach the
/// channel sender and never blocks on the worker. Per-event formatting and
/// emission run solely on the worker thread against the epoch captured at
/// spawn time.
///
/// # Example
///
/// ```rust
/// use media_latency_log::{Category, LatencyLogger};
///
/// let logger = LatencyLogger::with_defaults();
/// logger.init();
/// logger.log(Category::AudioBackend, 42, 1000);
/// logger.shutdown()?;
/// # Ok::<(), media_latency_log::LatencyLogError>(())
/// ```
pub struct LatencyLogger {
    config: LoggerConfig,
    sink: Arc<dyn LatencySink>,
    clock: Arc<dyn MonotonicClock>,
    metrics: Arc<LoggerMetrics>,
    state: RwLock<LoggerState>,
}

impl LatencyLogger {
    /// Create a logger with the given configuration, sink, and clock.
    ///
    /// The worker thread is not started; call [`init`](Self::init) before
    /// events are expected to be buffered.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(
        config: LoggerConfig,
        sink: Arc<dyn LatencySink>,
        clock: Arc<dyn MonotonicClock>,
    ) -> LatencyLogResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sink,
            clock,
            metrics: Arc::new(LoggerMetrics::new()),
            state: RwLock::new(LoggerState {
                worker: None,
                epoch: Epoch::Unset,
            }),
        })
    }

    /// Create a logger with the default configuration, a [`TracingSink`],
    /// and a [`SystemClock`].
    pub fn with_defaults() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: Arc::new(TracingSink::new()),
            clock: Arc::new(SystemClock::new()),
            metrics: Arc::new(LoggerMetrics::new()),
            state: RwLock::new(LoggerState {
                worker: None,
                epoch: Epoch::Unset,
            }),
        }
    }

    /// Start the worker thread and record the epoch. Idempotent.
    ///
    /// No-op if the worker is already running or if [`shutdown`](Self::shutdown)
    /// has occurred. Thread-spawn failure is tolerated: a warning is logged,
    /// the logger stays in its no-worker state (events are dropped), and a
    /// later `init()` may retry.
    pub fn init(&self) {
        let mut state = self.state.write();
        if state.epoch != Epoch::Unset {
            return;
        }

        let (sender, receiver) = channel::unbounded();
        let epoch = self.clock.now();
        let sink = Arc::clone(&self.sink);
        let clock = Arc::clone(&self.clock);
        let metrics = Arc::clone(&self.metrics);

        let spawned = thread::Builder::new()
            .name(self.config.thread_name.clone())
            .spawn(move || worker_main(&receiver, &*sink, &*clock, &metrics, epoch));

        match spawned {
            Ok(handle) => {
                state.worker = Some(Worker { sender, handle });
                state.epoch = Epoch::Started(epoch);
                debug!(thread = %self.config.thread_name, "latency logger worker started");
            }
            Err(e) => {
                // Degraded but non-fatal: events are dropped until a retry succeeds.
                warn!(error = %e, "failed to spawn latency logger worker");
            }
        }
    }

    /// Record a latency event.
    ///
    /// If the sink's runtime gate is off, nothing happens. Otherwise the
    /// event is dispatched to the worker thread; if the worker has not been
    /// started the event is silently dropped. Never blocks.
    pub fn log(&self, category: Category, sub_id: u64, value: i64) {
        if !self.sink.enabled() {
            return;
        }

        let state = self.state.read();
        match &state.worker {
            Some(worker) => {
                let event = LatencyEvent::new(category, sub_id, value);
                if worker.sender.send(event).is_ok() {
                    self.metrics.record_enqueued();
                } else {
                    self.metrics.record_dropped();
                }
            }
            None => self.metrics.record_dropped(),
        }
    }

    /// Stop the worker thread, draining all queued events first.
    ///
    /// Blocks the calling thread until the worker has flushed its queue and
    /// terminated. This is the only blocking call in the API. Afterwards the
    /// epoch is poisoned: a later [`init`](Self::init) will not restart the
    /// worker. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`LatencyLogError::WorkerPanicked`] if the worker thread
    /// panicked; queued events may have been lost in that case.
    pub fn shutdown(&self) -> LatencyLogResult<()> {
        let worker = {
            let mut state = self.state.write();
            state.epoch = Epoch::Poisoned;
            state.worker.take()
        };

        let Some(Worker { sender, handle }) = worker else {
            return Ok(());
        };

        // Disconnect the channel; the worker drains whatever is queued and
        // exits on its own. The join must happen outside the lock so
        // producers observing the poisoned state are not held up.
        drop(sender);
        debug!("waiting for latency logger worker to drain");
        handle
            .join()
            .map_err(|_| LatencyLogError::WorkerPanicked)?;
        debug!("latency logger worker stopped");
        Ok(())
    }

    /// Whether the worker thread is currently running.
    pub fn is_running(&self) -> bool {
        self.state.read().worker.is_some()
    }

    /// Current counters.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl core::fmt::Debug for LatencyLogger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LatencyLogger")
            .field("config", &self.config)
            .field("running", &self.is_running())
            .finish()
    }
}

impl Drop for LatencyLogger {
    fn drop(&mut self) {
        if self.is_running() {
            warn!("latency logger dropped while still running - forcing shutdown");
            if self.shutdown().is_err() {
                warn!("latency logger worker panicked during forced shutdown");
            }
        }
    }
}

/// Worker thread main loop.
///
/// Consumes events in FIFO order until every sender is gone, computing the
/// elapsed time at emission rather than enqueue so emitted timestamps follow
/// processing order.
fn worker_main(
    receiver: &Receiver<LatencyEvent>,
    sink: &dyn LatencySink,
    clock: &dyn MonotonicClock,
    metrics: &LoggerMetrics,
    epoch: Duration,
) {
    while let Ok(event) = receiver.recv() {
        let elapsed = clock.now().saturating_sub(epoch);
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        sink.write(&format_line(&event, elapsed_ms));
        metrics.record_emitted();
    }
}

/// Render one log line.
///
/// The trailing periods after the elapsed time and the value are part of the
/// legacy format consumers parse; they stay.
fn format_line(event: &LatencyEvent, elapsed_ms: u64) -> String {
    let category = event.category.as_str();
    let sub_id = event.sub_id;
    let value = event.value;
    format!("{category},{sub_id},{elapsed_ms}.,{value}.")
}
