//! Observer trait for progress reporting and data collection.

use ec_agent::AgentStore;
use ec_core::Tick;

use crate::engine::TickSummary;

/// Callbacks invoked by [`Driver::run_ticks`][crate::Driver::run_ticks] at
/// key points in the run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl EngineObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: mean happiness {:.3}", summary.tick, summary.average_happiness);
///         }
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called after every completed tick with that tick's summary.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals with read-only access to the full
    /// population state, so output writers can record per-agent moods
    /// without the driver knowing about any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once when the driver finishes a run.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// An [`EngineObserver`] that does nothing.  Use when you need to drive a
/// run but don't want callbacks.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
