//! Paced stepping around an [`Engine`].
//!
//! The engine itself is agnostic to real time; this driver owns the
//! scheduling policy: how many ticks to run, how long to sleep between
//! them, and when to fire snapshot hooks.  "Pausing" is nothing more than
//! the driver not scheduling further steps, so there is no pause state to
//! manage here either: callers run ticks in batches and do whatever they
//! want in between (inject posts, merge config patches, inspect
//! snapshots).

use std::thread;
use std::time::Duration;

use crate::engine::Engine;
use crate::observer::EngineObserver;

/// Drives repeated [`Engine::step`] calls with optional pacing and
/// snapshot cadence.
///
/// The engine stays a `pub` field: between batches the owner reconfigures
/// or probes it directly.
pub struct Driver {
    pub engine: Engine,
    tick_interval: Option<Duration>,
    snapshot_interval_ticks: u64,
}

impl Driver {
    /// Wrap an engine with no pacing and no snapshot hooks.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            tick_interval: None,
            snapshot_interval_ticks: 0,
        }
    }

    /// Sleep this long after each tick — the timer-loop cadence an
    /// interactive frontend would use (the reference UI stepped every
    /// 500 ms).
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = Some(interval);
        self
    }

    /// Fire [`EngineObserver::on_snapshot`] every `ticks` ticks.
    /// 0 (the default) disables snapshots.
    pub fn snapshot_every(mut self, ticks: u64) -> Self {
        self.snapshot_interval_ticks = ticks;
        self
    }

    /// Step the engine `n` times, firing observer hooks after each tick.
    pub fn run_ticks<O: EngineObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let summary = self.engine.step();
            observer.on_tick_end(&summary);
            if self.snapshot_interval_ticks > 0
                && summary.tick.0.is_multiple_of(self.snapshot_interval_ticks)
            {
                observer.on_snapshot(summary.tick, &self.engine.agents);
            }
            if let Some(pause) = self.tick_interval {
                thread::sleep(pause);
            }
        }
    }

    /// Signal the end of a run: fires [`EngineObserver::on_run_end`] with
    /// the current tick.  Call once, after the final `run_ticks` batch.
    pub fn finish<O: EngineObserver>(&mut self, observer: &mut O) {
        observer.on_run_end(self.engine.tick);
    }
}
