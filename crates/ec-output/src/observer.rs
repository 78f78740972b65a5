//! `EngineOutputObserver<W>` — bridges `EngineObserver` to an `OutputWriter`.

use ec_agent::AgentStore;
use ec_core::Tick;
use ec_engine::{EngineObserver, TickSummary};

use crate::row::{AgentMoodRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// An [`EngineObserver`] that writes tick summaries and agent mood
/// snapshots to any [`OutputWriter`] backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct EngineOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EngineOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run ends.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EngineObserver for EngineOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:              summary.tick.0,
            new_posts:         summary.new_post_count() as u64,
            average_happiness: summary.average_happiness,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let rows: Vec<AgentMoodRow> = agents
            .agent_ids()
            .map(|agent| AgentMoodRow {
                agent_id:  agent.0,
                tick:      tick.0,
                happiness: agents.happiness[agent.index()],
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_moods(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
