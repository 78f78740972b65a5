//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `agent_moods.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentMoodRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    moods:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "new_posts", "average_happiness"])?;

        let mut moods = Writer::from_path(dir.join("agent_moods.csv"))?;
        moods.write_record(["agent_id", "tick", "happiness"])?;

        Ok(Self {
            summaries,
            moods,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_moods(&mut self, rows: &[AgentMoodRow]) -> OutputResult<()> {
        for row in rows {
            self.moods.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.happiness.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.new_posts.to_string(),
            row.average_happiness.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.moods.flush()?;
        Ok(())
    }
}
