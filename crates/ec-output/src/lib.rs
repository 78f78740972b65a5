//! `ec-output` — run-output writers for the rust_ec framework.
//!
//! Two backends are provided:
//!
//! | Feature  | Backend | Files created                              |
//! |----------|---------|---------------------------------------------|
//! | *(none)* | CSV     | `tick_summaries.csv`, `agent_moods.csv`     |
//! | `sqlite` | SQLite  | `output.db`                                 |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`EngineOutputObserver`], which implements
//! `ec_engine::EngineObserver`.
//!
//! This crate records what a *run* produced for later analysis; the engine
//! itself stays free of file and persistence interfaces.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ec_output::{CsvWriter, EngineOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = EngineOutputObserver::new(writer);
//! driver.run_ticks(300, &mut obs);
//! driver.finish(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EngineOutputObserver;
pub use row::{AgentMoodRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
