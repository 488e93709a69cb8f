//! `qn-output`: simulation output writers for the queue-net framework.
//!
//! | Backend | Files created                                  |
//! |---------|------------------------------------------------|
//! | CSV     | `wait_samples.csv`, `pool_summaries.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `qn_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use qn_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &sim.pipeline);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{PoolSummaryRow, WaitSampleRow};
pub use writer::OutputWriter;
