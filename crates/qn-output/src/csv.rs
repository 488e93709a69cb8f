//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `wait_samples.csv`
//! - `pool_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{OutputResult, PoolSummaryRow, WaitSampleRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    samples:  Writer<File>,
    pools:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    ///
    /// Headers are written up front so a run with no completions still
    /// produces well-formed files.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut samples = open(&dir.join("wait_samples.csv"))?;
        samples.write_record(["entity_id", "completed_at", "total_elapsed"])?;

        let mut pools = open(&dir.join("pool_summaries.csv"))?;
        pools.write_record([
            "stage", "name", "capacity", "grants", "queued_grants", "peak_queue", "waiting",
        ])?;

        Ok(Self { samples, pools, finished: false })
    }
}

fn open(path: &Path) -> OutputResult<Writer<File>> {
    Ok(WriterBuilder::new().has_headers(false).from_path(path)?)
}

impl OutputWriter for CsvWriter {
    fn write_samples(&mut self, rows: &[WaitSampleRow]) -> OutputResult<()> {
        for row in rows {
            self.samples.serialize(row)?;
        }
        Ok(())
    }

    fn write_pool_summaries(&mut self, rows: &[PoolSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.pools.serialize(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.samples.flush()?;
        self.pools.flush()?;
        Ok(())
    }
}
