//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use qn_core::SimTime;
use qn_process::Pipeline;
use qn_resource::ResourcePool;
use qn_sim::SimObserver;
use qn_stats::{StatsCollector, WaitSample};

use crate::row::{PoolSummaryRow, WaitSampleRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes each completion as it happens and a pool
/// summary when the run stops.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
///
/// Attach it to a single `run`: every `run_until` call ends with
/// `on_sim_end`, which appends another pool summary.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:      W,
    stage_names: Vec<String>,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, taking stage names from
    /// `pipeline`.
    pub fn new(writer: W, pipeline: &Pipeline) -> Self {
        Self {
            writer,
            stage_names: pipeline.stages().iter().map(|s| s.name.clone()).collect(),
            last_error:  None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_complete(&mut self, sample: &WaitSample, now: SimTime) {
        let row = WaitSampleRow {
            entity_id:     sample.entity_id.0,
            completed_at:  now.minutes(),
            total_elapsed: sample.total_elapsed,
        };
        let result = self.writer.write_samples(&[row]);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_time: SimTime, pools: &[ResourcePool], _stats: &StatsCollector) {
        let rows: Vec<PoolSummaryRow> = pools
            .iter()
            .map(|pool| {
                let stats = pool.stats();
                PoolSummaryRow {
                    stage:         pool.id().0,
                    name:          self
                        .stage_names
                        .get(pool.id().index())
                        .cloned()
                        .unwrap_or_default(),
                    capacity:      pool.capacity(),
                    grants:        stats.grants,
                    queued_grants: stats.queued_grants,
                    peak_queue:    stats.peak_queue as u64,
                    waiting:       pool.queue_len() as u64,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_pool_summaries(&rows);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
