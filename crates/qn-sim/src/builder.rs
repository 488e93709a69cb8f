//! Fluent builder for constructing a [`Sim`].

use qn_core::{Capacities, SimClock, SimConfig, SimTime};
use qn_process::{ArrivalGenerator, Pipeline};
use qn_resource::ResourcePool;
use qn_schedule::EventQueue;
use qn_stats::StatsCollector;

use crate::sim::{Activation, ProcessTable};
use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                        |
/// |-------------------|------------------------------------------------|
/// | `.pipeline(p)`    | `Pipeline::airport(&Capacities::default())`    |
/// | `.capacities(c)`  | shorthand for `.pipeline(Pipeline::airport(&c))` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .capacities(Capacities { gate: 1, security: 3, checkin: 2 })
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// println!("{}", sim.mean_wait()?);
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    pipeline:   Option<Pipeline>,
    capacities: Option<Capacities>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, pipeline: None, capacities: None }
    }

    /// Use an arbitrary linear pipeline.  Takes precedence over
    /// [`capacities`](Self::capacities).
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    /// Use the airport pipeline with these worker counts.
    pub fn capacities(mut self, capacities: Capacities) -> Self {
        self.capacities = Some(capacities);
        self
    }

    /// Validate inputs, create one pool per stage, seed the event queue with
    /// the first arrival at time zero, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let pipeline = match (self.pipeline, self.capacities) {
            (Some(p), _) => p,
            (None, Some(caps)) => Pipeline::airport(&caps)?,
            (None, None) => Pipeline::airport(&Capacities::default())?,
        };

        let pools = pipeline
            .stages()
            .iter()
            .map(|s| ResourcePool::new(s.id, s.capacity))
            .collect::<Result<Vec<_>, _>>()?;

        let mut queue = EventQueue::new();
        queue.schedule(SimTime::ZERO, Activation::Arrivals)?;

        let arrivals = ArrivalGenerator::new(
            self.config.arrival_interval,
            self.config.seed,
            self.config.max_arrivals,
        );

        Ok(Sim {
            clock:      SimClock::new(),
            config:     self.config,
            pipeline,
            pools,
            queue,
            processes:  ProcessTable::default(),
            arrivals,
            stats:      StatsCollector::new(),
            dispatched: 0,
        })
    }
}
