//! Simulation observer trait for tracing runs and collecting output.

use qn_core::{EntityId, SimTime, StageId};
use qn_resource::ResourcePool;
use qn_stats::{StatsCollector, WaitSample};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as the event loop
/// makes progress.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: queue watcher
///
/// ```rust,ignore
/// struct SlowStarts { threshold: f64, requested: HashMap<(EntityId, StageId), SimTime> }
///
/// impl SimObserver for SlowStarts {
///     fn on_request(&mut self, entity: EntityId, stage: StageId, now: SimTime) {
///         self.requested.insert((entity, stage), now);
///     }
///     fn on_service_start(&mut self, entity: EntityId, stage: StageId, now: SimTime, _d: f64) {
///         if let Some(t) = self.requested.remove(&(entity, stage)) {
///             if now - t > self.threshold {
///                 println!("{entity} waited {:.0} min at {stage}", now - t);
///             }
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called for every event taken off the queue, after the clock has
    /// moved to `now` and before the event is dispatched.
    fn on_event(&mut self, _now: SimTime, _sequence_id: u64) {}

    /// A new entity arrived.
    fn on_spawn(&mut self, _entity: EntityId, _now: SimTime) {}

    /// `entity` asked for a slot at `stage`.  Whether it got one right away
    /// shows up as an `on_service_start` at the same instant.
    fn on_request(&mut self, _entity: EntityId, _stage: StageId, _now: SimTime) {}

    /// `entity` began service at `stage` and will hold its slot for
    /// `duration` minutes.
    fn on_service_start(
        &mut self,
        _entity:   EntityId,
        _stage:    StageId,
        _now:      SimTime,
        _duration: f64,
    ) {}

    /// `entity` gave its `stage` slot back.
    fn on_release(&mut self, _entity: EntityId, _stage: StageId, _now: SimTime) {}

    /// `entity` left the last stage.
    fn on_complete(&mut self, _sample: &WaitSample, _now: SimTime) {}

    /// Called once when the run stops, with read-only access to the pools
    /// and the samples gathered so far.
    fn on_sim_end(
        &mut self,
        _final_time: SimTime,
        _pools:      &[ResourcePool],
        _stats:      &StatsCollector,
    ) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
