//! The `Sim` struct and its event loop.

use qn_core::{EntityId, SimClock, SimConfig, SimTime};
use qn_process::{ArrivalGenerator, Intent, Pipeline, Process, ProcessError, Wakeup};
use qn_resource::ResourcePool;
use qn_schedule::EventQueue;
use qn_stats::{MeanWait, StatsCollector};
use tracing::{debug, info, trace};

use crate::{SimError, SimObserver, SimResult};

/// Live processes keyed by entity.  Entries are removed on completion.
#[cfg(feature = "fx-hash")]
pub type ProcessTable = rustc_hash::FxHashMap<EntityId, Process>;

/// Live processes keyed by entity.  Entries are removed on completion.
#[cfg(not(feature = "fx-hash"))]
pub type ProcessTable = std::collections::HashMap<EntityId, Process>;

// ── Continuations ─────────────────────────────────────────────────────────────

/// What a queued event resumes when it fires.
#[derive(Debug)]
pub enum Activation {
    /// Fire the arrival generator.
    Arrivals,

    /// Resume one entity's process.
    Entity { id: EntityId, wakeup: Wakeup },
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The discrete-event scheduler.
///
/// Each step of the loop:
///
/// 1. **Pop**: take the earliest event (ties in scheduling order).
/// 2. **Advance**: move the clock to the event's wake time.
/// 3. **Resume**: fire the arrival generator, or call
///    [`Process::resume`] with the event's [`Wakeup`].
/// 4. **Apply** (in the order the process returned them):
///    - `Request(s)`    → ask pool `s`; an immediate grant is delivered as a
///                        zero-delay `Granted` event.
///    - `Hold{s, d}`    → schedule `ServiceDone` at `now + d`.
///    - `Release(t)`    → return the slot; if the pool hands it to a waiter,
///                        schedule that waiter's `Granted` at `now`.
///    - `Complete(smp)` → record the sample and drop the process.
///
/// Everything runs on one thread, one step at a time, so pools and the
/// statistics collector are only ever touched by the active step.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Horizon, seed, and arrival cadence.
    pub config: SimConfig,

    /// Current simulation time.  Only the event loop moves it.
    pub clock: SimClock,

    /// The ordered stages every entity walks through.
    pub pipeline: Pipeline,

    /// One pool per stage, indexed by `StageId`.
    pub pools: Vec<ResourcePool>,

    /// Pending wake-ups.
    pub queue: EventQueue<Activation>,

    /// Entities that have arrived but not yet completed.
    pub processes: ProcessTable,

    /// Spawns entities at a fixed cadence.
    pub arrivals: ArrivalGenerator,

    /// Completion samples, in completion order.
    pub stats: StatsCollector,

    pub(crate) dispatched: u64,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the configured horizon.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let horizon = self.config.horizon;
        self.run_until(horizon, observer)
    }

    /// Run every event whose wake time is strictly before `until`.
    ///
    /// Stops early, without error, when the queue empties.  Events at or
    /// after `until` stay queued and are not executed; if the run stopped
    /// because of them, the clock is left at `until`.
    pub fn run_until<O: SimObserver>(&mut self, until: SimTime, observer: &mut O) -> SimResult<()> {
        info!(
            from = %self.clock.now(),
            %until,
            pending = self.queue.len(),
            "simulation run starting"
        );

        while let Some(next) = self.queue.peek_time() {
            if next >= until {
                if until > self.clock.now() {
                    self.clock.advance_to(until)?;
                }
                break;
            }
            let Some(event) = self.queue.pop_earliest() else {
                break;
            };

            self.clock.advance_to(event.wake_time)?;
            self.dispatched += 1;
            trace!(now = %event.wake_time, seq = event.sequence_id, "dispatching event");
            observer.on_event(event.wake_time, event.sequence_id);

            self.dispatch(event.payload, observer)?;
        }

        let now = self.clock.now();
        observer.on_sim_end(now, &self.pools, &self.stats);
        info!(
            %now,
            dispatched = self.dispatched,
            spawned = self.arrivals.spawned(),
            completed = self.stats.len(),
            in_flight = self.processes.len(),
            "simulation run stopped"
        );
        Ok(())
    }

    /// Mean transit time of the entities completed so far.
    pub fn mean_wait(&self) -> SimResult<MeanWait> {
        Ok(self.stats.mean()?)
    }

    /// Number of events executed since the sim was built.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    // ── Event handling ────────────────────────────────────────────────────

    fn dispatch<O: SimObserver>(&mut self, activation: Activation, observer: &mut O) -> SimResult<()> {
        let now = self.clock.now();
        match activation {
            Activation::Arrivals => {
                let Some(arrival) = self.arrivals.fire(now) else {
                    return Ok(());
                };
                let id = arrival.process.id();
                debug!(entity = %id, %now, "entity arrived");
                observer.on_spawn(id, now);

                self.processes.insert(id, arrival.process);
                self.queue.schedule(now, Activation::Entity { id, wakeup: Wakeup::Start })?;
                if let Some(next) = arrival.next_at {
                    self.queue.schedule(next, Activation::Arrivals)?;
                }
            }

            Activation::Entity { id, wakeup } => {
                let process = self.processes.get_mut(&id).ok_or(SimError::UnknownEntity(id))?;
                let intents = process.resume(wakeup, now, &self.pipeline)?;
                self.apply_intents(id, intents, now, observer)?;
            }
        }
        Ok(())
    }

    /// Apply one resumption's intents, in order.
    fn apply_intents<O: SimObserver>(
        &mut self,
        id:       EntityId,
        intents:  Vec<Intent>,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        for intent in intents {
            match intent {
                // ── Request: take a slot now or join the FIFO ─────────────
                Intent::Request(stage) => {
                    observer.on_request(id, stage, now);
                    let pool = self
                        .pools
                        .get_mut(stage.index())
                        .ok_or(ProcessError::UnknownStage(stage))?;
                    if let Some(ticket) = pool.request(id) {
                        self.queue.schedule(now, Activation::Entity {
                            id,
                            wakeup: Wakeup::Granted(ticket),
                        })?;
                    }
                }

                // ── Hold: service timer ───────────────────────────────────
                Intent::Hold { stage, duration } => {
                    observer.on_service_start(id, stage, now, duration);
                    self.queue.schedule(now + duration, Activation::Entity {
                        id,
                        wakeup: Wakeup::ServiceDone,
                    })?;
                }

                // ── Release: the freed slot may pass straight to a waiter ─
                Intent::Release(ticket) => {
                    let stage = ticket.pool();
                    let pool = self
                        .pools
                        .get_mut(stage.index())
                        .ok_or(ProcessError::UnknownStage(stage))?;
                    if let Some(next) = pool.release(ticket)? {
                        let holder = next.holder();
                        self.queue.schedule(now, Activation::Entity {
                            id:     holder,
                            wakeup: Wakeup::Granted(next),
                        })?;
                    }
                    observer.on_release(id, stage, now);
                }

                // ── Complete: record and forget ───────────────────────────
                Intent::Complete(sample) => {
                    debug!(entity = %id, elapsed = sample.total_elapsed, "entity completed");
                    observer.on_complete(&sample, now);
                    self.stats.record(sample);
                    self.processes.remove(&id);
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Sim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("now", &self.clock.now())
            .field("pending", &self.queue.len())
            .field("live", &self.processes.len())
            .field("completed", &self.stats.len())
            .finish()
    }
}
