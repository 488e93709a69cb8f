//! `Process`: one entity's journey through the pipeline.

use qn_core::{EntityId, EntityRng, SimTime, StageId};
use qn_resource::Ticket;
use qn_stats::WaitSample;

use crate::{Intent, Pipeline, ProcessError, ProcessResult, Wakeup};

/// Where an entity is in its journey.
///
/// The only state that owns a pool slot is `InService`, and it owns exactly
/// one, so an entity can never hold two slots at once.
#[derive(Debug)]
pub enum ProcessState {
    Created,
    Waiting(StageId),
    InService { stage: StageId, ticket: Ticket },
    Completed,
}

impl ProcessState {
    pub fn label(&self) -> &'static str {
        match self {
            ProcessState::Created           => "created",
            ProcessState::Waiting(_)        => "waiting",
            ProcessState::InService { .. }  => "in service",
            ProcessState::Completed         => "completed",
        }
    }
}

/// A resumable entity.  See the crate docs for the transition table.
#[derive(Debug)]
pub struct Process {
    id:      EntityId,
    arrival: SimTime,
    state:   ProcessState,
    rng:     EntityRng,
}

impl Process {
    /// A fresh entity that arrived at `arrival`.  Its service times come from
    /// its own RNG, seeded from `seed` and `id`.
    pub fn new(id: EntityId, arrival: SimTime, seed: u64) -> Self {
        Self {
            id,
            arrival,
            state: ProcessState::Created,
            rng: EntityRng::new(seed, id),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn arrival(&self) -> SimTime {
        self.arrival
    }

    pub fn state(&self) -> &ProcessState {
        &self.state
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, ProcessState::Completed)
    }

    /// Advance the state machine by one step.
    ///
    /// `now` is the scheduler's clock at the moment of resumption.  On error
    /// the process keeps the state it had before the call.
    pub fn resume(
        &mut self,
        wakeup:   Wakeup,
        now:      SimTime,
        pipeline: &Pipeline,
    ) -> ProcessResult<Vec<Intent>> {
        let state = std::mem::replace(&mut self.state, ProcessState::Completed);

        match (state, wakeup) {
            (ProcessState::Created, Wakeup::Start) => {
                let first = pipeline.first();
                self.state = ProcessState::Waiting(first);
                Ok(vec![Intent::Request(first)])
            }

            (ProcessState::Waiting(stage), Wakeup::Granted(ticket))
                if ticket.pool() == stage && ticket.holder() == self.id =>
            {
                let duration = match pipeline.stage(stage) {
                    Ok(s) => s.service.sample(&mut self.rng),
                    Err(e) => {
                        self.state = ProcessState::Waiting(stage);
                        return Err(e);
                    }
                };
                self.state = ProcessState::InService { stage, ticket };
                Ok(vec![Intent::Hold { stage, duration }])
            }

            (ProcessState::InService { stage, ticket }, Wakeup::ServiceDone) => {
                // The slot goes back before anything else is asked for.
                let mut intents = vec![Intent::Release(ticket)];
                match pipeline.next(stage) {
                    Some(next) => {
                        self.state = ProcessState::Waiting(next);
                        intents.push(Intent::Request(next));
                    }
                    None => {
                        self.state = ProcessState::Completed;
                        intents.push(Intent::Complete(WaitSample {
                            entity_id:     self.id,
                            total_elapsed: now.since(self.arrival),
                        }));
                    }
                }
                Ok(intents)
            }

            (state, wakeup) => {
                let err = ProcessError::UnexpectedWakeup {
                    entity: self.id,
                    state:  state.label(),
                    wakeup: wakeup.label(),
                };
                self.state = state;
                Err(err)
            }
        }
    }
}
