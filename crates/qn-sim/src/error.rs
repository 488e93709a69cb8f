use qn_core::{CoreError, EntityId, SimTime};
use qn_process::ProcessError;
use qn_resource::ResourceError;
use qn_schedule::ScheduleError;
use qn_stats::StatsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// An event came off the queue earlier than the clock.  Indicates a
    /// scheduler bug; the run cannot continue.
    #[error("scheduling invariant violated: event at {wake_time} popped at {now}")]
    SchedulingInvariant { now: SimTime, wake_time: SimTime },

    #[error("no live process for {0}")]
    UnknownEntity(EntityId),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

impl From<CoreError> for SimError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::ClockRegression { now, requested } => {
                SimError::SchedulingInvariant { now, wake_time: requested }
            }
            CoreError::Config(msg) => SimError::Config(msg),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
