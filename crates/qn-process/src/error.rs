use qn_core::{EntityId, StageId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessError {
    #[error("pipeline configuration error: {0}")]
    Config(String),

    #[error("pipeline has no stage {0}")]
    UnknownStage(StageId),

    #[error("{entity} woken with {wakeup} while {state}")]
    UnexpectedWakeup {
        entity: EntityId,
        state:  &'static str,
        wakeup: &'static str,
    },
}

pub type ProcessResult<T> = Result<T, ProcessError>;
