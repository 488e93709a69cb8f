use qn_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("cannot schedule an event at invalid time {0}")]
    InvalidTime(SimTime),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
