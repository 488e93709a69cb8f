use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("no entity completed, so there is no mean to report")]
    EmptyDataset,
}

pub type StatsResult<T> = Result<T, StatsError>;
