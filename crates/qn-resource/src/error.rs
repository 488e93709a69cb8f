use qn_core::{EntityId, StageId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("pool {0} needs a capacity of at least 1")]
    ZeroCapacity(StageId),

    #[error("ticket of {holder} belongs to pool {ticket_pool}, not {pool}")]
    ForeignTicket {
        pool:        StageId,
        ticket_pool: StageId,
        holder:      EntityId,
    },
}

pub type ResourceResult<T> = Result<T, ResourceError>;
