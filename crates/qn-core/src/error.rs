//! Framework error type.
//!
//! Sub-crates define their own error enums; `qn-sim` wraps them all, so this
//! one only covers what `qn-core` itself can fail on.

use thiserror::Error;

use crate::SimTime;

/// The error type for `qn-core`.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("clock cannot move backwards from {now} to {requested}")]
    ClockRegression { now: SimTime, requested: SimTime },
}

/// Shorthand result type for `qn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
