//! `qn-stats`: completion samples and the aggregate the run reports.
//!
//! | Module        | Contents                                       |
//! |---------------|------------------------------------------------|
//! | [`sample`]    | `WaitSample`                                   |
//! | [`collector`] | `StatsCollector`, `MeanWait`                   |
//! | [`error`]     | `StatsError`, `StatsResult<T>`                 |

pub mod collector;
pub mod error;
pub mod sample;


pub use collector::{MeanWait, StatsCollector};
pub use error::{StatsError, StatsResult};
pub use sample::WaitSample;
