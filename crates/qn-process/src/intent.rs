//! The two halves of a resumption: why a process wakes, and what it asks for.

use qn_core::StageId;
use qn_resource::Ticket;
use qn_stats::WaitSample;

/// The reason a process is being resumed.
#[derive(Debug)]
pub enum Wakeup {
    /// First resumption, right after the entity arrives.
    Start,

    /// A slot of the pool the process was waiting on is now its own.
    Granted(Ticket),

    /// The current stage's service time has elapsed.
    ServiceDone,
}

impl Wakeup {
    pub fn label(&self) -> &'static str {
        match self {
            Wakeup::Start       => "start",
            Wakeup::Granted(_)  => "granted",
            Wakeup::ServiceDone => "service-done",
        }
    }
}

/// An action a resumed process asks the scheduler to carry out.
///
/// Intents from one resumption are applied in the order returned.
#[derive(Debug)]
pub enum Intent {
    /// Ask for a slot of `stage`'s pool.  The answer arrives as
    /// [`Wakeup::Granted`].
    Request(StageId),

    /// Stay in service at `stage` for `duration` minutes, then resume with
    /// [`Wakeup::ServiceDone`].
    Hold { stage: StageId, duration: f64 },

    /// Give the slot back to its pool.
    Release(Ticket),

    /// The entity has left the last stage; record its sample.
    Complete(WaitSample),
}
