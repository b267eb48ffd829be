//! Session lifecycle: typestate machine, serializable state, hosting
//! records, and the tokio tick driver.

mod host;
mod invariants;
mod machine;
mod runtime;
mod state;

pub use host::{
    GamePayload, GameSession, Player, PlayerId, RegistrationError, SessionId, SessionManager,
    SessionStatus,
};
pub use invariants::{Invariant, InvariantViolation};
pub use machine::{ActiveSession, CompletedSession, Outcome, SessionStep};
pub use runtime::{spawn_session, SessionCommand, SessionHandle, SessionObserver};
pub use state::SessionState;
