//! Serializable session wrapper with silent no-op semantics.
//!
//! Typestate phases can't be directly serialized, so this enum wraps both
//! phases as the persisted `game_data` payload. Mutations on a completed
//! state return it unchanged - the defend-in-depth policy for stale UI
//! events and timer races.

use super::machine::{ActiveSession, CompletedSession, Outcome, SessionStep};
use crate::games::{Applied, MiniGame};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A session in either phase, serializable as the hosting payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "phase",
    rename_all = "snake_case",
    bound(serialize = "G: Serialize", deserialize = "G: DeserializeOwned")
)]
pub enum SessionState<G: MiniGame> {
    /// Countdown running, accepting input.
    Active {
        /// The running game state.
        game: G,
        /// Seconds left on the countdown.
        time_remaining: u32,
    },
    /// Terminal state; further mutations are silent no-ops.
    Completed {
        /// The final game state.
        game: G,
        /// Seconds that were left when the session ended.
        time_remaining: u32,
        /// How the session ended.
        outcome: Outcome,
        /// The score fixed at the terminal transition.
        score: u32,
    },
}

impl<G: MiniGame> SessionState<G> {
    /// Applies one user gesture; no-op once completed.
    pub fn apply(self, action: &G::Action) -> Self {
        match self {
            SessionState::Active {
                game,
                time_remaining,
            } => ActiveSession::from_parts(game, time_remaining)
                .apply(action)
                .into(),
            done @ SessionState::Completed { .. } => {
                debug!("Gesture ignored after terminal state");
                done
            }
        }
    }

    /// Advances the countdown by one second; no-op once completed.
    pub fn tick(self) -> Self {
        match self {
            SessionState::Active {
                game,
                time_remaining,
            } => ActiveSession::from_parts(game, time_remaining).tick().into(),
            done @ SessionState::Completed { .. } => done,
        }
    }

    /// Spends one unit of hint budget; rejected once completed.
    pub fn request_hint(&mut self) -> Applied {
        match self {
            SessionState::Active { game, .. } => game.take_hint(),
            SessionState::Completed { .. } => Applied::Rejected,
        }
    }

    /// The wrapped game state.
    pub fn game(&self) -> &G {
        match self {
            SessionState::Active { game, .. } | SessionState::Completed { game, .. } => game,
        }
    }

    /// Seconds left on the countdown.
    pub fn time_remaining(&self) -> u32 {
        match self {
            SessionState::Active { time_remaining, .. }
            | SessionState::Completed { time_remaining, .. } => *time_remaining,
        }
    }

    /// True once a terminal state was entered.
    pub fn is_over(&self) -> bool {
        matches!(self, SessionState::Completed { .. })
    }

    /// How the session ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            SessionState::Active { .. } => None,
            SessionState::Completed { outcome, .. } => Some(*outcome),
        }
    }

    /// The final score, if the session has ended.
    pub fn score(&self) -> Option<u32> {
        match self {
            SessionState::Active { .. } => None,
            SessionState::Completed { score, .. } => Some(*score),
        }
    }

    /// Status line for display.
    pub fn status_string(&self) -> String {
        match self {
            SessionState::Active { time_remaining, .. } => {
                format!("In progress. {}s remaining.", time_remaining)
            }
            SessionState::Completed { outcome, score, .. } => match outcome {
                Outcome::Success => format!("Solved! Score: {}.", score),
                Outcome::Failure => format!("Failed. Score: {}.", score),
            },
        }
    }
}

impl<G: MiniGame> From<ActiveSession<G>> for SessionState<G> {
    fn from(session: ActiveSession<G>) -> Self {
        let (game, time_remaining) = session.into_parts();
        SessionState::Active {
            game,
            time_remaining,
        }
    }
}

impl<G: MiniGame> From<CompletedSession<G>> for SessionState<G> {
    fn from(session: CompletedSession<G>) -> Self {
        let (game, time_remaining, outcome, score) = session.into_parts();
        SessionState::Completed {
            game,
            time_remaining,
            outcome,
            score,
        }
    }
}

impl<G: MiniGame> From<SessionStep<G>> for SessionState<G> {
    fn from(step: SessionStep<G>) -> Self {
        match step {
            SessionStep::Active(s) => s.into(),
            SessionStep::Completed(s) => s.into(),
        }
    }
}
