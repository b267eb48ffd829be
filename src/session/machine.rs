//! Typestate session machine shared by every mini-game variant.
//!
//! A session is either [`ActiveSession`] (countdown running, accepting
//! input) or [`CompletedSession`] (countdown stopped, score fixed).
//! Transitions consume the active state, so a completed session can never
//! accept another mutation at the type level; the serializable wrapper in
//! [`super::state`] adds the silent no-op semantics the UI boundary needs.

use crate::config::SessionConfig;
use crate::games::{Applied, MiniGame};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The puzzle was solved in time.
    Success,
    /// Time or a budget ran out with the puzzle unsolved.
    Failure,
}

impl Outcome {
    /// True for a solved session.
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Active phase - accepts gestures, hints, and ticks
// ─────────────────────────────────────────────────────────────

/// A session with the countdown running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession<G> {
    game: G,
    time_remaining: u32,
}

// ─────────────────────────────────────────────────────────────
//  Completed phase - outcome and score are fixed
// ─────────────────────────────────────────────────────────────

/// A session that reached a terminal state.
///
/// The outcome and score are ALWAYS present; they were computed exactly
/// once, at the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSession<G> {
    game: G,
    time_remaining: u32,
    outcome: Outcome,
    score: u32,
}

// ─────────────────────────────────────────────────────────────
//  Transition result
// ─────────────────────────────────────────────────────────────

/// Result of a session transition.
#[derive(Debug)]
pub enum SessionStep<G> {
    /// The countdown keeps running.
    Active(ActiveSession<G>),
    /// The session just entered a terminal state.
    Completed(CompletedSession<G>),
}

impl<G: MiniGame> ActiveSession<G> {
    /// Generates a puzzle and budget and starts the countdown.
    ///
    /// This is the `Initializing -> Active` transition: it runs
    /// synchronously the first time a hosting record without a payload is
    /// observed.
    #[instrument(skip(config, rng))]
    pub fn begin<R: Rng + ?Sized>(config: &SessionConfig, rng: &mut R) -> Self {
        let game = G::generate(config, rng);
        let time_remaining = G::initial_time(config);
        info!(kind = %game.kind(), time_remaining, "Session started");
        Self {
            game,
            time_remaining,
        }
    }

    /// Restores an active session from persisted parts.
    pub fn from_parts(game: G, time_remaining: u32) -> Self {
        Self {
            game,
            time_remaining,
        }
    }

    /// The running game state.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Seconds left on the countdown.
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Applies one user gesture and re-checks the terminal condition.
    #[instrument(skip(self, action))]
    pub fn apply(mut self, action: &G::Action) -> SessionStep<G> {
        if !self.game.apply(action).is_committed() {
            debug!(action = ?action, "Gesture rejected");
            return SessionStep::Active(self);
        }
        self.check_terminal()
    }

    /// Spends one unit of hint budget, if any remains.
    ///
    /// Hints never end a session, so this borrows rather than consumes.
    pub fn request_hint(&mut self) -> Applied {
        self.game.take_hint()
    }

    /// Advances the countdown by one second.
    ///
    /// Decrements by exactly 1, clamps at 0, and on the tick that reaches
    /// 0 evaluates the terminal condition.
    #[instrument(skip(self))]
    pub fn tick(mut self) -> SessionStep<G> {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            let outcome = if self.game.is_solved() {
                Outcome::Success
            } else {
                Outcome::Failure
            };
            return SessionStep::Completed(self.complete(outcome));
        }
        SessionStep::Active(self)
    }

    fn check_terminal(self) -> SessionStep<G> {
        if self.game.is_solved() {
            SessionStep::Completed(self.complete(Outcome::Success))
        } else if self.game.is_exhausted() {
            SessionStep::Completed(self.complete(Outcome::Failure))
        } else {
            SessionStep::Active(self)
        }
    }

    fn complete(self, outcome: Outcome) -> CompletedSession<G> {
        let score = self.game.score(self.time_remaining);
        info!(
            kind = %self.game.kind(),
            %outcome,
            score,
            time_remaining = self.time_remaining,
            "Session completed"
        );
        CompletedSession {
            game: self.game,
            time_remaining: self.time_remaining,
            outcome,
            score,
        }
    }
}

impl<G: MiniGame> CompletedSession<G> {
    /// The final game state.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Seconds that were left when the session ended.
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// How the session ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The score fixed at the terminal transition.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(super) fn into_parts(self) -> (G, u32, Outcome, u32) {
        (self.game, self.time_remaining, self.outcome, self.score)
    }
}

impl<G: MiniGame> ActiveSession<G> {
    pub(super) fn into_parts(self) -> (G, u32) {
        (self.game, self.time_remaining)
    }
}
