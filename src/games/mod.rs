//! Mini-game variants and the capability trait that unifies them.
//!
//! Each variant owns its puzzle target, its mutable progress, and its
//! non-time budgets. The session machine owns the countdown and drives the
//! variant exclusively through [`MiniGame`], so timer and lifecycle logic
//! exist exactly once.

pub mod circuit_swap;
pub mod color_lock;
pub mod mirror_maze;

use crate::config::SessionConfig;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The mini-game variants driven by the session machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    /// One player reads the code, the other presses the buttons.
    ColorCodeLock,
    /// One player sees the maze, the other walks it.
    MirrorMaze,
    /// One player holds the schematic, the other reroutes the circuit.
    CircuitSwap,
}

impl GameKind {
    /// Fixed role pair for this variant: (information holder, actor).
    ///
    /// Role assignment is positional and immutable: whoever occupies
    /// player slot A holds the information, slot B acts on it.
    pub fn roles(self) -> (Role, Role) {
        match self {
            GameKind::ColorCodeLock => (Role::SequenceKeeper, Role::LockOperator),
            GameKind::MirrorMaze => (Role::MazeGuide, Role::MazeRunner),
            GameKind::CircuitSwap => (Role::SchematicKeeper, Role::CircuitTech),
        }
    }

    /// Display label for lobby and HUD chrome.
    pub fn label(self) -> &'static str {
        match self {
            GameKind::ColorCodeLock => "Color Code Lock",
            GameKind::MirrorMaze => "Mirror Maze",
            GameKind::CircuitSwap => "Circuit Swap",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Capability assignment for one player slot, fixed for a session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sees the target color sequence.
    SequenceKeeper,
    /// Presses the lock buttons.
    LockOperator,
    /// Sees the full maze layout and the exit.
    MazeGuide,
    /// Moves through the maze.
    MazeRunner,
    /// Sees the full circuit schematic.
    SchematicKeeper,
    /// Toggles wires and switches.
    CircuitTech,
}

impl Role {
    /// Display label for this role.
    pub fn label(self) -> &'static str {
        match self {
            Role::SequenceKeeper => "Sequence Keeper",
            Role::LockOperator => "Lock Operator",
            Role::MazeGuide => "Maze Guide",
            Role::MazeRunner => "Maze Runner",
            Role::SchematicKeeper => "Schematic Keeper",
            Role::CircuitTech => "Circuit Tech",
        }
    }

    /// True for the information-holder half of a role pair.
    pub fn is_information_holder(self) -> bool {
        matches!(
            self,
            Role::SequenceKeeper | Role::MazeGuide | Role::SchematicKeeper
        )
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The two fixed positional player slots of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSlot {
    /// Slot 0 - always the information holder.
    A,
    /// Slot 1 - always the actor.
    B,
}

impl PlayerSlot {
    /// The other slot.
    pub fn partner(self) -> Self {
        match self {
            PlayerSlot::A => PlayerSlot::B,
            PlayerSlot::B => PlayerSlot::A,
        }
    }
}

/// Whether a mutation attempt changed game state.
///
/// Rejections are values, not errors: an out-of-range move or an
/// over-budget hint request leaves state untouched and is reported back
/// for optional UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Applied {
    /// The mutation was validated and committed.
    Committed,
    /// The mutation was rejected; state is unchanged.
    Rejected,
}

impl Applied {
    /// True if the mutation committed.
    pub fn is_committed(self) -> bool {
        matches!(self, Applied::Committed)
    }
}

/// The capability set a mini-game variant supplies to the session machine.
///
/// The four operations from the shared state-machine shape - generate
/// puzzle, validate/apply a move, check the terminal condition, compute the
/// score - plus the budget bookkeeping the HUD reads.
pub trait MiniGame: Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned {
    /// Discrete user gesture forwarded by the view layer.
    type Action: std::fmt::Debug + Clone + Send + 'static;

    /// Generates a fresh puzzle and budgets from an explicit random source.
    ///
    /// The target produced here is immutable for the session's lifetime.
    /// Threading `rng` keeps generation replayable in tests.
    fn generate<R: Rng + ?Sized>(config: &SessionConfig, rng: &mut R) -> Self;

    /// Countdown budget in seconds for a fresh session of this variant.
    fn initial_time(config: &SessionConfig) -> u32;

    /// Which variant this is.
    fn kind(&self) -> GameKind;

    /// Validates the action against current puzzle state and applies it.
    fn apply(&mut self, action: &Self::Action) -> Applied;

    /// Consumes one unit of hint budget, if any remains.
    ///
    /// Hint content generation lives with the view layer; only the budget
    /// bookkeeping happens here.
    fn take_hint(&mut self) -> Applied;

    /// True once the puzzle target is met.
    fn is_solved(&self) -> bool;

    /// True once a non-time budget is spent while the puzzle is unsolved.
    fn is_exhausted(&self) -> bool;

    /// Weighted final score for the given remaining time.
    ///
    /// Deterministic over `(self, time_remaining)`; called exactly once,
    /// at the transition into a terminal state.
    fn score(&self, time_remaining: u32) -> u32;

    /// One-line progress summary for the HUD.
    fn describe_progress(&self) -> String;

    /// Remaining wrong-submission budget, for variants that have one.
    fn remaining_attempts(&self) -> Option<u32> {
        None
    }

    /// Remaining hint budget, for variants that have one.
    fn remaining_hints(&self) -> Option<u32> {
        None
    }
}
