//! Dual Minds session engine - cooperative asymmetric mini-games.
//!
//! This library implements the per-game session state machine and scoring
//! model shared by the Dual Minds mini-games, plus the collaborator
//! surfaces around it.
//!
//! # Architecture
//!
//! - **Games**: pure puzzle logic per variant (Color Code Lock, Mirror
//!   Maze, Circuit Swap), unified under the [`MiniGame`] capability trait
//! - **Session**: typestate lifecycle (`Active` -> `Completed`) with a
//!   serializable wrapper, a tokio tick driver, and a session registry
//! - **Hud / Comm**: role-aware read surface and the local communication
//!   sink consumed by view layers
//! - **Bridge**: placeholder for engine-rendered games
//!
//! # Example
//!
//! ```
//! use dual_minds::{ActiveSession, ColorCodeLock, LockAction, SessionConfig, SessionStep};
//! use rand::SeedableRng;
//!
//! let config = SessionConfig::default();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let session = ActiveSession::<ColorCodeLock>::begin(&config, &mut rng);
//!
//! match session.apply(&LockAction::Submit) {
//!     SessionStep::Active(s) => assert!(s.time_remaining() > 0),
//!     SessionStep::Completed(_) => unreachable!("one wrong submit does not end the game"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod bridge;
mod comm;
mod config;
mod games;
mod hud;
mod session;

// Crate-level exports - External engine bridge
pub use bridge::{BridgeError, BridgeStatus, EngineBridge, ExternalGame};

// Crate-level exports - Communication panel
pub use comm::{ChatMessage, CommSink, LogSink, MessageBody, QuickMessage};

// Crate-level exports - Budget configuration
pub use config::{CircuitConfig, LockConfig, MazeConfig, SessionConfig};

// Crate-level exports - Shared game types
pub use games::{Applied, GameKind, MiniGame, PlayerSlot, Role};

// Crate-level exports - Game variants
pub use games::circuit_swap::{
    CircuitAction, CircuitEdge, CircuitNode, CircuitSchematic, CircuitSection, CircuitSwap,
    EdgeKind, Visibility,
};
pub use games::color_lock::{Color, ColorCodeLock, LockAction, CODE_LEN};
pub use games::mirror_maze::{Direction, GridPos, MazeAction, MazeGrid, MirrorMaze, GRID_SIZE};

// Crate-level exports - HUD read surface
pub use hud::HudSnapshot;

// Crate-level exports - Session lifecycle
pub use session::{
    spawn_session, ActiveSession, CompletedSession, GamePayload, GameSession, Invariant,
    InvariantViolation, Outcome, Player, PlayerId, RegistrationError, SessionCommand,
    SessionHandle, SessionId, SessionManager, SessionObserver, SessionState, SessionStatus,
    SessionStep,
};
