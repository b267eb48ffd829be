//! Role-aware HUD read surface.
//!
//! Views render from snapshots; nothing here mutates session state. The
//! puzzle target never crosses this boundary for the actor slot - each
//! game's own accessors (`target_for`, `layout_for`, `schematic_for`)
//! gate that per role.

use crate::games::{GameKind, MiniGame, PlayerSlot, Role};
use crate::session::{GamePayload, GameSession, SessionState};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One player's view of the shared session chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HudSnapshot {
    /// Which mini-game is being played.
    kind: GameKind,
    /// The viewing player's fixed role.
    role: Role,
    /// Seconds left on the countdown.
    time_remaining: u32,
    /// Wrong-submission budget, for variants that have one.
    attempts_remaining: Option<u32>,
    /// Hint budget, for variants that have one.
    hints_remaining: Option<u32>,
    /// One-line progress summary.
    progress: String,
    /// One-line status summary.
    status: String,
}

impl HudSnapshot {
    /// Captures the HUD for one slot of a hosted session.
    ///
    /// Returns `None` until the session's puzzle has been initialized.
    pub fn capture(session: &GameSession, slot: PlayerSlot) -> Option<Self> {
        let role = session.role_of(slot);
        let payload = session.payload.as_ref()?;
        Some(match payload {
            GamePayload::ColorCodeLock(state) => Self::from_state(state, role),
            GamePayload::MirrorMaze(state) => Self::from_state(state, role),
            GamePayload::CircuitSwap(state) => Self::from_state(state, role),
        })
    }

    fn from_state<G: MiniGame>(state: &SessionState<G>, role: Role) -> Self {
        let game = state.game();
        Self {
            kind: game.kind(),
            role,
            time_remaining: state.time_remaining(),
            attempts_remaining: game.remaining_attempts(),
            hints_remaining: game.remaining_hints(),
            progress: game.describe_progress(),
            status: state.status_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::games::GameKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hosted(kind: GameKind) -> GameSession {
        let mut session = GameSession::new("s1".into(), kind);
        session
            .register_player("p1".into(), "Ada".into())
            .expect("slot A free");
        session
            .register_player("p2".into(), "Ben".into())
            .expect("slot B free");
        session.ensure_initialized(&SessionConfig::default(), &mut StdRng::seed_from_u64(2));
        session
    }

    #[test]
    fn test_no_snapshot_before_initialization() {
        let session = GameSession::new("s1".into(), GameKind::MirrorMaze);
        assert!(HudSnapshot::capture(&session, PlayerSlot::A).is_none());
    }

    #[test]
    fn test_snapshot_reflects_budgets_per_variant() {
        let lock = HudSnapshot::capture(&hosted(GameKind::ColorCodeLock), PlayerSlot::B)
            .expect("initialized");
        assert_eq!(*lock.attempts_remaining(), Some(5));
        assert_eq!(*lock.hints_remaining(), Some(3));
        assert_eq!(*lock.time_remaining(), 180);

        let circuit = HudSnapshot::capture(&hosted(GameKind::CircuitSwap), PlayerSlot::A)
            .expect("initialized");
        assert_eq!(*circuit.attempts_remaining(), None);
        assert_eq!(*circuit.role(), Role::SchematicKeeper);
    }
}
