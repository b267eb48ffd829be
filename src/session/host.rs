//! Hosting-session records: the boundary to the external collaborator.
//!
//! A [`GameSession`] is the record the hosting app passes in: two ordered
//! player slots, a status flag, and an optional previously-persisted game
//! payload. The payload is opaque to the host and fully owned here.

use super::machine::ActiveSession;
use super::state::SessionState;
use crate::config::SessionConfig;
use crate::games::circuit_swap::CircuitSwap;
use crate::games::color_lock::ColorCodeLock;
use crate::games::mirror_maze::MirrorMaze;
use crate::games::{GameKind, MiniGame, PlayerSlot, Role};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session, owned by the hosting app.
pub type SessionId = String;

/// Unique identifier for a player.
pub type PlayerId = String;

/// Hosting status of a session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Waiting for both slots to fill.
    Waiting,
    /// Both players present, game running.
    Active,
    /// Game finished.
    Completed,
}

/// A player occupying one of the two fixed slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Player's unique ID.
    pub id: PlayerId,
    /// Player's display name.
    pub name: String,
    /// The slot this player occupies.
    pub slot: PlayerSlot,
    /// The fixed role assigned by slot and game kind.
    pub role: Role,
}

/// Errors raised while registering players into a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RegistrationError {
    /// Both slots are already occupied.
    #[display("Session already has 2 players")]
    SessionFull,
    /// The player is already registered in this session.
    #[display("Player {player_id} is already registered")]
    DuplicatePlayer {
        /// The offending player ID.
        player_id: PlayerId,
    },
    /// No session with the given ID exists.
    #[display("Session not found")]
    SessionNotFound,
    /// A session with the given ID already exists.
    #[display("Session already exists")]
    SessionExists,
}

/// The persisted game payload, one wrapper per variant.
///
/// This is the `game_data` blob the hosting collaborator stores and
/// re-distributes without interpreting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game_kind", rename_all = "snake_case")]
pub enum GamePayload {
    /// Color Code Lock session state.
    ColorCodeLock(SessionState<ColorCodeLock>),
    /// Mirror Maze session state.
    MirrorMaze(SessionState<MirrorMaze>),
    /// Circuit Swap session state.
    CircuitSwap(SessionState<CircuitSwap>),
}

impl GamePayload {
    /// Which variant this payload belongs to.
    pub fn kind(&self) -> GameKind {
        match self {
            GamePayload::ColorCodeLock(_) => GameKind::ColorCodeLock,
            GamePayload::MirrorMaze(_) => GameKind::MirrorMaze,
            GamePayload::CircuitSwap(_) => GameKind::CircuitSwap,
        }
    }

    /// Seconds left on the countdown.
    pub fn time_remaining(&self) -> u32 {
        match self {
            GamePayload::ColorCodeLock(s) => s.time_remaining(),
            GamePayload::MirrorMaze(s) => s.time_remaining(),
            GamePayload::CircuitSwap(s) => s.time_remaining(),
        }
    }

    /// True once the session reached a terminal state.
    pub fn is_over(&self) -> bool {
        match self {
            GamePayload::ColorCodeLock(s) => s.is_over(),
            GamePayload::MirrorMaze(s) => s.is_over(),
            GamePayload::CircuitSwap(s) => s.is_over(),
        }
    }

    /// Status line for display.
    pub fn status_string(&self) -> String {
        match self {
            GamePayload::ColorCodeLock(s) => s.status_string(),
            GamePayload::MirrorMaze(s) => s.status_string(),
            GamePayload::CircuitSwap(s) => s.status_string(),
        }
    }

    /// Serializes the payload for persistence or broadcast.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("payload types serialize infallibly")
    }
}

/// A game session with two positional players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// Which mini-game this session plays.
    pub kind: GameKind,
    /// Hosting status.
    pub status: SessionStatus,
    /// Slot A - always the information holder.
    pub player_a: Option<Player>,
    /// Slot B - always the actor.
    pub player_b: Option<Player>,
    /// Game payload; absent until the lazy `Initializing -> Active` step.
    pub payload: Option<GamePayload>,
}

impl GameSession {
    /// Creates a new session record with empty slots and no payload.
    #[instrument]
    pub fn new(id: SessionId, kind: GameKind) -> Self {
        info!(session_id = %id, %kind, "Creating new game session");
        Self {
            id,
            kind,
            status: SessionStatus::Waiting,
            player_a: None,
            player_b: None,
            payload: None,
        }
    }

    /// Registers a player into the first free slot.
    ///
    /// Returns the role assigned by position: slot A holds the
    /// information, slot B acts. Once both slots fill, the session goes
    /// active.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn register_player(
        &mut self,
        id: PlayerId,
        name: String,
    ) -> Result<Role, RegistrationError> {
        if self.get_player(&id).is_some() {
            warn!(player_id = %id, "Player already registered");
            return Err(RegistrationError::DuplicatePlayer { player_id: id });
        }
        let (viewer_role, actor_role) = self.kind.roles();
        if self.player_a.is_none() {
            info!(player_id = %id, role = %viewer_role, "Registering player into slot A");
            self.player_a = Some(Player::new(id, name, PlayerSlot::A, viewer_role));
            Ok(viewer_role)
        } else if self.player_b.is_none() {
            info!(player_id = %id, role = %actor_role, "Registering player into slot B");
            self.player_b = Some(Player::new(id, name, PlayerSlot::B, actor_role));
            self.status = SessionStatus::Active;
            Ok(actor_role)
        } else {
            warn!(player_id = %id, "Session already has 2 players");
            Err(RegistrationError::SessionFull)
        }
    }

    /// Gets the player with the given ID.
    pub fn get_player(&self, player_id: &str) -> Option<&Player> {
        [self.player_a.as_ref(), self.player_b.as_ref()]
            .into_iter()
            .flatten()
            .find(|p| p.id == player_id)
    }

    /// The role fixed to a slot for this session's kind.
    pub fn role_of(&self, slot: PlayerSlot) -> Role {
        let (viewer, actor) = self.kind.roles();
        match slot {
            PlayerSlot::A => viewer,
            PlayerSlot::B => actor,
        }
    }

    /// Generates the puzzle if the record arrived without one.
    ///
    /// This is the lazy `Initializing -> Active` transition; it runs at
    /// most once, on the first observation of an absent payload, and
    /// never regenerates mid-session.
    #[instrument(skip(self, config, rng), fields(session_id = %self.id))]
    pub fn ensure_initialized<R: Rng + ?Sized>(&mut self, config: &SessionConfig, rng: &mut R) {
        if self.payload.is_some() {
            return;
        }
        debug!(kind = %self.kind, "Generating puzzle for fresh session");
        self.payload = Some(match self.kind {
            GameKind::ColorCodeLock => GamePayload::ColorCodeLock(begin(config, rng)),
            GameKind::MirrorMaze => GamePayload::MirrorMaze(begin(config, rng)),
            GameKind::CircuitSwap => GamePayload::CircuitSwap(begin(config, rng)),
        });
    }
}

fn begin<G, R>(config: &SessionConfig, rng: &mut R) -> SessionState<G>
where
    G: MiniGame,
    R: Rng + ?Sized,
{
    ActiveSession::begin(config, rng).into()
}

/// Manages all hosted game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new session record.
    #[instrument(skip(self))]
    pub fn create_session(
        &self,
        id: SessionId,
        kind: GameKind,
    ) -> Result<SessionId, RegistrationError> {
        let mut sessions = self.sessions.lock().expect("session registry poisoned");
        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(RegistrationError::SessionExists);
        }
        sessions.insert(id.clone(), GameSession::new(id.clone(), kind));
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Gets a session by ID.
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        let sessions = self.sessions.lock().expect("session registry poisoned");
        let session = sessions.get(id).cloned();
        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }
        session
    }

    /// Replaces a session record after a mutation.
    #[instrument(skip(self, session), fields(session_id = %session.id))]
    pub fn update_session(&self, session: GameSession) {
        let mut sessions = self.sessions.lock().expect("session registry poisoned");
        sessions.insert(session.id.clone(), session);
        debug!("Session updated");
    }

    /// Lists all session IDs.
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let sessions = self.sessions.lock().expect("session registry poisoned");
        sessions.keys().cloned().collect()
    }

    /// Atomically registers a player into a session.
    #[instrument(skip(self))]
    pub fn register_player_atomic(
        &self,
        session_id: &str,
        player_id: PlayerId,
        name: String,
    ) -> Result<Role, RegistrationError> {
        let mut sessions = self.sessions.lock().expect("session registry poisoned");
        let session = sessions
            .get_mut(session_id)
            .ok_or(RegistrationError::SessionNotFound)?;
        session.register_player(player_id, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_positional_role_assignment() {
        let mut session = GameSession::new("s1".into(), GameKind::MirrorMaze);
        let first = session.register_player("p1".into(), "Ada".into()).unwrap();
        let second = session.register_player("p2".into(), "Ben".into()).unwrap();
        assert_eq!(first, Role::MazeGuide);
        assert_eq!(second, Role::MazeRunner);
        assert_eq!(session.status, SessionStatus::Active);
    }

    #[test]
    fn test_third_registration_fails() {
        let mut session = GameSession::new("s1".into(), GameKind::ColorCodeLock);
        session.register_player("p1".into(), "Ada".into()).unwrap();
        session.register_player("p2".into(), "Ben".into()).unwrap();
        let err = session.register_player("p3".into(), "Cal".into());
        assert_eq!(err, Err(RegistrationError::SessionFull));
    }

    #[test]
    fn test_lazy_initialization_happens_once() {
        let config = SessionConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = GameSession::new("s1".into(), GameKind::CircuitSwap);
        assert!(session.payload.is_none());

        session.ensure_initialized(&config, &mut rng);
        let first = session.payload.clone().expect("initialized");

        // A second observation must not regenerate the puzzle.
        session.ensure_initialized(&config, &mut rng);
        assert_eq!(session.payload, Some(first));
    }

    #[test]
    fn test_manager_round_trip() {
        let manager = SessionManager::new();
        manager
            .create_session("s1".into(), GameKind::ColorCodeLock)
            .unwrap();
        let role = manager
            .register_player_atomic("s1", "p1".into(), "Ada".into())
            .unwrap();
        assert_eq!(role, Role::SequenceKeeper);
        assert!(manager.get_session("s1").is_some());
        assert_eq!(manager.list_sessions(), vec!["s1".to_string()]);
    }
}
