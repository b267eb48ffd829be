//! Tokio driver: one tick task per session, canceled on terminal entry
//! and on teardown.
//!
//! The driver owns its session state exclusively; views talk to it only
//! through the command channel, so every transition runs to completion
//! before the next event is processed.

use super::state::SessionState;
use crate::games::MiniGame;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument};

/// Callbacks into the hosting collaborator.
///
/// The observer is the only boundary to persistence and broadcast:
/// `on_game_update` fires after every state mutation with the full
/// payload, `on_game_complete` exactly once per session.
#[async_trait]
pub trait SessionObserver: Send + Sync {
    /// A state mutation happened; the full updated payload follows.
    async fn on_game_update(&self, payload: serde_json::Value);

    /// The session entered a terminal state.
    async fn on_game_complete(&self, success: bool, score: u32);
}

/// A command forwarded from the view layer to the session driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand<A> {
    /// Apply one user gesture.
    Apply(A),
    /// Spend one unit of hint budget.
    Hint,
    /// Tear the session down without completing it.
    Shutdown,
}

/// Handle to a running session driver.
///
/// Dropping the handle aborts the driver task, so a session can never
/// keep ticking past its owner's lifetime.
#[derive(Debug)]
pub struct SessionHandle<G: MiniGame> {
    commands: mpsc::Sender<SessionCommand<G::Action>>,
    task: Option<JoinHandle<()>>,
}

impl<G: MiniGame> SessionHandle<G> {
    /// Forwards one user gesture.
    ///
    /// Commands arriving after the session ended are dropped silently,
    /// matching the terminal no-op policy.
    pub async fn apply(&self, action: G::Action) {
        if self
            .commands
            .send(SessionCommand::Apply(action))
            .await
            .is_err()
        {
            debug!("Gesture dropped; session already ended");
        }
    }

    /// Requests one hint.
    pub async fn request_hint(&self) {
        if self.commands.send(SessionCommand::Hint).await.is_err() {
            debug!("Hint request dropped; session already ended");
        }
    }

    /// Tears the session down (component unmount).
    pub async fn shutdown(&self) {
        if self.commands.send(SessionCommand::Shutdown).await.is_err() {
            debug!("Shutdown after session already ended");
        }
    }

    /// Waits for the driver task to finish.
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            // An aborted task reports a JoinError; that is a normal
            // teardown path here.
            let _ = task.await;
        }
    }
}

impl<G: MiniGame> Drop for SessionHandle<G> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Spawns the driver task for one session.
///
/// The task multiplexes a 1 Hz countdown tick with view commands and
/// stops - no further ticks scheduled - the moment the session enters a
/// terminal state or is shut down.
#[instrument(skip(state, observer))]
pub fn spawn_session<G>(
    state: SessionState<G>,
    observer: Arc<dyn SessionObserver>,
) -> SessionHandle<G>
where
    G: MiniGame + Send + 'static,
{
    let (commands, mut rx) = mpsc::channel::<SessionCommand<G::Action>>(32);
    let task = tokio::spawn(async move {
        let mut state = state;
        if state.is_over() {
            // Completion was already reported when it happened.
            debug!("Session spawned in terminal state; driver idle");
            return;
        }
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; consume it so the
        // countdown starts a full second after spawn.
        interval.tick().await;
        loop {
            let mutated = tokio::select! {
                _ = interval.tick() => {
                    state = state.tick();
                    true
                }
                cmd = rx.recv() => match cmd {
                    Some(SessionCommand::Apply(action)) => {
                        let before = state.clone();
                        state = state.apply(&action);
                        state != before
                    }
                    Some(SessionCommand::Hint) => state.request_hint().is_committed(),
                    Some(SessionCommand::Shutdown) | None => {
                        info!("Session driver shut down");
                        break;
                    }
                }
            };
            if mutated {
                observer.on_game_update(payload_value(&state)).await;
            }
            if state.is_over() {
                let outcome = state.outcome().expect("terminal state has an outcome");
                let score = state.score().expect("terminal state has a score");
                observer
                    .on_game_complete(outcome.is_success(), score)
                    .await;
                break;
            }
        }
    });
    SessionHandle {
        commands,
        task: Some(task),
    }
}

fn payload_value<G: MiniGame>(state: &SessionState<G>) -> serde_json::Value {
    serde_json::to_value(state).expect("session state serializes infallibly")
}
