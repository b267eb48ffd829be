//! Tests for the tokio session driver: tick cadence, update propagation,
//! and exactly-once completion.

use async_trait::async_trait;
use dual_minds::{
    spawn_session, ActiveSession, Direction, MazeAction, MiniGame, MirrorMaze, SessionConfig,
    SessionObserver, SessionState,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Opt-in driver logs: `RUST_LOG=dual_minds=debug cargo test`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[derive(Default)]
struct Recording {
    updates: Mutex<Vec<serde_json::Value>>,
    completions: Mutex<Vec<(bool, u32)>>,
}

impl Recording {
    fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    fn completions(&self) -> Vec<(bool, u32)> {
        self.completions.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionObserver for Recording {
    async fn on_game_update(&self, payload: serde_json::Value) {
        self.updates.lock().unwrap().push(payload);
    }

    async fn on_game_complete(&self, success: bool, score: u32) {
        self.completions.lock().unwrap().push((success, score));
    }
}

fn maze_session(seconds: u32) -> SessionState<MirrorMaze> {
    let game = MirrorMaze::generate(&SessionConfig::default(), &mut StdRng::seed_from_u64(6));
    ActiveSession::from_parts(game, seconds).into()
}

/// The guide corridor: down the x=1 column, then right along the y=8 row.
fn corridor() -> Vec<MazeAction> {
    let mut moves = vec![MazeAction::Move(Direction::Down); 7];
    moves.extend(vec![MazeAction::Move(Direction::Right); 7]);
    moves
}

#[tokio::test(start_paused = true)]
async fn test_ticks_propagate_updates_every_second() {
    init_tracing();
    let observer = Arc::new(Recording::default());
    let handle = spawn_session(maze_session(300), observer.clone());

    tokio::time::sleep(Duration::from_millis(4500)).await;
    assert_eq!(observer.update_count(), 4);
    assert!(observer.completions().is_empty());

    handle.shutdown().await;
    handle.join().await;
}

#[tokio::test(start_paused = true)]
async fn test_walking_to_the_exit_completes_with_success() {
    init_tracing();
    let observer = Arc::new(Recording::default());
    let handle = spawn_session(maze_session(300), observer.clone());

    for action in corridor() {
        handle.apply(action).await;
        // Let the driver drain the command without crossing a tick.
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    // 14 committed moves, no full second elapsed: score 300*3 + 3*50 + 100.
    assert_eq!(observer.completions(), vec![(true, 1150)]);
    assert_eq!(observer.update_count(), 14);
    handle.join().await;
}

#[tokio::test(start_paused = true)]
async fn test_no_tick_fires_after_completion() {
    init_tracing();
    let observer = Arc::new(Recording::default());
    let handle = spawn_session(maze_session(300), observer.clone());

    for action in corridor() {
        handle.apply(action).await;
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    let settled = observer.update_count();

    // A live timer after termination would keep pushing updates.
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(observer.update_count(), settled);
    assert_eq!(observer.completions().len(), 1);

    // Gestures after completion are dropped silently.
    handle.apply(MazeAction::Move(Direction::Up)).await;
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(observer.update_count(), settled);
    handle.join().await;
}

#[tokio::test(start_paused = true)]
async fn test_timeout_completes_with_failure() {
    init_tracing();
    let observer = Arc::new(Recording::default());
    let handle = spawn_session(maze_session(2), observer.clone());

    tokio::time::sleep(Duration::from_secs(5)).await;
    // 0*3 + 3*50, no speed bonus at zero seconds.
    assert_eq!(observer.completions(), vec![(false, 150)]);
    handle.join().await;
}

#[tokio::test(start_paused = true)]
async fn test_rejected_gestures_produce_no_update() {
    init_tracing();
    let observer = Arc::new(Recording::default());
    let handle = spawn_session(maze_session(300), observer.clone());

    // (2, 1) is a wall directly right of the start.
    handle.apply(MazeAction::Move(Direction::Right)).await;
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(observer.update_count(), 0);
    handle.shutdown().await;
    handle.join().await;
}
