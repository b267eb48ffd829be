//! Tests for Mirror Maze movement, countdown, and terminal behavior.

use dual_minds::{
    ActiveSession, Direction, GridPos, MazeAction, MirrorMaze, Outcome, PlayerSlot, SessionConfig,
    SessionState, SessionStep,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn begin() -> ActiveSession<MirrorMaze> {
    ActiveSession::begin(&SessionConfig::default(), &mut StdRng::seed_from_u64(1))
}

/// The guide corridor: down the x=1 column, then right along the y=8 row.
fn corridor() -> Vec<MazeAction> {
    let mut moves = vec![MazeAction::Move(Direction::Down); 7];
    moves.extend(vec![MazeAction::Move(Direction::Right); 7]);
    moves
}

#[test]
fn test_unobstructed_path_reaches_the_exit() {
    let mut session = begin();
    assert_eq!(session.game().player(), GridPos::new(1, 1));

    let moves = corridor();
    let (last, init) = moves.split_last().expect("non-empty path");
    for action in init {
        session = match session.apply(action) {
            SessionStep::Active(s) => s,
            SessionStep::Completed(_) => panic!("exit reached before the last step"),
        };
    }

    match session.apply(last) {
        SessionStep::Completed(done) => {
            assert_eq!(done.game().player(), GridPos::new(8, 8));
            assert_eq!(done.outcome(), Outcome::Success);
            // Untouched countdown and hints: 300*3 + 3*50 + 100.
            assert_eq!(done.score(), 1150);
        }
        SessionStep::Active(s) => panic!("expected exit at (8, 8), runner at {}", s.game().player()),
    }
}

#[test]
fn test_walled_cell_rejects_the_move() {
    let session = begin();
    // (2, 1) is a wall directly right of the start.
    match session.apply(&MazeAction::Move(Direction::Right)) {
        SessionStep::Active(s) => assert_eq!(s.game().player(), GridPos::new(1, 1)),
        SessionStep::Completed(_) => panic!("rejected move cannot end the session"),
    }
}

#[test]
fn test_success_is_reported_exactly_once() {
    let mut state: SessionState<MirrorMaze> = begin().into();
    for action in corridor() {
        state = state.apply(&action);
    }
    assert!(state.is_over());
    assert_eq!(state.outcome(), Some(Outcome::Success));
    let frozen = state.clone();

    // Further moves and ticks must change nothing.
    state = state.apply(&MazeAction::Move(Direction::Up));
    state = state.tick();
    assert_eq!(state, frozen);
    assert_eq!(state.score(), frozen.score());
}

#[test]
fn test_time_is_non_increasing_and_never_negative() {
    let mut state: SessionState<MirrorMaze> = begin().into();
    let mut previous = state.time_remaining();
    // Run well past the 300 second budget.
    for _ in 0..400 {
        state = state.tick();
        let now = state.time_remaining();
        assert!(now <= previous, "countdown must never increase");
        previous = now;
    }
    assert_eq!(state.time_remaining(), 0);
    assert_eq!(state.outcome(), Some(Outcome::Failure));
}

#[test]
fn test_hint_requests_at_zero_budget_are_rejected() {
    let mut session = begin();
    for _ in 0..3 {
        assert!(session.request_hint().is_committed());
    }
    assert!(!session.request_hint().is_committed());
    assert_eq!(session.game().hints_remaining(), 0);
}

#[test]
fn test_only_the_guide_sees_the_layout() {
    let session = begin();
    assert!(session.game().layout_for(PlayerSlot::A).is_some());
    assert!(session.game().layout_for(PlayerSlot::B).is_none());
    assert_eq!(session.game().exit_for(PlayerSlot::A), Some(GridPos::new(8, 8)));
    assert_eq!(session.game().exit_for(PlayerSlot::B), None);
}
