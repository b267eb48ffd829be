//! Layout and scoring rules for Mirror Maze.

use super::game::MirrorMaze;
use super::types::{GridPos, MazeGrid};
use crate::session::{Invariant, InvariantViolation};

/// Score weight on remaining seconds.
const TIME_WEIGHT: u32 = 3;
/// Score awarded per unspent hint.
const HINT_BONUS: u32 = 50;
/// Flat bonus for a fast finish.
const SPEED_BONUS: u32 = 100;
/// Remaining seconds above which the speed bonus applies.
const SPEED_THRESHOLD: u32 = 120;

/// Runner start cell.
pub const START: GridPos = GridPos { x: 1, y: 1 };
/// Exit cell.
pub const EXIT: GridPos = GridPos { x: 8, y: 8 };

/// Wall cells of the standard layout.
///
/// The column x=1 and the row y=8 stay clear so the maze is solvable;
/// (2, 1) walls off the shortcut right of the start.
const WALLS: [GridPos; 10] = [
    GridPos { x: 2, y: 1 },
    GridPos { x: 5, y: 2 },
    GridPos { x: 0, y: 3 },
    GridPos { x: 3, y: 3 },
    GridPos { x: 6, y: 4 },
    GridPos { x: 8, y: 5 },
    GridPos { x: 4, y: 6 },
    GridPos { x: 7, y: 6 },
    GridPos { x: 2, y: 7 },
    GridPos { x: 5, y: 9 },
];

/// The fixed 10x10 layout used by every session.
pub fn standard_grid() -> MazeGrid {
    MazeGrid::new(WALLS.to_vec())
}

/// Weighted final score.
///
/// `time_remaining * 3 + hints_remaining * 50`, plus a flat 100 when more
/// than 120 seconds remain.
pub fn score(time_remaining: u32, hints_remaining: u32) -> u32 {
    let speed = if time_remaining > SPEED_THRESHOLD {
        SPEED_BONUS
    } else {
        0
    };
    time_remaining * TIME_WEIGHT + hints_remaining * HINT_BONUS + speed
}

/// Invariant: the runner is always inside the grid.
pub struct RunnerInBounds;

impl Invariant<MirrorMaze> for RunnerInBounds {
    fn holds(maze: &MirrorMaze) -> bool {
        maze.player().in_bounds()
    }

    fn description() -> &'static str {
        "Runner position stays inside the grid"
    }
}

/// Invariant: the runner never stands inside a wall.
pub struct RunnerOffWalls;

impl Invariant<MirrorMaze> for RunnerOffWalls {
    fn holds(maze: &MirrorMaze) -> bool {
        !maze.grid().has_wall(maze.player())
    }

    fn description() -> &'static str {
        "Runner position is never a wall cell"
    }
}

/// Asserts maze invariants after a mutation (debug builds).
pub fn assert_invariants(maze: &MirrorMaze) {
    debug_assert!(
        RunnerInBounds::holds(maze),
        "{}",
        InvariantViolation::new(RunnerInBounds::description())
    );
    debug_assert!(
        RunnerOffWalls::holds(maze),
        "{}",
        InvariantViolation::new(RunnerOffWalls::description())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_exit_are_clear() {
        let grid = standard_grid();
        assert!(!grid.has_wall(START));
        assert!(!grid.has_wall(EXIT));
    }

    #[test]
    fn test_guide_corridor_is_clear() {
        // Down the x=1 column, then right along the y=8 row.
        let grid = standard_grid();
        for y in 1..=8 {
            assert!(!grid.has_wall(GridPos::new(1, y)), "wall at (1, {y})");
        }
        for x in 1..=8 {
            assert!(!grid.has_wall(GridPos::new(x, 8)), "wall at ({x}, 8)");
        }
    }

    #[test]
    fn test_score_weights() {
        assert_eq!(score(150, 2), 150 * 3 + 2 * 50 + 100);
        // At or under the threshold, no speed bonus.
        assert_eq!(score(120, 0), 360);
        assert_eq!(score(0, 3), 150);
    }
}
