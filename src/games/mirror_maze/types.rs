//! Core domain types for Mirror Maze.

use serde::{Deserialize, Serialize};

/// Side length of the square maze grid.
pub const GRID_SIZE: i32 = 10;

/// A step direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Decrease y by one.
    Up,
    /// Increase y by one.
    Down,
    /// Decrease x by one.
    Left,
    /// Increase x by one.
    Right,
}

impl Direction {
    /// Unit offset `(dx, dy)` for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct GridPos {
    /// Column, 0-based from the left.
    pub x: i32,
    /// Row, 0-based from the top.
    pub y: i32,
}

impl GridPos {
    /// The position one step in `dir`, clamped to the grid bounds.
    pub fn stepped(self, dir: Direction) -> GridPos {
        let (dx, dy) = dir.offset();
        GridPos {
            x: (self.x + dx).clamp(0, GRID_SIZE - 1),
            y: (self.y + dy).clamp(0, GRID_SIZE - 1),
        }
    }

    /// True if the position lies inside the grid.
    pub fn in_bounds(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The static maze layout: wall cells on a 10x10 grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeGrid {
    walls: Vec<GridPos>,
}

impl MazeGrid {
    /// Creates a grid with the given wall set.
    pub fn new(walls: Vec<GridPos>) -> Self {
        Self { walls }
    }

    /// True if the cell is flagged as a wall.
    pub fn has_wall(&self, pos: GridPos) -> bool {
        self.walls.contains(&pos)
    }

    /// All wall cells.
    pub fn walls(&self) -> &[GridPos] {
        &self.walls
    }
}
