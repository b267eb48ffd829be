//! Session-facing state and mutations for Mirror Maze.

use super::rules;
use super::types::{Direction, GridPos, MazeGrid};
use crate::config::SessionConfig;
use crate::games::{Applied, GameKind, MiniGame, PlayerSlot};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A user gesture in the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "direction", rename_all = "snake_case")]
pub enum MazeAction {
    /// Step one cell in the given direction.
    Move(Direction),
}

/// Mirror Maze puzzle and progress.
///
/// The grid, start, and exit are fixed at generation. Only the runner's
/// position moves, and only through committed [`MazeAction::Move`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorMaze {
    grid: MazeGrid,
    player: GridPos,
    exit: GridPos,
    hints_remaining: u32,
}

impl MirrorMaze {
    /// The full layout, visible only to the maze guide (slot A).
    pub fn layout_for(&self, slot: PlayerSlot) -> Option<&MazeGrid> {
        match slot {
            PlayerSlot::A => Some(&self.grid),
            PlayerSlot::B => None,
        }
    }

    /// The exit cell, visible only to the maze guide (slot A).
    pub fn exit_for(&self, slot: PlayerSlot) -> Option<GridPos> {
        match slot {
            PlayerSlot::A => Some(self.exit),
            PlayerSlot::B => None,
        }
    }

    /// The runner's current position (visible to both players).
    pub fn player(&self) -> GridPos {
        self.player
    }

    /// Hints still available.
    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    pub(crate) fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn exit(&self) -> GridPos {
        self.exit
    }

    #[cfg(test)]
    pub(crate) fn with_player_at(mut self, pos: GridPos) -> Self {
        self.player = pos;
        self
    }
}

impl MiniGame for MirrorMaze {
    type Action = MazeAction;

    // The layout is static in the current design; `rng` stays threaded so
    // a randomized generator slots in without an interface change.
    #[instrument(skip(config, _rng))]
    fn generate<R: Rng + ?Sized>(config: &SessionConfig, _rng: &mut R) -> Self {
        debug!(hints = *config.mirror_maze().hints(), "Laying out maze");
        Self {
            grid: rules::standard_grid(),
            player: rules::START,
            exit: rules::EXIT,
            hints_remaining: *config.mirror_maze().hints(),
        }
    }

    fn initial_time(config: &SessionConfig) -> u32 {
        *config.mirror_maze().time_limit()
    }

    fn kind(&self) -> GameKind {
        GameKind::MirrorMaze
    }

    #[instrument(skip(self))]
    fn apply(&mut self, action: &MazeAction) -> Applied {
        let MazeAction::Move(dir) = action;
        let destination = self.player.stepped(*dir);
        // Walls reject the step; clamping already handled the edges.
        let applied = if destination == self.player || self.grid.has_wall(destination) {
            Applied::Rejected
        } else {
            self.player = destination;
            Applied::Committed
        };
        rules::assert_invariants(self);
        applied
    }

    fn take_hint(&mut self) -> Applied {
        if self.hints_remaining > 0 {
            self.hints_remaining -= 1;
            Applied::Committed
        } else {
            Applied::Rejected
        }
    }

    fn is_solved(&self) -> bool {
        self.player == self.exit
    }

    fn is_exhausted(&self) -> bool {
        // Only the countdown can fail a maze run.
        false
    }

    fn score(&self, time_remaining: u32) -> u32 {
        rules::score(time_remaining, self.hints_remaining)
    }

    fn describe_progress(&self) -> String {
        format!("Runner at {}", self.player)
    }

    fn remaining_hints(&self) -> Option<u32> {
        Some(self.hints_remaining)
    }
}
