//! Budget configuration for mini-game sessions.
//!
//! Budgets are the starting time, attempt, and hint allowances handed to a
//! session when its puzzle is generated. Hosts may deserialize overrides
//! from TOML; every field falls back to the canonical default.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Budgets for all mini-game variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct SessionConfig {
    /// Color Code Lock budgets.
    color_lock: LockConfig,
    /// Mirror Maze budgets.
    mirror_maze: MazeConfig,
    /// Circuit Swap budgets.
    circuit_swap: CircuitConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            color_lock: LockConfig::default(),
            mirror_maze: MazeConfig::default(),
            circuit_swap: CircuitConfig::default(),
        }
    }
}

/// Color Code Lock budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct LockConfig {
    /// Countdown budget in seconds.
    time_limit: u32,
    /// Wrong submissions allowed before the lock seals.
    attempts: u32,
    /// Cumulative hint cap for the session.
    hint_cap: u32,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            time_limit: 180,
            attempts: 5,
            hint_cap: 3,
        }
    }
}

/// Mirror Maze budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct MazeConfig {
    /// Countdown budget in seconds.
    time_limit: u32,
    /// Consumable hint counter.
    hints: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            time_limit: 300,
            hints: 3,
        }
    }
}

/// Circuit Swap budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct CircuitConfig {
    /// Countdown budget in seconds.
    time_limit: u32,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self { time_limit: 240 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(*config.color_lock().time_limit(), 180);
        assert_eq!(*config.color_lock().attempts(), 5);
        assert_eq!(*config.mirror_maze().hints(), 3);
        assert_eq!(*config.circuit_swap().time_limit(), 240);
    }

    #[test]
    fn test_partial_toml_override() {
        let config: SessionConfig = toml::from_str(
            r#"
            [color_lock]
            time_limit = 90
            "#,
        )
        .expect("valid config");

        assert_eq!(*config.color_lock().time_limit(), 90);
        // Unspecified fields keep their defaults.
        assert_eq!(*config.color_lock().attempts(), 5);
        assert_eq!(*config.mirror_maze().time_limit(), 300);
    }
}
