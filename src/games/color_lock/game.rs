//! Session-facing state and mutations for Color Code Lock.

use super::rules;
use super::types::{Color, CODE_LEN};
use crate::config::SessionConfig;
use crate::games::{Applied, GameKind, MiniGame, PlayerSlot};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A user gesture on the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "color", rename_all = "snake_case")]
pub enum LockAction {
    /// Press one color button, appending it to the entered code.
    Press(Color),
    /// Submit the entered code for comparison against the target.
    Submit,
}

/// Color Code Lock puzzle and progress.
///
/// The target sequence is generated once and never changes; the entered
/// input, attempt budget, and hint budget move only through [`MiniGame`]
/// entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCodeLock {
    target: [Color; CODE_LEN],
    input: Vec<Color>,
    attempts_remaining: u32,
    hints_used: u32,
    hint_cap: u32,
}

impl ColorCodeLock {
    /// The secret sequence, visible only to the sequence keeper (slot A).
    pub fn target_for(&self, slot: PlayerSlot) -> Option<&[Color; CODE_LEN]> {
        match slot {
            PlayerSlot::A => Some(&self.target),
            PlayerSlot::B => None,
        }
    }

    /// Colors entered so far.
    pub fn input(&self) -> &[Color] {
        &self.input
    }

    /// Wrong submissions still allowed.
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Hints taken so far.
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Cumulative hint cap for this session.
    pub fn hint_cap(&self) -> u32 {
        self.hint_cap
    }

    #[cfg(test)]
    pub(crate) fn target(&self) -> &[Color; CODE_LEN] {
        &self.target
    }

    #[cfg(test)]
    pub(crate) fn with_target(target: [Color; CODE_LEN], config: &SessionConfig) -> Self {
        Self {
            target,
            input: Vec::new(),
            attempts_remaining: *config.color_lock().attempts(),
            hints_used: 0,
            hint_cap: *config.color_lock().hint_cap(),
        }
    }
}

impl MiniGame for ColorCodeLock {
    type Action = LockAction;

    #[instrument(skip(config, rng))]
    fn generate<R: Rng + ?Sized>(config: &SessionConfig, rng: &mut R) -> Self {
        let target =
            std::array::from_fn(|_| Color::PALETTE[rng.gen_range(0..Color::PALETTE.len())]);
        debug!(attempts = *config.color_lock().attempts(), "Generated lock code");
        Self {
            target,
            input: Vec::new(),
            attempts_remaining: *config.color_lock().attempts(),
            hints_used: 0,
            hint_cap: *config.color_lock().hint_cap(),
        }
    }

    fn initial_time(config: &SessionConfig) -> u32 {
        *config.color_lock().time_limit()
    }

    fn kind(&self) -> GameKind {
        GameKind::ColorCodeLock
    }

    #[instrument(skip(self))]
    fn apply(&mut self, action: &LockAction) -> Applied {
        let applied = match action {
            LockAction::Press(color) => {
                // The entered code never grows past the target length.
                if self.input.len() >= CODE_LEN {
                    Applied::Rejected
                } else {
                    self.input.push(*color);
                    Applied::Committed
                }
            }
            LockAction::Submit => {
                if !rules::sequence_matches(&self.input, &self.target) {
                    self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
                    self.input.clear();
                    debug!(
                        attempts_remaining = self.attempts_remaining,
                        "Wrong code submitted"
                    );
                }
                Applied::Committed
            }
        };
        rules::assert_invariants(self);
        applied
    }

    fn take_hint(&mut self) -> Applied {
        if self.hints_used < self.hint_cap {
            self.hints_used += 1;
            Applied::Committed
        } else {
            Applied::Rejected
        }
    }

    fn is_solved(&self) -> bool {
        rules::sequence_matches(&self.input, &self.target)
    }

    fn is_exhausted(&self) -> bool {
        self.attempts_remaining == 0 && !self.is_solved()
    }

    fn score(&self, time_remaining: u32) -> u32 {
        rules::score(time_remaining, self.attempts_remaining, self.input.len())
    }

    fn describe_progress(&self) -> String {
        format!("{}/{} colors entered", self.input.len(), CODE_LEN)
    }

    fn remaining_attempts(&self) -> Option<u32> {
        Some(self.attempts_remaining)
    }

    fn remaining_hints(&self) -> Option<u32> {
        Some(self.hint_cap - self.hints_used)
    }
}
