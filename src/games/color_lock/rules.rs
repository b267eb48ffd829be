//! Matching and scoring rules for Color Code Lock.
//!
//! Pure functions over the lock state, separated from storage so they can
//! be exercised and reasoned about independently.

use super::game::ColorCodeLock;
use super::types::{Color, CODE_LEN};
use crate::session::{Invariant, InvariantViolation};

/// Score weight on remaining seconds.
const TIME_WEIGHT: u32 = 2;
/// Score awarded per unspent attempt.
const ATTEMPT_BONUS: u32 = 100;
/// Flat bonus for a fully entered code.
const COMPLETION_BONUS: u32 = 200;

/// Elementwise comparison of the entered code against the target.
///
/// Both length and per-position values must match.
pub fn sequence_matches(input: &[Color], target: &[Color; CODE_LEN]) -> bool {
    input.len() == target.len() && input.iter().zip(target.iter()).all(|(a, b)| a == b)
}

/// Weighted final score.
///
/// `time_remaining * 2 + attempts_remaining * 100`, plus a flat 200 when
/// the entered code reached the target length.
pub fn score(time_remaining: u32, attempts_remaining: u32, input_len: usize) -> u32 {
    let completion = if input_len == CODE_LEN {
        COMPLETION_BONUS
    } else {
        0
    };
    time_remaining * TIME_WEIGHT + attempts_remaining * ATTEMPT_BONUS + completion
}

/// Invariant: the entered code never exceeds the target length.
pub struct InputWithinTarget;

impl Invariant<ColorCodeLock> for InputWithinTarget {
    fn holds(lock: &ColorCodeLock) -> bool {
        lock.input().len() <= CODE_LEN
    }

    fn description() -> &'static str {
        "Entered code never exceeds the target length"
    }
}

/// Invariant: hint usage never exceeds the cumulative cap.
pub struct HintsWithinCap;

impl Invariant<ColorCodeLock> for HintsWithinCap {
    fn holds(lock: &ColorCodeLock) -> bool {
        lock.hints_used() <= lock.hint_cap()
    }

    fn description() -> &'static str {
        "Hints taken never exceed the cumulative cap"
    }
}

/// Asserts lock invariants after a mutation (debug builds).
pub fn assert_invariants(lock: &ColorCodeLock) {
    debug_assert!(
        InputWithinTarget::holds(lock),
        "{}",
        InvariantViolation::new(InputWithinTarget::description())
    );
    debug_assert!(
        HintsWithinCap::holds(lock),
        "{}",
        InvariantViolation::new(HintsWithinCap::description())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let target = [Color::Red, Color::Blue, Color::Green, Color::Yellow, Color::Purple];
        let input = target.to_vec();
        assert!(sequence_matches(&input, &target));
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        let target = [Color::Red, Color::Blue, Color::Green, Color::Yellow, Color::Purple];
        assert!(!sequence_matches(&[Color::Red, Color::Blue], &target));
    }

    #[test]
    fn test_positional_mismatch() {
        let target = [Color::Red, Color::Blue, Color::Green, Color::Yellow, Color::Purple];
        let input = vec![Color::Blue, Color::Red, Color::Green, Color::Yellow, Color::Purple];
        assert!(!sequence_matches(&input, &target));
    }

    #[test]
    fn test_score_weights() {
        assert_eq!(score(60, 3, CODE_LEN), 60 * 2 + 3 * 100 + 200);
        // Cleared input after a failed run earns no completion bonus.
        assert_eq!(score(0, 0, 0), 0);
    }
}
