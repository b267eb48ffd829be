//! Color Code Lock: one player reads a secret color sequence, the other
//! enters it on a six-color button grid under a shared countdown.

mod game;
mod rules;
mod types;

pub use game::{ColorCodeLock, LockAction};
pub use types::{Color, CODE_LEN};
