//! Core domain types for Color Code Lock.

use serde::{Deserialize, Serialize};

/// Length of the secret code.
pub const CODE_LEN: usize = 5;

/// The six-color button palette.
///
/// Codes are drawn independently and uniformly from this palette,
/// repeats allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Red button.
    Red,
    /// Blue button.
    Blue,
    /// Green button.
    Green,
    /// Yellow button.
    Yellow,
    /// Purple button.
    Purple,
    /// Orange button.
    Orange,
}

impl Color {
    /// All palette colors, in button-grid order.
    pub const PALETTE: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    /// Display label for this color.
    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Purple => "Purple",
            Color::Orange => "Orange",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_palette_covers_every_color() {
        let iterated: Vec<Color> = Color::iter().collect();
        assert_eq!(iterated, Color::PALETTE);
    }
}
