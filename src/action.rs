//! Player actions.

use core::fmt;

/// A recommended player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, receive one card, then stand.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Forfeit half the bet and end the hand.
    Surrender,
}

impl Action {
    /// Returns the upper-case name shown to players.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Stand => "STAND",
            Self::Double => "DOUBLE",
            Self::Split => "SPLIT",
            Self::Surrender => "SURRENDER",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
