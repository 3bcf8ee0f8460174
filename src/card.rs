//! Card ranks and their derived values.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseRankError;

/// A card rank. Suits never matter for strategy or counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

/// Every rank, in ascending order.
pub const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Number of cards per deck.
pub const DECK_SIZE: u8 = 52;

impl Rank {
    /// Returns the value used for totaling a hand.
    ///
    /// Face cards count 10 and an ace counts 11; hand evaluation demotes
    /// aces to 1 when needed.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Returns the Hi-Lo count weight of the rank.
    #[must_use]
    pub const fn hi_lo_weight(self) -> i8 {
        match self {
            Self::Two | Self::Three | Self::Four | Self::Five | Self::Six => 1,
            Self::Seven | Self::Eight | Self::Nine => 0,
            Self::Ten | Self::Jack | Self::Queen | Self::King | Self::Ace => -1,
        }
    }

    /// Returns whether the rank is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Returns the canonical label (`2`-`10`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    /// Parses a rank label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANKS
            .iter()
            .copied()
            .find(|rank| rank.label().eq_ignore_ascii_case(s))
            .ok_or(ParseRankError)
    }
}
