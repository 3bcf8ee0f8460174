//! Hand evaluation.

use crate::card::Rank;

/// Evaluated totals of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandValue {
    /// Best total: aces are demoted from 11 to 1 only as far as needed to
    /// stay at or under 21. Bust totals pass through.
    pub total: u8,
    /// Whether an ace is still counted as 11.
    pub is_soft: bool,
    /// Whether the hand is exactly two cards of equal card value.
    pub is_pair: bool,
}

impl HandValue {
    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// Returns whether the total is hard and the hand is not a pair.
    #[must_use]
    pub const fn is_hard_non_pair(&self) -> bool {
        !self.is_soft && !self.is_pair
    }
}

/// Evaluates a hand.
///
/// Pairs compare card *value*, not rank: a ten and a king form a pair. An
/// empty hand evaluates to zero. At most one ace can count as 11 without
/// busting, so it is promoted only if the hand stays at or under 21. Totals
/// beyond `u8::MAX` saturate.
///
/// # Example
///
/// ```
/// use bjadvisor::{Rank, evaluate_hand};
///
/// let value = evaluate_hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
/// assert_eq!(value.total, 21);
/// assert!(value.is_soft);
/// assert!(!value.is_pair);
/// ```
#[must_use]
pub fn evaluate_hand(cards: &[Rank]) -> HandValue {
    let hard: u32 = cards
        .iter()
        .map(|card| if card.is_ace() { 1 } else { u32::from(card.value()) })
        .sum();
    let is_soft = cards.iter().any(|card| card.is_ace()) && hard + 10 <= 21;
    let total = if is_soft { hard + 10 } else { hard };

    let is_pair = matches!(cards, [first, second] if first.value() == second.value());

    HandValue {
        total: u8::try_from(total).unwrap_or(u8::MAX),
        is_soft,
        is_pair,
    }
}
