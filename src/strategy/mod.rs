//! Basic strategy resolution.
//!
//! Each hand category has an ordered table of rows keyed by hand total (or
//! pair card value). A row holds an ordered list of upcard rules and a
//! fallback play. Categories are consulted in priority order: surrender,
//! pairs, soft totals, hard totals. A category whose table has no matching
//! row, or whose row has no fallback, defers to the next category.

use crate::action::Action;
use crate::card::Rank;
use crate::hand::{HandValue, evaluate_hand};
use crate::options::Rules;

mod table;

/// Strategy category of an evaluated hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    /// Two cards of equal value.
    Pair,
    /// An ace still counts as 11.
    Soft,
    /// Everything else.
    Hard,
}

impl HandCategory {
    /// Classifies an evaluated hand. A pair of aces is a pair, not a soft hand.
    #[must_use]
    pub const fn of(value: &HandValue) -> Self {
        if value.is_pair {
            Self::Pair
        } else if value.is_soft {
            Self::Soft
        } else {
            Self::Hard
        }
    }
}

/// Set of dealer upcard values, where 11 denotes an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Upcards(u16);

impl Upcards {
    pub(crate) const fn range(low: u8, high: u8) -> Self {
        let mut bits = 0u16;
        let mut value = low;
        while value <= high {
            bits |= 1 << value;
            value += 1;
        }
        Self(bits)
    }

    pub(crate) const fn of(values: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < values.len() {
            bits |= 1 << values[i];
            i += 1;
        }
        Self(bits)
    }

    pub(crate) const fn contains(self, value: u8) -> bool {
        value < 16 && self.0 & (1 << value) != 0
    }
}

/// Table rule that must hold for a strategy rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Condition {
    Always,
    DoubleAfterSplit,
    DealerHitsSoft17,
}

impl Condition {
    const fn holds(self, rules: &Rules) -> bool {
        match self {
            Self::Always => true,
            Self::DoubleAfterSplit => rules.double_after_split,
            Self::DealerHitsSoft17 => rules.dealer_hits_soft_17(),
        }
    }
}

/// A table entry. Basic strategy only doubles as a first decision, so its
/// double plays carry the action to take otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Play {
    Hit,
    Stand,
    Split,
    Surrender,
    /// Double regardless of hand size. Used by count indices.
    Double,
    DoubleOrHit,
    DoubleOrStand,
}

impl Play {
    pub(crate) const fn action(self, first_decision: bool) -> Action {
        match self {
            Self::Hit => Action::Hit,
            Self::Stand => Action::Stand,
            Self::Split => Action::Split,
            Self::Surrender => Action::Surrender,
            Self::Double => Action::Double,
            Self::DoubleOrHit | Self::DoubleOrStand if first_decision => Action::Double,
            Self::DoubleOrHit => Action::Hit,
            Self::DoubleOrStand => Action::Stand,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    pub(crate) upcards: Upcards,
    pub(crate) condition: Condition,
    pub(crate) play: Play,
}

impl Rule {
    pub(crate) const fn vs(upcards: Upcards, play: Play) -> Self {
        Self {
            upcards,
            condition: Condition::Always,
            play,
        }
    }

    pub(crate) const fn when(self, condition: Condition) -> Self {
        Self { condition, ..self }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Row {
    pub(crate) low: u8,
    pub(crate) high: u8,
    pub(crate) rules: &'static [Rule],
    pub(crate) otherwise: Option<Play>,
}

impl Row {
    pub(crate) const fn new(low: u8, high: u8, rules: &'static [Rule], otherwise: Play) -> Self {
        Self {
            low,
            high,
            rules,
            otherwise: Some(otherwise),
        }
    }

    /// A row with no fallback: when no rule matches, the next category decides.
    pub(crate) const fn only(low: u8, high: u8, rules: &'static [Rule]) -> Self {
        Self {
            low,
            high,
            rules,
            otherwise: None,
        }
    }
}

fn lookup(table: &[Row], key: u8, upcard: u8, rules: &Rules) -> Option<Play> {
    let row = table.iter().find(|row| (row.low..=row.high).contains(&key))?;
    row.rules
        .iter()
        .find(|rule| rule.upcards.contains(upcard) && rule.condition.holds(rules))
        .map(|rule| rule.play)
        .or(row.otherwise)
}

/// Resolves the basic strategy action for a hand against a dealer upcard.
///
/// Doubling is recommended only when the hand has exactly two cards;
/// otherwise the table's alternative (hit or stand) is returned.
///
/// # Example
///
/// ```
/// use bjadvisor::{Action, Rank, Rules, resolve_basic_strategy};
///
/// let rules = Rules::default();
/// let action = resolve_basic_strategy(&[Rank::Ace, Rank::Ace], Rank::Six, &rules);
/// assert_eq!(action, Action::Split);
/// ```
#[must_use]
pub fn resolve_basic_strategy(cards: &[Rank], upcard: Rank, rules: &Rules) -> Action {
    let value = evaluate_hand(cards);
    let first_decision = cards.len() == 2;
    let upcard = upcard.value();

    let surrender = || {
        (rules.surrender && first_decision && !value.is_soft)
            .then(|| lookup(table::SURRENDER, value.total, upcard, rules))
            .flatten()
    };
    let pair = || {
        cards
            .first()
            .filter(|_| value.is_pair)
            .and_then(|card| lookup(table::PAIRS, card.value(), upcard, rules))
    };
    let soft = || {
        value
            .is_soft
            .then(|| lookup(table::SOFT, value.total, upcard, rules))
            .flatten()
    };

    surrender()
        .or_else(pair)
        .or_else(soft)
        .or_else(|| lookup(table::HARD, value.total, upcard, rules))
        .unwrap_or(Play::Hit)
        .action(first_decision)
}
