//! Count-based deviations from basic strategy.

extern crate alloc;

use alloc::format;

use crate::action::Action;
use crate::card::Rank;
use crate::hand::evaluate_hand;
use crate::options::Rules;
use crate::result::Deviated;
use crate::strategy::{HandCategory, Play};

/// True count at or above which insurance against an ace is profitable.
pub const INSURANCE_INDEX: f64 = 3.0;

/// Which basic strategy actions an index may replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Replaces {
    /// Only a basic hit. Surrender stays preferred where it is offered.
    Hit,
    Any,
}

impl Replaces {
    const fn permits(self, basic: Action) -> bool {
        match self {
            Self::Hit => matches!(basic, Action::Hit),
            Self::Any => true,
        }
    }
}

/// A hard-total play index.
#[derive(Debug, Clone, Copy)]
struct Index {
    total: u8,
    upcard: u8,
    threshold: i8,
    play: Play,
    replaces: Replaces,
}

const INDICES: &[Index] = &[
    Index {
        total: 16,
        upcard: 10,
        threshold: 0,
        play: Play::Stand,
        replaces: Replaces::Hit,
    },
    Index {
        total: 15,
        upcard: 10,
        threshold: 4,
        play: Play::Stand,
        replaces: Replaces::Hit,
    },
    Index {
        total: 12,
        upcard: 3,
        threshold: 2,
        play: Play::Stand,
        replaces: Replaces::Any,
    },
    Index {
        total: 12,
        upcard: 2,
        threshold: 3,
        play: Play::Stand,
        replaces: Replaces::Any,
    },
    Index {
        total: 10,
        upcard: 10,
        threshold: 4,
        play: Play::Double,
        replaces: Replaces::Any,
    },
    Index {
        total: 11,
        upcard: 11,
        threshold: 1,
        play: Play::Double,
        replaces: Replaces::Any,
    },
];

const fn upcard_label(value: u8) -> &'static str {
    match value {
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        _ => "A",
    }
}

/// Applies count-based deviations to a basic strategy action.
///
/// Only hard, non-pair hands have indices; soft and pair hands always keep
/// the basic action. A doubling index recommends DOUBLE whatever the number
/// of cards in the hand.
///
/// `rules` is currently unused: no index depends on the table rules.
///
/// # Example
///
/// ```
/// use bjadvisor::{Action, Rank, Rules, apply_deviations};
///
/// let hand = [Rank::Ten, Rank::Six];
/// let deviated = apply_deviations(Action::Hit, &hand, Rank::King, 0.0, &Rules::default());
/// assert_eq!(deviated.action, Action::Stand);
/// assert_eq!(
///     deviated.explanation,
///     "Basic strategy says HIT. Deviation applies (16 vs 10, TC 0.0 >= 0) -> STAND."
/// );
/// ```
#[must_use]
pub fn apply_deviations(
    basic: Action,
    cards: &[Rank],
    upcard: Rank,
    true_count: f64,
    _rules: &Rules,
) -> Deviated {
    let value = evaluate_hand(cards);
    let upcard = upcard.value();

    let indices = if HandCategory::of(&value) == HandCategory::Hard {
        INDICES
    } else {
        &[]
    };

    let fired = indices
        .iter()
        .find(|index| {
            index.total == value.total
                && index.upcard == upcard
                && true_count >= f64::from(index.threshold)
        })
        .filter(|index| index.replaces.permits(basic))
        .map(|index| (index, index.play.action(cards.len() == 2)))
        .filter(|&(_, action)| action != basic);

    let Some((index, action)) = fired else {
        return Deviated {
            action: basic,
            explanation: format!("Basic strategy says {basic}. No deviation applies."),
        };
    };

    log::debug!(
        "deviation {} vs {} at true count {true_count:.1}: {basic} -> {action}",
        index.total,
        upcard_label(index.upcard)
    );

    Deviated {
        action,
        explanation: format!(
            "Basic strategy says {basic}. Deviation applies ({} vs {}, TC {true_count:.1} >= {}) -> {action}.",
            index.total,
            upcard_label(index.upcard),
            index.threshold
        ),
    }
}

/// Returns whether insurance should be taken against this upcard.
///
/// Insurance is only offered against an ace and pays at a true count of
/// [`INSURANCE_INDEX`] or more.
#[must_use]
pub fn insurance_advised(upcard: Rank, true_count: f64) -> bool {
    upcard.is_ace() && true_count >= INSURANCE_INDEX
}
