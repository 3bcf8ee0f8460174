//! Basic strategy tables. Rows and rules are matched in order.

use super::{Condition, Play, Row, Rule, Upcards};

const ANY: Upcards = Upcards::range(2, 11);
const TWO_TO_SIX: Upcards = Upcards::range(2, 6);
const TWO_TO_SEVEN: Upcards = Upcards::range(2, 7);
const NINE_TEN_ACE: Upcards = Upcards::of(&[9, 10, 11]);

/// Late surrender, hard totals on the first decision only.
pub(super) const SURRENDER: &[Row] = &[
    Row::only(16, 16, &[Rule::vs(NINE_TEN_ACE, Play::Surrender)]),
    Row::only(15, 15, &[Rule::vs(Upcards::of(&[10]), Play::Surrender)]),
];

/// Pairs, keyed by the card value of either card. Fives have no row and
/// play as hard 10.
pub(super) const PAIRS: &[Row] = &[
    Row::new(11, 11, &[], Play::Split),
    Row::new(10, 10, &[], Play::Stand),
    Row::new(
        9,
        9,
        &[Rule::vs(Upcards::of(&[2, 3, 4, 5, 6, 8, 9]), Play::Split)],
        Play::Stand,
    ),
    Row::new(8, 8, &[], Play::Split),
    Row::new(7, 7, &[Rule::vs(TWO_TO_SEVEN, Play::Split)], Play::Hit),
    Row::new(6, 6, &[Rule::vs(TWO_TO_SIX, Play::Split)], Play::Hit),
    Row::new(
        4,
        4,
        &[Rule::vs(Upcards::of(&[5, 6]), Play::Split).when(Condition::DoubleAfterSplit)],
        Play::Hit,
    ),
    Row::new(2, 3, &[Rule::vs(TWO_TO_SEVEN, Play::Split)], Play::Hit),
];

/// Soft totals. Totals below 13 have no row and play as hard totals.
pub(super) const SOFT: &[Row] = &[
    Row::new(20, 21, &[], Play::Stand),
    Row::new(
        19,
        19,
        &[Rule::vs(Upcards::of(&[6]), Play::DoubleOrStand).when(Condition::DealerHitsSoft17)],
        Play::Stand,
    ),
    Row::new(
        18,
        18,
        &[
            Rule::vs(TWO_TO_SIX, Play::DoubleOrStand),
            Rule::vs(NINE_TEN_ACE, Play::Hit),
        ],
        Play::Stand,
    ),
    Row::new(
        17,
        17,
        &[Rule::vs(Upcards::range(3, 6), Play::DoubleOrHit)],
        Play::Hit,
    ),
    Row::new(
        15,
        16,
        &[Rule::vs(Upcards::range(4, 6), Play::DoubleOrHit)],
        Play::Hit,
    ),
    Row::new(
        13,
        14,
        &[Rule::vs(Upcards::range(5, 6), Play::DoubleOrHit)],
        Play::Hit,
    ),
];

/// Hard totals. Covers every total, including busts.
pub(super) const HARD: &[Row] = &[
    Row::new(17, u8::MAX, &[], Play::Stand),
    Row::new(13, 16, &[Rule::vs(TWO_TO_SIX, Play::Stand)], Play::Hit),
    Row::new(12, 12, &[Rule::vs(Upcards::range(4, 6), Play::Stand)], Play::Hit),
    Row::new(11, 11, &[Rule::vs(ANY, Play::DoubleOrHit)], Play::Hit),
    Row::new(
        10,
        10,
        &[Rule::vs(Upcards::range(2, 9), Play::DoubleOrHit)],
        Play::Hit,
    ),
    Row::new(
        9,
        9,
        &[Rule::vs(Upcards::range(3, 6), Play::DoubleOrHit)],
        Play::Hit,
    ),
    Row::new(0, 8, &[], Play::Hit),
];
