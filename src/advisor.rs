//! Advisor session: rules, count and recommendations together.

extern crate alloc;

use crate::bet::recommended_bet_units;
use crate::card::Rank;
use crate::count::{CountState, CountTracker};
use crate::deviation::{INSURANCE_INDEX, apply_deviations, insurance_advised};
use crate::error::{AdviceError, CountError};
use crate::options::AdvisorOptions;
use crate::parse::{ParsedCards, parse_cards};
use crate::result::{CountStatus, Recommendation};
use crate::strategy::resolve_basic_strategy;

/// A decision-support session.
///
/// The advisor owns the table configuration and the count for one shoe.
/// Presentation layers feed it seen cards and ask it for recommendations.
///
/// # Example
///
/// ```
/// use bjadvisor::{Action, Advisor, AdvisorOptions};
///
/// let mut advisor = Advisor::new(AdvisorOptions::default());
/// advisor.observe("2 3 4 5 6");
///
/// let recommendation = advisor.recommend("10 2", "3").unwrap();
/// assert_eq!(recommendation.basic, Action::Hit);
/// assert_eq!(recommendation.action, Action::Hit);
/// ```
#[derive(Debug, Clone)]
pub struct Advisor {
    options: AdvisorOptions,
    tracker: CountTracker,
}

impl Advisor {
    /// Creates a session with an empty count.
    #[must_use]
    pub const fn new(options: AdvisorOptions) -> Self {
        Self {
            options,
            tracker: CountTracker::new(options.decks),
        }
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &AdvisorOptions {
        &self.options
    }

    /// Applies new options and starts a fresh count.
    pub fn reconfigure(&mut self, options: AdvisorOptions) {
        self.options = options;
        self.tracker.reset_with_decks(options.decks);
    }

    /// Returns the current count.
    #[must_use]
    pub const fn count(&self) -> CountState {
        self.tracker.state()
    }

    /// Returns the count figures and bet advice for display.
    #[must_use]
    pub fn status(&self) -> CountStatus {
        let state = self.tracker.state();
        let true_count = state.true_count();
        CountStatus {
            running_count: state.running_count,
            true_count,
            cards_seen: state.cards_seen,
            decks_remaining: state.decks_remaining(),
            bet_units: recommended_bet_units(true_count),
        }
    }

    /// Parses a line of seen cards and counts the valid ones.
    pub fn observe(&mut self, text: &str) -> ParsedCards {
        let parsed = parse_cards(text);
        self.tracker.record_cards(&parsed.cards);
        parsed
    }

    /// Counts one seen card.
    pub fn record_card(&mut self, rank: Rank) -> CountState {
        self.tracker.record_card(rank)
    }

    /// Reverses the most recently counted card.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::NothingToUndo`] if no card has been counted
    /// since the last reset.
    pub fn undo_last_card(&mut self) -> Result<CountState, CountError> {
        self.tracker.undo_last_card()
    }

    /// Clears the count after a shuffle.
    pub fn reset_count(&mut self) {
        self.tracker.reset();
    }

    /// Recommends a play from free-text hand and upcard input.
    ///
    /// Invalid tokens are skipped as in [`parse_cards`].
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two valid player cards or other than
    /// one valid dealer card remain after parsing.
    pub fn recommend(&self, hand: &str, upcard: &str) -> Result<Recommendation, AdviceError> {
        let hand = parse_cards(hand);
        let upcard = parse_cards(upcard);
        self.recommend_cards(&hand.cards, &upcard.cards)
    }

    /// Recommends a play for parsed cards.
    ///
    /// # Errors
    ///
    /// Returns an error if `hand` has fewer than two cards or `upcard` does
    /// not hold exactly one card.
    pub fn recommend_cards(
        &self,
        hand: &[Rank],
        upcard: &[Rank],
    ) -> Result<Recommendation, AdviceError> {
        if hand.len() < 2 {
            return Err(AdviceError::TooFewCards { found: hand.len() });
        }
        let upcard = match *upcard {
            [card] => card,
            [] => return Err(AdviceError::MissingUpcard),
            _ => {
                return Err(AdviceError::TooManyUpcards {
                    found: upcard.len(),
                });
            }
        };

        let rules = &self.options.rules;
        let true_count = self.tracker.true_count();

        let basic = resolve_basic_strategy(hand, upcard, rules);
        let deviated = apply_deviations(basic, hand, upcard, true_count, rules);
        let insurance = insurance_advised(upcard, true_count);

        let mut explanation = deviated.explanation;
        if insurance {
            explanation.push_str(&alloc::format!(
                " Insurance is profitable (TC >= {INSURANCE_INDEX})."
            ));
        }

        log::debug!(
            "recommend {} vs {upcard} at true count {true_count:.1}: {}",
            DisplayHand(hand),
            deviated.action
        );

        Ok(Recommendation {
            basic,
            action: deviated.action,
            insurance,
            explanation,
            true_count,
        })
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(AdvisorOptions::default())
    }
}

struct DisplayHand<'a>(&'a [Rank]);

impl core::fmt::Display for DisplayHand<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, rank) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{rank}")?;
        }
        Ok(())
    }
}
