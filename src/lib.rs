//! A blackjack decision-support engine with optional `no_std` support.
//!
//! Given a player hand, the dealer upcard, the table [`Rules`] and a Hi-Lo
//! count, the engine recommends an [`Action`] and a bet size. The pieces can
//! be used on their own:
//!
//! - [`parse_cards`] turns free text into [`Rank`]s,
//! - [`evaluate_hand`] computes totals, softness and pairs,
//! - [`resolve_basic_strategy`] looks up the basic strategy play,
//! - [`apply_deviations`] overrides it from the true count,
//! - [`CountTracker`] keeps the running and true count,
//! - [`recommended_bet_units`] sizes the bet.
//!
//! [`Advisor`] ties them together for one session.
//!
//! # Example
//!
//! ```
//! use bjadvisor::{Action, Advisor, AdvisorOptions, Rules};
//!
//! let options = AdvisorOptions::default()
//!     .with_decks(6)
//!     .with_rules(Rules::default().with_surrender(false));
//! let mut advisor = Advisor::new(options);
//!
//! advisor.observe("10 K A Q J");
//! let recommendation = advisor.recommend("5 6", "9").unwrap();
//! assert_eq!(recommendation.action, Action::Double);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod advisor;
pub mod bet;
pub mod card;
pub mod count;
pub mod deviation;
pub mod error;
pub mod hand;
pub mod options;
pub mod parse;
pub mod result;
pub mod strategy;
mod sync;

// Re-export main types
pub use action::Action;
pub use advisor::Advisor;
pub use bet::{MAX_BET_UNITS, recommended_bet_units};
pub use card::{DECK_SIZE, RANKS, Rank};
pub use count::{CountState, CountTracker, MIN_DECKS_REMAINING, SharedCountTracker};
pub use deviation::{INSURANCE_INDEX, apply_deviations, insurance_advised};
pub use error::{AdviceError, CountError, ParseRankError};
pub use hand::{HandValue, evaluate_hand};
pub use options::{AdvisorOptions, Rules};
pub use parse::{ParsedCards, parse_cards};
pub use result::{CountStatus, Deviated, Recommendation};
pub use strategy::{HandCategory, resolve_basic_strategy};
