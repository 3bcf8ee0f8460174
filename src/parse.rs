//! Free-text card input.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Rank;

/// Cards accepted from a line of input, plus the tokens that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCards {
    /// Valid ranks, in input order.
    pub cards: Vec<Rank>,
    /// Rejected tokens, upper-cased, in input order.
    pub rejected: Vec<String>,
}

impl ParsedCards {
    /// Returns whether every token was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parses whitespace-separated card tokens such as `"10 J q 5"`.
///
/// Parsing never fails: unknown tokens are skipped, logged, and reported in
/// [`ParsedCards::rejected`].
///
/// # Example
///
/// ```
/// use bjadvisor::{Rank, parse_cards};
///
/// let parsed = parse_cards("10 J q 5 x");
/// assert_eq!(parsed.cards, [Rank::Ten, Rank::Jack, Rank::Queen, Rank::Five]);
/// assert_eq!(parsed.rejected, ["X"]);
/// ```
#[must_use]
pub fn parse_cards(text: &str) -> ParsedCards {
    let mut parsed = ParsedCards::default();

    for token in text.split_whitespace() {
        if let Ok(rank) = token.parse::<Rank>() {
            parsed.cards.push(rank);
        } else {
            let token = token.to_uppercase();
            log::warn!("ignored invalid card token '{token}'");
            parsed.rejected.push(token);
        }
    }

    parsed
}
