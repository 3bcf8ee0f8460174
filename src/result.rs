//! Recommendation result types.

extern crate alloc;

use alloc::string::String;

use crate::action::Action;

/// Outcome of the deviation overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Deviated {
    /// Final action after count-based deviations.
    pub action: Action,
    /// Human-readable reason, naming the deviation and true count if one fired.
    pub explanation: String,
}

/// A complete recommendation for one decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// The basic strategy action, ignoring the count.
    pub basic: Action,
    /// The final action after deviations.
    pub action: Action,
    /// Whether insurance should be taken.
    pub insurance: bool,
    /// Human-readable reason for the recommendation.
    pub explanation: String,
    /// True count the recommendation was made at.
    pub true_count: f64,
}

impl Recommendation {
    /// Returns whether a count-based deviation changed the basic action.
    #[must_use]
    pub fn is_deviation(&self) -> bool {
        self.basic != self.action
    }
}

/// Snapshot of the count for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountStatus {
    /// Running count.
    pub running_count: i32,
    /// True count.
    pub true_count: f64,
    /// Cards seen since the last reset.
    pub cards_seen: u32,
    /// Estimated decks remaining in the shoe.
    pub decks_remaining: f64,
    /// Recommended bet in units.
    pub bet_units: u8,
}
