//! Hi-Lo running count and true count.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{DECK_SIZE, Rank};
use crate::error::CountError;
use crate::sync::Mutex;

/// Fewest decks assumed to remain when deriving the true count.
pub const MIN_DECKS_REMAINING: f64 = 0.5;

/// A snapshot of the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountState {
    /// Sum of Hi-Lo weights since the last reset.
    pub running_count: i32,
    /// Cards seen since the last reset.
    pub cards_seen: u32,
    /// Number of decks in the shoe.
    pub decks: u8,
}

impl CountState {
    /// Estimates the decks left in the shoe.
    ///
    /// Clamped to [`MIN_DECKS_REMAINING`] so the true count stays finite
    /// near and after the end of the shoe.
    #[must_use]
    pub fn decks_remaining(&self) -> f64 {
        let seen = f64::from(self.cards_seen) / f64::from(DECK_SIZE);
        (f64::from(self.decks) - seen).max(MIN_DECKS_REMAINING)
    }

    /// Returns the running count per estimated deck remaining.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        f64::from(self.running_count) / self.decks_remaining()
    }
}

/// Tracks the Hi-Lo count for a session.
///
/// Every recorded card pushes the weight it applied onto an undo log, so
/// [`undo_last_card`](Self::undo_last_card) reverses exactly what was added.
///
/// # Example
///
/// ```
/// use bjadvisor::{CountTracker, Rank};
///
/// let mut tracker = CountTracker::new(6);
/// tracker.record_cards(&[Rank::Two, Rank::Seven, Rank::King]);
/// assert_eq!(tracker.state().running_count, 0);
///
/// let state = tracker.undo_last_card().unwrap();
/// assert_eq!(state.running_count, 1);
/// assert_eq!(state.cards_seen, 2);
/// ```
#[derive(Debug, Clone)]
pub struct CountTracker {
    state: CountState,
    history: Vec<i8>,
}

impl CountTracker {
    /// Creates a tracker for a shoe of the given number of decks.
    #[must_use]
    pub const fn new(decks: u8) -> Self {
        Self {
            state: CountState {
                running_count: 0,
                cards_seen: 0,
                decks,
            },
            history: Vec::new(),
        }
    }

    /// Returns the current count.
    #[must_use]
    pub const fn state(&self) -> CountState {
        self.state
    }

    /// Returns the current true count.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        self.state.true_count()
    }

    /// Records one seen card.
    pub fn record_card(&mut self, rank: Rank) -> CountState {
        let weight = rank.hi_lo_weight();
        self.state.running_count += i32::from(weight);
        self.state.cards_seen += 1;
        self.history.push(weight);
        log::trace!(
            "counted {rank} ({weight:+}): running count {}",
            self.state.running_count
        );
        self.state
    }

    /// Records seen cards in order.
    pub fn record_cards(&mut self, ranks: &[Rank]) -> CountState {
        for &rank in ranks {
            self.record_card(rank);
        }
        self.state
    }

    /// Reverses the most recently recorded card.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::NothingToUndo`] if no card has been recorded
    /// since the last reset.
    pub fn undo_last_card(&mut self) -> Result<CountState, CountError> {
        let weight = self.history.pop().ok_or(CountError::NothingToUndo)?;
        self.state.running_count -= i32::from(weight);
        self.state.cards_seen -= 1;
        Ok(self.state)
    }

    /// Clears the count after a shuffle. The number of decks is kept.
    pub fn reset(&mut self) {
        self.state.running_count = 0;
        self.state.cards_seen = 0;
        self.history.clear();
    }

    /// Clears the count and changes the number of decks.
    pub fn reset_with_decks(&mut self, decks: u8) {
        self.reset();
        self.state.decks = decks;
    }
}

/// A [`CountTracker`] that can be updated from several callers.
///
/// The running count is a read-modify-write counter, so every update holds
/// the lock for its whole duration.
pub struct SharedCountTracker {
    inner: Mutex<CountTracker>,
}

impl SharedCountTracker {
    /// Creates a shared tracker for a shoe of the given number of decks.
    #[must_use]
    pub const fn new(decks: u8) -> Self {
        Self {
            inner: Mutex::new(CountTracker::new(decks)),
        }
    }

    /// Returns the current count.
    pub fn state(&self) -> CountState {
        self.inner.lock().state()
    }

    /// Records one seen card.
    pub fn record_card(&self, rank: Rank) -> CountState {
        self.inner.lock().record_card(rank)
    }

    /// Records seen cards in order without interleaving other updates.
    pub fn record_cards(&self, ranks: &[Rank]) -> CountState {
        self.inner.lock().record_cards(ranks)
    }

    /// Reverses the most recently recorded card.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::NothingToUndo`] if no card has been recorded
    /// since the last reset.
    pub fn undo_last_card(&self) -> Result<CountState, CountError> {
        self.inner.lock().undo_last_card()
    }

    /// Clears the count. The number of decks is kept.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Returns the tracker, ending shared access.
    #[must_use]
    pub fn into_inner(self) -> CountTracker {
        self.inner.into_inner()
    }
}

impl From<CountTracker> for SharedCountTracker {
    fn from(tracker: CountTracker) -> Self {
        Self {
            inner: Mutex::new(tracker),
        }
    }
}
