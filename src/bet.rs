//! Bet sizing.

/// Largest bet the ramp recommends, in units.
pub const MAX_BET_UNITS: u8 = 5;

/// Maps a true count to a bet in units on a one-to-five ramp.
///
/// One unit below a true count of 1.5, then one more unit for each whole
/// step up to [`MAX_BET_UNITS`] at 4.5 and above. Table maximums are left to
/// the caller. A NaN count bets the minimum.
///
/// # Example
///
/// ```
/// use bjadvisor::recommended_bet_units;
///
/// assert_eq!(recommended_bet_units(-2.0), 1);
/// assert_eq!(recommended_bet_units(2.5), 3);
/// assert_eq!(recommended_bet_units(9.0), 5);
/// ```
#[must_use]
pub fn recommended_bet_units(true_count: f64) -> u8 {
    const STEPS: [f64; 4] = [1.5, 2.5, 3.5, 4.5];

    let steps_reached = STEPS.iter().filter(|&&step| true_count >= step).count();
    1 + steps_reached as u8
}
