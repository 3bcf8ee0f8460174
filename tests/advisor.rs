//! Counting, bet sizing and advisor session tests.

#![allow(clippy::float_cmp)]

use bjadvisor::{
    Action, AdviceError, Advisor, AdvisorOptions, CountError, CountTracker, Rank, Rules,
    SharedCountTracker, recommended_bet_units,
};

#[test]
fn tracker_counts_and_undoes_hi_lo_weights() {
    let mut tracker = CountTracker::new(6);

    tracker.record_card(Rank::Two);
    tracker.record_card(Rank::Seven);
    let state = tracker.record_card(Rank::King);
    assert_eq!(state.running_count, 0);
    assert_eq!(state.cards_seen, 3);

    let state = tracker.undo_last_card().unwrap();
    assert_eq!(state.running_count, 1);
    assert_eq!(state.cards_seen, 2);

    tracker.undo_last_card().unwrap();
    tracker.undo_last_card().unwrap();
    assert_eq!(tracker.undo_last_card(), Err(CountError::NothingToUndo));
    assert_eq!(tracker.state().running_count, 0);
    assert_eq!(tracker.state().cards_seen, 0);
}

#[test]
fn reset_keeps_decks_and_clears_undo_log() {
    let mut tracker = CountTracker::new(8);
    tracker.record_cards(&[Rank::Ace, Rank::Ten, Rank::Three]);

    tracker.reset();
    let state = tracker.state();
    assert_eq!(state.running_count, 0);
    assert_eq!(state.cards_seen, 0);
    assert_eq!(state.decks, 8);
    assert_eq!(tracker.undo_last_card(), Err(CountError::NothingToUndo));

    tracker.reset_with_decks(2);
    assert_eq!(tracker.state().decks, 2);
}

#[test]
fn true_count_uses_decks_remaining() {
    let mut tracker = CountTracker::new(6);
    for _ in 0..11 {
        tracker.record_card(Rank::Five);
    }
    for _ in 0..15 {
        tracker.record_card(Rank::Eight);
    }

    let state = tracker.state();
    assert_eq!(state.cards_seen, 26);
    assert_eq!(state.decks_remaining(), 5.5);
    assert_eq!(state.true_count(), 2.0);
}

#[test]
fn decks_remaining_is_clamped_at_half_a_deck() {
    let mut tracker = CountTracker::new(1);
    for _ in 0..60 {
        tracker.record_card(Rank::Two);
    }
    assert_eq!(tracker.state().decks_remaining(), 0.5);
    assert_eq!(tracker.true_count(), 120.0);

    let empty_shoe = CountTracker::new(0);
    assert_eq!(empty_shoe.state().decks_remaining(), 0.5);
    assert_eq!(empty_shoe.true_count(), 0.0);
}

#[test]
fn shared_tracker_serializes_updates() {
    let tracker = SharedCountTracker::new(4);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..13 {
                    tracker.record_card(Rank::Six);
                }
            });
        }
    });

    let state = tracker.state();
    assert_eq!(state.running_count, 52);
    assert_eq!(state.cards_seen, 52);

    tracker.undo_last_card().unwrap();
    let tracker = tracker.into_inner();
    assert_eq!(tracker.state().running_count, 51);
}

#[test]
fn bet_units_step_with_true_count() {
    let counts = [-5.0, 0.0, 1.4, 1.5, 4.5, 10.0];
    let units: Vec<u8> = counts.iter().map(|&tc| recommended_bet_units(tc)).collect();

    assert_eq!(units, [1, 1, 1, 2, 5, 5]);
    assert!(units.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(units.iter().all(|units| (1..=5).contains(units)));

    assert_eq!(recommended_bet_units(2.49), 2);
    assert_eq!(recommended_bet_units(3.5), 4);
    assert_eq!(recommended_bet_units(f64::NAN), 1);
}

#[test]
fn advisor_status_reflects_observed_cards() {
    let mut advisor = Advisor::default();

    let status = advisor.status();
    assert_eq!(status.running_count, 0);
    assert_eq!(status.true_count, 0.0);
    assert_eq!(status.decks_remaining, 6.0);
    assert_eq!(status.bet_units, 1);

    let parsed = advisor.observe("10 J q 5 x");
    assert_eq!(parsed.rejected, ["X"]);
    assert_eq!(advisor.count().running_count, -2);
    assert_eq!(advisor.count().cards_seen, 4);

    advisor.record_card(Rank::Four);
    assert_eq!(advisor.count().running_count, -1);
    advisor.undo_last_card().unwrap();
    assert_eq!(advisor.count().running_count, -2);

    advisor.reset_count();
    assert_eq!(advisor.count().cards_seen, 0);
}

#[test]
fn advisor_rejects_short_hands_and_bad_upcards() {
    let advisor = Advisor::default();

    assert_eq!(
        advisor.recommend("10", "5").unwrap_err(),
        AdviceError::TooFewCards { found: 1 }
    );
    assert_eq!(
        advisor.recommend("10 x", "5").unwrap_err(),
        AdviceError::TooFewCards { found: 1 }
    );
    assert_eq!(
        advisor.recommend("10 6", "").unwrap_err(),
        AdviceError::MissingUpcard
    );
    assert_eq!(
        advisor.recommend("10 6", "z").unwrap_err(),
        AdviceError::MissingUpcard
    );
    assert_eq!(
        advisor.recommend("10 6", "5 6").unwrap_err(),
        AdviceError::TooManyUpcards { found: 2 }
    );
}

#[test]
fn advisor_applies_deviations_from_the_count() {
    let options = AdvisorOptions::default()
        .with_decks(1)
        .with_rules(Rules::default().with_surrender(false));
    let mut advisor = Advisor::new(options);
    advisor.observe("2 2 2 2 2 2 2 2 2 2 2 2 2");

    let recommendation = advisor.recommend("10 6", "10").unwrap();
    assert_eq!(recommendation.basic, Action::Hit);
    assert_eq!(recommendation.action, Action::Stand);
    assert!(recommendation.is_deviation());
    assert!(!recommendation.insurance);
    assert_eq!(
        recommendation.explanation,
        "Basic strategy says HIT. Deviation applies (16 vs 10, TC 17.3 >= 0) -> STAND."
    );
}

#[test]
fn advisor_advises_insurance_against_an_ace_at_high_counts() {
    let mut advisor = Advisor::new(AdvisorOptions::default().with_decks(1));
    advisor.observe("2 2 2 2 2 2 2 2 2 2 2 2 2");

    let recommendation = advisor.recommend("10 6", "a").unwrap();
    assert_eq!(recommendation.action, Action::Surrender);
    assert!(recommendation.insurance);
    assert_eq!(
        recommendation.explanation,
        "Basic strategy says SURRENDER. No deviation applies. Insurance is profitable (TC >= 3)."
    );

    advisor.reset_count();
    let recommendation = advisor.recommend("10 6", "a").unwrap();
    assert!(!recommendation.insurance);
}

#[test]
fn reconfigure_replaces_rules_and_resets_count() {
    let mut advisor = Advisor::default();
    advisor.observe("2 3 4");

    let options = AdvisorOptions::default()
        .with_decks(2)
        .with_rules(Rules::default().with_double_after_split(false));
    advisor.reconfigure(options);

    assert_eq!(advisor.options(), &options);
    assert_eq!(advisor.count().cards_seen, 0);
    assert_eq!(advisor.count().decks, 2);

    let recommendation = advisor.recommend("4 4", "5").unwrap();
    assert_eq!(recommendation.action, Action::Hit);
}
