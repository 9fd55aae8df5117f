use poker_odds::cards::{parse_cards, universe};
use poker_odds::hand::Scenario;
use poker_odds::odds::{
    enumerate, exact_probability, win_probability, win_probability_with, Method, OddsConfig,
    OddsError, SizingPolicy,
};
use proptest::prelude::*;

fn quick() -> OddsConfig {
    OddsConfig::default().with_iterations(500).with_seed(17)
}

fn assert_sums_to_100(win: f64, tie: f64, lose: f64) {
    let total = win + tie + lose;
    assert!((total - 100.0).abs() < 1e-9, "sum was {total}");
}

#[test]
fn river_with_two_opponents_is_exact() {
    let s = Scenario::parse("AS KD", "2C 7H 9S TD 4C", 2).unwrap();
    let r = win_probability_with(&s, &quick()).unwrap();
    assert_eq!(r.method, Method::Exact);
    assert_eq!(r.samples, 148_995);
    assert_sums_to_100(r.win_probability, r.tie_probability, r.lose_probability);
}

#[test]
fn three_opponents_always_sample() {
    let s = Scenario::parse("AS KD", "2C 7H 9S TD 4C", 3).unwrap();
    let r = win_probability_with(&s, &quick()).unwrap();
    assert_eq!(r.method, Method::MonteCarlo);
    assert_eq!(r.samples, 500);
}

#[test]
fn heads_up_preflop_is_too_big_to_enumerate() {
    let s = Scenario::parse("AS AC", "", 1).unwrap();
    assert!(exact_probability(&s, &OddsConfig::default()).unwrap().is_none());
    let r = win_probability_with(&s, &quick()).unwrap();
    assert_eq!(r.method, Method::MonteCarlo);
    // Aces are roughly 85% against one random hand
    assert!(r.win_probability > 70.0, "{r}");
}

#[test]
fn heads_up_flop_is_exact() {
    let s = Scenario::parse("AS AC", "KH QD JS", 1).unwrap();
    let r = win_probability(&s).unwrap();
    assert_eq!(r.method, Method::Exact);
    assert_eq!(r.samples, 178_365);
    assert_sums_to_100(r.win_probability, r.tie_probability, r.lose_probability);
}

#[test]
fn exact_results_are_deterministic() {
    let s = Scenario::parse("8H 8D", "2C 7H 9S TD", 1).unwrap();
    let a = win_probability(&s).unwrap();
    let b = win_probability_with(&s, &OddsConfig::default().sequential()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.tally.total(), a.samples);
}

#[test]
fn unbeatable_and_shared_hands() {
    let s = Scenario::parse("AS AC", "AH AD KS 7C 2D", 1).unwrap();
    let r = win_probability(&s).unwrap();
    assert_eq!(r.tally.wins, 990);
    assert!((r.win_probability - 100.0).abs() < 1e-9);

    let s = Scenario::parse("2C 3D", "AS KS QS JS TS", 2).unwrap();
    let r = win_probability(&s).unwrap();
    assert_eq!(r.tally.ties, r.samples);
    assert!((r.equity() - 50.0).abs() < 1e-9);
}

#[test]
fn policy_can_force_sampling() {
    let s = Scenario::parse("AS KD", "2C 7H 9S TD 4C", 1).unwrap();
    let config = quick().with_policy(SizingPolicy::never());
    assert_eq!(win_probability_with(&s, &config).unwrap().method, Method::MonteCarlo);
}

#[test]
fn too_many_opponents_is_reported() {
    let s = Scenario::parse("AS AC", "", 23).unwrap();
    let err = win_probability_with(&s, &quick()).unwrap_err();
    assert_eq!(err, OddsError::InsufficientDeck { needed: 51, available: 50 });
    assert!(err.to_string().contains("51"));

    let s = Scenario::parse("AS AC", "", 22).unwrap();
    assert!(win_probability_with(&s, &quick().with_iterations(50)).is_ok());
}

#[test]
fn invalid_scenarios_never_reach_the_engine() {
    let err: OddsError = Scenario::parse("AS AS", "", 1).unwrap_err().into();
    assert!(matches!(err, OddsError::InvalidScenario(_)));
}

fn river_scenario() -> impl Strategy<Value = (String, String)> {
    prop::sample::subsequence(universe().to_vec(), 7).prop_shuffle().prop_map(|cards| {
        let text = |cs: &[poker_odds::cards::Card]| {
            cs.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
        };
        (text(&cards[..2]), text(&cards[2..]))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn river_enumeration_covers_every_opponent_hand((hole, board) in river_scenario()) {
        let s = Scenario::parse(&hole, &board, 1).unwrap();
        let r = enumerate(&s, false).unwrap();
        prop_assert_eq!(r.samples, 990);
        let total = r.win_probability + r.tie_probability + r.lose_probability;
        prop_assert!((total - 100.0).abs() < 1e-9);
        prop_assert_eq!(parse_cards(&board).unwrap().len(), 5);
    }
}
