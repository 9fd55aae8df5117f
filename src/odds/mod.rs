//! Win / tie / lose probabilities against a number of opponents.
//!
//! [`win_probability`] first asks the sizing policy whether the unknown cards can be
//! enumerated exhaustively ([`exact`]); otherwise it samples random deals
//! ([`monte_carlo`]). The returned [`ProbabilityResult`] records which path ran.

pub mod config;
pub mod exact;
pub mod monte_carlo;
pub mod sizing;

pub use config::{OddsConfig, SizingPolicy, DEFAULT_ITERATIONS};
pub use exact::{enumerate, exact_probability};
pub use monte_carlo::{monte_carlo, monte_carlo_with_rng};
pub use sizing::SearchSpace;

use crate::cards::Card;
use crate::evaluator::evaluate_seven;
use crate::hand::{HandError, Scenario};
use std::fmt;

/// Which calculation produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Exact,
    MonteCarlo,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Exact => f.write_str("exact"),
            Method::MonteCarlo => f.write_str("monte carlo"),
        }
    }
}

/// The player's result in one fully dealt scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No opponent ties or beats the player.
    Win,
    /// Nobody beats the player, at least one opponent ties.
    Tie,
    /// Some opponent holds a strictly better hand.
    Loss,
}

/// Raw outcome counts; shards are merged by summation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            losses: self.losses + other.losses,
        }
    }

    pub fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }
}

/// Win / tie / lose percentages (0..=100) with the counts behind them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct ProbabilityResult {
    pub method: Method,
    pub win_probability: f64,
    pub tie_probability: f64,
    pub lose_probability: f64,
    /// Scenarios enumerated (exact) or iterations run (Monte Carlo).
    pub samples: u64,
    pub tally: Tally,
}

impl ProbabilityResult {
    pub fn from_tally(method: Method, tally: Tally) -> Self {
        let samples = tally.total();
        let pct = |count: u64| {
            if samples == 0 {
                0.0
            } else {
                count as f64 / samples as f64 * 100.0
            }
        };
        Self {
            method,
            win_probability: pct(tally.wins),
            tie_probability: pct(tally.ties),
            lose_probability: pct(tally.losses),
            samples,
            tally,
        }
    }

    /// Share of the pot won on average, counting a tie as half, in percent.
    pub fn equity(&self) -> f64 {
        self.win_probability + self.tie_probability / 2.0
    }
}

impl fmt::Display for ProbabilityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "win {:.2}% / tie {:.2}% / lose {:.2}% ({}, {} samples)",
            self.win_probability, self.tie_probability, self.lose_probability, self.method, self.samples
        )
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OddsError {
    #[error("not enough cards in the deck: scenario needs {needed} unknown cards, {available} remain")]
    InsufficientDeck { needed: usize, available: usize },
    #[error("invalid scenario: {0}")]
    InvalidScenario(#[from] HandError),
    #[error("monte carlo needs at least one iteration")]
    ZeroIterations,
}

impl OddsError {
    fn insufficient(space: &SearchSpace) -> Self {
        OddsError::InsufficientDeck { needed: space.unknown_total, available: space.pool }
    }
}

/// A reusable table for one scenario: the player's cards fixed, the unknown slots
/// (missing board cards, then each opponent's two hole cards) refilled per deal.
#[derive(Debug, Clone)]
pub(crate) struct Showdown {
    hole: [Card; 2],
    board: [Card; 5],
    known_board: usize,
    opponents: Vec<[Card; 2]>,
}

impl Showdown {
    pub(crate) fn new(scenario: &Scenario) -> Self {
        let hole = scenario.hole().as_array();
        let known = scenario.board().as_slice();
        // Unfilled slots hold a placeholder until the first deal
        let mut board = [hole[0]; 5];
        board[..known.len()].copy_from_slice(known);
        Self { hole, board, known_board: known.len(), opponents: vec![hole; scenario.opponents()] }
    }

    /// Fill the unknown slots in order: missing board cards first, then opponents'
    /// hole cards two at a time. The caller supplies at least `unknown_total` cards.
    pub(crate) fn deal(&mut self, mut unknown: impl Iterator<Item = Card>) {
        for (slot, card) in self.board[self.known_board..].iter_mut().zip(unknown.by_ref()) {
            *slot = card;
        }
        for (slot, card) in self.opponents.iter_mut().flatten().zip(unknown) {
            *slot = card;
        }
    }

    pub(crate) fn outcome(&self) -> Outcome {
        let b = self.board;
        let player = evaluate_seven(&[self.hole[0], self.hole[1], b[0], b[1], b[2], b[3], b[4]]);

        let mut tied = false;
        for opp in &self.opponents {
            let theirs = evaluate_seven(&[opp[0], opp[1], b[0], b[1], b[2], b[3], b[4]]);
            if theirs > player {
                return Outcome::Loss;
            }
            tied |= theirs == player;
        }
        if tied {
            Outcome::Tie
        } else {
            Outcome::Win
        }
    }
}

/// Win probability with the default configuration.
///
/// ```
/// use poker_odds::hand::Scenario;
/// use poker_odds::odds::{win_probability, Method};
///
/// let s = Scenario::parse("AS AC", "AH AD KS 7C 2D", 1).unwrap();
/// let r = win_probability(&s).unwrap();
/// assert_eq!(r.method, Method::Exact);
/// assert_eq!(r.samples, 990);
/// assert!(r.win_probability > 99.0);
/// ```
pub fn win_probability(scenario: &Scenario) -> Result<ProbabilityResult, OddsError> {
    win_probability_with(scenario, &OddsConfig::default())
}

/// Exact enumeration when the sizing policy allows it, Monte Carlo otherwise.
pub fn win_probability_with(
    scenario: &Scenario,
    config: &OddsConfig,
) -> Result<ProbabilityResult, OddsError> {
    match exact_probability(scenario, config) {
        Ok(Some(result)) => return Ok(result),
        Ok(None) => log::debug!("falling back to monte carlo: search space over policy limits"),
        Err(err @ OddsError::InsufficientDeck { .. }) => {
            log::debug!("falling back to monte carlo: {err}")
        }
        Err(err) => return Err(err),
    }
    monte_carlo(scenario, config)
}
