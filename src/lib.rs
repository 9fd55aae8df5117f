//! poker-odds: Texas Hold'em hand evaluation and win probabilities
//!
//! Goals:
//! - Classify any five cards into one of ten categories with a total order
//! - Pick the best five-card hand out of five to seven cards
//! - Estimate win / tie / lose chances against N opponents, exactly when the
//!   search space is small and by seeded Monte Carlo sampling otherwise
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: best hand and odds
//! ```
//! use poker_odds::cards::parse_cards;
//! use poker_odds::evaluator::{best_of, Category};
//! use poker_odds::hand::Scenario;
//! use poker_odds::odds::{win_probability_with, Method, OddsConfig};
//!
//! let seven = parse_cards("AS AC KH QD JS 7C 2D").unwrap();
//! assert_eq!(best_of(&seven).unwrap().category, Category::Pair);
//!
//! let scenario = Scenario::parse("AS AC", "KH QD JS 7C 2D", 2).unwrap();
//! let odds = win_probability_with(&scenario, &OddsConfig::default().with_seed(1)).unwrap();
//! assert_eq!(odds.method, Method::Exact);
//! let total = odds.win_probability + odds.tie_probability + odds.lose_probability;
//! assert!((total - 100.0).abs() < 1e-9);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-odds -- odds --hole "AS AC" --board "KH QD JS" --players 2
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod odds;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
