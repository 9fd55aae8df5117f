use super::config::SizingPolicy;
use crate::evaluator::combinations::binomial;
use crate::hand::{Board, Scenario};

const DECK_SIZE: usize = 52;
const HOLE_CARDS: usize = 2;

/// Size of the unknown part of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSpace {
    pub opponents: usize,
    /// Community cards still to come.
    pub unknown_community: usize,
    /// Missing community cards plus every opponent's hole cards.
    pub unknown_total: usize,
    /// Cards not held by the player or on the board.
    pub pool: usize,
    /// `C(pool, unknown_total)`, the number of distinct unknown-card sets.
    pub scenarios: u128,
}

impl SearchSpace {
    /// ```
    /// use poker_odds::hand::Scenario;
    /// use poker_odds::odds::SearchSpace;
    ///
    /// let s = Scenario::parse("AS AC", "KH QD JS", 1).unwrap();
    /// let space = SearchSpace::of(&s);
    /// assert_eq!(space.unknown_total, 4);
    /// assert_eq!(space.pool, 47);
    /// assert_eq!(space.scenarios, 178_365);
    /// ```
    pub fn of(scenario: &Scenario) -> Self {
        Self::from_counts(scenario.board().len(), scenario.opponents())
    }

    pub fn from_counts(board_len: usize, opponents: usize) -> Self {
        let unknown_community = Board::MAX.saturating_sub(board_len);
        let unknown_total = unknown_community + HOLE_CARDS * opponents;
        let pool = DECK_SIZE.saturating_sub(HOLE_CARDS + board_len);
        Self {
            opponents,
            unknown_community,
            unknown_total,
            pool,
            scenarios: binomial(pool, unknown_total),
        }
    }

    /// Whether the pool holds enough cards to complete the deal.
    pub fn fits_deck(&self) -> bool {
        self.unknown_total <= self.pool
    }
}

impl SizingPolicy {
    /// Exact enumeration is allowed only when every limit holds.
    pub fn allows_exact(&self, space: &SearchSpace) -> bool {
        space.opponents <= self.max_opponents
            && space.unknown_total <= self.max_unknown_cards
            && space.scenarios <= self.max_scenarios
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_for_each_street() {
        let preflop = SearchSpace::from_counts(0, 1);
        assert_eq!((preflop.unknown_total, preflop.pool), (7, 50));
        assert_eq!(preflop.scenarios, 99_884_400);

        let river = SearchSpace::from_counts(5, 2);
        assert_eq!((river.unknown_community, river.unknown_total, river.pool), (0, 4, 45));
        assert_eq!(river.scenarios, 148_995);
    }

    #[test]
    fn default_policy_routes_by_size() {
        let policy = SizingPolicy::default();
        assert!(policy.allows_exact(&SearchSpace::from_counts(3, 1)));
        assert!(policy.allows_exact(&SearchSpace::from_counts(5, 2)));
        assert!(!policy.allows_exact(&SearchSpace::from_counts(4, 2)));
        assert!(!policy.allows_exact(&SearchSpace::from_counts(0, 1)));
        assert!(!policy.allows_exact(&SearchSpace::from_counts(5, 3)));
    }

    #[test]
    fn boundary_is_inclusive_and_opponents_cap_is_absolute() {
        let policy = SizingPolicy::default();
        let two = SearchSpace {
            opponents: 2,
            unknown_community: 6,
            unknown_total: 10,
            pool: 44,
            scenarios: 1_000_000,
        };
        assert!(policy.allows_exact(&two));
        assert!(!policy.allows_exact(&SearchSpace { opponents: 3, scenarios: 1, ..two }));
        assert!(!policy.allows_exact(&SearchSpace { unknown_total: 11, ..two }));
        assert!(!policy.allows_exact(&SearchSpace { scenarios: 1_000_001, ..two }));
    }

    #[test]
    fn too_many_opponents_do_not_fit() {
        assert!(SearchSpace::from_counts(0, 22).fits_deck());
        assert!(!SearchSpace::from_counts(0, 23).fits_deck());
    }
}
