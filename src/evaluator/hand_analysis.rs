use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    /// Rank of every card, descending.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        // Rank descending, then suit descending
        let mut sorted_cards = *cards;
        sorted_cards.sort_unstable_by(|a, b| b.cmp(a));

        let ranks = sorted_cards.map(Card::rank);

        let mut rank_counts = [0u8; 15];
        for rank in ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, ranks, rank_groups, suit_info, straight_info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};

    fn analyze(text: &str) -> HandAnalysis {
        let v = parse_cards(text).unwrap();
        HandAnalysis::new(&[v[0], v[1], v[2], v[3], v[4]])
    }

    #[test]
    fn test_royal_flush_analysis() {
        let analysis = analyze("AS KS QS JS TS");
        assert!(analysis.suit_info.is_flush);
        assert!(analysis.straight_info.is_straight);
        assert_eq!(analysis.straight_info.high, Some(Rank::Ace));
        assert_eq!(analysis.rank_groups.pattern(), &[1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_full_house_analysis() {
        let analysis = analyze("QC KS QS KH KD");
        assert_eq!(analysis.rank_groups.pattern(), &[3, 2]);
        assert_eq!(analysis.rank_groups.ranks(), &[Rank::King, Rank::Queen]);
        assert!(!analysis.suit_info.is_flush);
    }

    #[test]
    fn test_flush_analysis() {
        let analysis = analyze("AD JD 9D 5D 2D");
        assert_eq!(analysis.suit_info.flush_suit, Some(Suit::Diamonds));
        assert!(!analysis.straight_info.is_straight);
    }

    #[test]
    fn test_wheel_straight_analysis() {
        let analysis = analyze("AS 2H 3D 4C 5S");
        assert!(analysis.straight_info.is_straight);
        assert_eq!(analysis.straight_info.high, Some(Rank::Five));
    }

    #[test]
    fn test_cards_sorted_descending() {
        let analysis = analyze("3S AH 5D KC 9S");
        assert_eq!(analysis.ranks, [Rank::Ace, Rank::King, Rank::Nine, Rank::Five, Rank::Three]);
        assert_eq!(analysis.sorted_cards[0], Card::new(Rank::Ace, Suit::Hearts));
    }
}
