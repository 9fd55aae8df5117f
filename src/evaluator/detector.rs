use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::HandValue;

/// Strategy pattern: each detector recognises one category and builds its tie-break value.
pub trait CategoryDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandValue>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

fn straight_high(analysis: &HandAnalysis) -> Option<Rank> {
    analysis.straight_info.high.filter(|_| analysis.straight_info.is_straight)
}

fn straight_flush_high(analysis: &HandAnalysis) -> Option<Rank> {
    straight_high(analysis).filter(|_| analysis.suit_info.is_flush)
}

/// Royal Flush: Ace-high straight flush
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        straight_flush_high(analysis).filter(|&high| high == Rank::Ace).map(|_| HandValue::RoyalFlush)
    }
}

/// Straight Flush: five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        straight_flush_high(analysis).map(|high| HandValue::StraightFlush { high })
    }
}

/// Four of a Kind: pattern [4, 1]
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let g = &analysis.rank_groups;
        (g.pattern() == [4, 1]).then(|| HandValue::FourOfAKind { quad: g.rank(0), kicker: g.rank(1) })
    }
}

/// Full House: pattern [3, 2]
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let g = &analysis.rank_groups;
        (g.pattern() == [3, 2]).then(|| HandValue::FullHouse { trips: g.rank(0), pair: g.rank(1) })
    }
}

/// Flush: all five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        analysis.suit_info.is_flush.then_some(HandValue::Flush(analysis.ranks))
    }
}

/// Straight: five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        straight_high(analysis).map(|high| HandValue::Straight { high })
    }
}

/// Three of a Kind: pattern [3, 1, 1]
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let g = &analysis.rank_groups;
        (g.pattern() == [3, 1, 1]).then(|| HandValue::ThreeOfAKind {
            trips: g.rank(0),
            kickers: [g.rank(1), g.rank(2)],
        })
    }
}

/// Two Pair: pattern [2, 2, 1]
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let g = &analysis.rank_groups;
        (g.pattern() == [2, 2, 1]).then(|| HandValue::TwoPair {
            high: g.rank(0),
            low: g.rank(1),
            kicker: g.rank(2),
        })
    }
}

/// Pair: pattern [2, 1, 1, 1]
pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let g = &analysis.rank_groups;
        (g.pattern() == [2, 1, 1, 1]).then(|| HandValue::Pair {
            pair: g.rank(0),
            kickers: [g.rank(1), g.rank(2), g.rank(3)],
        })
    }
}

/// High Card: always matches as the fallback
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        Some(HandValue::HighCard(analysis.ranks))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &PairDetector,
    &HighCardDetector,
];
