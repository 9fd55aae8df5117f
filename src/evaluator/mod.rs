pub mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Poker hand category from weakest (1) to strongest (10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Category> {
        match ordinal {
            1..=10 => Some(Category::ALL[(ordinal - 1) as usize]),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparable hand strength: the category together with its tie-break ranks.
///
/// Variants are declared weakest first and fields most significant first, so the
/// derived `Ord` is exactly "category, then tie-break vector lexicographically".
/// Rank lists are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandValue {
    HighCard([Rank; 5]),
    Pair { pair: Rank, kickers: [Rank; 3] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    ThreeOfAKind { trips: Rank, kickers: [Rank; 2] },
    Straight { high: Rank },
    Flush([Rank; 5]),
    FullHouse { trips: Rank, pair: Rank },
    FourOfAKind { quad: Rank, kicker: Rank },
    StraightFlush { high: Rank },
    RoyalFlush,
}

impl HandValue {
    pub const fn category(&self) -> Category {
        match self {
            HandValue::HighCard(_) => Category::HighCard,
            HandValue::Pair { .. } => Category::Pair,
            HandValue::TwoPair { .. } => Category::TwoPair,
            HandValue::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            HandValue::Straight { .. } => Category::Straight,
            HandValue::Flush(_) => Category::Flush,
            HandValue::FullHouse { .. } => Category::FullHouse,
            HandValue::FourOfAKind { .. } => Category::FourOfAKind,
            HandValue::StraightFlush { .. } => Category::StraightFlush,
            HandValue::RoyalFlush => Category::RoyalFlush,
        }
    }

    /// Tie-break ranks as numeric values, most significant first.
    ///
    /// ```
    /// use poker_odds::cards::Rank;
    /// use poker_odds::evaluator::HandValue;
    ///
    /// let v = HandValue::FullHouse { trips: Rank::King, pair: Rank::Two };
    /// assert_eq!(v.tiebreak(), vec![13, 2]);
    /// assert_eq!(HandValue::RoyalFlush.tiebreak(), vec![14]);
    /// ```
    pub fn tiebreak(&self) -> Vec<u8> {
        let ranks: Vec<Rank> = match *self {
            HandValue::HighCard(r) | HandValue::Flush(r) => r.to_vec(),
            HandValue::Pair { pair, kickers: [a, b, c] } => vec![pair, a, b, c],
            HandValue::TwoPair { high, low, kicker } => vec![high, low, kicker],
            HandValue::ThreeOfAKind { trips, kickers: [a, b] } => vec![trips, a, b],
            HandValue::Straight { high } | HandValue::StraightFlush { high } => vec![high],
            HandValue::FullHouse { trips, pair } => vec![trips, pair],
            HandValue::FourOfAKind { quad, kicker } => vec![quad, kicker],
            HandValue::RoyalFlush => vec![Rank::Ace],
        };
        ranks.into_iter().map(Rank::value).collect()
    }
}

/// Detailed evaluation result. `value` drives ordering; `best_five` is sorted
/// by rank (then suit) descending.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub best_five: [Card; 5],
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// Category ordinal, 1 (High Card) to 10 (Royal Flush).
    pub const fn ordinal(&self) -> u8 {
        self.category.ordinal()
    }

    pub fn tiebreak(&self) -> Vec<u8> {
        self.value.tiebreak()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (i, card) in self.best_five.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str(")")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("a hand must have exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("need at least 5 cards to evaluate, got {0}")]
    InsufficientCards(usize),
    #[error("at most 7 cards can be evaluated, got {0}")]
    TooManyCards(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

fn ensure_distinct(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen = HashSet::with_capacity(cards.len());
    match cards.iter().find(|c| !seen.insert(**c)) {
        Some(dup) => Err(EvalError::DuplicateCard(*dup)),
        None => Ok(()),
    }
}

/// Classify exactly five distinct cards.
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::evaluator::{evaluate, Category};
///
/// let hand = parse_cards("5S 4C 3H 2D AS").unwrap();
/// let eval = evaluate(&hand).unwrap();
/// assert_eq!(eval.category, Category::Straight);
/// assert_eq!(eval.tiebreak(), vec![5]);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    let five: [Card; 5] = cards.try_into().map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
    ensure_distinct(&five)?;
    Ok(evaluate_five(&five))
}

/// Evaluate exactly five cards; detects category and builds the tie-break value.
/// Inputs are assumed distinct.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // Categories in priority order; HighCard always matches
    let value = DETECTORS
        .iter()
        .find_map(|detector| detector.classify(&analysis))
        .unwrap_or(HandValue::HighCard(analysis.ranks));

    Evaluation { category: value.category(), best_five: analysis.sorted_cards, value }
}

/// Best five-card hand among `cards`, checking every 5-subset in lexicographic order.
/// The first of several equal hands is kept.
fn best_subset(cards: &[Card]) -> Evaluation {
    let mut combos = combinations::Combinations::new(cards.len(), 5);
    let mut best: Option<Evaluation> = None;

    while let Some(idx) = combos.advance() {
        let hand = [cards[idx[0]], cards[idx[1]], cards[idx[2]], cards[idx[3]], cards[idx[4]]];
        let eval = evaluate_five(&hand);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    best.unwrap_or_else(|| evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]))
}

/// Evaluate seven cards (two hole + five board): the best of all 21 five-card subsets.
pub fn evaluate_seven(cards: &[Card; 7]) -> Evaluation {
    best_subset(cards)
}

/// Select the best five-card hand from 5 to 7 distinct cards.
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::evaluator::{best_of, Category};
///
/// let cards = parse_cards("AS AC KH QD JS TS 2C").unwrap();
/// let best = best_of(&cards).unwrap();
/// assert_eq!(best.category, Category::Straight);
/// assert_eq!(best.tiebreak(), vec![14]);
/// ```
pub fn best_of(cards: &[Card]) -> Result<Evaluation, EvalError> {
    match cards.len() {
        n if n < 5 => return Err(EvalError::InsufficientCards(n)),
        n if n > 7 => return Err(EvalError::TooManyCards(n)),
        _ => {}
    }
    ensure_distinct(cards)?;
    if let Ok(five) = <&[Card; 5]>::try_from(cards) {
        return Ok(evaluate_five(five));
    }
    Ok(best_subset(cards))
}

/// Total order over evaluated hands: category first, then tie-break ranks.
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::evaluator::{compare, evaluate};
/// use std::cmp::Ordering;
///
/// let aces = evaluate(&parse_cards("AS AC KH QD JS").unwrap()).unwrap();
/// let kings = evaluate(&parse_cards("KS KC AH QD JS").unwrap()).unwrap();
/// assert_eq!(compare(&aces, &kings), Ordering::Greater);
/// ```
pub fn compare(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.value.cmp(&b.value)
}
