use crate::cards::{parse_cards, Card, CardParseError};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("at least one opponent is required")]
    NoOpponents,
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

/// A player's two private hole cards.
///
/// ```
/// use poker_odds::cards::{Card, Rank, Suit};
/// use poker_odds::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 2 {
            return Err(HandError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::from_slice(&cards)
    }
}

/// Community cards known so far (0 to 5).
///
/// ```
/// use poker_odds::hand::Board;
///
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// assert_eq!(board.len(), 3);
/// assert_eq!(board.missing(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub const MAX: usize = 5;

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > Self::MAX {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Community cards still to come.
    pub fn missing(&self) -> usize {
        Self::MAX - self.cards.len()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Board::try_new(cards)
    }
}

/// Everything the player knows at the table: own hole cards, the board so far,
/// and how many opponents are still in the hand.
///
/// ```
/// use poker_odds::hand::Scenario;
///
/// let s = Scenario::parse("AH KH", "QH JH 2C", 2).unwrap();
/// assert_eq!(s.known_cards().len(), 5);
/// assert_eq!(s.opponents(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    hole: HoleCards,
    board: Board,
    opponents: usize,
}

impl Scenario {
    pub fn try_new(hole: HoleCards, board: Board, opponents: usize) -> Result<Self, HandError> {
        validate_holdem(&hole, &board)?;
        if opponents == 0 {
            return Err(HandError::NoOpponents);
        }
        Ok(Self { hole, board, opponents })
    }

    /// Build from card text, e.g. `Scenario::parse("AS AC", "KH QD JS", 1)`.
    pub fn parse(hole: &str, board: &str, opponents: usize) -> Result<Self, HandError> {
        Self::try_new(hole.parse()?, board.parse()?, opponents)
    }

    pub fn hole(&self) -> &HoleCards {
        &self.hole
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn opponents(&self) -> usize {
        self.opponents
    }

    /// Hole cards followed by the board.
    pub fn known_cards(&self) -> Vec<Card> {
        let mut known = Vec::with_capacity(2 + self.board.len());
        known.extend(self.hole.as_array());
        known.extend_from_slice(self.board.as_slice());
        known
    }
}

/// Validate that a pair of hole cards and board form a valid Hold'em state.
/// Allows 0..=5 board cards. Ensures uniqueness across all cards.
///
/// ```
/// use poker_odds::hand::{Board, HoleCards, validate_holdem};
///
/// let hole: HoleCards = "AS KS".parse().unwrap();
/// let board: Board = "2C 3C 4C".parse().unwrap();
/// validate_holdem(&hole, &board).unwrap();
/// ```
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    if board.len() > Board::MAX {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    let set: HashSet<Card> = board.as_slice().iter().copied().collect();
    if set.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    if set.contains(&hole.first()) || set.contains(&hole.second()) {
        return Err(HandError::Overlap);
    }
    if hole.first() == hole.second() {
        return Err(HandError::DuplicateHoleCards);
    }
    Ok(())
}
