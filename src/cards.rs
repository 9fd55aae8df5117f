use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2..=14 with the Ace high.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`]; `None` outside 2..=14.
    pub const fn from_value(v: u8) -> Option<Rank> {
        match v {
            2..=14 => Some(Rank::ALL[(v - 2) as usize]),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Rank {
    type Error = CardParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(CardParseError::InvalidRank(c)),
        }
    }
}

/// Four suits; order has no hand-strength meaning but is fixed for ordering: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(CardParseError::InvalidSuit(c)),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card format: '{0}' (expected rank then suit, e.g. 'AS')")]
    InvalidFormat(String),
    #[error("invalid rank: '{0}'")]
    InvalidRank(char),
    #[error("invalid suit: '{0}'")]
    InvalidSuit(char),
}

/// A playing card: rank + suit.
///
/// ```
/// use poker_odds::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "AS");
/// assert_eq!(card.name(), "Ace of Spades");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Long, human-readable name such as "Ten of Hearts".
    pub fn name(self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Exactly two characters, rank then suit, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardParseError::InvalidFormat(s.to_string()));
        };
        let rank = Rank::try_from(r)?;
        let suit = Suit::try_from(u)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse a single card; shorthand for `text.parse::<Card>()`.
pub fn parse(text: &str) -> Result<Card, CardParseError> {
    text.parse()
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use poker_odds::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd tc").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

/// The full 52-card universe, suit-major (clubs first), ranks ascending within a suit.
pub fn universe() -> [Card; 52] {
    let mut cards = [Card::new(Rank::Two, Suit::Clubs); 52];
    for (si, &suit) in Suit::ALL.iter().enumerate() {
        for (ri, &rank) in Rank::ALL.iter().enumerate() {
            cards[si * 13 + ri] = Card::new(rank, suit);
        }
    }
    cards
}

/// Universe minus `known`, in universe order.
///
/// ```
/// use poker_odds::cards::{parse_cards, remaining};
///
/// let known = parse_cards("AS KS").unwrap();
/// let rest = remaining(&known);
/// assert_eq!(rest.len(), 50);
/// assert!(!rest.contains(&known[0]));
/// ```
pub fn remaining(known: &[Card]) -> Vec<Card> {
    universe().into_iter().filter(|c| !known.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rank_display_and_from_char() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::try_from('t').unwrap(), Rank::Ten);
        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(1), None);
        assert!(matches!(Rank::try_from('1'), Err(CardParseError::InvalidRank('1'))));
    }

    #[test]
    fn suit_display_and_from_char() {
        assert_eq!(Suit::Spades.to_string(), "S");
        assert_eq!(Suit::try_from('h').unwrap(), Suit::Hearts);
        assert!(matches!(Suit::try_from('x'), Err(CardParseError::InvalidSuit('x'))));
    }

    #[test]
    fn card_display_and_from_str() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(a.to_string(), "AS");
        assert_eq!(Card::from_str("As").unwrap(), a);
        assert_eq!(Card::from_str("td").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(parse("ah").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
    }

    #[test]
    fn card_parse_errors_are_specific() {
        assert!(matches!(Card::from_str("10d"), Err(CardParseError::InvalidFormat(_))));
        assert!(matches!(Card::from_str("A"), Err(CardParseError::InvalidFormat(_))));
        assert!(matches!(Card::from_str(""), Err(CardParseError::InvalidFormat(_))));
        assert!(matches!(Card::from_str("1S"), Err(CardParseError::InvalidRank('1'))));
        assert!(matches!(Card::from_str("AX"), Err(CardParseError::InvalidSuit('X'))));
    }

    #[test]
    fn long_names() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).name(), "Ten of Hearts");
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).name(), "Two of Clubs");
    }

    #[test]
    fn ordering_is_rank_then_suit() {
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert!(as_ > ah);
        assert!(ah > kd);
    }

    #[test]
    fn universe_is_52_distinct_cards() {
        let all = universe();
        let set: HashSet<Card> = all.iter().copied().collect();
        assert_eq!(set.len(), 52);
        assert_eq!(all[0], Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(all[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn remaining_partitions_the_universe() {
        let known = parse_cards("AS KD 7C").unwrap();
        let rest = remaining(&known);
        assert_eq!(rest.len(), 49);
        assert!(known.iter().all(|k| !rest.contains(k)));
        let union: HashSet<Card> = rest.iter().chain(known.iter()).copied().collect();
        assert_eq!(union.len(), 52);
    }

    #[test]
    fn parse_round_trips_every_card() {
        for card in universe() {
            assert_eq!(parse(&card.to_string()).unwrap(), card);
        }
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("As, Kd tc").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[2], Card::new(Rank::Ten, Suit::Clubs));
        assert!(parse_cards("As Kx").is_err());
    }
}
