use crate::cards::{self, Card};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// An ordered pile of distinct cards; draws come off the top (the end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_odds::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self { cards: cards::universe().to_vec() }
    }

    /// The universe minus `known`, in universe order.
    ///
    /// ```
    /// use poker_odds::cards::parse_cards;
    /// use poker_odds::deck::Deck;
    ///
    /// let known = parse_cards("AH KH QH").unwrap();
    /// assert_eq!(Deck::remaining(&known).len(), 49);
    /// ```
    pub fn remaining(known: &[Card]) -> Self {
        Self { cards: cards::remaining(known) }
    }

    /// Wrap an existing card sequence. Callers keep the cards distinct.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Randomize just `n` cards and return them; the deck keeps all of its cards.
    pub fn peek_random<R: Rng + ?Sized>(&mut self, rng: &mut R, n: usize) -> &[Card] {
        let (picked, _) = self.cards.partial_shuffle(rng, n);
        picked
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn standard_deck_has_52_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        assert!(d.to_string().starts_with("2C 3C 4C"));
        assert!(d.to_string().ends_with("KS AS"));
    }

    #[test]
    fn remaining_excludes_known_cards() {
        let known = parse_cards("2C AS").unwrap();
        let d = Deck::remaining(&known);
        assert_eq!(d.len(), 50);
        assert!(!d.as_slice().contains(&known[0]));
        assert!(!d.as_slice().contains(&known[1]));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
        assert_ne!(d1, Deck::standard());
    }

    #[test]
    fn draw_reduces_length_and_returns_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let hand = d.draw_n(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
    }

    #[test]
    fn peek_random_keeps_the_deck_whole() {
        let mut d = Deck::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let picked = d.peek_random(&mut rng, 9).to_vec();
        assert_eq!(picked.len(), 9);
        assert_eq!(d.len(), 52);
        assert!(picked.iter().all(|c| d.as_slice().contains(c)));
    }

    #[test]
    fn drawing_past_the_bottom_yields_nothing() {
        let mut d = Deck::from_cards(parse_cards("AS KS").unwrap());
        assert_eq!(d.draw_n(5).len(), 2);
        assert!(d.is_empty());
        assert_eq!(d.draw(), None);
    }
}
