use crate::cards::Rank;

/// Whether five ranks form a straight, and its high card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub high: Option<Rank>,
}

impl StraightInfo {
    /// Ranks may come in any order. The wheel (A-2-3-4-5) is a straight whose high card is the Five.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut asc = *ranks;
        asc.sort_unstable();

        if asc.windows(2).all(|w| w[1].value() == w[0].value() + 1) {
            return StraightInfo { is_straight: true, high: Some(asc[4]) };
        }

        if asc == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace] {
            return StraightInfo { is_straight: true, high: Some(Rank::Five) };
        }

        StraightInfo { is_straight: false, high: None }
    }
}
