use crate::cards::Rank;

/// Ranks of a 5-card hand grouped by multiplicity, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)], pattern `[3, 1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroups {
    ranks: [Rank; 5],
    counts: [u8; 5],
    len: usize,
}

impl RankGroups {
    /// Build from a rank count array indexed by rank value (2..=14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = Self { ranks: [Rank::Two; 5], counts: [0; 5], len: 0 };

        // Highest rank first, so equal counts stay rank-descending after the stable sort
        for rank in Rank::ALL.iter().rev().copied() {
            let count = rank_counts[rank.value() as usize];
            if count > 0 && groups.len < 5 {
                groups.ranks[groups.len] = rank;
                groups.counts[groups.len] = count;
                groups.len += 1;
            }
        }

        // Insertion sort by count descending; stable, at most five entries
        for i in 1..groups.len {
            let mut j = i;
            while j > 0 && groups.counts[j - 1] < groups.counts[j] {
                groups.counts.swap(j - 1, j);
                groups.ranks.swap(j - 1, j);
                j -= 1;
            }
        }

        groups
    }

    /// Multiplicities in group order, e.g. `[3, 2]` for a full house.
    pub fn pattern(&self) -> &[u8] {
        &self.counts[..self.len]
    }

    /// Group ranks in group order: primary pattern ranks first, then kickers descending.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks[..self.len]
    }

    /// Rank of the `i`-th group; the lowest rank past the end.
    pub fn rank(&self, i: usize) -> Rank {
        self.ranks().get(i).copied().unwrap_or(Rank::Two)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(u8, u8)]) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &(rank_val, count) in pairs {
            counts[rank_val as usize] = count;
        }
        counts
    }

    #[test]
    fn test_quad() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 4), (13, 1)])); // AAAAK
        assert_eq!(groups.pattern(), &[4, 1]);
        assert_eq!(groups.ranks(), &[Rank::Ace, Rank::King]);
    }

    #[test]
    fn test_quad_with_higher_kicker() {
        let groups = RankGroups::from_counts(&make_counts(&[(3, 4), (14, 1)])); // 3333A
        assert_eq!(groups.pattern(), &[4, 1]);
        assert_eq!(groups.ranks(), &[Rank::Three, Rank::Ace]);
    }

    #[test]
    fn test_full_house() {
        let groups = RankGroups::from_counts(&make_counts(&[(2, 3), (13, 2)])); // 222KK
        assert_eq!(groups.pattern(), &[3, 2]);
        assert_eq!(groups.ranks(), &[Rank::Two, Rank::King]);
    }

    #[test]
    fn test_two_pair() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 1), (13, 2), (10, 2)])); // KKTTA
        assert_eq!(groups.pattern(), &[2, 2, 1]);
        assert_eq!(groups.ranks(), &[Rank::King, Rank::Ten, Rank::Ace]);
    }

    #[test]
    fn test_one_pair() {
        let groups = RankGroups::from_counts(&make_counts(&[(8, 2), (14, 1), (12, 1), (5, 1)])); // 88AQ5
        assert_eq!(groups.pattern(), &[2, 1, 1, 1]);
        assert_eq!(groups.ranks(), &[Rank::Eight, Rank::Ace, Rank::Queen, Rank::Five]);
    }

    #[test]
    fn test_high_card() {
        let groups =
            RankGroups::from_counts(&make_counts(&[(14, 1), (10, 1), (7, 1), (5, 1), (2, 1)]));
        assert_eq!(groups.pattern(), &[1, 1, 1, 1, 1]);
        assert_eq!(groups.rank(0), Rank::Ace);
        assert_eq!(groups.rank(4), Rank::Two);
        assert_eq!(groups.rank(5), Rank::Two);
    }
}
