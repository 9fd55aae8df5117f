/// Number of `k`-subsets of an `n`-set, `C(n, k)`; zero when `k > n`.
///
/// ```
/// use poker_odds::evaluator::combinations::binomial;
///
/// assert_eq!(binomial(7, 5), 21);
/// assert_eq!(binomial(47, 4), 178_365);
/// assert_eq!(binomial(3, 4), 0);
/// ```
pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // Exact at every step: acc is C(n, i) before the update
        acc = acc * (n - i) as u128 / (i + 1) as u128;
    }
    acc
}

/// Lexicographic `k`-subsets of the indices `0..n`.
///
/// An explicit index-based generator: [`Combinations::advance`] hands out the current
/// subset as a borrowed slice without allocating. The index space can be split into
/// disjoint shards by the leading index with [`Combinations::leading`]; the shards for
/// `first = 0..=n-k` together visit every subset exactly once.
///
/// ```
/// use poker_odds::evaluator::combinations::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(all, vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    pinned_first: bool,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: (0..k).collect(), pinned_first: false, started: false, done: k > n }
    }

    /// Only the subsets whose smallest index is `first`.
    pub fn leading(n: usize, k: usize, first: usize) -> Self {
        let done = k == 0 || first + k > n;
        Self { n, indices: (first..first + k).collect(), pinned_first: true, started: false, done }
    }

    /// Subset size.
    pub fn k(&self) -> usize {
        self.indices.len()
    }

    /// Step to the next subset and return it, or `None` once exhausted.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let k = self.indices.len();
        let floor = usize::from(self.pinned_first);

        // Rightmost index that can still move right
        let mut i = k;
        loop {
            if i == floor {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                break;
            }
        }

        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(&self.indices)
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[usize]>::to_vec)
    }
}
