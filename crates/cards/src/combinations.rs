// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lazy k-combinations of a sequence.
use std::iter::FusedIterator;

/// The largest sequence length supported by [nck].
pub const MAX_N: usize = 52;

/// The largest combination size supported by [nck].
pub const MAX_K: usize = 7;

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u64; MAX_K + 1]; MAX_N + 1] {
    let mut t = [[0u64; MAX_K + 1]; MAX_N + 1];
    t[0][0] = 1;

    let mut n = 1;
    while n <= MAX_N {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u64; MAX_K + 1]; MAX_N + 1] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");
    NCKS[n][k] as usize
}

/// Moves `idx` to the next strictly increasing combination of `0..n` in
/// lexicographic order, returns false when `idx` was the last one.
pub(crate) fn advance(idx: &mut [usize], n: usize) -> bool {
    let k = idx.len();

    // Rightmost position that has not reached its maximum value.
    let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
        return false;
    };

    idx[i] += 1;
    for j in (i + 1)..k {
        idx[j] = idx[j - 1] + 1;
    }

    true
}

/// An iterator over all the `K` sized index combinations of `0..n`.
///
/// Tuples are strictly increasing and are produced in lexicographic order,
/// the same order as `K` nested loops with `i < j < k`:
///
/// ```
/// # use tridraw_cards::Combinations;
/// let pairs = Combinations::<2>::new(4).collect::<Vec<_>>();
/// assert_eq!(pairs, [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]);
/// ```
///
/// The iterator is cheap to clone, a clone restarts from the position of
/// the original.
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    next: Option<[usize; K]>,
    remaining: usize,
}

impl<const K: usize> Combinations<K> {
    /// Creates the combinations iterator for a sequence of length `n`.
    ///
    /// Panics if n > 52 or K > 7.
    pub fn new(n: usize) -> Self {
        let remaining = nck(n, K);
        let next = (K <= n).then(|| std::array::from_fn(|i| i));
        Self { n, next, remaining }
    }

    /// The sequence length.
    pub fn n(&self) -> usize {
        self.n
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        let mut following = current;
        self.next = advance(&mut following, self.n).then_some(following);
        self.remaining -= 1;

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const K: usize> ExactSizeIterator for Combinations<K> {}

impl<const K: usize> FusedIterator for Combinations<K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);
        assert_eq!(nck(0, 0), 1);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 49, 1176, 18424]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(49, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));
    }

    #[test]
    fn lexicographic_order() {
        let triples = Combinations::<3>::new(5).collect::<Vec<_>>();
        assert_eq!(triples.len(), 10);
        assert_eq!(triples[0], [0, 1, 2]);
        assert_eq!(triples[1], [0, 1, 3]);
        assert_eq!(triples[3], [0, 2, 3]);
        assert_eq!(triples[9], [2, 3, 4]);
        assert!(triples.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn matches_nested_loops() {
        let n = 13;
        let mut expected = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    expected.push([i, j, k]);
                }
            }
        }

        assert_eq!(Combinations::<3>::new(n).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn unique_and_exact_size() {
        let combs = Combinations::<3>::new(52);
        assert_eq!(combs.len(), 22_100);

        let set = combs
            .inspect(|c| assert!(c[0] < c[1] && c[1] < c[2] && c[2] < 52))
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 22_100);
    }

    #[test]
    fn edge_sizes() {
        // One empty combination.
        assert_eq!(Combinations::<0>::new(49).collect::<Vec<_>>(), [[]]);

        // Nothing to choose from.
        assert_eq!(Combinations::<2>::new(1).count(), 0);
        assert_eq!(Combinations::<1>::new(0).count(), 0);

        // The whole sequence.
        assert_eq!(Combinations::<3>::new(3).collect::<Vec<_>>(), [[0, 1, 2]]);
    }

    #[test]
    fn restart_from_clone() {
        let mut combs = Combinations::<2>::new(49);
        combs.nth(100);

        let restarted = combs.clone();
        assert_eq!(restarted.len(), combs.len());
        assert!(restarted.eq(combs.by_ref()));
        assert_eq!(combs.next(), None);
        assert_eq!(combs.len(), 0);
    }
}
