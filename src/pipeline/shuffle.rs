//! Ordinal shuffling.

use rand::Rng;

/// Uniformly permute `items` with the Fisher–Yates algorithm.
///
/// For `i` from `len - 1` down to `1`, swaps `items[i]` with `items[j]` where
/// `j` is drawn uniformly from `[0, i]`. The random source is supplied by the
/// caller, so a seeded generator reproduces the same permutation.
pub fn shuffle<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
    items
}
