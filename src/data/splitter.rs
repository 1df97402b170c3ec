// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Partitions row indices 0..n into a training set and a test
// set from ONE seeded permutation:
//
//   permutation = Fisher-Yates shuffle of 0..n (StdRng, seed)
//   train       = permutation[..k]      (permutation order)
//   test        = permutation[k..]      (sorted ascending)
//
//   where k = round(train_fraction * n), clamped to n, with
//   ties rounded to even (2.5 → 2, 3.5 → 4)
//
// Both halves come from the same draw, so they are always
// disjoint and together cover every index.
//
// Reference: rand crate documentation (SeedableRng, SliceRandom)

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A partition of dataset indices into train and test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Sampled indices, in the order the permutation produced them
    pub train: Vec<usize>,

    /// Remaining indices, in ascending source order
    pub test: Vec<usize>,
}

impl Split {
    /// Draw a reproducible split of `n` rows.
    pub fn new(n: usize, train_fraction: f64, seed: u64) -> Self {
        // Same seed → same RNG stream → same permutation
        let mut rng = StdRng::seed_from_u64(seed);

        // Fisher-Yates shuffle of every row index
        let mut permutation: Vec<usize> = (0..n).collect();
        permutation.shuffle(&mut rng);

        // split_off(k) leaves [0..k) in `train` and returns [k..n).
        // Both halves come from the one permutation, so no index can
        // appear on both sides.
        let mut train = permutation;
        let mut test  = train.split_off(train_size(n, train_fraction));

        // The test file keeps source row order
        test.sort_unstable();

        tracing::debug!(
            "Split {} rows: {} train, {} test (seed {})",
            n,
            train.len(),
            test.len(),
            seed,
        );

        Self { train, test }
    }
}

/// Number of training rows: round(fraction * n), never more than n.
///
/// Exact halves round to the nearest even count, so 5 rows at 0.5
/// give 2 training rows, not 3.
pub fn train_size(n: usize, train_fraction: f64) -> usize {
    let k = ((n as f64) * train_fraction).round_ties_even();

    // `as usize` saturates: negative and NaN products become 0
    (k as usize).min(n)
}
