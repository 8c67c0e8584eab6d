//! Seeded permutation table for gradient hashing.
//!
//! A 256-entry byte permutation, shuffled deterministically from a seed and
//! duplicated into a 512-entry table so `table[x + 1]` lookups never need a
//! wraparound branch. Each field generation builds its own table; nothing is
//! cached across calls.

use crate::rng::ParkMiller;

/// A 512-entry shuffled byte table (256 unique values, duplicated).
#[derive(Debug, Clone)]
pub struct PermutationTable {
    table: [u8; 512],
}

impl PermutationTable {
    /// Builds the table for a seed.
    ///
    /// The identity sequence 0..=255 is shuffled in place with a
    /// Fisher–Yates pass iterating from index 255 down to 1, swapping with
    /// `j = floor(next() * (i + 1))`. The shuffle direction is load-bearing:
    /// a low-to-high pass consumes the RNG stream in a different order and
    /// produces a different table for the same seed.
    pub fn new(seed: i64) -> Self {
        let mut rng = ParkMiller::new(seed);

        let mut permutation = [0u8; 256];
        for (i, slot) in permutation.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in (1..=255usize).rev() {
            let j = (rng.next_f64() * (i as f64 + 1.0)).floor() as usize;
            permutation.swap(i, j);
        }

        let mut table = [0u8; 512];
        for i in 0..256 {
            table[i] = permutation[i];
            table[i + 256] = permutation[i];
        }
        Self { table }
    }

    /// Byte at `index`. Valid for `index < 512`.
    #[inline]
    pub fn lookup(&self, index: usize) -> u8 {
        self.table[index]
    }

    /// The full 512-entry table.
    pub fn as_bytes(&self) -> &[u8; 512] {
        &self.table
    }
}
