//! Deterministic PRNG based on the Park–Miller multiplicative LCG.
//!
//! Drives the permutation-table shuffle. Same seed always produces the same
//! sequence of values across all platforms: the recurrence is exact integer
//! arithmetic, and only the final output division touches floating point.

/// Park–Miller "minimal standard" LCG: `state = state * 16807 mod (2^31 - 1)`.
///
/// The seed is normalized on construction into `[1, 2147483646]` so that
/// zero and negative seeds never hit the absorbing zero state. The state
/// never exceeds `2^31 - 2`, so the multiplication cannot overflow `i64`.
#[derive(Debug, Clone)]
pub struct ParkMiller {
    state: i64,
}

/// The Mersenne prime modulus `2^31 - 1`.
const MODULUS: i64 = 2_147_483_647;

/// The primitive-root multiplier of the minimal standard generator.
const MULTIPLIER: i64 = 16_807;

impl ParkMiller {
    /// Creates a new generator from an arbitrary integer seed.
    ///
    /// The seed is reduced modulo `2^31 - 1` with truncated remainder; a
    /// non-positive result is shifted by `2^31 - 2` into the valid state
    /// range `[1, 2147483646]`.
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        Self { state }
    }

    /// Advances the state and returns a value in (0, 1).
    ///
    /// The state itself is never zero, so the output is strictly positive
    /// and strictly below 1.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Current internal state, exposed for golden-value tests.
    #[cfg(test)]
    fn state(&self) -> i64 {
        self.state
    }
}
