//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG backing the `random` strategy.
//! Uses a simple but effective xorshift algorithm: same seed, same match.

/// Seeded random number generator
///
/// Deterministic: same seed + stream = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a caller-supplied seed
    pub fn new(seed: u64) -> Self {
        // Spread the seed bits; the |1 keeps xorshift out of the
        // all-zero fixed point.
        let state = seed.wrapping_mul(0x2545f4914f6cdd1d) | 1;

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Create an independent RNG for a specific draw stream
    ///
    /// Each side of each round gets its own stream so that one side's
    /// draws never shift the other's.
    pub fn fork(&self, stream: u64) -> Self {
        let state = (self.state ^ stream.wrapping_mul(0x9e3779b97f4a7c15)) | 1;

        let mut rng = Self { state };
        rng.next_u64(); // Mix
        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Fair coin flip (takes the high bit, which is well mixed)
    pub fn coin(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }
}
