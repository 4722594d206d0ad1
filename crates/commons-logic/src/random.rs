//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for reproducible match execution.
//! Uses the xorshift64* algorithm.

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        // splitmix64 finalizer; the `| 1` keeps the xorshift state nonzero
        let mut z = seed.wrapping_add(0x9e3779b97f4a7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^= z >> 31;
        Self { state: z | 1 }
    }

    /// Derive an independent generator for a numbered stream
    ///
    /// Does not advance `self`; the same stream number always yields the
    /// same generator.
    pub fn fork(&self, stream: u64) -> Self {
        let state = (self.state ^ stream.wrapping_mul(0x9e3779b97f4a7c15)) | 1;

        let mut rng = Self { state };
        rng.next_u64(); // mix
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

    /// Uniform draw in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// True with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
