//! Seeded randomness for spawning, collision escape, and hazards.
//!
//! # Streams
//!
//! The driver seeds one root `SimRng` from `CrowdConfig::seed` and splits off
//! one stream per population:
//!
//!   stream_seed = root.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio, so
//! offsets 0 and 1 land far apart in seed space.  A draw in the baseline run
//! can never shift what the adaptive run sees.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::Vec2;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// One population's random stream.
///
/// Not shared between threads: each run owns its stream and the two runs
/// step on separate workers.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream identified by `offset`.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let seed = self.0.next_u64() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    /// Uniform in `[-half, half]`; `0.0` when `half` is not positive.
    #[inline]
    pub fn symmetric(&mut self, half: f32) -> f32 {
        if half > 0.0 { self.0.gen_range(-half..=half) } else { 0.0 }
    }

    /// Bernoulli trial with success probability `p` (clamped to `[0, 1]`).
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform displacement in the square `[-amplitude, amplitude]²`.
    pub fn jitter(&mut self, amplitude: f32) -> Vec2 {
        let x = self.symmetric(amplitude);
        let y = self.symmetric(amplitude);
        Vec2::new(x, y)
    }
}
