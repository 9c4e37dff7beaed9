//! Injectable randomness for serves

use rand::{Rng, SeedableRng};

/// Source of the random numbers used when (re)launching the ball
pub trait RandomSource {
    /// Uniform value in `[lo, hi)`
    fn range(&mut self, lo: f32, hi: f32) -> f32;

    /// Fair coin flip
    fn coin(&mut self) -> bool;
}

/// Pick `a` or `b` with equal probability
pub fn choose<T>(rng: &mut dyn RandomSource, a: T, b: T) -> T {
    if rng.coin() {
        a
    } else {
        b
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if lo >= hi {
            return lo;
        }
        self.0.gen_range(lo..hi)
    }

    fn coin(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}
