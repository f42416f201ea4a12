use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The one random source of a game session. Seeded once; every spawn and
/// seed tile of the session draws from it.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// True with probability `percent`/100. Values above 100 always hit.
    pub fn random_percent(&mut self, percent: u32) -> bool {
        self.rng.random_range(0..100u32) < percent
    }
}
