use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    fn choose_index(&mut self, len: usize) -> usize;

    fn coin_flip(&mut self) -> bool;
}

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

    pub fn random<T>(&mut self) -> T
    where
        rand::distr::StandardUniform: rand::distr::Distribution<T>,
    {
        self.rng.random()
    }

    pub fn fork(&mut self) -> SessionRng {
        SessionRng::new(self.random())
    }
}

impl RandomSource for SessionRng {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.random()
    }
}
