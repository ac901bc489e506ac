use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use super::Coin;

/// A reproducible coin: the same seed yields the same flip sequence.
pub struct SeededCoin {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededCoin {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Coin for SeededCoin {
    fn flip(&self) -> bool {
        self.rng.lock().unwrap().random()
    }
}
