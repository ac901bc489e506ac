use anyhow::{Result, bail};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Coin;

/// A scripted coin for tests. Returns pre-defined outcomes in order and
/// starts over once the script is exhausted.
pub struct ScriptedCoin {
    outcomes: Vec<bool>,
    index: AtomicUsize,
}

impl ScriptedCoin {
    pub fn new(outcomes: Vec<bool>) -> Result<Self> {
        if outcomes.is_empty() {
            bail!("ScriptedCoin: script must contain at least one outcome");
        }
        Ok(Self {
            outcomes,
            index: AtomicUsize::new(0),
        })
    }

    /// How many times the coin has been flipped so far.
    pub fn flips(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

impl Coin for ScriptedCoin {
    fn flip(&self) -> bool {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.outcomes[i % self.outcomes.len()]
    }
}
