use rand::RngExt;

use super::Coin;

/// Flips with the process-wide thread-local RNG. Unbiased, not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadCoin;

impl Coin for ThreadCoin {
    fn flip(&self) -> bool {
        rand::rng().random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_both_outcomes() {
        let coin = ThreadCoin;
        let heads = (0..512).filter(|_| coin.flip()).count();
        assert!(heads > 0 && heads < 512);
    }
}
