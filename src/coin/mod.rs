pub mod scripted;
pub mod seeded;
pub mod thread;

pub use scripted::ScriptedCoin;
pub use seeded::SeededCoin;
pub use thread::ThreadCoin;

/// Source of the one random boolean each computation consumes.
/// Could be the thread RNG, a seeded generator, or a test script.
pub trait Coin: Send + Sync {
    /// `true` selects addition, `false` subtraction.
    fn flip(&self) -> bool;
}
