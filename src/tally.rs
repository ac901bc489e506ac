//! Repeated trials, for checking that a coin is fair.

use std::ops::{Add, Sub};

use serde::Serialize;

use crate::chooser::RandomArithmeticChooser;
use crate::operation::Operation;

/// How often each operation came up over a run of trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub additions: u64,
    pub subtractions: u64,
}

impl Tally {
    pub fn record(&mut self, operation: Operation) {
        match operation {
            Operation::Addition => self.additions += 1,
            Operation::Subtraction => self.subtractions += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.additions + self.subtractions
    }

    /// Share of trials that added. 0.0 when nothing was recorded.
    pub fn addition_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.additions as f64 / total as f64,
        }
    }

    /// Whether the addition ratio lies within `tolerance` of one half.
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        self.total() > 0 && (self.addition_ratio() - 0.5).abs() <= tolerance
    }
}

/// Run `trials` computations of `a` and `b` and count the operations.
pub fn run_trials<T>(chooser: &RandomArithmeticChooser, a: T, b: T, trials: usize) -> Tally
where
    T: Copy + Add<Output = T> + Sub<Output = T>,
{
    let mut tally = Tally::default();
    for _ in 0..trials {
        tally.record(chooser.compute_with_outcome(a, b).operation);
    }
    tracing::debug!(
        additions = tally.additions,
        subtractions = tally.subtractions,
        "trials finished"
    );
    tally
}
