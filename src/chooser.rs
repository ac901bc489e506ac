//! The random add-or-subtract computation.
//!
//! A [`RandomArithmeticChooser`] owns two capabilities: a [`Coin`] that
//! decides the operation and a [`Notifier`] that hears about it. The
//! default pairing ([`ThreadCoin`] + [`StdoutNotifier`]) backs the plain
//! [`compute`] function.

use std::ops::{Add, Sub};
use std::sync::Arc;

use serde::Serialize;

use crate::coin::{Coin, ThreadCoin};
use crate::notifier::{Notifier, StdoutNotifier};
use crate::operation::Operation;

/// The value a computation returned, and the operation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Computation<T> {
    pub operation: Operation,
    pub value: T,
}

/// Flips a coin, then adds (heads) or subtracts (tails) two operands.
/// Holds no state of its own between calls.
pub struct RandomArithmeticChooser {
    coin: Arc<dyn Coin>,
    notifier: Arc<dyn Notifier>,
}

impl Default for RandomArithmeticChooser {
    fn default() -> Self {
        Self::new(Arc::new(ThreadCoin), Arc::new(StdoutNotifier))
    }
}

impl RandomArithmeticChooser {
    pub fn new(coin: Arc<dyn Coin>, notifier: Arc<dyn Notifier>) -> Self {
        Self { coin, notifier }
    }

    /// Flip once, apply the chosen operation, notify, return the result.
    pub fn compute<T>(&self, a: T, b: T) -> T
    where
        T: Add<Output = T> + Sub<Output = T>,
    {
        self.compute_with_outcome(a, b).value
    }

    /// Like [`compute`](Self::compute), but also reports which operation ran.
    pub fn compute_with_outcome<T>(&self, a: T, b: T) -> Computation<T>
    where
        T: Add<Output = T> + Sub<Output = T>,
    {
        let heads = self.coin.flip();
        let operation = Operation::from_flip(heads);
        tracing::debug!(heads, %operation, "coin flipped");

        let value = operation.apply(a, b);
        self.notifier.notify(operation);

        Computation { operation, value }
    }
}

/// Add or subtract `a` and `b` at random, printing which one happened.
pub fn compute<T>(a: T, b: T) -> T
where
    T: Add<Output = T> + Sub<Output = T>,
{
    RandomArithmeticChooser::default().compute(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::ScriptedCoin;
    use crate::notifier::RecordingNotifier;

    fn scripted(outcomes: Vec<bool>) -> (RandomArithmeticChooser, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let chooser = RandomArithmeticChooser::new(
            Arc::new(ScriptedCoin::new(outcomes).unwrap()),
            notifier.clone(),
        );
        (chooser, notifier)
    }

    #[test]
    fn heads_adds() {
        let (chooser, notifier) = scripted(vec![true]);
        assert_eq!(chooser.compute(5, 3), 8);
        assert_eq!(notifier.last(), Some(Operation::Addition));
    }

    #[test]
    fn tails_subtracts() {
        let (chooser, notifier) = scripted(vec![false]);
        assert_eq!(chooser.compute(5, 3), 2);
        assert_eq!(notifier.last(), Some(Operation::Subtraction));
    }

    #[test]
    fn outcome_carries_operation() {
        let (chooser, _) = scripted(vec![false]);
        let outcome = chooser.compute_with_outcome(-2, -3);
        assert_eq!(
            outcome,
            Computation {
                operation: Operation::Subtraction,
                value: 1,
            }
        );
    }

    #[test]
    fn one_notice_per_call() {
        let (chooser, notifier) = scripted(vec![true, false]);
        for _ in 0..4 {
            chooser.compute(1.0_f64, 2.0);
        }
        assert_eq!(notifier.count(), 4);
    }

    #[test]
    fn outcome_serializes() {
        let (chooser, _) = scripted(vec![true]);
        let json = serde_json::to_value(chooser.compute_with_outcome(5, 3)).unwrap();
        assert_eq!(json, serde_json::json!({"operation": "addition", "value": 8}));
    }

    #[test]
    fn free_function_returns_sum_or_difference() {
        let value = compute(5, 3);
        assert!(value == 8 || value == 2);
    }
}
