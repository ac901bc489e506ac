use std::sync::Mutex;

use super::Notifier;
use crate::operation::Operation;

/// Remembers every operation it was told about, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Operation>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Operation> {
        self.seen.lock().unwrap().last().copied()
    }

    pub fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, operation: Operation) {
        self.seen.lock().unwrap().push(operation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let notifier = RecordingNotifier::new();
        assert_eq!(notifier.count(), 0);
        assert!(notifier.last().is_none());
    }

    #[test]
    fn records_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Operation::Subtraction);
        notifier.notify(Operation::Addition);

        assert_eq!(
            notifier.operations(),
            vec![Operation::Subtraction, Operation::Addition]
        );
        assert_eq!(notifier.last(), Some(Operation::Addition));
    }
}
