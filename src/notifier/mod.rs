//! Where the "which operation ran" notice goes.
//!
//! The notice is a side channel: it never changes the value a computation
//! returns, and a notifier that fails to deliver only logs a warning.

pub mod recording;
pub mod writer;

pub use recording::RecordingNotifier;
pub use writer::{StdoutNotifier, WriterNotifier};

use crate::consts::NOTICE_PREFIX;
use crate::operation::Operation;

/// Receives one notification per computation.
pub trait Notifier: Send + Sync {
    fn notify(&self, operation: Operation);
}

/// Render the console line for an operation, e.g. `Opération effectuée : addition`.
pub fn notice(operation: Operation) -> String {
    format!("{NOTICE_PREFIX}{}", operation.label())
}

/// Discards every notice. Used when running many trials.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _operation: Operation) {}
}
