use std::io::{self, Write};
use std::sync::Mutex;

use super::{Notifier, notice};
use crate::operation::Operation;

/// Writes each notice as one line to an arbitrary sink.
pub struct WriterNotifier<W: Write + Send> {
    sink: Mutex<W>,
}

impl<W: Write + Send> WriterNotifier<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Take the sink back, e.g. to inspect a `Vec<u8>` in tests.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap()
    }
}

impl<W: Write + Send> Notifier for WriterNotifier<W> {
    fn notify(&self, operation: Operation) {
        let mut sink = self.sink.lock().unwrap();
        if let Err(e) = writeln!(sink, "{}", notice(operation)).and_then(|_| sink.flush()) {
            tracing::warn!(error = %e, %operation, "failed to write operation notice");
        }
    }
}

/// The default notifier: one line on standard output per computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, operation: Operation) {
        let mut out = io::stdout().lock();
        // A closed pipe must not turn into a panic the way println! would
        if let Err(e) = writeln!(out, "{}", notice(operation)) {
            tracing::warn!(error = %e, %operation, "failed to write operation notice");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_notice() {
        let notifier = WriterNotifier::new(Vec::new());
        notifier.notify(Operation::Addition);
        notifier.notify(Operation::Subtraction);

        let text = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(
            text,
            "Opération effectuée : addition\nOpération effectuée : soustraction\n"
        );
    }

    #[test]
    fn write_failure_is_swallowed() {
        let notifier = WriterNotifier::new(BrokenSink);
        notifier.notify(Operation::Addition);
    }
}
