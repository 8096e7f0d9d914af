//! Duplicating stage.

use std::io;

use super::Sink;

/// Forwards each unmodified line to two independent sinks: the primary
/// (the previously composed chain) first, then the secondary.
///
/// A primary failure aborts before the secondary is attempted; there is no
/// partial-failure recovery.
pub struct TeeSink {
    primary: Box<dyn Sink>,
    secondary: Box<dyn Sink>,
}

impl TeeSink {
    #[must_use]
    pub fn new(primary: Box<dyn Sink>, secondary: Box<dyn Sink>) -> Self {
        Self { primary, secondary }
    }
}

impl Sink for TeeSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.primary.write_line(line)?;
        self.secondary.write_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{FailingSink, SharedBuf};
    use super::super::{NumberedSink, StreamSink};
    use super::*;

    #[test]
    fn test_both_branches_receive_identical_line() {
        let first = SharedBuf::new();
        let second = SharedBuf::new();
        let mut sink = TeeSink::new(
            Box::new(StreamSink::new(first.clone())),
            Box::new(StreamSink::new(second.clone())),
        );

        sink.write_line("hello\n").unwrap();

        assert_eq!(first.contents(), "hello\n");
        assert_eq!(second.contents(), "hello\n");
    }

    #[test]
    fn test_only_primary_copy_carries_number_prefix() {
        let first = SharedBuf::new();
        let second = SharedBuf::new();
        let numbered = NumberedSink::new(Box::new(StreamSink::new(first.clone())));
        let mut sink = TeeSink::new(
            Box::new(numbered),
            Box::new(StreamSink::new(second.clone())),
        );

        sink.write_line("hello\n").unwrap();

        assert_eq!(first.contents(), "    1: hello\n");
        assert_eq!(second.contents(), "hello\n");
    }

    #[test]
    fn test_primary_failure_skips_secondary() {
        let second = SharedBuf::new();
        let mut sink = TeeSink::new(
            Box::new(FailingSink),
            Box::new(StreamSink::new(second.clone())),
        );

        assert!(sink.write_line("hello\n").is_err());
        assert_eq!(second.contents(), "");
    }
}
