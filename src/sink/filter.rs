//! Predicate-based filtering stage.

use std::io;

use crate::predicate::Predicate;

use super::Sink;

/// Forwards each line unchanged when the predicate holds, otherwise drops it
/// silently. Dropped lines leave no trace anywhere downstream.
pub struct FilterSink {
    inner: Box<dyn Sink>,
    predicate: Predicate,
}

impl FilterSink {
    #[must_use]
    pub fn new(inner: Box<dyn Sink>, predicate: Predicate) -> Self {
        Self { inner, predicate }
    }
}

impl Sink for FilterSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.predicate.matches(line) {
            self.inner.write_line(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::SharedBuf;
    use super::super::StreamSink;
    use super::*;

    #[test]
    fn test_contains_digit_drops_and_passes() {
        let buf = SharedBuf::new();
        let mut sink = FilterSink::new(
            Box::new(StreamSink::new(buf.clone())),
            Predicate::ContainsDigit,
        );

        sink.write_line("hello\n").unwrap();
        sink.write_line("hello2\n").unwrap();

        assert_eq!(buf.contents(), "hello2\n");
    }

    #[test]
    fn test_passed_line_is_unchanged() {
        let buf = SharedBuf::new();
        let mut sink = FilterSink::new(
            Box::new(StreamSink::new(buf.clone())),
            Predicate::LongerThanFive,
        );

        sink.write_line("  a longer line  \n").unwrap();

        assert_eq!(buf.contents(), "  a longer line  \n");
    }
}
