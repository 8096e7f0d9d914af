//! Line-numbering stage.

use std::io;

use super::Sink;

/// Default field width for the line-number prefix.
pub const DEFAULT_NUMBER_WIDTH: usize = 5;

/// Prefixes each line with a right-justified line number followed by `": "`.
///
/// The counter starts at 1 and belongs to this stage alone: it counts lines
/// that reach it, not original input indices, so lines dropped upstream
/// leave no gaps.
pub struct NumberedSink {
    inner: Box<dyn Sink>,
    next_line: usize,
    width: usize,
}

impl NumberedSink {
    #[must_use]
    pub fn new(inner: Box<dyn Sink>) -> Self {
        Self::with_width(inner, DEFAULT_NUMBER_WIDTH)
    }

    #[must_use]
    pub fn with_width(inner: Box<dyn Sink>, width: usize) -> Self {
        Self {
            inner,
            next_line: 1,
            width,
        }
    }
}

impl Sink for NumberedSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let formatted = format!("{:>width$}: {line}", self.next_line, width = self.width);
        self.next_line += 1;
        self.inner.write_line(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::SharedBuf;
    use super::super::StreamSink;
    use super::*;

    #[test]
    fn test_right_justified_five_wide_prefix() {
        let buf = SharedBuf::new();
        let mut sink = NumberedSink::new(Box::new(StreamSink::new(buf.clone())));

        sink.write_line("first\n").unwrap();
        sink.write_line("second\n").unwrap();

        assert_eq!(buf.contents(), "    1: first\n    2: second\n");
    }

    #[test]
    fn test_counter_survives_many_writes() {
        let buf = SharedBuf::new();
        let mut sink = NumberedSink::new(Box::new(StreamSink::new(buf.clone())));

        for _ in 0..10 {
            sink.write_line("x\n").unwrap();
        }

        assert!(buf.contents().ends_with("   10: x\n"));
    }

    #[test]
    fn test_custom_width() {
        let buf = SharedBuf::new();
        let mut sink = NumberedSink::with_width(Box::new(StreamSink::new(buf.clone())), 3);

        sink.write_line("x\n").unwrap();

        assert_eq!(buf.contents(), "  1: x\n");
    }
}
