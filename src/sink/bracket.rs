//! Bracketing stage.

use std::io;

use super::Sink;

/// Trims each line and forwards it wrapped in one bracket pair with exactly
/// one trailing newline, regardless of the input's own terminator.
pub struct BracketSink {
    inner: Box<dyn Sink>,
}

impl BracketSink {
    #[must_use]
    pub fn new(inner: Box<dyn Sink>) -> Self {
        Self { inner }
    }
}

impl Sink for BracketSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_line(&format!("[{}]\n", line.trim()))
    }
}
