//! Terminal stage writing to an owned character destination.

use std::io::{self, Write};

use super::Sink;

/// Writes each line verbatim to an underlying destination such as standard
/// output, a file handle, or an in-memory buffer.
#[derive(Debug)]
pub struct StreamSink<W: Write> {
    stream: W,
}

impl<W: Write> StreamSink<W> {
    #[must_use]
    pub fn new(stream: W) -> Self {
        Self { stream }
    }
}

impl<W: Write> Sink for StreamSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.stream.write_all(line.as_bytes())
    }
}
