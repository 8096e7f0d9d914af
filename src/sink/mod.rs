//! Composable line sinks.
//!
//! A [`Sink`] accepts one line of text and produces a side effect: display,
//! storage, or forwarding to another sink. Decorating stages each own exactly
//! one inner sink, established at construction, so a fully composed chain is
//! a single owned value; dropping it releases every resource the chain holds
//! (secondary tee files included).

mod bracket;
mod filter;
mod numbered;
mod stream;
mod tee;

use std::io;

pub use bracket::BracketSink;
pub use filter::FilterSink;
pub use numbered::{NumberedSink, DEFAULT_NUMBER_WIDTH};
pub use stream::StreamSink;
pub use tee::TeeSink;

/// A writable line sink.
pub trait Sink {
    /// Write one line into the sink.
    ///
    /// The line may carry its own trailing newline; stages decide for
    /// themselves whether to preserve it. Any failure in the underlying
    /// destination propagates to the caller.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}
