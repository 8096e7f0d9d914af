//! Error types and result alias for linesink.
//!
//! Every session failure is one of a small set of conditions; all of them are
//! caught at the top of the session and turned into a user-visible message.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a linesink session.
#[derive(Debug, Error)]
pub enum Error {
    /// The primary input file does not exist.
    #[error("file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// An underlying read or write failed (primary destination, secondary
    /// tee file, or the control stream).
    #[error("{0}")]
    Io(#[from] io::Error),

    /// The configuration file could not be read, parsed, or validated.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_message() {
        let err = Error::InputNotFound(PathBuf::from("lines.dat"));
        assert_eq!(err.to_string(), "file 'lines.dat' not found");
    }

    #[test]
    fn test_io_error_carries_underlying_message() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        assert_eq!(err.to_string(), "broken pipe");
    }
}
