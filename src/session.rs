//! Session driver: buffer the input, build the chain, apply it.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::chain::build_chain;
use crate::config::Config;
use crate::sink::Sink;
use crate::{Error, Result};

/// Read every line of the input file up front, preserving each line's own
/// terminator (the final line may have none).
///
/// A missing file maps to [`Error::InputNotFound`]; any other open or read
/// failure propagates as I/O.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::InputNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Run one interactive session.
///
/// Reads the configured input file in full, builds a chain over `primary`
/// from menu selections on `control`, then writes every buffered line
/// through the chain in file order. The chain owns every resource opened
/// while building (tee files included), so dropping it on any exit path
/// releases them.
pub fn run_session<R: BufRead, W: Write>(
    config: &Config,
    control: &mut R,
    console: &mut W,
    primary: Box<dyn Sink>,
) -> Result<()> {
    let lines = read_lines(&config.input)?;
    debug!(
        count = lines.len(),
        input = %config.input.display(),
        "buffered input lines"
    );

    let mut chain = build_chain(control, console, primary, config)?;

    for line in &lines {
        chain.write_line(line)?;
    }
    debug!(count = lines.len(), "chain application finished");
    Ok(())
}
