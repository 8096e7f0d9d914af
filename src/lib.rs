//! linesink - interactive line-processing with composable output stages
//!
//! Reads a file's lines up front, lets the user compose a chain of output
//! stages from a textual menu, then applies the chain to every line in order.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod chain;
pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod predicate;
pub mod session;
pub mod sink;

// Re-export commonly used types
pub use chain::build_chain;
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::{Error, Result};
pub use menu::Selection;
pub use predicate::Predicate;
pub use session::run_session;
pub use sink::{BracketSink, FilterSink, NumberedSink, Sink, StreamSink, TeeSink};
