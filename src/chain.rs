//! Interactive chain builder.
//!
//! The chain is built as an explicit fold over menu selections: each accepted
//! selection wraps the accumulated sink in a new stage (the newest stage sees
//! every line first), and `Exit` yields the finished chain. Invalid entries
//! produce a diagnostic and leave the accumulator untouched.

use std::fs::File;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Config;
use crate::menu::{write_menu, Selection};
use crate::predicate::Predicate;
use crate::sink::{BracketSink, FilterSink, NumberedSink, Sink, StreamSink, TeeSink};
use crate::Result;

/// Outcome of applying one accepted selection to the accumulated chain.
enum Step {
    Building(Box<dyn Sink>),
    Done(Box<dyn Sink>),
}

/// Build a sink chain by folding menu selections over `initial`.
///
/// Selections are read line-by-line from `control`; the menu, prompts, and
/// diagnostics go to `console`. End of the control stream is treated as an
/// exit request so scripted sessions terminate cleanly.
pub fn build_chain<R: BufRead, W: Write>(
    control: &mut R,
    console: &mut W,
    initial: Box<dyn Sink>,
    config: &Config,
) -> Result<Box<dyn Sink>> {
    let mut acc = initial;
    loop {
        write_menu(console)?;
        let Some(entry) = read_entry(control)? else {
            return Ok(acc);
        };
        acc = match Selection::parse(&entry) {
            Some(selection) => match apply_selection(acc, selection, control, console, config)? {
                Step::Building(next) => next,
                Step::Done(chain) => return Ok(chain),
            },
            None => {
                writeln!(console, "Invalid selection!")?;
                acc
            }
        };
    }
}

/// Read one control line, or `None` at end of stream.
fn read_entry<R: BufRead>(control: &mut R) -> Result<Option<String>> {
    let mut entry = String::new();
    if control.read_line(&mut entry)? == 0 {
        return Ok(None);
    }
    Ok(Some(entry))
}

fn apply_selection<R: BufRead, W: Write>(
    acc: Box<dyn Sink>,
    selection: Selection,
    control: &mut R,
    console: &mut W,
    config: &Config,
) -> Result<Step> {
    Ok(match selection {
        Selection::Bracket => {
            debug!("adding bracket stage");
            Step::Building(Box::new(BracketSink::new(acc)))
        }
        Selection::Numbered => {
            debug!(width = config.number_width, "adding numbered stage");
            Step::Building(Box::new(NumberedSink::with_width(acc, config.number_width)))
        }
        Selection::Tee => {
            write!(console, "Enter the tee output file name: ")?;
            console.flush()?;
            let Some(entry) = read_entry(control)? else {
                return Ok(Step::Building(acc));
            };
            let path = entry.trim();
            let file = File::create(path)?;
            debug!(path, "adding tee stage");
            Step::Building(Box::new(TeeSink::new(
                acc,
                Box::new(StreamSink::new(file)),
            )))
        }
        Selection::Filter => {
            writeln!(console, "Choose a filter:")?;
            writeln!(console, "1. Contains digit")?;
            writeln!(console, "2. Longer than 5 characters")?;
            write!(console, "Selection: ")?;
            console.flush()?;
            match read_entry(control)?.as_deref().and_then(Predicate::parse) {
                Some(predicate) => {
                    debug!(?predicate, "adding filter stage");
                    Step::Building(Box::new(FilterSink::new(acc, predicate)))
                }
                None => {
                    writeln!(console, "Invalid filter selection!")?;
                    Step::Building(acc)
                }
            }
        }
        Selection::Exit => Step::Done(acc),
    })
}
