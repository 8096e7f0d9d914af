//! The interactive stage-selection menu.

use std::io::{self, Write};

/// One menu selection made while building the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Bracket,
    Numbered,
    Tee,
    Filter,
    Exit,
}

impl Selection {
    /// Parse a menu entry. Accepts the menu number or the stage name
    /// (case-insensitive); anything else is an invalid selection.
    #[must_use]
    pub fn parse(entry: &str) -> Option<Self> {
        match entry.trim().to_ascii_lowercase().as_str() {
            "1" | "bracket" => Some(Self::Bracket),
            "2" | "numbered" => Some(Self::Numbered),
            "3" | "tee" => Some(Self::Tee),
            "4" | "filter" => Some(Self::Filter),
            "5" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Write the stage menu and the selection prompt.
///
/// The prompt has no trailing newline, so the console is flushed before
/// control returns to the caller.
pub fn write_menu<W: Write>(console: &mut W) -> io::Result<()> {
    writeln!(console, "Select output stage:")?;
    writeln!(console, "1. Bracket")?;
    writeln!(console, "2. Numbered")?;
    writeln!(console, "3. Tee")?;
    writeln!(console, "4. Filter")?;
    writeln!(console, "5. Exit")?;
    write!(console, "Selection: ")?;
    console.flush()
}
