//! Built-in line predicates for the filter stage.
//!
//! Predicates are named values rather than closures so that a filter stage
//! can report what it was built with and tests can construct them directly.

/// A unary predicate over one line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// The line contains at least one decimal digit.
    ContainsDigit,
    /// The trimmed line is longer than five characters.
    LongerThanFive,
}

impl Predicate {
    /// Parse a filter-menu entry. Accepts the menu number or the predicate
    /// name (case-insensitive); anything else is an invalid choice.
    #[must_use]
    pub fn parse(entry: &str) -> Option<Self> {
        match entry.trim().to_ascii_lowercase().as_str() {
            "1" | "contains-digit" => Some(Self::ContainsDigit),
            "2" | "longer-than-5" => Some(Self::LongerThanFive),
            _ => None,
        }
    }

    /// Evaluate the predicate against one line.
    #[must_use]
    pub fn matches(self, line: &str) -> bool {
        match self {
            Self::ContainsDigit => line.chars().any(|c| c.is_ascii_digit()),
            Self::LongerThanFive => line.trim().chars().count() > 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_digit() {
        assert!(Predicate::ContainsDigit.matches("hello2\n"));
        assert!(Predicate::ContainsDigit.matches("42"));
        assert!(!Predicate::ContainsDigit.matches("hello\n"));
        assert!(!Predicate::ContainsDigit.matches(""));
    }

    #[test]
    fn test_longer_than_five() {
        assert!(Predicate::LongerThanFive.matches("abcdef\n"));
        assert!(Predicate::LongerThanFive.matches("  spaced out  \n"));
        // Trimmed length is what counts
        assert!(!Predicate::LongerThanFive.matches("   abc   \n"));
        assert!(!Predicate::LongerThanFive.matches("12345\n"));
    }

    #[test]
    fn test_parse_menu_numbers() {
        assert_eq!(Predicate::parse("1"), Some(Predicate::ContainsDigit));
        assert_eq!(Predicate::parse(" 2 \n"), Some(Predicate::LongerThanFive));
        assert_eq!(Predicate::parse("3"), None);
        assert_eq!(Predicate::parse(""), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            Predicate::parse("Contains-Digit"),
            Some(Predicate::ContainsDigit)
        );
        assert_eq!(
            Predicate::parse("longer-than-5"),
            Some(Predicate::LongerThanFive)
        );
    }
}
