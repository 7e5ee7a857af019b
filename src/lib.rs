#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod cli;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

extern crate regex;

pub use lexer::lexer::{scan, Scan};
pub use lexer::table::{tokenize, TokenTable};

/// Byte offset into the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Finds the line holding byte `pos` of `content`.
///
/// Returns the 1-based line number, the line text (with its terminator) and
/// the column of `pos` inside that line, counted in characters.
pub fn get_line_at_position(content: &str, pos: usize) -> Option<(usize, String, usize)> {
    if pos >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = line.get(..pos - start)?.chars().count();
            return Some((index + 1, line.to_string(), column));
        }

        start = end;
    }

    None
}

#[cfg(test)]
mod tests {
    const CONTENT: &str = "Hello, world!\nint x;\n\n  Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(CONTENT, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(CONTENT, 32).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "  Testing { }\n");
        assert_eq!(line_pos, 10);
    }

    #[test]
    fn test_get_line_at_position_counts_chars() {
        let (line_number, _, line_pos) = super::get_line_at_position("é = @", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_get_line_at_position_out_of_range() {
        assert!(super::get_line_at_position(CONTENT, CONTENT.len()).is_none());
        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_span_display() {
        let span = super::Span {
            start: super::Position(3),
            end: super::Position(7),
        };
        assert_eq!(span.to_string(), "3..7");
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_offsets_past_u32() {
        let start = u32::MAX as usize + 10;
        let span = super::Span {
            start: super::Position(start),
            end: super::Position(start + 3),
        };
        assert_eq!(span.len(), 3);
        assert_eq!(span.to_string(), format!("{}..{}", start, start + 3));
    }
}
