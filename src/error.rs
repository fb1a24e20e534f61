use crate::cursor::Pos;
use thiserror::Error;

/// Failure of a complete parse, as reported by [`parse_complete`].
///
/// `Backtrack` carries no payload, so a top-level backtrack can only be
/// reported as a generic [`ParseError::NoMatch`]. Callers that want a
/// location for their own `E` should record one with
/// [`get_pos`](crate::position::get_pos) when raising it and render it with
/// [`pos_line_cols`](crate::lines::pos_line_cols).
///
/// [`parse_complete`]: crate::parser::parse_complete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError<E> {
    /// No alternative matched the input
    #[error("no parse: input did not match")]
    NoMatch,
    /// The parser raised a diagnosable error
    #[error("parse error: {0}")]
    Failed(E),
    /// The parser succeeded without consuming the whole buffer
    #[error("unconsumed input at line {line}, column {column} ({pos})")]
    TrailingInput { pos: Pos, line: usize, column: usize },
}

impl<E> ParseError<E> {
    /// Error payload raised by the parser, if any
    pub fn into_failed(self) -> Option<E> {
        match self {
            ParseError::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_no_match() {
        let error: ParseError<String> = ParseError::NoMatch;
        assert_eq!(error.to_string(), "no parse: input did not match");
    }

    #[test]
    fn test_display_failed_uses_inner_display() {
        let error = ParseError::Failed("expected ')'");
        assert_eq!(error.to_string(), "parse error: expected ')'");
        assert_eq!(error.into_failed(), Some("expected ')'"));
    }

    #[test]
    fn test_display_trailing_input() {
        let error: ParseError<&str> = ParseError::TrailingInput {
            pos: Pos::from_offset(7),
            line: 2,
            column: 3,
        };

        let display_str = error.to_string();
        assert!(display_str.contains("line 2"));
        assert!(display_str.contains("column 3"));
        assert!(display_str.contains("@7"));
        assert_eq!(error.into_failed(), None);
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<T: std::error::Error>(_: &T) {}

        let error: ParseError<std::fmt::Error> = ParseError::Failed(std::fmt::Error);
        assert_error(&error);
    }
}
