use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::lines::pos_line_col;
use crate::outcome::Outcome;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to an [`Outcome`]. `E` is the
/// caller's diagnostic type, carried by [`Outcome::Error`]; most parsers in
/// this crate work for any `E`.
///
/// Any `Fn(Cursor<'src>) -> Outcome<'src, T, E>` is a parser, so grammar rules
/// can be written as plain functions:
///
/// ```
/// use flatcomb::{Cursor, Outcome, Parser, run_parser};
/// use flatcomb::byte::byte;
/// use flatcomb::some::skip_some;
///
/// fn spaces<'src>(cursor: Cursor<'src>) -> Outcome<'src, (), ()> {
///     skip_some(byte(b' ')).parse(cursor)
/// }
///
/// assert!(run_parser(&spaces, b"   x").is_ok());
/// assert!(run_parser(&spaces, b"x").is_backtrack());
/// ```
pub trait Parser<'src, E> {
    type Output;

    /// Run the parser at `cursor`.
    ///
    /// On `Backtrack` and `Error` no cursor escapes, so the caller resumes
    /// from its own saved copy.
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E>;
}

impl<'src, E, T, F> Parser<'src, E> for F
where
    F: Fn(Cursor<'src>) -> Outcome<'src, T, E>,
{
    type Output = T;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, T, E> {
        self(cursor)
    }
}

/// Run `parser` over `input` starting at the first byte.
///
/// Unconsumed input is not an error here: on success the returned cursor
/// tells how far the parser got. Use [`parse_complete`] to require that the
/// whole buffer was consumed.
pub fn run_parser<'src, E, P>(parser: &P, input: &'src [u8]) -> Outcome<'src, P::Output, E>
where
    P: Parser<'src, E>,
{
    let outcome = parser.parse(Cursor::new(input));
    tracing::trace!(
        outcome = outcome.kind(),
        consumed = outcome.pos().map(|pos| pos.offset()),
        len = input.len(),
        "parse finished"
    );
    outcome
}

/// Run `parser` over `input` and require it to consume everything.
pub fn parse_complete<'src, E, P>(parser: &P, input: &'src [u8]) -> Result<P::Output, ParseError<E>>
where
    P: Parser<'src, E>,
{
    match run_parser(parser, input) {
        Outcome::Ok(value, cursor) if cursor.is_eof() => Ok(value),
        Outcome::Ok(_, cursor) => {
            let pos = cursor.pos();
            let (line, column) = pos_line_col(input, pos);
            Err(ParseError::TrailingInput { pos, line, column })
        }
        Outcome::Backtrack => Err(ParseError::NoMatch),
        Outcome::Error(e) => Err(ParseError::Failed(e)),
    }
}
