use crate::cursor::Cursor;
use crate::map::Ignored;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that turns a backtrack into `None`
///
/// Errors still propagate; only backtracking is absorbed, and then nothing
/// is consumed.
#[derive(Debug, Clone, Copy)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'src, E, P> Parser<'src, E> for Optional<P>
where
    P: Parser<'src, E>,
{
    type Output = Option<P::Output>;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E> {
        match self.parser.parse(cursor) {
            Outcome::Ok(value, cursor) => Outcome::Ok(Some(value), cursor),
            Outcome::Backtrack => Outcome::Ok(None, cursor),
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'src, E, P>(parser: P) -> Optional<P>
where
    P: Parser<'src, E>,
{
    Optional::new(parser)
}

/// Optional parser whose value is discarded
pub fn skip_optional<'src, E, P>(parser: P) -> Ignored<Optional<P>>
where
    P: Parser<'src, E>,
{
    Ignored::new(Optional::new(parser))
}

/// Picks a continuation by whether the first parser succeeded.
///
/// On success the value is handed to `on_success`, which returns the parser
/// to run next. On backtrack `on_failure` runs from the original position.
#[derive(Debug, Clone, Copy)]
pub struct Optioned<P, S, F> {
    parser: P,
    on_success: S,
    on_failure: F,
}

impl<'src, E, P, S, Q, F> Parser<'src, E> for Optioned<P, S, F>
where
    P: Parser<'src, E>,
    S: Fn(P::Output) -> Q,
    Q: Parser<'src, E>,
    F: Parser<'src, E, Output = Q::Output>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Q::Output, E> {
        match self.parser.parse(cursor) {
            Outcome::Ok(value, after) => (self.on_success)(value).parse(after),
            Outcome::Backtrack => self.on_failure.parse(cursor),
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

pub fn optioned<'src, E, P, S, Q, F>(parser: P, on_success: S, on_failure: F) -> Optioned<P, S, F>
where
    P: Parser<'src, E>,
    S: Fn(P::Output) -> Q,
    Q: Parser<'src, E>,
    F: Parser<'src, E, Output = Q::Output>,
{
    Optioned {
        parser,
        on_success,
        on_failure,
    }
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'src, E>: Parser<'src, E> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'src, E, P> OptionalExt<'src, E> for P where P: Parser<'src, E> {}
