use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser backtracks at the current position
/// and backtracks if it succeeds. Errors propagate. Never consumes any input
/// regardless of outcome.
#[derive(Debug, Clone, Copy)]
pub struct Fails<P> {
    parser: P,
}

impl<P> Fails<P> {
    pub fn new(parser: P) -> Self {
        Fails { parser }
    }
}

impl<'src, E, P> Parser<'src, E> for Fails<P>
where
    P: Parser<'src, E>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        match self.parser.parse(cursor) {
            Outcome::Ok(..) => Outcome::Backtrack,
            Outcome::Backtrack => Outcome::Ok((), cursor),
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// Convenience function to create a negative lookahead
pub fn fails<'src, E, P>(parser: P) -> Fails<P>
where
    P: Parser<'src, E>,
{
    Fails::new(parser)
}

/// Runs a parser, then requires that `follow` does not match right after it.
///
/// The value and position of the first parser are kept when `follow`
/// backtracks.
#[derive(Debug, Clone, Copy)]
pub struct NotFollowedBy<P, Q> {
    parser: P,
    follow: Q,
}

impl<'src, E, P, Q> Parser<'src, E> for NotFollowedBy<P, Q>
where
    P: Parser<'src, E>,
    Q: Parser<'src, E>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, P::Output, E> {
        match self.parser.parse(cursor) {
            Outcome::Ok(value, after) => match self.follow.parse(after) {
                Outcome::Ok(..) => Outcome::Backtrack,
                Outcome::Backtrack => Outcome::Ok(value, after),
                Outcome::Error(e) => Outcome::Error(e),
            },
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

pub fn not_followed_by<'src, E, P, Q>(parser: P, follow: Q) -> NotFollowedBy<P, Q>
where
    P: Parser<'src, E>,
    Q: Parser<'src, E>,
{
    NotFollowedBy { parser, follow }
}

/// Extension trait to add .fails() and .not_followed_by() method support for parsers
pub trait NotExt<'src, E>: Parser<'src, E> + Sized {
    fn fails(self) -> Fails<Self> {
        Fails::new(self)
    }

    fn not_followed_by<Q>(self, follow: Q) -> NotFollowedBy<Self, Q>
    where
        Q: Parser<'src, E>,
    {
        NotFollowedBy {
            parser: self,
            follow,
        }
    }
}

/// Implement NotExt for all parsers
impl<'src, E, P> NotExt<'src, E> for P where P: Parser<'src, E> {}
