use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it backtracks,
/// tries the second parser from the same position.
///
/// An `Error` from the first parser is returned as is; only backtracking
/// moves on to the alternative.
#[derive(Debug, Clone, Copy)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'src, E, P1, P2> Parser<'src, E> for Or<P1, P2>
where
    P1: Parser<'src, E>,
    P2: Parser<'src, E, Output = P1::Output>,
{
    type Output = P1::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E> {
        match self.parser1.parse(cursor) {
            Outcome::Backtrack => self.parser2.parse(cursor),
            other => other,
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src, E>: Parser<'src, E> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, E, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'src, E, P> OrExt<'src, E> for P where P: Parser<'src, E> {}

/// Convenience function to create an Or parser
pub fn or<'src, E, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'src, E>,
    P2: Parser<'src, E, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}
