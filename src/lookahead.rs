use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Positive lookahead: runs the parser and returns its value, but leaves
/// the position where it was.
#[derive(Debug, Clone, Copy)]
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<'src, E, P> Parser<'src, E> for Lookahead<P>
where
    P: Parser<'src, E>,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, P::Output, E> {
        match self.parser.parse(cursor) {
            Outcome::Ok(value, _) => Outcome::Ok(value, cursor),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

pub fn lookahead<'src, E, P>(parser: P) -> Lookahead<P>
where
    P: Parser<'src, E>,
{
    Lookahead::new(parser)
}
