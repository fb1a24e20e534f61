use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Downgrades an `Error` from the inner parser to `Backtrack`, so that an
/// enclosing alternation gets to try its next branch.
#[derive(Debug, Clone, Copy)]
pub struct Attempt<P> {
    parser: P,
}

impl<'src, E, P> Parser<'src, E> for Attempt<P>
where
    P: Parser<'src, E>,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, P::Output, E> {
        match self.parser.parse(cursor) {
            Outcome::Error(_) => Outcome::Backtrack,
            other => other,
        }
    }
}

pub fn attempt<'src, E, P>(parser: P) -> Attempt<P>
where
    P: Parser<'src, E>,
{
    Attempt { parser }
}
