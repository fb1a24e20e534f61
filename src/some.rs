use crate::cursor::Cursor;
use crate::many::{collect_into, skip_from};
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Backtracks when the first application backtracks. The zero-width caveat
/// of [`Many`](crate::many::Many) applies to the repetitions.
#[derive(Debug, Clone, Copy)]
pub struct AtLeastOne<P> {
    parser: P,
}

impl<P> AtLeastOne<P> {
    pub fn new(parser: P) -> Self {
        AtLeastOne { parser }
    }
}

impl<'src, E, P> Parser<'src, E> for AtLeastOne<P>
where
    P: Parser<'src, E>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E> {
        match self.parser.parse(cursor) {
            Outcome::Ok(first, cursor) => collect_into(&self.parser, vec![first], cursor),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// One or more occurrences, values discarded
#[derive(Debug, Clone, Copy)]
pub struct SkipAtLeastOne<P> {
    parser: P,
}

impl<'src, E, P> Parser<'src, E> for SkipAtLeastOne<P>
where
    P: Parser<'src, E>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        match self.parser.parse(cursor) {
            Outcome::Ok(_, cursor) => skip_from(&self.parser, cursor),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// Convenience function to create a one-or-more parser
pub fn some<'src, E, P>(parser: P) -> AtLeastOne<P>
where
    P: Parser<'src, E>,
{
    AtLeastOne::new(parser)
}

pub fn skip_some<'src, E, P>(parser: P) -> SkipAtLeastOne<P>
where
    P: Parser<'src, E>,
{
    SkipAtLeastOne { parser }
}
