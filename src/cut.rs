use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Commits to a parser: a backtrack becomes `Error(diagnostic)`.
///
/// Success and errors raised by the inner parser pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Cut<P, E> {
    parser: P,
    diagnostic: E,
}

impl<'src, E, P> Parser<'src, E> for Cut<P, E>
where
    P: Parser<'src, E>,
    E: Clone,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, P::Output, E> {
        match self.parser.parse(cursor) {
            Outcome::Backtrack => Outcome::Error(self.diagnostic.clone()),
            other => other,
        }
    }
}

pub fn cut<'src, E, P>(parser: P, diagnostic: E) -> Cut<P, E>
where
    P: Parser<'src, E>,
    E: Clone,
{
    Cut { parser, diagnostic }
}

/// Like [`Cut`], but an inner error is merged with the diagnostic through
/// `combine(inner, diagnostic)` instead of passing through.
#[derive(Debug, Clone, Copy)]
pub struct Cutting<P, E, C> {
    parser: P,
    diagnostic: E,
    combine: C,
}

impl<'src, E, P, C> Parser<'src, E> for Cutting<P, E, C>
where
    P: Parser<'src, E>,
    E: Clone,
    C: Fn(E, E) -> E,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, P::Output, E> {
        match self.parser.parse(cursor) {
            Outcome::Ok(value, cursor) => Outcome::Ok(value, cursor),
            Outcome::Backtrack => Outcome::Error(self.diagnostic.clone()),
            Outcome::Error(e) => Outcome::Error((self.combine)(e, self.diagnostic.clone())),
        }
    }
}

pub fn cutting<'src, E, P, C>(parser: P, diagnostic: E, combine: C) -> Cutting<P, E, C>
where
    P: Parser<'src, E>,
    E: Clone,
    C: Fn(E, E) -> E,
{
    Cutting {
        parser,
        diagnostic,
        combine,
    }
}

/// Extension trait to add .cut() method support for parsers
pub trait CutExt<'src, E>: Parser<'src, E> + Sized {
    fn cut(self, diagnostic: E) -> Cut<Self, E>
    where
        E: Clone,
    {
        Cut {
            parser: self,
            diagnostic,
        }
    }
}

/// Implement CutExt for all parsers
impl<'src, E, P> CutExt<'src, E> for P where P: Parser<'src, E> {}
