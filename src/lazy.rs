use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Builds its parser from `factory` on every parse, so a grammar rule can
/// refer to itself or to a rule defined later.
#[derive(Debug, Clone, Copy)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    pub fn new(factory: F) -> Self {
        Lazy { factory }
    }
}

impl<'src, E, F, P> Parser<'src, E> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'src, E>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, P::Output, E> {
        (self.factory)().parse(cursor)
    }
}

/// Defer construction of a parser to parse time
pub fn lazy<'src, E, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'src, E>,
{
    Lazy::new(factory)
}
