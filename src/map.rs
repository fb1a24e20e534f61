use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
#[derive(Debug, Clone, Copy)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, E, P, F, U> Parser<'src, E> for Map<P, F>
where
    P: Parser<'src, E>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, U, E> {
        self.parser.parse(cursor).map(&self.mapper)
    }
}

/// Parser combinator that discards the output of a parser
#[derive(Debug, Clone, Copy)]
pub struct Ignored<P> {
    parser: P,
}

impl<P> Ignored<P> {
    pub fn new(parser: P) -> Self {
        Ignored { parser }
    }
}

impl<'src, E, P> Parser<'src, E> for Ignored<P>
where
    P: Parser<'src, E>,
{
    type Output = ();

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        self.parser.parse(cursor).map(|_| ())
    }
}

/// Parser combinator that feeds a parser's output into a function choosing
/// the next parser
#[derive(Debug, Clone, Copy)]
pub struct Bind<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Bind { parser, next }
    }
}

impl<'src, E, P, F, Q> Parser<'src, E> for Bind<P, F>
where
    P: Parser<'src, E>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'src, E>,
{
    type Output = Q::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Q::Output, E> {
        match self.parser.parse(cursor) {
            Outcome::Ok(value, cursor) => (self.next)(value).parse(cursor),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// Convenience function to create a Map parser
pub fn map<'src, E, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'src, E>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map(), .ignored() and .bind() to parsers
pub trait MapExt<'src, E>: Parser<'src, E> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn ignored(self) -> Ignored<Self> {
        Ignored::new(self)
    }

    /// Run the parser returned by `next` on this parser's output
    fn bind<F, Q>(self, next: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'src, E>,
    {
        Bind::new(self, next)
    }
}

/// Implement MapExt for all parsers
impl<'src, E, P> MapExt<'src, E> for P where P: Parser<'src, E> {}
