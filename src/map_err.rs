use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::fmt;
use std::marker::PhantomData;

/// Parser combinator that transforms the error payload of a parser using a
/// mapping function.
///
/// Backtracking is left alone; only `Outcome::Error` goes through the mapper.
pub struct MapErr<P, F, E1> {
    parser: P,
    mapper: F,
    _error: PhantomData<fn(E1)>,
}

impl<P, F, E1> MapErr<P, F, E1> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr {
            parser,
            mapper,
            _error: PhantomData,
        }
    }
}

impl<P: Clone, F: Clone, E1> Clone for MapErr<P, F, E1> {
    fn clone(&self) -> Self {
        MapErr::new(self.parser.clone(), self.mapper.clone())
    }
}

impl<P, F, E1> fmt::Debug for MapErr<P, F, E1>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'src, P, F, E1, E2> Parser<'src, E2> for MapErr<P, F, E1>
where
    P: Parser<'src, E1>,
    F: Fn(E1) -> E2,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E2> {
        self.parser.parse(cursor).map_err(&self.mapper)
    }
}

/// Convenience function to create a MapErr parser
pub fn map_err<'src, P, F, E1, E2>(parser: P, mapper: F) -> MapErr<P, F, E1>
where
    P: Parser<'src, E1>,
    F: Fn(E1) -> E2,
{
    MapErr::new(parser, mapper)
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'src, E1>: Parser<'src, E1> + Sized {
    fn map_err<F, E2>(self, mapper: F) -> MapErr<Self, F, E1>
    where
        F: Fn(E1) -> E2,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'src, E, P> MapErrExt<'src, E> for P where P: Parser<'src, E> {}
