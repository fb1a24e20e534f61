use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. Use
/// [`then_ignore`](AndExt::then_ignore) and [`ignore_then`](AndExt::ignore_then)
/// to drop the parts that carry no value.
///
/// Example:
/// ```
/// use flatcomb::and::AndExt;
/// use flatcomb::ascii::read_int;
/// use flatcomb::byte::byte;
/// use flatcomb::run_parser;
///
/// let parser = read_int().then_ignore(byte(b'.')).and(read_int());
/// let outcome = run_parser::<(), _>(&parser, b"123.456");
/// assert_eq!(outcome.value(), Some((123, 456)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'src, E, P1, P2> Parser<'src, E> for And<P1, P2>
where
    P1: Parser<'src, E>,
    P2: Parser<'src, E>,
{
    type Output = (P1::Output, P2::Output);

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E> {
        match self.parser1.parse(cursor) {
            Outcome::Ok(first, cursor) => self.parser2.parse(cursor).map(|second| (first, second)),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// Sequence two parsers, keeping only the first output
#[derive(Debug, Clone, Copy)]
pub struct ThenIgnore<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'src, E, P1, P2> Parser<'src, E> for ThenIgnore<P1, P2>
where
    P1: Parser<'src, E>,
    P2: Parser<'src, E>,
{
    type Output = P1::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E> {
        match self.parser1.parse(cursor) {
            Outcome::Ok(first, cursor) => self.parser2.parse(cursor).map(|_| first),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// Sequence two parsers, keeping only the second output
#[derive(Debug, Clone, Copy)]
pub struct IgnoreThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'src, E, P1, P2> Parser<'src, E> for IgnoreThen<P1, P2>
where
    P1: Parser<'src, E>,
    P2: Parser<'src, E>,
{
    type Output = P2::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E> {
        match self.parser1.parse(cursor) {
            Outcome::Ok(_, cursor) => self.parser2.parse(cursor),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// Convenience function to create an And parser
pub fn and<'src, E, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'src, E>,
    P2: Parser<'src, E>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add sequencing methods to parsers
pub trait AndExt<'src, E>: Parser<'src, E> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'src, E>,
    {
        And::new(self, other)
    }

    fn then_ignore<P>(self, other: P) -> ThenIgnore<Self, P>
    where
        P: Parser<'src, E>,
    {
        ThenIgnore {
            parser1: self,
            parser2: other,
        }
    }

    fn ignore_then<P>(self, other: P) -> IgnoreThen<Self, P>
    where
        P: Parser<'src, E>,
    {
        IgnoreThen {
            parser1: self,
            parser2: other,
        }
    }
}

/// Implement AndExt for all parsers
impl<'src, E, P> AndExt<'src, E> for P where P: Parser<'src, E> {}
