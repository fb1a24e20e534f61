use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Repetition stops at the first `Backtrack`; an `Error` is returned
/// immediately. The inner parser must consume input whenever it succeeds:
/// one that succeeds without advancing makes this loop forever.
#[derive(Debug, Clone, Copy)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, E, P> Parser<'src, E> for Many<P>
where
    P: Parser<'src, E>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E> {
        collect_into(&self.parser, Vec::new(), cursor)
    }
}

/// Like [`Many`] but throws the values away instead of collecting them
#[derive(Debug, Clone, Copy)]
pub struct SkipMany<P> {
    parser: P,
}

impl<P> SkipMany<P> {
    pub fn new(parser: P) -> Self {
        SkipMany { parser }
    }
}

impl<'src, E, P> Parser<'src, E> for SkipMany<P>
where
    P: Parser<'src, E>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        skip_from(&self.parser, cursor)
    }
}

/// Apply `parser` until it backtracks, appending each value to `results`
pub(crate) fn collect_into<'src, E, P>(
    parser: &P,
    mut results: Vec<P::Output>,
    mut cursor: Cursor<'src>,
) -> Outcome<'src, Vec<P::Output>, E>
where
    P: Parser<'src, E>,
{
    loop {
        match parser.parse(cursor) {
            Outcome::Ok(value, next) => {
                results.push(value);
                cursor = next;
            }
            Outcome::Backtrack => return Outcome::Ok(results, cursor),
            Outcome::Error(e) => return Outcome::Error(e),
        }
    }
}

/// Apply `parser` until it backtracks, discarding values
pub(crate) fn skip_from<'src, E, P>(parser: &P, mut cursor: Cursor<'src>) -> Outcome<'src, (), E>
where
    P: Parser<'src, E>,
{
    loop {
        match parser.parse(cursor) {
            Outcome::Ok(_, next) => cursor = next,
            Outcome::Backtrack => return Outcome::Ok((), cursor),
            Outcome::Error(e) => return Outcome::Error(e),
        }
    }
}

/// Convenience function to create a Many parser
///
/// `parser` must consume input on every success, see [`Many`].
pub fn many<'src, E, P>(parser: P) -> Many<P>
where
    P: Parser<'src, E>,
{
    Many::new(parser)
}

/// Convenience function to create a SkipMany parser
pub fn skip_many<'src, E, P>(parser: P) -> SkipMany<P>
where
    P: Parser<'src, E>,
{
    SkipMany::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::always::err;
    use crate::byte::{any_word8, byte, satisfy_byte};
    use crate::cursor::Pos;
    use crate::or::OrExt;
    use crate::testing::run;

    #[test]
    fn test_many_zero_matches() {
        let (results, cursor) = run(&many(satisfy_byte(|b| b == b'a')), b"xyz").ok().unwrap();
        assert_eq!(results, vec![]);
        assert_eq!(cursor.peek(), Some(b'x'));
    }

    #[test]
    fn test_many_multiple_matches() {
        let (results, cursor) = run(&many(satisfy_byte(|b| b == b'a')), b"aaabcd").ok().unwrap();
        assert_eq!(results, vec![b'a', b'a', b'a']);
        assert_eq!(cursor.peek(), Some(b'b'));
    }

    #[test]
    fn test_many_consumes_everything() {
        let (results, cursor) = run(&many(any_word8()), b"hello").ok().unwrap();
        assert_eq!(results, b"hello".to_vec());
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_many_empty_input() {
        let (results, cursor) = run(&many(any_word8()), b"").ok().unwrap();
        assert!(results.is_empty());
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_many_propagates_error() {
        // stops collecting at the first error even though 'a's were matched
        let parser = many(byte(b'a').or(err("not an a")));
        assert_eq!(run(&parser, b"aab"), Outcome::Error("not an a"));
    }

    #[test]
    fn test_skip_many() {
        let outcome = run(&skip_many(byte(b' ')), b"   x");
        assert_eq!(outcome.pos(), Some(Pos::from_offset(3)));
        assert_eq!(outcome.value(), Some(()));

        assert_eq!(run(&skip_many(byte(b' ')), b"x").pos(), Some(Pos::START));
    }

    #[test]
    fn test_skip_many_propagates_error() {
        let parser = skip_many(byte(b' ').or(err("tab")));
        assert_eq!(run(&parser, b" \t"), Outcome::Error("tab"));
    }
}
