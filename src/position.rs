use crate::cursor::{Cursor, Pos};
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Byte range `[start, end)` of a buffer.
///
/// A span holds positions only, so it is `Copy` and does not borrow the
/// buffer; [`Span::slice`] turns it back into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: Pos,
    end: Pos,
}

impl Span {
    /// Create a span, or `None` when `start > end`
    pub fn new(start: Pos, end: Pos) -> Option<Self> {
        if start <= end { Some(Span { start, end }) } else { None }
    }

    /// Span between two positions given in either order
    #[inline]
    pub fn covering(a: Pos, b: Pos) -> Self {
        Span {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Start position (inclusive)
    pub fn start(&self) -> Pos {
        self.start
    }

    /// End position (exclusive)
    pub fn end(&self) -> Pos {
        self.end
    }

    /// Get the length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.offset() - self.start.offset()
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The bytes of `buffer` this span covers, or `None` if it does not fit
    pub fn slice<'a>(&self, buffer: &'a [u8]) -> Option<&'a [u8]> {
        buffer.get(self.start.offset()..self.end.offset())
    }
}

/// Parser that yields the current position without consuming input
#[derive(Debug, Clone, Copy)]
pub struct GetPos<E> {
    _error: PhantomData<fn() -> E>,
}

impl<'src, E> Parser<'src, E> for GetPos<E> {
    type Output = Pos;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Pos, E> {
        Outcome::Ok(cursor.pos(), cursor)
    }
}

pub fn get_pos<E>() -> GetPos<E> {
    GetPos {
        _error: PhantomData,
    }
}

/// Parser that moves the cursor to a fixed position
#[derive(Debug, Clone, Copy)]
pub struct SetPos<E> {
    pos: Pos,
    _error: PhantomData<fn() -> E>,
}

impl<'src, E> Parser<'src, E> for SetPos<E> {
    type Output = ();

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        match cursor.at(self.pos) {
            Some(moved) => Outcome::Ok((), moved),
            None => Outcome::Backtrack,
        }
    }
}

/// Jump to `pos`, forwards or backwards. Backtracks when `pos` lies outside
/// the readable region, so inside [`in_span`] it cannot leave the span.
pub fn set_pos<E>(pos: Pos) -> SetPos<E> {
    SetPos {
        pos,
        _error: PhantomData,
    }
}

/// Parser yielding the position one past the last readable byte
#[derive(Debug, Clone, Copy)]
pub struct EndPos<E> {
    _error: PhantomData<fn() -> E>,
}

impl<'src, E> Parser<'src, E> for EndPos<E> {
    type Output = Pos;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Pos, E> {
        Outcome::Ok(cursor.region_end(), cursor)
    }
}

/// End of the buffer, or of the span when running inside [`in_span`]
pub fn end_pos<E>() -> EndPos<E> {
    EndPos {
        _error: PhantomData,
    }
}

/// A parser combinator that captures the span of a successful parse.
///
/// If the inner parser moved the cursor backwards, the span runs from where
/// it ended to where it started.
#[derive(Debug, Clone, Copy)]
pub struct Spanned<P> {
    parser: P,
}

impl<'src, E, P> Parser<'src, E> for Spanned<P>
where
    P: Parser<'src, E>,
{
    type Output = (P::Output, Span);

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E> {
        let start = cursor.pos();
        match self.parser.parse(cursor) {
            Outcome::Ok(value, after) => {
                Outcome::Ok((value, Span::covering(start, after.pos())), after)
            }
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// Only the span of what the parser consumed
#[derive(Debug, Clone, Copy)]
pub struct SpanOf<P> {
    parser: P,
}

impl<'src, E, P> Parser<'src, E> for SpanOf<P>
where
    P: Parser<'src, E>,
{
    type Output = Span;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Span, E> {
        let start = cursor.pos();
        match self.parser.parse(cursor) {
            Outcome::Ok(_, after) => Outcome::Ok(Span::covering(start, after.pos()), after),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// The value paired with the consumed bytes, borrowed from the buffer
#[derive(Debug, Clone, Copy)]
pub struct ByteStringed<P> {
    parser: P,
}

impl<'src, E, P> Parser<'src, E> for ByteStringed<P>
where
    P: Parser<'src, E>,
{
    type Output = (P::Output, &'src [u8]);

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E> {
        let start = cursor.pos();
        match self.parser.parse(cursor) {
            Outcome::Ok(value, after) => Outcome::Ok((value, after.consumed_since(start)), after),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// Only the consumed bytes
#[derive(Debug, Clone, Copy)]
pub struct ByteStringOf<P> {
    parser: P,
}

impl<'src, E, P> Parser<'src, E> for ByteStringOf<P>
where
    P: Parser<'src, E>,
{
    type Output = &'src [u8];

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, &'src [u8], E> {
        let start = cursor.pos();
        match self.parser.parse(cursor) {
            Outcome::Ok(_, after) => Outcome::Ok(after.consumed_since(start), after),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

pub fn spanned<'src, E, P: Parser<'src, E>>(parser: P) -> Spanned<P> {
    Spanned { parser }
}

pub fn span_of<'src, E, P: Parser<'src, E>>(parser: P) -> SpanOf<P> {
    SpanOf { parser }
}

pub fn byte_stringed<'src, E, P: Parser<'src, E>>(parser: P) -> ByteStringed<P> {
    ByteStringed { parser }
}

pub fn byte_string_of<'src, E, P: Parser<'src, E>>(parser: P) -> ByteStringOf<P> {
    ByteStringOf { parser }
}

/// Extension trait to add span capture to any parser
pub trait SpannedExt<'src, E>: Parser<'src, E> + Sized {
    /// Pair the value with the span it was parsed from
    fn spanned(self) -> Spanned<Self> {
        Spanned { parser: self }
    }

    fn span_of(self) -> SpanOf<Self> {
        SpanOf { parser: self }
    }

    /// Pair the value with the bytes it was parsed from
    fn byte_stringed(self) -> ByteStringed<Self> {
        ByteStringed { parser: self }
    }

    fn byte_string_of(self) -> ByteStringOf<Self> {
        ByteStringOf { parser: self }
    }
}

impl<'src, E, P> SpannedExt<'src, E> for P where P: Parser<'src, E> {}

/// Runs a parser confined to a span of the buffer.
///
/// The inner parser sees the end of the span as the end of input. Whatever
/// it consumes, the cursor afterwards is the one `InSpan` was given.
#[derive(Debug, Clone, Copy)]
pub struct InSpan<P> {
    span: Span,
    parser: P,
}

impl<'src, E, P> Parser<'src, E> for InSpan<P>
where
    P: Parser<'src, E>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, P::Output, E> {
        let Some(inner) = cursor.restrict(self.span.start, self.span.end) else {
            return Outcome::Backtrack;
        };
        match self.parser.parse(inner) {
            Outcome::Ok(value, _) => Outcome::Ok(value, cursor),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

/// Run `parser` over `span` only. Backtracks if the span reaches past the
/// current region.
pub fn in_span<'src, E, P: Parser<'src, E>>(span: Span, parser: P) -> InSpan<P> {
    InSpan { span, parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::always::{eof, err};
    use crate::and::AndExt;
    use crate::ascii::read_int;
    use crate::byte::{any_word8, byte, bytes};
    use crate::many::many;
    use crate::testing::run;
    use crate::utf8::string;

    fn span(start: usize, end: usize) -> Span {
        Span::new(Pos::from_offset(start), Pos::from_offset(end)).unwrap()
    }

    #[test]
    fn test_span_basic() {
        let data = b"hello world";
        let s = span(6, 11);
        assert_eq!(s.len(), 5);
        assert!(!s.is_empty());
        assert_eq!(s.slice(data), Some(&b"world"[..]));
    }

    #[test]
    fn test_span_empty_and_invalid() {
        let s = span(3, 3);
        assert!(s.is_empty());
        assert_eq!(s.slice(b"hello"), Some(&b""[..]));

        assert_eq!(Span::new(Pos::from_offset(4), Pos::from_offset(2)), None);
        assert_eq!(span(2, 9).slice(b"hello"), None);
    }

    #[test]
    fn test_get_pos_and_end_pos() {
        let parser = any_word8().ignore_then(get_pos()).and(end_pos());
        let ((pos, end), cursor) = run(&parser, b"abc").ok().unwrap();
        assert_eq!(pos, Pos::from_offset(1));
        assert_eq!(end, Pos::from_offset(3));
        assert_eq!(cursor.pos(), Pos::from_offset(1));
    }

    #[test]
    fn test_set_pos_moves_both_ways() {
        let parser = set_pos(Pos::from_offset(2)).ignore_then(any_word8());
        assert_eq!(run(&parser, b"abc").value(), Some(b'c'));

        let rewind = bytes("ab").ignore_then(set_pos(Pos::START)).ignore_then(any_word8());
        assert_eq!(run(&rewind, b"abc").value(), Some(b'a'));
    }

    #[test]
    fn test_set_pos_past_end_backtracks() {
        assert_eq!(run(&set_pos(Pos::from_offset(4)), b"abc"), Outcome::Backtrack);
        assert!(run(&set_pos(Pos::from_offset(3)).ignore_then(eof()), b"abc").is_ok());
    }

    #[test]
    fn test_spanned_single_byte() {
        let ((_, s), cursor) = run(&byte(b'h').spanned(), b"hello").ok().unwrap();
        assert_eq!(s, span(0, 1));
        assert_eq!(cursor.pos(), Pos::from_offset(1));
    }

    #[test]
    fn test_span_of_after_prefix() {
        let parser = bytes("let ").ignore_then(span_of(string("value")));
        assert_eq!(run(&parser, b"let value").value(), Some(span(4, 9)));
    }

    #[test]
    fn test_spanned_failures_propagate() {
        assert_eq!(run(&spanned(byte(b'a')), b"xyz"), Outcome::Backtrack);
        assert_eq!(run(&span_of(err::<(), _>("bad")), b"xyz"), Outcome::Error("bad"));
    }

    #[test]
    fn test_byte_stringed_is_zero_copy() {
        let data = b"12345;";
        let (value, bytes) = run(&read_int().byte_stringed(), data).value().unwrap();
        assert_eq!(value, 12345);
        assert_eq!(bytes, b"12345");
        assert_eq!(bytes.as_ptr(), data.as_ptr());
    }

    #[test]
    fn test_byte_string_of() {
        let parser = byte_string_of(many(byte(b'a')));
        assert_eq!(run(&parser, b"aaab").value(), Some(&b"aaa"[..]));
        assert_eq!(run(&parser, b"b").value(), Some(&b""[..]));
    }

    #[test]
    fn test_in_span_restricts_and_restores() {
        let data = b"[123]456";
        // parse the digits inside the brackets, then continue after them
        let parser = in_span(span(1, 4), read_int().then_ignore(eof()));

        let (value, cursor) = run(&parser, data).ok().unwrap();
        assert_eq!(value, 123);
        assert_eq!(cursor.pos(), Pos::START);
    }

    #[test]
    fn test_in_span_end_acts_as_eof() {
        let data = b"abcdef";
        let parser = in_span(span(0, 2), many(any_word8()));
        assert_eq!(run(&parser, data).value(), Some(b"ab".to_vec()));

        let too_long = in_span(span(0, 2), bytes("abc"));
        assert_eq!(run(&too_long, data), Outcome::Backtrack);
    }

    #[test]
    fn test_in_span_end_pos_is_span_end() {
        let parser = in_span(span(1, 3), end_pos());
        assert_eq!(run(&parser, b"abcdef").value(), Some(Pos::from_offset(3)));
    }

    #[test]
    fn test_capture_after_rewind_covers_both_ends() {
        let parser = any_word8().ignore_then(byte_string_of(set_pos(Pos::START)));
        let (captured, cursor) = run(&parser, b"abc").ok().unwrap();
        assert_eq!(captured, b"a");
        assert_eq!(cursor.pos(), Pos::START);

        let parser = bytes("ab").ignore_then(span_of(set_pos(Pos::START)));
        let captured = run(&parser, b"abc").value().unwrap();
        assert_eq!(captured, span(0, 2));
        assert_eq!(captured.len(), 2);

        let parser = bytes("ab").ignore_then(spanned(set_pos(Pos::START)).byte_stringed());
        let (((), s), raw) = run(&parser, b"abc").value().unwrap();
        assert_eq!(s, span(0, 2));
        assert_eq!(raw, b"ab");
    }

    #[test]
    fn test_covering_orders_positions() {
        assert_eq!(Span::covering(Pos::from_offset(5), Pos::from_offset(2)), span(2, 5));
        assert_eq!(Span::covering(Pos::from_offset(2), Pos::from_offset(5)), span(2, 5));
    }

    #[test]
    fn test_set_pos_cannot_leave_span() {
        let data = b"XYab";
        let escape = in_span(span(2, 4), set_pos(Pos::START).ignore_then(any_word8()));
        assert_eq!(run(&escape, data), Outcome::Backtrack);

        let within = in_span(
            span(2, 4),
            any_word8()
                .ignore_then(set_pos(Pos::from_offset(2)))
                .ignore_then(any_word8()),
        );
        assert_eq!(run(&within, data).value(), Some(b'a'));
    }

    #[test]
    fn test_in_span_outside_region_backtracks() {
        assert_eq!(run(&in_span(span(2, 10), any_word8()), b"abc"), Outcome::Backtrack);

        let nested = in_span(span(0, 2), in_span(span(1, 3), any_word8()));
        assert_eq!(run(&nested, b"abcdef"), Outcome::Backtrack);

        let before_outer = in_span(span(2, 4), in_span(span(0, 3), any_word8()));
        assert_eq!(run(&before_outer, b"abcdef"), Outcome::Backtrack);
    }
}
