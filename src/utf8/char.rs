use super::codec::{decode, encode_const, sequence_len};
use crate::cursor::Cursor;
use crate::map::Ignored;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that consumes and returns a single UTF-8 character
#[derive(Debug, Clone, Copy)]
pub struct AnyChar<E> {
    _error: PhantomData<fn() -> E>,
}

impl<'src, E> Parser<'src, E> for AnyChar<E> {
    type Output = char;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, char, E> {
        match decode(cursor.rest()) {
            Some((ch, len)) => Outcome::Ok(ch, cursor.advance(len)),
            None => Outcome::Backtrack,
        }
    }
}

/// Consume one UTF-8 character. Backtracks at end of input and on invalid
/// encoding.
pub fn any_char<E>() -> AnyChar<E> {
    AnyChar {
        _error: PhantomData,
    }
}

/// Like [`any_char`] but without producing the char
pub fn skip_any_char<E>() -> Ignored<AnyChar<E>> {
    Ignored::new(any_char())
}

/// Parser that consumes one ASCII character
#[derive(Debug, Clone, Copy)]
pub struct AnyCharAscii<E> {
    _error: PhantomData<fn() -> E>,
}

impl<'src, E> Parser<'src, E> for AnyCharAscii<E> {
    type Output = char;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, char, E> {
        match cursor.peek() {
            Some(byte) if byte.is_ascii() => Outcome::Ok(byte as char, cursor.advance(1)),
            _ => Outcome::Backtrack,
        }
    }
}

pub fn any_char_ascii<E>() -> AnyCharAscii<E> {
    AnyCharAscii {
        _error: PhantomData,
    }
}

pub fn skip_any_char_ascii<E>() -> Ignored<AnyCharAscii<E>> {
    Ignored::new(any_char_ascii())
}

/// Parser that matches a specific character by its UTF-8 bytes
#[derive(Debug, Clone, Copy)]
pub struct Char<E> {
    encoded: [u8; 4],
    len: usize,
    _error: PhantomData<fn() -> E>,
}

impl<'src, E> Parser<'src, E> for Char<E> {
    type Output = ();

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        if cursor.rest().starts_with(&self.encoded[..self.len]) {
            Outcome::Ok((), cursor.advance(self.len))
        } else {
            Outcome::Backtrack
        }
    }
}

/// Match the full UTF-8 encoding of `expected`.
///
/// A multi-byte character is matched all at once; a buffer holding only a
/// prefix of its encoding backtracks.
pub fn char<E>(expected: char) -> Char<E> {
    let (encoded, len) = encode_const(expected);
    Char {
        encoded,
        len,
        _error: PhantomData,
    }
}

/// Parser that matches one UTF-8 character satisfying a predicate
#[derive(Debug, Clone, Copy)]
pub struct Satisfy<F, E> {
    predicate: F,
    _error: PhantomData<fn() -> E>,
}

impl<'src, E, F> Parser<'src, E> for Satisfy<F, E>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, char, E> {
        match decode(cursor.rest()) {
            Some((ch, len)) if (self.predicate)(ch) => Outcome::Ok(ch, cursor.advance(len)),
            _ => Outcome::Backtrack,
        }
    }
}

pub fn satisfy<F, E>(predicate: F) -> Satisfy<F, E>
where
    F: Fn(char) -> bool,
{
    Satisfy {
        predicate,
        _error: PhantomData,
    }
}

pub fn skip_satisfy<F, E>(predicate: F) -> Ignored<Satisfy<F, E>>
where
    F: Fn(char) -> bool,
{
    Ignored::new(satisfy(predicate))
}

/// Parser that matches one ASCII character satisfying a predicate.
///
/// Non-ASCII input backtracks without decoding.
#[derive(Debug, Clone, Copy)]
pub struct SatisfyAscii<F, E> {
    predicate: F,
    _error: PhantomData<fn() -> E>,
}

impl<'src, E, F> Parser<'src, E> for SatisfyAscii<F, E>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, char, E> {
        match cursor.peek() {
            Some(byte) if byte.is_ascii() && (self.predicate)(byte as char) => {
                Outcome::Ok(byte as char, cursor.advance(1))
            }
            _ => Outcome::Backtrack,
        }
    }
}

pub fn satisfy_ascii<F, E>(predicate: F) -> SatisfyAscii<F, E>
where
    F: Fn(char) -> bool,
{
    SatisfyAscii {
        predicate,
        _error: PhantomData,
    }
}

pub fn skip_satisfy_ascii<F, E>(predicate: F) -> Ignored<SatisfyAscii<F, E>>
where
    F: Fn(char) -> bool,
{
    Ignored::new(satisfy_ascii(predicate))
}

/// Parser with one predicate per UTF-8 sequence length.
///
/// The lead byte picks the predicate, so a grammar that only accepts ASCII
/// in some position can pass `|_| false` for the longer lengths and the
/// decoder never runs for them.
#[derive(Debug, Clone, Copy)]
pub struct FusedSatisfy<F1, F2, F3, F4, E> {
    one: F1,
    two: F2,
    three: F3,
    four: F4,
    _error: PhantomData<fn() -> E>,
}

impl<'src, E, F1, F2, F3, F4> Parser<'src, E> for FusedSatisfy<F1, F2, F3, F4, E>
where
    F1: Fn(char) -> bool,
    F2: Fn(char) -> bool,
    F3: Fn(char) -> bool,
    F4: Fn(char) -> bool,
{
    type Output = char;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, char, E> {
        let rest = cursor.rest();
        let Some(len) = rest.first().copied().and_then(sequence_len) else {
            return Outcome::Backtrack;
        };
        if len == 1 {
            let ch = rest[0] as char;
            return if (self.one)(ch) {
                Outcome::Ok(ch, cursor.advance(1))
            } else {
                Outcome::Backtrack
            };
        }
        match decode(rest) {
            Some((ch, len)) => {
                let accepted = match len {
                    2 => (self.two)(ch),
                    3 => (self.three)(ch),
                    _ => (self.four)(ch),
                };
                if accepted {
                    Outcome::Ok(ch, cursor.advance(len))
                } else {
                    Outcome::Backtrack
                }
            }
            None => Outcome::Backtrack,
        }
    }
}

pub fn fused_satisfy<F1, F2, F3, F4, E>(
    one: F1,
    two: F2,
    three: F3,
    four: F4,
) -> FusedSatisfy<F1, F2, F3, F4, E>
where
    F1: Fn(char) -> bool,
    F2: Fn(char) -> bool,
    F3: Fn(char) -> bool,
    F4: Fn(char) -> bool,
{
    FusedSatisfy {
        one,
        two,
        three,
        four,
        _error: PhantomData,
    }
}

pub fn skip_fused_satisfy<F1, F2, F3, F4, E>(
    one: F1,
    two: F2,
    three: F3,
    four: F4,
) -> Ignored<FusedSatisfy<F1, F2, F3, F4, E>>
where
    F1: Fn(char) -> bool,
    F2: Fn(char) -> bool,
    F3: Fn(char) -> bool,
    F4: Fn(char) -> bool,
{
    Ignored::new(fused_satisfy(one, two, three, four))
}

/// Compile-time single-character matcher.
///
/// ```
/// use flatcomb::run_parser;
///
/// let outcome = run_parser::<(), _>(&flatcomb::char!('ȩ'), "ȩx".as_bytes());
/// assert_eq!(outcome.pos().map(|p| p.offset()), Some(2));
/// ```
#[macro_export]
macro_rules! char {
    ($ch:expr) => {{
        const ENCODED: ([u8; 4], usize) = $crate::utf8::encode_const($ch);
        const BYTES: [u8; ENCODED.1] = $crate::utf8::const_array::<{ ENCODED.1 }>(&ENCODED.0);
        $crate::byte::ConstBytes::new(&BYTES)
    }};
}
