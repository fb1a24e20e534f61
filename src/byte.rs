use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that matches a specific byte
#[derive(Debug, Clone, Copy)]
pub struct Byte<E> {
    expected: u8,
    _error: PhantomData<fn() -> E>,
}

impl<'src, E> Parser<'src, E> for Byte<E> {
    type Output = ();

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        match cursor.peek() {
            Some(byte) if byte == self.expected => Outcome::Ok((), cursor.advance(1)),
            _ => Outcome::Backtrack,
        }
    }
}

/// Match exactly one byte equal to `expected`
pub fn byte<E>(expected: u8) -> Byte<E> {
    Byte {
        expected,
        _error: PhantomData,
    }
}

/// Parser that matches a byte sequence given at runtime
#[derive(Debug, Clone)]
pub struct Bytes<E> {
    expected: Box<[u8]>,
    _error: PhantomData<fn() -> E>,
}

impl<'src, E> Parser<'src, E> for Bytes<E> {
    type Output = ();

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        if cursor.rest().starts_with(&self.expected) {
            Outcome::Ok((), cursor.advance(self.expected.len()))
        } else {
            Outcome::Backtrack
        }
    }
}

/// Match the next `expected.len()` bytes exactly.
///
/// Nothing is consumed unless the whole sequence matches, including when
/// fewer bytes remain than the sequence is long. For literals known at
/// compile time prefer the [`bytes!`](crate::bytes!) macro.
pub fn bytes<E>(expected: impl AsRef<[u8]>) -> Bytes<E> {
    Bytes {
        expected: expected.as_ref().into(),
        _error: PhantomData,
    }
}

/// Byte-sequence matcher specialized for a literal fixed at compile time.
///
/// The comparison runs over a `[u8; N]`, so the length check and the compare
/// are resolved against a constant. Built by [`bytes!`](crate::bytes!),
/// [`string!`](crate::string!) and [`char!`](crate::char!).
#[derive(Debug, Clone, Copy)]
pub struct ConstBytes<const N: usize, E> {
    expected: &'static [u8; N],
    _error: PhantomData<fn() -> E>,
}

impl<const N: usize, E> ConstBytes<N, E> {
    pub const fn new(expected: &'static [u8; N]) -> Self {
        ConstBytes {
            expected,
            _error: PhantomData,
        }
    }
}

impl<'src, E, const N: usize> Parser<'src, E> for ConstBytes<N, E> {
    type Output = ();

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        match cursor.rest().first_chunk::<N>() {
            Some(chunk) if chunk == self.expected => Outcome::Ok((), cursor.advance(N)),
            _ => Outcome::Backtrack,
        }
    }
}

/// Compile-time byte-sequence matcher.
///
/// ```
/// use flatcomb::run_parser;
///
/// let outcome = run_parser::<(), _>(&flatcomb::bytes!(b"\x7fELF"), b"\x7fELF\x02");
/// assert_eq!(outcome.pos().map(|p| p.offset()), Some(4));
/// ```
#[macro_export]
macro_rules! bytes {
    ($lit:expr) => {
        $crate::byte::ConstBytes::new($lit)
    };
}

/// Parser that matches one byte satisfying a predicate
#[derive(Debug, Clone, Copy)]
pub struct SatisfyByte<F, E> {
    predicate: F,
    _error: PhantomData<fn() -> E>,
}

impl<'src, E, F> Parser<'src, E> for SatisfyByte<F, E>
where
    F: Fn(u8) -> bool,
{
    type Output = u8;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, u8, E> {
        match cursor.peek() {
            Some(byte) if (self.predicate)(byte) => Outcome::Ok(byte, cursor.advance(1)),
            _ => Outcome::Backtrack,
        }
    }
}

pub fn satisfy_byte<F, E>(predicate: F) -> SatisfyByte<F, E>
where
    F: Fn(u8) -> bool,
{
    SatisfyByte {
        predicate,
        _error: PhantomData,
    }
}

/// Match one byte within `start..=end`
pub fn byte_range<E>(start: u8, end: u8) -> SatisfyByte<impl Fn(u8) -> bool + Copy, E> {
    satisfy_byte(move |byte| (start..=end).contains(&byte))
}

/// Fixed-width unsigned integers readable straight from the buffer
pub trait NativeWord: Sized {
    const WIDTH: usize;

    /// Decode from the first `WIDTH` bytes in native byte order
    fn read_ne(bytes: &[u8]) -> Option<Self>;
}

macro_rules! native_word {
    ($($ty:ty),*) => {
        $(
            impl NativeWord for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn read_ne(bytes: &[u8]) -> Option<Self> {
                    bytes
                        .first_chunk::<{ std::mem::size_of::<$ty>() }>()
                        .map(|chunk| <$ty>::from_ne_bytes(*chunk))
                }
            }
        )*
    };
}

native_word!(u8, u16, u32, u64, usize);

/// Parser that reads one native-endian word unconditionally
pub struct AnyWord<W, E> {
    _phantom: PhantomData<fn() -> (W, E)>,
}

impl<W, E> Clone for AnyWord<W, E> {
    fn clone(&self) -> Self {
        AnyWord {
            _phantom: PhantomData,
        }
    }
}

impl<W, E> Copy for AnyWord<W, E> {}

impl<'src, E, W: NativeWord> Parser<'src, E> for AnyWord<W, E> {
    type Output = W;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, W, E> {
        match W::read_ne(cursor.rest()) {
            Some(word) => Outcome::Ok(word, cursor.advance(W::WIDTH)),
            None => Outcome::Backtrack,
        }
    }
}

fn any_word_of<W: NativeWord, E>() -> AnyWord<W, E> {
    AnyWord {
        _phantom: PhantomData,
    }
}

pub fn any_word8<E>() -> AnyWord<u8, E> {
    any_word_of()
}

pub fn any_word16<E>() -> AnyWord<u16, E> {
    any_word_of()
}

pub fn any_word32<E>() -> AnyWord<u32, E> {
    any_word_of()
}

pub fn any_word64<E>() -> AnyWord<u64, E> {
    any_word_of()
}

/// Read a machine word (`usize`)
pub fn any_word<E>() -> AnyWord<usize, E> {
    any_word_of()
}

/// Parser that skips a fixed number of bytes
#[derive(Debug, Clone, Copy)]
pub struct SkipBytes<E> {
    width: usize,
    _error: PhantomData<fn() -> E>,
}

impl<'src, E> Parser<'src, E> for SkipBytes<E> {
    type Output = ();

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        if cursor.remaining() >= self.width {
            Outcome::Ok((), cursor.advance(self.width))
        } else {
            Outcome::Backtrack
        }
    }
}

fn skip_width<W: NativeWord, E>() -> SkipBytes<E> {
    SkipBytes {
        width: W::WIDTH,
        _error: PhantomData,
    }
}

pub fn skip_any_word8<E>() -> SkipBytes<E> {
    skip_width::<u8, E>()
}

pub fn skip_any_word16<E>() -> SkipBytes<E> {
    skip_width::<u16, E>()
}

pub fn skip_any_word32<E>() -> SkipBytes<E> {
    skip_width::<u32, E>()
}

pub fn skip_any_word64<E>() -> SkipBytes<E> {
    skip_width::<u64, E>()
}

pub fn skip_any_word<E>() -> SkipBytes<E> {
    skip_width::<usize, E>()
}
