use super::digit::digit_value;
use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Unsigned integer type a run of digits can be folded into
pub trait Accumulator: Copy {
    const ZERO: Self;

    /// `self * radix + digit`, or `None` on overflow
    fn push_digit(self, radix: u32, digit: u8) -> Option<Self>;
}

macro_rules! impl_accumulator {
    ($($t:ty),*) => {
        $(
            impl Accumulator for $t {
                const ZERO: Self = 0;

                #[inline]
                fn push_digit(self, radix: u32, digit: u8) -> Option<Self> {
                    self.checked_mul(radix as $t)?.checked_add(digit as $t)
                }
            }
        )*
    };
}

impl_accumulator!(u64, u128);

/// Parser for a non-empty run of ASCII digits in a fixed radix.
///
/// The whole run is consumed. When its value does not fit in `T` the parser
/// backtracks, leaving the input untouched.
#[derive(Debug, Clone, Copy)]
pub struct ReadNumber<T, E> {
    radix: u32,
    _output: PhantomData<fn() -> (T, E)>,
}

impl<T, E> ReadNumber<T, E> {
    pub fn new(radix: u32) -> Self {
        ReadNumber {
            radix,
            _output: PhantomData,
        }
    }
}

impl<'src, E, T> Parser<'src, E> for ReadNumber<T, E>
where
    T: Accumulator,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, T, E> {
        let rest = cursor.rest();
        let mut value = T::ZERO;
        let mut len = 0;
        for &byte in rest {
            let Some(digit) = digit_value(byte, self.radix) else {
                break;
            };
            match value.push_digit(self.radix, digit) {
                Some(next) => value = next,
                None => return Outcome::Backtrack,
            }
            len += 1;
        }
        if len == 0 {
            Outcome::Backtrack
        } else {
            Outcome::Ok(value, cursor.advance(len))
        }
    }
}

/// Decimal integer as `u64`
pub fn read_int<E>() -> ReadNumber<u64, E> {
    ReadNumber::new(10)
}

/// Decimal integer as `u128`, for values past `u64::MAX`
pub fn read_integer<E>() -> ReadNumber<u128, E> {
    ReadNumber::new(10)
}

/// Hexadecimal integer as `u64`, no `0x` prefix
pub fn read_hex<E>() -> ReadNumber<u64, E> {
    ReadNumber::new(16)
}
