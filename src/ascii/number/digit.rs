use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that matches a single ASCII digit in some radix and returns its
/// numeric value
#[derive(Debug, Clone, Copy)]
pub struct AsciiDigit<E> {
    radix: u32,
    _error: PhantomData<fn() -> E>,
}

impl<'src, E> Parser<'src, E> for AsciiDigit<E> {
    type Output = u8;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, u8, E> {
        match cursor.peek().and_then(|b| digit_value(b, self.radix)) {
            Some(value) => Outcome::Ok(value, cursor.advance(1)),
            None => Outcome::Backtrack,
        }
    }
}

/// Value of `byte` as a digit in `radix`, ASCII only
#[inline]
pub(crate) fn digit_value(byte: u8, radix: u32) -> Option<u8> {
    if byte.is_ascii() {
        (byte as char).to_digit(radix).map(|d| d as u8)
    } else {
        None
    }
}

/// Parser that matches a single ASCII digit (0-9)
pub fn any_ascii_digit<E>() -> AsciiDigit<E> {
    AsciiDigit {
        radix: 10,
        _error: PhantomData,
    }
}

/// Parser that matches a single hexadecimal digit, either case
pub fn any_ascii_hex_digit<E>() -> AsciiDigit<E> {
    AsciiDigit {
        radix: 16,
        _error: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run;

    #[test]
    fn test_digit_zero_and_nine() {
        let (d, cursor) = run(&any_ascii_digit(), b"0abc").ok().unwrap();
        assert_eq!(d, 0);
        assert_eq!(cursor.peek(), Some(b'a'));

        assert_eq!(run(&any_ascii_digit(), b"9").value(), Some(9));
    }

    #[test]
    fn test_digit_non_digit_fails() {
        assert_eq!(run(&any_ascii_digit(), b"abc"), Outcome::Backtrack);
        assert_eq!(run(&any_ascii_digit(), b""), Outcome::Backtrack);
        assert_eq!(run(&any_ascii_digit(), "٣".as_bytes()), Outcome::Backtrack);
    }

    #[test]
    fn test_hex_digit_both_cases() {
        assert_eq!(run(&any_ascii_hex_digit(), b"a").value(), Some(10));
        assert_eq!(run(&any_ascii_hex_digit(), b"F").value(), Some(15));
        assert_eq!(run(&any_ascii_hex_digit(), b"7").value(), Some(7));
        assert_eq!(run(&any_ascii_hex_digit(), b"g"), Outcome::Backtrack);
    }
}
