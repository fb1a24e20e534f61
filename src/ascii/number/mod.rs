pub mod digit;
pub mod int;

pub use digit::{AsciiDigit, any_ascii_digit, any_ascii_hex_digit};
pub use int::{Accumulator, ReadNumber, read_hex, read_int, read_integer};
