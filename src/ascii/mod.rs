//! ASCII-only matchers: digits and decimal/hexadecimal integers.

pub mod number;

pub use number::{any_ascii_digit, any_ascii_hex_digit, read_hex, read_int, read_integer};
