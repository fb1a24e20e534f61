//! # flatcomb - byte-level parser combinators
//!
//! flatcomb builds recursive-descent parsers over an in-memory byte buffer
//! out of small composable pieces. The library emphasizes:
//!
//! - **Three outcomes**: a parser succeeds, backtracks (recoverable, no
//!   payload) or raises an error (carries a diagnostic, stops alternation).
//!   [`cut`](cut::cut) turns a backtrack into an error where the grammar
//!   commits, [`attempt`](attempt::attempt) turns it back.
//! - **Zero copy**: values such as [`byte_string_of`](position::byte_string_of)
//!   and [`take_line`](text::take_line) borrow the input buffer.
//! - **Fast literal dispatch**: [`switch!`] and [`switch::switch`] match a set
//!   of keywords through a trie instead of trying them one by one.
//! - **No panics on input**: malformed input backtracks or errors.
//!
//! ```
//! use flatcomb::and::AndExt;
//! use flatcomb::ascii::read_int;
//! use flatcomb::byte::byte;
//! use flatcomb::cut::CutExt;
//! use flatcomb::many::many;
//! use flatcomb::optional::skip_optional;
//! use flatcomb::{ParseError, parse_complete};
//!
//! // "[1,2,3]" -> vec![1, 2, 3]
//! let item = read_int().then_ignore(skip_optional(byte(b',')));
//! let list = byte(b'[')
//!     .ignore_then(many(item))
//!     .then_ignore(byte(b']').cut("expected ']'"));
//!
//! assert_eq!(parse_complete(&list, b"[1,2,3]"), Ok(vec![1, 2, 3]));
//! assert_eq!(parse_complete(&list, b"[1,2;"), Err(ParseError::Failed("expected ']'")));
//! ```

pub mod always;
pub mod and;
pub mod ascii;
pub mod attempt;
pub mod branch;
pub mod byte;
pub mod chain;
pub mod cursor;
pub mod cut;
pub mod error;
pub mod lazy;
pub mod lines;
pub mod lookahead;
pub mod many;
pub mod map;
pub mod map_err;
pub mod not;
pub mod optional;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod position;
pub mod some;
pub mod switch;
pub mod text;
pub mod utf8;

#[cfg(test)]
mod testing;

pub use cursor::{Cursor, Pos};
pub use error::ParseError;
pub use outcome::Outcome;
pub use parser::{Parser, parse_complete, run_parser};
pub use position::Span;
