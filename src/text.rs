//! UTF-8 conversions and non-consuming peeks at the remaining input.

use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// UTF-8 bytes of `text`, for building buffers to parse
pub fn pack_utf8(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode `bytes` as UTF-8, replacing invalid sequences with U+FFFD
pub fn unpack_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Which part of the remaining input a [`Peek`] looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extent {
    Line,
    Rest,
}

/// Parser that returns the remaining text without consuming it.
///
/// With `trace` set, the text is also emitted as a `tracing` debug event.
#[derive(Debug, Clone, Copy)]
pub struct Peek<E> {
    extent: Extent,
    trace: bool,
    _error: PhantomData<fn() -> E>,
}

impl<E> Peek<E> {
    fn new(extent: Extent, trace: bool) -> Self {
        Peek {
            extent,
            trace,
            _error: PhantomData,
        }
    }

    fn text<'src>(&self, cursor: &Cursor<'src>) -> Option<&'src str> {
        let rest = cursor.rest();
        let bytes = match self.extent {
            Extent::Line => {
                let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
                &rest[..end]
            }
            Extent::Rest => rest,
        };
        std::str::from_utf8(bytes).ok()
    }
}

impl<'src, E> Parser<'src, E> for Peek<E> {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, &'src str, E> {
        let Some(text) = self.text(&cursor) else {
            return Outcome::Backtrack;
        };
        if self.trace {
            match self.extent {
                Extent::Line => tracing::debug!(pos = %cursor.pos(), line = text, "trace_line"),
                Extent::Rest => tracing::debug!(pos = %cursor.pos(), rest = text, "trace_rest"),
            }
        }
        Outcome::Ok(text, cursor)
    }
}

/// Text from the current position to the next `\n` (excluded) or the end of
/// input. Backtracks if that text is not valid UTF-8.
pub fn take_line<E>() -> Peek<E> {
    Peek::new(Extent::Line, false)
}

/// Text from the current position to the end of input. Backtracks if it is
/// not valid UTF-8.
pub fn take_rest<E>() -> Peek<E> {
    Peek::new(Extent::Rest, false)
}

/// [`take_line`], also logged at debug level
pub fn trace_line<E>() -> Peek<E> {
    Peek::new(Extent::Line, true)
}

/// [`take_rest`], also logged at debug level
pub fn trace_rest<E>() -> Peek<E> {
    Peek::new(Extent::Rest, true)
}
