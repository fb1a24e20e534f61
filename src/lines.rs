//! Conversions between positions, spans and lines of a buffer.

use crate::cursor::Pos;
use crate::position::Span;
use std::iter::FusedIterator;

/// Whether `pos` can be used with `buffer`: its offset is at most the
/// buffer length. The end-of-buffer position is valid.
pub fn valid_pos(buffer: &[u8], pos: Pos) -> bool {
    pos.offset() <= buffer.len()
}

/// Offsets at which each line of `buffer` begins, the first always 0
fn line_starts(buffer: &[u8]) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(
        buffer
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == b'\n')
            .map(|(i, _)| i + 1),
    );
    starts
}

/// Number of UTF-8 scalars in `bytes`, counting each lead byte
fn scalar_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| (b & 0xC0) != 0x80).count()
}

/// 1-based line and column of every position in `positions`.
///
/// Lines are separated by `\n`. Columns count UTF-8 scalar values from the
/// start of the line, so a multi-byte character takes one column. Positions
/// past the end of `buffer` are reported as the end of the buffer. The
/// buffer is scanned once no matter how many positions are given.
pub fn pos_line_cols(buffer: &[u8], positions: &[Pos]) -> Vec<(usize, usize)> {
    let starts = line_starts(buffer);
    positions
        .iter()
        .map(|pos| {
            let offset = pos.offset().min(buffer.len());
            // starts[0] == 0 <= offset, so the partition point is at least 1
            let line = starts.partition_point(|&start| start <= offset);
            let line_start = starts[line - 1];
            (line, scalar_count(&buffer[line_start..offset]) + 1)
        })
        .collect()
}

/// 1-based line and column of a single position, see [`pos_line_cols`]
pub fn pos_line_col(buffer: &[u8], pos: Pos) -> (usize, usize) {
    let offset = pos.offset().min(buffer.len());
    let before = &buffer[..offset];
    let line_start = before.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    (line, scalar_count(&before[line_start..]) + 1)
}

/// The bytes covered by `span`, without bounds checks.
///
/// # Safety
///
/// `span` must have been taken from `buffer` (or a buffer at least as long),
/// so that `span.end()` is at most `buffer.len()`.
#[inline]
pub unsafe fn span_to_bytes_unchecked(buffer: &[u8], span: Span) -> &[u8] {
    // SAFETY: the caller guarantees the span lies within the buffer, and
    // `Span` itself guarantees start <= end.
    unsafe { buffer.get_unchecked(span.start().offset()..span.end().offset()) }
}

/// `len` bytes of `buffer` starting at `start`, without bounds checks.
///
/// # Safety
///
/// `start.offset() + len` must not exceed `buffer.len()`.
#[inline]
pub unsafe fn slice_unchecked(buffer: &[u8], start: Pos, len: usize) -> &[u8] {
    let offset = start.offset();
    // SAFETY: upheld by the caller.
    unsafe { buffer.get_unchecked(offset..offset + len) }
}

/// Iterator over the lines of a buffer as spans, see [`lines`]
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    buffer: &'a [u8],
    next: usize,
}

impl Iterator for Lines<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let start = self.next;
        if start >= self.buffer.len() {
            return None;
        }
        let rest = &self.buffer[start..];
        let span = match rest.iter().position(|&b| b == b'\n') {
            Some(newline) => {
                self.next = start + newline + 1;
                let content = if newline > 0 && rest[newline - 1] == b'\r' {
                    newline - 1
                } else {
                    newline
                };
                Span::covering(Pos::from_offset(start), Pos::from_offset(start + content))
            }
            None => {
                self.next = self.buffer.len();
                Span::covering(Pos::from_offset(start), Pos::from_offset(self.buffer.len()))
            }
        };
        Some(span)
    }
}

impl FusedIterator for Lines<'_> {}

/// Split `buffer` into lines.
///
/// Each span excludes its terminator, which is `\n` or `\r\n`. A terminator
/// at the very end does not start another, empty, line, and an empty buffer
/// has no lines at all.
pub fn lines(buffer: &[u8]) -> Lines<'_> {
    Lines { buffer, next: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(offset: usize) -> Pos {
        Pos::from_offset(offset)
    }

    fn line_texts(buffer: &[u8]) -> Vec<&[u8]> {
        lines(buffer).map(|span| span.slice(buffer).unwrap()).collect()
    }

    #[test]
    fn test_valid_pos() {
        assert!(valid_pos(b"abc", pos(0)));
        assert!(valid_pos(b"abc", pos(3)));
        assert!(!valid_pos(b"abc", pos(4)));
        assert!(valid_pos(b"", Pos::START));
    }

    #[test]
    fn test_pos_line_cols_basic() {
        let data = b"ab\ncd\n\nef";
        let result = pos_line_cols(data, &[pos(0), pos(1), pos(2), pos(3), pos(6), pos(7), pos(9)]);
        assert_eq!(result, vec![(1, 1), (1, 2), (1, 3), (2, 1), (3, 1), (4, 1), (4, 3)]);
    }

    #[test]
    fn test_pos_line_cols_counts_chars_not_bytes() {
        let data = "héllo\nwörld".as_bytes();
        // 'l' after "hé" is at byte 3, column 3
        assert_eq!(pos_line_cols(data, &[pos(3)]), vec![(1, 3)]);
        // 'r' in "wörld" is at byte 10, column 3
        assert_eq!(pos_line_cols(data, &[pos(10)]), vec![(2, 3)]);
    }

    #[test]
    fn test_pos_line_cols_clamps_past_end() {
        let data = b"ab\ncd";
        assert_eq!(pos_line_cols(data, &[pos(5), pos(100)]), vec![(2, 3), (2, 3)]);
        assert_eq!(pos_line_cols(b"", &[pos(0), pos(3)]), vec![(1, 1), (1, 1)]);
    }

    #[test]
    fn test_pos_line_cols_unordered_input() {
        let data = b"a\nb\nc";
        assert_eq!(pos_line_cols(data, &[pos(4), pos(0), pos(2)]), vec![(3, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_pos_line_col_matches_batch() {
        let data = "one\ntwo ✓\n\nfour".as_bytes();
        for offset in 0..=data.len() + 2 {
            assert_eq!(
                vec![pos_line_col(data, pos(offset))],
                pos_line_cols(data, &[pos(offset)]),
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_unchecked_slicing() {
        let data = b"hello world";
        let span = Span::new(pos(6), pos(11)).unwrap();
        // SAFETY: both ranges lie within `data`
        unsafe {
            assert_eq!(span_to_bytes_unchecked(data, span), b"world");
            assert_eq!(slice_unchecked(data, pos(0), 5), b"hello");
        }
    }

    #[test]
    fn test_lines_split() {
        assert_eq!(line_texts(b"ab\ncd"), vec![&b"ab"[..], &b"cd"[..]]);
        assert_eq!(line_texts(b"ab\r\ncd\r\n"), vec![&b"ab"[..], &b"cd"[..]]);
        assert_eq!(line_texts(b"a\n\nb"), vec![&b"a"[..], &b""[..], &b"b"[..]]);
    }

    #[test]
    fn test_lines_edges() {
        assert!(line_texts(b"").is_empty());
        assert_eq!(line_texts(b"\n"), vec![&b""[..]]);
        // a lone '\r' is not a terminator
        assert_eq!(line_texts(b"a\rb"), vec![&b"a\rb"[..]]);
    }

    #[test]
    fn test_lines_spans() {
        let spans: Vec<_> = lines(b"ab\r\nc").collect();
        assert_eq!(spans, vec![Span::new(pos(0), pos(2)).unwrap(), Span::new(pos(4), pos(5)).unwrap()]);
    }
}
