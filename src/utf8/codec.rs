//! UTF-8 decoding and const encoding over raw bytes.

/// Number of bytes in the UTF-8 sequence introduced by `lead`, or `None` if
/// `lead` cannot start a sequence
#[inline]
pub(crate) fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decode one scalar value from the front of `bytes`.
///
/// Rejects truncated sequences, bad continuation bytes, overlong encodings,
/// surrogates and code points beyond U+10FFFF. Returns the char and the
/// number of bytes it occupied.
#[inline]
pub(crate) fn decode(bytes: &[u8]) -> Option<(char, usize)> {
    let b1 = *bytes.first()?;
    let len = sequence_len(b1)?;

    let codepoint = match len {
        1 => return Some((b1 as char, 1)),
        2 => {
            let b2 = *bytes.get(1)?;
            if !is_continuation(b2) {
                return None;
            }
            ((b1 as u32 & 0x1F) << 6) | (b2 as u32 & 0x3F)
        }
        3 => {
            let [_, b2, b3] = *bytes.first_chunk::<3>()?;
            if !is_continuation(b2) || !is_continuation(b3) {
                return None;
            }
            let cp = ((b1 as u32 & 0x0F) << 12) | ((b2 as u32 & 0x3F) << 6) | (b3 as u32 & 0x3F);
            if cp < 0x800 {
                return None;
            }
            cp
        }
        _ => {
            let [_, b2, b3, b4] = *bytes.first_chunk::<4>()?;
            if !is_continuation(b2) || !is_continuation(b3) || !is_continuation(b4) {
                return None;
            }
            let cp = ((b1 as u32 & 0x07) << 18)
                | ((b2 as u32 & 0x3F) << 12)
                | ((b3 as u32 & 0x3F) << 6)
                | (b4 as u32 & 0x3F);
            if cp < 0x10000 {
                return None;
            }
            cp
        }
    };

    // from_u32 rejects surrogates and anything past U+10FFFF
    char::from_u32(codepoint).map(|ch| (ch, len))
}

/// UTF-8 encoding of `ch` as a fixed buffer plus its used length, usable in
/// const contexts.
pub const fn encode_const(ch: char) -> ([u8; 4], usize) {
    let cp = ch as u32;
    if cp < 0x80 {
        ([cp as u8, 0, 0, 0], 1)
    } else if cp < 0x800 {
        ([0xC0 | (cp >> 6) as u8, 0x80 | (cp & 0x3F) as u8, 0, 0], 2)
    } else if cp < 0x10000 {
        (
            [
                0xE0 | (cp >> 12) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
                0,
            ],
            3,
        )
    } else {
        (
            [
                0xF0 | (cp >> 18) as u8,
                0x80 | ((cp >> 12) & 0x3F) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
            ],
            4,
        )
    }
}

/// Copy the first `N` bytes of `src` into an array, in const contexts
pub const fn const_array<const N: usize>(src: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = src[i];
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_matches_std() {
        for text in ["a", "é", "ȩ", "€", "こ", "🦀", "\u{10FFFF}"] {
            let ch = text.chars().next().unwrap();
            assert_eq!(decode(text.as_bytes()), Some((ch, text.len())), "{text}");
        }
    }

    #[test]
    fn test_decode_rejects_invalid() {
        // continuation byte as start
        assert_eq!(decode(&[0x80]), None);
        // truncated 2- and 3-byte sequences
        assert_eq!(decode(&[0xC3]), None);
        assert_eq!(decode(&[0xE2, 0x82]), None);
        // bad continuation
        assert_eq!(decode(&[0xC3, 0x41]), None);
        // overlong encodings
        assert_eq!(decode(&[0xC0, 0xAF]), None);
        assert_eq!(decode(&[0xE0, 0x80, 0xAF]), None);
        assert_eq!(decode(&[0xF0, 0x80, 0x80, 0xAF]), None);
        // UTF-16 surrogate
        assert_eq!(decode(&[0xED, 0xA0, 0x80]), None);
        // beyond U+10FFFF
        assert_eq!(decode(&[0xF4, 0x90, 0x80, 0x80]), None);
        assert_eq!(decode(&[0xFF, 0xFE]), None);
        assert_eq!(decode(&[]), None);
    }

    #[test]
    fn test_encode_const_matches_std() {
        for ch in ['a', '\u{7F}', 'é', 'ȩ', '\u{7FF}', '\u{800}', '€', '🦀'] {
            let (buf, len) = encode_const(ch);
            let mut expected = [0u8; 4];
            assert_eq!(&buf[..len], ch.encode_utf8(&mut expected).as_bytes());
        }
    }

    #[test]
    fn test_const_array() {
        const ARR: [u8; 3] = const_array::<3>(b"abcd");
        assert_eq!(&ARR, b"abc");
    }
}
