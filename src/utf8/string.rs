use crate::byte::{Bytes, bytes};

/// Match the UTF-8 encoding of `expected` as one unit.
///
/// Like [`bytes`] this never consumes a partial match: a buffer holding
/// fewer bytes than the literal, or differing anywhere in it, backtracks.
/// For literals known at compile time prefer [`string!`](crate::string!).
pub fn string<E>(expected: impl AsRef<str>) -> Bytes<E> {
    bytes(expected.as_ref().as_bytes())
}

/// Compile-time string matcher.
///
/// The literal is copied into a `[u8; N]` constant at compile time and
/// matched through [`ConstBytes`](crate::byte::ConstBytes).
///
/// ```
/// use flatcomb::run_parser;
///
/// let outcome = run_parser::<(), _>(&flatcomb::string!("let"), b"let x");
/// assert_eq!(outcome.pos().map(|p| p.offset()), Some(3));
/// ```
#[macro_export]
macro_rules! string {
    ($lit:expr) => {{
        const TEXT: &str = $lit;
        const BYTES: [u8; TEXT.len()] = $crate::utf8::const_array::<{ TEXT.len() }>(TEXT.as_bytes());
        $crate::byte::ConstBytes::new(&BYTES)
    }};
}
