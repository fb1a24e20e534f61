use std::fmt;

/// Byte offset into the buffer a parse runs over.
///
/// Positions are ordered by offset, so a position that is earlier in the
/// buffer compares less than a later one. A `Pos` only means something for
/// the buffer it was taken from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(usize);

impl Pos {
    /// Position of the first byte of any buffer
    pub const START: Pos = Pos(0);

    /// Build a position from a raw byte offset.
    ///
    /// The offset is trusted; use [`crate::lines::valid_pos`] to check it
    /// against a buffer.
    pub const fn from_offset(offset: usize) -> Self {
        Pos(offset)
    }

    /// Raw byte offset of this position
    pub const fn offset(self) -> usize {
        self.0
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Read position over an immutable byte buffer.
///
/// A cursor is `Copy`: saving a cursor and resuming from the copy later is
/// how every combinator backtracks. Reads are confined to the cursor's
/// region, which is the whole buffer except inside
/// [`in_span`](crate::position::in_span).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'src> {
    data: &'src [u8],
    position: usize,
    start: usize,
    end: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(data: &'src [u8]) -> Self {
        Cursor {
            data,
            position: 0,
            start: 0,
            end: data.len(),
        }
    }

    /// Current position
    #[inline]
    pub fn pos(&self) -> Pos {
        Pos(self.position)
    }

    /// Start of the readable region
    #[inline]
    pub fn region_start(&self) -> Pos {
        Pos(self.start)
    }

    /// End of the readable region
    #[inline]
    pub fn region_end(&self) -> Pos {
        Pos(self.end)
    }

    /// The whole underlying buffer, independent of the current position
    #[inline]
    pub fn source(&self) -> &'src [u8] {
        self.data
    }

    /// Unconsumed bytes of the current region
    #[inline]
    pub fn rest(&self) -> &'src [u8] {
        &self.data[self.position..self.end]
    }

    /// Number of unconsumed bytes in the region
    #[inline]
    pub fn remaining(&self) -> usize {
        self.end - self.position
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.position >= self.end
    }

    /// Next byte without consuming it
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.position < self.end {
            Some(self.data[self.position])
        } else {
            None
        }
    }

    /// Move forward by `n` bytes.
    ///
    /// Callers must have checked that `n` bytes remain.
    #[inline]
    pub fn advance(self, n: usize) -> Self {
        debug_assert!(n <= self.remaining(), "advanced past region end");
        Cursor {
            position: self.position + n,
            ..self
        }
    }

    /// Same region, different position. Returns `None` when `pos` lies
    /// outside the region.
    #[inline]
    pub fn at(self, pos: Pos) -> Option<Self> {
        if (self.start..=self.end).contains(&pos.0) {
            Some(Cursor {
                position: pos.0,
                ..self
            })
        } else {
            None
        }
    }

    /// Narrow the readable region to `[start, end)`. Returns `None` unless
    /// `region_start <= start <= end <= region_end`.
    pub(crate) fn restrict(self, start: Pos, end: Pos) -> Option<Self> {
        if self.start <= start.0 && start.0 <= end.0 && end.0 <= self.end {
            Some(Cursor {
                data: self.data,
                position: start.0,
                start: start.0,
                end: end.0,
            })
        } else {
            None
        }
    }

    /// Bytes between `from` and this cursor, in buffer order whichever of
    /// the two comes first
    #[inline]
    pub(crate) fn consumed_since(&self, from: Pos) -> &'src [u8] {
        let (lo, hi) = if from.0 <= self.position {
            (from.0, self.position)
        } else {
            (self.position, from.0)
        };
        &self.data[lo..hi]
    }
}
