use crate::cursor::{Cursor, Pos};

/// Result of running a parser.
///
/// - `Ok` carries the value and the cursor positioned after the consumed input.
/// - `Backtrack` is the silent "try something else" failure. It carries no
///   payload; a parser that wants to explain itself has to raise `Error`.
/// - `Error` is a diagnosable failure that alternation and repetition do not
///   absorb. Only [`attempt`](crate::attempt::attempt) turns it back into
///   `Backtrack`.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'src, T, E> {
    Ok(T, Cursor<'src>),
    Backtrack,
    Error(E),
}

impl<'src, T, E> Outcome<'src, T, E> {
    /// Transform the success value, leaving failures untouched
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<'src, U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value, cursor) => Outcome::Ok(f(value), cursor),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }

    /// Transform the error payload, leaving success and backtrack untouched
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<'src, T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Ok(value, cursor) => Outcome::Ok(value, cursor),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(f(e)),
        }
    }

    /// Value and cursor on success
    pub fn ok(self) -> Option<(T, Cursor<'src>)> {
        match self {
            Outcome::Ok(value, cursor) => Some((value, cursor)),
            _ => None,
        }
    }

    /// Value on success
    pub fn value(self) -> Option<T> {
        self.ok().map(|(value, _)| value)
    }

    /// Position after the consumed input on success
    pub fn pos(&self) -> Option<Pos> {
        match self {
            Outcome::Ok(_, cursor) => Some(cursor.pos()),
            _ => None,
        }
    }

    /// Error payload, if this is an `Error`
    pub fn error(self) -> Option<E> {
        match self {
            Outcome::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(..))
    }

    pub fn is_backtrack(&self) -> bool {
        matches!(self, Outcome::Backtrack)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Short name of the variant, used in log events
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Outcome::Ok(..) => "ok",
            Outcome::Backtrack => "backtrack",
            Outcome::Error(_) => "error",
        }
    }
}
