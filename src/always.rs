//! Parsers whose outcome does not depend on the input.

use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds with a clone of its value, consuming nothing
#[derive(Debug, Clone)]
pub struct Pure<T, E> {
    value: T,
    _error: PhantomData<fn() -> E>,
}

impl<'src, E, T: Clone> Parser<'src, E> for Pure<T, E> {
    type Output = T;

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, T, E> {
        Outcome::Ok(self.value.clone(), cursor)
    }
}

pub fn pure<T: Clone, E>(value: T) -> Pure<T, E> {
    Pure {
        value,
        _error: PhantomData,
    }
}

/// Parser that always backtracks
pub struct Empty<T, E> {
    _phantom: PhantomData<fn() -> (T, E)>,
}

impl<T, E> Clone for Empty<T, E> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<'src, E, T> Parser<'src, E> for Empty<T, E> {
    type Output = T;

    #[inline]
    fn parse(&self, _cursor: Cursor<'src>) -> Outcome<'src, T, E> {
        Outcome::Backtrack
    }
}

/// Parser that always backtracks, for any output type
pub fn empty<T, E>() -> Empty<T, E> {
    Empty {
        _phantom: PhantomData,
    }
}

/// Parser that always raises its error
#[derive(Debug, Clone)]
pub struct Fail<T, E> {
    error: E,
    _phantom: PhantomData<fn() -> T>,
}

impl<'src, T, E: Clone> Parser<'src, E> for Fail<T, E> {
    type Output = T;

    #[inline]
    fn parse(&self, _cursor: Cursor<'src>) -> Outcome<'src, T, E> {
        Outcome::Error(self.error.clone())
    }
}

/// Parser that always fails with `Error(error)`
pub fn err<T, E: Clone>(error: E) -> Fail<T, E> {
    Fail {
        error,
        _phantom: PhantomData,
    }
}

/// Parser that succeeds only at the end of the readable region
#[derive(Debug, Clone, Copy)]
pub struct Eof<E> {
    _error: PhantomData<fn() -> E>,
}

impl<'src, E> Parser<'src, E> for Eof<E> {
    type Output = ();

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        if cursor.is_eof() {
            Outcome::Ok((), cursor)
        } else {
            Outcome::Backtrack
        }
    }
}

pub fn eof<E>() -> Eof<E> {
    Eof {
        _error: PhantomData,
    }
}
