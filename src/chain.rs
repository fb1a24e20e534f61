use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Left fold over a repeated parser.
///
/// Parses `start` for the initial accumulator, then applies `elem` until it
/// backtracks, folding each value in with `f(acc, value)`.
#[derive(Debug, Clone, Copy)]
pub struct ChainL<F, S, P> {
    fold: F,
    start: S,
    elem: P,
}

impl<'src, E, F, S, P> Parser<'src, E> for ChainL<F, S, P>
where
    S: Parser<'src, E>,
    P: Parser<'src, E>,
    F: Fn(S::Output, P::Output) -> S::Output,
{
    type Output = S::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, S::Output, E> {
        let (mut acc, mut cursor) = match self.start.parse(cursor) {
            Outcome::Ok(acc, cursor) => (acc, cursor),
            Outcome::Backtrack => return Outcome::Backtrack,
            Outcome::Error(e) => return Outcome::Error(e),
        };
        loop {
            match self.elem.parse(cursor) {
                Outcome::Ok(value, next) => {
                    acc = (self.fold)(acc, value);
                    cursor = next;
                }
                Outcome::Backtrack => return Outcome::Ok(acc, cursor),
                Outcome::Error(e) => return Outcome::Error(e),
            }
        }
    }
}

pub fn chainl<'src, E, F, S, P>(fold: F, start: S, elem: P) -> ChainL<F, S, P>
where
    S: Parser<'src, E>,
    P: Parser<'src, E>,
    F: Fn(S::Output, P::Output) -> S::Output,
{
    ChainL { fold, start, elem }
}

/// Right fold over a repeated parser.
///
/// Applies `elem` until it backtracks, then parses `end` for the initial
/// accumulator and folds the collected values from the right with
/// `f(value, acc)`.
#[derive(Debug, Clone, Copy)]
pub struct ChainR<F, P, T> {
    fold: F,
    elem: P,
    end: T,
}

impl<'src, E, F, P, T> Parser<'src, E> for ChainR<F, P, T>
where
    P: Parser<'src, E>,
    T: Parser<'src, E>,
    F: Fn(P::Output, T::Output) -> T::Output,
{
    type Output = T::Output;

    fn parse(&self, mut cursor: Cursor<'src>) -> Outcome<'src, T::Output, E> {
        let mut values = Vec::new();
        loop {
            match self.elem.parse(cursor) {
                Outcome::Ok(value, next) => {
                    values.push(value);
                    cursor = next;
                }
                Outcome::Backtrack => break,
                Outcome::Error(e) => return Outcome::Error(e),
            }
        }
        self.end
            .parse(cursor)
            .map(|end| values.into_iter().rev().fold(end, |acc, value| (self.fold)(value, acc)))
    }
}

pub fn chainr<'src, E, F, P, T>(fold: F, elem: P, end: T) -> ChainR<F, P, T>
where
    P: Parser<'src, E>,
    T: Parser<'src, E>,
    F: Fn(P::Output, T::Output) -> T::Output,
{
    ChainR { fold, elem, end }
}
