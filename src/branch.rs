use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Conditional parser: if `cond` succeeds, continue with `then` after it,
/// otherwise run `otherwise` from where `cond` started.
///
/// An error from `cond` propagates without running either branch.
#[derive(Debug, Clone, Copy)]
pub struct Branch<C, T, F> {
    cond: C,
    then: T,
    otherwise: F,
}

impl<'src, E, C, T, F> Parser<'src, E> for Branch<C, T, F>
where
    C: Parser<'src, E>,
    T: Parser<'src, E>,
    F: Parser<'src, E, Output = T::Output>,
{
    type Output = T::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, T::Output, E> {
        match self.cond.parse(cursor) {
            Outcome::Ok(_, after) => self.then.parse(after),
            Outcome::Backtrack => self.otherwise.parse(cursor),
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

pub fn branch<'src, E, C, T, F>(cond: C, then: T, otherwise: F) -> Branch<C, T, F>
where
    C: Parser<'src, E>,
    T: Parser<'src, E>,
    F: Parser<'src, E, Output = T::Output>,
{
    Branch {
        cond,
        then,
        otherwise,
    }
}
