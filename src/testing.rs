//! Helpers shared by the unit tests.

use crate::outcome::Outcome;
use crate::parser::{Parser, run_parser};

/// Run `parser` over `input` with `&'static str` diagnostics
pub(crate) fn run<'src, P>(parser: &P, input: &'src [u8]) -> Outcome<'src, P::Output, &'static str>
where
    P: Parser<'src, &'static str>,
{
    run_parser(parser, input)
}
