//! Keyword and token dispatch over a set of literals.
//!
//! A [`Switch`] compiles its literals into a byte trie once, when it is
//! built, and then walks the trie along the input. Only literals sharing a
//! prefix with the input are ever looked at, so a switch over a hundred
//! keywords costs about as much as the longest keyword it matches, unlike a
//! chain of [`or`](crate::or::or) alternatives which retries from the start
//! for every literal.
//!
//! ```
//! use flatcomb::always::pure;
//! use flatcomb::run_parser;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Kw { If, In, Int }
//!
//! let keyword = flatcomb::switch! {
//!     "if" => pure(Kw::If),
//!     "in" => pure(Kw::In),
//!     "int" => pure(Kw::Int),
//! };
//! assert_eq!(run_parser::<(), _>(&keyword, b"int x").value(), Some(Kw::Int));
//! assert_eq!(run_parser::<(), _>(&keyword, b"in x").value(), Some(Kw::In));
//! ```

use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::borrow::Cow;

#[derive(Debug, Clone, Default)]
struct Node {
    /// Index of the literal ending at this node
    accept: Option<usize>,
    /// Node one byte closer to the root; the root is its own parent
    parent: usize,
    /// Outgoing edges sorted by byte
    edges: Vec<(u8, usize)>,
}

/// Byte trie over a list of literals. Node 0 is the root.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Trie {
    /// Compile `literals`; a literal listed twice keeps its first index.
    pub fn build<L: AsRef<[u8]>>(literals: &[L]) -> Trie {
        let mut nodes = vec![Node::default()];
        for (index, literal) in literals.iter().enumerate() {
            let mut node = 0;
            for &byte in literal.as_ref() {
                node = match nodes[node].edges.binary_search_by_key(&byte, |&(b, _)| b) {
                    Ok(edge) => nodes[node].edges[edge].1,
                    Err(slot) => {
                        let child = nodes.len();
                        nodes[node].edges.insert(slot, (byte, child));
                        nodes.push(Node {
                            parent: node,
                            ..Node::default()
                        });
                        child
                    }
                };
            }
            nodes[node].accept.get_or_insert(index);
        }
        tracing::trace!(literals = literals.len(), nodes = nodes.len(), "compiled switch trie");
        Trie { nodes }
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn child(&self, node: usize, byte: u8) -> Option<usize> {
        let edges = &self.nodes[node].edges;
        edges
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|edge| edges[edge].1)
    }

    #[inline]
    fn accept(&self, node: usize) -> Option<usize> {
        self.nodes[node].accept
    }

    #[inline]
    fn parent(&self, node: usize) -> usize {
        self.nodes[node].parent
    }

    /// Deepest node reachable by following `input` from the root, with its depth
    fn walk(&self, input: &[u8]) -> (usize, usize) {
        let mut node = 0;
        let mut depth = 0;
        while let Some(child) = input.get(depth).and_then(|&byte| self.child(node, byte)) {
            node = child;
            depth += 1;
        }
        (node, depth)
    }
}

/// The continuation parsers of a switch, addressed by literal index.
///
/// Implemented for `Vec<P>`, used by the runtime constructors, and for the
/// [`Arm`] chains [`switch!`](crate::switch!) builds, where every branch keeps
/// its own type.
pub trait Branches<'src, E> {
    type Output;

    /// Run the branch for literal `index` at `cursor`
    fn dispatch(&self, index: usize, cursor: Cursor<'src>) -> Outcome<'src, Self::Output, E>;
}

impl<'src, E, P> Branches<'src, E> for Vec<P>
where
    P: Parser<'src, E>,
{
    type Output = P::Output;

    #[inline]
    fn dispatch(&self, index: usize, cursor: Cursor<'src>) -> Outcome<'src, P::Output, E> {
        match self.get(index) {
            Some(branch) => branch.parse(cursor),
            None => Outcome::Backtrack,
        }
    }
}

/// Branch for index 0 followed by the branches for the higher indices
#[derive(Debug, Clone, Copy)]
pub struct Arm<P, Next>(pub P, pub Next);

/// Final branch of an [`Arm`] chain
#[derive(Debug, Clone, Copy)]
pub struct LastArm<P>(pub P);

impl<'src, E, P, Next> Branches<'src, E> for Arm<P, Next>
where
    P: Parser<'src, E>,
    Next: Branches<'src, E, Output = P::Output>,
{
    type Output = P::Output;

    #[inline]
    fn dispatch(&self, index: usize, cursor: Cursor<'src>) -> Outcome<'src, P::Output, E> {
        match index {
            0 => self.0.parse(cursor),
            _ => self.1.dispatch(index - 1, cursor),
        }
    }
}

impl<'src, E, P> Branches<'src, E> for LastArm<P>
where
    P: Parser<'src, E>,
{
    type Output = P::Output;

    #[inline]
    fn dispatch(&self, index: usize, cursor: Cursor<'src>) -> Outcome<'src, P::Output, E> {
        match index {
            0 => self.0.parse(cursor),
            _ => Outcome::Backtrack,
        }
    }
}

/// What a switch does when no literal leads to a successful branch
pub trait FallbackParser<'src, E, T> {
    fn parse_fallback(&self, cursor: Cursor<'src>) -> Outcome<'src, T, E>;
}

/// Backtrack when nothing matched
#[derive(Debug, Clone, Copy)]
pub struct NoFallback;

impl<'src, E, T> FallbackParser<'src, E, T> for NoFallback {
    #[inline]
    fn parse_fallback(&self, _cursor: Cursor<'src>) -> Outcome<'src, T, E> {
        Outcome::Backtrack
    }
}

/// Run a parser from the switch's starting position when nothing matched
#[derive(Debug, Clone, Copy)]
pub struct Fallback<P>(P);

impl<'src, E, P> FallbackParser<'src, E, P::Output> for Fallback<P>
where
    P: Parser<'src, E>,
{
    #[inline]
    fn parse_fallback(&self, cursor: Cursor<'src>) -> Outcome<'src, P::Output, E> {
        self.0.parse(cursor)
    }
}

/// Post step that accepts without consuming anything
#[derive(Debug, Clone, Copy)]
pub struct NoPost;

impl<'src, E> Parser<'src, E> for NoPost {
    type Output = ();

    #[inline]
    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, (), E> {
        Outcome::Ok((), cursor)
    }
}

/// Trie-dispatched choice between literals.
///
/// At the cursor, the longest literal that matches is tried first: the
/// `post` parser runs after the literal, then the literal's branch. If either
/// backtracks, the next shorter matching literal is tried, and when none is
/// left the fallback runs from the original position. An `Error` anywhere
/// stops the search.
#[derive(Debug, Clone)]
pub struct Switch<B, F = NoFallback, Q = NoPost> {
    trie: Cow<'static, Trie>,
    branches: B,
    fallback: F,
    post: Q,
}

impl<B> Switch<B> {
    /// Switch over a trie compiled ahead of time, used by [`switch!`](crate::switch!).
    ///
    /// `branches` must hold one parser per literal the trie was built from.
    pub fn from_static(trie: &'static Trie, branches: B) -> Self {
        Switch {
            trie: Cow::Borrowed(trie),
            branches,
            fallback: NoFallback,
            post: NoPost,
        }
    }
}

impl<B, F, Q> Switch<B, F, Q> {
    /// Replace the fallback, which otherwise backtracks
    pub fn with_fallback<P>(self, fallback: P) -> Switch<B, Fallback<P>, Q> {
        Switch {
            trie: self.trie,
            branches: self.branches,
            fallback: Fallback(fallback),
            post: self.post,
        }
    }

    /// Run `post` after every matched literal, before its branch
    pub fn with_post<R>(self, post: R) -> Switch<B, F, R> {
        Switch {
            trie: self.trie,
            branches: self.branches,
            fallback: self.fallback,
            post,
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    fn run_branch<'src, E>(&self, index: usize, cursor: Cursor<'src>) -> Outcome<'src, B::Output, E>
    where
        B: Branches<'src, E>,
        Q: Parser<'src, E>,
    {
        match self.post.parse(cursor) {
            Outcome::Ok(_, cursor) => self.branches.dispatch(index, cursor),
            Outcome::Backtrack => Outcome::Backtrack,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }

    /// Try the accepting nodes on the input's path through the trie, deepest
    /// first, until a branch decides
    fn dispatch_longest<'src, E>(&self, cursor: Cursor<'src>) -> Outcome<'src, B::Output, E>
    where
        B: Branches<'src, E>,
        Q: Parser<'src, E>,
    {
        let (mut node, mut depth) = self.trie.walk(cursor.rest());
        loop {
            if let Some(index) = self.trie.accept(node) {
                match self.run_branch(index, cursor.advance(depth)) {
                    Outcome::Backtrack => {}
                    decided => return decided,
                }
            }
            if depth == 0 {
                return Outcome::Backtrack;
            }
            node = self.trie.parent(node);
            depth -= 1;
        }
    }
}

impl<'src, E, B, F, Q> Parser<'src, E> for Switch<B, F, Q>
where
    B: Branches<'src, E>,
    F: FallbackParser<'src, E, B::Output>,
    Q: Parser<'src, E>,
{
    type Output = B::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Outcome<'src, B::Output, E> {
        match self.dispatch_longest(cursor) {
            Outcome::Backtrack => self.fallback.parse_fallback(cursor),
            decided => decided,
        }
    }
}

fn compile<L, P>(cases: impl IntoIterator<Item = (L, P)>) -> (Trie, Vec<P>)
where
    L: AsRef<[u8]>,
{
    let (literals, branches): (Vec<L>, Vec<P>) = cases.into_iter().unzip();
    (Trie::build(&literals), branches)
}

/// Switch over literals given at runtime, each paired with its branch
pub fn switch<'src, E, L, P>(cases: impl IntoIterator<Item = (L, P)>) -> Switch<Vec<P>>
where
    L: AsRef<[u8]>,
    P: Parser<'src, E>,
{
    let (trie, branches) = compile(cases);
    Switch {
        trie: Cow::Owned(trie),
        branches,
        fallback: NoFallback,
        post: NoPost,
    }
}

/// [`switch`] running `post` between every matched literal and its branch
pub fn switch_with_post<'src, E, L, P, Q>(
    cases: impl IntoIterator<Item = (L, P)>,
    post: Q,
) -> Switch<Vec<P>, NoFallback, Q>
where
    L: AsRef<[u8]>,
    P: Parser<'src, E>,
    Q: Parser<'src, E>,
{
    switch(cases).with_post(post)
}

/// Switch with every part given explicitly: cases, fallback and post step
pub fn raw_switch_with_post<'src, E, L, P, F, Q>(
    cases: impl IntoIterator<Item = (L, P)>,
    fallback: F,
    post: Q,
) -> Switch<Vec<P>, Fallback<F>, Q>
where
    L: AsRef<[u8]>,
    P: Parser<'src, E>,
    F: Parser<'src, E, Output = P::Output>,
    Q: Parser<'src, E>,
{
    switch(cases).with_fallback(fallback).with_post(post)
}

/// Bytes of a `switch!` literal, which may be a string or a byte string
#[doc(hidden)]
pub fn literal_bytes<L: AsRef<[u8]> + ?Sized>(literal: &L) -> &[u8] {
    literal.as_ref()
}

/// Switch over literals fixed at compile time.
///
/// The trie is built on first use and cached for the call site; the branches
/// are chained in [`Arm`]s, so each keeps its own type. A final `_ => parser`
/// case, after a `;`, sets the fallback.
///
/// ```
/// use flatcomb::always::pure;
/// use flatcomb::run_parser;
///
/// let op = flatcomb::switch! {
///     "+" => pure('+'),
///     "+=" => pure('p');
///     _ => pure('?')
/// };
/// assert_eq!(run_parser::<(), _>(&op, b"+=1").value(), Some('p'));
/// assert_eq!(run_parser::<(), _>(&op, b"-").value(), Some('?'));
/// ```
#[macro_export]
macro_rules! switch {
    (@arms $last:expr) => {
        $crate::switch::LastArm($last)
    };
    (@arms $head:expr, $($tail:expr),+) => {
        $crate::switch::Arm($head, $crate::switch!(@arms $($tail),+))
    };
    ($($lit:literal => $branch:expr),+ ; _ => $fallback:expr $(,)?) => {
        $crate::switch!($($lit => $branch),+).with_fallback($fallback)
    };
    ($($lit:literal => $branch:expr),+ $(,)?) => {{
        static TRIE: ::std::sync::OnceLock<$crate::switch::Trie> = ::std::sync::OnceLock::new();
        let trie = TRIE.get_or_init(|| {
            $crate::switch::Trie::build(&[$($crate::switch::literal_bytes($lit)),+])
        });
        $crate::switch::Switch::from_static(trie, $crate::switch!(@arms $($branch),+))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::always::{Pure, err, pure};
    use crate::ascii::read_int;
    use crate::byte::{any_word8, byte};
    use crate::cursor::Pos;
    use crate::lookahead::lookahead;
    use crate::many::skip_many;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::position::get_pos;
    use crate::testing::run;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Tok {
        Let,
        Loop,
        Lo,
        Plus,
        PlusEq,
        Other,
    }

    #[test]
    fn test_trie_shares_prefixes() {
        let trie = Trie::build(&["let", "loop", "lo"]);
        // root, l, e, t, o, o, p
        assert_eq!(trie.node_count(), 7);
    }

    #[test]
    fn test_trie_duplicate_keeps_first() {
        let parser = switch([("if", pure(1)), ("if", pure(2))]);
        assert_eq!(run(&parser, b"if").value(), Some(1));
    }

    #[test]
    fn test_switch_dispatch() {
        let parser = switch([("let", pure(Tok::Let)), ("loop", pure(Tok::Loop)), ("lo", pure(Tok::Lo))]);

        assert_eq!(run(&parser, b"let x").value(), Some(Tok::Let));
        assert_eq!(run(&parser, b"loop {").value(), Some(Tok::Loop));
        assert_eq!(run(&parser, b"log").value(), Some(Tok::Lo));
        assert_eq!(run(&parser, b"lax"), Outcome::Backtrack);
        assert_eq!(run(&parser, b""), Outcome::Backtrack);
    }

    #[test]
    fn test_switch_consumes_matched_literal() {
        let parser = switch([("loop", pure(Tok::Loop)), ("lo", pure(Tok::Lo))]);

        assert_eq!(run(&parser, b"loop").pos(), Some(Pos::from_offset(4)));
        assert_eq!(run(&parser, b"loo").pos(), Some(Pos::from_offset(2)));
    }

    #[test]
    fn test_switch_falls_back_to_shorter_literal() {
        let parser = crate::switch! {
            "+" => pure(Tok::Plus),
            "+=" => read_int().map(|_| Tok::PlusEq),
        };

        assert_eq!(run(&parser, b"+=1").value(), Some(Tok::PlusEq));

        // "+=" needs a number after it, so "+" is taken and "=" is left
        let (tok, cursor) = run(&parser, b"+=x").ok().unwrap();
        assert_eq!(tok, Tok::Plus);
        assert_eq!(cursor.pos(), Pos::from_offset(1));
    }

    #[test]
    fn test_switch_error_stops_search() {
        let parser = crate::switch! { "ab" => err::<u8, _>("deep"), "a" => pure(1u8) };

        assert_eq!(run(&parser, b"ab"), Outcome::Error("deep"));
        assert_eq!(run(&parser, b"ax").value(), Some(1));
    }

    #[test]
    fn test_switch_fallback() {
        let parser = switch([("let", pure(Tok::Let))]).with_fallback(any_word8().map(|_| Tok::Other));

        assert_eq!(run(&parser, b"let").value(), Some(Tok::Let));
        let (tok, cursor) = run(&parser, b"lex").ok().unwrap();
        assert_eq!(tok, Tok::Other);
        assert_eq!(cursor.pos(), Pos::from_offset(1));
    }

    #[test]
    fn test_switch_with_post() {
        let parser = switch_with_post([("let", get_pos()), ("in", get_pos())], skip_many(byte(b' ')));

        assert_eq!(run(&parser, b"let   x").value(), Some(Pos::from_offset(6)));
        assert_eq!(run(&parser, b"in y").value(), Some(Pos::from_offset(3)));
    }

    #[test]
    fn test_post_backtrack_tries_shorter_literal() {
        // the post step requires a digit right after the literal
        let parser = raw_switch_with_post(
            [("a", pure("a")), ("ab", pure("ab"))],
            pure("none"),
            lookahead(read_int()),
        );

        assert_eq!(run(&parser, b"ab1").value(), Some("ab"));
        assert_eq!(run(&parser, b"a1").value(), Some("a"));
        assert_eq!(run(&parser, b"abx").value(), Some("none"));
    }

    #[test]
    fn test_raw_switch_fallback_runs_from_start() {
        let parser = raw_switch_with_post([("xy", pure(0u8))], any_word8(), pure(()));
        assert_eq!(run(&parser, b"xz").value(), Some(b'x'));
    }

    #[test]
    fn test_empty_literal_matches_anywhere() {
        let parser = switch([("", pure(Tok::Other)), ("let", pure(Tok::Let))]);

        assert_eq!(run(&parser, b"le").value(), Some(Tok::Other));
        assert_eq!(run(&parser, b"let").value(), Some(Tok::Let));
    }

    #[test]
    fn test_switch_macro() {
        let parser = crate::switch! {
            "let" => pure(Tok::Let),
            "loop" => pure(Tok::Loop),
            "lo" => read_int().map(|_| Tok::Lo),
        };

        assert_eq!(run(&parser, b"loop").value(), Some(Tok::Loop));
        assert_eq!(run(&parser, b"lo7").value(), Some(Tok::Lo));
        assert_eq!(run(&parser, b"lox"), Outcome::Backtrack);
    }

    #[test]
    fn test_switch_macro_with_fallback_and_byte_literals() {
        let parser = crate::switch! {
            b"\x00\x01" => pure(1u8),
            b"\x00" => pure(0u8);
            _ => any_word8()
        };

        assert_eq!(run(&parser, b"\x00\x01").value(), Some(1));
        assert_eq!(run(&parser, b"\x00\x02").value(), Some(0));
        assert_eq!(run(&parser, b"\x05").value(), Some(5));
    }

    #[test]
    fn test_switch_macro_caches_trie() {
        fn build() -> Switch<Arm<Pure<u8, &'static str>, LastArm<Pure<u8, &'static str>>>> {
            crate::switch! { "a" => pure(1u8), "b" => pure(2u8) }
        }

        let (first, second) = (build(), build());
        assert!(std::ptr::eq(first.trie(), second.trie()));
    }

    #[test]
    fn test_switch_macro_many_keywords() {
        let keyword = crate::switch! {
            "as" => pure(0), "break" => pure(1), "const" => pure(2), "continue" => pure(3),
            "crate" => pure(4), "else" => pure(5), "enum" => pure(6), "extern" => pure(7),
            "false" => pure(8), "fn" => pure(9), "for" => pure(10), "if" => pure(11),
            "impl" => pure(12), "in" => pure(13), "let" => pure(14), "loop" => pure(15),
            "match" => pure(16), "mod" => pure(17), "move" => pure(18), "mut" => pure(19),
            "pub" => pure(20), "return" => pure(21),
        };

        assert_eq!(run(&keyword, b"as").value(), Some(0));
        assert_eq!(run(&keyword, b"mut x").value(), Some(19));
        assert_eq!(run(&keyword, b"return;").value(), Some(21));
        assert_eq!(run(&keyword, b"in").value(), Some(13));
        assert_eq!(run(&keyword, b"while"), Outcome::Backtrack);
    }

    #[test]
    fn test_arm_chain_out_of_range_backtracks() {
        let branches = Arm(pure::<u8, &'static str>(1), LastArm(pure::<u8, &'static str>(2)));
        let cursor = Cursor::new(b"");

        let second: Outcome<'_, u8, &'static str> = branches.dispatch(1, cursor);
        let missing: Outcome<'_, u8, &'static str> = branches.dispatch(2, cursor);
        assert_eq!(second.value(), Some(2));
        assert_eq!(missing, Outcome::Backtrack);
    }

    #[test]
    fn test_switch_long_literal_does_not_recurse() {
        let long = vec![b'a'; 200_000];
        let parser = switch([(long.clone(), pure(1u8)), (vec![b'a'], pure(2u8))]);

        let (value, cursor) = run(&parser, &long).ok().unwrap();
        assert_eq!(value, 1);
        assert!(cursor.is_eof());

        // one byte short of the long literal, so only "a" matches
        let (value, cursor) = run(&parser, &long[1..]).ok().unwrap();
        assert_eq!(value, 2);
        assert_eq!(cursor.pos(), Pos::from_offset(1));
    }

    #[test]
    fn test_parsers_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        let keyword = crate::switch! { "let" => pure(1u8), "in" => pure(2u8); _ => any_word8() };
        let runtime = switch([("let", pure(1u8))]).with_post(skip_many(byte(b' ')));
        let number = read_int().map(|n| n * 2).or(lookahead(pure(0)));

        assert_send_sync(&keyword);
        assert_send_sync(&runtime);
        assert_send_sync(&number);

        let shared = std::sync::Arc::new(keyword);
        let worker = {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || run(&*shared, b"in").value())
        };
        assert_eq!(worker.join().unwrap(), Some(2));
        assert_eq!(run(&runtime, b"let").value(), Some(1));
        assert_eq!(run(&number, b"21").value(), Some(42));
    }
}
