/*! Parser combinators used by the pattern grammar.

Most of the combinators come from [`nom`]. This module adds the error type
that keeps track of what was expected at the deepest position reached by the
parser, and a few combinators that nom doesn't have, or that nom implements
in a way that doesn't fit how errors are reported here.

Errors come in two flavours. A [`nom::Err::Error`] is recoverable: the
alternatives in an [`alt`] are tried until one of them succeeds. A
[`nom::Err::Failure`] is fatal and aborts the whole parse. Failures are
produced by [`cut`] at points where there's only one way to continue, and by
[`check`] when a rule that can't be expressed in the grammar is broken.

[`alt`]: nom::branch::alt
[`cut`]: nom::combinator::cut
*/

use nom::combinator::cut;
use nom::error::{ErrorKind, ParseError};
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};

use crate::parser::Reason;
use crate::sets::Codepoint;

pub(crate) type PResult<'a, O> = IResult<&'a str, O, PatternError>;

/// What went wrong at some position of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Problem {
    /// The parser expected one of these tokens.
    Expected(Vec<&'static str>),
    /// The input is syntactically valid but not acceptable.
    Semantic(Reason),
}

/// Error produced by the combinators in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PatternError {
    /// Number of bytes left in the input at the position of the error. The
    /// smaller the number, the deeper the error.
    pub remaining: usize,
    pub problem: Problem,
}

impl PatternError {
    pub fn expected(input: &str, expected: &[&'static str]) -> Self {
        Self {
            remaining: input.len(),
            problem: Problem::Expected(expected.to_vec()),
        }
    }

    pub fn semantic(input: &str, reason: Reason) -> Self {
        Self { remaining: input.len(), problem: Problem::Semantic(reason) }
    }
}

impl<'a> ParseError<&'a str> for PatternError {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Self::expected(input, &[])
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    /// Keeps the error that went deeper into the input. When both errors are
    /// at the same position, the expected tokens are merged.
    fn or(self, other: Self) -> Self {
        if other.remaining < self.remaining {
            return other;
        }
        if other.remaining > self.remaining {
            return self;
        }
        match (self.problem, other.problem) {
            (Problem::Expected(mut tokens), Problem::Expected(more)) => {
                tokens.extend(more);
                Self {
                    remaining: self.remaining,
                    problem: Problem::Expected(tokens),
                }
            }
            (problem, _) => Self { remaining: self.remaining, problem },
        }
    }
}

#[inline]
fn error(input: &str, expected: &[&'static str]) -> nom::Err<PatternError> {
    nom::Err::Error(PatternError::expected(input, expected))
}

/// Accepts `literal` at the start of the input.
pub(crate) fn token<'a>(
    literal: &'static str,
) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    move |input: &'a str| {
        if input.starts_with(literal) {
            let (matched, rest) = input.split_at(literal.len());
            Ok((rest, matched))
        } else {
            Err(error(input, &[literal]))
        }
    }
}

/// Accepts any single character and returns its codepoint.
pub(crate) fn codepoint(input: &str) -> PResult<'_, Codepoint> {
    let mut chars = input.chars();
    match chars.next() {
        Some(c) => Ok((chars.as_str(), c as Codepoint)),
        None => Err(error(input, &["any character"])),
    }
}

/// Accepts a character if it is one of the single-character `tokens`.
pub(crate) fn one_of<'a>(
    tokens: &'static [&'static str],
) -> impl FnMut(&'a str) -> PResult<'a, Codepoint> {
    move |input: &'a str| {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if tokens.iter().any(|t| t.chars().eq(Some(c))) => {
                Ok((chars.as_str(), c as Codepoint))
            }
            _ => Err(error(input, tokens)),
        }
    }
}

/// Runs `parser` if `enabled` is true, otherwise fails without expecting
/// anything.
pub(crate) fn only_if<'a, O, P>(
    enabled: bool,
    mut parser: P,
) -> impl FnMut(&'a str) -> PResult<'a, O>
where
    P: Parser<&'a str, O, PatternError>,
{
    move |input: &'a str| {
        if enabled {
            parser.parse(input)
        } else {
            Err(error(input, &[]))
        }
    }
}

/// Accepts the value produced by `parser` only if `predicate` returns
/// true for it.
///
/// When the value is rejected, or when `parser` fails without consuming any
/// input, the error reports `expected` instead of whatever `parser` was
/// expecting. Errors produced further into the input are left untouched.
pub(crate) fn filter<'a, O, P, F>(
    mut parser: P,
    predicate: F,
    expected: &'static [&'static str],
) -> impl FnMut(&'a str) -> PResult<'a, O>
where
    P: Parser<&'a str, O, PatternError>,
    F: Fn(&O) -> bool,
{
    move |input: &'a str| match parser.parse(input) {
        Ok((rest, value)) if predicate(&value) => Ok((rest, value)),
        Ok(_) => Err(error(input, expected)),
        Err(nom::Err::Error(err)) if err.remaining == input.len() => {
            Err(error(input, expected))
        }
        Err(err) => Err(err),
    }
}

/// Negative lookahead. Succeeds without consuming input if `parser` fails,
/// and fails reporting `expected` if `parser` succeeds.
pub(crate) fn not<'a, O, P>(
    mut parser: P,
    expected: &'static [&'static str],
) -> impl FnMut(&'a str) -> PResult<'a, ()>
where
    P: Parser<&'a str, O, PatternError>,
{
    move |input: &'a str| match parser.parse(input) {
        Ok(_) => Err(error(input, expected)),
        Err(nom::Err::Error(_)) => Ok((input, ())),
        Err(err) => Err(err),
    }
}

/// Succeeds only at the end of the input.
pub(crate) fn end(input: &str) -> PResult<'_, ()> {
    if input.is_empty() {
        Ok((input, ()))
    } else {
        Err(error(input, &["end of input"]))
    }
}

/// Runs `parser` and requires that it consumes the whole input.
pub(crate) fn complete<'a, O, P>(
    parser: P,
) -> impl FnMut(&'a str) -> PResult<'a, O>
where
    P: Parser<&'a str, O, PatternError>,
{
    terminated(parser, end)
}

/// Like [`nom::sequence::delimited`], but once `open` has been accepted
/// any failure in `inner` or `close` is fatal.
pub(crate) fn delimited_cut<'a, O1, O2, O3, P1, P2, P3>(
    open: P1,
    inner: P2,
    close: P3,
) -> impl FnMut(&'a str) -> PResult<'a, O2>
where
    P1: Parser<&'a str, O1, PatternError>,
    P2: Parser<&'a str, O2, PatternError>,
    P3: Parser<&'a str, O3, PatternError>,
{
    preceded(open, cut(terminated(inner, close)))
}

/// Transforms the value produced by `parser` with `f`. If `f` returns an
/// error the parse fails with a fatal error located where `parser` started.
pub(crate) fn check<'a, O1, O2, P, F>(
    mut parser: P,
    mut f: F,
) -> impl FnMut(&'a str) -> PResult<'a, O2>
where
    P: Parser<&'a str, O1, PatternError>,
    F: FnMut(O1) -> Result<O2, Reason>,
{
    move |input: &'a str| {
        let (rest, value) = parser.parse(input)?;
        match f(value) {
            Ok(value) => Ok((rest, value)),
            Err(reason) => {
                Err(nom::Err::Failure(PatternError::semantic(input, reason)))
            }
        }
    }
}
