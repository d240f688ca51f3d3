/*! Abstract Syntax Tree (AST) for XML Schema and XPath patterns.

The AST mirrors the grammar closely. A [`RegExp`] is a list of alternative
[`Branch`]es, each branch is a sequence of [`Piece`]s, and each piece is an
[`Atom`] together with the [`Quantifier`] that says how many times the atom
must be repeated.

Character classes don't have a node of their own. They are resolved while
parsing and stored as a [`Predicate`] in [`Atom::Predicate`].
*/

use std::fmt::{Display, Formatter};

use crate::sets::{Codepoint, Predicate};

/// The smallest unit that can be quantified.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// Matches exactly one codepoint.
    Codepoint(Codepoint),
    /// Matches any codepoint in a character class.
    Predicate(Predicate),
    /// A parenthesized sub-expression.
    RegExp(RegExp),
}

/// Number of times an atom can be repeated. `max` is [`None`] when the
/// repetition is unbounded.
///
/// The parser guarantees that `max >= min` when `max` is not [`None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    pub min: u32,
    pub max: Option<u32>,
}

impl Quantifier {
    /// Quantifier used by pieces that don't have one.
    pub const EXACTLY_ONE: Quantifier = Quantifier { min: 1, max: Some(1) };
}

impl Default for Quantifier {
    fn default() -> Self {
        Self::EXACTLY_ONE
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (0, Some(1)) => write!(f, "?"),
            (0, None) => write!(f, "*"),
            (1, None) => write!(f, "+"),
            (min, None) => write!(f, "{{{},}}", min),
            (min, Some(max)) if min == max => write!(f, "{{{}}}", min),
            (min, Some(max)) => write!(f, "{{{},{}}}", min, max),
        }
    }
}

/// An atom and its quantifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub atom: Atom,
    pub quantifier: Quantifier,
}

impl Piece {
    /// Creates a piece that matches `atom` exactly once.
    pub fn new(atom: Atom) -> Self {
        Self { atom, quantifier: Quantifier::EXACTLY_ONE }
    }

    pub fn with_quantifier(atom: Atom, quantifier: Quantifier) -> Self {
        Self { atom, quantifier }
    }
}

/// A sequence of pieces that must match one after the other. An empty
/// branch matches the empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Branch {
    pub pieces: Vec<Piece>,
}

/// A list of alternative branches. The expression matches if any of the
/// branches matches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegExp {
    pub branches: Vec<Branch>,
}
