/*! This module compiles and executes patterns.

Patterns are parsed by the `xspattern-parser` crate, which produces an
Abstract Syntax Tree (AST) where every character class has already been
resolved into a [`xspattern_parser::sets::Predicate`]. Given that AST, a
compiler based on the [Thompson's construction][1] algorithm produces code
for the Pike VM described in [Regular Expression Matching: the Virtual
Machine Approach][2]. The VM executes the code against a sequence of
codepoints and tells whether the input matches.

[1]: https://en.wikipedia.org/wiki/Thompson%27s_construction
[2]: https://swtch.com/~rsc/regexp/regexp2.html
*/

use thiserror::Error;

pub mod thompson;
pub mod threadset;

/// Default limit for the number of instructions in the code produced for a
/// single pattern.
pub const DEFAULT_MAX_PROGRAM_SIZE: usize = 1 << 22;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The code produced for the pattern exceeds the maximum size.
    #[error("pattern too large")]
    TooLarge,
}
