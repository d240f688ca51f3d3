use itertools::Itertools;

use crate::ast::RegExp;
use crate::parser::combinators::{PatternError, Problem};
use crate::parser::grammar::Grammar;

#[doc(inline)]
pub use crate::parser::errors::*;

mod combinators;
mod errors;
mod grammar;

#[cfg(test)]
mod tests;

/// The dialect of the pattern language.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Patterns as defined by XML Schema 1.0. The pattern must match the
    /// whole input.
    #[default]
    Xsd,
    /// Patterns as used by the `fn:matches` family in XPath 3.1. The
    /// pattern matches if it matches any substring of the input, and `^`
    /// and `$` anchor it to the start and end of the input.
    XPath,
}

impl Language {
    /// Returns true if `\p{IsX}` should match every character when `X` is
    /// not a known block. XML Schema allows it, so that schemas written for
    /// newer versions of Unicode still work. XPath requires an error.
    pub fn unknown_blocks_match_everything(&self) -> bool {
        matches!(self, Language::Xsd)
    }
}

/// Default maximum nesting level of groups and character classes.
pub const DEFAULT_NEST_LIMIT: u32 = 100;

/// Parses a pattern and produces its Abstract Syntax Tree (AST).
#[derive(Debug, Clone)]
pub struct Parser {
    language: Language,
    nest_limit: u32,
}

impl Default for Parser {
    fn default() -> Self {
        Self { language: Language::default(), nest_limit: DEFAULT_NEST_LIMIT }
    }
}

impl Parser {
    /// Creates a new parser for XML Schema patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specifies the language of the patterns.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Sets how deeply groups and character class expressions can be
    /// nested. Patterns that go beyond the limit produce a
    /// [`Error::SemanticError`] instead of exhausting the stack.
    pub fn nest_limit(mut self, limit: u32) -> Self {
        self.nest_limit = limit;
        self
    }

    /// Parses `pattern` and returns its AST.
    ///
    /// The pattern must be consumed entirely, any trailing characters that
    /// are not part of the grammar produce an error.
    pub fn parse(&self, pattern: &str) -> Result<RegExp, Error> {
        match Grammar::new(self.language, self.nest_limit).pattern(pattern) {
            Ok((_, regexp)) => Ok(regexp),
            Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => {
                Err(convert_error(pattern, err))
            }
            // The parser never asks for more input.
            Err(nom::Err::Incomplete(_)) => unreachable!(),
        }
    }
}

fn convert_error(pattern: &str, err: PatternError) -> Error {
    let byte_offset = pattern.len() - err.remaining;
    let offset = pattern[..byte_offset].chars().count();
    let pattern_string = pattern.to_string();

    match err.problem {
        Problem::Expected(expected) => Error::SyntaxError {
            pattern: pattern_string,
            offset,
            expected: expected
                .into_iter()
                .unique()
                .map(String::from)
                .collect(),
            found: pattern[byte_offset..].chars().next(),
        },
        Problem::Semantic(reason) if reason.is_unicode_construct() => {
            Error::UnknownUnicodeConstruct {
                pattern: pattern_string,
                offset,
                reason,
            }
        }
        Problem::Semantic(reason) => {
            Error::SemanticError { pattern: pattern_string, offset, reason }
        }
    }
}
