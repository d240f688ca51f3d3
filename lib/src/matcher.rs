use std::fmt::{Debug, Formatter};
use std::iter;
use std::sync::Arc;

use xspattern_parser::sets::{Codepoint, END_SENTINEL, START_SENTINEL};
use xspattern_parser::Language;

use crate::re::thompson::{InstrSeq, PikeVM};

/// A compiled pattern.
///
/// Matchers are immutable, each call to one of the matching functions uses
/// its own VM state. A matcher can be cloned cheaply and shared between
/// threads.
#[derive(Clone)]
pub struct Matcher {
    inner: Arc<Inner>,
}

struct Inner {
    pattern: String,
    language: Language,
    code: InstrSeq,
}

impl Matcher {
    pub(crate) fn new(
        pattern: &str,
        language: Language,
        code: InstrSeq,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                pattern: pattern.to_string(),
                language,
                code,
            }),
        }
    }

    /// The pattern this matcher was compiled from.
    #[inline]
    pub fn pattern(&self) -> &str {
        self.inner.pattern.as_str()
    }

    /// The dialect the pattern was compiled with.
    #[inline]
    pub fn language(&self) -> Language {
        self.inner.language
    }

    /// Returns true if `s` matches the pattern.
    ///
    /// In XML Schema mode the pattern must match the whole string, in XPath
    /// mode it's enough that it matches some substring.
    pub fn is_match(&self, s: &str) -> bool {
        self.matches(s.chars().map(Codepoint::from))
    }

    /// Like [`Matcher::is_match`] but receives a string encoded as UTF-16.
    ///
    /// Surrogate pairs are combined into a single codepoint. Surrogates that
    /// are not part of a pair are passed to the VM as they are, so they can
    /// never match an astral codepoint.
    pub fn is_match_utf16(&self, s: &[u16]) -> bool {
        self.matches(char::decode_utf16(s.iter().copied()).map(
            |c| match c {
                Ok(c) => Codepoint::from(c),
                Err(err) => Codepoint::from(err.unpaired_surrogate()),
            },
        ))
    }

    /// Like [`Matcher::is_match`] but receives a sequence of codepoints.
    pub fn is_match_codepoints(&self, codepoints: &[Codepoint]) -> bool {
        self.matches(codepoints.iter().copied())
    }

    /// Returns a listing of the code produced for the pattern.
    pub fn disassemble(&self) -> String {
        self.inner.code.to_string()
    }

    fn matches<I>(&self, input: I) -> bool
    where
        I: Iterator<Item = Codepoint>,
    {
        let mut vm = PikeVM::new(self.inner.code.as_ref());
        match self.inner.language {
            Language::Xsd => vm.try_match(input),
            Language::XPath => vm.try_match(
                iter::once(START_SENTINEL)
                    .chain(input)
                    .chain(iter::once(END_SENTINEL)),
            ),
        }
    }
}

impl Debug for Matcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("pattern", &self.inner.pattern)
            .field("language", &self.inner.language)
            .finish()
    }
}
