/*! Compiles patterns into [`Matcher`]s.

The compiler parses the pattern with [`xspattern_parser::Parser`], and then
translates the resulting AST into code for the Pike VM. Both steps are
purely synchronous, and the resulting [`Matcher`] never changes after it
has been created.
*/

#[cfg(feature = "logging")]
use std::time::Instant;

#[cfg(feature = "logging")]
use log::*;

use xspattern_parser::{Language, Parser};

use crate::matcher::Matcher;
use crate::re;
use crate::re::DEFAULT_MAX_PROGRAM_SIZE;

#[doc(inline)]
pub use crate::compiler::errors::*;

mod errors;

/// Options accepted by [`compile_with_options`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// The dialect of the pattern. The default is [`Language::Xsd`].
    pub language: Language,
}

/// Compiles an XML Schema pattern.
///
/// This function is useful for compiling a single pattern with the default
/// settings. It's equivalent to `Compiler::new().compile(pattern)`.
///
/// # Example
///
/// ```rust
/// let matcher = xspattern::compile("[a-z]+[0-9]?").unwrap();
/// assert!(matcher.is_match("abc1"));
/// assert!(!matcher.is_match("abc12"));
/// ```
pub fn compile(pattern: &str) -> Result<Matcher, Error> {
    Compiler::new().compile(pattern)
}

/// Compiles a pattern with the given [`Options`].
///
/// # Example
///
/// ```rust
/// use xspattern::{Language, Options};
///
/// let matcher = xspattern::compile_with_options(
///     "^[a-z]+",
///     Options { language: Language::XPath },
/// )
/// .unwrap();
///
/// assert!(matcher.is_match("abc123"));
/// assert!(!matcher.is_match("123abc"));
/// ```
pub fn compile_with_options(
    pattern: &str,
    options: Options,
) -> Result<Matcher, Error> {
    Compiler::new().language(options.language).compile(pattern)
}

/// Compiles patterns into [`Matcher`]s.
///
/// Each compiler holds a configuration that applies to every pattern it
/// compiles, the same compiler can be used for compiling any number of
/// patterns.
#[derive(Debug, Clone)]
pub struct Compiler {
    language: Language,
    max_program_size: usize,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    /// Creates a new compiler for XML Schema patterns.
    pub fn new() -> Self {
        Self {
            language: Language::default(),
            max_program_size: DEFAULT_MAX_PROGRAM_SIZE,
        }
    }

    /// Specifies the dialect of the patterns.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Sets the maximum number of instructions in the program produced for
    /// a pattern. Patterns that exceed the limit produce
    /// [`Error::TooLarge`].
    ///
    /// Bounded repetitions copy their atom once per repetition, so a pattern
    /// like `(a{1000}){1000}` needs at least a million instructions. The
    /// default limit is 4194304 (4M) instructions.
    pub fn max_program_size(mut self, max_program_size: usize) -> Self {
        self.max_program_size = max_program_size;
        self
    }

    /// Compiles `pattern` and returns a [`Matcher`] for it.
    pub fn compile(&self, pattern: &str) -> Result<Matcher, Error> {
        #[cfg(feature = "logging")]
        let start = Instant::now();

        #[cfg(feature = "logging")]
        debug!("compiling pattern {:?} ({:?})", pattern, self.language);

        let regexp = Parser::new().language(self.language).parse(pattern)?;

        let code = re::thompson::Compiler::new(self.max_program_size)
            .compile(&regexp, self.language)
            .map_err(|err| {
                Error::from_re_error(err, pattern, self.max_program_size)
            })?;

        #[cfg(feature = "logging")]
        info!(
            "pattern {:?} compiled into {} instructions in {:?}",
            pattern,
            code.as_ref().len(),
            Instant::elapsed(&start)
        );

        Ok(Matcher::new(pattern, self.language, code))
    }
}
