use thiserror::Error;

use xspattern_parser::Error as ParseError;

use crate::re;

/// Errors returned while compiling a pattern.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The pattern is not valid.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// The code for the pattern exceeds the maximum number of instructions
    /// set with [`crate::Compiler::max_program_size`].
    #[error("pattern \"{pattern}\" is too large (max: {max_size} instructions)")]
    #[allow(missing_docs)]
    TooLarge { pattern: String, max_size: usize },
}

impl Error {
    /// Returns a unique error code identifying the type of error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::ParseError(err) => err.code(),
            Error::TooLarge { .. } => "E100",
        }
    }

    /// Renders a detailed report for the error.
    ///
    /// For errors found while parsing the pattern the report shows the
    /// pattern with the offending position highlighted.
    pub fn report(&self, with_colors: bool) -> String {
        match self {
            Error::ParseError(err) => err.report(with_colors),
            Error::TooLarge { .. } => {
                format!("error[{}]: {}", self.code(), self)
            }
        }
    }

    pub(crate) fn from_re_error(
        err: re::Error,
        pattern: &str,
        max_size: usize,
    ) -> Self {
        match err {
            re::Error::TooLarge => {
                Error::TooLarge { pattern: pattern.to_string(), max_size }
            }
        }
    }
}
