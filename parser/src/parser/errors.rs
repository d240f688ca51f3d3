use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::report::{create_report, Level};

/// The rule broken by a pattern that is syntactically valid but not
/// acceptable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    #[error("quantifier range is in the wrong order")]
    QuantifierRangeOrder,

    #[error("quantifier bound is too large (max: {})", u32::MAX)]
    QuantifierTooLarge,

    #[error("character range is in the wrong order")]
    InvalidRange,

    #[error("unescaped hyphen may not be used as a range endpoint")]
    HyphenAsRangeEndpoint,

    #[error("backreferences are not supported")]
    Backreference,

    #[error("pattern is nested too deeply (max: {0} levels)")]
    NestingTooDeep(u32),

    #[error("unknown Unicode category `{0}`")]
    UnknownCategory(String),

    #[error("unknown Unicode block `{0}`")]
    UnknownBlock(String),
}

impl Reason {
    /// Returns true if the reason refers to a category or block that
    /// doesn't exist.
    pub fn is_unicode_construct(&self) -> bool {
        matches!(self, Reason::UnknownCategory(_) | Reason::UnknownBlock(_))
    }
}

/// An error occurred while parsing a pattern.
///
/// Offsets are measured in characters from the start of the pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pattern doesn't conform to the grammar.
    #[error(
        "error parsing pattern \"{pattern}\" at offset {offset}: expected {} but found {}",
        Expected(.expected),
        Found(.found)
    )]
    SyntaxError {
        pattern: String,
        offset: usize,
        expected: Vec<String>,
        found: Option<char>,
    },

    /// The pattern conforms to the grammar but breaks some other rule.
    #[error("error parsing pattern \"{pattern}\" at offset {offset}: {reason}")]
    SemanticError { pattern: String, offset: usize, reason: Reason },

    /// The pattern refers to a Unicode category or block that doesn't
    /// exist.
    #[error("error parsing pattern \"{pattern}\" at offset {offset}: {reason}")]
    UnknownUnicodeConstruct { pattern: String, offset: usize, reason: Reason },
}

impl Error {
    /// Returns a unique error code identifying the type of error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::SyntaxError { .. } => "E001",
            Error::SemanticError { .. } => "E002",
            Error::UnknownUnicodeConstruct { .. } => "E003",
        }
    }

    /// The pattern that produced the error.
    pub fn pattern(&self) -> &str {
        match self {
            Error::SyntaxError { pattern, .. }
            | Error::SemanticError { pattern, .. }
            | Error::UnknownUnicodeConstruct { pattern, .. } => pattern,
        }
    }

    /// Offset, in characters, where the error was found.
    pub fn offset(&self) -> usize {
        match self {
            Error::SyntaxError { offset, .. }
            | Error::SemanticError { offset, .. }
            | Error::UnknownUnicodeConstruct { offset, .. } => *offset,
        }
    }

    /// Renders a detailed report that shows the pattern with the offending
    /// position highlighted.
    pub fn report(&self, with_colors: bool) -> String {
        let pattern = self.pattern();

        // Annotations work with byte offsets.
        let start = pattern
            .char_indices()
            .nth(self.offset())
            .map(|(i, _)| i)
            .unwrap_or(pattern.len());

        let (title, label, end) = match self {
            Error::SyntaxError { expected, found, .. } => (
                "syntax error",
                format!("expected {}", Expected(expected)),
                start + found.map(char::len_utf8).unwrap_or(0),
            ),
            Error::SemanticError { reason, .. } => {
                ("invalid pattern", reason.to_string(), start)
            }
            Error::UnknownUnicodeConstruct { reason, .. } => {
                ("unknown Unicode construct", reason.to_string(), start)
            }
        };

        create_report(
            Level::Error,
            pattern,
            self.code(),
            title,
            start..end,
            &label,
            with_colors,
        )
    }
}

struct Expected<'a>(&'a [String]);

impl Display for Expected<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            [] => write!(f, "nothing"),
            [single] => write!(f, "\"{}\"", single),
            many => {
                write!(f, "one of ")?;
                for (i, e) in many.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\"", e)?;
                }
                Ok(())
            }
        }
    }
}

struct Found<'a>(&'a Option<char>);

impl Display for Found<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(c) => write!(f, "\"{}\"", c),
            None => write!(f, "end of input"),
        }
    }
}
