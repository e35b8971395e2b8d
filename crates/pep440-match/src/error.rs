use thiserror::Error;

/// The input is not a valid PEP 440 version, range or range set.
///
/// This is the only error the crate produces. It keeps the offending text around so callers can
/// report it as is, e.g. "invalid version string".
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("Failed to parse `{input}`: {kind}")]
pub struct VersionParseError {
    input: String,
    // Boxed to keep `Result<Version, VersionParseError>` small.
    kind: Box<ParseErrorKind>,
}

impl VersionParseError {
    pub(crate) fn new(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind: Box::new(kind),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the text was rejected.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// The specific reason a [`VersionParseError`] occurred.
///
/// Positions are byte offsets into [`VersionParseError::input`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    /// A release number was expected, e.g. in `!1.0` or `v`.
    #[error("expected a release number at position {pos}")]
    MissingRelease {
        /// Where the release should have started.
        pos: usize,
    },
    /// A `+` wasn't followed by an alphanumeric local segment, e.g. `1.0++abc`.
    #[error("expected a local version segment at position {pos}")]
    InvalidLocal {
        /// Where the local segment should have started.
        pos: usize,
    },
    /// A numeric field overflows a `u64`.
    #[error("the number `{number}` is too large")]
    NumberTooLarge {
        /// The digits as they appeared in the input.
        number: String,
    },
    /// The grammar matched a prefix of the input, but not all of it, e.g. `1.0-foo`.
    #[error("unexpected `{trailing}` at position {pos}")]
    UnexpectedTrailing {
        /// Where the unparsed text starts.
        pos: usize,
        /// The unparsed text.
        trailing: String,
    },
    /// A range didn't start with one of `~=`, `>=`, `<=`, `!=`, `==`, `>` or `<`.
    #[error("expected one of `~=`, `>=`, `<=`, `!=`, `==`, `>` or `<`")]
    MissingOperator,
    /// A range had an operator but no version.
    #[error("expected a version after the operator")]
    MissingVersion,
}
