//! The problems that can be found while checking headers.

use thiserror::Error;

/// A header problem. Its `Display` text is the message of the emitted diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// A header attribute was given without a value.
    #[error("empty value for {0}")]
    EmptyValue(String),

    #[error("expected a version number")]
    ExpectedVersion,

    #[error("expected a single symbol")]
    ExpectedSymbol,

    #[error("expected a single string")]
    ExpectedString,

    #[error("expected sat|unsat|unknown")]
    ExpectedStatus,

    #[error("'{0}' is not an allowed license")]
    LicenseNotAllowed(String),

    #[error("'{0}' is not an allowed language version")]
    LangVersionNotAllowed(String),

    /// A solve request was not preceded by its own status declaration. Holds the display name of
    /// the status field.
    #[error("missing {0} header before this solve request")]
    MissingStatus(&'static str),

    #[error(
        "the following header fields are missing, default values will be assumed: {}",
        .0.join(", ")
    )]
    MissingWanted(Vec<&'static str>),

    #[error("the following header fields are missing: {}", .0.join(", "))]
    MissingRequired(Vec<&'static str>),
}
