use thiserror::Error;

/// A problem found while translating a surface statement. Translation never fails: the statement
/// degrades to an empty pack and the problem is reported as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationWarning {
    #[error("unknown formula role: `{0}`")]
    UnknownRole(String),

    #[error("unexpected type declaration shape: `{0}`")]
    BadTypeDeclaration(String),

    #[error("unknown command: `{0}`")]
    UnknownCommand(String),

    /// A known command was given arguments of the wrong number or shape.
    #[error("wrong arguments for `{0}`")]
    MalformedCommand(String),
}
