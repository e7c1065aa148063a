use crate::ast::Location;
use std::fmt;

/// How serious a diagnostic is. Neither severity stops the processing of the input, but an input
/// that produced at least one error must be reported as rejected once it is fully processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The input can still be used, possibly with a default value substituted for something.
    Warning,

    /// The input is invalid.
    Error,
}

impl_str_conversion_traits!(Severity {
    Warning: "warning",
    Error: "error",
});

/// A message about the input, tied to the place where the problem was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}
