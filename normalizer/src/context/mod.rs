//! The state threaded through the processing of one input stream: configuration, emitted
//! diagnostics, and the problem headers observed so far.

mod diagnostic;

pub use diagnostic::{Diagnostic, Severity};

use crate::{
    ast::{Location, Span},
    headers::HeaderState,
    Language,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) language: Option<Language>,
    pub(crate) check_headers: bool,
    pub(crate) allowed_licenses: Vec<String>,
    pub(crate) allowed_lang_versions: Vec<String>,
    pub(crate) input_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            check_headers: false,
            allowed_licenses: Vec::new(),
            allowed_lang_versions: Vec::new(),
            input_file: "<input>".to_owned(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, value: impl Into<Option<Language>>) -> Self {
        self.language = value.into();
        self
    }

    /// Enables or disables header checking, which is off by default. When disabled, statements are
    /// never inspected and no header diagnostic is ever emitted.
    pub fn check_headers(mut self, value: bool) -> Self {
        self.check_headers = value;
        self
    }

    /// Sets the licenses a problem may declare. An empty list accepts any license.
    pub fn allowed_licenses<I, S>(mut self, value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_licenses = value.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the language versions a problem may declare. An empty list accepts any version.
    pub fn allowed_lang_versions<I, S>(mut self, value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_lang_versions = value.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the name of the input file, used when reporting locations.
    pub fn input_file(mut self, value: impl Into<String>) -> Self {
        self.input_file = value.into();
        self
    }
}

/// The capabilities the translation and validation code need from their surroundings.
///
/// Emitting a diagnostic never interrupts processing: both `warn` and `error` just record the
/// message and return.
pub trait DiagnosticContext {
    fn warn(&mut self, loc: Option<Span>, message: String);

    fn error(&mut self, loc: Option<Span>, message: String);

    fn input_language(&self) -> Option<Language>;

    fn check_headers(&self) -> bool;

    /// The licenses a problem may declare. Empty means unrestricted.
    fn allowed_licenses(&self) -> &[String];

    /// The language versions a problem may declare. Empty means unrestricted.
    fn allowed_lang_versions(&self) -> &[String];

    /// The name of the file being processed.
    fn input_file(&self) -> &str;

    /// The headers observed so far.
    fn header_state(&self) -> &HeaderState;

    fn set_header_state(&mut self, headers: HeaderState);

    /// Combines a span local to the input with the input file name.
    fn location(&self, span: Option<Span>) -> Location {
        Location::new(self.input_file(), span)
    }
}

/// The default `DiagnosticContext`. It collects every diagnostic, and also forwards it to the
/// `log` facade.
#[derive(Debug)]
pub struct State {
    config: Config,
    headers: HeaderState,
    diagnostics: Vec<Diagnostic>,
}

impl State {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            headers: HeaderState::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn num_errors(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn num_warnings(&self) -> usize {
        self.diagnostics.len() - self.num_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Consumes the state, returning the collected diagnostics and the final headers.
    pub fn into_parts(self) -> (Vec<Diagnostic>, HeaderState) {
        (self.diagnostics, self.headers)
    }

    fn emit(&mut self, severity: Severity, span: Option<Span>, message: String) {
        let diagnostic = Diagnostic {
            severity,
            location: self.location(span),
            message,
        };
        // The log level already carries the severity
        match severity {
            Severity::Warning => log::warn!("{}: {}", diagnostic.location, diagnostic.message),
            Severity::Error => log::error!("{}: {}", diagnostic.location, diagnostic.message),
        }
        self.diagnostics.push(diagnostic);
    }
}

impl DiagnosticContext for State {
    fn warn(&mut self, loc: Option<Span>, message: String) {
        self.emit(Severity::Warning, loc, message);
    }

    fn error(&mut self, loc: Option<Span>, message: String) {
        self.emit(Severity::Error, loc, message);
    }

    fn input_language(&self) -> Option<Language> {
        self.config.language
    }

    fn check_headers(&self) -> bool {
        self.config.check_headers
    }

    fn allowed_licenses(&self) -> &[String] {
        &self.config.allowed_licenses
    }

    fn allowed_lang_versions(&self) -> &[String] {
        &self.config.allowed_lang_versions
    }

    fn input_file(&self) -> &str {
        &self.config.input_file
    }

    fn header_state(&self) -> &HeaderState {
        &self.headers
    }

    fn set_header_state(&mut self, headers: HeaderState) {
        self.headers = headers;
    }
}
