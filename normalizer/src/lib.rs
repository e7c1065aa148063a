#![deny(clippy::disallowed_methods)]
#![deny(clippy::self_named_module_files)]
#![warn(clippy::branches_sharing_code)]
#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::equatable_if_let)]
#![warn(clippy::explicit_into_iter_loop)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::from_iter_instead_of_collect)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::inconsistent_struct_constructor)]
#![warn(clippy::index_refutable_slice)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::items_after_statements)]
#![warn(clippy::manual_assert)]
#![warn(clippy::manual_ok_or)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::match_wildcard_for_single_variants)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::redundant_pub_crate)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::str_to_string)]
#![warn(clippy::string_to_string)]
#![warn(clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::unnecessary_wraps)]
#![warn(clippy::unnested_or_patterns)]
#![warn(clippy::unused_self)]

#[macro_use]
pub mod ast;
pub mod context;
pub mod headers;
mod language;
pub mod translation;

pub use language::Language;

use ast::{Statement, TermPool};
use context::{Config, Diagnostic, DiagnosticContext, State};
use headers::HeaderState;
use std::path::Path;
use thiserror::Error;
use translation::SurfaceStatement;

pub type NormalizerResult<T> = Result<T, Error>;

fn count_errors(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.is_error()).count()
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no input language was configured")]
    NoInputLanguage,

    #[error("could not detect the language of '{0}'")]
    UnknownExtension(String),

    // The input was fully processed, but at least one error was found along the way
    #[error("input rejected with {} error(s)", count_errors(.0))]
    Rejected(Vec<Diagnostic>),
}

/// Detects the language of a file from its extension.
pub fn detect_language(path: impl AsRef<Path>) -> NormalizerResult<Language> {
    let path = path.as_ref();
    Language::from_path(path).ok_or_else(|| Error::UnknownExtension(path.display().to_string()))
}

/// The outcome of successfully processing an input stream.
#[derive(Debug)]
pub struct Normalized {
    /// The canonical statements, one per surface statement, in input order.
    pub statements: Vec<Statement>,

    /// The warnings emitted along the way.
    pub diagnostics: Vec<Diagnostic>,

    /// The headers still in effect at the end of the stream.
    pub headers: HeaderState,
}

/// Drives the processing of one input stream: each surface statement is translated and then
/// inspected by the header checks, and the aggregate checks run once the stream is finished.
pub struct Pipeline<'p> {
    pool: &'p mut dyn TermPool,
    language: Language,
    state: State,
    statements: Vec<Statement>,
}

impl<'p> Pipeline<'p> {
    pub fn new(pool: &'p mut dyn TermPool, config: Config) -> NormalizerResult<Self> {
        let language = config.language.ok_or(Error::NoInputLanguage)?;
        log::debug!("normalizing '{}' as {}", config.input_file, language);
        Ok(Self {
            pool,
            language,
            state: State::new(config),
            statements: Vec::new(),
        })
    }

    /// Translates and inspects the next surface statement, returning its canonical form.
    pub fn feed(&mut self, item: &SurfaceStatement) -> Statement {
        let statement =
            translation::translate(self.language, &mut *self.pool, &mut self.state, item);
        let statement = headers::inspect(&mut self.state, statement);
        self.statements.push(statement.clone());
        statement
    }

    /// The state of the stream so far.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Ends the stream, running the aggregate header checks. Fails if any error was emitted, at
    /// any point of the processing.
    pub fn finish(mut self) -> NormalizerResult<Normalized> {
        headers::finalize(&mut self.state);
        log::info!(
            "'{}': {} statements, {} errors, {} warnings",
            self.state.input_file(),
            self.statements.len(),
            self.state.num_errors(),
            self.state.num_warnings(),
        );
        let rejected = self.state.has_errors();
        let (diagnostics, headers) = self.state.into_parts();
        if rejected {
            return Err(Error::Rejected(diagnostics));
        }
        Ok(Normalized {
            statements: self.statements,
            diagnostics,
            headers,
        })
    }
}

/// Normalizes a whole input stream.
pub fn normalize<'a, I>(
    pool: &mut dyn TermPool,
    config: Config,
    items: I,
) -> NormalizerResult<Normalized>
where
    I: IntoIterator<Item = &'a SurfaceStatement>,
{
    let mut pipeline = Pipeline::new(pool, config)?;
    for item in items {
        pipeline.feed(item);
    }
    pipeline.finish()
}
