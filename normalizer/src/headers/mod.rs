//! Validation of the problem metadata embedded in an input stream.
//!
//! Every translated statement goes through [`inspect`], which records the headers it declares and
//! checks that each solve request is preceded by its own status declaration. Once the stream is
//! exhausted, [`finalize`] reports the fields that were never declared.

mod error;
mod field;
mod state;

#[cfg(test)]
mod tests;

pub use error::HeaderError;
pub use field::{parse, Field, HeaderParse};
pub use state::{required, wanted, HeaderState};

use crate::{
    ast::{Span, Statement, StatementKind, Term},
    context::DiagnosticContext,
};

/// Inspects a statement, updating the headers held by the context and emitting diagnostics for
/// any problem found. The elements of a pack are inspected in order, so a solve request needs a
/// status no matter how it is wrapped. The statement is always handed back unchanged.
pub fn inspect<D: DiagnosticContext + ?Sized>(ctx: &mut D, statement: Statement) -> Statement {
    if ctx.check_headers() {
        visit(ctx, &statement);
    }
    statement
}

fn visit<D: DiagnosticContext + ?Sized>(ctx: &mut D, statement: &Statement) {
    match &statement.kind {
        StatementKind::Pack(statements) => {
            for s in statements {
                visit(ctx, s);
            }
        }
        StatementKind::SetInfo(attribute) => set_info(ctx, attribute, statement.loc),
        StatementKind::Prove(_) => prove(ctx, statement.loc),
        _ => (),
    }
}

/// Reports the fields that were never declared: one warning listing the missing wanted fields,
/// and one error listing the missing required fields.
pub fn finalize<D: DiagnosticContext + ?Sized>(ctx: &mut D) {
    if !ctx.check_headers() {
        return;
    }
    let lang = ctx.input_language();
    let headers = ctx.header_state();
    let missing = |fields: &[Field]| -> Vec<&'static str> {
        fields
            .iter()
            .filter(|f| !headers.contains(**f))
            .map(|f| f.name(lang))
            .collect()
    };
    let missing_wanted = missing(wanted(lang));
    let missing_required = missing(required(lang));

    if !missing_wanted.is_empty() {
        ctx.warn(None, HeaderError::MissingWanted(missing_wanted).to_string());
    }
    if !missing_required.is_empty() {
        ctx.error(None, HeaderError::MissingRequired(missing_required).to_string());
    }
}

fn set_info<D: DiagnosticContext + ?Sized>(ctx: &mut D, attribute: &Term, loc: Option<Span>) {
    match parse(ctx.input_language(), attribute) {
        HeaderParse::NotAHeader => (),
        HeaderParse::Malformed(at, err) => ctx.error(at, err.to_string()),
        HeaderParse::Recognized(field, value) => {
            check_allowed(ctx, loc, field, &value);
            log::debug!("header {} set to '{}'", field, value);
            let headers = ctx.header_state().set(field, value);
            ctx.set_header_state(headers);
        }
    }
}

/// Checks a header value against the configured allow-lists. The value is recorded even if it is
/// not allowed.
fn check_allowed<D: DiagnosticContext + ?Sized>(
    ctx: &mut D,
    loc: Option<Span>,
    field: Field,
    value: &str,
) {
    let (allowed, err): (&[String], fn(String) -> HeaderError) = match field {
        Field::ProblemLicense => (ctx.allowed_licenses(), HeaderError::LicenseNotAllowed),
        Field::LangVersion => (ctx.allowed_lang_versions(), HeaderError::LangVersionNotAllowed),
        _ => return,
    };
    if !allowed.is_empty() && !allowed.iter().any(|a| a == value) {
        ctx.error(loc, err(value.to_owned()).to_string());
    }
}

fn prove<D: DiagnosticContext + ?Sized>(ctx: &mut D, loc: Option<Span>) {
    match ctx.header_state().get(Field::ProblemStatus) {
        Some(status) => {
            log::debug!("solve request consumes status '{}'", status);
            let headers = ctx.header_state().remove(Field::ProblemStatus);
            ctx.set_header_state(headers);
        }
        None => {
            let name = Field::ProblemStatus.name(ctx.input_language());
            ctx.error(loc, HeaderError::MissingStatus(name).to_string());
        }
    }
}
