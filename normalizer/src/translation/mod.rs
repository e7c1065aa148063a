//! Translation of surface statements into canonical statements, one adapter per input language.

mod dimacs;
mod error;
mod smtlib2;
mod tptp;
mod zf;


pub use dimacs::Dimacs;
pub use error::TranslationWarning;
pub use smtlib2::Smtlib2;
pub use tptp::{annotated_formula, Role, Tptp};
pub use zf::Zf;

use crate::{
    ast::{Rc, Span, Statement, Symbol, Term, TermKind, TermPool},
    context::DiagnosticContext,
    Language,
};

/// A statement as produced by a surface parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceStatement {
    /// The name given to the statement, if any, like the name of a TPTP formula.
    pub name: Option<Rc<Term>>,

    /// The command keyword (`assert`, `check-sat`, `clause`, ...) or, for TPTP formulas, the role.
    pub kind: String,

    pub args: Vec<Rc<Term>>,

    /// An extra annotation term, like the source annotation of a TPTP formula.
    pub annotation: Option<Rc<Term>>,

    pub loc: Option<Span>,
}

impl SurfaceStatement {
    pub fn new(kind: impl Into<String>, args: Vec<Rc<Term>>) -> Self {
        Self {
            name: None,
            kind: kind.into(),
            args,
            annotation: None,
            loc: None,
        }
    }

    pub fn named(mut self, name: Rc<Term>) -> Self {
        self.name = Some(name);
        self
    }

    pub fn annotated(mut self, annotation: Rc<Term>) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn at(mut self, loc: impl Into<Option<Span>>) -> Self {
        self.loc = loc.into();
        self
    }
}

/// Translates the statements of one surface language.
pub trait LanguageAdapter {
    fn language(&self) -> Language;

    /// Translates a surface statement. Problems are reported to `ctx` as warnings, and the
    /// offending statement becomes an empty pack.
    fn translate(
        &self,
        pool: &mut dyn TermPool,
        ctx: &mut dyn DiagnosticContext,
        item: &SurfaceStatement,
    ) -> Statement;
}

/// Returns the adapter for the given language.
pub fn adapter(lang: Language) -> &'static dyn LanguageAdapter {
    match lang {
        Language::Smtlib2 => &Smtlib2,
        Language::Tptp => &Tptp,
        Language::Dimacs => &Dimacs { incremental: false },
        Language::ICnf => &Dimacs { incremental: true },
        Language::Zf => &Zf,
    }
}

/// Translates a surface statement of the given language.
pub fn translate(
    lang: Language,
    pool: &mut dyn TermPool,
    ctx: &mut dyn DiagnosticContext,
    item: &SurfaceStatement,
) -> Statement {
    adapter(lang).translate(pool, ctx, item)
}

/// Unwraps a translation result, reporting the warning and degrading to an empty pack on failure.
fn or_degrade(
    ctx: &mut dyn DiagnosticContext,
    loc: Option<Span>,
    result: Result<Statement, TranslationWarning>,
) -> Statement {
    result.unwrap_or_else(|warning| {
        ctx.warn(loc, warning.to_string());
        Statement::pack(Vec::new()).at(loc)
    })
}

fn symbol(term: &Term) -> Option<Symbol> {
    term.as_symbol().cloned()
}

/// Unwraps a typed symbol `f : ty`.
fn typed_symbol(term: &Term) -> Option<(Symbol, Rc<Term>)> {
    let (f, ty) = term.as_colon()?;
    Some((symbol(f)?, ty.clone()))
}

/// Reads the text of a string literal argument.
fn string(term: &Term) -> Option<String> {
    term.as_string_literal().map(str::to_owned)
}

/// Reads a scope count, given as a numeral.
fn count(term: &Term) -> Option<usize> {
    term.as_integer_literal()?.parse().ok()
}

/// Builds an inductive type from a name symbol followed by its constructors. Each constructor is
/// either a bare symbol or a symbol applied to the types of its arguments.
fn datatype(args: &[Rc<Term>], loc: Option<Span>) -> Option<Statement> {
    let (name, constructors) = args.split_first()?;
    let constructors = constructors
        .iter()
        .map(|c| match &c.kind {
            TermKind::Symbol(s) => Some((s.clone(), Vec::new())),
            TermKind::App(head, fields) => Some((symbol(head)?, fields.clone())),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(Statement::inductive(symbol(name)?, Vec::new(), constructors, loc))
}
