use super::{datatype, or_degrade, string, symbol, typed_symbol, LanguageAdapter};
use super::{SurfaceStatement, TranslationWarning};
use crate::{
    ast::{Statement, Term, TermPool},
    context::DiagnosticContext,
    Language,
};

/// The adapter for the native format of Zipperposition.
#[derive(Debug, Clone, Copy)]
pub struct Zf;

impl LanguageAdapter for Zf {
    fn language(&self) -> Language {
        Language::Zf
    }

    fn translate(
        &self,
        pool: &mut dyn TermPool,
        ctx: &mut dyn DiagnosticContext,
        item: &SurfaceStatement,
    ) -> Statement {
        let statement = match (item.kind.as_str(), item.args.as_slice()) {
            ("goal", [t]) => Some(Statement::goal(t.clone())),
            ("assert", [t]) => Some(Statement::assert(t.clone())),
            ("rewrite", [t]) => {
                let rewrite = pool.add(Term::new_attribute("rewrite"));
                Some(Statement::antecedent(t.clone()).with_attr(rewrite))
            }
            ("decl", [declaration]) => {
                typed_symbol(declaration).map(|(f, ty)| Statement::decl(f, ty))
            }
            ("def", [f, body]) => symbol(f).map(|f| Statement::def(f, body.clone())),
            ("data", args) => datatype(args, item.loc),
            ("include", [path]) => string(path).map(|p| Statement::include(pool, p, Vec::new())),
            ("goal" | "assert" | "rewrite" | "decl" | "def" | "include", _) => None,
            (other, _) => {
                let warning = TranslationWarning::UnknownCommand(other.to_owned());
                return or_degrade(ctx, item.loc, Err(warning));
            }
        };
        let result =
            statement.ok_or_else(|| TranslationWarning::MalformedCommand(item.kind.clone()));
        or_degrade(ctx, item.loc, result.map(|s| s.at(item.loc)))
    }
}
