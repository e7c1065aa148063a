use super::{or_degrade, LanguageAdapter, SurfaceStatement, TranslationWarning};
use crate::{
    ast::{Statement, TermPool},
    context::DiagnosticContext,
    Language,
};

/// The DIMACS CNF adapter. In incremental mode (iCNF), assumption lines are also accepted.
#[derive(Debug, Clone, Copy)]
pub struct Dimacs {
    pub incremental: bool,
}

impl LanguageAdapter for Dimacs {
    fn language(&self) -> Language {
        if self.incremental {
            Language::ICnf
        } else {
            Language::Dimacs
        }
    }

    fn translate(
        &self,
        pool: &mut dyn TermPool,
        ctx: &mut dyn DiagnosticContext,
        item: &SurfaceStatement,
    ) -> Statement {
        let result = match item.kind.as_str() {
            "clause" => Ok(Statement::clause(pool, item.args.clone())),

            // The problem line only announces sizes
            "p" => Ok(Statement::pack(Vec::new())),

            "a" if self.incremental => Ok(Statement::prove_assuming(item.args.clone())),
            other => Err(TranslationWarning::UnknownCommand(other.to_owned())),
        };
        or_degrade(ctx, item.loc, result.map(|s| s.at(item.loc)))
    }
}
