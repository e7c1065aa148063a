use super::{or_degrade, string, typed_symbol, LanguageAdapter, SurfaceStatement};
use super::TranslationWarning;
use crate::{
    ast::{Operator, Rc, Span, Statement, Term, TermPool},
    context::DiagnosticContext,
    Language,
};
use std::str::FromStr;

/// The TPTP adapter.
#[derive(Debug, Clone, Copy)]
pub struct Tptp;

/// The role of a TPTP annotated formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Axiom,
    Hypothesis,
    Definition,
    Lemma,
    Theorem,
    Assumption,
    Conjecture,
    NegatedConjecture,
    Type,
    Plain,
    Unknown,
    FiDomain,
    FiFunctors,
    FiPredicates,
}

impl_str_conversion_traits!(Role {
    Axiom: "axiom",
    Hypothesis: "hypothesis",
    Definition: "definition",
    Lemma: "lemma",
    Theorem: "theorem",
    Assumption: "assumption",
    Conjecture: "conjecture",
    NegatedConjecture: "negated_conjecture",
    Type: "type",
    Plain: "plain",
    Unknown: "unknown",
    FiDomain: "fi_domain",
    FiFunctors: "fi_functors",
    FiPredicates: "fi_predicates",
});

impl LanguageAdapter for Tptp {
    fn language(&self) -> Language {
        Language::Tptp
    }

    fn translate(
        &self,
        pool: &mut dyn TermPool,
        ctx: &mut dyn DiagnosticContext,
        item: &SurfaceStatement,
    ) -> Statement {
        match (item.kind.as_str(), item.args.as_slice()) {
            ("include", [path, restrictions @ ..]) => {
                let result = string(path)
                    .map(|path| Statement::include(pool, path, restrictions.to_vec()).at(item.loc))
                    .ok_or_else(|| TranslationWarning::MalformedCommand(item.kind.clone()));
                or_degrade(ctx, item.loc, result)
            }
            (role, [formula]) => annotated_formula(
                pool,
                ctx,
                item.name.as_deref(),
                role,
                formula.clone(),
                item.annotation.clone(),
                item.loc,
            ),
            _ => {
                let warning = TranslationWarning::MalformedCommand(item.kind.clone());
                or_degrade(ctx, item.loc, Err(warning))
            }
        }
    }
}

/// Translates an annotated formula according to its role.
///
/// Assumed roles become a single antecedent. Conjectures (and assumptions, which must also be
/// proved) become a scoped proof attempt followed by the assumption of the formula: the statement
/// inside the scope is tagged with `false`, and the one that is kept is tagged with `true`.
/// Informational roles become an empty pack. Unknown roles also do, with a warning.
///
/// The resulting statement is named after `name` if it is a symbol, and its annotation is the
/// role as an attribute symbol, paired with `annotation` when one is given.
pub fn annotated_formula(
    pool: &mut dyn TermPool,
    ctx: &mut dyn DiagnosticContext,
    name: Option<&Term>,
    role: &str,
    formula: Rc<Term>,
    annotation: Option<Rc<Term>>,
    loc: Option<Span>,
) -> Statement {
    let name = name.and_then(Term::as_symbol).map(|s| s.name.clone());
    let provenance = {
        let role = pool.add(Term::new_attribute(role));
        match annotation {
            Some(annotation) => pool.add(Term::new_colon(role, annotation)),
            None => role,
        }
    };
    let exploratory = pool.bool_false();
    let permanent = pool.bool_true();

    let statement = match Role::from_str(role) {
        Ok(Role::Axiom | Role::Hypothesis | Role::Definition | Role::Lemma | Role::Theorem) => {
            Statement::antecedent(formula)
        }
        Ok(Role::Assumption | Role::Conjecture) => Statement::pack(vec![
            Statement::push(1).at(loc),
            Statement::consequent(formula.clone()).with_attr(exploratory).at(loc),
            Statement::prove().at(loc),
            Statement::pop(1).at(loc),
            Statement::antecedent(formula).with_attr(permanent).at(loc),
        ]),
        Ok(Role::NegatedConjecture) => {
            let negated = pool.add(Term::new_op(Operator::Not, vec![formula.clone()]));
            Statement::pack(vec![
                Statement::push(1).at(loc),
                Statement::antecedent(formula).with_attr(exploratory).at(loc),
                Statement::prove().at(loc),
                Statement::pop(1).at(loc),
                Statement::antecedent(negated).with_attr(permanent).at(loc),
            ])
        }
        Ok(Role::Type) => match typed_symbol(&formula) {
            Some((symbol, ty)) => Statement::decl(symbol, ty),
            None => {
                let warning = TranslationWarning::BadTypeDeclaration(formula.to_string());
                ctx.warn(loc, warning.to_string());
                Statement::pack(Vec::new())
            }
        },
        Ok(
            Role::Plain | Role::Unknown | Role::FiDomain | Role::FiFunctors | Role::FiPredicates,
        ) => Statement::pack(Vec::new()),
        Err(()) => {
            ctx.warn(loc, TranslationWarning::UnknownRole(role.to_owned()).to_string());
            Statement::pack(Vec::new())
        }
    };
    statement.named(name).with_attr(provenance).at(loc)
}
