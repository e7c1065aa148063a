use super::{count, datatype, or_degrade, string, symbol, typed_symbol, LanguageAdapter};
use super::{SurfaceStatement, TranslationWarning};
use crate::{
    ast::{Rc, Span, Statement, Term, TermPool},
    context::DiagnosticContext,
    Language,
};
use std::str::FromStr;

/// The SMT-LIB 2 adapter.
#[derive(Debug, Clone, Copy)]
pub struct Smtlib2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Assert,
    CheckSat,
    CheckSatAssuming,
    Push,
    Pop,
    SetLogic,
    SetInfo,
    GetInfo,
    SetOption,
    GetOption,
    DeclareFun,
    DeclareConst,
    DeclareSort,
    DefineFun,
    DeclareDatatype,
    GetProof,
    GetUnsatCore,
    GetValue,
    GetAssignment,
    GetAssertions,
    GetModel,
    Echo,
    Reset,
    ResetAssertions,
    Exit,
}

impl_str_conversion_traits!(Command {
    Assert: "assert",
    CheckSat: "check-sat",
    CheckSatAssuming: "check-sat-assuming",
    Push: "push",
    Pop: "pop",
    SetLogic: "set-logic",
    SetInfo: "set-info",
    GetInfo: "get-info",
    SetOption: "set-option",
    GetOption: "get-option",
    DeclareFun: "declare-fun",
    DeclareConst: "declare-const",
    DeclareSort: "declare-sort",
    DefineFun: "define-fun",
    DeclareDatatype: "declare-datatype",
    GetProof: "get-proof",
    GetUnsatCore: "get-unsat-core",
    GetValue: "get-value",
    GetAssignment: "get-assignment",
    GetAssertions: "get-assertions",
    GetModel: "get-model",
    Echo: "echo",
    Reset: "reset",
    ResetAssertions: "reset-assertions",
    Exit: "exit",
});

impl LanguageAdapter for Smtlib2 {
    fn language(&self) -> Language {
        Language::Smtlib2
    }

    fn translate(
        &self,
        _: &mut dyn TermPool,
        ctx: &mut dyn DiagnosticContext,
        item: &SurfaceStatement,
    ) -> Statement {
        let result = match Command::from_str(&item.kind) {
            Ok(command) => command_statement(command, &item.args, item.loc)
                .ok_or_else(|| TranslationWarning::MalformedCommand(item.kind.clone())),
            Err(()) => Err(TranslationWarning::UnknownCommand(item.kind.clone())),
        };
        or_degrade(ctx, item.loc, result.map(|s| s.at(item.loc)))
    }
}

/// The keyword of an attribute, like `:produce-proofs`.
fn keyword(term: &Term) -> Option<String> {
    match term.as_attribute()? {
        (key, []) => Some(key.to_owned()),
        _ => None,
    }
}

fn command_statement(command: Command, args: &[Rc<Term>], loc: Option<Span>) -> Option<Statement> {
    let statement = match (command, args) {
        (Command::Assert, [t]) => Statement::assert(t.clone()),
        (Command::CheckSat, []) => Statement::check_sat(),
        (Command::CheckSatAssuming, assumptions) => Statement::prove_assuming(assumptions.to_vec()),

        // `(push)` is a shorthand for `(push 1)`
        (Command::Push, []) => Statement::push(1),
        (Command::Push, [n]) => Statement::push(count(n)?),
        (Command::Pop, []) => Statement::pop(1),
        (Command::Pop, [n]) => Statement::pop(count(n)?),

        (Command::SetLogic, [logic]) => Statement::set_logic(symbol(logic)?.name),
        (Command::SetInfo, [attribute]) if attribute.as_attribute().is_some() => {
            Statement::set_info(attribute.clone())
        }
        (Command::GetInfo, [key]) => Statement::get_info(keyword(key)?),
        (Command::SetOption, [attribute]) if attribute.as_attribute().is_some() => {
            Statement::set_option(attribute.clone())
        }
        (Command::GetOption, [key]) => Statement::get_option(keyword(key)?),

        (Command::DeclareFun | Command::DeclareConst | Command::DeclareSort, [declaration]) => {
            let (f, ty) = typed_symbol(declaration)?;
            Statement::decl(f, ty)
        }
        (Command::DefineFun, [f, body]) => Statement::def(symbol(f)?, body.clone()),
        (Command::DeclareDatatype, args) => datatype(args, loc)?,

        (Command::GetProof, []) => Statement::get_proof(),
        (Command::GetUnsatCore, []) => Statement::get_unsat_core(),
        (Command::GetValue, terms) if !terms.is_empty() => Statement::get_value(terms.to_vec()),
        (Command::GetAssignment, []) => Statement::get_assignment(),
        (Command::GetAssertions, []) => Statement::get_assertions(),
        (Command::GetModel, []) => Statement::get_model(),
        (Command::Echo, [message]) => Statement::echo(string(message)?),
        (Command::Reset, []) => Statement::reset(),
        (Command::ResetAssertions, []) => Statement::reset_assertions(),
        (Command::Exit, []) => Statement::exit(),
        _ => return None,
    };
    Some(statement)
}
