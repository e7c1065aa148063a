use super::{Operator, Rc, Span, Symbol, Term, TermPool};

/// A canonical statement.
///
/// Every construct of every surface language is translated into one of these. A statement is never
/// modified after being built: the validation pipeline takes it by value and hands it back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// A human-readable name, like the name of a TPTP formula.
    pub name: Option<String>,

    /// What the statement does.
    pub kind: StatementKind,

    /// Provenance or restriction metadata. For instance, the role of a TPTP formula, or the
    /// boolean marker distinguishing a scoped proof attempt (`false`) from the assumption that is
    /// kept after it (`true`).
    pub attr: Option<Rc<Term>>,

    /// Where the statement appeared in the input, if known.
    pub loc: Option<Span>,
}

/// The descriptor of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    /// A statement that expands into an ordered sequence of statements. Translations only ever
    /// produce flat packs, so consumers need at most one level of expansion.
    Pack(Vec<Statement>),

    /// Opens `n` new assertion scopes.
    Push(usize),

    /// Discards the `n` innermost assertion scopes, and everything asserted in them.
    Pop(usize),

    /// A solve request: attempt to resolve the current set of assumptions, together with the
    /// given local assumptions (which are empty for a plain `check-sat`).
    Prove(Vec<Rc<Term>>),

    /// Declares a goal.
    Consequent(Rc<Term>),

    /// Declares an assumed or asserted term.
    Antecedent(Rc<Term>),

    /// A reference to an external resource.
    Include(String),

    SetLogic(String),
    GetInfo(String),

    /// Sets an info attribute. The term is the attribute itself: either a keyword applied to its
    /// value, like `(:source |...|)`, or a bare keyword when no value is given. Use
    /// [`Term::as_attribute`] to recover the key and the value.
    SetInfo(Rc<Term>),

    GetOption(String),

    /// Sets a solver option. The term has the same shape as in [`StatementKind::SetInfo`].
    SetOption(Rc<Term>),

    /// Defines an identifier.
    Def(Symbol, Rc<Term>),

    /// Declares the type or sort of an identifier.
    Decl(Symbol, Rc<Term>),

    Inductive(Inductive),

    GetProof,
    GetUnsatCore,
    GetValue(Vec<Rc<Term>>),
    GetAssignment,
    GetAssertions,
    GetModel,
    Echo(String),
    Reset,
    ResetAssertions,

    /// Ends the session.
    Exit,
}

/// An inductive type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inductive {
    pub name: Symbol,

    /// The type parameters.
    pub vars: Vec<Rc<Term>>,

    /// Each constructor, with the types of its arguments.
    pub constructors: Vec<(Symbol, Vec<Rc<Term>>)>,

    pub loc: Option<Span>,
}

impl Statement {
    pub fn new(kind: StatementKind) -> Self {
        Self { name: None, kind, attr: None, loc: None }
    }

    /// Sets the name of this statement.
    pub fn named(mut self, name: impl Into<Option<String>>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the provenance annotation of this statement.
    pub fn with_attr(mut self, attr: impl Into<Option<Rc<Term>>>) -> Self {
        self.attr = attr.into();
        self
    }

    /// Attaches a span to this statement.
    pub fn at(mut self, loc: impl Into<Option<Span>>) -> Self {
        self.loc = loc.into();
        self
    }

    pub fn pack(statements: Vec<Statement>) -> Self {
        Self::new(StatementKind::Pack(statements))
    }

    pub fn push(n: usize) -> Self {
        Self::new(StatementKind::Push(n))
    }

    pub fn pop(n: usize) -> Self {
        Self::new(StatementKind::Pop(n))
    }

    /// A solve request with no local assumptions.
    pub fn prove() -> Self {
        Self::prove_assuming(Vec::new())
    }

    /// A solve request under the given local assumptions.
    pub fn prove_assuming(assumptions: Vec<Rc<Term>>) -> Self {
        Self::new(StatementKind::Prove(assumptions))
    }

    pub fn consequent(term: Rc<Term>) -> Self {
        Self::new(StatementKind::Consequent(term))
    }

    pub fn antecedent(term: Rc<Term>) -> Self {
        Self::new(StatementKind::Antecedent(term))
    }

    /// A reference to `path`. If `restrictions` is not empty, their conjunction is attached as the
    /// statement's annotation.
    pub fn include(
        pool: &mut dyn TermPool,
        path: impl Into<String>,
        restrictions: Vec<Rc<Term>>,
    ) -> Self {
        let attr = if restrictions.is_empty() {
            None
        } else {
            Some(pool.add(Term::new_op(Operator::And, restrictions)))
        };
        Self::new(StatementKind::Include(path.into())).with_attr(attr)
    }

    pub fn set_logic(name: impl Into<String>) -> Self {
        Self::new(StatementKind::SetLogic(name.into()))
    }

    pub fn get_info(key: impl Into<String>) -> Self {
        Self::new(StatementKind::GetInfo(key.into()))
    }

    pub fn set_info(attribute: Rc<Term>) -> Self {
        Self::new(StatementKind::SetInfo(attribute))
    }

    pub fn get_option(key: impl Into<String>) -> Self {
        Self::new(StatementKind::GetOption(key.into()))
    }

    pub fn set_option(attribute: Rc<Term>) -> Self {
        Self::new(StatementKind::SetOption(attribute))
    }

    pub fn def(id: Symbol, body: Rc<Term>) -> Self {
        Self::new(StatementKind::Def(id, body))
    }

    pub fn decl(id: Symbol, ty: Rc<Term>) -> Self {
        Self::new(StatementKind::Decl(id, ty))
    }

    pub fn inductive(
        name: Symbol,
        vars: Vec<Rc<Term>>,
        constructors: Vec<(Symbol, Vec<Rc<Term>>)>,
        loc: Option<Span>,
    ) -> Self {
        Self::new(StatementKind::Inductive(Inductive { name, vars, constructors, loc })).at(loc)
    }

    pub fn get_proof() -> Self {
        Self::new(StatementKind::GetProof)
    }

    pub fn get_unsat_core() -> Self {
        Self::new(StatementKind::GetUnsatCore)
    }

    pub fn get_value(terms: Vec<Rc<Term>>) -> Self {
        Self::new(StatementKind::GetValue(terms))
    }

    pub fn get_assignment() -> Self {
        Self::new(StatementKind::GetAssignment)
    }

    pub fn get_assertions() -> Self {
        Self::new(StatementKind::GetAssertions)
    }

    pub fn get_model() -> Self {
        Self::new(StatementKind::GetModel)
    }

    pub fn echo(message: impl Into<String>) -> Self {
        Self::new(StatementKind::Echo(message.into()))
    }

    pub fn reset() -> Self {
        Self::new(StatementKind::Reset)
    }

    pub fn reset_assertions() -> Self {
        Self::new(StatementKind::ResetAssertions)
    }

    pub fn exit() -> Self {
        Self::new(StatementKind::Exit)
    }

    /// A clause in clause normal form, which is assumed as the disjunction of its literals.
    pub fn clause(pool: &mut dyn TermPool, literals: Vec<Rc<Term>>) -> Self {
        Self::antecedent(pool.add(Term::new_op(Operator::Or, literals)))
    }

    /// The SMT-LIB `check-sat` command.
    pub fn check_sat() -> Self {
        Self::prove()
    }

    /// The SMT-LIB `assert` command.
    pub fn assert(term: Rc<Term>) -> Self {
        Self::antecedent(term)
    }

    /// States a goal and immediately asks for its proof.
    pub fn goal(term: Rc<Term>) -> Self {
        Self::pack(vec![Self::consequent(term), Self::prove()])
    }

    /// Returns `true` if this statement is a solve request.
    pub fn is_prove(&self) -> bool {
        matches!(self.kind, StatementKind::Prove(_))
    }

    /// Expands every pack, returning the flat sequence of statements it stands for. The name and
    /// annotation of a pack are not carried over to its elements.
    pub fn flatten(self) -> Vec<Statement> {
        match self.kind {
            StatementKind::Pack(statements) => {
                statements.into_iter().flat_map(Statement::flatten).collect()
            }
            _ => vec![self],
        }
    }
}
