use super::{Rc, Span};

/// A term, together with the span of the input it was read from.
///
/// Terms are produced by the surface parsers and only inspected structurally by this crate. They
/// should always be allocated through a [`TermPool`](super::TermPool), so that equal terms share
/// an allocation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Term {
    /// The shape of the term.
    pub kind: TermKind,

    /// Where the term appeared in the input, if known.
    pub loc: Option<Span>,
}

/// The different shapes a term can have.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TermKind {
    /// A built-in constant, like `true` or the sort of types.
    Builtin(Builtin),

    /// A namespaced symbol. Value literals (numerals, decimals, strings, ...) are also symbols,
    /// living in the value namespace, whose name is the literal text.
    Symbol(Symbol),

    /// An application of a function (or an attribute keyword) to zero or more terms.
    App(Rc<Term>, Vec<Rc<Term>>),

    /// An application of a boolean connective to zero or more terms.
    Op(Operator, Vec<Rc<Term>>),

    /// A typed annotation `t : ty`. This is also used as a generic pairing combinator, for
    /// example to refine a formula role with extra annotations.
    Colon(Rc<Term>, Rc<Term>),

    /// A binder term, with its bound variables and body.
    Binder(Binder, Vec<Rc<Term>>, Rc<Term>),
}

/// A built-in constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    True,
    False,
    Wildcard,

    /// The sort of types, written `$tType` in TPTP.
    Type,

    /// The sort of propositions.
    Prop,
}

impl_str_conversion_traits!(Builtin {
    True: "true",
    False: "false",
    Wildcard: "_",
    Type: "Type",
    Prop: "Prop",
});

/// A name, qualified by the namespace it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub name: String,
    pub namespace: Namespace,
}

impl Symbol {
    pub fn new(name: impl Into<String>, namespace: Namespace) -> Self {
        Self { name: name.into(), namespace }
    }

    /// Constructs a symbol in the term namespace.
    pub fn term(name: impl Into<String>) -> Self {
        Self::new(name, Namespace::Term)
    }

    /// Constructs a symbol in the attribute namespace.
    pub fn attr(name: impl Into<String>) -> Self {
        Self::new(name, Namespace::Attr)
    }
}

/// The namespace of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Term,
    Sort,

    /// Attribute keywords (like `:source`), and the free-form symbols given as attribute values.
    Attr,

    /// Value literals. The symbol name is the literal text, without any surrounding quotes.
    Value(Value),
}

/// The kind of a value literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Integer,
    Decimal,
    Hexadecimal,
    Binary,
    Rational,
    String,
    Bitvector,
}

/// A boolean connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Xor,
    Implies,
    Equiv,
    Equals,
}

impl_str_conversion_traits!(Operator {
    Not: "not",
    And: "and",
    Or: "or",
    Xor: "xor",
    Implies: "=>",
    Equiv: "<=>",
    Equals: "=",
});

/// A binder: a quantifier, `lambda`, or a dependent product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binder {
    Forall,
    Exists,
    Lambda,
    Pi,
}

impl_str_conversion_traits!(Binder {
    Forall: "forall",
    Exists: "exists",
    Lambda: "lambda",
    Pi: "pi",
});

impl Term {
    pub fn new(kind: TermKind) -> Self {
        Self { kind, loc: None }
    }

    /// Attaches a span to this term.
    pub fn at(mut self, loc: impl Into<Option<Span>>) -> Self {
        self.loc = loc.into();
        self
    }

    /// Constructs a new symbol term in the term namespace.
    pub fn new_symbol(name: impl Into<String>) -> Self {
        Self::new(TermKind::Symbol(Symbol::term(name)))
    }

    /// Constructs a new sort symbol.
    pub fn new_sort(name: impl Into<String>) -> Self {
        Self::new(TermKind::Symbol(Symbol::new(name, Namespace::Sort)))
    }

    /// Constructs a new symbol in the attribute namespace. This is used both for attribute
    /// keywords and for free-form attribute values.
    pub fn new_attribute(name: impl Into<String>) -> Self {
        Self::new(TermKind::Symbol(Symbol::attr(name)))
    }

    /// Constructs a new value literal from its text.
    pub fn new_value(kind: Value, text: impl Into<String>) -> Self {
        Self::new(TermKind::Symbol(Symbol::new(text, Namespace::Value(kind))))
    }

    /// Constructs a new string literal. `contents` should not include the surrounding quotes.
    pub fn new_string(contents: impl Into<String>) -> Self {
        Self::new_value(Value::String, contents)
    }

    /// Constructs a new integer literal.
    pub fn new_integer(text: impl Into<String>) -> Self {
        Self::new_value(Value::Integer, text)
    }

    /// Constructs a new decimal literal.
    pub fn new_decimal(text: impl Into<String>) -> Self {
        Self::new_value(Value::Decimal, text)
    }

    pub fn new_app(function: Rc<Term>, args: Vec<Rc<Term>>) -> Self {
        Self::new(TermKind::App(function, args))
    }

    pub fn new_op(op: Operator, args: Vec<Rc<Term>>) -> Self {
        Self::new(TermKind::Op(op, args))
    }

    pub fn new_colon(term: Rc<Term>, ty: Rc<Term>) -> Self {
        Self::new(TermKind::Colon(term, ty))
    }

    pub fn new_binder(binder: Binder, vars: Vec<Rc<Term>>, body: Rc<Term>) -> Self {
        Self::new(TermKind::Binder(binder, vars, body))
    }

    /// Tries to extract the symbol from a term. Returns `Some` if the term is a symbol, in any
    /// namespace.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match &self.kind {
            TermKind::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Tries to extract the text of a value literal of the given kind.
    pub fn as_value(&self, kind: Value) -> Option<&str> {
        match self.as_symbol()? {
            Symbol { name, namespace: Namespace::Value(k) } if *k == kind => Some(name.as_str()),
            _ => None,
        }
    }

    /// Tries to extract the contents of a string literal.
    pub fn as_string_literal(&self) -> Option<&str> {
        self.as_value(Value::String)
    }

    /// Tries to extract the text of an integer literal.
    pub fn as_integer_literal(&self) -> Option<&str> {
        self.as_value(Value::Integer)
    }

    /// Tries to unwrap a typed annotation `t : ty`, returning `t` and `ty`.
    pub fn as_colon(&self) -> Option<(&Rc<Term>, &Rc<Term>)> {
        match &self.kind {
            TermKind::Colon(t, ty) => Some((t, ty)),
            _ => None,
        }
    }

    /// Tries to unwrap an attribute, returning its keyword and its arguments.
    ///
    /// An attribute is either an application whose head is a symbol in the attribute namespace, as
    /// in `(:source |...|)`, or such a symbol on its own, in which case it has no arguments.
    pub fn as_attribute(&self) -> Option<(&str, &[Rc<Term>])> {
        match &self.kind {
            TermKind::Symbol(Symbol { name, namespace: Namespace::Attr }) => {
                Some((name.as_str(), &[][..]))
            }
            TermKind::App(head, args) => match head.as_symbol()? {
                Symbol { name, namespace: Namespace::Attr } => {
                    Some((name.as_str(), args.as_slice()))
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns `true` if the term is the boolean constant `true`.
    pub fn is_bool_true(&self) -> bool {
        matches!(self.kind, TermKind::Builtin(Builtin::True))
    }
}
