use super::HeaderError;
use crate::{
    ast::{Namespace, Span, Symbol, Term, Value},
    Language,
};
use std::fmt;

/// A piece of problem metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    LangVersion,
    ProblemVersion,
    ProblemSource,
    ProblemLicense,
    ProblemCategory,

    /// The expected result of solving the problem.
    ProblemStatus,
}

/// The result of trying to read a header from an attribute term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderParse {
    /// The term declares `field` with the given value, exactly as written in the input.
    Recognized(Field, String),

    /// The term is a header attribute, but its value has the wrong shape.
    Malformed(Option<Span>, HeaderError),

    /// The term is not a header attribute in this language. This is the common case.
    NotAHeader,
}

/// The shape a header value must have.
#[derive(Debug, Clone, Copy)]
enum Shape {
    Decimal,
    AttributeSymbol,
    String,
    Status,
}

impl Shape {
    /// Returns the value if `term` has this shape.
    fn extract(self, term: &Term) -> Option<&str> {
        match self {
            Shape::Decimal => term.as_value(Value::Decimal),
            Shape::String => term.as_string_literal(),
            Shape::AttributeSymbol => match term.as_symbol()? {
                Symbol { name, namespace: Namespace::Attr } => Some(name.as_str()),
                _ => None,
            },
            Shape::Status => {
                let name = term.as_symbol()?.name.as_str();
                matches!(name, "sat" | "unsat" | "unknown").then_some(name)
            }
        }
    }

    fn error(self) -> HeaderError {
        match self {
            Shape::Decimal => HeaderError::ExpectedVersion,
            Shape::AttributeSymbol => HeaderError::ExpectedSymbol,
            Shape::String => HeaderError::ExpectedString,
            Shape::Status => HeaderError::ExpectedStatus,
        }
    }
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::LangVersion,
        Field::ProblemVersion,
        Field::ProblemSource,
        Field::ProblemLicense,
        Field::ProblemCategory,
        Field::ProblemStatus,
    ];

    /// The attribute keyword declaring this field, in languages that embed metadata.
    pub fn attribute(self, lang: Option<Language>) -> Option<&'static str> {
        match (lang?, self) {
            (Language::Smtlib2, Field::LangVersion) => Some(":smt-lib-version"),
            (Language::Smtlib2, Field::ProblemSource) => Some(":source"),
            (Language::Smtlib2, Field::ProblemLicense) => Some(":license"),
            (Language::Smtlib2, Field::ProblemCategory) => Some(":category"),
            (Language::Smtlib2, Field::ProblemStatus) => Some(":status"),
            _ => None,
        }
    }

    /// The name of this field, as it should appear in diagnostics for the given language.
    pub fn name(self, lang: Option<Language>) -> &'static str {
        self.attribute(lang).unwrap_or_else(|| self.generic_name())
    }

    fn generic_name(self) -> &'static str {
        match self {
            Field::LangVersion => "language version",
            Field::ProblemVersion => "problem version",
            Field::ProblemSource => "problem source",
            Field::ProblemLicense => "problem license",
            Field::ProblemCategory => "problem category",
            Field::ProblemStatus => "problem status",
        }
    }

    fn shape(self) -> Shape {
        match self {
            Field::LangVersion | Field::ProblemVersion => Shape::Decimal,
            Field::ProblemSource => Shape::AttributeSymbol,
            Field::ProblemLicense | Field::ProblemCategory => Shape::String,
            Field::ProblemStatus => Shape::Status,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.generic_name())
    }
}

/// Tries to read a header from an attribute term of the given language.
pub fn parse(lang: Option<Language>, term: &Term) -> HeaderParse {
    match lang {
        Some(Language::Smtlib2) => parse_attribute(lang, term),
        // No other language embeds metadata for now
        _ => HeaderParse::NotAHeader,
    }
}

fn parse_attribute(lang: Option<Language>, term: &Term) -> HeaderParse {
    let Some((key, args)) = term.as_attribute() else {
        return HeaderParse::NotAHeader;
    };
    let Some(field) = Field::ALL.into_iter().find(|f| f.attribute(lang) == Some(key)) else {
        return HeaderParse::NotAHeader;
    };
    let shape = field.shape();
    match args {
        [value] => match shape.extract(value) {
            Some(v) => HeaderParse::Recognized(field, v.to_owned()),
            None => HeaderParse::Malformed(value.loc.or(term.loc), shape.error()),
        },
        // A missing status is reported like any other wrong status
        [] if field == Field::ProblemStatus => HeaderParse::Malformed(term.loc, shape.error()),
        [] => HeaderParse::Malformed(term.loc, HeaderError::EmptyValue(key.to_owned())),
        [first, ..] => HeaderParse::Malformed(first.loc.or(term.loc), shape.error()),
    }
}
