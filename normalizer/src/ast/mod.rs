//! The abstract syntax tree: terms, as handed over by the surface parsers, and the canonical
//! statements they are normalized into.

#[macro_use]
mod macros;
mod location;
mod pool;
mod printer;
mod rc;
mod statement;
mod term;

pub use location::{Location, Position, Span};
pub use pool::{PrimitivePool, TermPool};
pub use rc::Rc;
pub use statement::{Inductive, Statement, StatementKind};
pub use term::{Binder, Builtin, Namespace, Operator, Symbol, Term, TermKind, Value};
