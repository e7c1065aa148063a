//! Printing terms as s-expressions, for diagnostics and logging.

use super::*;
use std::fmt;

/// Returns `true` if the character can appear in a simple SMT-LIB symbol.
fn is_symbol_character(ch: char) -> bool {
    match ch {
        ch if ch.is_ascii_alphanumeric() => true,
        '+' | '-' | '/' | '*' | '=' | '%' | '?' | '!' | '.' | '$' | '_' | '~' | '&' | '^' | '<'
        | '>' | '@' => true,
        _ => false,
    }
}

fn quote_symbol(symbol: &str) -> String {
    if !symbol.is_empty()
        && symbol.chars().all(is_symbol_character)
        && !symbol.starts_with(|c: char| c.is_ascii_digit())
    {
        symbol.to_owned()
    } else {
        format!("|{}|", symbol)
    }
}

fn escape_string(string: &str) -> String {
    string.replace('"', "\"\"")
}

fn write_s_expr<H, T>(f: &mut fmt::Formatter, head: H, tail: &[T]) -> fmt::Result
where
    H: fmt::Display,
    T: fmt::Display,
{
    write!(f, "({}", head)?;
    for t in tail {
        write!(f, " {}", t)?;
    }
    write!(f, ")")
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.namespace {
            Namespace::Value(Value::String) => write!(f, "\"{}\"", escape_string(&self.name)),
            Namespace::Value(_) => write!(f, "{}", self.name),
            // Keywords are printed as is
            Namespace::Attr if self.name.starts_with(':') => write!(f, "{}", self.name),
            Namespace::Term | Namespace::Sort | Namespace::Attr => {
                write!(f, "{}", quote_symbol(&self.name))
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TermKind::Builtin(b) => write!(f, "{}", b),
            TermKind::Symbol(s) => write!(f, "{}", s),
            TermKind::App(head, args) => write_s_expr(f, head, args),
            TermKind::Op(op, args) => write_s_expr(f, op, args),
            TermKind::Colon(t, ty) => write!(f, "(: {} {})", t, ty),
            TermKind::Binder(binder, vars, body) => {
                write!(f, "({} ", binder)?;
                match vars.as_slice() {
                    [] => write!(f, "()")?,
                    [head, tail @ ..] => write_s_expr(f, head, tail)?,
                }
                write!(f, " {})", body)
            }
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
