//! Some useful helper macros.

/// A macro to help build connective terms.
///
/// This macro takes two arguments: the `TermPool` with which to build the term, and an
/// s-expression representing the term to be built. Subterms in that s-expression that are
/// surrounded by `{}` are evaluated as expressions, and they should have type `Rc<Term>`. Only the
/// boolean connectives `not`, `and`, `or`, `xor`, `=>` and `=` can be used as heads.
///
/// # Examples
///
/// Building the term `(or p (not q))`:
/// ```
/// # use normalizer::{ast::*, build_term};
/// let mut pool = PrimitivePool::new();
/// let p = pool.add(Term::new_symbol("p"));
/// let q = pool.add(Term::new_symbol("q"));
/// let t = build_term!(pool, (or {p.clone()} (not {q.clone()})));
/// assert_eq!(t.to_string(), "(or p (not q))");
/// ```
#[macro_export]
macro_rules! build_term {
    (@GET_VARIANT not) => { $crate::ast::Operator::Not };
    (@GET_VARIANT and) => { $crate::ast::Operator::And };
    (@GET_VARIANT or)  => { $crate::ast::Operator::Or };
    (@GET_VARIANT xor) => { $crate::ast::Operator::Xor };
    (@GET_VARIANT =>)  => { $crate::ast::Operator::Implies };
    (@GET_VARIANT =)   => { $crate::ast::Operator::Equals };

    ($pool:expr, {$terminal:expr}) => { $terminal };
    ($pool:expr, ($op:tt $($args:tt)*)) => {{
        let term = $crate::ast::Term::new_op(
            $crate::build_term!(@GET_VARIANT $op),
            vec![ $($crate::build_term!($pool, $args)),* ],
        );
        $pool.add(term)
    }};
}

/// Implements `FromStr` and `Display` for an enum, given a mapping from each variant to a string
/// literal.
///
/// This macros only supports enums that don't hold any data in any of their variants. The error
/// type for the implementation of `FromStr` will be `()`.
///
// The macro is not exported, so a doctest could not reach it
/// ```text
/// impl_str_conversion_traits!(Role {
///     Axiom: "axiom",
///     Conjecture: "conjecture",
/// });
///
/// assert_eq!(Role::from_str("axiom"), Ok(Role::Axiom));
/// assert_eq!(Role::Conjecture.to_string(), "conjecture");
/// ```
macro_rules! impl_str_conversion_traits {
    ($enum_name:ident { $($variant:ident: $str:literal),* $(,)? }) => {
        impl std::str::FromStr for $enum_name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok($enum_name::$variant),)*
                    _ => Err(()),
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let s = match self {
                    $($enum_name::$variant => $str,)*
                };
                write!(f, "{}", s)
            }
        }
    }
}
