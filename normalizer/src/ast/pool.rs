//! This module implements `TermPool`, a structure that stores terms and implements hash consing.

use super::{Builtin, Rc, Term, TermKind};
use ahash::AHashSet;
use std::{
    borrow::Borrow,
    hash::{Hash, Hasher},
};

pub trait TermPool {
    /// Returns the term corresponding to the boolean constant `true`.
    fn bool_true(&self) -> Rc<Term>;
    /// Returns the term corresponding to the boolean constant `false`.
    fn bool_false(&self) -> Rc<Term>;
    /// Takes a term and returns a possibly newly allocated `Rc` that references it.
    ///
    /// If the term was not originally in the term pool, it is added to it. Otherwise, this method
    /// just returns an `Rc` pointing to the existing allocation.
    fn add(&mut self, term: Term) -> Rc<Term>;
}

/// `Rc<Term>` hashes by address, so it can't be looked up with a `&Term`. This wrapper hashes and
/// compares by value instead, which lets the storage set be queried with a borrowed `Term`.
#[derive(Clone, Eq)]
struct ByValue(Rc<Term>);

impl PartialEq for ByValue {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl Hash for ByValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.0).hash(state);
    }
}

impl Borrow<Term> for ByValue {
    fn borrow(&self) -> &Term {
        &self.0
    }
}

/// A structure to store and manage all allocated terms.
///
/// If two equal terms are added to a pool, they will be in the same allocation. Note that a term's
/// span is part of its value: the same symbol read at two different places of the input is stored
/// twice.
pub struct PrimitivePool {
    storage: AHashSet<ByValue>,
    bool_true: Rc<Term>,
    bool_false: Rc<Term>,
}

impl Default for PrimitivePool {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimitivePool {
    /// Constructs a new `PrimitivePool`, which already contains the boolean constants.
    pub fn new() -> Self {
        let mut storage = AHashSet::new();
        let [bool_true, bool_false] = [Builtin::True, Builtin::False].map(|b| {
            let term = Rc::new(Term::new(TermKind::Builtin(b)));
            storage.insert(ByValue(term.clone()));
            term
        });
        Self { storage, bool_true, bool_false }
    }

    /// Returns the number of distinct terms stored in the pool.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl TermPool for PrimitivePool {
    fn bool_true(&self) -> Rc<Term> {
        self.bool_true.clone()
    }

    fn bool_false(&self) -> Rc<Term> {
        self.bool_false.clone()
    }

    fn add(&mut self, term: Term) -> Rc<Term> {
        if let Some(ByValue(existing)) = self.storage.get(&term) {
            return existing.clone();
        }
        let result = Rc::new(term);
        self.storage.insert(ByValue(result.clone()));
        result
    }
}
