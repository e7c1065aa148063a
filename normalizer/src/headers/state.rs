use super::Field;
use crate::Language;
use indexmap::IndexMap;

/// The headers observed so far in an input stream.
///
/// The state is never modified in place: `set` and `remove` return an updated copy, and the
/// owning context swaps it in. Fields are kept in the order they were first declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    fields: IndexMap<Field, String>,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Returns a copy of this state where `field` has the given value. A previous value is
    /// replaced.
    pub fn set(&self, field: Field, value: impl Into<String>) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(field, value.into());
        Self { fields }
    }

    /// Returns a copy of this state without `field`.
    pub fn remove(&self, field: Field) -> Self {
        let mut fields = self.fields.clone();
        fields.shift_remove(&field);
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

/// The fields a problem in the given language must declare.
pub fn required(lang: Option<Language>) -> &'static [Field] {
    match lang {
        Some(Language::Smtlib2) => &[
            Field::LangVersion,
            Field::ProblemSource,
            Field::ProblemCategory,
        ],
        _ => &[],
    }
}

/// The fields a problem in the given language should declare. Default values are assumed for the
/// missing ones.
pub fn wanted(lang: Option<Language>) -> &'static [Field] {
    match lang {
        Some(Language::Smtlib2) => &[Field::ProblemLicense],
        _ => &[],
    }
}
