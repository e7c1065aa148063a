//! The surface input languages.

use std::path::Path;

/// An input language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// SMT-LIB version 2.
    Smtlib2,

    /// The TPTP family of formats (`cnf`, `fof`, `tff`, `thf`).
    Tptp,

    /// DIMACS CNF.
    Dimacs,

    /// Incremental DIMACS, which adds assumption lines to DIMACS.
    ICnf,

    /// The native format of the Zipperposition prover.
    Zf,
}

impl_str_conversion_traits!(Language {
    Smtlib2: "smt2",
    Tptp: "tptp",
    Dimacs: "dimacs",
    ICnf: "icnf",
    Zf: "zf",
});

impl Language {
    /// Guesses the language of a file from its extension. The extension may be given with or
    /// without the leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.strip_prefix('.').unwrap_or(extension) {
            "smt2" | "smt" => Some(Self::Smtlib2),
            "p" | "ax" | "tptp" => Some(Self::Tptp),
            "cnf" => Some(Self::Dimacs),
            "icnf" => Some(Self::ICnf),
            "zf" => Some(Self::Zf),
            _ => None,
        }
    }

    /// Guesses the language of a file from its path.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        Self::from_extension(extension)
    }
}
