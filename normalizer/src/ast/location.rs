use std::fmt;

/// A position in the input, represented by the line and column numbers, both starting at 1.
pub type Position = (usize, usize);

/// A region of a single input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A span covering a single position.
    pub fn point(at: Position) -> Self {
        Self { start: at, end: at }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (line, column) = self.start;
        write!(f, "{}:{}", line, column)
    }
}

/// A full location: the file an input was read from, plus an optional span inside it.
///
/// Spans attached to terms and statements are local to the file being processed; they are only
/// combined with the file name when a diagnostic is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: String,
    pub span: Option<Span>,
}

impl Location {
    pub fn new(file: impl Into<String>, span: Option<Span>) -> Self {
        Self { file: file.into(), span }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.span {
            Some(span) => write!(f, "{}:{}", self.file, span),
            None => write!(f, "{}", self.file),
        }
    }
}
