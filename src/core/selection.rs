use std::ops::RangeInclusive;

/// Zero-based line and column (in characters) within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open range between two positions.
///
/// `start` and `end` are normalised so that `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    pub fn new(start: Position, end: Position) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Selection of whole lines `first..=last`, including the last line break.
    ///
    /// The end sits at column 0 of the line after `last`, so an empty last line
    /// is still part of the span.
    pub fn lines(first: usize, last: usize) -> Self {
        Self::new(Position::new(first, 0), Position::new(last + 1, 0))
    }

    /// A collapsed caret.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Lines touched by the selection.
    ///
    /// A selection ending at column 0 of a later line does not include that line.
    pub fn line_span(&self) -> RangeInclusive<usize> {
        let last = if self.end.line > self.start.line && self.end.column == 0 {
            self.end.line - 1
        } else {
            self.end.line
        };
        self.start.line..=last
    }

    pub fn is_single_line(&self) -> bool {
        let span = self.line_span();
        span.start() == span.end()
    }

    /// Expand an empty caret to the full line it sits on.
    pub fn expand_caret(self) -> Self {
        if self.is_empty() {
            Self::lines(self.start.line, self.start.line)
        } else {
            self
        }
    }
}
