use std::fmt;

/// A byte range `[start, end)` into the rope.
///
/// All parsed nodes store spans rather than copied text, enabling lossless
/// round-trip: slicing the rope with any span reproduces the exact source.
///
/// Absence is expressed with [`Span::NULL`] rather than `Option<Span>`, so a
/// field that matched nothing (`NULL`) stays distinguishable from a field that
/// matched an empty run (`start == end`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// The absent span.
    pub const NULL: Span = Span {
        start: usize::MAX,
        end: usize::MAX,
    };

    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end). A null span is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    #[must_use]
    pub fn is_not_null(self) -> bool {
        !self.is_null()
    }

    /// Converts to `Some(self)` unless null.
    #[must_use]
    pub fn present(self) -> Option<Span> {
        if self.is_null() { None } else { Some(self) }
    }

    /// Sub-span relative to this span's start.
    #[must_use]
    pub fn sub(self, from: usize, to: usize) -> Span {
        Span::new(self.start + from, self.start + to)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "NULL")
        } else {
            write!(f, "[{}, {})", self.start, self.end)
        }
    }
}

/// Number of trailing `\r`/`\n` bytes on `text`.
pub fn eol_len(text: &str) -> usize {
    text.len() - text.trim_end_matches(['\r', '\n']).len()
}
