use crate::parsing::rope::lines::LineRef;

use super::kinds::{CodeFence, FenceSig};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The raw line, end-of-line characters included.
    pub line: LineRef,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Column of the first non-space character.
    pub indent: usize,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(&self, line: LineRef) -> LineClass {
        let content = line.content();
        let is_blank = content.trim().is_empty();
        let indent = content.len() - content.trim_start_matches([' ', '\t']).len();
        let fence_sig = CodeFence::sig(content);

        LineClass {
            line,
            is_blank,
            indent,
            fence_sig,
        }
    }
}
