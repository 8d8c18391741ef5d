use crate::parsing::rope::span::Span;

use super::kinds::{FenceKind, SpecExampleBlock};

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// A fenced code block (``` or ~~~).
    FencedCode {
        /// Whether backticks or tildes were used.
        kind: FenceKind,
    },
    /// A spec example with its parsed parts.
    SpecExample(Box<SpecExampleBlock>),
}

/// A parsed block node with its kind and spans.
#[derive(Debug, Clone)]
pub struct BlockNode {
    /// The kind of leaf block (Paragraph, FencedCode, SpecExample).
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// Content span, excluding opening and closing delimiter lines.
    pub content_span: Span,
}

impl BlockNode {
    pub fn as_spec_example(&self) -> Option<&SpecExampleBlock> {
        match &self.kind {
            BlockKind::SpecExample(block) => Some(block),
            _ => None,
        }
    }
}
