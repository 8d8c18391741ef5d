use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::{
        CodeFence, FenceSig, SpecExampleOptions, SpecExampleParser, spec_example::BlockContinue,
    },
    open::{BlockOpen, BlockOpener, default_openers},
    types::{BlockKind, BlockNode},
};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        start: usize,
        last_line_end: usize,
    },
    Fence {
        open: FenceSig,
        opening_line: Span,
        last_line_end: usize,
    },
    SpecExample(Box<SpecExampleParser>),
}

/// Builds leaf blocks from classified lines.
///
/// Fenced code and spec examples are raw zones: while one is open, every line
/// goes to it until its closer or end of input.
pub struct BlockBuilder {
    openers: Vec<Box<dyn BlockOpener>>,
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new(options: &SpecExampleOptions) -> Self {
        Self::with_openers(default_openers(options))
    }

    /// Uses `openers` in the given order; see [`super::open::ordered_openers`].
    pub fn with_openers(openers: Vec<Box<dyn BlockOpener>>) -> Self {
        Self {
            openers,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::SpecExample(mut parser) => {
                match parser.try_continue(&c.line) {
                    BlockContinue::Finished => self.emit_spec_example(*parser),
                    BlockContinue::Continue => {
                        parser.add_line(c.line);
                        self.leaf = LeafState::SpecExample(parser);
                    }
                }
                return;
            }
            LeafState::Fence {
                open,
                opening_line,
                ..
            } => {
                self.consume_fence_line(open, opening_line, &c);
                return;
            }
            other => self.leaf = other,
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        if let Some(open) = self.try_open_leaf(&c) {
            self.flush_paragraph();
            self.open_leaf(open, c.line.span);
            return;
        }

        self.extend_paragraph(c.line.span);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::Paragraph {
                start,
                last_line_end,
            } => self.emit_paragraph(start, last_line_end),
            LeafState::Fence {
                open,
                opening_line,
                last_line_end,
            } => {
                log::debug!("unterminated fence at {}", opening_line.start);
                self.emit_fence(open, opening_line, last_line_end, last_line_end);
            }
            LeafState::SpecExample(parser) => self.emit_spec_example(*parser),
            LeafState::None => {}
        }
        self.out
    }

    fn try_open_leaf(&self, c: &LineClass) -> Option<BlockOpen> {
        self.openers.iter().find_map(|opener| opener.try_open(c))
    }

    fn open_leaf(&mut self, open: BlockOpen, line: Span) {
        self.leaf = match open {
            BlockOpen::SpecExample(parser) => LeafState::SpecExample(parser),
            BlockOpen::FencedCode(sig) => LeafState::Fence {
                open: sig,
                opening_line: line,
                last_line_end: line.end,
            },
        };
    }

    fn consume_fence_line(&mut self, open: FenceSig, opening_line: Span, c: &LineClass) {
        if CodeFence::closes(open, c.fence_sig) {
            self.emit_fence(open, opening_line, c.line.span.start, c.line.span.end);
        } else {
            self.leaf = LeafState::Fence {
                open,
                opening_line,
                last_line_end: c.line.span.end,
            };
        }
    }

    fn extend_paragraph(&mut self, line: Span) {
        self.leaf = match self.leaf {
            LeafState::Paragraph { start, .. } => LeafState::Paragraph {
                start,
                last_line_end: line.end,
            },
            _ => LeafState::Paragraph {
                start: line.start,
                last_line_end: line.end,
            },
        };
    }

    fn flush_paragraph(&mut self) {
        if let LeafState::Paragraph {
            start,
            last_line_end,
        } = self.leaf
        {
            self.leaf = LeafState::None;
            self.emit_paragraph(start, last_line_end);
        }
    }

    fn emit_paragraph(&mut self, start: usize, end: usize) {
        let span = Span::new(start, end);
        self.out.push(BlockNode {
            kind: BlockKind::Paragraph,
            span,
            content_span: span,
        });
    }

    fn emit_fence(&mut self, open: FenceSig, opening_line: Span, content_end: usize, end: usize) {
        self.out.push(BlockNode {
            kind: BlockKind::FencedCode { kind: open.kind },
            span: Span::new(opening_line.start, end),
            content_span: Span::new(opening_line.end, content_end),
        });
    }

    fn emit_spec_example(&mut self, parser: SpecExampleParser) {
        let block = parser.close();
        self.out.push(BlockNode {
            span: block.span,
            content_span: block.whole_content,
            kind: BlockKind::SpecExample(Box::new(block)),
        });
    }
}
