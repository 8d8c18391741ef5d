pub mod blocks;
pub mod cursor;
pub mod rope;
pub mod snapshot;

use xi_rope::Rope;

use blocks::{
    BlockBuilder, BlockNode, LineClassifier,
    kinds::{SpecExampleBlock, SpecExampleOptions},
};
use rope::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    /// Spec examples in document order.
    pub fn examples(&self) -> impl Iterator<Item = &SpecExampleBlock> {
        self.blocks.iter().filter_map(BlockNode::as_spec_example)
    }
}

pub fn parse_document(rope: &Rope, options: &SpecExampleOptions) -> ParsedDoc {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new(options);

    for lr in lines_with_spans(rope) {
        builder.push(classifier.classify(lr));
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}
