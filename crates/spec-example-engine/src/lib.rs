pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::blocks::kinds::spec_example::{
    Coordinate, SectionKind, SectionNode, SpecExampleBlock, SpecExampleOptions, SpecExampleParser,
};
pub use parsing::blocks::{BlockKind, BlockNode};
pub use parsing::rope::Span;
pub use parsing::snapshot::render_ast;
pub use parsing::{ParsedDoc, parse_document};
