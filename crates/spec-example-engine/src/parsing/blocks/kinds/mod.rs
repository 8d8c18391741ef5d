pub mod code_fence;
pub mod spec_example;

pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use spec_example::{SpecExampleBlock, SpecExampleOptions, SpecExampleParser};
