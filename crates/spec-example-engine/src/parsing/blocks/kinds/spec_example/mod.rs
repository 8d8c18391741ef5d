//! # Spec Example Blocks
//!
//! A self-delimited block holding a literate test case:
//!
//! ```text
//! ~~~example (2.3) options (no-numbered-references)
//! *text*
//! .
//! <p><em>text</em></p>
//! .
//! Paragraph[text]
//! ~~~
//! ```
//!
//! The same delimiter opens and closes the block. The info line names the
//! example; the body is split on the type-break (`.`) into source, rendered
//! and dump sections.
//!
//! ## Modules
//!
//! - **`options`**: configurable marker strings
//! - **`info_line`**: coordinate/options grammar for the first line
//! - **`sections`**: the three-phase section splitter
//! - **`parser`**: start trigger, continuation policy and close step
//! - **`block`**: the immutable result and its accessors

pub mod block;
pub mod info_line;
pub mod options;
pub mod parser;
pub mod sections;

pub use block::{Coordinate, SectionKind, SectionNode, SpecExampleBlock};
pub use info_line::{InfoFields, parse_info_tail};
pub use options::SpecExampleOptions;
pub use parser::{BlockContinue, SpecExampleParser};
pub use sections::{Phase, SectionSplitter, Sections};
