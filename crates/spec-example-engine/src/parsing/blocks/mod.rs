//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (indentation, fence detection, blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` offers each line to the
//!    open leaf block, or to the registered openers in dependency order, and emits
//!    `BlockNode`s as blocks close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, SpecExample)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`open`**: `BlockOpener` registry and its declared ordering
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code and spec examples are raw zones: no block parsing inside
//! - A spec example opener is tried before the fenced code opener, so a
//!   `~~~example` line is never read as a fence
//! - All block nodes store byte spans into the rope

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use open::{BlockOpener, OpenerTag, OrderingError, ordered_openers};
pub use types::{BlockKind, BlockNode};
