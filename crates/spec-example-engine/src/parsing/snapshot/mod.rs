//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`render`**: Renders parsed blocks as a stable text tree for `insta`
//!   snapshots and the CLI's AST view
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   spec example sections ordered, separators present before their sections)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by snapshot tests rather than a separate formal
//! grammar. Snapshots assert block kinds, spans, and every populated sub-span.

pub mod invariants;
pub mod render;

pub use invariants::check as invariants;
pub use render::{render_ast, render_spec_example};
