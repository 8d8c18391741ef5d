use serde::{Deserialize, Serialize};

/// Marker strings recognised by the spec example block.
///
/// Every field has a default so a partially filled config table still yields
/// usable options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecExampleOptions {
    /// Opens and closes the block.
    pub example_break: String,
    /// Separates source, rendered and dump sections.
    pub type_break: String,
    /// Keyword following the opening delimiter.
    pub example_keyword: String,
    /// Keyword introducing the options clause on the info line.
    pub options_keyword: String,
}

impl SpecExampleOptions {
    pub const DEFAULT_EXAMPLE_BREAK: &'static str = "````````````````````````````````";
    pub const DEFAULT_TYPE_BREAK: &'static str = ".";
    pub const DEFAULT_EXAMPLE_KEYWORD: &'static str = "example";
    pub const DEFAULT_OPTIONS_KEYWORD: &'static str = "options";

    /// Options with a custom delimiter, other markers left at their defaults.
    pub fn with_example_break(example_break: impl Into<String>) -> Self {
        Self {
            example_break: example_break.into(),
            ..Self::default()
        }
    }
}

impl Default for SpecExampleOptions {
    fn default() -> Self {
        Self {
            example_break: Self::DEFAULT_EXAMPLE_BREAK.to_string(),
            type_break: Self::DEFAULT_TYPE_BREAK.to_string(),
            example_keyword: Self::DEFAULT_EXAMPLE_KEYWORD.to_string(),
            options_keyword: Self::DEFAULT_OPTIONS_KEYWORD.to_string(),
        }
    }
}
