use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How canonical types are rendered to strings.
///
/// Two renderings are only comparable when produced under the same policy,
/// so the policy travels with the translation context rather than the query.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(default)]
pub struct PrintingPolicy {
    /// Print `S` instead of `struct S`.
    pub suppress_tag_keyword: bool,
    /// Print `S` instead of `ns::S`.
    pub suppress_scope: bool,
    /// Spell the boolean type `bool` rather than `_Bool`.
    pub bool_keyword: bool,
}

impl PrintingPolicy {
    pub fn cxx() -> Self {
        Self {
            suppress_tag_keyword: true,
            suppress_scope: false,
            bool_keyword: true,
        }
    }

    pub fn c() -> Self {
        Self {
            suppress_tag_keyword: false,
            suppress_scope: false,
            bool_keyword: false,
        }
    }
}

impl Default for PrintingPolicy {
    fn default() -> Self {
        Self::cxx()
    }
}
