//! Search options.
//!
//! Every field has a default, so a partial JSON document is a valid config:
//!
//! ```json
//! { "traversal": "exhaustive", "slot_policy": "reject_conflict" }
//! ```

use crate::error::Result;
use defscope_api::PrintingPolicy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How much of the expected scope chain a candidate has to account for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScopeStrictness {
    /// Only the scopes the candidate actually has are checked; a candidate
    /// whose chain ends early still matches.
    #[default]
    Prefix,
    /// Every expected scope must be present.
    Exact,
}

/// What the result slot does when a second match arrives.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SlotPolicy {
    #[default]
    LastWins,
    FirstWins,
    RejectConflict,
}

/// Whether a search keeps feeding candidates after the first match.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TraversalPolicy {
    #[default]
    StopOnFirstMatch,
    Exhaustive,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct SearchOptions {
    /// Overrides the printing policy of every translation unit searched.
    pub printing: Option<PrintingPolicy>,
    pub scope_strictness: ScopeStrictness,
    pub slot_policy: SlotPolicy,
    pub traversal: TraversalPolicy,
}

impl SearchOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(SearchOptions)
    }
}
