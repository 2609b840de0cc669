use super::symbol::Range;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct DefinitionLocation {
    pub path: PathBuf,
    pub range: Range,
}

/// The captured definition of a matched candidate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct DefinitionData {
    /// e.g. `math::Vector::dot`
    pub qualified_name: String,
    pub location: DefinitionLocation,
    /// Full text of the definition, signature and body.
    pub code: String,
}
