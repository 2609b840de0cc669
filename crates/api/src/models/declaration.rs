use super::scope::ExpectedScope;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// What a definition search is looking for, captured once from the
/// call-site declaration and read-only afterwards.
///
/// `parameter_types` are canonical type strings in declaration order.
/// `expected_scopes` run from the innermost enclosing scope outward.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct DeclarationQuery {
    #[schemars(with = "String")]
    name: SmolStr,
    parameter_types: Vec<String>,
    expected_scopes: Vec<ExpectedScope>,
}

impl DeclarationQuery {
    pub fn new(
        name: impl Into<SmolStr>,
        parameter_types: Vec<String>,
        expected_scopes: Vec<ExpectedScope>,
    ) -> Self {
        Self {
            name: name.into(),
            parameter_types,
            expected_scopes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter_types(&self) -> &[String] {
        &self.parameter_types
    }

    pub fn expected_scopes(&self) -> &[ExpectedScope] {
        &self.expected_scopes
    }
}
