use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// Kinds of enclosing lexical scope that take part in definition matching.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Namespace,
    /// class, struct, union or enum
    TypeScope,
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeKind::Namespace => f.write_str("namespace"),
            ScopeKind::TypeScope => f.write_str("type"),
        }
    }
}

/// One link of the scope chain a declaration was seen through.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct ExpectedScope {
    pub kind: ScopeKind,
    #[schemars(with = "String")]
    pub name: SmolStr,
}

impl ExpectedScope {
    pub fn new(kind: ScopeKind, name: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn namespace(name: impl Into<SmolStr>) -> Self {
        Self::new(ScopeKind::Namespace, name)
    }

    pub fn type_scope(name: impl Into<SmolStr>) -> Self {
        Self::new(ScopeKind::TypeScope, name)
    }

    /// True when an ancestor of the given kind and name is this link.
    pub fn matches(&self, kind: ScopeKind, name: &str) -> bool {
        self.kind == kind && self.name == name
    }
}

impl fmt::Display for ExpectedScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}

/// An ancestor produced while walking outward from a candidate function.
///
/// Only namespaces and type scopes are compared; everything else (the
/// translation unit root, linkage specifications, ...) is `Other` and is
/// skipped by the scope-chain matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnclosingScope {
    Namespace(SmolStr),
    TypeScope(SmolStr),
    Other,
}

impl EnclosingScope {
    pub fn classify(&self) -> Option<(ScopeKind, &str)> {
        match self {
            EnclosingScope::Namespace(name) => Some((ScopeKind::Namespace, name.as_str())),
            EnclosingScope::TypeScope(name) => Some((ScopeKind::TypeScope, name.as_str())),
            EnclosingScope::Other => None,
        }
    }
}

impl From<&ExpectedScope> for EnclosingScope {
    fn from(scope: &ExpectedScope) -> Self {
        match scope.kind {
            ScopeKind::Namespace => EnclosingScope::Namespace(scope.name.clone()),
            ScopeKind::TypeScope => EnclosingScope::TypeScope(scope.name.clone()),
        }
    }
}
