use crate::config::ScopeStrictness;
use defscope_api::{EnclosingScope, ExpectedScope};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeMatch {
    /// `depth` expected scopes were checked and all agreed.
    Matched { depth: usize },
    Mismatch {
        depth: usize,
        expected: ExpectedScope,
        found: EnclosingScope,
    },
    /// The candidate has a namespace or type scope beyond the end of the
    /// expected chain.
    Overflow { depth: usize },
    /// The candidate chain ended after `depth` scopes under
    /// [`ScopeStrictness::Exact`].
    Incomplete { depth: usize },
}

impl ScopeMatch {
    pub fn is_match(&self) -> bool {
        matches!(self, ScopeMatch::Matched { .. })
    }
}

/// Walk the candidate's ancestors outward and compare every namespace or
/// type scope, in order, against `expected` (innermost first).
///
/// Other ancestors are skipped without advancing through `expected`.
pub fn match_scopes(
    expected: &[ExpectedScope],
    chain: impl Iterator<Item = EnclosingScope>,
    strictness: ScopeStrictness,
) -> ScopeMatch {
    let mut cursor = expected.iter();
    let mut depth = 0;

    for scope in chain {
        let Some((kind, name)) = scope.classify() else {
            continue;
        };
        let Some(want) = cursor.next() else {
            return ScopeMatch::Overflow { depth };
        };
        trace!(depth, %want, found_kind = %kind, found_name = name, "comparing scope");
        if !want.matches(kind, name) {
            return ScopeMatch::Mismatch {
                depth,
                expected: want.clone(),
                found: scope,
            };
        }
        depth += 1;
    }

    if depth < expected.len() && strictness == ScopeStrictness::Exact {
        return ScopeMatch::Incomplete { depth };
    }
    ScopeMatch::Matched { depth }
}
