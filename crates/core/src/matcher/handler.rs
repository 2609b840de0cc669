use super::parameters::{ParameterMatch, match_parameters};
use super::scopes::{ScopeMatch, match_scopes};
use crate::config::ScopeStrictness;
use crate::error::{Result, SearchError};
use crate::slot::{DefinitionSlot, StoreOutcome};
use defscope_api::{CandidateFunction, DeclarationQuery, DefinitionCollector, TranslationContext};
use tracing::{debug, warn};

/// Why a candidate was turned down. Rejection is the normal outcome for
/// most candidates and never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    ParameterCount { expected: usize, found: usize },
    ParameterType(ParameterMatch),
    Scope(ScopeMatch),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched(StoreOutcome),
    Rejected(RejectReason),
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

/// Evaluates candidates one at a time against a borrowed declaration.
///
/// The handler never re-checks the candidate's name; selecting candidates
/// by name is up to whoever feeds it.
pub struct MatchHandler<'a> {
    declaration: &'a DeclarationQuery,
    collector: &'a dyn DefinitionCollector,
    strictness: ScopeStrictness,
}

impl<'a> MatchHandler<'a> {
    pub fn new(
        declaration: &'a DeclarationQuery,
        collector: &'a dyn DefinitionCollector,
        strictness: ScopeStrictness,
    ) -> Self {
        Self {
            declaration,
            collector,
            strictness,
        }
    }

    /// Evaluate one candidate and, when it matches, store its definition
    /// into `slot`.
    ///
    /// The slot is only touched on a full match. Errors are reserved for
    /// malformed candidates, collector failures and slot conflicts.
    pub fn run(
        &self,
        candidate: &dyn CandidateFunction,
        context: &dyn TranslationContext,
        slot: &mut DefinitionSlot,
    ) -> Result<MatchOutcome> {
        let expected_types = self.declaration.parameter_types();

        let found = candidate.parameter_count();
        if found != expected_types.len() {
            debug!(
                candidate = candidate.name(),
                expected = expected_types.len(),
                found,
                "rejected: parameter count"
            );
            return Ok(MatchOutcome::Rejected(RejectReason::ParameterCount {
                expected: expected_types.len(),
                found,
            }));
        }

        match match_parameters(expected_types, candidate, context.printing_policy()) {
            ParameterMatch::Matched => {}
            ParameterMatch::Truncated { index } => {
                warn!(
                    candidate = candidate.name(),
                    index, "candidate reports more parameters than it yields"
                );
                return Err(SearchError::MalformedCandidate(format!(
                    "`{}` declares {} parameters but yields only {}",
                    candidate.qualified_name(),
                    found,
                    index
                )));
            }
            mismatch => {
                debug!(candidate = candidate.name(), ?mismatch, "rejected: parameter type");
                return Ok(MatchOutcome::Rejected(RejectReason::ParameterType(mismatch)));
            }
        }

        let scopes = match_scopes(
            self.declaration.expected_scopes(),
            candidate.enclosing_scopes(),
            self.strictness,
        );
        if !scopes.is_match() {
            debug!(candidate = candidate.name(), ?scopes, "rejected: scope chain");
            return Ok(MatchOutcome::Rejected(RejectReason::Scope(scopes)));
        }
        if let ScopeMatch::Matched { depth } = scopes {
            if depth < self.declaration.expected_scopes().len() {
                debug!(
                    candidate = candidate.name(),
                    checked = depth,
                    expected = self.declaration.expected_scopes().len(),
                    "candidate scope chain shorter than expected"
                );
            }
        }

        let definition = self.collector.collect(candidate, context, self.declaration)?;
        debug!(
            definition = %definition.qualified_name,
            path = %definition.location.path.display(),
            "matched definition"
        );
        let stored = slot.store(definition)?;
        Ok(MatchOutcome::Matched(stored))
    }
}
