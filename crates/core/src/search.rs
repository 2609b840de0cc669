//! Feeding candidates to the match handler.
//!
//! The handler decides about one candidate at a time; this module owns the
//! traversal around it: which candidates are offered, in what order, and
//! whether to keep going after a match.

use crate::config::{SearchOptions, TraversalPolicy};
use crate::error::Result;
use crate::matcher::{MatchHandler, MatchOutcome};
use crate::slot::DefinitionSlot;
use crate::unit::TranslationUnit;
use defscope_api::{
    CandidateFunction, DeclarationQuery, DefinitionCollector, DefinitionData, PrintingPolicy,
    TranslationContext,
};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub visited: usize,
    pub matched: usize,
    pub rejected: usize,
    /// Candidates were left unvisited because of [`TraversalPolicy::StopOnFirstMatch`].
    pub stopped_early: bool,
}

impl SearchReport {
    fn absorb(&mut self, other: SearchReport) {
        self.visited += other.visited;
        self.matched += other.matched;
        self.rejected += other.rejected;
        self.stopped_early |= other.stopped_early;
    }
}

/// A definition search session: the declaration being looked for and the
/// slot its definition ends up in.
///
/// The slot's policy is taken from [`SearchOptions::slot_policy`] by
/// [`find_definition`].
#[derive(Debug, Clone)]
pub struct Query {
    declaration: DeclarationQuery,
    definition: DefinitionSlot,
}

impl Query {
    pub fn new(declaration: DeclarationQuery) -> Self {
        Self {
            declaration,
            definition: DefinitionSlot::default(),
        }
    }

    pub fn declaration(&self) -> &DeclarationQuery {
        &self.declaration
    }

    pub fn definition(&self) -> Option<&DefinitionData> {
        self.definition.get()
    }

    pub fn slot(&self) -> &DefinitionSlot {
        &self.definition
    }

    pub fn into_definition(mut self) -> Option<DefinitionData> {
        self.definition.take()
    }
}

/// Offer `candidates` to `handler` in order.
///
/// With [`TraversalPolicy::StopOnFirstMatch`] the first match ends the walk;
/// with [`TraversalPolicy::Exhaustive`] every candidate is evaluated and the
/// slot policy settles repeated matches.
pub fn evaluate_candidates<I>(
    candidates: I,
    context: &dyn TranslationContext,
    handler: &MatchHandler<'_>,
    slot: &mut DefinitionSlot,
    traversal: TraversalPolicy,
) -> Result<SearchReport>
where
    I: IntoIterator,
    I::Item: CandidateFunction,
{
    let mut report = SearchReport::default();
    let mut candidates = candidates.into_iter();

    while let Some(candidate) = candidates.next() {
        report.visited += 1;
        match handler.run(&candidate, context, slot)? {
            MatchOutcome::Matched(_) => {
                report.matched += 1;
                if traversal == TraversalPolicy::StopOnFirstMatch {
                    report.stopped_early = candidates.next().is_some();
                    break;
                }
            }
            MatchOutcome::Rejected(_) => report.rejected += 1,
        }
    }

    Ok(report)
}

/// Search every unit for the definition `query` describes.
///
/// Only functions with a body and the declaration's name are offered to
/// the handler. Units are searched in order; with
/// [`TraversalPolicy::StopOnFirstMatch`] later units are skipped once a
/// definition is found. Repeated matches are settled by
/// `options.slot_policy`.
pub fn find_definition(
    units: &[TranslationUnit],
    query: &mut Query,
    options: &SearchOptions,
    collector: &dyn DefinitionCollector,
) -> Result<SearchReport> {
    let declaration = &query.declaration;
    let definition = &mut query.definition;
    definition.set_policy(options.slot_policy);
    let handler = MatchHandler::new(declaration, collector, options.scope_strictness);
    let mut report = SearchReport::default();

    for (position, unit) in units.iter().enumerate() {
        let candidates = unit
            .functions_named(declaration.name())
            .filter(|f| f.is_definition());
        let unit_report = match options.printing {
            Some(policy) => {
                let context = PolicyOverride {
                    inner: unit,
                    policy,
                };
                evaluate_candidates(candidates, &context, &handler, definition, options.traversal)?
            }
            None => evaluate_candidates(candidates, unit, &handler, definition, options.traversal)?,
        };
        debug!(
            path = %unit.file_path().display(),
            visited = unit_report.visited,
            matched = unit_report.matched,
            "searched translation unit"
        );
        report.absorb(unit_report);

        if report.matched > 0 && options.traversal == TraversalPolicy::StopOnFirstMatch {
            report.stopped_early |= position + 1 < units.len();
            break;
        }
    }

    info!(
        "definition search for `{}`: {} candidates, {} matched",
        declaration.name(),
        report.visited,
        report.matched
    );
    Ok(report)
}

/// A translation context whose printing policy is replaced.
struct PolicyOverride<'a> {
    inner: &'a dyn TranslationContext,
    policy: PrintingPolicy,
}

impl TranslationContext for PolicyOverride<'_> {
    fn printing_policy(&self) -> &PrintingPolicy {
        &self.policy
    }

    fn file_path(&self) -> &Path {
        self.inner.file_path()
    }

    fn source(&self) -> &str {
        self.inner.source()
    }
}
