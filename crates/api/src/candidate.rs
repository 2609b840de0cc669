use crate::error::CollectResult;
use crate::models::{DeclarationQuery, DefinitionData, EnclosingScope, PrintingPolicy, Span};
use std::path::Path;

/// A function node handed over by a traversal as a possible definition.
///
/// Iterators returned here are lazy and restartable: calling the method
/// again starts a fresh walk.
pub trait CandidateFunction {
    fn name(&self) -> &str;

    fn is_definition(&self) -> bool;

    fn parameter_count(&self) -> usize;

    /// Canonical (alias-free) parameter types in declaration order,
    /// rendered under `policy`.
    fn canonical_parameter_types<'a>(
        &'a self,
        policy: &'a PrintingPolicy,
    ) -> Box<dyn Iterator<Item = String> + 'a>;

    /// Ancestors from the innermost enclosing scope outward.
    fn enclosing_scopes(&self) -> Box<dyn Iterator<Item = EnclosingScope> + '_>;

    /// Source span of the whole declaration.
    fn span(&self) -> Option<Span>;

    fn body_span(&self) -> Option<Span>;

    /// e.g. `ns::Type::method`
    fn qualified_name(&self) -> String;
}

/// The context a candidate was found in.
pub trait TranslationContext {
    fn printing_policy(&self) -> &PrintingPolicy;

    fn file_path(&self) -> &Path;

    fn source(&self) -> &str;
}

/// Extracts the definition payload once a candidate has matched.
pub trait DefinitionCollector {
    fn collect(
        &self,
        candidate: &dyn CandidateFunction,
        context: &dyn TranslationContext,
        declaration: &DeclarationQuery,
    ) -> CollectResult<DefinitionData>;
}
