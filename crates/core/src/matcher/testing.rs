use defscope_api::{
    CandidateFunction, CollectResult, DeclarationQuery, DefinitionCollector, DefinitionData,
    DefinitionLocation, EnclosingScope, PrintingPolicy, Range, Span, TranslationContext,
};
use std::cell::Cell;
use std::path::{Path, PathBuf};

/// Hand-built candidate that counts how much of it the matchers touched.
pub struct MockCandidate {
    name: String,
    params: Vec<String>,
    claimed_count: Option<usize>,
    scopes: Vec<EnclosingScope>,
    rendered: Cell<usize>,
    walks: Cell<usize>,
}

impl MockCandidate {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            params: Vec::new(),
            claimed_count: None,
            scopes: vec![EnclosingScope::Other],
            rendered: Cell::new(0),
            walks: Cell::new(0),
        }
    }

    pub fn with_params(mut self, params: &[&str]) -> Self {
        self.params = params.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_claimed_parameter_count(mut self, count: usize) -> Self {
        self.claimed_count = Some(count);
        self
    }

    /// Nest the candidate exactly where `declaration` expects it.
    pub fn with_scopes(mut self, declaration: &DeclarationQuery) -> Self {
        self.scopes = declaration
            .expected_scopes()
            .iter()
            .map(EnclosingScope::from)
            .collect();
        self.scopes.push(EnclosingScope::Other);
        self
    }

    pub fn with_scope_chain(mut self, scopes: Vec<EnclosingScope>) -> Self {
        self.scopes = scopes;
        self
    }

    pub fn rendered_types(&self) -> usize {
        self.rendered.get()
    }

    pub fn scope_walks(&self) -> usize {
        self.walks.get()
    }
}

impl CandidateFunction for MockCandidate {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_definition(&self) -> bool {
        true
    }

    fn parameter_count(&self) -> usize {
        self.claimed_count.unwrap_or(self.params.len())
    }

    fn canonical_parameter_types<'a>(
        &'a self,
        _policy: &'a PrintingPolicy,
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(self.params.iter().map(move |p| {
            self.rendered.set(self.rendered.get() + 1);
            p.clone()
        }))
    }

    fn enclosing_scopes(&self) -> Box<dyn Iterator<Item = EnclosingScope> + '_> {
        self.walks.set(self.walks.get() + 1);
        Box::new(self.scopes.iter().cloned())
    }

    fn span(&self) -> Option<Span> {
        None
    }

    fn body_span(&self) -> Option<Span> {
        None
    }

    fn qualified_name(&self) -> String {
        let mut parts: Vec<String> = self
            .scopes
            .iter()
            .filter_map(|s| s.classify().map(|(_, name)| name.to_string()))
            .collect();
        parts.reverse();
        parts.push(self.name.clone());
        parts.join("::")
    }
}

pub struct MockContext {
    policy: PrintingPolicy,
    path: PathBuf,
}

impl Default for MockContext {
    fn default() -> Self {
        Self {
            policy: PrintingPolicy::cxx(),
            path: PathBuf::from("mock.cpp"),
        }
    }
}

impl TranslationContext for MockContext {
    fn printing_policy(&self) -> &PrintingPolicy {
        &self.policy
    }

    fn file_path(&self) -> &Path {
        &self.path
    }

    fn source(&self) -> &str {
        ""
    }
}

/// Collector that records only the qualified name.
pub struct NameCollector;

impl DefinitionCollector for NameCollector {
    fn collect(
        &self,
        candidate: &dyn CandidateFunction,
        context: &dyn TranslationContext,
        _declaration: &DeclarationQuery,
    ) -> CollectResult<DefinitionData> {
        Ok(DefinitionData {
            qualified_name: candidate.qualified_name(),
            location: DefinitionLocation {
                path: context.file_path().to_path_buf(),
                range: Range {
                    start_line: 0,
                    start_col: 0,
                    end_line: 0,
                    end_col: 0,
                },
            },
            code: String::new(),
        })
    }
}
