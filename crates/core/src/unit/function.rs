use super::{DeclKind, FunctionDecl, TranslationUnit};
use crate::error::{Result, SearchError};
use defscope_api::{
    CandidateFunction, DeclarationQuery, EnclosingScope, ExpectedScope, PrintingPolicy, Span,
};
use petgraph::stable_graph::NodeIndex;

/// A function node of a [`TranslationUnit`] seen as a match candidate.
#[derive(Clone, Copy)]
pub struct FunctionRef<'u> {
    unit: &'u TranslationUnit,
    index: NodeIndex,
    decl: &'u FunctionDecl,
}

impl<'u> FunctionRef<'u> {
    pub(crate) fn new(unit: &'u TranslationUnit, index: NodeIndex) -> Option<Self> {
        match &unit.node(index)?.kind {
            DeclKind::Function(decl) => Some(Self { unit, index, decl }),
            _ => None,
        }
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }
}

impl CandidateFunction for FunctionRef<'_> {
    fn name(&self) -> &str {
        &self.decl.name
    }

    fn is_definition(&self) -> bool {
        self.decl.body.is_some()
    }

    fn parameter_count(&self) -> usize {
        self.decl.params.len()
    }

    fn canonical_parameter_types<'a>(
        &'a self,
        policy: &'a PrintingPolicy,
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        let unit = self.unit;
        Box::new(
            self.decl
                .params
                .iter()
                .map(move |ty| ty.canonicalize(unit).render(unit, policy)),
        )
    }

    fn enclosing_scopes(&self) -> Box<dyn Iterator<Item = EnclosingScope> + '_> {
        let unit = self.unit;
        Box::new(
            unit.ancestors(self.index)
                .map(move |index| unit.enclosing_scope(index)),
        )
    }

    fn span(&self) -> Option<Span> {
        self.decl.span
    }

    fn body_span(&self) -> Option<Span> {
        self.decl.body
    }

    fn qualified_name(&self) -> String {
        self.unit.qualified_name(self.index)
    }
}

/// Capture what a call-site declaration expects of its definition: name,
/// canonical parameter types rendered under `policy`, and the enclosing
/// namespace and type scopes from the innermost outward.
pub fn describe_declaration(
    unit: &TranslationUnit,
    index: NodeIndex,
    policy: &PrintingPolicy,
) -> Result<DeclarationQuery> {
    let function = unit
        .function(index)
        .ok_or_else(|| SearchError::UnknownDeclaration(unit.qualified_name(index)))?;

    let parameter_types = function.canonical_parameter_types(policy).collect();
    let expected_scopes = function
        .enclosing_scopes()
        .filter_map(|scope| {
            scope
                .classify()
                .map(|(kind, name)| ExpectedScope::new(kind, name))
        })
        .collect();

    Ok(DeclarationQuery::new(
        function.name(),
        parameter_types,
        expected_scopes,
    ))
}
