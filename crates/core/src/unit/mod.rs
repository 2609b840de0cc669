//! In-memory translation unit.
//!
//! A pre-built declaration tree: namespaces, records, enums, linkage
//! specifications, typedefs and functions connected by `Contains` edges
//! from parent to child. Built once through [`TranslationUnitBuilder`],
//! then read-only.

mod collector;
mod function;
pub mod types;

pub use collector::SourceCollector;
pub use function::{FunctionRef, describe_declaration};
pub use types::TypeRef;

use defscope_api::{EnclosingScope, PrintingPolicy, Span, TranslationContext};
use petgraph::Direction;
pub use petgraph::stable_graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use smol_str::SmolStr;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Class,
    Struct,
    Union,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclEdge {
    Contains,
}

#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: SmolStr,
    pub params: Vec<TypeRef>,
    /// Whole declaration, signature included.
    pub span: Option<Span>,
    /// `None` for a declaration without a body.
    pub body: Option<Span>,
}

impl FunctionDecl {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            span: None,
            body: None,
        }
    }

    pub fn param(mut self, ty: TypeRef) -> Self {
        self.params.push(ty);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn body(mut self, body: Span) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone)]
pub enum DeclKind {
    TranslationUnit,
    Namespace,
    Record(TagKind),
    Enum,
    /// `extern "C" { ... }`
    Linkage,
    Typedef(TypeRef),
    Function(FunctionDecl),
}

#[derive(Debug, Clone)]
pub struct DeclNode {
    pub name: SmolStr,
    pub kind: DeclKind,
}

/// A parsed source file as a declaration tree.
pub struct TranslationUnit {
    path: PathBuf,
    source: String,
    policy: PrintingPolicy,
    topology: StableDiGraph<DeclNode, DeclEdge>,
    root: NodeIndex,
    /// Simple function name -> function nodes, in declaration order
    function_index: HashMap<SmolStr, Vec<NodeIndex>>,
}

impl TranslationUnit {
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn node(&self, index: NodeIndex) -> Option<&DeclNode> {
        self.topology.node_weight(index)
    }

    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.topology
            .neighbors_directed(index, Direction::Incoming)
            .next()
    }

    /// Ancestors of `index` from its direct parent up to the root.
    pub fn ancestors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        std::iter::successors(self.parent(index), move |&i| self.parent(i))
    }

    /// How the scope-chain matcher sees `index`.
    pub fn enclosing_scope(&self, index: NodeIndex) -> EnclosingScope {
        match self.node(index) {
            Some(DeclNode {
                name,
                kind: DeclKind::Namespace,
            }) => EnclosingScope::Namespace(name.clone()),
            Some(DeclNode {
                name,
                kind: DeclKind::Record(_) | DeclKind::Enum,
            }) => EnclosingScope::TypeScope(name.clone()),
            _ => EnclosingScope::Other,
        }
    }

    /// `outer::inner::name`, built from namespace and type scopes only.
    pub fn qualified_name(&self, index: NodeIndex) -> String {
        let mut parts: Vec<SmolStr> = self
            .ancestors(index)
            .filter_map(|i| match self.enclosing_scope(i) {
                EnclosingScope::Namespace(name) | EnclosingScope::TypeScope(name) => Some(name),
                EnclosingScope::Other => None,
            })
            .collect();
        parts.reverse();
        if let Some(node) = self.node(index) {
            parts.push(node.name.clone());
        }
        parts.join("::")
    }

    pub(crate) fn alias_target(&self, index: NodeIndex) -> Option<&TypeRef> {
        match self.node(index).map(|n| &n.kind) {
            Some(DeclKind::Typedef(target)) => Some(target),
            _ => None,
        }
    }

    /// The function at `index`, or `None` when `index` is not a function.
    pub fn function(&self, index: NodeIndex) -> Option<FunctionRef<'_>> {
        FunctionRef::new(self, index)
    }

    /// Every function declaration or definition called `name`.
    pub fn functions_named<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = FunctionRef<'a>> + use<'a> {
        self.function_index
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(move |&index| self.function(index))
    }
}

impl TranslationContext for TranslationUnit {
    fn printing_policy(&self) -> &PrintingPolicy {
        &self.policy
    }

    fn file_path(&self) -> &Path {
        &self.path
    }

    fn source(&self) -> &str {
        &self.source
    }
}

/// Mutable builder for a [`TranslationUnit`].
///
/// Parents passed to the builder are expected to be scopes (the root, a
/// namespace, record, enum or linkage specification).
pub struct TranslationUnitBuilder {
    unit: TranslationUnit,
}

impl TranslationUnitBuilder {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        let mut topology = StableDiGraph::new();
        let root = topology.add_node(DeclNode {
            name: SmolStr::default(),
            kind: DeclKind::TranslationUnit,
        });
        Self {
            unit: TranslationUnit {
                path: path.into(),
                source: source.into(),
                policy: PrintingPolicy::default(),
                topology,
                root,
                function_index: HashMap::new(),
            },
        }
    }

    pub fn printing_policy(mut self, policy: PrintingPolicy) -> Self {
        self.unit.policy = policy;
        self
    }

    pub fn root(&self) -> NodeIndex {
        self.unit.root
    }

    pub fn source(&self) -> &str {
        &self.unit.source
    }

    fn add(&mut self, parent: NodeIndex, name: SmolStr, kind: DeclKind) -> NodeIndex {
        let index = self.unit.topology.add_node(DeclNode { name, kind });
        self.unit
            .topology
            .add_edge(parent, index, DeclEdge::Contains);
        index
    }

    pub fn namespace(&mut self, parent: NodeIndex, name: impl Into<SmolStr>) -> NodeIndex {
        self.add(parent, name.into(), DeclKind::Namespace)
    }

    pub fn record(
        &mut self,
        parent: NodeIndex,
        tag: TagKind,
        name: impl Into<SmolStr>,
    ) -> NodeIndex {
        self.add(parent, name.into(), DeclKind::Record(tag))
    }

    pub fn enumeration(
        &mut self,
        parent: NodeIndex,
        name: impl Into<SmolStr>,
    ) -> NodeIndex {
        self.add(parent, name.into(), DeclKind::Enum)
    }

    pub fn linkage(&mut self, parent: NodeIndex) -> NodeIndex {
        self.add(parent, SmolStr::default(), DeclKind::Linkage)
    }

    pub fn typedef(
        &mut self,
        parent: NodeIndex,
        name: impl Into<SmolStr>,
        target: TypeRef,
    ) -> NodeIndex {
        self.add(parent, name.into(), DeclKind::Typedef(target))
    }

    pub fn function(&mut self, parent: NodeIndex, decl: FunctionDecl) -> NodeIndex {
        let name = decl.name.clone();
        let index = self.add(parent, name.clone(), DeclKind::Function(decl));
        self.unit
            .function_index
            .entry(name)
            .or_default()
            .push(index);
        index
    }

    pub fn build(self) -> TranslationUnit {
        self.unit
    }
}
