//! Type model for declarations in a translation unit.
//!
//! Types are kept as written (aliases included). [`TypeRef::canonicalize`]
//! strips every alias, and [`TypeRef::render`] prints the result the way a
//! C++ front end spells canonical types, e.g. `const int &`, `char *const`
//! or `int (*)[4]`.

use super::{DeclKind, TagKind, TranslationUnit};
use defscope_api::PrintingPolicy;
use petgraph::stable_graph::NodeIndex;
use smol_str::SmolStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// `int`, `unsigned long`, `bool`, ...
    Builtin(SmolStr),
    /// A class, struct, union or enum declared in the unit.
    Tag(NodeIndex),
    /// A typedef or alias declaration in the unit.
    Alias(NodeIndex),
    Pointer(Box<TypeRef>),
    LValueRef(Box<TypeRef>),
    RValueRef(Box<TypeRef>),
    Const(Box<TypeRef>),
    Array {
        element: Box<TypeRef>,
        size: Option<usize>,
    },
}

impl TypeRef {
    pub fn builtin(name: impl Into<SmolStr>) -> Self {
        TypeRef::Builtin(name.into())
    }

    pub fn pointer(self) -> Self {
        TypeRef::Pointer(Box::new(self))
    }

    pub fn lvalue_ref(self) -> Self {
        TypeRef::LValueRef(Box::new(self))
    }

    pub fn rvalue_ref(self) -> Self {
        TypeRef::RValueRef(Box::new(self))
    }

    pub fn constant(self) -> Self {
        TypeRef::Const(Box::new(self))
    }

    pub fn array(self, size: Option<usize>) -> Self {
        TypeRef::Array {
            element: Box::new(self),
            size,
        }
    }

    /// Resolve every alias to what it names.
    ///
    /// Also folds what alias substitution can produce: repeated `const`,
    /// `const` on a reference (dropped), `const` on an array (moved to the
    /// element) and references to references (collapsed).
    /// An alias that does not point at a typedef in `unit` is left in place.
    pub fn canonicalize(&self, unit: &TranslationUnit) -> TypeRef {
        match self {
            TypeRef::Builtin(_) | TypeRef::Tag(_) => self.clone(),
            TypeRef::Alias(index) => match unit.alias_target(*index) {
                Some(target) => target.canonicalize(unit),
                None => self.clone(),
            },
            TypeRef::Pointer(inner) => TypeRef::Pointer(Box::new(inner.canonicalize(unit))),
            TypeRef::LValueRef(inner) => match inner.canonicalize(unit) {
                TypeRef::LValueRef(target) | TypeRef::RValueRef(target) => {
                    TypeRef::LValueRef(target)
                }
                target => TypeRef::LValueRef(Box::new(target)),
            },
            TypeRef::RValueRef(inner) => match inner.canonicalize(unit) {
                TypeRef::LValueRef(target) => TypeRef::LValueRef(target),
                TypeRef::RValueRef(target) => TypeRef::RValueRef(target),
                target => TypeRef::RValueRef(Box::new(target)),
            },
            TypeRef::Const(inner) => add_const(inner.canonicalize(unit)),
            TypeRef::Array { element, size } => TypeRef::Array {
                element: Box::new(element.canonicalize(unit)),
                size: *size,
            },
        }
    }

    pub fn render(&self, unit: &TranslationUnit, policy: &PrintingPolicy) -> String {
        self.render_around(unit, policy, String::new())
    }

    /// Print the type around `declarator`, the text already built for the
    /// outer layers. Pointers and references prefix it, arrays suffix it,
    /// and a pointer or reference to an array is parenthesized.
    fn render_around(
        &self,
        unit: &TranslationUnit,
        policy: &PrintingPolicy,
        declarator: String,
    ) -> String {
        match self {
            TypeRef::Builtin(_) | TypeRef::Tag(_) | TypeRef::Alias(_) => {
                with_declarator(self.render_leaf(unit, policy), declarator)
            }
            TypeRef::Pointer(inner) => {
                inner.render_around(unit, policy, prefix(inner, "*", declarator))
            }
            TypeRef::LValueRef(inner) => {
                inner.render_around(unit, policy, prefix(inner, "&", declarator))
            }
            TypeRef::RValueRef(inner) => {
                inner.render_around(unit, policy, prefix(inner, "&&", declarator))
            }
            TypeRef::Const(inner) => match inner.as_ref() {
                TypeRef::Builtin(_) | TypeRef::Tag(_) | TypeRef::Alias(_) => with_declarator(
                    format!("const {}", inner.render_leaf(unit, policy)),
                    declarator,
                ),
                TypeRef::Pointer(_) => {
                    let qualified = with_declarator("const".to_string(), declarator);
                    inner.render_around(unit, policy, qualified)
                }
                TypeRef::Array { .. } => {
                    add_const(inner.as_ref().clone()).render_around(unit, policy, declarator)
                }
                _ => inner.render_around(unit, policy, declarator),
            },
            TypeRef::Array { element, size } => {
                let bound = size.map(|n| n.to_string()).unwrap_or_default();
                element.render_around(unit, policy, format!("{}[{}]", declarator, bound))
            }
        }
    }

    fn render_leaf(&self, unit: &TranslationUnit, policy: &PrintingPolicy) -> String {
        match self {
            TypeRef::Builtin(name) if name == "bool" && !policy.bool_keyword => {
                "_Bool".to_string()
            }
            TypeRef::Builtin(name) => name.to_string(),
            TypeRef::Tag(index) => render_tag(unit, *index, policy),
            TypeRef::Alias(index) => render_name(unit, *index, policy),
            _ => String::new(),
        }
    }
}

fn add_const(inner: TypeRef) -> TypeRef {
    match inner {
        TypeRef::Const(_) | TypeRef::LValueRef(_) | TypeRef::RValueRef(_) => inner,
        TypeRef::Array { element, size } => TypeRef::Array {
            element: Box::new(add_const(*element)),
            size,
        },
        other => TypeRef::Const(Box::new(other)),
    }
}

fn prefix(pointee: &TypeRef, symbol: &str, declarator: String) -> String {
    if matches!(pointee, TypeRef::Array { .. }) {
        format!("({}{})", symbol, declarator)
    } else {
        format!("{}{}", symbol, declarator)
    }
}

fn with_declarator(base: String, declarator: String) -> String {
    if declarator.is_empty() {
        base
    } else {
        format!("{} {}", base, declarator)
    }
}

fn render_tag(unit: &TranslationUnit, index: NodeIndex, policy: &PrintingPolicy) -> String {
    let name = render_name(unit, index, policy);
    if policy.suppress_tag_keyword {
        return name;
    }
    let keyword = match unit.node(index).map(|n| &n.kind) {
        Some(DeclKind::Record(TagKind::Class)) => "class",
        Some(DeclKind::Record(TagKind::Struct)) => "struct",
        Some(DeclKind::Record(TagKind::Union)) => "union",
        Some(DeclKind::Enum) => "enum",
        _ => return name,
    };
    format!("{} {}", keyword, name)
}

fn render_name(unit: &TranslationUnit, index: NodeIndex, policy: &PrintingPolicy) -> String {
    if policy.suppress_scope {
        unit.node(index)
            .map(|n| n.name.to_string())
            .unwrap_or_default()
    } else {
        unit.qualified_name(index)
    }
}
