use defscope_api::{PrintingPolicy, Span};
use defscope_core::{FunctionDecl, TagKind, TranslationUnit, TranslationUnitBuilder, TypeRef};
use defscope_core::unit::NodeIndex;

/// Byte span of the first occurrence of `needle` at or after `from`.
pub fn span_after(source: &str, from: usize, needle: &str) -> Span {
    let start = from + source[from..].find(needle).expect("needle not in source");
    Span::new(start, start + needle.len())
}

/// Define `name(params)` under `parent`, with its span taken from `text`.
pub fn define(
    builder: &mut TranslationUnitBuilder,
    parent: NodeIndex,
    name: &str,
    params: Vec<TypeRef>,
    text: &str,
) -> NodeIndex {
    let span = span_after(builder.source(), 0, text);
    let body_start = text.find('{').expect("definition without body");
    let mut decl = FunctionDecl::new(name)
        .span(span)
        .body(Span::new(span.start + body_start, span.end));
    for ty in params {
        decl = decl.param(ty);
    }
    builder.function(parent, decl)
}

pub fn int() -> TypeRef {
    TypeRef::builtin("int")
}

pub fn c_str() -> TypeRef {
    TypeRef::builtin("char").constant().pointer()
}

pub const HEADER: &str = "\
namespace A {
struct B {
  void f(int x, const char *s);
};
}
";

/// The header the call site was compiled against, returning the unit and
/// the `A::B::f` declaration.
#[allow(dead_code)]
pub fn header_unit() -> (TranslationUnit, NodeIndex) {
    let mut builder = TranslationUnitBuilder::new("b.hpp", HEADER);
    let root = builder.root();
    let a = builder.namespace(root, "A");
    let b = builder.record(a, TagKind::Struct, "B");
    let span = span_after(HEADER, 0, "void f(int x, const char *s);");
    let decl = builder.function(
        b,
        FunctionDecl::new("f")
            .param(int())
            .param(c_str())
            .span(span),
    );
    (builder.build(), decl)
}

pub const PROGRAM: &str = "\
typedef int Id;
namespace A {
struct B {
  void f(int x, const char *s) { /* A::B int,str */ }
  void f(const char *s, int x) { /* A::B str,int */ }
  void f(int x) { /* A::B int */ }
};
}
namespace B {
struct A {
  void f(int x, const char *s) { /* B::A */ }
};
}
namespace A {
namespace B {
  void f(int x, const char *s) { /* ns A::B */ }
}
}
";

/// Overloads and look-alikes of `A::B::f(int, const char *)`.
///
/// The only true match is the first `f` inside `struct B`; the others differ
/// in parameter order, parameter count, nesting order, or scope kind.
#[allow(dead_code)]
pub fn program_unit(path: &str, policy: PrintingPolicy) -> TranslationUnit {
    let mut builder = TranslationUnitBuilder::new(path, PROGRAM).printing_policy(policy);
    let root = builder.root();
    builder.typedef(root, "Id", int());

    let a = builder.namespace(root, "A");
    let ab = builder.record(a, TagKind::Struct, "B");
    define(
        &mut builder,
        ab,
        "f",
        vec![int(), c_str()],
        "void f(int x, const char *s) { /* A::B int,str */ }",
    );
    define(
        &mut builder,
        ab,
        "f",
        vec![c_str(), int()],
        "void f(const char *s, int x) { /* A::B str,int */ }",
    );
    define(
        &mut builder,
        ab,
        "f",
        vec![int()],
        "void f(int x) { /* A::B int */ }",
    );

    let b = builder.namespace(root, "B");
    let ba = builder.record(b, TagKind::Struct, "A");
    define(
        &mut builder,
        ba,
        "f",
        vec![int(), c_str()],
        "void f(int x, const char *s) { /* B::A */ }",
    );

    let a2 = builder.namespace(root, "A");
    let ns_b = builder.namespace(a2, "B");
    define(
        &mut builder,
        ns_b,
        "f",
        vec![int(), c_str()],
        "void f(int x, const char *s) { /* ns A::B */ }",
    );

    builder.build()
}
