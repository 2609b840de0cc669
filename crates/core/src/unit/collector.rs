use defscope_api::{
    CandidateFunction, CollectError, CollectResult, DeclarationQuery, DefinitionCollector,
    DefinitionData, DefinitionLocation, TranslationContext,
};

/// Captures a matched definition straight from the source text of its
/// translation context.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceCollector;

impl DefinitionCollector for SourceCollector {
    fn collect(
        &self,
        candidate: &dyn CandidateFunction,
        context: &dyn TranslationContext,
        _declaration: &DeclarationQuery,
    ) -> CollectResult<DefinitionData> {
        let qualified_name = candidate.qualified_name();
        let span = candidate
            .span()
            .or(candidate.body_span())
            .ok_or_else(|| CollectError::MissingSpan(qualified_name.clone()))?;

        let source = context.source();
        let out_of_bounds = || CollectError::SpanOutOfBounds {
            path: context.file_path().display().to_string(),
            start: span.start,
            end: span.end,
        };
        let code = source.get(span.start..span.end).ok_or_else(out_of_bounds)?;
        let range = span.to_range(source).ok_or_else(out_of_bounds)?;

        Ok(DefinitionData {
            qualified_name,
            location: DefinitionLocation {
                path: context.file_path().to_path_buf(),
                range,
            },
            code: code.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{FunctionDecl, TranslationUnitBuilder};
    use defscope_api::Span;

    #[test]
    fn test_collects_text_and_range() {
        let source = "namespace m {\nint twice(int x) { return 2 * x; }\n}\n";
        let start = source.find("int twice").unwrap();
        let end = source.find("}\n}").unwrap() + 1;
        let body_start = source.find("{ return").unwrap();

        let mut builder = TranslationUnitBuilder::new("m.cpp", source);
        let root = builder.root();
        let ns = builder.namespace(root, "m");
        let f = builder.function(
            ns,
            FunctionDecl::new("twice")
                .span(Span::new(start, end))
                .body(Span::new(body_start, end)),
        );
        let unit = builder.build();
        let candidate = unit.function(f).unwrap();
        let declaration = DeclarationQuery::new("twice", vec![], vec![]);

        let data = SourceCollector
            .collect(&candidate, &unit, &declaration)
            .unwrap();

        assert_eq!(data.qualified_name, "m::twice");
        assert_eq!(data.code, "int twice(int x) { return 2 * x; }");
        assert_eq!(data.location.path, std::path::PathBuf::from("m.cpp"));
        assert_eq!(data.location.range.start_line, 1);
        assert_eq!(data.location.range.end_col, 34);
    }

    #[test]
    fn test_missing_span_is_an_error() {
        let mut builder = TranslationUnitBuilder::new("m.cpp", "");
        let root = builder.root();
        let f = builder.function(root, FunctionDecl::new("f"));
        let unit = builder.build();
        let candidate = unit.function(f).unwrap();
        let declaration = DeclarationQuery::new("f", vec![], vec![]);

        let err = SourceCollector
            .collect(&candidate, &unit, &declaration)
            .unwrap_err();
        assert!(matches!(err, CollectError::MissingSpan(ref name) if name == "f"));
    }

    #[test]
    fn test_span_past_end_is_an_error() {
        let mut builder = TranslationUnitBuilder::new("m.cpp", "void f() {}");
        let root = builder.root();
        let f = builder.function(root, FunctionDecl::new("f").span(Span::new(0, 64)));
        let unit = builder.build();
        let candidate = unit.function(f).unwrap();
        let declaration = DeclarationQuery::new("f", vec![], vec![]);

        let err = SourceCollector
            .collect(&candidate, &unit, &declaration)
            .unwrap_err();
        assert!(matches!(err, CollectError::SpanOutOfBounds { end: 64, .. }));
    }
}
