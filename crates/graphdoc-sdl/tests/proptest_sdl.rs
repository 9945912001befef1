use proptest::prelude::*;

use graphdoc_sdl::{parse, render_document};

/// Strategy for type names: uppercase-first, never a declaration keyword.
fn type_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,8}"
}

/// Strategy for field names.
fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}"
}

proptest! {
    /// The parser never panics, whatever the input.
    #[test]
    fn parse_never_panics(input in "\\PC{0,200}") {
        let _ = parse(&input);
    }

    /// One registry record per declaration, in declaration order.
    #[test]
    fn one_record_per_declaration(
        names in proptest::collection::hash_set("[A-Z][a-zA-Z0-9]{0,8}", 1..8),
        field in field_name(),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let source: String = names
            .iter()
            .map(|name| format!("type {name} {{ {field}: Int }}\n"))
            .collect();

        let registry = parse(&source).expect("generated schema should parse");
        prop_assert_eq!(registry.len(), names.len());
        let parsed: Vec<&str> = registry.records().iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        prop_assert_eq!(parsed, expected);
    }

    /// Enum values come back in declared order.
    #[test]
    fn enum_values_in_declared_order(
        values in proptest::collection::hash_set("[A-Z][A-Z0-9_]{0,8}", 1..10),
    ) {
        let values: Vec<String> = values.into_iter().collect();
        let source = format!("enum Sample {{ {} }}", values.join(" "));
        let registry = parse(&source).expect("generated enum should parse");
        let parsed: Vec<&str> = registry.records()[0]
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        let expected: Vec<&str> = values.iter().map(|s| s.as_str()).collect();
        prop_assert_eq!(parsed, expected);
    }

    /// Rendering the same registry twice is byte-identical.
    #[test]
    fn rendering_is_idempotent(
        name in type_name(),
        field in field_name(),
    ) {
        let source = format!(
            "type Query {{ {field}: {name} }}\ntype {name} {{ id: ID! }}"
        );
        if let Ok(registry) = parse(&source) {
            if registry.get("Query").is_none() {
                // `name` collided with Query and replaced it; skip.
                return Ok(());
            }
            let first = render_document(registry.clone()).expect("render");
            let second = render_document(registry).expect("render");
            prop_assert_eq!(first, second);
        }
    }

    /// A declared scalar never renders as a cross-link, under any wrapping.
    #[test]
    fn declared_scalar_is_never_linked(
        scalar in "[A-Z][a-zA-Z0-9]{2,8}",
        wrap in prop_oneof![
            Just("{}"),
            Just("{}!"),
            Just("[{}]"),
            Just("[{}!]!"),
        ],
    ) {
        // Keep the scalar name clear of the fixed type names.
        prop_assume!(scalar != "Query" && scalar != "Mutation");

        let expr = wrap.replace("{}", &scalar);
        let source = format!(
            "scalar {scalar}\ntype Query {{ value: {expr} }}"
        );
        let registry = parse(&source).expect("generated schema should parse");
        let document = render_document(registry).expect("render");
        prop_assert!(!document.contains(&format!("(#{}", scalar.to_lowercase())), "declared scalar must not render as a cross-link");
        prop_assert!(document.contains(&format!("`{expr}`")), "type expression must be rendered verbatim");
    }
}
