use std::collections::HashSet;

use graphdoc_core::types::{TypeExpr, TypeKind, TypeRecord};
use graphdoc_core::SchemaRegistry;

use crate::error::RenderError;

/// Renders the complete Markdown document for a parsed registry.
///
/// Consumes the registry: `Query` (mandatory) and `Mutation` (optional) are
/// pulled into the entrypoint section, then every remaining record renders
/// under "Custom Data Types" in declaration order. Every section uses the
/// full accumulated scalar set for its link decisions.
pub fn render_document(mut registry: SchemaRegistry) -> Result<String, RenderError> {
    let scalars = registry.scalars().clone();

    let query = registry.take("Query").ok_or(RenderError::MissingQueryRoot)?;
    let mutation = registry.take("Mutation");

    let mut sections = vec![
        "# Entrypoint Data Types".to_string(),
        render_section(&query, &scalars),
    ];
    if let Some(mutation) = mutation {
        sections.push(render_section(&mutation, &scalars));
    }
    sections.push("# Custom Data Types".to_string());
    for record in registry.records() {
        sections.push(render_section(record, &scalars));
    }

    Ok(sections.join("\n\n"))
}

/// Renders one record as a level-2 Markdown section.
///
/// Scalars get a heading and a class note; enums a single centered "Values"
/// column; types and inputs a Field/Description table.
pub fn render_section(record: &TypeRecord, scalars: &HashSet<String>) -> String {
    let heading = format!("## {}", record.name);
    let class_note = format!("Datatype class: *{}*", record.kind.class_label());

    match record.kind {
        TypeKind::Scalar => format!("{heading}\n\n{class_note}"),
        TypeKind::Enum => {
            let rows: Vec<Vec<String>> = record
                .fields
                .iter()
                .map(|f| vec![format!("**`{}`**", f.name)])
                .collect();
            let table = markdown_table(&["Values"], Some(&[":-:"]), &rows);
            format!("{heading}\n\n{class_note}\n\n{table}")
        }
        TypeKind::Object | TypeKind::Input => {
            let rows: Vec<Vec<String>> = record
                .fields
                .iter()
                .map(|f| {
                    vec![
                        format!("**`{}`:** {}", f.name, render_type_expr(&f.type_expr, scalars)),
                        "-".to_string(),
                    ]
                })
                .collect();
            let table = markdown_table(&["Field", "Description"], None, &rows);
            format!("{heading}\n\n{class_note}\n\n{table}")
        }
    }
}

/// Renders a type expression for a table cell.
///
/// A scalar reference stays verbatim inside one code span. Anything else
/// replaces the bare identifier with an `<ins>`-styled link to its section
/// anchor, keeping the wrapper punctuation around it inside code spans.
fn render_type_expr(expr: &TypeExpr, scalars: &HashSet<String>) -> String {
    let ident = expr.base_ident();
    if ident.is_empty() || scalars.contains(&ident) {
        return format!("`{expr}`");
    }

    let link = format!(
        "`[<ins>`{ident}`</ins>](#{anchor})`",
        anchor = ident.to_lowercase()
    );
    let raw = expr.as_str();
    let mut rendered = raw.split(ident.as_str()).collect::<Vec<_>>().join(&link);

    rendered = if raw.starts_with(ident.as_str()) {
        rendered.trim_start_matches('`').to_string()
    } else {
        format!("`{rendered}")
    };
    if raw.ends_with(ident.as_str()) {
        rendered.trim_end_matches('`').to_string()
    } else {
        format!("{rendered}`")
    }
}

/// Formats a Markdown table. Alignments default to `---` per column.
fn markdown_table(headers: &[&str], alignments: Option<&[&str]>, rows: &[Vec<String>]) -> String {
    let header_row = format!("| {} |", headers.join(" | "));
    let alignment_row = match alignments {
        Some(markers) => format!("| {} |", markers.join(" | ")),
        None => format!("| {} |", vec!["---"; headers.len()].join(" | ")),
    };
    let body: Vec<String> = rows
        .iter()
        .map(|row| format!("| {} |", row.join(" | ")))
        .collect();
    format!("{header_row}\n{alignment_row}\n{}", body.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphdoc_core::BUILTIN_SCALARS;

    fn builtin_scalars() -> HashSet<String> {
        BUILTIN_SCALARS.iter().map(|s| s.to_string()).collect()
    }

    fn expr_md(raw: &str, scalars: &HashSet<String>) -> String {
        render_type_expr(&TypeExpr::new(raw), scalars)
    }

    // -- Type expression rendering --

    #[test]
    fn scalar_expression_is_plain_code() {
        let scalars = builtin_scalars();
        assert_eq!(expr_md("String", &scalars), "`String`");
        assert_eq!(expr_md("[String!]!", &scalars), "`[String!]!`");
    }

    #[test]
    fn declared_scalar_is_plain_code() {
        let mut scalars = builtin_scalars();
        scalars.insert("DateTime".to_string());
        assert_eq!(expr_md("DateTime", &scalars), "`DateTime`");
        assert_eq!(expr_md("[DateTime!]!", &scalars), "`[DateTime!]!`");
    }

    #[test]
    fn bare_custom_type_is_a_naked_link() {
        let scalars = builtin_scalars();
        assert_eq!(expr_md("User", &scalars), "[<ins>`User`</ins>](#user)");
    }

    #[test]
    fn non_null_custom_type_keeps_suffix_in_code() {
        let scalars = builtin_scalars();
        assert_eq!(expr_md("User!", &scalars), "[<ins>`User`</ins>](#user)`!`");
    }

    #[test]
    fn wrapped_custom_type_keeps_punctuation_around_link() {
        let scalars = builtin_scalars();
        assert_eq!(
            expr_md("[User!]!", &scalars),
            "`[`[<ins>`User`</ins>](#user)`!]!`"
        );
    }

    #[test]
    fn anchor_is_lowercased() {
        let scalars = builtin_scalars();
        assert!(expr_md("BlogPost", &scalars).contains("(#blogpost)"));
    }

    // -- Tables --

    #[test]
    fn table_default_alignment() {
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        assert_eq!(
            markdown_table(&["Field", "Description"], None, &rows),
            "| Field | Description |\n| --- | --- |\n| a | b |"
        );
    }

    #[test]
    fn table_custom_alignment() {
        let rows = vec![vec!["x".to_string()], vec!["y".to_string()]];
        assert_eq!(
            markdown_table(&["Values"], Some(&[":-:"]), &rows),
            "| Values |\n| :-: |\n| x |\n| y |"
        );
    }

    // -- Sections --

    #[test]
    fn scalar_section_has_no_table() {
        let record = TypeRecord::new("DateTime", TypeKind::Scalar);
        assert_eq!(
            render_section(&record, &builtin_scalars()),
            "## DateTime\n\nDatatype class: *scalar*"
        );
    }

    #[test]
    fn enum_section_lists_values_in_order() {
        let mut record = TypeRecord::new("Color", TypeKind::Enum);
        for value in ["RED", "GREEN", "BLUE"] {
            record.put_field(value, TypeExpr::default());
        }
        let section = render_section(&record, &builtin_scalars());
        assert!(section.contains("Datatype class: *Enum*"));
        assert_eq!(
            section.lines().filter(|l| l.starts_with("| **`")).count(),
            3
        );
        let red = section.find("RED").unwrap();
        let green = section.find("GREEN").unwrap();
        let blue = section.find("BLUE").unwrap();
        assert!(red < green && green < blue);
    }

    #[test]
    fn object_section_renders_field_table() {
        let mut record = TypeRecord::new("User", TypeKind::Object);
        record.put_field("id", TypeExpr::new("ID!"));
        record.put_field("posts", TypeExpr::new("[Post!]!"));
        let section = render_section(&record, &builtin_scalars());
        assert!(section.starts_with("## User"));
        assert!(section.contains("Datatype class: *Type*"));
        assert!(section.contains("| Field | Description |"));
        assert!(section.contains("| **`id`:** `ID!` | - |"));
        assert!(section.contains("| **`posts`:** `[`[<ins>`Post`</ins>](#post)`!]!` | - |"));
    }

    #[test]
    fn input_section_uses_input_label() {
        let mut record = TypeRecord::new("NewUser", TypeKind::Input);
        record.put_field("name", TypeExpr::new("String!"));
        let section = render_section(&record, &builtin_scalars());
        assert!(section.contains("Datatype class: *Input*"));
    }

    // -- Documents --

    fn sample_registry() -> SchemaRegistry {
        crate::parser::parse(
            "scalar DateTime
             type Query { user: User }
             type User { id: ID! name: String createdAt: DateTime }",
        )
        .expect("sample should parse")
    }

    #[test]
    fn document_orders_entrypoints_before_customs() {
        let document = render_document(sample_registry()).unwrap();
        let entry = document.find("# Entrypoint Data Types").unwrap();
        let query = document.find("## Query").unwrap();
        let custom = document.find("# Custom Data Types").unwrap();
        let user = document.find("## User").unwrap();
        assert!(entry < query && query < custom && custom < user);
    }

    #[test]
    fn document_links_custom_and_not_declared_scalar() {
        let document = render_document(sample_registry()).unwrap();
        assert!(document.contains("| **`user`:** [<ins>`User`</ins>](#user) | - |"));
        assert!(document.contains("| **`createdAt`:** `DateTime` | - |"));
        assert!(document.contains("## DateTime\n\nDatatype class: *scalar*"));
    }

    #[test]
    fn document_without_mutation_has_no_mutation_heading() {
        let document = render_document(sample_registry()).unwrap();
        assert!(!document.contains("## Mutation"));
    }

    #[test]
    fn document_with_mutation_renders_it_in_entrypoints() {
        let registry = crate::parser::parse(
            "type Query { ok: Boolean }
             type Mutation { touch: Boolean }
             type Extra { n: Int }",
        )
        .unwrap();
        let document = render_document(registry).unwrap();
        let mutation = document.find("## Mutation").unwrap();
        let custom = document.find("# Custom Data Types").unwrap();
        assert!(mutation < custom);
    }

    #[test]
    fn missing_query_is_an_error() {
        let registry = crate::parser::parse("type User { id: ID! }").unwrap();
        assert_eq!(
            render_document(registry).unwrap_err(),
            RenderError::MissingQueryRoot
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let registry = sample_registry();
        let first = render_document(registry.clone()).unwrap();
        let second = render_document(registry).unwrap();
        assert_eq!(first, second);
    }
}
