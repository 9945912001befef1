use graphdoc_sdl::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};

/// A diagnostic wrapping a `ParseError` for rich miette rendering.
///
/// Provides source code highlighting, span labels, and suggestions when
/// rendering parse errors in human-readable mode.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct SchemaDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Convert a `ParseError` into a miette `SchemaDiagnostic`.
pub fn parse_error_to_diagnostic(
    error: &ParseError,
    source: &str,
    filename: &str,
) -> SchemaDiagnostic {
    let named_src = NamedSource::new(filename, source.to_string());

    match error {
        ParseError::UnknownDeclaration { found, span } => SchemaDiagnostic {
            src: named_src,
            span: (span.start, span.end.saturating_sub(span.start)).into(),
            message: format!("unexpected token '{found}'"),
            label: "not a declaration keyword".to_string(),
            suggestion: Some(
                "Top-level declarations start with 'type', 'input', 'enum', or 'scalar'."
                    .to_string(),
            ),
        },

        ParseError::UnexpectedDelimiter {
            found,
            expected,
            span,
        } => SchemaDiagnostic {
            src: named_src,
            span: (span.start, span.end.saturating_sub(span.start)).into(),
            message: format!("unexpected {found:?}"),
            label: format!("expected {expected}"),
            suggestion: None,
        },

        // Catch future non_exhaustive variants
        _ => SchemaDiagnostic {
            src: named_src,
            span: (0, 0).into(),
            message: error.to_string(),
            label: "error".to_string(),
            suggestion: None,
        },
    }
}

/// Render a parse error as a `miette::Report` for stderr.
pub fn render_diagnostic(error: &ParseError, source: &str, filename: &str) -> miette::Report {
    miette::Report::new(parse_error_to_diagnostic(error, source, filename))
}
