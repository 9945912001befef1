use std::path::Path;

use graphdoc_core::types::TypeKind;

use crate::cli::Cli;
use crate::config::{self, ResolvedPaths};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the conversion pipeline: read the schema, parse it, render the
/// Markdown document, and write it out with a single trailing newline.
pub fn run(cli: &Cli, output: &OutputContext) -> Result<(), CliError> {
    let config = config::load_config(cli.global.config.as_deref())?;
    let ResolvedPaths {
        schema: schema_path,
        output: output_path,
    } = config::resolve_paths(&config, cli);

    output.status("Parsing GraphQL schema...");
    tracing::info!(path = %schema_path.display(), "reading schema");
    let source_text = read_schema(&schema_path)?;

    let registry = graphdoc_sdl::parse(&source_text).map_err(|error| CliError::Parse {
        error,
        source_text: source_text.clone(),
        file: schema_path.clone(),
    })?;

    let type_count = registry.len();
    let scalar_count = registry
        .records()
        .iter()
        .filter(|r| r.kind == TypeKind::Scalar)
        .count();

    output.status("Writing output schema as markdown tables...");
    let document = graphdoc_sdl::render_document(registry).map_err(|source| CliError::Render {
        source,
        file: schema_path.clone(),
    })?;

    tracing::info!(path = %output_path.display(), bytes = document.len() + 1, "writing document");
    std::fs::write(&output_path, format!("{document}\n")).map_err(|e| CliError::Io {
        path: output_path.clone(),
        source: e,
    })?;

    output.success(&format!(
        "{type_count} types documented in {}",
        output_path.display()
    ));

    if output.mode == OutputMode::Json {
        output.print_json(&serde_json::json!({
            "input": schema_path.display().to_string(),
            "output": output_path.display().to_string(),
            "types": type_count,
            "declared_scalars": scalar_count,
        }));
    }

    Ok(())
}

/// Read the schema source, distinguishing a missing file from other I/O
/// failures so the two map to different reports.
fn read_schema(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CliError::SchemaNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CliError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}
