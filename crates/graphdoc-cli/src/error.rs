use std::path::PathBuf;

use graphdoc_sdl::{ParseError, RenderError};

/// Exit codes for the graphdoc process.
///
/// - 0: success
/// - 1: general error (missing input file, missing Query type, I/O failure)
/// - 2: invalid arguments / configuration error
/// - 3: schema parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
}

/// Errors returned by the conversion pipeline.
///
/// Each variant maps to an [`ExitCode`] and can produce structured output
/// in JSON mode.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Structural parse error in the schema source.
    #[error("parse error in {file}: {error}")]
    Parse {
        error: ParseError,
        source_text: String,
        file: PathBuf,
    },

    /// Document assembly failed.
    #[error("{source} (in {file})")]
    Render {
        source: RenderError,
        file: PathBuf,
    },

    /// The input schema file does not exist.
    #[error("could not find input schema file '{path}'")]
    SchemaNotFound { path: PathBuf },

    /// Other I/O failures (permissions, unwritable output path).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } => ExitCode::ParseError,
            Self::Config { .. } => ExitCode::InvalidArguments,
            Self::Render { .. }
            | Self::SchemaNotFound { .. }
            | Self::Io { .. }
            | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Parse { error, file, .. } => serde_json::json!({
                "error": "parse_error",
                "file": file.display().to_string(),
                "message": error.to_string(),
            }),
            Self::Render { source, file } => serde_json::json!({
                "error": "render_error",
                "file": file.display().to_string(),
                "message": source.to_string(),
            }),
            Self::SchemaNotFound { path } => serde_json::json!({
                "error": "schema_not_found",
                "path": path.display().to_string(),
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}
