use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::CliError;

/// CLI configuration loaded from graphdoc.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Default input/output paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_schema_path")]
    pub schema: String,
    #[serde(default = "default_output_path")]
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            schema: default_schema_path(),
            output: default_output_path(),
        }
    }
}

fn default_schema_path() -> String {
    "./schema.graphql".to_string()
}

fn default_output_path() -> String {
    "./schema.md".to_string()
}

/// Input and output paths after merging config + CLI flags.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub schema: PathBuf,
    pub output: PathBuf,
}

/// Discovery order for the config file:
/// 1. `--config <path>` (explicit)
/// 2. `GRAPHDOC_CONFIG` env var
/// 3. `./graphdoc.toml` (project-local)
/// 4. `$XDG_CONFIG_HOME/graphdoc/config.toml`
/// 5. `~/.config/graphdoc/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    if let Ok(env_path) = std::env::var("GRAPHDOC_CONFIG") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    let local = PathBuf::from("graphdoc.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("graphdoc/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/graphdoc/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    // No config file found; use defaults.
    Ok(CliConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}

/// Resolve input/output paths from config + CLI overrides.
///
/// CLI flags take precedence over config file values, which take
/// precedence over the built-in defaults.
pub fn resolve_paths(config: &CliConfig, cli: &Cli) -> ResolvedPaths {
    ResolvedPaths {
        schema: cli
            .schema
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.paths.schema)),
        output: cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.paths.output)),
    }
}
