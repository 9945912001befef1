use std::path::PathBuf;

use clap::{ArgAction, Args, Parser};

/// Convert a GraphQL SDL schema into a Markdown type reference.
///
/// GraphDoc parses `type`, `input`, `enum`, and `scalar` declarations and
/// writes one Markdown section per declared type, with cross-links between
/// custom types.
#[derive(Parser)]
#[command(
    name = "graphdoc",
    version,
    about = "Convert a GraphQL SDL schema into a Markdown type reference",
    after_help = "Reads ./schema.graphql and writes ./schema.md unless told otherwise.\n\
                  Paths can also be set in graphdoc.toml; flags win over the config file."
)]
pub struct Cli {
    /// Input GraphQL schema file [default: ./schema.graphql]
    #[arg(short = 's', long = "schema")]
    pub schema: Option<PathBuf>,

    /// Output Markdown file [default: ./schema.md]
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Generate a shell completion script on stdout and exit
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_parser = ["bash", "zsh", "fish", "powershell", "elvish"]
    )]
    pub completions: Option<String>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options that shape every run.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: GRAPHDOC_CONFIG]
    #[arg(short = 'c', long = "config", env = "GRAPHDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", env = "NO_COLOR")]
    pub no_color: bool,
}
