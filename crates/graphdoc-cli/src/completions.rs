use clap::CommandFactory;

use crate::cli::Cli;
use crate::error::CliError;

/// Generate a shell completion script and write it to stdout.
pub fn run(shell: &str) -> Result<(), CliError> {
    let shell = match shell {
        "bash" => clap_complete::Shell::Bash,
        "zsh" => clap_complete::Shell::Zsh,
        "fish" => clap_complete::Shell::Fish,
        "powershell" => clap_complete::Shell::PowerShell,
        "elvish" => clap_complete::Shell::Elvish,
        other => {
            return Err(CliError::Other(format!("unsupported shell: {other}")));
        }
    };

    clap_complete::generate(shell, &mut Cli::command(), "graphdoc", &mut std::io::stdout());

    Ok(())
}
