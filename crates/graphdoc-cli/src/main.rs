mod cli;
mod completions;
mod config;
mod convert;
#[allow(unused_assignments)]
mod diagnostic;
mod error;
mod output;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    init_logging(cli.global.verbose);

    if let Some(shell) = cli.completions.as_deref() {
        match completions::run(shell) {
            Ok(()) => std::process::exit(error::ExitCode::Success as i32),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(error::ExitCode::InvalidArguments as i32);
            }
        }
    }

    let output = output::OutputContext::from_global(&cli.global);
    match convert::run(&cli, &output) {
        Ok(()) => std::process::exit(error::ExitCode::Success as i32),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}

/// Route log output to stderr at a level driven by `-v` repetition.
/// `RUST_LOG` takes precedence when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
