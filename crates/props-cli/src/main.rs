//! dotenv-props CLI
//!
//! Maps keys between dotenv and properties files, reads single keys and
//! merges documents of one format.

mod cli;
mod commands;
mod context;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use context::RunContext;
use error::{CliError, Result};
use props_content::Format;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = if verbose {
        tracing::subscriber::set_global_default(builder.with_max_level(Level::DEBUG).finish())
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())
    };

    if let Err(e) = result {
        eprintln!("failed to set tracing subscriber: {e}");
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);
    tracing::debug!(command = ?cli.command, "starting");

    let ctx = RunContext::from_cli(&cli)?;
    execute_command(&ctx, cli.command)
}

fn execute_command(ctx: &RunContext, cmd: Commands) -> Result<()> {
    match &cmd {
        Commands::E2p(args) | Commands::P2e(args) | Commands::P2p(args) | Commands::E2e(args) => {
            let formats = cmd
                .map_formats()
                .ok_or_else(|| CliError::user("Invalid mapping command"))?;
            commands::run_map(ctx, formats, args)
        }
        Commands::Re(args) => commands::run_read(Format::Dotenv, args),
        Commands::Rp(args) => commands::run_read(Format::Properties, args),
        Commands::Me(args) => commands::run_merge(ctx, Format::Dotenv, args),
        Commands::Mp(args) => commands::run_merge(ctx, Format::Properties, args),
        Commands::Completions { shell } => {
            clap_complete::generate(
                *shell,
                &mut Cli::command(),
                "dotenv-props-tool",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
