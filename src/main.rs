//! Tasker - command-line task tracker backed by a single JSON file

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tasker::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    // Warnings go to stderr so they never pollute command output.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tasker=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Completion generation needs no task data.
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "tasker", &mut std::io::stdout());
        return Ok(());
    }

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(&cli.file, args),
        Some(Commands::List(args)) => cli::list::run(&cli.file, args),
        Some(Commands::Complete(args)) => cli::complete::run(&cli.file, args),
        Some(Commands::Delete(args)) => cli::delete::run(&cli.file, args),
        None => cli::repl::run(&cli.file),
        _ => unreachable!(),
    }
}
