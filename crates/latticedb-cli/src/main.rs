mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use commands::query::Query;
use error::{CliResult, exit_with_error};

fn init_tracing(cli: &Cli) {
    // logs go to stderr; stdout carries JSON only
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(err) = run(cli) {
        exit_with_error(&err);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = commands::load_config(cli.config.as_deref())?;

    let query = match cli.command {
        Commands::Build => return commands::build::run(&config),
        Commands::Chance { x1, y1, x2, y2 } => Query::Chance { x1, y1, x2, y2 },
        Commands::Edges { x, y } => Query::Edges { x, y },
        Commands::Info { x, y } => Query::Info { x, y },
        Commands::Paths { x, y } => Query::Paths { x, y },
        Commands::Report => Query::Report,
    };

    commands::query::run(&config, query)
}
