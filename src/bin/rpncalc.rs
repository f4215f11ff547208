use clap::Parser;
use rpncalc::{
    config::{ConfigError, ShellConfig},
    shell::Shell,
};
use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "rpncalc.json")]
    config: PathBuf,

    /// Evaluate an expression instead of starting the prompt (repeatable)
    #[arg(short, long = "expr", value_name = "EXPR")]
    expressions: Vec<String>,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("No console.")]
    NoConsole,
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = ShellConfig::load_or_default(&cli.config)?;
    info!("config loaded.");
    debug!("config: {:?}", config);

    let mut shell = Shell::new(&config);
    let mut stdout = io::stdout().lock();

    if !cli.expressions.is_empty() {
        for expression in &cli.expressions {
            shell.evaluate_line(expression, &mut stdout)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Err(CliError::NoConsole);
    }
    shell.run(stdin.lock(), &mut stdout)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
