use anyhow::{Context, Result};
use benchsift::{cli::Cli, config::Config, input, report};
use clap::Parser;
use std::io::{IsTerminal, Write};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; advisories go to stderr at warn level
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let base = match &args.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };
    let config = args.apply(base);

    // Configuration errors are fatal before any table is read
    config.validate()?;

    let tables = input::load_tables(&args.inputs)?;
    let output = report::run(tables, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write report")?;
    stdout.flush().context("failed to write report")?;

    Ok(())
}
