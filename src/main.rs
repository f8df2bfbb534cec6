use cidr_range_calc::cli::{execute, Cli};
use cidr_range_calc::config::{init_logging, Config};
use clap::Parser;
use std::error::Error;
use std::io::Write;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(log_config) = cli.log_config {
        config.log_config = log_config;
    }
    init_logging(&config)?;
    log::info!("#Start main()");

    let outcome = execute(&cli.command, config.format)?;
    let mut stdout = std::io::stdout();
    stdout.write_all(outcome.text.as_bytes())?;
    stdout.flush()?;

    if !outcome.success {
        std::process::exit(1);
    }
    Ok(())
}
