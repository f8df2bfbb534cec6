//! Command line interface.
//!
//! Argument parsing lives here so `main.rs` stays a thin shell; [`execute`]
//! turns a parsed command into rendered output.

use crate::error::IpError;
use crate::output::{
    render_address, render_batch, render_blocks, render_detail, render_error, OutputFormat,
};
use crate::parse::validate_ipv4;
use crate::processing::{ip_range_to_cidr, ip_range_to_cidr_str, read_batch_file, split_cidr_str};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::net::Ipv4Addr;

#[derive(Parser, Debug)]
#[command(name = "cidr-range-calc", version, about = "IPv4 CIDR and range calculator")]
pub struct Cli {
    /// Output format, overrides CIDR_CALC_FORMAT.
    #[arg(long, short, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// log4rs YAML file, overrides CIDR_CALC_LOG_CONFIG.
    #[arg(long, global = true)]
    pub log_config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Netmask, wildcard and first/last address of a CIDR block, e.g. 10.0.0.0/24.
    Split { cidr: String },
    /// Smallest list of CIDR blocks covering START..=END, or a single START-END argument.
    Range { start: String, end: Option<String> },
    /// Check that the argument is a plain IPv4 address.
    Validate { ip: String },
    /// Evaluate a file of queries, one per line.
    Batch { file: String },
}

/// Rendered output of a command and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: String,
    pub success: bool,
}

/// Run `command`; domain failures are rendered, I/O failures are returned.
pub fn execute(command: &Command, format: OutputFormat) -> Result<Outcome, Box<dyn Error>> {
    log::info!("#Start execute({command:?})");
    let outcome = match command {
        Command::Split { cidr } => rendered(split_cidr_str(cidr), format, render_detail),
        Command::Range { start, end } => {
            let blocks = match end {
                Some(end) => validate_ipv4(start)
                    .and_then(|s| validate_ipv4(end).map(|e| (s, e)))
                    .and_then(|(s, e)| ip_range_to_cidr(s, e)),
                None => ip_range_to_cidr_str(start),
            };
            rendered(blocks, format, |b: &Vec<_>, f| render_blocks(b, f))
        }
        Command::Validate { ip } => {
            rendered(validate_ipv4(ip).map(Ipv4Addr::from), format, render_address)
        }
        Command::Batch { file } => {
            let entries = read_batch_file(file)?;
            Outcome {
                text: render_batch(&entries, format),
                success: entries.iter().all(|e| e.is_ok()),
            }
        }
    };
    Ok(outcome)
}

fn rendered<T, F>(result: Result<T, IpError>, format: OutputFormat, render: F) -> Outcome
where
    F: Fn(&T, OutputFormat) -> String,
{
    match result {
        Ok(value) => Outcome {
            text: render(&value, format),
            success: true,
        },
        Err(e) => Outcome {
            text: render_error(&e, format),
            success: false,
        },
    }
}
