//! Output formatting for calculation results.
//!
//! This module handles rendering results in the selected [`OutputFormat`]:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

use crate::error::IpError;
use crate::models::{CidrBlock, CidrDetail};
use crate::processing::BatchEntry;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::str::FromStr;

pub use terminal::format_field;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format '{other}', expected table, csv or json"
            )),
        }
    }
}

pub fn render_detail(detail: &CidrDetail, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => terminal::detail_table(detail),
        OutputFormat::Csv => csv::detail_csv(detail),
        OutputFormat::Json => json::to_json(detail),
    }
}

pub fn render_blocks(blocks: &[CidrBlock], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => terminal::blocks_table(blocks),
        OutputFormat::Csv => csv::blocks_csv(blocks),
        OutputFormat::Json => json::to_json(blocks),
    }
}

/// Result of validating a plain address.
#[derive(Serialize, Debug)]
struct AddressReport {
    ok: bool,
    address: Ipv4Addr,
}

pub fn render_address(addr: &Ipv4Addr, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => terminal::address_table(addr),
        OutputFormat::Csv => csv::address_csv(addr),
        OutputFormat::Json => json::to_json(&AddressReport {
            ok: true,
            address: *addr,
        }),
    }
}

pub fn render_error(error: &IpError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => terminal::error_table(error),
        OutputFormat::Csv => csv::error_csv(error),
        OutputFormat::Json => json::to_json(error),
    }
}

pub fn render_batch(entries: &[BatchEntry], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => terminal::batch_table(entries),
        OutputFormat::Csv => csv::batch_csv(entries),
        OutputFormat::Json => json::to_json(entries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" CSV ".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert!("xml".parse::<OutputFormat>().unwrap_err().contains("xml"));
    }

    #[test]
    fn test_render_address() {
        let addr = Ipv4Addr::new(1, 2, 3, 4);
        let json = render_address(&addr, OutputFormat::Json);
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, serde_json::json!({"ok": true, "address": "1.2.3.4"}));
        assert_eq!(json, "{\n  \"ok\": true,\n  \"address\": \"1.2.3.4\"\n}\n");

        assert_eq!(
            render_address(&addr, OutputFormat::Csv),
            "\"address\"\n\"1.2.3.4\"\n"
        );
        assert!(render_address(&addr, OutputFormat::Table).contains("1.2.3.4 is a valid IPv4 address"));
    }
}
