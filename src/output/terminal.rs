//! Terminal output utilities.
//!
//! Provides the coloured table view and formatting helpers shared with CSV.

use crate::error::IpError;
use crate::models::{CidrBlock, CidrDetail};
use crate::processing::{BatchEntry, BatchValue};
use colored::Colorize;
use itertools::Itertools;
use std::fmt::Write;
use std::net::Ipv4Addr;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn label(name: &str) -> String {
    format!("{name:<14}").bold().to_string()
}

/// Key/value table of a split result.
pub fn detail_table(detail: &CidrDetail) -> String {
    let rows = [
        ("Range", detail.range.green().to_string()),
        ("Netmask", detail.netmask.clone()),
        ("Wildcard mask", detail.wildcard_mask.clone()),
        (
            "First IP",
            format!("{} ({})", detail.first_ip, detail.first_ip_int),
        ),
        (
            "Last IP",
            format!("{} ({})", detail.last_ip, detail.last_ip_int),
        ),
        ("Total hosts", detail.total_host.to_string().yellow().to_string()),
    ];
    rows.iter()
        .map(|(name, value)| format!("{} {value}\n", label(name)))
        .collect()
}

/// One line per block with its address span.
pub fn blocks_table(blocks: &[CidrBlock]) -> String {
    let mut out = String::new();
    for (i, b) in blocks.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {}  {} - {}  ({} hosts)",
            i + 1,
            format!("{:<18}", b.to_string()).green(),
            b.lo(),
            b.hi(),
            b.size()
        );
    }
    let total: u64 = blocks.iter().map(|b| b.size()).sum();
    let _ = writeln!(
        out,
        "{} {} block(s), {} hosts",
        "#".dimmed(),
        blocks.len(),
        total
    );
    out
}

pub fn address_table(addr: &Ipv4Addr) -> String {
    format!("{addr} is a valid IPv4 address\n")
}

pub fn error_table(error: &IpError) -> String {
    format!("{} {}\n", error.kind().as_str().on_red(), error.message())
}

/// Batch view: status marker, line number, query and its result.
pub fn batch_table(entries: &[BatchEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let result = match &e.outcome {
            Ok(BatchValue::Detail(d)) => format!("{} ({} hosts)", d.range, d.total_host),
            Ok(BatchValue::Blocks(blocks)) => blocks.iter().join(", "),
            Ok(BatchValue::Address(addr)) => format!("{addr} is a valid IPv4 address"),
            Err(err) => format!("{} {}", err.kind().as_str().red(), err.message()),
        };
        let marker = if e.is_ok() { "ok".green() } else { "ERR".red() };
        let _ = writeln!(
            out,
            "{marker:>3} {:>4}: {:<33} {result}",
            e.line, e.query
        );
    }
    out
}
