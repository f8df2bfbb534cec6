//! CSV output formatting.

use crate::error::IpError;
use crate::models::{CidrBlock, CidrDetail};
use crate::processing::{BatchEntry, BatchValue};
use itertools::Itertools;
use std::net::Ipv4Addr;

use super::terminal::format_field;

const DETAIL_HEADER: &str = r#"           "range",         "netmask",   "wildcard_mask",        "first_ip", "first_ip_int",         "last_ip",  "last_ip_int", "total_host""#;
const BLOCK_HEADER: &str = r#" "cnt",       "cidr_block",        "first_ip",         "last_ip", "total_host""#;
const BATCH_HEADER: &str = r#""line",                         "query",    "ok",                  "kind",  "result""#;

/// Render a split result as a header plus one CSV row.
pub fn detail_csv(detail: &CidrDetail) -> String {
    let row = [
        format_field(&detail.range, 34),
        format_field(&detail.netmask, 17),
        format_field(&detail.wildcard_mask, 17),
        format_field(&detail.first_ip, 17),
        format_field(detail.first_ip_int, 14),
        format_field(&detail.last_ip, 17),
        format_field(detail.last_ip_int, 14),
        format_field(detail.total_host, 12),
    ]
    .join(",");
    format!("{DETAIL_HEADER}\n{row}\n")
}

/// Render a block list, one CSV row per block.
pub fn blocks_csv(blocks: &[CidrBlock]) -> String {
    let rows = blocks.iter().enumerate().map(|(i, b)| {
        [
            format_field(i + 1, 6),
            format_field(b, 18),
            format_field(b.lo(), 17),
            format_field(b.hi(), 17),
            format_field(b.size(), 12),
        ]
        .join(",")
    });
    std::iter::once(BLOCK_HEADER.to_string())
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}

pub fn address_csv(addr: &Ipv4Addr) -> String {
    format!("\"address\"\n{}\n", format_field(addr, 0))
}

pub fn error_csv(error: &IpError) -> String {
    format!(
        "\"kind\",\"message\"\n{},{}\n",
        format_field(error.kind(), 0),
        format_field(escape(error.message()), 0)
    )
}

/// Render a batch, one CSV row per evaluated line.
pub fn batch_csv(entries: &[BatchEntry]) -> String {
    let rows = entries.iter().map(|e| {
        let (ok, kind, result) = match &e.outcome {
            Ok(BatchValue::Detail(d)) => (true, "cidr".to_string(), d.range.clone()),
            Ok(BatchValue::Blocks(blocks)) => (true, "range".to_string(), blocks.iter().join(" ")),
            Ok(BatchValue::Address(addr)) => (true, "ipv4".to_string(), addr.to_string()),
            Err(err) => (false, err.kind().to_string(), escape(err.message())),
        };
        [
            format_field(e.line, 6),
            format_field(escape(&e.query), 33),
            format_field(ok, 7),
            format_field(kind, 22),
            format_field(result, 0),
        ]
        .join(",")
    });
    std::iter::once(BATCH_HEADER.to_string())
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}

/// Double embedded quotes so the quoted field stays valid CSV.
fn escape(input: &str) -> String {
    input.replace('"', "\"\"")
}
