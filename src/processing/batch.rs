//! Batch queries, one per line.
//!
//! Each line is classified and evaluated on its own; a bad line yields a
//! failed entry and the rest of the batch carries on.

use crate::error::IpError;
use crate::models::{CidrBlock, CidrDetail};
use crate::parse::validate_ipv4;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;
use std::path::Path;

use super::range::ip_range_to_cidr_str;
use super::split::split_cidr_str;

lazy_static! {
    static ref RANGE_RE: Regex = Regex::new(r"^[^-]+-[^-]+$").expect("Invalid Regex?");
    static ref CIDR_RE: Regex = Regex::new(r"^[^/]*/[^/]*$").expect("Invalid Regex?");
}

/// Successful payload of a batch line.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum BatchValue {
    /// A CIDR line was split.
    Detail(CidrDetail),
    /// A range line was decomposed.
    Blocks(Vec<CidrBlock>),
    /// A plain address validated fine.
    Address(Ipv4Addr),
}

/// One evaluated line.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// 1-based line number in the input.
    pub line: usize,
    pub query: String,
    #[serde(with = "outcome")]
    pub outcome: Result<BatchValue, IpError>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Evaluate a single query.
pub fn run_query(query: &str) -> Result<BatchValue, IpError> {
    let query = query.trim();
    if RANGE_RE.is_match(query) {
        ip_range_to_cidr_str(query).map(BatchValue::Blocks)
    } else if CIDR_RE.is_match(query) {
        split_cidr_str(query).map(BatchValue::Detail)
    } else {
        validate_ipv4(query).map(|octets| BatchValue::Address(Ipv4Addr::from(octets)))
    }
}

/// Evaluate every non-empty, non-comment line of `input`.
pub fn run_batch(input: &str) -> Vec<BatchEntry> {
    let entries: Vec<BatchEntry> = input
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| BatchEntry {
            line: i + 1,
            query: line.trim().to_string(),
            outcome: run_query(line),
        })
        .collect();

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    log::info!(
        "run_batch() evaluated {} queries, {failed} failed",
        entries.len()
    );
    entries
}

/// Read a batch file and evaluate it.
pub fn read_batch_file(path: &str) -> Result<Vec<BatchEntry>, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Batch file does not exist: {path}").into());
    }
    log::info!("Reading batch file: {path}");
    let input = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading batch file {path}: {e}"))?;
    Ok(run_batch(&input))
}

/// Serializes a line result as `{"ok": true, ...}` or `{"ok": false, "error": ...}`.
mod outcome {
    use super::{BatchValue, IpError};
    use serde::ser::SerializeMap;
    use serde::Serializer;

    pub fn serialize<S>(outcome: &Result<BatchValue, IpError>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        match outcome {
            Ok(value) => {
                map.serialize_entry("ok", &true)?;
                map.serialize_entry("result", value)?;
            }
            Err(e) => {
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("error", e)?;
            }
        }
        map.end()
    }
}
