//! Validation of textual IPv4 input.
//!
//! - [`validate_ipv4`] - plain dotted quad
//! - [`validate_cidr`] - dotted quad with a mandatory `/mask`
//! - [`parse_range`] - `start-end` pair of plain addresses

mod scanner;

use crate::error::IpError;
pub use scanner::{scan_cidr, scan_ipv4};

/// Validate a plain IPv4 address, e.g. `"10.0.0.1"`.
pub fn validate_ipv4(input: &str) -> Result<[u8; 4], IpError> {
    scan_ipv4(input).map_err(|e| {
        log::warn!("rejected IPv4 input {input:?}: {e}");
        e
    })
}

/// Validate CIDR notation, e.g. `"10.0.0.0/24"`. The mask must be 1-32.
pub fn validate_cidr(input: &str) -> Result<([u8; 4], u8), IpError> {
    scan_cidr(input).map_err(|e| {
        log::warn!("rejected CIDR input {input:?}: {e}");
        e
    })
}

/// Validate a range written as `"a.b.c.d-e.f.g.h"`. Spaces around the dash are allowed.
pub fn parse_range(input: &str) -> Result<([u8; 4], [u8; 4]), IpError> {
    let (start, end) = input.split_once('-').ok_or_else(|| {
        IpError::validation(format!(
            "IP range should be written as start-end: '{}'",
            input.trim()
        ))
    })?;
    Ok((validate_ipv4(start)?, validate_ipv4(end)?))
}
