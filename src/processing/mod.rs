//! Address calculations.
//!
//! This module contains the calculators behind every command:
//! - [`split`] - CIDR block to netmask/wildcard/first/last details
//! - [`range`] - inclusive address range to a minimal list of CIDR blocks
//! - [`batch`] - many queries, one per line

mod batch;
mod range;
mod split;

// Re-export public functions
pub use batch::{read_batch_file, run_batch, run_query, BatchEntry, BatchValue};
pub use range::{ip_range_to_cidr, ip_range_to_cidr_str, range_of};
pub use split::{split_cidr, split_cidr_str};
