//! IPv4 CIDR calculator.
//!
//! Splits CIDR blocks into their masks and address span, and decomposes
//! inclusive address ranges into the smallest ordered list of CIDR blocks.
//! Every operation returns `Result<_, IpError>`; see [`error`] for the tags.
//!
//! This crate is organized into the following modules:
//! - [`models`] - Domain models (CidrBlock, AddressRange, CidrDetail)
//! - [`parse`] - Validation of textual addresses, CIDRs and ranges
//! - [`processing`] - The splitter, the range decomposer and batch mode
//! - [`output`] - Table, CSV and JSON rendering
//! - [`config`] - Environment configuration and logging setup
//! - [`cli`] - Command line parsing and dispatch

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod parse;
pub mod processing;

pub use error::{ErrorKind, IpError};
pub use models::{CidrBlock, CidrDetail};
pub use parse::{validate_cidr, validate_ipv4};
pub use processing::{ip_range_to_cidr, split_cidr};
