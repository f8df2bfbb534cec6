//! Domain models for the CIDR calculator.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`CidrBlock`] - IPv4 address with a prefix length
//! - [`AddressRange`] - inclusive range of packed addresses
//! - [`CidrDetail`] - result of splitting a block

mod detail;
mod ipv4;

// Re-export public types
pub use detail::CidrDetail;
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, lo_mask, num_hosts, octets_to_u32, u32_to_octets,
    wildcard_mask, AddressRange, CidrBlock, MAX_LENGTH,
};
