//! Result record of the CIDR splitter.

use serde::Serialize;

/// Everything known about a CIDR block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CidrDetail {
    /// `"<first> - <last>"`.
    pub range: String,
    /// Network mask as dotted quad.
    pub netmask: String,
    /// Wildcard (host) mask as dotted quad.
    pub wildcard_mask: String,
    pub first_ip: String,
    pub first_ip_int: u32,
    pub last_ip: String,
    pub last_ip_int: u32,
    /// Number of addresses in the block, 2^32 for a /0.
    pub total_host: u64,
}
