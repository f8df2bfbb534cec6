//! CIDR splitting.
//!
//! Breaks a block into its netmask, wildcard and first/last addresses.

use crate::error::IpError;
use crate::models::{
    broadcast_addr, cut_addr, get_cidr_mask, num_hosts, wildcard_mask, CidrDetail,
};
use crate::parse::validate_cidr;
use std::net::Ipv4Addr;

/// Split `address/prefix` into a [`CidrDetail`].
///
/// The address need not be a network address; `first_ip` is always the
/// masked value. Prefix 0 is accepted here even though the text validator
/// only takes 1-32.
///
/// # Examples
/// ```
/// use cidr_range_calc::processing::split_cidr;
/// let d = split_cidr([10, 0, 0, 0], 24).unwrap();
/// assert_eq!(d.netmask, "255.255.255.0");
/// assert_eq!(d.total_host, 256);
/// ```
pub fn split_cidr(address: [u8; 4], prefix: u8) -> Result<CidrDetail, IpError> {
    let wildcard = wildcard_mask(prefix)?;
    let netmask = get_cidr_mask(prefix)?;

    let addr = Ipv4Addr::from(address);
    let first = cut_addr(addr, prefix)?;
    let last = broadcast_addr(addr, prefix)?;
    let total_host = num_hosts(prefix)?;
    log::debug!("split_cidr({addr}/{prefix}) -> {first} - {last} ({total_host} hosts)");

    Ok(CidrDetail {
        range: format!("{first} - {last}"),
        netmask: Ipv4Addr::from(netmask).to_string(),
        wildcard_mask: Ipv4Addr::from(wildcard).to_string(),
        first_ip: first.to_string(),
        first_ip_int: u32::from(first),
        last_ip: last.to_string(),
        last_ip_int: u32::from(last),
        total_host,
    })
}

/// Validate `text` as CIDR notation and split it.
pub fn split_cidr_str(text: &str) -> Result<CidrDetail, IpError> {
    let (address, prefix) = validate_cidr(text)?;
    split_cidr(address, prefix)
}
