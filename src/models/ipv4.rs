//! IPv4 address and CIDR mask arithmetic.
//!
//! Provides [`CidrBlock`] for an address/prefix pair, along with the mask
//! helpers the splitter and the range decomposer are built on. All math is
//! done on `u32`, widening to `u64` wherever a shift could reach 32 bits.

use crate::error::IpError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

fn check_len(len: u8) -> Result<(), IpError> {
    if len > MAX_LENGTH {
        Err(IpError::validation(format!(
            "Prefix length {len} should be in range 0-{MAX_LENGTH}"
        )))
    } else {
        Ok(())
    }
}

/// Pack four octets big-endian into a `u32`.
pub fn octets_to_u32(octets: [u8; 4]) -> u32 {
    u32::from_be_bytes(octets)
}

/// Unpack a `u32` into four big-endian octets.
pub fn u32_to_octets(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Convert a CIDR prefix length to a network mask as u32.
///
/// # Examples
/// ```
/// use cidr_range_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, IpError> {
    check_len(len)?;
    Ok(!wildcard_mask(len)?)
}

/// Host bits of a prefix: `(1 << (32 - len)) - 1`.
pub fn wildcard_mask(len: u8) -> Result<u32, IpError> {
    check_len(len)?;
    let host_bits = u32::from(MAX_LENGTH - len);
    Ok(((1u64 << host_bits) - 1) as u32)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, IpError> {
    let bits = u32::from(addr) & get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(bits))
}

/// Calculate the last address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, IpError> {
    let network_bits = u32::from(addr) & get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(network_bits | wildcard_mask(len)?))
}

/// Number of addresses covered by a prefix, `2^(32 - len)`.
pub fn num_hosts(len: u8) -> Result<u64, IpError> {
    check_len(len)?;
    Ok(1u64 << (MAX_LENGTH - len))
}

/// Calculate the smallest prefix an address is aligned to, based on trailing zeros.
///
/// `0.0.0.0` is aligned to every prefix, so it returns 0.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros.min(MAX_LENGTH)
}

/// IPv4 address with a prefix length.
///
/// The address is stored as given; use [`CidrBlock::network`] to get the
/// canonical form. Fields are private so the prefix is always 0-32.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    addr: Ipv4Addr,
    mask: u8,
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::from_str(&s).map_err(de::Error::custom)
    }
}

impl FromStr for CidrBlock {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, mask) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| IpError::validation(format!("invalid CIDR format: {s}")))?;
        let addr = Ipv4Addr::from_str(addr)
            .map_err(|_| IpError::validation(format!("invalid IP address: {addr}")))?;
        let mask = u8::from_str(mask)
            .map_err(|_| IpError::validation(format!("invalid prefix length: {mask}")))?;
        CidrBlock::new(addr, mask)
    }
}

impl CidrBlock {
    /// Create a new block, rejecting prefixes above 32.
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<CidrBlock, IpError> {
        check_len(mask)?;
        Ok(CidrBlock { addr, mask })
    }

    /// The IPv4 address as stored.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    fn wildcard(&self) -> u32 {
        ((1u64 << (MAX_LENGTH - self.mask)) - 1) as u32
    }

    /// Block whose address is the network address.
    pub fn network(&self) -> CidrBlock {
        CidrBlock {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// True when the stored address is already the network address.
    pub fn is_network(&self) -> bool {
        self.addr == self.lo()
    }

    /// Lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & !self.wildcard())
    }

    /// Highest address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | self.wildcard())
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }

    /// `([a, b, c, d], prefix)` form.
    pub fn to_tuple(&self) -> ([u8; 4], u8) {
        (self.addr.octets(), self.mask)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for CidrBlock {
    fn eq(&self, other: &CidrBlock) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for CidrBlock {
    fn partial_cmp(&self, other: &CidrBlock) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Inclusive range of packed addresses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AddressRange {
    pub start: u32,
    pub end: u32,
}

impl AddressRange {
    /// Number of addresses in the range, never zero.
    pub fn size(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }
}

impl std::fmt::Display for AddressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            Ipv4Addr::from(self.start),
            Ipv4Addr::from(self.end)
        )
    }
}
