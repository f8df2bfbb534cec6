//! Range to CIDR decomposition.
//!
//! Covers an inclusive address range with the fewest aligned blocks,
//! walking from the low end and always taking the biggest block that is
//! both aligned to the cursor and fits in what is left.

use crate::error::IpError;
use crate::models::{lo_mask, octets_to_u32, AddressRange, CidrBlock, MAX_LENGTH};
use crate::parse::parse_range;
use std::net::Ipv4Addr;

/// Decompose `[start, end]` into an ordered list of CIDR blocks.
///
/// Fails with [`IpError::RangeToCidr`] when `start > end`.
///
/// # Examples
/// ```
/// use cidr_range_calc::processing::ip_range_to_cidr;
/// let blocks = ip_range_to_cidr([10, 0, 0, 1], [10, 0, 0, 6]).unwrap();
/// let text: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
/// assert_eq!(text, ["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/31", "10.0.0.6/32"]);
/// ```
pub fn ip_range_to_cidr(start: [u8; 4], end: [u8; 4]) -> Result<Vec<CidrBlock>, IpError> {
    let start_int = octets_to_u32(start);
    let end_int = octets_to_u32(end);
    if start_int > end_int {
        return Err(IpError::RangeToCidr(format!(
            "Invalid IP range: start {} is greater than end {}",
            Ipv4Addr::from(start),
            Ipv4Addr::from(end)
        )));
    }

    let range = AddressRange {
        start: start_int,
        end: end_int,
    };
    let blocks = decompose(range)?;
    log::debug!("ip_range_to_cidr({range}) -> {} block(s)", blocks.len());
    Ok(blocks)
}

/// Parse `"start-end"` and decompose it.
pub fn ip_range_to_cidr_str(text: &str) -> Result<Vec<CidrBlock>, IpError> {
    let (start, end) = parse_range(text)?;
    ip_range_to_cidr(start, end)
}

/// Range spanned by a list of blocks, from the lowest to the highest address.
pub fn range_of(blocks: &[CidrBlock]) -> Option<AddressRange> {
    let start = blocks.iter().map(|b| u32::from(b.lo())).min()?;
    let end = blocks.iter().map(|b| u32::from(b.hi())).max()?;
    Some(AddressRange { start, end })
}

fn decompose(range: AddressRange) -> Result<Vec<CidrBlock>, IpError> {
    // u64 so that a full 0.0.0.0-255.255.255.255 range and the cursor past
    // the last address both fit.
    let mut cursor = u64::from(range.start);
    let mut amount = range.size();
    let mut blocks = Vec::new();

    while amount > 0 {
        let mut step = aligned_step(cursor, amount);
        while step > amount {
            step >>= 1;
        }

        let mask = MAX_LENGTH - step.trailing_zeros() as u8;
        let block = CidrBlock::new(Ipv4Addr::from(cursor as u32), mask)?;
        log::trace!("emit {block} (remaining {amount})");
        blocks.push(block);

        cursor += step;
        amount -= step;
    }
    Ok(blocks)
}

/// Biggest power of two the cursor is aligned to.
///
/// Zero is aligned to everything, so the step grows from 1 until it
/// reaches the remaining amount instead.
fn aligned_step(cursor: u64, amount: u64) -> u64 {
    if cursor == 0 {
        let mut step = 1u64;
        while step < amount {
            step <<= 1;
        }
        step
    } else {
        // The cursor never passes the range end while amount > 0.
        1u64 << (MAX_LENGTH - lo_mask(Ipv4Addr::from(cursor as u32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn texts(blocks: &[CidrBlock]) -> Vec<String> {
        blocks.iter().map(|b| b.to_string()).collect()
    }

    fn check_cover(blocks: &[CidrBlock], start: u32, end: u32) {
        assert!(!blocks.is_empty());
        assert_eq!(u32::from(blocks[0].addr()), start);
        assert_eq!(u32::from(blocks[blocks.len() - 1].hi()), end);
        for b in blocks {
            assert!(b.is_network(), "{b} is not a network address");
        }
        for (a, b) in blocks.iter().tuple_windows() {
            assert_eq!(
                u64::from(u32::from(a.hi())) + 1,
                u64::from(u32::from(b.lo())),
                "{a} and {b} are not contiguous"
            );
            assert!(a < b);
        }
        let total: u64 = blocks.iter().map(|b| b.size()).sum();
        assert_eq!(total, u64::from(end) - u64::from(start) + 1);
    }

    #[test]
    fn test_single_address() {
        let blocks = ip_range_to_cidr([10, 0, 0, 7], [10, 0, 0, 7]).unwrap();
        assert_eq!(texts(&blocks), ["10.0.0.7/32"]);
    }

    #[test]
    fn test_zero_to_zero() {
        let blocks = ip_range_to_cidr([0, 0, 0, 0], [0, 0, 0, 0]).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].to_tuple(), ([0, 0, 0, 0], 32));
    }

    #[test]
    fn test_full_space() {
        let blocks = ip_range_to_cidr([0, 0, 0, 0], [255, 255, 255, 255]).unwrap();
        assert_eq!(texts(&blocks), ["0.0.0.0/0"]);
    }

    #[test]
    fn test_from_zero_not_power_of_two() {
        let blocks = ip_range_to_cidr([0, 0, 0, 0], [0, 0, 0, 4]).unwrap();
        assert_eq!(texts(&blocks), ["0.0.0.0/30", "0.0.0.4/32"]);
        let blocks = ip_range_to_cidr([0, 0, 0, 0], [0, 0, 2, 255]).unwrap();
        assert_eq!(texts(&blocks), ["0.0.0.0/23", "0.0.2.0/24"]);
    }

    #[test]
    fn test_to_top_of_space() {
        let blocks = ip_range_to_cidr([255, 255, 255, 254], [255, 255, 255, 255]).unwrap();
        assert_eq!(texts(&blocks), ["255.255.255.254/31"]);
        let blocks = ip_range_to_cidr([128, 0, 0, 0], [255, 255, 255, 255]).unwrap();
        assert_eq!(texts(&blocks), ["128.0.0.0/1"]);
    }

    #[test]
    fn test_mixed_range() {
        let blocks = ip_range_to_cidr([192, 168, 0, 10], [192, 168, 1, 20]).unwrap();
        assert_eq!(
            texts(&blocks),
            [
                "192.168.0.10/31",
                "192.168.0.12/30",
                "192.168.0.16/28",
                "192.168.0.32/27",
                "192.168.0.64/26",
                "192.168.0.128/25",
                "192.168.1.0/28",
                "192.168.1.16/30",
                "192.168.1.20/32",
            ]
        );
        check_cover(&blocks, 0xC0A8000A, 0xC0A80114);
    }

    #[test]
    fn test_start_after_end() {
        let e = ip_range_to_cidr([10, 0, 0, 5], [10, 0, 0, 2]).unwrap_err();
        assert_eq!(e.kind(), crate::error::ErrorKind::IpRangeFailedToCidr);
        assert!(e.message().contains("Invalid IP range"), "{e}");
    }

    #[test]
    fn test_cover_properties_sampled() {
        let samples: [(u32, u32); 8] = [
            (0, 1),
            (0, 1000),
            (1, u32::MAX),
            (0x0A000001, 0x0A0000FE),
            (0x0A000100, 0x0A01FFFF),
            (0x7FFFFFFF, 0x80000000),
            (12345, 987654321),
            (u32::MAX - 3, u32::MAX),
        ];
        for (start, end) in samples {
            let blocks =
                ip_range_to_cidr(start.to_be_bytes(), end.to_be_bytes()).unwrap();
            check_cover(&blocks, start, end);
        }
    }

    #[test]
    fn test_cover_is_minimal_near_boundaries() {
        // 1..=u32::MAX needs one block per bit position.
        let blocks = ip_range_to_cidr([0, 0, 0, 1], [255, 255, 255, 255]).unwrap();
        assert_eq!(blocks.len(), 32);
        assert_eq!(blocks[31].to_string(), "128.0.0.0/1");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "10.0.0.3-10.0.9.17",
            "0.0.0.0-0.0.0.6",
            "1.2.3.4-5.6.7.8",
            "255.255.255.0-255.255.255.255",
        ];
        for sample in samples {
            let blocks = ip_range_to_cidr_str(sample).unwrap();
            let span = range_of(&blocks).unwrap();
            let again = ip_range_to_cidr(
                span.start.to_be_bytes(),
                span.end.to_be_bytes(),
            )
            .unwrap();
            assert_eq!(again, blocks, "{sample}");
        }
    }

    #[test]
    fn test_range_of_empty() {
        assert_eq!(range_of(&[]), None);
    }

    #[test]
    fn test_aligned_step() {
        assert_eq!(aligned_step(0, 5), 8);
        assert_eq!(aligned_step(0, 1), 1);
        assert_eq!(aligned_step(12, 100), 4);
        assert_eq!(aligned_step(1 << 31, 1), 1 << 31);
    }
}
