//! Integration tests for cidr-range-calc
//!
//! These tests drive the public API end to end, from text input to rendered output.

use cidr_range_calc::{
    cli::{execute, Command},
    ip_range_to_cidr,
    output::{render_batch, render_blocks, OutputFormat},
    processing::{read_batch_file, range_of, split_cidr_str, BatchValue},
    split_cidr, validate_cidr, validate_ipv4, ErrorKind,
};
use itertools::Itertools;

const BATCH_01: &str = "src/tests/test_data/batch_01.txt";

#[test]
fn test_split_round_trip_10_0_0_0_24() {
    let d = split_cidr([10, 0, 0, 0], 24).expect("split failed");
    assert_eq!(d.netmask, "255.255.255.0");
    assert_eq!(d.wildcard_mask, "0.0.0.255");
    assert_eq!(d.first_ip, "10.0.0.0");
    assert_eq!(d.last_ip, "10.0.0.255");
    assert_eq!(d.total_host, 256);
}

#[test]
fn test_validators() {
    let e = validate_cidr("10.0.0.0").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IpValidation);
    assert!(e.message().contains("should contain mask part"));
    assert_eq!(validate_ipv4("10.0.0.0").unwrap(), [10, 0, 0, 0]);
}

#[test]
fn test_range_boundaries() {
    let blocks = ip_range_to_cidr([0, 0, 0, 0], [0, 0, 0, 0]).unwrap();
    assert_eq!(blocks.iter().map(|b| b.to_tuple()).collect_vec(), [([0, 0, 0, 0], 32)]);

    let e = ip_range_to_cidr([10, 0, 0, 5], [10, 0, 0, 2]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IpRangeFailedToCidr);
    assert!(e.message().contains("Invalid IP range"));
}

#[test]
fn test_range_cover_and_idempotence_walk() {
    // Walk a spread of ranges with a multiplicative step to hit many alignments.
    let mut start: u32 = 1;
    while start < u32::MAX / 4 {
        let end = start.wrapping_mul(3).wrapping_add(start / 7) | 1;
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        let blocks = ip_range_to_cidr(lo.to_be_bytes(), hi.to_be_bytes()).unwrap();

        for (a, b) in blocks.iter().tuple_windows() {
            assert_eq!(u64::from(u32::from(a.hi())) + 1, u64::from(u32::from(b.lo())));
        }
        let total: u64 = blocks.iter().map(|b| b.size()).sum();
        assert_eq!(total, u64::from(hi) - u64::from(lo) + 1);

        let span = range_of(&blocks).unwrap();
        assert_eq!((span.start, span.end), (lo, hi));
        let again = ip_range_to_cidr(span.start.to_be_bytes(), span.end.to_be_bytes()).unwrap();
        assert_eq!(again, blocks);

        start = start.saturating_mul(5).saturating_add(3);
    }
}

#[test]
fn test_split_then_decompose_is_single_block() {
    for text in ["10.0.0.0/8", "172.16.4.0/22", "192.168.1.77/32", "1.2.3.4/1"] {
        let d = split_cidr_str(text).unwrap();
        let blocks =
            ip_range_to_cidr(d.first_ip_int.to_be_bytes(), d.last_ip_int.to_be_bytes()).unwrap();
        assert_eq!(blocks.len(), 1, "{text}");
        assert_eq!(blocks[0].size(), d.total_host);
        assert_eq!(blocks[0].addr().to_string(), d.first_ip);
    }
}

#[test]
fn test_batch_file() {
    let entries = read_batch_file(BATCH_01).expect("Failed to read batch file");
    assert_eq!(entries.len(), 9, "Expected 9 queries in {BATCH_01}");

    let failed: Vec<usize> = entries.iter().filter(|e| !e.is_ok()).map(|e| e.line).collect();
    assert_eq!(failed, [6, 10, 11]);

    match &entries[1].outcome {
        Ok(BatchValue::Detail(d)) => assert_eq!(d.range, "192.168.0.0 - 192.168.15.255"),
        other => panic!("unexpected outcome {other:?}"),
    }
    match &entries[5].outcome {
        Ok(BatchValue::Blocks(blocks)) => assert_eq!(blocks.len(), 9),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(
        entries[3].outcome.as_ref().unwrap_err().kind(),
        ErrorKind::IpRangeFailedToCidr
    );
}

#[test]
fn test_batch_file_json_and_csv() {
    let entries = read_batch_file(BATCH_01).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&render_batch(&entries, OutputFormat::Json)).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 9);
    assert_eq!(json[4]["outcome"]["result"]["value"][0], "0.0.0.0/32");

    let csv = render_batch(&entries, OutputFormat::Csv);
    assert_eq!(csv.lines().count(), 10);
}

#[test]
fn test_execute_batch_reports_failure() {
    let out = execute(
        &Command::Batch {
            file: BATCH_01.to_string(),
        },
        OutputFormat::Table,
    )
    .unwrap();
    assert!(!out.success, "batch contains failing lines");
    assert_eq!(out.text.lines().count(), 9);
}

#[test]
fn test_render_blocks_json() {
    let blocks = ip_range_to_cidr([10, 0, 0, 1], [10, 0, 0, 6]).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&render_blocks(&blocks, OutputFormat::Json)).unwrap();
    assert_eq!(
        json,
        serde_json::json!(["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/31", "10.0.0.6/32"])
    );
}
