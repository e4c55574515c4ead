#![allow(missing_docs)]

use blendscan::blend::{BlendFile, ExtractOptions};
use blendscan::report::{scan_bytes, scan_file};
use blendscan::risk::RiskLevel;
use blendscan_testkit::ContainerBuilder;

fn two_script_container() -> Vec<u8> {
	let addon = b"bl_info = {'name': 'helper'}\n\ndef register():\n    eval(payload)\n\nregister()\n\0";

	ContainerBuilder::le64()
		.block(*b"GLOB", 1, 1, b"global state")
		.block(*b"TX\0\0", 12, 1, b"TXFoo\0\0\0")
		.block(*b"DATA", 0, 1, b"hello\0")
		.block(*b"DATA", 0, 1, b"world\0")
		.block(*b"TEXT", 12, 1, b"TXAddon\0")
		.block(*b"DATA", 0, 1, addon)
		.build()
}

#[test]
fn reconstructs_and_grades_multiple_resources_in_marker_order() {
	let report = scan_bytes(two_script_container()).expect("scan succeeds");

	assert_eq!(report.format_version, "404");
	assert_eq!(report.pointer_width, 8);
	assert_eq!(report.total_block_count, 6);
	assert_eq!(report.text_resources.len(), 2);

	let first = &report.text_resources[0];
	assert_eq!(first.name, "Foo");
	assert_eq!(first.content, "hello\nworld");
	assert_eq!(first.origin_index, 1);
	assert_eq!(first.analysis.risk_level, RiskLevel::Safe);
	assert!(!first.analysis.is_startup);

	let second = &report.text_resources[1];
	assert_eq!(second.name, "Addon");
	assert_eq!(second.origin_index, 4);
	assert_eq!(second.analysis.risk_level, RiskLevel::High);
	assert!(second.analysis.is_startup);
	assert!(
		second
			.analysis
			.startup_reasons
			.contains(&"Blender addon metadata".to_owned())
	);
}

#[test]
fn compressed_container_scans_identically_to_raw() {
	let raw = two_script_container();
	let compressed = zstd::stream::encode_all(&raw[..], 0).expect("zstd encodes");

	let from_raw = serde_json::to_value(scan_bytes(raw).expect("raw scan succeeds")).expect("serializes");
	let from_compressed =
		serde_json::to_value(scan_bytes(compressed).expect("compressed scan succeeds")).expect("serializes");

	assert_eq!(from_raw, from_compressed);
}

#[test]
fn explicit_options_narrow_the_payload_window() {
	let file = BlendFile::from_bytes(two_script_container()).expect("container parses");

	let report = scan_file(&file, ExtractOptions { max_lookahead: 1 });
	assert_eq!(report.text_resources.len(), 2);
	assert_eq!(report.text_resources[0].content, "hello");
	assert_eq!(report.text_resources[0].name, "Foo");
}

#[test]
fn truncated_tail_still_yields_leading_resources() {
	let mut bytes = two_script_container();
	// Chop into the final block's payload: every fully contained block
	// before the cut must survive, without any error.
	bytes.truncate(bytes.len() - 10);

	let report = scan_bytes(bytes).expect("scan succeeds");
	assert_eq!(report.total_block_count, 5);
	assert_eq!(report.text_resources.len(), 1);
	assert_eq!(report.text_resources[0].name, "Foo");
}
