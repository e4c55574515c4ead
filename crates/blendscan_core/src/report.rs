//! End-to-end scan of one container buffer into a serializable report.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::blend::{BlendFile, ExtractOptions, Result, TextResource, extract_text_resources};
use crate::risk::{RiskAssessment, analyze_script};

/// One text resource with its risk assessment attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResourceReport {
	/// Recovered or synthesized resource name.
	pub name: String,
	/// Reconstructed text content.
	pub content: String,
	/// Index of the marker block within the block sequence.
	pub origin_index: usize,
	/// Risk assessment for the content.
	pub analysis: RiskAssessment,
}

/// Full scan result for one container buffer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
	/// Informational version tag from the file header.
	pub format_version: String,
	/// Pointer width in bytes declared by the header.
	pub pointer_width: usize,
	/// Number of blocks decoded from the stream.
	pub total_block_count: usize,
	/// Reconstructed text resources in marker order.
	pub text_resources: Vec<TextResourceReport>,
}

/// Scan one in-memory container buffer end to end.
///
/// The single fatal path is container validation inside
/// [`BlendFile::from_bytes`]; everything past the header degrades gracefully,
/// and zero extracted resources is a valid, successful outcome.
pub fn scan_bytes(raw: Vec<u8>) -> Result<ScanReport> {
	let file = BlendFile::from_bytes(raw)?;
	Ok(scan_file(&file, ExtractOptions::default()))
}

/// Scan an already-opened container with explicit assembly options.
pub fn scan_file(file: &BlendFile, options: ExtractOptions) -> ScanReport {
	let blocks: Vec<_> = file.blocks().collect();
	debug!(
		block_count = blocks.len(),
		pointer_width = file.header.pointer_size,
		endianness = file.header.endianness.as_str(),
		"block stream scanned"
	);

	let resources = extract_text_resources(&blocks, options);

	ScanReport {
		format_version: file.header.version_tag(),
		pointer_width: file.header.pointer_size,
		total_block_count: blocks.len(),
		text_resources: analyze_resources(resources),
	}
}

#[cfg(not(feature = "parallel"))]
fn analyze_resources(resources: Vec<TextResource>) -> Vec<TextResourceReport> {
	resources.into_iter().map(attach_analysis).collect()
}

/// Rayon variant. The analyzer is pure, so per-resource evaluations are
/// isolated, and `collect` reassembles results in original resource order.
#[cfg(feature = "parallel")]
fn analyze_resources(resources: Vec<TextResource>) -> Vec<TextResourceReport> {
	resources.into_par_iter().map(attach_analysis).collect()
}

fn attach_analysis(resource: TextResource) -> TextResourceReport {
	let analysis = analyze_script(&resource.content);
	TextResourceReport {
		name: resource.name,
		content: resource.content,
		origin_index: resource.origin_index,
		analysis,
	}
}

#[cfg(test)]
mod tests {
	use blendscan_testkit::ContainerBuilder;

	use crate::report::scan_bytes;
	use crate::risk::RiskLevel;

	#[test]
	fn scans_container_end_to_end() {
		let script = b"import subprocess\nsubprocess.run(['ls'])\0";
		let bytes = ContainerBuilder::le64()
			.block(*b"GLOB", 1, 1, b"state")
			.block(*b"TX\0\0", 12, 1, b"TXDeploy\0")
			.block(*b"DATA", 0, 1, script)
			.build();

		let report = scan_bytes(bytes).expect("scan succeeds");
		assert_eq!(report.format_version, "404");
		assert_eq!(report.pointer_width, 8);
		assert_eq!(report.total_block_count, 3);
		assert_eq!(report.text_resources.len(), 1);

		let resource = &report.text_resources[0];
		assert_eq!(resource.name, "Deploy");
		assert_eq!(resource.origin_index, 1);
		assert_eq!(resource.analysis.risk_level, RiskLevel::Medium);
		assert!(!resource.analysis.is_startup);
	}

	#[test]
	fn zero_resources_is_a_successful_outcome() {
		let bytes = ContainerBuilder::le64().block(*b"GLOB", 1, 1, b"state").build();

		let report = scan_bytes(bytes).expect("scan succeeds");
		assert_eq!(report.total_block_count, 1);
		assert!(report.text_resources.is_empty());
	}

	#[test]
	fn report_serializes_with_camel_case_keys() {
		let bytes = ContainerBuilder::le64()
			.block(*b"TX\0\0", 12, 1, b"TXCheck\0")
			.block(*b"DATA", 0, 1, b"eval(x)\0")
			.build();

		let report = scan_bytes(bytes).expect("scan succeeds");
		let json = serde_json::to_value(&report).expect("report serializes");

		assert_eq!(json["formatVersion"], "404");
		assert_eq!(json["pointerWidth"], 8);
		assert_eq!(json["totalBlockCount"], 2);

		let resource = &json["textResources"][0];
		assert_eq!(resource["name"], "Check");
		assert_eq!(resource["originIndex"], 0);
		assert_eq!(resource["analysis"]["riskLevel"], "high");
		assert_eq!(resource["analysis"]["isStartup"], false);
		assert!(resource["analysis"]["startupReasons"].as_array().is_some_and(|items| items.is_empty()));
		assert!(
			resource["analysis"]["warnings"]
				.as_array()
				.is_some_and(|items| !items.is_empty())
		);
	}
}
