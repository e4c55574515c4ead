//! Reassembly of embedded text resources from the ordered block stream.
//!
//! The container stores no back-reference from a payload block to the text
//! datablock that owns it. Association is a bounded proximity heuristic:
//! payloads belong to the closest preceding marker, scanned forward over a
//! fixed block window and cut short by the next marker.

use tracing::{debug, trace};

use crate::blend::Block;
use crate::blend::name::recover_text_name;

/// Four-byte code of the short text-marker spelling.
pub const TEXT_CODE_SHORT: [u8; 4] = *b"TX\0\0";
/// Four-byte code of the long text-marker spelling.
pub const TEXT_CODE_LONG: [u8; 4] = *b"TEXT";
/// Four-byte code of raw payload blocks.
pub const DATA_CODE: [u8; 4] = *b"DATA";
/// Maximum number of subsequent blocks scanned for a marker's payloads.
pub const DATA_LOOKAHEAD_BLOCKS: usize = 100;

/// Payload bodies at or below this size are treated as bare fragments.
const SMALL_PAYLOAD_BYTES: usize = 4;

/// Options for text-resource assembly.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
	/// Forward window, in blocks, scanned for payloads after each marker.
	pub max_lookahead: usize,
}

impl Default for ExtractOptions {
	fn default() -> Self {
		Self {
			max_lookahead: DATA_LOOKAHEAD_BLOCKS,
		}
	}
}

/// One reconstructed embedded text resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResource {
	/// Recovered or synthesized resource name.
	pub name: String,
	/// Reconstructed text content.
	pub content: String,
	/// Index of the marker block within the block sequence.
	pub origin_index: usize,
}

/// Return `true` for either spelling of the text-marker code.
pub fn is_text_marker(code: [u8; 4]) -> bool {
	code == TEXT_CODE_SHORT || code == TEXT_CODE_LONG
}

fn is_text_payload(block: &Block<'_>) -> bool {
	block.head.code == DATA_CODE && block.head.sdna_nr == 0
}

/// Reassemble text resources by pairing marker blocks with trailing payloads.
///
/// Payloads are collected from at most `options.max_lookahead` blocks after
/// the marker, stopping early at the next marker. Collected payloads join
/// with a single newline. A marker with zero collected payloads produces no
/// resource. Output order follows marker order in the stream.
pub fn extract_text_resources(blocks: &[Block<'_>], options: ExtractOptions) -> Vec<TextResource> {
	let mut out = Vec::new();

	for (index, block) in blocks.iter().enumerate() {
		if !is_text_marker(block.head.code) {
			continue;
		}
		trace!(index, code = %block.head.code_label(), "text marker block");

		let mut parts = Vec::new();
		for candidate in blocks[index + 1..].iter().take(options.max_lookahead) {
			if is_text_marker(candidate.head.code) {
				break;
			}
			if is_text_payload(candidate) {
				parts.push(decode_text_payload(candidate.payload));
			}
		}

		if parts.is_empty() {
			continue;
		}

		let name = recover_text_name(block.payload).unwrap_or_else(|| format!("Text Block {}", out.len() + 1));
		debug!(index, name = %name, parts = parts.len(), "text resource reassembled");

		out.push(TextResource {
			name,
			content: parts.join("\n"),
			origin_index: index,
		});
	}

	out
}

/// Decode one payload body leniently into cleaned text.
///
/// Never fails: undecodable sequences are replaced during lossy decoding.
/// Small bodies only have null bytes stripped; larger bodies also shed
/// control characters, with tab, CR, and LF preserved so the original line
/// structure survives exactly.
pub fn decode_text_payload(body: &[u8]) -> String {
	let text = String::from_utf8_lossy(body);
	if body.len() <= SMALL_PAYLOAD_BYTES {
		return text.replace('\0', "");
	}

	text.chars().filter(|ch| !is_stripped_control(*ch)).collect()
}

fn is_stripped_control(ch: char) -> bool {
	if matches!(ch, '\t' | '\n' | '\r') {
		return false;
	}

	matches!(u32::from(ch), 0x00..=0x08 | 0x0B..=0x1F | 0x7F..=0x9F)
}
