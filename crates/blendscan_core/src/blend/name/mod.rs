//! Heuristic recovery of a printable name from a text-marker block body.
//!
//! Marker bodies are struct dumps, not plain strings: the embedded name sits
//! at a layout-dependent offset this crate never resolves. Recovery probes a
//! small set of plausible offsets for a null-terminated string and falls back
//! to scanning null-separated segments for an identifier-shaped candidate.

/// Candidate start offsets probed for an embedded name string.
const NAME_PROBE_OFFSETS: [usize; 4] = [2, 4, 8, 16];

/// A fallback candidate must be longer than this many characters.
const MIN_FALLBACK_LEN: usize = 2;

/// Marker-tag literal stripped from the front of recovered names.
const MARKER_PREFIX: &str = "TX";

/// Recover a printable name from a text-marker block body.
///
/// Probe offsets are tried in order and the first non-empty cleaned candidate
/// wins. Returns `None` when nothing printable qualifies; the caller
/// synthesizes a positional placeholder in that case.
pub fn recover_text_name(body: &[u8]) -> Option<String> {
	for offset in NAME_PROBE_OFFSETS {
		if offset >= body.len() {
			continue;
		}

		let Some(rel_end) = body[offset..].iter().position(|byte| *byte == 0) else {
			continue;
		};
		if rel_end == 0 {
			continue;
		}

		let cleaned = printable_ascii(&body[offset..offset + rel_end]);
		if !cleaned.is_empty() {
			return strip_marker_prefix(cleaned);
		}
	}

	for segment in body.split(|byte| *byte == 0) {
		let cleaned = printable_ascii(segment);
		if cleaned.len() > MIN_FALLBACK_LEN && cleaned.chars().all(is_name_char) {
			return strip_marker_prefix(cleaned);
		}
	}

	None
}

/// Drop bytes outside the printable ASCII range and trim surrounding whitespace.
fn printable_ascii(bytes: &[u8]) -> String {
	let cleaned: String = bytes
		.iter()
		.copied()
		.filter(|byte| (0x20..=0x7E).contains(byte))
		.map(char::from)
		.collect();
	cleaned.trim().to_owned()
}

fn strip_marker_prefix(name: String) -> Option<String> {
	let stripped = match name.strip_prefix(MARKER_PREFIX) {
		Some(rest) => rest.trim().to_owned(),
		None => name,
	};

	if stripped.is_empty() { None } else { Some(stripped) }
}

fn is_name_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '_' | '-')
}
