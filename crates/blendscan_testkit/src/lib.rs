//! Shared test helpers for workspace crates.

/// Builder for synthetic blend containers used in tests.
///
/// Emits a 12-byte file header followed by legacy-layout blocks whose field
/// widths and byte order match the header markers.
pub struct ContainerBuilder {
	bytes: Vec<u8>,
	pointer_size: usize,
	little_endian: bool,
}

impl ContainerBuilder {
	/// Start a container with explicit header parameters.
	///
	/// # Panics
	///
	/// Panics on a pointer size other than 4 or 8, or a version tag that is
	/// not exactly three bytes.
	pub fn new(pointer_size: usize, little_endian: bool, version: &str) -> Self {
		assert!(pointer_size == 4 || pointer_size == 8, "pointer size must be 4 or 8");
		assert_eq!(version.len(), 3, "version tag must be three bytes");

		let mut bytes = Vec::new();
		bytes.extend_from_slice(b"BLENDER");
		bytes.push(if pointer_size == 8 { b'-' } else { b'_' });
		bytes.push(if little_endian { b'v' } else { b'V' });
		bytes.extend_from_slice(version.as_bytes());

		Self {
			bytes,
			pointer_size,
			little_endian,
		}
	}

	/// Start a 64-bit little-endian container with a fixed version tag.
	pub fn le64() -> Self {
		Self::new(8, true, "404")
	}

	/// Append one block with the given header fields and body.
	pub fn block(mut self, code: [u8; 4], sdna_nr: u32, count: u32, body: &[u8]) -> Self {
		self = self.block_header(code, body.len() as i32, sdna_nr, count);
		self.bytes.extend_from_slice(body);
		self
	}

	/// Append one block header claiming `len` payload bytes, without a body.
	pub fn block_header_only(self, code: [u8; 4], len: i32) -> Self {
		self.block_header(code, len, 0, 0)
	}

	/// Append arbitrary trailing bytes, for truncation scenarios.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Return the assembled container bytes.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}

	fn block_header(mut self, code: [u8; 4], len: i32, sdna_nr: u32, count: u32) -> Self {
		let legacy_ptr = vec![0_u8; self.pointer_size];

		self.bytes.extend_from_slice(&code);
		self.push_u32(len as u32);
		self.bytes.extend_from_slice(&legacy_ptr);
		self.push_u32(sdna_nr);
		self.push_u32(count);
		self
	}

	fn push_u32(&mut self, value: u32) {
		let raw = if self.little_endian {
			value.to_le_bytes()
		} else {
			value.to_be_bytes()
		};
		self.bytes.extend_from_slice(&raw);
	}
}
