use crate::blend::{BlendError, Result};

/// Byte order declared by the container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
	/// Little-endian byte order (`v` marker).
	Little,
	/// Big-endian byte order (any other marker byte).
	Big,
}

impl Endianness {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Little => "little",
			Self::Big => "big",
		}
	}
}

/// Parsed container header fields.
///
/// Derived once per file and passed by value into every parsing call, so no
/// parser carries hidden mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendHeader {
	/// Pointer width in bytes (4 or 8).
	pub pointer_size: usize,
	/// File byte order.
	pub endianness: Endianness,
	/// Raw three-byte informational version tag (not validated).
	pub version: [u8; 3],
}

impl BlendHeader {
	/// Fixed size of the file header in bytes.
	pub const SIZE: usize = 12;
	/// Marker byte selecting 8-byte pointers.
	pub const WIDE_POINTER_MARKER: u8 = b'-';
	/// Marker byte selecting little-endian byte order.
	pub const LITTLE_ENDIAN_MARKER: u8 = b'v';

	/// Parse the fixed header from the beginning of `bytes`.
	///
	/// The magic check is the only fatal validation in the pipeline.
	/// Unrecognized pointer-width or endianness marker bytes fall back to
	/// 4-byte pointers and big-endian order without diagnostics, preserving
	/// upstream behavior for files this parser has never seen.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let magic = bytes.get(0..7).ok_or(BlendError::HeaderTooShort {
			len: bytes.len(),
			need: Self::SIZE,
		})?;
		if magic != b"BLENDER" {
			return Err(BlendError::InvalidMagic { magic: first7(bytes) });
		}

		let header = bytes.get(0..Self::SIZE).ok_or(BlendError::HeaderTooShort {
			len: bytes.len(),
			need: Self::SIZE,
		})?;

		let pointer_size = if header[7] == Self::WIDE_POINTER_MARKER { 8 } else { 4 };
		let endianness = if header[8] == Self::LITTLE_ENDIAN_MARKER {
			Endianness::Little
		} else {
			Endianness::Big
		};

		let mut version = [0_u8; 3];
		version.copy_from_slice(&header[9..12]);

		Ok(Self {
			pointer_size,
			endianness,
			version,
		})
	}

	/// Size in bytes of each block header under this file header.
	pub fn bhead_size(self) -> usize {
		16 + self.pointer_size
	}

	/// Informational version tag decoded leniently.
	pub fn version_tag(self) -> String {
		String::from_utf8_lossy(&self.version).into_owned()
	}
}

fn first7(bytes: &[u8]) -> [u8; 7] {
	let mut magic = [0_u8; 7];
	let take = bytes.len().min(7);
	magic[..take].copy_from_slice(&bytes[..take]);
	magic
}
