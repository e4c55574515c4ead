use std::fs;
use std::path::Path;

use crate::blend::compression::decode_container_bytes;
use crate::blend::{BlendHeader, BlockIter, Compression, Result};

/// Opened blend container with decoded bytes and parsed header.
#[derive(Debug)]
pub struct BlendFile {
	/// Parsed file header.
	pub header: BlendHeader,
	/// Compression mode detected for the source bytes.
	pub compression: Compression,
	bytes: Vec<u8>,
}

impl BlendFile {
	/// Parse a container from an in-memory buffer, decompressing if needed.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_container_bytes(raw)?;
		let header = BlendHeader::parse(&bytes)?;

		Ok(Self {
			header,
			compression,
			bytes,
		})
	}

	/// Read and parse a container from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::from_bytes(fs::read(path)?)
	}

	/// Decoded raw bytes backing this container.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Iterate all blocks following the fixed file header.
	pub fn blocks(&self) -> BlockIter<'_> {
		BlockIter::new(&self.bytes, BlendHeader::SIZE, self.header)
	}
}
