use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BlendError>;

/// Errors produced while loading and validating blend containers.
///
/// Only container-level problems are fatal. A malformed block stream ends the
/// scan with a partial block list, an undecodable payload becomes an empty
/// string, and an unrecoverable name becomes a placeholder; none of those
/// surface here.
#[derive(Debug, Error)]
pub enum BlendError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Unknown leading file magic.
	#[error("unsupported compression or not a .blend (magic={magic:?})")]
	UnknownMagic {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
	/// Decompressed stream did not start with `BLENDER`.
	#[error("decompressed data does not start with BLENDER magic")]
	NotBlendAfterDecompress,
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// File magic bytes did not spell `BLENDER`.
	#[error("invalid file magic {magic:?}")]
	InvalidMagic {
		/// First up-to-7 bytes of the buffer.
		magic: [u8; 7],
	},
	/// Buffer ended before the fixed file header.
	#[error("header truncated at {len} bytes, need {need}")]
	HeaderTooShort {
		/// Bytes available.
		len: usize,
		/// Bytes required.
		need: usize,
	},
}
