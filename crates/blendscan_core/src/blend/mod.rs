mod bhead;
mod block;
mod bytes;
mod compression;
mod error;
mod file;
mod header;
mod name;
mod text;

/// Parsed block header record.
pub use bhead::BHead;
/// Block container and iterator types.
pub use block::{Block, BlockIter};
/// Compression detection result and entry point.
pub use compression::{Compression, ZSTD_MAGIC, decode_container_bytes};
/// Error and result aliases.
pub use error::{BlendError, Result};
/// File abstraction.
pub use file::BlendFile;
/// File header representation.
pub use header::{BlendHeader, Endianness};
/// Name recovery heuristic.
pub use name::recover_text_name;
/// Text resource assembly types and entry points.
pub use text::{DATA_LOOKAHEAD_BLOCKS, ExtractOptions, TextResource, decode_text_payload, extract_text_resources, is_text_marker};
