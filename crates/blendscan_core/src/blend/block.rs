use crate::blend::bytes::Cursor;
use crate::blend::{BHead, BlendHeader};

/// One decoded block with its payload slice.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
	/// Parsed block header.
	pub head: BHead,
	/// Payload bytes of exactly the declared length.
	pub payload: &'a [u8],
	/// Absolute offset of the block header within the file buffer.
	pub file_offset: usize,
}

/// Sequential iterator over the block stream.
///
/// Each block's start offset depends on the previous block's declared length,
/// so iteration is strictly sequential. A truncated or malformed tail — too
/// few bytes for a header, a negative declared length, or a body overrunning
/// the buffer — ends the stream silently; it is never an error.
pub struct BlockIter<'a> {
	cursor: Cursor<'a>,
	offset_base: usize,
	header: BlendHeader,
	done: bool,
}

impl<'a> BlockIter<'a> {
	/// Iterate blocks from `offset` using header-declared layout parameters.
	pub fn new(bytes: &'a [u8], offset: usize, header: BlendHeader) -> Self {
		let slice = bytes.get(offset..).unwrap_or(&[]);
		Self {
			cursor: Cursor::new(slice),
			offset_base: offset,
			header,
			done: false,
		}
	}

	fn parse_next(&mut self) -> Option<Block<'a>> {
		if self.cursor.remaining() < self.header.bhead_size() {
			return None;
		}

		let file_offset = self.offset_base + self.cursor.pos();
		let head = BHead::parse(&mut self.cursor, self.header)?;
		let payload_len = usize::try_from(head.len).ok()?;
		let payload = self.cursor.read_exact(payload_len)?;

		Some(Block {
			head,
			payload,
			file_offset,
		})
	}
}

impl<'a> Iterator for BlockIter<'a> {
	type Item = Block<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let next = self.parse_next();
		if next.is_none() {
			self.done = true;
		}
		next
	}
}

#[cfg(test)]
mod tests {
	use blendscan_testkit::ContainerBuilder;

	use crate::blend::{BlendHeader, BlockIter};

	#[test]
	fn collects_blocks_in_stream_order() {
		let bytes = ContainerBuilder::le64()
			.block(*b"GLOB", 3, 1, b"abcd")
			.block(*b"DATA", 0, 2, b"hello\0")
			.build();
		let header = BlendHeader::parse(&bytes).expect("header parses");
		let blocks: Vec<_> = BlockIter::new(&bytes, BlendHeader::SIZE, header).collect();

		assert_eq!(blocks.len(), 2);
		assert_eq!(blocks[0].head.code, *b"GLOB");
		assert_eq!(blocks[0].head.sdna_nr, 3);
		assert_eq!(blocks[0].payload, b"abcd");
		assert_eq!(blocks[1].head.code, *b"DATA");
		assert_eq!(blocks[1].payload, b"hello\0");

		assert!(blocks[0].file_offset < blocks[1].file_offset);
		for block in &blocks {
			let end = block.file_offset + header.bhead_size() + block.payload.len();
			assert!(end <= bytes.len(), "block must stay inside buffer");
		}
	}

	#[test]
	fn truncated_header_tail_ends_scan_without_error() {
		let bytes = ContainerBuilder::le64()
			.block(*b"DATA", 0, 1, b"kept")
			.raw(b"DATA\x04\x00\x00")
			.build();
		let header = BlendHeader::parse(&bytes).expect("header parses");
		let blocks: Vec<_> = BlockIter::new(&bytes, BlendHeader::SIZE, header).collect();

		assert_eq!(blocks.len(), 1);
		assert_eq!(blocks[0].payload, b"kept");
	}

	#[test]
	fn negative_length_ends_scan() {
		let bytes = ContainerBuilder::le64()
			.block(*b"GLOB", 0, 1, b"ok")
			.block_header_only(*b"DATA", -5)
			.build();
		let header = BlendHeader::parse(&bytes).expect("header parses");
		let blocks: Vec<_> = BlockIter::new(&bytes, BlendHeader::SIZE, header).collect();

		assert_eq!(blocks.len(), 1);
		assert_eq!(blocks[0].head.code, *b"GLOB");
	}

	#[test]
	fn overrunning_body_ends_scan() {
		let bytes = ContainerBuilder::le64()
			.block(*b"GLOB", 0, 1, b"ok")
			.block_header_only(*b"DATA", 4096)
			.raw(b"short")
			.build();
		let header = BlendHeader::parse(&bytes).expect("header parses");
		let blocks: Vec<_> = BlockIter::new(&bytes, BlendHeader::SIZE, header).collect();

		assert_eq!(blocks.len(), 1);
	}

	#[test]
	fn parses_narrow_big_endian_stream() {
		let bytes = ContainerBuilder::new(4, false, "248")
			.block(*b"TEST", 7, 2, b"payload!")
			.build();
		let header = BlendHeader::parse(&bytes).expect("header parses");
		assert_eq!(header.bhead_size(), 20);

		let blocks: Vec<_> = BlockIter::new(&bytes, BlendHeader::SIZE, header).collect();
		assert_eq!(blocks.len(), 1);
		assert_eq!(blocks[0].head.code, *b"TEST");
		assert_eq!(blocks[0].head.sdna_nr, 7);
		assert_eq!(blocks[0].head.count, 2);
		assert_eq!(blocks[0].payload, b"payload!");
	}

	#[test]
	fn empty_stream_yields_no_blocks() {
		let bytes = ContainerBuilder::le64().build();
		let header = BlendHeader::parse(&bytes).expect("header parses");
		assert_eq!(BlockIter::new(&bytes, BlendHeader::SIZE, header).count(), 0);
	}
}
