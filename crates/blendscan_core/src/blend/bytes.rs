use crate::blend::Endianness;

/// Bounded forward-only cursor over an immutable byte slice.
///
/// Reads return `None` once fewer bytes remain than requested; the caller
/// decides whether that is natural stream end or a fatal condition.
pub(crate) struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	pub(crate) fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	pub(crate) fn pos(&self) -> usize {
		self.pos
	}

	pub(crate) fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance, or `None` when fewer remain.
	pub(crate) fn read_exact(&mut self, n: usize) -> Option<&'a [u8]> {
		if n > self.remaining() {
			return None;
		}

		let start = self.pos;
		self.pos += n;
		Some(&self.bytes[start..self.pos])
	}

	pub(crate) fn skip(&mut self, n: usize) -> Option<()> {
		self.read_exact(n).map(|_| ())
	}

	pub(crate) fn read_code4(&mut self) -> Option<[u8; 4]> {
		let raw = self.read_exact(4)?;
		let mut out = [0_u8; 4];
		out.copy_from_slice(raw);
		Some(out)
	}

	pub(crate) fn read_u32(&mut self, endianness: Endianness) -> Option<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Some(match endianness {
			Endianness::Little => u32::from_le_bytes(buf),
			Endianness::Big => u32::from_be_bytes(buf),
		})
	}

	pub(crate) fn read_i32(&mut self, endianness: Endianness) -> Option<i32> {
		self.read_u32(endianness).map(|value| value as i32)
	}
}
