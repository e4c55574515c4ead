use crate::blend::BlendHeader;
use crate::blend::bytes::Cursor;

/// Parsed block header record.
///
/// Field widths and byte order follow the header-declared layout parameters.
/// The pointer-sized legacy address field between `len` and `sdna_nr` is
/// skipped, not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BHead {
	/// Raw four-byte block code, possibly null-padded.
	pub code: [u8; 4],
	/// Declared payload length, signed as stored.
	pub len: i32,
	/// SDNA struct index; used only as an equality filter, never resolved.
	pub sdna_nr: u32,
	/// Declared element count (informational).
	pub count: u32,
}

impl BHead {
	/// Parse one block header, or `None` when the stream ends mid-header.
	pub(crate) fn parse(cursor: &mut Cursor<'_>, header: BlendHeader) -> Option<Self> {
		let code = cursor.read_code4()?;
		let len = cursor.read_i32(header.endianness)?;
		cursor.skip(header.pointer_size)?;
		let sdna_nr = cursor.read_u32(header.endianness)?;
		let count = cursor.read_u32(header.endianness)?;

		Some(Self {
			code,
			len,
			sdna_nr,
			count,
		})
	}

	/// Render the code with trailing padding removed and unprintable bytes masked.
	pub fn code_label(&self) -> String {
		let mut out = String::new();
		for byte in self.code {
			if byte == 0 {
				continue;
			}
			if byte.is_ascii_graphic() || byte == b' ' {
				out.push(char::from(byte));
			} else {
				out.push('.');
			}
		}
		if out.is_empty() { "....".to_owned() } else { out }
	}
}
