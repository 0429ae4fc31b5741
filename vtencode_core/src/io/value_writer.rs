//! The [`ValueWriter`] trait: varint, zigzag and protobuf field writing on top of any
//! [`std::io::Write`] destination.

use super::ValueWriterBlob;
use crate::Blob;
use anyhow::{Context, Result};
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// Writes encoded values to a destination with byte order `E`.
pub trait ValueWriter<E: ByteOrder> {
	/// Returns the underlying writer.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Returns the current write position.
	fn position(&mut self) -> Result<u64>;

	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	/// Writes an unsigned LEB128 varint.
	fn write_varint(&mut self, mut value: u64) -> Result<()> {
		while value >= 0x80 {
			self.get_writer().write_all(&[((value & 0x7F) as u8) | 0x80])?;
			value >>= 7;
		}
		self.get_writer().write_all(&[value as u8])?;
		Ok(())
	}

	/// Writes a zigzag-encoded signed varint, as used by MVT geometry parameters and `sint` values.
	fn write_svarint(&mut self, value: i64) -> Result<()> {
		self.write_varint(((value << 1) ^ (value >> 63)) as u64)
	}

	fn write_f32(&mut self, value: f32) -> Result<()> {
		Ok(self.get_writer().write_f32::<E>(value)?)
	}

	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.get_writer().write_all(blob.as_slice())?;
		Ok(())
	}

	fn write_string(&mut self, text: &str) -> Result<()> {
		self.get_writer().write_all(text.as_bytes())?;
		Ok(())
	}

	/// Writes a protobuf field key: `(field_number << 3) | wire_type` as a varint.
	fn write_pbf_key(&mut self, field_number: u32, wire_type: u8) -> Result<()> {
		self
			.write_varint((u64::from(field_number) << 3) | u64::from(wire_type))
			.context("Failed to write PBF key")
	}

	/// Writes a packed repeated `uint32` field body (length prefix followed by varints).
	fn write_pbf_packed_uint32(&mut self, data: &[u32]) -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		for &value in data {
			writer
				.write_varint(u64::from(value))
				.context("Failed to write varint for packed uint32")?;
		}
		self
			.write_pbf_blob(&writer.into_blob())
			.context("Failed to write packed uint32 blob")
	}

	/// Writes a length-delimited blob.
	fn write_pbf_blob(&mut self, blob: &Blob) -> Result<()> {
		self
			.write_varint(blob.len())
			.context("Failed to write varint for blob length")?;
		self.write_blob(blob).context("Failed to write PBF blob")
	}

	/// Writes a length-delimited UTF-8 string.
	fn write_pbf_string(&mut self, text: &str) -> Result<()> {
		self
			.write_varint(text.len() as u64)
			.context("Failed to write varint for string length")?;
		self.write_string(text).context("Failed to write PBF string")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use byteorder::LittleEndian;
	use rstest::rstest;
	use std::io::Cursor;

	struct MockValueWriter {
		cursor: Cursor<Vec<u8>>,
	}

	impl MockValueWriter {
		fn new() -> Self {
			Self {
				cursor: Cursor::new(Vec::new()),
			}
		}

		fn into_inner(self) -> Vec<u8> {
			self.cursor.into_inner()
		}
	}

	impl ValueWriter<LittleEndian> for MockValueWriter {
		fn get_writer(&mut self) -> &mut dyn Write {
			&mut self.cursor
		}

		fn position(&mut self) -> Result<u64> {
			Ok(self.cursor.position())
		}
	}

	#[rstest]
	#[case(0, vec![0x00])]
	#[case(1, vec![0x01])]
	#[case(127, vec![0x7f])]
	#[case(128, vec![0x80, 0x01])]
	#[case(300, vec![0b10101100, 0b00000010])]
	fn write_varint(#[case] value: u64, #[case] expected: Vec<u8>) -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_varint(value)?;
		assert_eq!(writer.into_inner(), expected);
		Ok(())
	}

	#[rstest]
	#[case(0, vec![0])]
	#[case(-1, vec![1])]
	#[case(1, vec![2])]
	#[case(-75, vec![149, 1])]
	fn write_svarint(#[case] value: i64, #[case] expected: Vec<u8>) -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_svarint(value)?;
		assert_eq!(writer.into_inner(), expected);
		Ok(())
	}

	#[test]
	fn write_floats() -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_f32(1.0)?;
		writer.write_f64(1.0)?;
		assert_eq!(
			writer.into_inner(),
			vec![0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F]
		);
		Ok(())
	}

	#[test]
	fn write_pbf_key() -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_pbf_key(1, 0)?;
		writer.write_pbf_key(3, 2)?;
		writer.write_pbf_key(15, 0)?;
		assert_eq!(writer.into_inner(), vec![0x08, 0x1a, 0x78]);
		Ok(())
	}

	#[test]
	fn write_pbf_packed_uint32() -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_pbf_packed_uint32(&[100, 150, 300])?;
		assert_eq!(writer.into_inner(), vec![5, 100, 150, 1, 172, 2]);
		Ok(())
	}

	#[test]
	fn write_pbf_string() -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_pbf_string("elev")?;
		assert_eq!(writer.into_inner(), vec![0x04, b'e', b'l', b'e', b'v']);
		Ok(())
	}

	#[test]
	fn write_pbf_blob() -> Result<()> {
		let mut writer = MockValueWriter::new();
		assert!(writer.is_empty()?);
		writer.write_pbf_blob(&Blob::from(vec![0x01, 0x02, 0x03]))?;
		assert!(!writer.is_empty()?);
		assert_eq!(writer.into_inner(), vec![0x03, 0x01, 0x02, 0x03]);
		Ok(())
	}
}
