//! [`ValueReaderSlice`]: a [`ValueReader`] over a borrowed byte slice.

use super::{SeekRead, ValueReader};
use anyhow::{Result, anyhow, bail};
use byteorder::{ByteOrder, LittleEndian};
use std::{io::Cursor, marker::PhantomData};

/// Reads values from a byte slice using byte order `E`.
pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	/// Creates a little-endian reader.
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl SeekRead for Cursor<&[u8]> {}

impl<'a, E: ByteOrder + 'a> ValueReader<'a, E> for ValueReaderSlice<'a, E> {
	fn get_reader(&mut self) -> &mut dyn SeekRead {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}

	fn set_position(&mut self, position: u64) -> Result<()> {
		if position >= self.len {
			bail!("set position outside length")
		}
		self.cursor.set_position(position);
		Ok(())
	}

	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b,
	{
		let start = self.cursor.position();
		let end = match start.checked_add(length) {
			Some(end) if end <= self.len => end,
			_ => bail!("Requested sub-reader length exceeds remaining data"),
		};

		self.cursor.set_position(end);
		Ok(Box::new(ValueReaderSlice {
			_phantom: PhantomData,
			len: length,
			cursor: Cursor::new(
				self
					.cursor
					.get_ref()
					.get(start as usize..end as usize)
					.ok_or(anyhow!("out of bounds"))?,
			),
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn len_and_position() -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(&[0x01, 0x02, 0x03, 0x04]);
		assert_eq!(reader.len(), 4);
		reader.set_position(2)?;
		assert_eq!(reader.position(), 2);
		assert_eq!(reader.remaining(), 2);
		assert!(reader.set_position(4).is_err());
		Ok(())
	}

	#[test]
	fn sub_reader_is_bounded() -> Result<()> {
		let buf = [0x01, 0x02, 0x03, 0x04, 0x05];
		let mut reader = ValueReaderSlice::new_le(&buf);
		reader.set_position(1)?;
		{
			let mut sub_reader = reader.get_sub_reader(3)?;
			assert_eq!(sub_reader.len(), 3);
			assert_eq!(sub_reader.read_varint()?, 0x02);
			assert_eq!(sub_reader.read_varint()?, 0x03);
			assert_eq!(sub_reader.read_varint()?, 0x04);
			assert!(sub_reader.read_varint().is_err());
		}
		assert_eq!(reader.position(), 4);
		Ok(())
	}

	#[test]
	fn sub_reader_out_of_bounds() {
		let mut reader = ValueReaderSlice::new_le(&[0x01, 0x02, 0x03]);
		assert!(reader.get_sub_reader(5).is_err());
	}

	#[test]
	fn sub_reader_length_overflow() -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(&[0x01, 0x02, 0x03]);
		reader.set_position(1)?;
		assert!(reader.get_sub_reader(u64::MAX).is_err());

		let mut reader = ValueReaderSlice::new_le(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]);
		assert!(reader.get_pbf_sub_reader().is_err());
		Ok(())
	}

	#[test]
	fn pbf_sub_reader() -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(&[0x02, 0x08, 0x01, 0x10]);
		{
			let mut sub_reader = reader.get_pbf_sub_reader()?;
			assert_eq!(sub_reader.read_pbf_key()?, (1, 0));
			assert_eq!(sub_reader.read_varint()?, 1);
			assert!(!sub_reader.has_remaining());
		}
		assert_eq!(reader.read_pbf_key()?, (2, 0));
		Ok(())
	}
}
