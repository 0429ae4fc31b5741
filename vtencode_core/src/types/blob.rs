//! This module provides the [`Blob`] struct, a wrapper around [`Vec<u8>`] that holds encoded
//! tile payloads and intermediate protobuf messages.
//!
//! # Examples
//!
//! ```rust
//! use vtencode_core::Blob;
//!
//! let blob = Blob::from(vec![0x1a, 0x00]);
//! assert_eq!(blob.len(), 2);
//! assert_eq!(blob.as_hex(), "1a 00");
//! assert_eq!(blob.into_vec(), vec![0x1a, 0x00]);
//! ```

use std::fmt::Debug;

/// A simple wrapper around [`Vec<u8>`] with helpers for working with encoded bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Creates a zero-filled `Blob` of the given length.
	///
	/// # Examples
	///
	/// ```rust
	/// use vtencode_core::Blob;
	///
	/// let blob = Blob::new_sized(3);
	/// assert_eq!(blob.as_slice(), &[0, 0, 0]);
	/// ```
	#[must_use]
	pub fn new_sized(length: usize) -> Blob {
		Blob(vec![0u8; length])
	}

	/// Returns a reference to the underlying byte slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	/// Returns a mutable reference to the underlying byte slice.
	pub fn as_mut_slice(&mut self) -> &mut [u8] {
		self.0.as_mut()
	}

	/// Consumes this [`Blob`] and returns the underlying `Vec<u8>`.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the bytes as lowercase hex pairs separated by spaces.
	#[must_use]
	pub fn as_hex(&self) -> String {
		self
			.0
			.iter()
			.map(|byte| format!("{byte:02x}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Returns the number of bytes.
	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({}): {}", self.0.len(), self.as_hex())
	}
}

impl Default for Blob {
	fn default() -> Self {
		Self::new_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty() {
		let blob = Blob::new_empty();
		assert!(blob.is_empty());
		assert_eq!(blob.len(), 0);
		assert_eq!(blob, Blob::default());
	}

	#[test]
	fn sized_and_mutable() {
		let mut blob = Blob::new_sized(4);
		blob.as_mut_slice()[2] = 0xff;
		assert_eq!(blob.as_slice(), &[0, 0, 0xff, 0]);
	}

	#[test]
	fn conversions() {
		let bytes: &[u8] = &[1, 2, 3];
		assert_eq!(Blob::from(bytes), Blob::from(vec![1, 2, 3]));
		assert_eq!(Blob::from(&[1, 2, 3]).into_vec(), vec![1, 2, 3]);
	}

	#[test]
	fn debug_shows_length_and_hex() {
		let blob = Blob::from(&[0xde, 0xad, 0xbe, 0xef]);
		assert_eq!(format!("{blob:?}"), "Blob(4): de ad be ef");
	}
}
