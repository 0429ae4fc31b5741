use super::{RasterTile, Sample};
use crate::{EncodeError, EncodeResult};

/// Per-pixel validity of a raster tile. Only valid pixels become features.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidityMask {
	height: usize,
	width: usize,
	data: Vec<bool>,
}

impl ValidityMask {
	/// Creates a mask from row-major flags.
	pub fn new(height: usize, width: usize, data: Vec<bool>) -> EncodeResult<Self> {
		let expected = height
			.checked_mul(width)
			.ok_or_else(|| EncodeError::invalid("mask dimensions overflow"))?;
		if data.len() != expected {
			return Err(EncodeError::invalid(format!(
				"mask of {height}x{width} needs {expected} flags, got {}",
				data.len()
			)));
		}
		Ok(ValidityMask { height, width, data })
	}

	/// Creates a mask from rows of flags. All rows must have the same length.
	pub fn from_rows(rows: Vec<Vec<bool>>) -> EncodeResult<Self> {
		let height = rows.len();
		let width = rows.first().map_or(0, Vec::len);
		if let Some(row) = rows.iter().position(|r| r.len() != width) {
			return Err(EncodeError::invalid(format!(
				"mask row {row} has {} flags, expected {width}",
				rows[row].len()
			)));
		}
		ValidityMask::new(height, width, rows.concat())
	}

	pub fn all_valid(height: usize, width: usize) -> EncodeResult<Self> {
		ValidityMask::filled(height, width, true)
	}

	pub fn none_valid(height: usize, width: usize) -> EncodeResult<Self> {
		ValidityMask::filled(height, width, false)
	}

	fn filled(height: usize, width: usize, valid: bool) -> EncodeResult<Self> {
		let len = height
			.checked_mul(width)
			.ok_or_else(|| EncodeError::invalid("mask dimensions overflow"))?;
		ValidityMask::new(height, width, vec![valid; len])
	}

	/// Derives a mask from a nodata value: a pixel is invalid when every band holds `nodata`.
	#[must_use]
	pub fn from_nodata<T: Sample>(tile: &RasterTile<T>, nodata: T) -> Self {
		let (height, width) = tile.shape();
		let mut data = Vec::with_capacity(height * width);
		for row in 0..height {
			for col in 0..width {
				data.push(!tile.pixel(row, col).all(|v| v.is_nodata(nodata)));
			}
		}
		ValidityMask { height, width, data }
	}

	/// Spatial shape as `(height, width)`.
	#[must_use]
	pub fn shape(&self) -> (usize, usize) {
		(self.height, self.width)
	}

	/// Returns `false` for pixels outside the mask.
	#[must_use]
	pub fn is_valid(&self, row: usize, col: usize) -> bool {
		row < self.height && col < self.width && self.data[row * self.width + col]
	}

	/// Sets the validity of one pixel.
	pub fn set(&mut self, row: usize, col: usize, valid: bool) -> EncodeResult<()> {
		if row >= self.height || col >= self.width {
			return Err(EncodeError::invalid(format!(
				"pixel ({row}, {col}) is outside the {}x{} mask",
				self.height, self.width
			)));
		}
		self.data[row * self.width + col] = valid;
		Ok(())
	}

	#[must_use]
	pub fn count_valid(&self) -> usize {
		self.data.iter().filter(|v| **v).count()
	}

	/// Iterates the `(row, col)` positions of valid pixels in row-major order.
	pub fn iter_valid(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		let width = self.width;
		self
			.data
			.iter()
			.enumerate()
			.filter(|(_, valid)| **valid)
			.map(move |(index, _)| (index / width, index % width))
	}
}
