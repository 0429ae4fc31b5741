use super::Sample;
use crate::{EncodeError, EncodeResult};

/// Sample values of a raster tile with shape `(bands, height, width)`.
///
/// Samples are stored band-major: all rows of band 0, then all rows of band 1, and so on.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterTile<T: Sample> {
	bands: usize,
	height: usize,
	width: usize,
	data: Vec<T>,
}

impl<T: Sample> RasterTile<T> {
	/// Creates a tile from band-major samples.
	///
	/// # Errors
	///
	/// Fails with [`EncodeError::InvalidArgument`] if `height` or `width` is zero, or if `data` does
	/// not hold exactly `bands * height * width` samples.
	pub fn new(bands: usize, height: usize, width: usize, data: Vec<T>) -> EncodeResult<Self> {
		if height == 0 || width == 0 {
			return Err(EncodeError::invalid(format!(
				"raster tile must not be empty, got {height}x{width}"
			)));
		}
		let expected = bands
			.checked_mul(height)
			.and_then(|n| n.checked_mul(width))
			.ok_or_else(|| EncodeError::invalid("raster tile dimensions overflow"))?;
		if data.len() != expected {
			return Err(EncodeError::invalid(format!(
				"raster tile of {bands}x{height}x{width} needs {expected} samples, got {}",
				data.len()
			)));
		}
		Ok(RasterTile {
			bands,
			height,
			width,
			data,
		})
	}

	/// Creates a tile from one row-major sample vector per band.
	pub fn from_bands(height: usize, width: usize, bands: Vec<Vec<T>>) -> EncodeResult<Self> {
		let count = bands.len();
		for (index, band) in bands.iter().enumerate() {
			if band.len() != height * width {
				return Err(EncodeError::invalid(format!(
					"band {index} has {} samples, expected {}",
					band.len(),
					height * width
				)));
			}
		}
		RasterTile::new(count, height, width, bands.concat())
	}

	#[must_use]
	pub fn band_count(&self) -> usize {
		self.bands
	}

	#[must_use]
	pub fn height(&self) -> usize {
		self.height
	}

	#[must_use]
	pub fn width(&self) -> usize {
		self.width
	}

	/// Spatial shape as `(height, width)`.
	#[must_use]
	pub fn shape(&self) -> (usize, usize) {
		(self.height, self.width)
	}

	#[must_use]
	pub fn get(&self, band: usize, row: usize, col: usize) -> Option<T> {
		if band >= self.bands || row >= self.height || col >= self.width {
			return None;
		}
		Some(self.data[self.index(band, row, col)])
	}

	/// Iterates the samples of all bands at one pixel, in band order.
	pub fn pixel(&self, row: usize, col: usize) -> impl Iterator<Item = T> + '_ {
		(0..self.bands).filter_map(move |band| self.get(band, row, col))
	}

	fn index(&self, band: usize, row: usize, col: usize) -> usize {
		(band * self.height + row) * self.width + col
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn band_major_layout() -> EncodeResult<()> {
		let tile = RasterTile::new(2, 2, 3, (0u8..12).collect())?;
		assert_eq!(tile.shape(), (2, 3));
		assert_eq!(tile.band_count(), 2);
		assert_eq!(tile.get(0, 0, 0), Some(0));
		assert_eq!(tile.get(0, 1, 2), Some(5));
		assert_eq!(tile.get(1, 0, 1), Some(7));
		assert_eq!(tile.get(2, 0, 0), None);
		assert_eq!(tile.get(0, 2, 0), None);
		assert_eq!(tile.pixel(1, 1).collect::<Vec<_>>(), vec![4, 10]);
		Ok(())
	}

	#[test]
	fn from_bands_matches_new() -> EncodeResult<()> {
		let a = RasterTile::from_bands(1, 2, vec![vec![1.5f32, 2.5], vec![3.5, 4.5]])?;
		let b = RasterTile::new(2, 1, 2, vec![1.5f32, 2.5, 3.5, 4.5])?;
		assert_eq!(a, b);
		Ok(())
	}

	#[test]
	fn rejects_bad_layouts() {
		assert!(matches!(
			RasterTile::new(1, 0, 4, Vec::<u8>::new()),
			Err(EncodeError::InvalidArgument(_))
		));
		assert!(matches!(
			RasterTile::new(1, 4, 0, Vec::<u8>::new()),
			Err(EncodeError::InvalidArgument(_))
		));
		assert!(matches!(
			RasterTile::new(1, 2, 2, vec![0u8; 3]),
			Err(EncodeError::InvalidArgument(_))
		));
		assert!(matches!(
			RasterTile::from_bands(2, 2, vec![vec![0u8; 4], vec![0u8; 2]]),
			Err(EncodeError::InvalidArgument(_))
		));
	}

	#[test]
	fn zero_bands_are_allowed() -> EncodeResult<()> {
		let tile = RasterTile::<u8>::new(0, 2, 2, vec![])?;
		assert_eq!(tile.band_count(), 0);
		assert_eq!(tile.pixel(0, 0).count(), 0);
		Ok(())
	}
}
