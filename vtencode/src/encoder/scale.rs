use vtencode_geometry::TilePoint;

/// Tile units per raster pixel along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale(i64);

impl Scale {
	/// `extent / width`, rounded down. A zero width yields a zero scale.
	#[must_use]
	pub fn new(extent: u32, width: usize) -> Scale {
		Scale(u64::from(extent).checked_div(width as u64).map_or(0, |s| s as i64))
	}

	#[must_use]
	pub fn get(&self) -> i64 {
		self.0
	}

	/// True when the extent is smaller than the width, so every pixel maps to the origin.
	#[must_use]
	pub fn is_degenerate(&self) -> bool {
		self.0 == 0
	}

	fn anchor(&self, row: usize, col: usize) -> TilePoint {
		[col as i64 * self.0, row as i64 * self.0]
	}

	/// Point geometry of the pixel at `(row, col)`.
	#[must_use]
	pub fn point(&self, row: usize, col: usize) -> TilePoint {
		let [x, y] = self.anchor(row, col);
		let half = self.0 / 2;
		[x + half, y - half]
	}

	/// Closed ring of the pixel at `(row, col)`.
	#[must_use]
	pub fn ring(&self, row: usize, col: usize) -> [TilePoint; 5] {
		let [x, y] = self.anchor(row, col);
		let s = self.0;
		[[x, y], [x + s, y], [x + s, y - s], [x, y - s], [x, y]]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(8, 4, 2)]
	#[case(4096, 256, 16)]
	#[case(4096, 100, 40)]
	#[case(4, 4, 1)]
	#[case(2, 4, 0)]
	#[case(8, 0, 0)]
	fn integer_scale(#[case] extent: u32, #[case] width: usize, #[case] expected: i64) {
		let scale = Scale::new(extent, width);
		assert_eq!(scale.get(), expected);
		assert_eq!(scale.is_degenerate(), expected == 0);
	}

	#[test]
	fn pixel_geometry() {
		let scale = Scale::new(8, 4);
		assert_eq!(scale.point(1, 2), [5, 1]);
		assert_eq!(scale.point(0, 0), [1, -1]);
		assert_eq!(scale.ring(1, 2), [[4, 2], [6, 2], [6, 0], [4, 0], [4, 2]]);
	}

	#[test]
	fn odd_scale_rounds_half_down() {
		let scale = Scale::new(12, 4);
		assert_eq!(scale.get(), 3);
		assert_eq!(scale.point(0, 0), [1, -1]);
		assert_eq!(scale.point(3, 3), [10, 8]);
	}

	#[test]
	fn degenerate_scale() {
		let scale = Scale::new(2, 4);
		assert_eq!(scale.point(3, 3), [0, 0]);
		assert_eq!(scale.ring(3, 3), [[0, 0]; 5]);
	}
}
