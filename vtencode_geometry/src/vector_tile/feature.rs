//! A single MVT feature: optional id, tag ids and an encoded geometry command stream.
//!
//! Geometry follows section 4.3 of the vector tile specification
//! (<https://github.com/mapbox/vector-tile-spec/blob/master/2.1/README.md#43-geometry-encoding>):
//! a sequence of command integers (`id | count << 3`) each followed by `count` pairs of
//! zigzag-encoded coordinate deltas relative to a cursor that starts at `(0, 0)`.

use super::{geometry_type::GeomType, layer::VectorTileLayer};
use crate::{GeoProperties, TilePoint};
use anyhow::{Context, Result, bail, ensure};
use byteorder::LE;
use vtencode_core::{
	Blob,
	io::{ValueReader, ValueReaderSlice, ValueWriter, ValueWriterBlob},
};

const MOVE_TO: u64 = 1;
const LINE_TO: u64 = 2;
const CLOSE_PATH: u64 = 7;

fn command(id: u64, count: usize) -> u64 {
	((count as u64) << 3) | id
}

#[derive(Clone, Debug, PartialEq)]
pub struct VectorTileFeature {
	pub id: Option<u64>,
	pub tag_ids: Vec<u32>,
	pub geom_type: GeomType,
	pub geom_data: Blob,
}

impl Default for VectorTileFeature {
	fn default() -> Self {
		VectorTileFeature {
			id: None,
			tag_ids: Vec::new(),
			geom_type: GeomType::Unknown,
			geom_data: Blob::new_empty(),
		}
	}
}

/// Delta-encodes vertices against a shared cursor.
struct GeometryWriter {
	writer: ValueWriterBlob<LE>,
	cursor: TilePoint,
}

impl GeometryWriter {
	fn new() -> Self {
		GeometryWriter {
			writer: ValueWriterBlob::new_le(),
			cursor: [0, 0],
		}
	}

	fn command(&mut self, id: u64, count: usize) -> Result<()> {
		self.writer.write_varint(command(id, count))
	}

	fn point(&mut self, point: &TilePoint) -> Result<()> {
		self.writer.write_svarint(point[0] - self.cursor[0])?;
		self.writer.write_svarint(point[1] - self.cursor[1])?;
		self.cursor = *point;
		Ok(())
	}

	fn into_blob(self) -> Blob {
		self.writer.into_blob()
	}
}

impl VectorTileFeature {
	/// Decodes a feature message.
	pub fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<VectorTileFeature> {
		let mut f = VectorTileFeature::default();

		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(1, 0) => f.id = Some(reader.read_varint().context("Failed to read feature ID")?),
				(2, 2) => f.tag_ids = reader.read_pbf_packed_uint32().context("Failed to read tag IDs")?,
				(3, 0) => f.geom_type = GeomType::from(reader.read_varint().context("Failed to read geometry type")?),
				(4, 2) => f.geom_data = reader.read_pbf_blob().context("Failed to read geometry data")?,
				(f, w) => bail!("Unexpected combination of field number ({f}) and wire type ({w})"),
			}
		}

		Ok(f)
	}

	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();

		if let Some(id) = self.id {
			writer
				.write_pbf_key(1, 0)
				.context("Failed to write PBF key for feature ID")?;
			writer.write_varint(id).context("Failed to write feature ID")?;
		}

		if !self.tag_ids.is_empty() {
			writer
				.write_pbf_key(2, 2)
				.context("Failed to write PBF key for tag IDs")?;
			writer
				.write_pbf_packed_uint32(&self.tag_ids)
				.context("Failed to write tag IDs")?;
		}

		writer
			.write_pbf_key(3, 0)
			.context("Failed to write PBF key for geometry type")?;
		writer
			.write_varint(self.geom_type.as_u64())
			.context("Failed to write geometry type")?;

		if !self.geom_data.is_empty() {
			writer
				.write_pbf_key(4, 2)
				.context("Failed to write PBF key for geometry data")?;
			writer
				.write_pbf_blob(&self.geom_data)
				.context("Failed to write geometry data")?;
		}

		Ok(writer.into_blob())
	}

	/// Builds a point feature: a single `MoveTo` carrying every point.
	pub fn from_points(id: Option<u64>, tag_ids: Vec<u32>, points: &[TilePoint]) -> Result<VectorTileFeature> {
		ensure!(!points.is_empty(), "Point geometry must contain at least one point");

		let mut writer = GeometryWriter::new();
		writer.command(MOVE_TO, points.len())?;
		for point in points {
			writer.point(point)?;
		}

		Ok(VectorTileFeature {
			id,
			tag_ids,
			geom_type: GeomType::MultiPoint,
			geom_data: writer.into_blob(),
		})
	}

	/// Builds a polygon feature from closed rings (first vertex repeated at the end).
	///
	/// Each ring is written as `MoveTo` to the first vertex, one `LineTo` over the following
	/// vertices except the closing one, and `ClosePath`. Rings are written in the given order and
	/// orientation.
	pub fn from_rings(id: Option<u64>, tag_ids: Vec<u32>, rings: &[Vec<TilePoint>]) -> Result<VectorTileFeature> {
		ensure!(!rings.is_empty(), "Polygon geometry must contain at least one ring");

		let mut writer = GeometryWriter::new();
		for ring in rings {
			ensure!(
				ring.len() >= 4,
				"Each ring must have at least four points (A,B,C,A), got {}",
				ring.len()
			);
			ensure!(
				ring.first() == ring.last(),
				"First and last point of the ring must be the same"
			);

			let inner = &ring[1..ring.len() - 1];
			writer.command(MOVE_TO, 1)?;
			writer.point(&ring[0])?;
			writer.command(LINE_TO, inner.len())?;
			for point in inner {
				writer.point(point)?;
			}
			writer.command(CLOSE_PATH, 1)?;
		}

		Ok(VectorTileFeature {
			id,
			tag_ids,
			geom_type: GeomType::MultiPolygon,
			geom_data: writer.into_blob(),
		})
	}

	/// Decodes the command stream into absolute vertex paths.
	///
	/// Every `MoveTo` point starts a new path, so a multi-point decodes to one single-vertex path
	/// per point. `ClosePath` appends the path's first vertex.
	pub fn to_paths(&self) -> Result<Vec<Vec<TilePoint>>> {
		let mut reader = ValueReaderSlice::new_le(self.geom_data.as_slice());

		let mut paths: Vec<Vec<TilePoint>> = Vec::new();
		let mut path: Vec<TilePoint> = Vec::new();
		let mut x: i64 = 0;
		let mut y: i64 = 0;

		while reader.has_remaining() {
			let value = reader
				.read_varint()
				.context("Failed to read varint for geometry command")?;
			let id = value & 0x7;
			let count = value >> 3;

			match id {
				MOVE_TO | LINE_TO => {
					for _ in 0..count {
						if id == MOVE_TO && !path.is_empty() {
							paths.push(path);
							path = Vec::new();
						}
						let dx = reader.read_svarint().context("Failed to read x coordinate")?;
						let dy = reader.read_svarint().context("Failed to read y coordinate")?;
						x = x.checked_add(dx).context("x coordinate overflows")?;
						y = y.checked_add(dy).context("y coordinate overflows")?;
						path.push([x, y]);
					}
				}
				CLOSE_PATH => {
					ensure!(count == 1, "ClosePath command must have count 1, got {count}");
					ensure!(!path.is_empty(), "ClosePath command found on an empty path");
					path.push(path[0]);
				}
				_ => bail!("Unknown command {id}"),
			}
		}

		if !path.is_empty() {
			paths.push(path);
		}

		Ok(paths)
	}

	pub fn decode_properties(&self, layer: &VectorTileLayer) -> Result<GeoProperties> {
		layer.decode_tag_ids(&self.tag_ids)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn single_point_commands() -> Result<()> {
		let feature = VectorTileFeature::from_points(None, vec![], &[[5, 1]])?;
		assert_eq!(feature.geom_type, GeomType::MultiPoint);
		// MoveTo(1), zigzag(5), zigzag(1)
		assert_eq!(feature.geom_data.into_vec(), vec![9, 10, 2]);
		Ok(())
	}

	#[test]
	fn negative_coordinates() -> Result<()> {
		let feature = VectorTileFeature::from_points(None, vec![], &[[1, -1]])?;
		assert_eq!(feature.geom_data.as_slice(), &[9, 2, 1]);
		assert_eq!(feature.to_paths()?, vec![vec![[1, -1]]]);
		Ok(())
	}

	#[test]
	fn multi_point_deltas() -> Result<()> {
		let feature = VectorTileFeature::from_points(None, vec![], &[[2, 3], [4, 5]])?;
		assert_eq!(feature.geom_data.as_slice(), &[17, 4, 6, 4, 4]);
		assert_eq!(feature.to_paths()?, vec![vec![[2, 3]], vec![[4, 5]]]);
		Ok(())
	}

	#[test]
	fn square_ring_commands() -> Result<()> {
		let ring = vec![[4, 2], [6, 2], [6, 0], [4, 0], [4, 2]];
		let feature = VectorTileFeature::from_rings(None, vec![], &[ring.clone()])?;
		assert_eq!(feature.geom_type, GeomType::MultiPolygon);
		assert_eq!(
			feature.geom_data.as_slice(),
			&[
				9, 8, 4, // MoveTo(1) (4,2)
				26, 4, 0, 0, 3, 3, 0, // LineTo(3) (+2,0) (0,-2) (-2,0)
				15, // ClosePath(1)
			]
		);
		assert_eq!(feature.to_paths()?, vec![ring]);
		Ok(())
	}

	#[test]
	fn cursor_continues_across_rings() -> Result<()> {
		let outer = vec![[0, 0], [3, 0], [3, 3], [0, 3], [0, 0]];
		let inner = vec![[1, 1], [1, 2], [2, 2], [1, 1]];
		let feature = VectorTileFeature::from_rings(None, vec![], &[outer.clone(), inner.clone()])?;
		assert_eq!(feature.to_paths()?, vec![outer, inner]);
		Ok(())
	}

	#[test]
	fn collapsed_ring_is_still_written() -> Result<()> {
		let ring = vec![[0, 0]; 5];
		let feature = VectorTileFeature::from_rings(None, vec![], &[ring.clone()])?;
		assert_eq!(feature.to_paths()?, vec![ring]);
		Ok(())
	}

	#[test]
	fn rejects_invalid_geometry() {
		assert!(VectorTileFeature::from_points(None, vec![], &[]).is_err());
		assert!(VectorTileFeature::from_rings(None, vec![], &[]).is_err());
		assert!(VectorTileFeature::from_rings(None, vec![], &[vec![[0, 0], [1, 0], [0, 0]]]).is_err());
		assert!(VectorTileFeature::from_rings(None, vec![], &[vec![[0, 0], [1, 0], [1, 1], [0, 1]]]).is_err());
	}

	#[test]
	fn rejects_unknown_command() {
		let feature = VectorTileFeature {
			geom_data: Blob::from(vec![3]),
			..VectorTileFeature::default()
		};
		assert!(feature.to_paths().is_err());
	}

	#[test]
	fn close_path_needs_count_one() {
		for command in [7u8, 23, 0xFF] {
			let feature = VectorTileFeature {
				geom_data: Blob::from(vec![9, 0, 0, command]),
				..VectorTileFeature::default()
			};
			assert!(feature.to_paths().is_err(), "command {command}");
		}
	}

	#[test]
	fn close_path_on_empty_path() {
		let feature = VectorTileFeature {
			geom_data: Blob::from(vec![15]),
			..VectorTileFeature::default()
		};
		assert!(feature.to_paths().is_err());
	}

	#[test]
	fn rejects_coordinate_overflow() {
		let max = [0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
		let mut data = vec![17];
		for _ in 0..2 {
			data.extend_from_slice(&max);
			data.push(0);
		}
		let feature = VectorTileFeature {
			geom_data: Blob::from(data),
			..VectorTileFeature::default()
		};
		assert!(feature.to_paths().is_err());
	}

	#[test]
	fn message_round_trip() -> Result<()> {
		let feature = VectorTileFeature::from_points(Some(3), vec![0, 1, 1, 0], &[[5, 1]])?;
		let blob = feature.to_blob()?;
		assert_eq!(
			blob.as_slice(),
			&[
				0x08, 3, // id
				0x12, 4, 0, 1, 1, 0, // tags
				0x18, 1, // type
				0x22, 3, 9, 10, 2, // geometry
			]
		);
		let mut reader = ValueReaderSlice::new_le(blob.as_slice());
		assert_eq!(VectorTileFeature::read(&mut reader)?, feature);
		Ok(())
	}
}
