use super::TileBuilder;
use crate::FeatureType;
use anyhow::{Context, Result, ensure};
use vtencode_core::Blob;
use vtencode_geometry::{
	GeoValue, TilePoint,
	vector_tile::{VectorTile, VectorTileFeature, VectorTileLayer},
};

/// Layer version written by [`MvtTileBuilder`].
pub const MVT_VERSION: u32 = 2;

/// A [`TileBuilder`] producing Mapbox Vector Tile protobuf.
#[derive(Debug, Default)]
pub struct MvtTileBuilder {
	layers: Vec<VectorTileLayer>,
	pending: Option<PendingFeature>,
}

#[derive(Debug)]
struct PendingFeature {
	kind: FeatureType,
	geometry: Vec<Vec<TilePoint>>,
	properties: Vec<(String, GeoValue)>,
}

impl MvtTileBuilder {
	pub fn new() -> Self {
		MvtTileBuilder::default()
	}

	fn pending_mut(&mut self) -> Result<&mut PendingFeature> {
		self.pending.as_mut().context("no feature has been begun")
	}
}

impl TileBuilder for MvtTileBuilder {
	fn create_layer(&mut self, name: &str, extent: u32) -> Result<()> {
		ensure!(self.pending.is_none(), "cannot create layer '{name}' while a feature is open");
		ensure!(extent > 0, "layer extent must be positive");
		self
			.layers
			.push(VectorTileLayer::new(name.to_string(), extent, MVT_VERSION));
		Ok(())
	}

	fn begin_feature(&mut self, kind: FeatureType) -> Result<()> {
		ensure!(!self.layers.is_empty(), "cannot begin a feature before a layer exists");
		ensure!(self.pending.is_none(), "previous feature was not committed");
		self.pending = Some(PendingFeature {
			kind,
			geometry: Vec::new(),
			properties: Vec::new(),
		});
		Ok(())
	}

	fn add_ring_or_point(&mut self, vertices: &[TilePoint]) -> Result<()> {
		let pending = self.pending_mut()?;
		match pending.kind {
			FeatureType::Point => {
				ensure!(
					vertices.len() == 1,
					"point geometry needs exactly 1 vertex, got {}",
					vertices.len()
				);
			}
			FeatureType::Polygon => {
				ensure!(
					vertices.len() >= 4,
					"ring needs at least 4 vertices, got {}",
					vertices.len()
				);
				ensure!(vertices.first() == vertices.last(), "ring is not closed");
			}
		}
		pending.geometry.push(vertices.to_vec());
		Ok(())
	}

	fn set_property(&mut self, key: &str, value: String) -> Result<()> {
		self
			.pending_mut()?
			.properties
			.push((key.to_string(), GeoValue::String(value)));
		Ok(())
	}

	fn commit_feature(&mut self) -> Result<()> {
		let pending = self.pending.take().context("no feature to commit")?;
		ensure!(!pending.geometry.is_empty(), "feature has no geometry");

		let feature = match pending.kind {
			FeatureType::Point => {
				let points: Vec<TilePoint> = pending.geometry.concat();
				VectorTileFeature::from_points(None, Vec::new(), &points)
			}
			FeatureType::Polygon => VectorTileFeature::from_rings(None, Vec::new(), &pending.geometry),
		}
		.context("Failed to encode feature geometry")?;
		ensure!(
			feature.geom_type == pending.kind.geom_type(),
			"{} feature was encoded as {:?}",
			pending.kind,
			feature.geom_type
		);

		self
			.layers
			.last_mut()
			.context("no layer to add the feature to")?
			.add_feature(feature, pending.properties);
		Ok(())
	}

	fn serialize_tile(self) -> Result<Blob> {
		ensure!(self.pending.is_none(), "last feature was not committed");
		VectorTile::new(self.layers)
			.to_blob()
			.context("Failed to serialize vector tile")
	}
}
