use anyhow::{Context, Result};
use vtencode_core::Blob;
use vtencode_geometry::{
	GeoProperties, TilePoint,
	vector_tile::{GeomType, VectorTile},
};

/// One decoded feature of an encoded tile.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedFeature {
	pub layer: String,
	pub geom_type: GeomType,
	/// Absolute vertex paths; rings repeat their first vertex at the end.
	pub paths: Vec<Vec<TilePoint>>,
	pub properties: GeoProperties,
}

/// Decodes every feature of every layer in `blob`, in stored order.
pub fn decode_features(blob: &Blob) -> Result<Vec<DecodedFeature>> {
	let tile = VectorTile::from_blob(blob).context("Failed to decode vector tile")?;
	let mut features = Vec::new();
	for layer in &tile.layers {
		for feature in &layer.features {
			features.push(DecodedFeature {
				layer: layer.name.clone(),
				geom_type: feature.geom_type,
				paths: feature
					.to_paths()
					.with_context(|| format!("Failed to decode geometry in layer '{}'", layer.name))?,
				properties: feature
					.decode_properties(layer)
					.with_context(|| format!("Failed to decode properties in layer '{}'", layer.name))?,
			});
		}
	}
	Ok(features)
}
