use super::FeatureType;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, path::Path};
use vtencode_geometry::vector_tile::DEFAULT_EXTENT;

/// Output settings of one encode: the layer name, the geometry kind and the tile extent.
///
/// Options can be loaded from YAML; missing fields keep their defaults:
///
/// ```yaml
/// layer_name: elevation
/// feature_type: polygon
/// extent: 256
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EncoderOptions {
	/// Name of the single output layer.
	#[serde(default = "default_layer_name")]
	pub layer_name: String,

	#[serde(default)]
	pub feature_type: FeatureType,

	/// Size of the tile coordinate space along one axis.
	#[serde(default = "default_extent")]
	pub extent: u32,
}

fn default_layer_name() -> String {
	String::from("my_layer")
}

fn default_extent() -> u32 {
	DEFAULT_EXTENT
}

impl Default for EncoderOptions {
	fn default() -> Self {
		EncoderOptions {
			layer_name: default_layer_name(),
			feature_type: FeatureType::default(),
			extent: default_extent(),
		}
	}
}

impl EncoderOptions {
	pub fn new(layer_name: &str) -> Self {
		EncoderOptions::default().with_layer_name(layer_name)
	}

	pub fn with_layer_name(mut self, layer_name: &str) -> Self {
		self.layer_name = layer_name.to_string();
		self
	}

	pub fn with_feature_type(mut self, feature_type: FeatureType) -> Self {
		self.feature_type = feature_type;
		self
	}

	pub fn with_extent(mut self, extent: u32) -> Self {
		self.extent = extent;
		self
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("Failed to open encoder options {path:?}"))?;
		EncoderOptions::from_reader(BufReader::new(file))
			.with_context(|| format!("Failed to parse encoder options {path:?}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn defaults() {
		let options = EncoderOptions::default();
		assert_eq!(options.layer_name, "my_layer");
		assert_eq!(options.feature_type, FeatureType::Point);
		assert_eq!(options.extent, 4096);
	}

	#[test]
	fn setters() {
		let options = EncoderOptions::new("pixels")
			.with_feature_type(FeatureType::Polygon)
			.with_extent(256);
		assert_eq!(
			options,
			EncoderOptions {
				layer_name: "pixels".to_string(),
				feature_type: FeatureType::Polygon,
				extent: 256,
			}
		);
	}

	#[test]
	fn parse_empty_config() {
		assert_eq!(EncoderOptions::from_string("").unwrap(), EncoderOptions::default());
	}

	#[test]
	fn parse_full_config() -> Result<()> {
		let options = EncoderOptions::from_string("layer_name: elevation\nfeature_type: polygon\nextent: 256\n")?;
		assert_eq!(
			options,
			EncoderOptions::new("elevation")
				.with_feature_type(FeatureType::Polygon)
				.with_extent(256)
		);
		Ok(())
	}

	#[test]
	fn parse_partial_config() -> Result<()> {
		let options = EncoderOptions::from_reader("feature_type: polygon".as_bytes())?;
		assert_eq!(options, EncoderOptions::default().with_feature_type(FeatureType::Polygon));
		Ok(())
	}

	#[test]
	fn parse_invalid_config() {
		assert!(EncoderOptions::from_string("layer: elevation").is_err());
		assert!(EncoderOptions::from_string("feature_type: line").is_err());
		assert!(EncoderOptions::from_string("extent: -1").is_err());
	}

	#[test]
	fn missing_file() {
		let error = EncoderOptions::from_path(Path::new("/does/not/exist.yaml")).unwrap_err();
		assert!(error.to_string().starts_with("Failed to open encoder options"));
	}
}
