//! The capability the encoder drives to assemble a vector tile.

mod mvt;

pub use mvt::{MVT_VERSION, MvtTileBuilder};

use crate::FeatureType;
use anyhow::Result;
use vtencode_core::Blob;
use vtencode_geometry::TilePoint;

/// Incrementally assembles one vector tile.
///
/// Calls follow a fixed protocol: one `create_layer`, then for every feature `begin_feature`,
/// at least one `add_ring_or_point`, any number of `set_property` and finally `commit_feature`.
/// `serialize_tile` consumes the builder.
pub trait TileBuilder {
	fn create_layer(&mut self, name: &str, extent: u32) -> Result<()>;

	fn begin_feature(&mut self, kind: FeatureType) -> Result<()>;

	/// Adds a single point, or one closed ring whose last vertex repeats the first.
	fn add_ring_or_point(&mut self, vertices: &[TilePoint]) -> Result<()>;

	fn set_property(&mut self, key: &str, value: String) -> Result<()>;

	fn commit_feature(&mut self) -> Result<()>;

	fn serialize_tile(self) -> Result<Blob>
	where
		Self: Sized;
}
