//! Turns the valid pixels of a raster tile into the features of one vector tile layer.

mod decode;
mod scale;

pub use decode::{DecodedFeature, decode_features};
pub use scale::Scale;

use crate::{
	BandNames, EncodeError, EncodeResult, EncoderOptions, FeatureType, MvtTileBuilder, RasterTile, Sample,
	TileBuilder, ValidityMask,
};
use log::{debug, warn};
use vtencode_core::Blob;

/// Content type of the encoded tiles.
pub const MVT_MIME_TYPE: &str = "application/x-protobuf";

/// Encodes every valid pixel of `tile` as one feature of a single MVT layer.
///
/// Pixels are visited row-major. With `scale = extent / width` (integer division), the pixel at
/// `(row, col)` is anchored at `x = col * scale`, `y = row * scale` and becomes
///
/// - a point at `(x + scale / 2, y - scale / 2)` for [`FeatureType::Point`], or
/// - the ring `(x, y) (x + scale, y) (x + scale, y - scale) (x, y - scale) (x, y)` for
///   [`FeatureType::Polygon`].
///
/// Each feature carries one string property per band, keyed by the band's name and holding the
/// sample's `Display` text.
///
/// # Errors
///
/// Preconditions are checked before anything is built: [`EncodeError::ShapeMismatch`] if the
/// mask and tile shapes differ, [`EncodeError::InvalidArgument`] for a wrong number of band names
/// or a zero extent. Builder failures surface as [`EncodeError::Build`].
pub fn encode<T: Sample>(
	tile: &RasterTile<T>,
	mask: &ValidityMask,
	band_names: &BandNames,
	options: &EncoderOptions,
) -> EncodeResult<Blob> {
	encode_with(MvtTileBuilder::new(), tile, mask, band_names, options)
}

/// Like [`encode`], but drives the given builder.
pub fn encode_with<B: TileBuilder, T: Sample>(
	mut builder: B,
	tile: &RasterTile<T>,
	mask: &ValidityMask,
	band_names: &BandNames,
	options: &EncoderOptions,
) -> EncodeResult<Blob> {
	check_inputs(tile, mask, band_names, options)?;

	let scale = Scale::new(options.extent, tile.width());
	if scale.is_degenerate() {
		warn!(
			"tile extent {} is smaller than the tile width {}, all geometry collapses to the origin",
			options.extent,
			tile.width()
		);
	}
	debug!(
		"encoding {} of {}x{} pixels as {} features into layer '{}' (extent {}, scale {})",
		mask.count_valid(),
		tile.height(),
		tile.width(),
		options.feature_type,
		options.layer_name,
		options.extent,
		scale.get()
	);

	builder.create_layer(&options.layer_name, options.extent)?;
	for (row, col) in mask.iter_valid() {
		builder.begin_feature(options.feature_type)?;
		match options.feature_type {
			FeatureType::Point => builder.add_ring_or_point(&[scale.point(row, col)])?,
			FeatureType::Polygon => builder.add_ring_or_point(&scale.ring(row, col))?,
		}
		for (name, value) in band_names.iter().zip(tile.pixel(row, col)) {
			builder.set_property(name, value.to_string())?;
		}
		builder.commit_feature()?;
	}

	Ok(builder.serialize_tile()?)
}

fn check_inputs<T: Sample>(
	tile: &RasterTile<T>,
	mask: &ValidityMask,
	band_names: &BandNames,
	options: &EncoderOptions,
) -> EncodeResult<()> {
	if mask.shape() != tile.shape() {
		return Err(EncodeError::ShapeMismatch {
			tile: tile.shape(),
			mask: mask.shape(),
		});
	}
	if band_names.len() != tile.band_count() {
		return Err(EncodeError::invalid(format!(
			"got {} band names for {} bands",
			band_names.len(),
			tile.band_count()
		)));
	}
	if options.extent == 0 {
		return Err(EncodeError::invalid("tile extent must be positive"));
	}
	Ok(())
}
