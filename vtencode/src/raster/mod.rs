//! In-memory raster tiles as handed over by a raster reader: band samples, the validity mask and
//! the band names.

mod band_names;
mod mask;
mod sample;
mod tile;

pub use band_names::BandNames;
pub use mask::ValidityMask;
pub use sample::Sample;
pub use tile::RasterTile;
