//! Encodes decoded raster tiles into Mapbox Vector Tiles.
//!
//! Every valid pixel of a [`RasterTile`] (as selected by a [`ValidityMask`]) becomes one feature
//! in a single named layer: either a point near the pixel or a square polygon covering it. Each
//! feature carries one string property per band, keyed by the band's name.
//!
//! ```rust
//! use vtencode::*;
//!
//! # fn main() -> Result<(), EncodeError> {
//! let tile = RasterTile::new(1, 2, 2, vec![1u8, 2, 3, 4])?;
//! let mask = ValidityMask::from_rows(vec![vec![true, false], vec![false, true]])?;
//! let names = BandNames::new(["elev"]);
//! let options = EncoderOptions::new("pixels").with_extent(2);
//!
//! let blob = encode(&tile, &mask, &names, &options)?;
//! let features = decode_features(&blob)?;
//! assert_eq!(features.len(), 2);
//! # Ok(())
//! # }
//! ```

mod builder;
mod encoder;
mod error;
mod options;
mod pool;
mod raster;

pub use builder::*;
pub use encoder::*;
pub use error::*;
pub use options::*;
pub use pool::*;
pub use raster::*;

pub use vtencode_core::Blob;
pub use vtencode_geometry::{GeoProperties, GeoValue, TilePoint, vector_tile::GeomType};
