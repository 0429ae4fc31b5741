//! Property values and the Mapbox Vector Tile wire model used by the raster encoder.

mod geo;
pub mod vector_tile;

pub use geo::*;
