//! Vector Tile (MVT) support.
//!
//! Low-level read/write utilities for the Mapbox Vector Tile protobuf format, version 2.1:
//!
//! - [`feature`]: per-feature geometry command stream and tag ids.
//! - [`geometry_type`]: the wire-level geometry type enum.
//! - [`layer`]: a named layer with its key/value tables, extent and version.
//! - [`property_manager`]: the de-duplicated key and value tables of a layer.
//! - [`tile`]: the top-level container holding the layers.
//! - [`value`]: protobuf encoding of typed property values.

mod feature;
mod geometry_type;
mod layer;
mod property_manager;
mod tile;
mod value;

pub use feature::VectorTileFeature;
pub use geometry_type::GeomType;
pub use layer::{DEFAULT_EXTENT, VectorTileLayer};
pub use property_manager::PropertyManager;
pub use tile::VectorTile;
pub use value::GeoValuePBF;
