mod properties;
mod value;

pub use properties::*;
pub use value::*;

/// A vertex in integer tile coordinates: `[x, y]`, origin top-left, y increasing downward.
pub type TilePoint = [i64; 2];
