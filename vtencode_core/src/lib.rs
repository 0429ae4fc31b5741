//! Low-level building blocks shared by the vtencode crates: the [`Blob`] byte buffer and the
//! [`io`] value readers/writers that speak varints and protobuf framing.

pub mod io;

mod types;
pub use types::*;
