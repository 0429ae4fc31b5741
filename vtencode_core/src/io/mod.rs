//! Value readers and writers for varint and protobuf encoded data.
//!
//! [`ValueWriter`] and [`ValueReader`] provide the primitives (varints, zigzag varints, floats,
//! length-delimited fields, packed repeated fields) that the vector tile codec is written in.
//! [`ValueWriterBlob`] writes into memory, [`ValueReaderSlice`] reads from a borrowed slice.
//!
//! ```rust
//! use vtencode_core::io::*;
//!
//! let mut writer = ValueWriterBlob::new_le();
//! writer.write_pbf_key(1, 2).unwrap();
//! writer.write_pbf_string("elev").unwrap();
//! let blob = writer.into_blob();
//!
//! let mut reader = ValueReaderSlice::new_le(blob.as_slice());
//! assert_eq!(reader.read_pbf_key().unwrap(), (1, 2));
//! assert_eq!(reader.read_pbf_string().unwrap(), "elev");
//! ```

mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_blob;

pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_blob::*;
