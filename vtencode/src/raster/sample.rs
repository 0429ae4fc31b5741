use std::fmt::{Debug, Display};

/// A numeric sample type a [`RasterTile`](crate::RasterTile) can hold.
///
/// The text written into feature properties is the type's `Display` output, so `42.5f32`
/// becomes `"42.5"`, `7u8` becomes `"7"` and a float NaN becomes `"NaN"`.
pub trait Sample: Copy + Debug + Display + PartialEq + Send + Sync + 'static {
	/// Returns `true` if this sample equals the nodata value. NaN matches a NaN nodata value.
	fn is_nodata(self, nodata: Self) -> bool;
}

macro_rules! impl_integer_sample {
	($($t:ty),*) => {
		$(
			impl Sample for $t {
				fn is_nodata(self, nodata: Self) -> bool {
					self == nodata
				}
			}
		)*
	};
}

macro_rules! impl_float_sample {
	($($t:ty),*) => {
		$(
			impl Sample for $t {
				fn is_nodata(self, nodata: Self) -> bool {
					self == nodata || (self.is_nan() && nodata.is_nan())
				}
			}
		)*
	};
}

impl_integer_sample!(u8, u16, u32, u64, i8, i16, i32, i64);
impl_float_sample!(f32, f64);
