use std::{
	fmt::{Debug, Display},
	hash::Hash,
};

/// A typed feature property value, as carried by the MVT `Value` message.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Float(f32),
	Int(i64),
	String(String),
	UInt(u64),
}

impl GeoValue {
	/// Returns the string payload, or `None` for non-string values.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			GeoValue::String(s) => Some(s),
			_ => None,
		}
	}
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(v) => f.write_str(v),
			Self::Float(v) => write!(f, "{v}"),
			Self::Double(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::UInt(v) => write!(f, "{v}"),
			Self::Bool(v) => write!(f, "{v}"),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f32> for GeoValue {
	fn from(value: f32) -> Self {
		GeoValue::Float(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

// Floats compare by bit pattern so that values can key the layer's value table.
impl Eq for GeoValue {}

impl Hash for GeoValue {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		core::mem::discriminant(self).hash(state);
		match self {
			GeoValue::Bool(v) => v.hash(state),
			GeoValue::Double(v) => v.to_bits().hash(state),
			GeoValue::Float(v) => v.to_bits().hash(state),
			GeoValue::Int(v) => v.hash(state),
			GeoValue::String(v) => v.hash(state),
			GeoValue::UInt(v) => v.hash(state),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn display_is_plain_text() {
		assert_eq!(GeoValue::from("42.5").to_string(), "42.5");
		assert_eq!(GeoValue::from(-3i64).to_string(), "-3");
		assert_eq!(GeoValue::from(7u64).to_string(), "7");
		assert_eq!(GeoValue::from(true).to_string(), "true");
	}

	#[test]
	fn as_str() {
		assert_eq!(GeoValue::from("elev").as_str(), Some("elev"));
		assert_eq!(GeoValue::from(1.5f64).as_str(), None);
	}

	#[test]
	fn debug_names_variant() {
		assert_eq!(format!("{:?}", GeoValue::from("a")), "String(\"a\")");
		assert_eq!(format!("{:?}", GeoValue::from(2.0f32)), "Float(2.0)");
	}

	#[test]
	fn hash_distinguishes_variants() {
		let set: HashSet<GeoValue> = [
			GeoValue::from("1"),
			GeoValue::from(1u64),
			GeoValue::from(1i64),
			GeoValue::from("1"),
		]
		.into_iter()
		.collect();
		assert_eq!(set.len(), 3);
	}
}
