//! The geometry emitted per valid pixel.
//!
//! ```
//! use vtencode::FeatureType;
//!
//! assert_eq!("Polygon".parse::<FeatureType>().unwrap(), FeatureType::Polygon);
//! assert_eq!(FeatureType::default().as_str(), "point");
//! assert!("line".parse::<FeatureType>().is_err());
//! ```

use crate::EncodeError;
#[cfg(feature = "cli")]
use clap::ValueEnum;
use serde::Deserialize;
use std::{fmt::Display, str::FromStr};
use vtencode_geometry::vector_tile::GeomType;

#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
	/// One point near the pixel center.
	#[default]
	Point,
	/// One closed square ring covering the pixel.
	Polygon,
}

impl FeatureType {
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			FeatureType::Point => "point",
			FeatureType::Polygon => "polygon",
		}
	}

	/// The MVT geometry type features of this kind are written with.
	#[must_use]
	pub fn geom_type(&self) -> GeomType {
		match self {
			FeatureType::Point => GeomType::MultiPoint,
			FeatureType::Polygon => GeomType::MultiPolygon,
		}
	}
}

impl Display for FeatureType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FeatureType {
	type Err = EncodeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"point" => Ok(FeatureType::Point),
			"polygon" => Ok(FeatureType::Polygon),
			_ => Err(EncodeError::invalid(format!(
				"unknown feature type '{s}', expected 'point' or 'polygon'"
			))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("point", FeatureType::Point)]
	#[case("POINT", FeatureType::Point)]
	#[case("polygon", FeatureType::Polygon)]
	#[case(" Polygon ", FeatureType::Polygon)]
	fn parse(#[case] text: &str, #[case] expected: FeatureType) {
		assert_eq!(text.parse::<FeatureType>().unwrap(), expected);
	}

	#[rstest]
	#[case("")]
	#[case("line")]
	#[case("points")]
	fn parse_unknown(#[case] text: &str) {
		let error = text.parse::<FeatureType>().unwrap_err();
		assert!(matches!(error, EncodeError::InvalidArgument(_)));
	}

	#[test]
	fn display_round_trips() {
		for kind in [FeatureType::Point, FeatureType::Polygon] {
			assert_eq!(kind.to_string().parse::<FeatureType>().unwrap(), kind);
		}
	}

	#[test]
	fn geom_types() {
		assert_eq!(FeatureType::Point.geom_type(), GeomType::MultiPoint);
		assert_eq!(FeatureType::Polygon.geom_type(), GeomType::MultiPolygon);
	}
}
