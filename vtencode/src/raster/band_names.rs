use std::slice::Iter;

/// Names of the raster bands, in band order. They become the property keys of every feature.
///
/// Names are not required to be unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BandNames(Vec<String>);

impl BandNames {
	pub fn new<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		BandNames(names.into_iter().map(Into::into).collect())
	}

	/// Names for bands without a description: `band1`, `band2`, ...
	#[must_use]
	pub fn default_for(count: usize) -> Self {
		BandNames((1..=count).map(|i| format!("band{i}")).collect())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&str> {
		self.0.get(index).map(String::as_str)
	}

	pub fn iter(&self) -> Iter<'_, String> {
		self.0.iter()
	}
}

impl From<Vec<String>> for BandNames {
	fn from(names: Vec<String>) -> Self {
		BandNames(names)
	}
}

impl From<Vec<&str>> for BandNames {
	fn from(names: Vec<&str>) -> Self {
		BandNames::new(names)
	}
}

impl<'a> IntoIterator for &'a BandNames {
	type Item = &'a String;
	type IntoIter = Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
