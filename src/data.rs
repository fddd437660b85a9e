use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flat snapshot of form state: field identifier mapped to its current
/// string value.
///
/// Values are kept exactly as entered. No trimming, escaping or type
/// coercion happens here; rendering decides how values are encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(HashMap<String, String>);

impl FormData {
	/// Create an empty snapshot
	///
	/// # Examples
	///
	/// ```
	/// use blockform::FormData;
	///
	/// let data = FormData::new();
	/// assert!(data.is_empty());
	/// ```
	pub fn new() -> Self {
		Self(HashMap::new())
	}

	/// Build the startup snapshot: defaults overlaid with whatever the
	/// editor returned, restricted to the configured field identifiers.
	///
	/// Per field, a received value wins over the default, and a field
	/// known to neither side becomes the empty string. Keys outside
	/// `fields` are dropped so the result always covers exactly the
	/// configured field set.
	///
	/// # Examples
	///
	/// ```
	/// use blockform::FormData;
	///
	/// let fields = ["title".to_string(), "url".to_string()];
	/// let defaults = FormData::from([("title", "Hello"), ("url", "")]);
	/// let received = FormData::from([("title", "Stored"), ("legacy", "x")]);
	///
	/// let merged = FormData::merged(&fields, &defaults, Some(&received));
	/// assert_eq!(merged.get("title"), Some("Stored"));
	/// assert_eq!(merged.get("url"), Some(""));
	/// assert_eq!(merged.get("legacy"), None);
	/// ```
	pub fn merged(fields: &[String], defaults: &FormData, received: Option<&FormData>) -> Self {
		let mut merged = HashMap::with_capacity(fields.len());
		for field in fields {
			let value = received
				.and_then(|data| data.get(field))
				.or_else(|| defaults.get(field))
				.unwrap_or("");
			merged.insert(field.clone(), value.to_string());
		}
		Self(merged)
	}

	/// Store a value for a field, replacing any previous value
	pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
		self.0.insert(field.into(), value.into());
	}

	/// Current value for a field, if present
	pub fn get(&self, field: &str) -> Option<&str> {
		self.0.get(field).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<(String, String)> for FormData {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<const N: usize> From<[(&str, &str); N]> for FormData {
	fn from(entries: [(&str, &str); N]) -> Self {
		entries
			.into_iter()
			.map(|(field, value)| (field.to_string(), value.to_string()))
			.collect()
	}
}

/// Validation outcome keyed by field identifier.
///
/// A field present in the map failed validation with the stored message.
/// A field absent from the map is valid. The empty map means the whole
/// snapshot passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(HashMap<String, String>);

impl ValidationErrors {
	/// Create an empty (all fields valid) outcome
	///
	/// # Examples
	///
	/// ```
	/// use blockform::ValidationErrors;
	///
	/// let errors = ValidationErrors::new();
	/// assert!(errors.is_empty());
	/// ```
	pub fn new() -> Self {
		Self(HashMap::new())
	}

	/// Record a validation failure for a field.
	///
	/// An empty message is ignored: presence in the map is what marks a
	/// field invalid, so a message-less entry would be contradictory.
	///
	/// # Examples
	///
	/// ```
	/// use blockform::ValidationErrors;
	///
	/// let mut errors = ValidationErrors::new();
	/// errors.insert("url", "Enter a valid URL");
	/// errors.insert("title", "");
	///
	/// assert_eq!(errors.message("url"), Some("Enter a valid URL"));
	/// assert_eq!(errors.message("title"), None);
	/// assert_eq!(errors.len(), 1);
	/// ```
	pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
		let message = message.into();
		if message.is_empty() {
			return;
		}
		self.0.insert(field.into(), message);
	}

	/// Failure message for a field, or `None` when the field is valid
	pub fn message(&self, field: &str) -> Option<&str> {
		self.0.get(field).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
