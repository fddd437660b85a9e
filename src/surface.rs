use crate::data::{FormData, ValidationErrors};

/// Host-side form surface the core reads from and writes to.
///
/// Implementations wrap whatever actually holds the widgets: a document,
/// a native view tree, or a test double. Identifiers the surface does
/// not know must be ignored without error, mirroring a document where
/// the element is simply missing.
pub trait FieldSurface: Send + Sync {
	/// Current value of a field, or `None` when no such element exists
	fn value(&self, id: &str) -> Option<String>;

	/// Overwrite the value of a field
	fn set_value(&self, id: &str, value: &str);

	/// Show (`Some`) or clear (`None`) the validation message of a field
	fn set_error(&self, id: &str, message: Option<&str>);

	/// Replace the status line text
	fn set_status(&self, id: &str, text: &str);
}

/// Snapshot every configured field; a missing element reads as empty.
pub(crate) fn read_fields(surface: &dyn FieldSurface, fields: &[String]) -> FormData {
	let mut data = FormData::new();
	for field in fields {
		data.insert(field.clone(), surface.value(field).unwrap_or_default());
	}
	data
}

/// Write snapshot values onto the surface. Fields the snapshot does not
/// cover are cleared rather than left stale.
pub(crate) fn write_fields(surface: &dyn FieldSurface, fields: &[String], data: &FormData) {
	for field in fields {
		surface.set_value(field, data.get(field).unwrap_or(""));
	}
}

/// Mirror a validation outcome onto the surface: failed fields show
/// their message, valid fields get any previous message cleared.
pub(crate) fn apply_errors(
	surface: &dyn FieldSurface,
	fields: &[String],
	errors: &ValidationErrors,
) {
	for field in fields {
		surface.set_error(field, errors.message(field));
	}
}
