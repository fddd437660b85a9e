use crate::data::{FormData, ValidationErrors};
use std::time::Duration;

/// Renders the editor-facing HTML for a snapshot
pub type RenderFn = Box<dyn Fn(&FormData) -> String + Send + Sync>;
/// Validates a snapshot; fields absent from the result are valid
pub type ValidateFn = Box<dyn Fn(&FormData) -> ValidationErrors + Send + Sync>;

/// Quiet interval between the last input and the push to the editor
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);
/// Surface element that displays the SDK status line
pub const DEFAULT_STATUS_ID: &str = "sdkStatus";
/// Host control wired to the reset operation
pub const DEFAULT_RESET_ID: &str = "resetBtn";

/// Static description of one block: which fields exist, what they start
/// as, and how a snapshot becomes markup.
///
/// Construction never fails; a degenerate configuration (no fields, a
/// render hook returning the empty string) produces a block that does
/// nothing, not an error.
pub struct BlockConfig {
	fields: Vec<String>,
	defaults: FormData,
	render: RenderFn,
	validate: ValidateFn,
	debounce: Duration,
	status_id: String,
	reset_id: String,
	show_errors: bool,
}

impl BlockConfig {
	/// Create a configuration with the field set, default values and
	/// render hook. Everything else starts from defaults and can be
	/// overridden with the `with_*` methods.
	///
	/// Field identifiers are expected to be unique. Defaults for fields
	/// outside the set are ignored during merging.
	///
	/// # Examples
	///
	/// ```
	/// use blockform::{BlockConfig, FormData};
	/// use std::time::Duration;
	///
	/// let config = BlockConfig::new(
	///     vec!["title".to_string()],
	///     FormData::from([("title", "Hello")]),
	///     |data| format!("<h1>{}</h1>", data.get("title").unwrap_or("")),
	/// );
	///
	/// assert_eq!(config.debounce(), Duration::from_millis(250));
	/// assert_eq!(config.status_id(), "sdkStatus");
	/// assert_eq!(config.reset_id(), "resetBtn");
	/// assert!(config.show_errors());
	/// ```
	pub fn new(
		fields: Vec<String>,
		defaults: FormData,
		render: impl Fn(&FormData) -> String + Send + Sync + 'static,
	) -> Self {
		Self {
			fields,
			defaults,
			render: Box::new(render),
			validate: Box::new(|_| ValidationErrors::new()),
			debounce: DEFAULT_DEBOUNCE,
			status_id: DEFAULT_STATUS_ID.to_string(),
			reset_id: DEFAULT_RESET_ID.to_string(),
			show_errors: true,
		}
	}

	/// Install a validation hook
	///
	/// # Examples
	///
	/// ```
	/// use blockform::{BlockConfig, FormData, ValidationErrors, is_valid_http_url};
	///
	/// let config = BlockConfig::new(
	///     vec!["link".to_string()],
	///     FormData::new(),
	///     |_| String::new(),
	/// )
	/// .with_validate(|data| {
	///     let mut errors = ValidationErrors::new();
	///     if !is_valid_http_url(data.get("link").unwrap_or("")) {
	///         errors.insert("link", "Enter a valid URL");
	///     }
	///     errors
	/// });
	///
	/// let errors = config.validate(&FormData::from([("link", "nope")]));
	/// assert_eq!(errors.message("link"), Some("Enter a valid URL"));
	/// ```
	pub fn with_validate(
		mut self,
		validate: impl Fn(&FormData) -> ValidationErrors + Send + Sync + 'static,
	) -> Self {
		self.validate = Box::new(validate);
		self
	}

	/// Override the quiet interval used for debounced pushes
	pub fn with_debounce(mut self, debounce: Duration) -> Self {
		self.debounce = debounce;
		self
	}

	/// Override the identifier of the status line element
	pub fn with_status_id(mut self, status_id: impl Into<String>) -> Self {
		self.status_id = status_id.into();
		self
	}

	/// Override the identifier of the reset control
	pub fn with_reset_id(mut self, reset_id: impl Into<String>) -> Self {
		self.reset_id = reset_id.into();
		self
	}

	/// Control whether validation failures are written back to the
	/// surface. Validation still runs and still gates the markup push
	/// when this is off.
	pub fn with_show_errors(mut self, show_errors: bool) -> Self {
		self.show_errors = show_errors;
		self
	}

	pub fn fields(&self) -> &[String] {
		&self.fields
	}

	pub fn defaults(&self) -> &FormData {
		&self.defaults
	}

	pub fn debounce(&self) -> Duration {
		self.debounce
	}

	pub fn status_id(&self) -> &str {
		&self.status_id
	}

	pub fn reset_id(&self) -> &str {
		&self.reset_id
	}

	pub fn show_errors(&self) -> bool {
		self.show_errors
	}

	/// Produce the editor markup for a snapshot
	pub fn render(&self, data: &FormData) -> String {
		(self.render)(data)
	}

	/// Run the validation hook against a snapshot
	pub fn validate(&self, data: &FormData) -> ValidationErrors {
		(self.validate)(data)
	}
}
