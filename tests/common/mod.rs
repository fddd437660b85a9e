//! Shared doubles for driving a block without a document or an editor

#![allow(dead_code)]

use async_trait::async_trait;
use blockform::{
	BlockConfig, BlockCore, EditorSdk, EmbeddingProbe, FieldSurface, FormData, SdkError,
	ValidationErrors, escape_html, init_block, is_valid_http_url,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory stand-in for the host document.
///
/// Only identifiers registered at construction exist; everything else
/// behaves like a missing element.
pub struct MemorySurface {
	known: Vec<String>,
	values: Mutex<HashMap<String, String>>,
	errors: Mutex<HashMap<String, String>>,
	status: Mutex<HashMap<String, String>>,
}

impl MemorySurface {
	pub fn new(known: &[&str]) -> Arc<Self> {
		Arc::new(Self {
			known: known.iter().map(|id| id.to_string()).collect(),
			values: Mutex::new(HashMap::new()),
			errors: Mutex::new(HashMap::new()),
			status: Mutex::new(HashMap::new()),
		})
	}

	fn knows(&self, id: &str) -> bool {
		self.known.iter().any(|key| key == id)
	}

	/// Simulate the user typing into a field
	pub fn type_into(&self, id: &str, value: &str) {
		assert!(self.knows(id), "typing into unregistered field {id}");
		self.values
			.lock()
			.unwrap()
			.insert(id.to_string(), value.to_string());
	}

	pub fn value_of(&self, id: &str) -> Option<String> {
		self.value(id)
	}

	pub fn error_of(&self, id: &str) -> Option<String> {
		self.errors.lock().unwrap().get(id).cloned()
	}

	pub fn status_of(&self, id: &str) -> Option<String> {
		self.status.lock().unwrap().get(id).cloned()
	}
}

impl FieldSurface for MemorySurface {
	fn value(&self, id: &str) -> Option<String> {
		if !self.knows(id) {
			return None;
		}
		Some(self.values.lock().unwrap().get(id).cloned().unwrap_or_default())
	}

	fn set_value(&self, id: &str, value: &str) {
		if self.knows(id) {
			self.values
				.lock()
				.unwrap()
				.insert(id.to_string(), value.to_string());
		}
	}

	fn set_error(&self, id: &str, message: Option<&str>) {
		if !self.knows(id) {
			return;
		}
		let mut errors = self.errors.lock().unwrap();
		match message {
			Some(message) => errors.insert(id.to_string(), message.to_string()),
			None => errors.remove(id),
		};
	}

	fn set_status(&self, id: &str, text: &str) {
		if self.knows(id) {
			self.status
				.lock()
				.unwrap()
				.insert(id.to_string(), text.to_string());
		}
	}
}

/// Operation observed by the recording bridge, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkOp {
	SetData(FormData),
	SetContent(String),
}

/// Editor bridge double: serves a configurable stored snapshot and
/// records every push.
pub struct RecordingSdk {
	stored: Mutex<Option<FormData>>,
	ops: Mutex<Vec<SdkOp>>,
	get_calls: AtomicUsize,
	get_delay: Option<Duration>,
	fail_get: bool,
	fail_pushes: bool,
}

impl RecordingSdk {
	pub fn new() -> Self {
		Self {
			stored: Mutex::new(None),
			ops: Mutex::new(Vec::new()),
			get_calls: AtomicUsize::new(0),
			get_delay: None,
			fail_get: false,
			fail_pushes: false,
		}
	}

	/// Serve `data` as the previously persisted snapshot
	pub fn with_stored(self, data: FormData) -> Self {
		*self.stored.lock().unwrap() = Some(data);
		self
	}

	/// Delay the startup read, leaving a window for interleaved edits
	pub fn with_get_delay(mut self, delay: Duration) -> Self {
		self.get_delay = Some(delay);
		self
	}

	/// Make the startup read fail
	pub fn failing_get(mut self) -> Self {
		self.fail_get = true;
		self
	}

	/// Make every push fail
	pub fn failing_pushes(mut self) -> Self {
		self.fail_pushes = true;
		self
	}

	pub fn ops(&self) -> Vec<SdkOp> {
		self.ops.lock().unwrap().clone()
	}

	/// Return the recorded operations and clear the log
	pub fn take_ops(&self) -> Vec<SdkOp> {
		std::mem::take(&mut *self.ops.lock().unwrap())
	}

	pub fn data_pushes(&self) -> Vec<FormData> {
		self.ops()
			.into_iter()
			.filter_map(|op| match op {
				SdkOp::SetData(data) => Some(data),
				SdkOp::SetContent(_) => None,
			})
			.collect()
	}

	pub fn content_pushes(&self) -> Vec<String> {
		self.ops()
			.into_iter()
			.filter_map(|op| match op {
				SdkOp::SetContent(html) => Some(html),
				SdkOp::SetData(_) => None,
			})
			.collect()
	}

	pub fn get_calls(&self) -> usize {
		self.get_calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl EditorSdk for RecordingSdk {
	async fn get_data(&self) -> Result<Option<FormData>, SdkError> {
		self.get_calls.fetch_add(1, Ordering::SeqCst);
		if let Some(delay) = self.get_delay {
			tokio::time::sleep(delay).await;
		}
		if self.fail_get {
			return Err(SdkError::Bridge("stored snapshot unreachable".to_string()));
		}
		Ok(self.stored.lock().unwrap().clone())
	}

	async fn set_data(&self, data: &FormData) -> Result<(), SdkError> {
		if self.fail_pushes {
			return Err(SdkError::Rejected("data push refused".to_string()));
		}
		*self.stored.lock().unwrap() = Some(data.clone());
		self.ops.lock().unwrap().push(SdkOp::SetData(data.clone()));
		Ok(())
	}

	async fn set_content(&self, html: &str) -> Result<(), SdkError> {
		if self.fail_pushes {
			return Err(SdkError::Rejected("markup push refused".to_string()));
		}
		self.ops
			.lock()
			.unwrap()
			.push(SdkOp::SetContent(html.to_string()));
		Ok(())
	}
}

/// Probe with a fixed answer
pub struct FixedProbe(pub bool);

impl EmbeddingProbe for FixedProbe {
	fn in_frame(&self) -> bool {
		self.0
	}
}

/// Two-field demo block: an escaped heading and a validated link
pub fn demo_config() -> BlockConfig {
	BlockConfig::new(
		vec!["heading".to_string(), "link".to_string()],
		FormData::from([("heading", "Hello"), ("link", "https://example.com")]),
		|data| {
			format!(
				"<h1>{}</h1><a href=\"{}\">more</a>",
				escape_html(data.get("heading").unwrap_or("")),
				escape_html(data.get("link").unwrap_or("")),
			)
		},
	)
	.with_validate(|data| {
		let mut errors = ValidationErrors::new();
		if !is_valid_http_url(data.get("link").unwrap_or("")) {
			errors.insert("link", "Enter a valid http(s) URL");
		}
		errors
	})
}

/// Surface matching [`demo_config`]: both fields plus the status line
pub fn demo_surface() -> Arc<MemorySurface> {
	MemorySurface::new(&["heading", "link", "sdkStatus"])
}

/// Wire a block against the doubles, hiding the trait-object casts
pub fn wired(
	config: BlockConfig,
	surface: &Arc<MemorySurface>,
	sdk: Option<&Arc<RecordingSdk>>,
	in_frame: bool,
) -> BlockCore {
	init_block(
		config,
		Arc::clone(surface) as Arc<dyn FieldSurface>,
		sdk.map(|sdk| Arc::clone(sdk) as Arc<dyn EditorSdk>),
		&FixedProbe(in_frame),
	)
}
