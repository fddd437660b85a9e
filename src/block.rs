//! Block lifecycle: startup merge, debounced sync and reset.
//!
//! See [`BlockCore`] for the data-flow diagram.

use crate::config::BlockConfig;
use crate::data::{FormData, ValidationErrors};
use crate::debounce::Debouncer;
use crate::sdk::{EditorSdk, EmbeddingProbe, SdkHandle};
use crate::surface::{FieldSurface, apply_errors, read_fields, write_fields};
use std::sync::Arc;

/// Wire a configured block to its surface and, when possible, the editor.
///
/// The environment is classified once: the status line is written, and
/// the surface is brought to its starting state. With a live bridge the
/// stored snapshot is fetched on a background task and merged over the
/// defaults, so fields may briefly show defaults before the merge lands;
/// anything typed in that window is overwritten. Without a bridge the
/// defaults are written synchronously and the block stays local.
///
/// Must be called from within a Tokio runtime when a capability is
/// passed; the startup read and every debounced sync are spawned on it.
pub fn init_block(
	config: BlockConfig,
	surface: Arc<dyn FieldSurface>,
	capability: Option<Arc<dyn EditorSdk>>,
	probe: &dyn EmbeddingProbe,
) -> BlockCore {
	let sdk = SdkHandle::acquire(capability, probe);
	surface.set_status(config.status_id(), sdk.status_message());
	tracing::info!(mode = ?sdk, fields = config.fields().len(), "block initialized");

	let debouncer = Debouncer::new(config.debounce());
	let core = BlockCore {
		inner: Arc::new(Inner {
			config,
			surface,
			sdk,
			debouncer,
		}),
	};
	core.start();
	core
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Handle to a wired block.
///
/// Cheap to clone; every clone drives the same block, so the handle can
/// be captured by whatever event callbacks the host uses.
///
/// # Data flow
///
/// ```mermaid
/// flowchart LR
///     subgraph Host["Host surface"]
///         Fields["Field widgets"]
///     end
///
///     subgraph Core["BlockCore"]
///         Snapshot["FormData snapshot"]
///         Hooks["validate / render hooks"]
///     end
///
///     subgraph Editor["Editor bridge"]
///         Store["block data store"]
///         Markup["rendered markup"]
///     end
///
///     Fields -->|"read"| Snapshot
///     Snapshot --> Hooks
///     Snapshot -->|"set_data (always)"| Store
///     Hooks -->|"set_content (valid only)"| Markup
///     Store -->|"get_data at startup"| Fields
/// ```
#[derive(Clone)]
pub struct BlockCore {
	inner: Arc<Inner>,
}

struct Inner {
	config: BlockConfig,
	surface: Arc<dyn FieldSurface>,
	sdk: SdkHandle,
	debouncer: Debouncer,
}

impl BlockCore {
	fn start(&self) {
		match &self.inner.sdk {
			SdkHandle::Live(sdk) => {
				let sdk = Arc::clone(sdk);
				let inner = Arc::clone(&self.inner);
				tokio::spawn(async move {
					let received = match sdk.get_data().await {
						Ok(received) => received,
						Err(e) => {
							tracing::debug!(error = %e, "stored snapshot unavailable, starting from defaults");
							None
						}
					};
					let merged = FormData::merged(
						inner.config.fields(),
						inner.config.defaults(),
						received.as_ref(),
					);
					write_fields(inner.surface.as_ref(), inner.config.fields(), &merged);
					let _ = sdk.set_data(&merged).await;
					let _ = sdk.set_content(&inner.config.render(&merged)).await;
					tracing::debug!(fields = merged.len(), "startup snapshot pushed to editor");
				});
			}
			_ => {
				write_fields(
					self.inner.surface.as_ref(),
					self.inner.config.fields(),
					self.inner.config.defaults(),
				);
			}
		}
	}

	/// Note a field edit.
	///
	/// The sync runs once the configured quiet interval has passed with
	/// no further edits; edits inside the interval restart it, so a
	/// burst of typing produces a single push.
	pub fn notify_input(&self) {
		let inner = Arc::clone(&self.inner);
		self.inner.debouncer.call(async move {
			inner.sync_to_block().await;
		});
	}

	/// Read, validate and push right now, bypassing the quiet interval.
	///
	/// The snapshot is read from the surface, the validation outcome is
	/// mirrored onto it (unless disabled), the data push happens
	/// regardless of validity, and the markup push only when the
	/// snapshot is clean. Push failures are ignored.
	pub async fn sync_to_block(&self) {
		self.inner.sync_to_block().await;
	}

	/// Restore the block to its configured defaults.
	///
	/// Field values return to their defaults (empty for fields without
	/// one), shown errors are cleared, and with a live bridge both the
	/// data and the markup are pushed without consulting validation.
	///
	/// A sync already scheduled by [`notify_input`](Self::notify_input)
	/// is not cancelled: it still runs after its quiet interval and
	/// pushes the surface as it stands then, i.e. the restored values.
	pub async fn reset(&self) {
		self.inner.reset().await;
	}

	/// Whether a debounced sync is scheduled but has not finished
	pub fn sync_pending(&self) -> bool {
		self.inner.debouncer.is_pending()
	}

	/// Outcome of bridge detection for this block
	pub fn handle(&self) -> &SdkHandle {
		&self.inner.sdk
	}

	pub fn config(&self) -> &BlockConfig {
		&self.inner.config
	}
}

impl Inner {
	async fn sync_to_block(&self) {
		let snapshot = read_fields(self.surface.as_ref(), self.config.fields());
		let errors = self.config.validate(&snapshot);
		if self.config.show_errors() {
			apply_errors(self.surface.as_ref(), self.config.fields(), &errors);
		}
		let sdk = match &self.sdk {
			SdkHandle::Live(sdk) => sdk,
			_ => return,
		};
		let _ = sdk.set_data(&snapshot).await;
		tracing::debug!(
			fields = snapshot.len(),
			valid = errors.is_empty(),
			"snapshot pushed to editor"
		);
		if !errors.is_empty() {
			return;
		}
		let _ = sdk.set_content(&self.config.render(&snapshot)).await;
	}

	async fn reset(&self) {
		let defaults = FormData::merged(self.config.fields(), self.config.defaults(), None);
		write_fields(self.surface.as_ref(), self.config.fields(), &defaults);
		if self.config.show_errors() {
			apply_errors(self.surface.as_ref(), self.config.fields(), &ValidationErrors::new());
		}
		let sdk = match &self.sdk {
			SdkHandle::Live(sdk) => sdk,
			_ => return,
		};
		tracing::debug!("block reset pushed to editor");
		let _ = sdk.set_data(&defaults).await;
		let _ = sdk.set_content(&self.config.render(&defaults)).await;
	}
}
