//! Two-way binding between a form surface and an embedded editor block
//!
//! This crate keeps a set of form fields and an editor-hosted content
//! block in sync without owning either side:
//! - Startup classification of the editor bridge (unavailable, preview,
//!   live) with a status line for each outcome
//! - Merge of stored block data over configured defaults when a live
//!   bridge is present
//! - Debounced field-to-editor sync that always pushes data and only
//!   pushes rendered markup for valid snapshots
//! - Reset to defaults that bypasses validation
//! - HTML escaping and http(s) URL validation for render and validate
//!   hooks
//!
//! The host supplies the actual widgets behind [`FieldSurface`] and the
//! actual editor behind [`EditorSdk`]; everything in between is handled
//! here.

pub mod block;
pub mod config;
pub mod data;
pub mod debounce;
pub mod html;
pub mod sdk;
pub mod surface;
pub mod urls;

pub use block::{BlockCore, init_block};
pub use config::{
	BlockConfig, DEFAULT_DEBOUNCE, DEFAULT_RESET_ID, DEFAULT_STATUS_ID, RenderFn, ValidateFn,
};
pub use data::{FormData, ValidationErrors};
pub use debounce::Debouncer;
pub use html::escape_html;
pub use sdk::{
	AssumeEmbedded, EditorSdk, EmbeddingProbe, STATUS_PREVIEW_MODE, STATUS_SDK_UNAVAILABLE,
	SdkError, SdkHandle,
};
pub use surface::FieldSurface;
pub use urls::is_valid_http_url;
