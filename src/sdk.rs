use crate::data::FormData;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Status line shown when no editor bridge is reachable
pub const STATUS_SDK_UNAVAILABLE: &str = "Editor SDK failed to load.";
/// Status line shown when a bridge exists but the page is not embedded
/// in the editor
pub const STATUS_PREVIEW_MODE: &str = "Preview mode: SDK disabled.";

/// Failure reported by an editor bridge call
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
	#[error("editor bridge unavailable: {0}")]
	Bridge(String),
	#[error("editor rejected the call: {0}")]
	Rejected(String),
}

/// Async bridge to the hosting editor.
///
/// `get_data` is consulted once at startup; `set_data` and `set_content`
/// carry every later push. Implementations own retries and timeouts;
/// the core treats any error as a skipped push and moves on.
#[async_trait]
pub trait EditorSdk: Send + Sync {
	/// Previously persisted snapshot, or `None` for a brand-new block
	async fn get_data(&self) -> Result<Option<FormData>, SdkError>;

	/// Persist a snapshot in the editor's store
	async fn set_data(&self, data: &FormData) -> Result<(), SdkError>;

	/// Replace the block's rendered markup
	async fn set_content(&self, html: &str) -> Result<(), SdkError>;
}

/// Answers whether the page is embedded in the editor's frame
pub trait EmbeddingProbe: Send + Sync {
	fn in_frame(&self) -> bool;
}

/// Probe for hosts that cannot inspect their frame ancestry. Reporting
/// embedded keeps a reachable bridge live instead of locking it out.
pub struct AssumeEmbedded;

impl EmbeddingProbe for AssumeEmbedded {
	fn in_frame(&self) -> bool {
		true
	}
}

/// Outcome of bridge detection at startup.
///
/// Decided once during initialization and never revisited: a bridge that
/// appears later is ignored, one that disappears surfaces as failing
/// calls, which the core already tolerates.
#[derive(Clone)]
pub enum SdkHandle {
	/// No bridge was reachable; the block runs standalone
	Unavailable,
	/// A bridge exists but the page is not framed by the editor
	Preview,
	/// Full two-way connection to the editor
	Live(Arc<dyn EditorSdk>),
}

impl SdkHandle {
	/// Classify the environment from the optional bridge capability and
	/// the embedding probe.
	///
	/// The probe is only consulted when a capability exists, so probing
	/// can stay lazy or expensive without penalizing the common local
	/// development case.
	///
	/// # Examples
	///
	/// ```
	/// use blockform::{AssumeEmbedded, SdkHandle, STATUS_SDK_UNAVAILABLE};
	///
	/// let handle = SdkHandle::acquire(None, &AssumeEmbedded);
	/// assert!(!handle.is_live());
	/// assert_eq!(handle.status_message(), STATUS_SDK_UNAVAILABLE);
	/// ```
	pub fn acquire(capability: Option<Arc<dyn EditorSdk>>, probe: &dyn EmbeddingProbe) -> Self {
		match capability {
			None => SdkHandle::Unavailable,
			Some(_) if !probe.in_frame() => SdkHandle::Preview,
			Some(sdk) => SdkHandle::Live(sdk),
		}
	}

	/// Status line for this outcome; empty when live
	pub fn status_message(&self) -> &'static str {
		match self {
			SdkHandle::Unavailable => STATUS_SDK_UNAVAILABLE,
			SdkHandle::Preview => STATUS_PREVIEW_MODE,
			SdkHandle::Live(_) => "",
		}
	}

	pub fn is_live(&self) -> bool {
		matches!(self, SdkHandle::Live(_))
	}

	/// The connected bridge, when live
	pub fn live(&self) -> Option<&Arc<dyn EditorSdk>> {
		match self {
			SdkHandle::Live(sdk) => Some(sdk),
			_ => None,
		}
	}
}

impl fmt::Debug for SdkHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			SdkHandle::Unavailable => "Unavailable",
			SdkHandle::Preview => "Preview",
			SdkHandle::Live(_) => "Live",
		})
	}
}
