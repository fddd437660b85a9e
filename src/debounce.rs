//! Trailing-edge debouncing on top of the Tokio runtime

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Collapses bursts of triggers into a single deferred execution.
///
/// Every call schedules its task to run after the quiet interval and
/// aborts whatever was pending before, so during a burst only the last
/// scheduled task survives, and it runs one interval after the burst
/// stops. Timing always restarts from the most recent call.
///
/// # Examples
///
/// ```
/// use blockform::Debouncer;
/// use std::time::Duration;
///
/// tokio_test::block_on(async {
///     let debouncer = Debouncer::new(Duration::from_millis(10));
///     debouncer.call(async { /* deferred work */ });
///     debouncer.call(async { /* replaces the first task */ });
///     assert!(debouncer.is_pending());
/// });
/// ```
pub struct Debouncer {
	delay: Duration,
	pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: Mutex::new(None),
		}
	}

	/// Schedule `task` to run after the quiet interval, aborting any
	/// previously scheduled task.
	///
	/// Must be called from within a Tokio runtime.
	pub fn call<F>(&self, task: F)
	where
		F: Future<Output = ()> + Send + 'static,
	{
		let delay = self.delay;
		let mut pending = self.pending.lock().unwrap();
		if let Some(previous) = pending.take() {
			previous.abort();
		}
		*pending = Some(tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			task.await;
		}));
	}

	/// Abort the pending task, if any
	pub fn cancel(&self) {
		if let Some(pending) = self.pending.lock().unwrap().take() {
			pending.abort();
		}
	}

	/// Whether a scheduled task has not finished yet
	pub fn is_pending(&self) -> bool {
		self.pending
			.lock()
			.unwrap()
			.as_ref()
			.is_some_and(|handle| !handle.is_finished())
	}
}
