//! Picker whose requests are resolved by hand, for host simulators and tests.

use std::sync::Arc;

use lookup_primitives::{BoxFutureStatic, PickOptions, PickedRecord};
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::{PickResult, PickerError, RecordPicker};

#[derive(Debug, Default)]
struct Requests {
	options: Vec<PickOptions>,
	pending: Vec<Option<oneshot::Sender<PickResult>>>,
}

/// Records every request and keeps it pending until [`Self::resolve`] or
/// [`Self::reject`] is called with its index (0 for the first request).
///
/// A request whose sender is dropped without resolving rejects with
/// [`PickerError::NavigatedAway`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
	requests: Arc<Mutex<Requests>>,
}

impl ScriptedPicker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of requests issued so far.
	pub fn request_count(&self) -> usize {
		self.requests.lock().options.len()
	}

	/// Options the `index`-th request was issued with.
	pub fn options(&self, index: usize) -> Option<PickOptions> {
		self.requests.lock().options.get(index).cloned()
	}

	/// Resolves a request. Returns false if it does not exist, was already
	/// resolved, or nobody is waiting on it anymore.
	pub fn resolve(&self, index: usize, result: PickResult) -> bool {
		let sender = self.requests.lock().pending.get_mut(index).and_then(Option::take);
		match sender {
			Some(sender) => sender.send(result).is_ok(),
			None => false,
		}
	}

	/// Resolves a request with a single record.
	pub fn resolve_with(&self, index: usize, id: &str, name: &str, entity_type: &str) -> bool {
		self.resolve(index, Ok(vec![PickedRecord::new(id, name, entity_type)]))
	}

	/// Resolves a request as dismissed.
	pub fn dismiss(&self, index: usize) -> bool {
		self.resolve(index, Ok(Vec::new()))
	}

	pub fn reject(&self, index: usize, error: PickerError) -> bool {
		self.resolve(index, Err(error))
	}

	/// Drops a request without resolving it, as a host does when its dialog goes away.
	pub fn abandon(&self, index: usize) -> bool {
		self.requests.lock().pending.get_mut(index).and_then(Option::take).is_some()
	}
}

impl RecordPicker for ScriptedPicker {
	fn pick(&self, options: PickOptions) -> BoxFutureStatic<PickResult> {
		let (tx, rx) = oneshot::channel();
		{
			let mut requests = self.requests.lock();
			requests.options.push(options);
			requests.pending.push(Some(tx));
		}
		Box::pin(async move { rx.await.unwrap_or(Err(PickerError::NavigatedAway)) })
	}
}
