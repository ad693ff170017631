use std::future::Future;

use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinSet};

use crate::PickError;
use crate::controller::PickCompletion;

/// In-flight picks, yielded in the order they resolve.
///
/// Dropping the set aborts every task still waiting on a picker.
#[derive(Debug, Default)]
pub(crate) struct PickJoinSet {
	inner: JoinSet<PickCompletion>,
}

impl PickJoinSet {
	/// Returns the number of picks still in flight.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Runtime picks will be awaited on, if the caller is inside one.
	pub fn handle() -> Result<Handle, PickError> {
		Handle::try_current().map_err(|_| PickError::NoRuntime)
	}

	/// Spawns a pick onto `handle`.
	pub fn spawn<F>(&mut self, handle: &Handle, generation: u64, fut: F)
	where
		F: Future<Output = PickCompletion> + Send + 'static,
	{
		tracing::trace!(generation, pending = self.inner.len(), "lookup.join_set.spawn");
		self.inner.spawn_on(fut, handle);
	}

	/// Waits for the next resolved pick.
	pub async fn join_next(&mut self) -> Option<Result<PickCompletion, JoinError>> {
		self.inner.join_next().await
	}

	/// Returns one resolved pick without waiting.
	pub fn try_join_next(&mut self) -> Option<Result<PickCompletion, JoinError>> {
		self.inner.try_join_next()
	}

	/// Aborts every in-flight pick.
	pub fn abort_all(&mut self) {
		self.inner.abort_all();
	}
}
