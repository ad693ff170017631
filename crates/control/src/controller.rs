//! Reconciles host refreshes with user-initiated picks and clears.
//!
//! All entry points run on the host's dispatch thread. The only suspension point
//! is the picker: [`SyncController::on_user_requests_pick`] issues the request,
//! parks the pending future in a join set and returns. Resolved picks are applied
//! later by [`SyncController::pump`] (from the host's event tick) or
//! [`SyncController::next_completion`], strictly in resolution order.
//!
//! Whether a slow pick may overwrite newer state depends on [`PickOrdering`]:
//! under [`PickOrdering::LatestRequestWins`] each pick carries a generation, and
//! completions of picks issued before the latest pick are dropped. Clears and
//! host refreshes never supersede a pick.

use lookup_primitives::{BindingSnapshot, ColorToken, EntityReference, LookupOutput, PickScope, PickedRecord, SelectionState};
use tokio::task::JoinError;

use crate::generation::GenerationClock;
use crate::join_set::PickJoinSet;
use crate::{
	Collaborators, Diagnostics, EmptyPick, LookupConfig, LookupView, OutputNotifier, PickDiagnostic, PickError, PickOrdering, PickResult,
	RecordPicker, SelectionStore, ViewModel,
};

/// Handle for one issued pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickTicket {
	generation: u64,
}

impl PickTicket {
	pub const fn generation(&self) -> u64 {
		self.generation
	}
}

/// A resolved picker request, tagged with the generation it was issued under.
#[derive(Debug)]
pub struct PickCompletion {
	pub generation: u64,
	pub result: PickResult,
}

/// What applying one pick completion did to the selection.
#[derive(Debug)]
pub enum PickOutcome {
	/// The picked record is now selected.
	Selected(EntityReference),
	/// The picker resolved empty and the selection was reset.
	Cleared,
	/// The picker resolved empty and the selection was kept.
	Unchanged,
	/// A later pick superseded this one.
	Discarded,
	/// Nothing changed; the failure went to diagnostics.
	Failed(PickError),
}

/// Owner of one lookup's selection and the only writer to it.
pub struct SyncController {
	store: SelectionStore,
	config: LookupConfig,
	color: ColorToken,
	clock: GenerationClock,
	/// Generation of the most recently issued pick.
	latest_request: u64,
	picks: PickJoinSet,
	picker: Box<dyn RecordPicker>,
	notifier: Box<dyn OutputNotifier>,
	diagnostics: Box<dyn Diagnostics>,
	view: Box<dyn LookupView>,
}

impl SyncController {
	/// Creates a controller in the empty state and renders it once.
	pub fn new(scope: PickScope, color: ColorToken, collaborators: Collaborators, config: LookupConfig) -> Self {
		let Collaborators {
			picker,
			notifier,
			diagnostics,
			view,
		} = collaborators;
		let mut controller = Self {
			store: SelectionStore::new(scope),
			config,
			color,
			clock: GenerationClock::default(),
			latest_request: 0,
			picks: PickJoinSet::default(),
			picker,
			notifier,
			diagnostics,
			view,
		};
		controller.render();
		controller
	}

	/// Host refresh: the snapshot is authoritative and overwrites the selection.
	///
	/// Malformed or absent references become [`SelectionState::Empty`]. Never
	/// notifies and never touches in-flight picks.
	pub fn on_host_refresh(&mut self, snapshot: BindingSnapshot) {
		let state = snapshot.selection();
		tracing::trace!(
			id = state.reference().map(EntityReference::id),
			pending = self.picks.len(),
			"lookup.refresh"
		);
		self.store.set(state);
		self.color = snapshot.color;
		self.render();
	}

	/// Issues a pick scoped to the bound entity kind and view.
	///
	/// Returns `None` when the pick could not be started; the reason goes to
	/// diagnostics. Each call is independent: several picks may be in flight.
	pub fn on_user_requests_pick(&mut self) -> Option<PickTicket> {
		let handle = match PickJoinSet::handle() {
			Ok(handle) => handle,
			Err(error) => {
				self.report(None, error);
				return None;
			}
		};

		let generation = self.clock.next();
		self.latest_request = generation;
		let options = self.store.scope().options();
		tracing::debug!(generation, entity_kind = %options.default_entity_kind, "lookup.pick.start");

		let pending = self.picker.pick(options);
		self.picks.spawn(&handle, generation, async move {
			PickCompletion {
				generation,
				result: pending.await,
			}
		});
		Some(PickTicket { generation })
	}

	/// Resets the selection, renders and notifies. In-flight picks are left
	/// alone: whichever resolves later still applies.
	pub fn on_user_requests_clear(&mut self) {
		tracing::debug!(pending = self.picks.len(), "lookup.clear");
		self.store.clear();
		self.render();
		self.notifier.notify_output_changed();
	}

	/// Output for the host's pull accessor. Reflects the latest applied mutation.
	pub fn read_output(&self) -> LookupOutput {
		LookupOutput::from(self.store.get())
	}

	pub fn selection(&self) -> &SelectionState {
		self.store.get()
	}

	pub fn color(&self) -> &ColorToken {
		&self.color
	}

	pub fn config(&self) -> &LookupConfig {
		&self.config
	}

	/// Number of picks issued but not yet applied.
	pub fn pending_picks(&self) -> usize {
		self.picks.len()
	}

	/// Applies every pick that has already resolved, without waiting.
	pub fn pump(&mut self) -> Vec<PickOutcome> {
		let mut outcomes = Vec::new();
		while let Some(joined) = self.picks.try_join_next() {
			outcomes.push(self.settle(joined));
		}
		outcomes
	}

	/// Waits for the next pick to resolve and applies it. `None` when nothing is in flight.
	pub async fn next_completion(&mut self) -> Option<PickOutcome> {
		let joined = self.picks.join_next().await?;
		Some(self.settle(joined))
	}

	/// Applies one resolved pick according to the configured policies.
	pub fn apply_completion(&mut self, completion: PickCompletion) -> PickOutcome {
		let PickCompletion { generation, result } = completion;
		let records = match result {
			Ok(records) => records,
			Err(error) => return self.report(Some(generation), error.into()),
		};

		if self.is_superseded(generation) {
			tracing::debug!(generation, latest = self.latest_request, "lookup.pick.superseded");
			return PickOutcome::Discarded;
		}

		let mut records = records.into_iter();
		let Some(record) = records.next() else {
			return self.apply_empty_pick(generation);
		};
		let extra = records.count();
		if extra > 0 {
			tracing::warn!(generation, extra, "lookup.pick.extra_records_ignored");
		}
		self.apply_record(generation, record)
	}

	/// Stops waiting on every in-flight pick. The host's picker dialogs stay open;
	/// whatever they resolve with is never applied.
	pub fn shutdown(&mut self) {
		let pending = self.picks.len();
		if pending > 0 {
			tracing::debug!(pending, "lookup.shutdown.abort_picks");
		}
		self.picks.abort_all();
	}

	fn settle(&mut self, joined: Result<PickCompletion, JoinError>) -> PickOutcome {
		match joined {
			Ok(completion) => self.apply_completion(completion),
			Err(error) => self.report(None, PickError::TaskAborted(error.to_string())),
		}
	}

	fn is_superseded(&self, generation: u64) -> bool {
		self.config.ordering == PickOrdering::LatestRequestWins && generation < self.latest_request
	}

	fn apply_record(&mut self, generation: u64, record: PickedRecord) -> PickOutcome {
		let reference = match EntityReference::try_from(record) {
			Ok(reference) => reference,
			Err(error) => return self.report(Some(generation), error.into()),
		};
		tracing::debug!(generation, id = reference.id(), entity_kind = reference.entity_kind(), "lookup.pick.selected");
		self.store.set(SelectionState::Selected(reference.clone()));
		self.render();
		self.notifier.notify_output_changed();
		PickOutcome::Selected(reference)
	}

	fn apply_empty_pick(&mut self, generation: u64) -> PickOutcome {
		match self.config.empty_pick {
			EmptyPick::Clear => {
				tracing::debug!(generation, "lookup.pick.empty_cleared");
				self.store.clear();
				self.render();
				self.notifier.notify_output_changed();
				PickOutcome::Cleared
			}
			EmptyPick::Keep => {
				tracing::debug!(generation, "lookup.pick.empty_kept");
				PickOutcome::Unchanged
			}
		}
	}

	fn report(&self, generation: Option<u64>, error: PickError) -> PickOutcome {
		self.diagnostics.report(&PickDiagnostic {
			generation,
			entity_kind: self.store.scope().entity_kind.clone(),
			error: error.clone(),
		});
		PickOutcome::Failed(error)
	}

	fn render(&mut self) {
		let view = ViewModel::new(self.store.get(), &self.color);
		self.view.render(&view);
	}
}

impl Drop for SyncController {
	fn drop(&mut self) {
		self.shutdown();
	}
}
