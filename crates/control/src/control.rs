//! Host lifecycle adapter.

use lookup_primitives::{BindingSnapshot, ColorToken, LookupOutput, PickScope};

use crate::{Collaborators, LookupConfig, PickOutcome, PickTicket, SyncController};

/// A lookup field as the host sees it: initialize, refresh, pull, tear down.
///
/// User actions are forwarded to the [`SyncController`]. After [`Self::teardown`]
/// every entry point is a no-op and [`Self::pull_output`] keeps answering with
/// the last output.
pub struct LookupControl {
	controller: Option<SyncController>,
	final_output: LookupOutput,
}

impl LookupControl {
	pub fn initialize(
		entity_kind: impl Into<String>,
		view_id: impl Into<String>,
		color: impl Into<ColorToken>,
		collaborators: Collaborators,
		config: LookupConfig,
	) -> Self {
		let scope = PickScope::new(entity_kind, view_id);
		tracing::debug!(entity_kind = %scope.entity_kind, view_id = %scope.view_id, ?config, "lookup.initialize");
		Self {
			controller: Some(SyncController::new(scope, color.into(), collaborators, config)),
			final_output: LookupOutput::default(),
		}
	}

	pub fn refresh(&mut self, snapshot: BindingSnapshot) {
		if let Some(controller) = self.live() {
			controller.on_host_refresh(snapshot);
		}
	}

	/// Refresh from a raw host payload; see [`BindingSnapshot::from_json`].
	pub fn refresh_json(&mut self, payload: &str) {
		self.refresh(BindingSnapshot::from_json(payload));
	}

	pub fn pull_output(&self) -> LookupOutput {
		match &self.controller {
			Some(controller) => controller.read_output(),
			None => self.final_output.clone(),
		}
	}

	/// Pick button pressed.
	pub fn pick(&mut self) -> Option<PickTicket> {
		self.live()?.on_user_requests_pick()
	}

	/// Clear button pressed.
	pub fn clear(&mut self) {
		if let Some(controller) = self.live() {
			controller.on_user_requests_clear();
		}
	}

	/// Host event tick: applies picks that resolved since the last tick.
	pub fn tick(&mut self) -> Vec<PickOutcome> {
		self.live().map(SyncController::pump).unwrap_or_default()
	}

	/// Waits for the next in-flight pick and applies it.
	pub async fn settle_next(&mut self) -> Option<PickOutcome> {
		self.live()?.next_completion().await
	}

	pub fn controller(&self) -> Option<&SyncController> {
		self.controller.as_ref()
	}

	pub fn is_torn_down(&self) -> bool {
		self.controller.is_none()
	}

	/// Releases the controller and stops waiting on in-flight picks. Idempotent.
	pub fn teardown(&mut self) {
		let Some(mut controller) = self.controller.take() else {
			return;
		};
		controller.shutdown();
		self.final_output = controller.read_output();
		tracing::debug!(pending = controller.pending_picks(), "lookup.teardown");
	}

	fn live(&mut self) -> Option<&mut SyncController> {
		if self.controller.is_none() {
			tracing::debug!("lookup.ignored_after_teardown");
		}
		self.controller.as_mut()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use lookup_primitives::EntityReference;
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::scripted::ScriptedPicker;

	fn control(picker: ScriptedPicker, notified: Arc<AtomicUsize>) -> LookupControl {
		let collaborators = Collaborators::new(picker, move || {
			notified.fetch_add(1, Ordering::SeqCst);
		});
		LookupControl::initialize("account", "view-1", "rgb(0, 0, 0)", collaborators, LookupConfig::default())
	}

	#[tokio::test]
	async fn lifecycle_round_trip() {
		let picker = ScriptedPicker::new();
		let notified = Arc::new(AtomicUsize::new(0));
		let mut control = control(picker.clone(), notified.clone());

		control.refresh_json(r#"{"controlValue":[{"id":"42","name":"Acme Corp","entityType":"account"}]}"#);
		assert_eq!(control.pull_output().first().map(EntityReference::id), Some("42"));

		control.pick().unwrap();
		picker.resolve_with(0, "7", "Beta LLC", "account");
		assert!(matches!(control.settle_next().await, Some(PickOutcome::Selected(_))));
		assert_eq!(control.pull_output().first().map(EntityReference::id), Some("7"));
		assert_eq!(notified.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn teardown_freezes_output_and_ignores_late_picks() {
		let picker = ScriptedPicker::new();
		let notified = Arc::new(AtomicUsize::new(0));
		let mut control = control(picker.clone(), notified.clone());

		control.refresh(BindingSnapshot::selected(&EntityReference::new("42", "Acme Corp", "account").unwrap(), ""));
		control.pick().unwrap();
		control.teardown();
		control.teardown();
		assert!(control.is_torn_down());

		picker.resolve_with(0, "7", "Beta LLC", "account");
		assert!(control.tick().is_empty());
		assert!(control.pick().is_none());
		control.clear();

		assert_eq!(control.pull_output().first().map(EntityReference::id), Some("42"));
		assert_eq!(notified.load(Ordering::SeqCst), 0);
	}
}
