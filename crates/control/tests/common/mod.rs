//! Recording collaborators shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use lookup_control::primitives::{BindingSnapshot, EntityReference};
use lookup_control::scripted::ScriptedPicker;
use lookup_control::{Collaborators, LookupConfig, LookupView, PickDiagnostic, PickOutcome, SyncController, ViewModel};
use parking_lot::Mutex;

/// Everything the controller told the outside world, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	Render(ViewModel),
	Notify,
	Diagnostic { generation: Option<u64>, error: String },
}

#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<Event>>>);

impl EventLog {
	pub fn push(&self, event: Event) {
		self.0.lock().push(event);
	}

	pub fn events(&self) -> Vec<Event> {
		self.0.lock().clone()
	}

	pub fn notifications(&self) -> usize {
		self.0.lock().iter().filter(|event| matches!(event, Event::Notify)).count()
	}

	pub fn diagnostics(&self) -> usize {
		self.0.lock().iter().filter(|event| matches!(event, Event::Diagnostic { .. })).count()
	}

	pub fn last_render(&self) -> Option<ViewModel> {
		self.0.lock().iter().rev().find_map(|event| match event {
			Event::Render(view) => Some(view.clone()),
			_ => None,
		})
	}

	pub fn clear(&self) {
		self.0.lock().clear();
	}
}

struct RecordingView(EventLog);

impl LookupView for RecordingView {
	fn render(&mut self, view: &ViewModel) {
		self.0.push(Event::Render(view.clone()));
	}
}

pub struct Fixture {
	pub controller: SyncController,
	pub picker: ScriptedPicker,
	pub log: EventLog,
}

pub fn fixture(config: LookupConfig) -> Fixture {
	let picker = ScriptedPicker::new();
	let log = EventLog::default();
	let notify_log = log.clone();
	let diagnostics_log = log.clone();
	let collaborators = Collaborators::new(picker.clone(), move || notify_log.push(Event::Notify))
		.with_view(RecordingView(log.clone()))
		.with_diagnostics(move |diagnostic: &PickDiagnostic| {
			diagnostics_log.push(Event::Diagnostic {
				generation: diagnostic.generation,
				error: diagnostic.error.to_string(),
			})
		});
	let controller = SyncController::new(
		lookup_control::primitives::PickScope::new("account", "view-1"),
		"rgb(10, 20, 30)".into(),
		collaborators,
		config,
	);
	log.clear();
	Fixture { controller, picker, log }
}

pub fn reference(id: &str, name: &str) -> EntityReference {
	EntityReference::new(id, name, "account").unwrap()
}

pub fn snapshot(id: &str, name: &str) -> BindingSnapshot {
	BindingSnapshot::selected(&reference(id, name), "rgb(10, 20, 30)")
}

pub fn output_ids(controller: &SyncController) -> Vec<String> {
	controller.read_output().references().iter().map(|r| r.id().to_owned()).collect()
}

/// Lets spawned pick tasks run, then applies whatever resolved.
pub async fn settle(controller: &mut SyncController) -> Vec<PickOutcome> {
	let mut outcomes = Vec::new();
	for _ in 0..64 {
		tokio::task::yield_now().await;
		outcomes.extend(controller.pump());
		if controller.pending_picks() == 0 {
			break;
		}
	}
	outcomes
}
