//! Plays a scenario against a live lookup control.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lookup_control::primitives::{BindingSnapshot, EntityReference, LookupOutput};
use lookup_control::scripted::ScriptedPicker;
use lookup_control::{Collaborators, LookupControl, LookupView, PickOutcome, PickerError, ViewModel};
use tracing::{debug, info};

use crate::scenario::{Scenario, ScenarioError, Step};

/// Ticks of the host loop a `tick` step spends waiting for resolved picks.
const TICK_ROUNDS: usize = 16;

/// What the host observed while the scenario ran.
#[derive(Debug, Default)]
pub struct Report {
	pub outputs: Vec<LookupOutput>,
	pub outcomes: Vec<String>,
	pub notifications: usize,
}

struct LoggingView;

impl LookupView for LoggingView {
	fn render(&mut self, view: &ViewModel) {
		debug!(label = %view.label, item_visible = view.item_visible, color = %view.color, "host.render");
	}
}

pub async fn run(scenario: Scenario) -> Result<Report, ScenarioError> {
	let picker = ScriptedPicker::new();
	let notifications = Arc::new(AtomicUsize::new(0));
	let counter = notifications.clone();
	let collaborators = Collaborators::new(picker.clone(), move || {
		counter.fetch_add(1, Ordering::SeqCst);
		info!("host.output_changed");
	})
	.with_view(LoggingView);

	let binding = scenario.lookup;
	let mut control = LookupControl::initialize(binding.entity_kind, binding.view_id, binding.color.as_str(), collaborators, scenario.config);
	let mut report = Report::default();

	for (index, step) in scenario.steps.into_iter().enumerate() {
		let step_no = index + 1;
		debug!(step = step_no, ?step, "host.step");
		match step {
			Step::Refresh { reference, color } => control.refresh(BindingSnapshot::new(reference, color.unwrap_or_default())),
			Step::RefreshJson { payload } => control.refresh_json(&payload),
			Step::Pick => match control.pick() {
				Some(ticket) => info!(step = step_no, generation = ticket.generation(), "host.pick_issued"),
				None => info!(step = step_no, "host.pick_not_issued"),
			},
			Step::Resolve { pick, records } => {
				check_pick(&picker, step_no, pick)?;
				if !picker.resolve(pick, Ok(records)) {
					debug!(step = step_no, pick, "host.resolve_unobserved");
				}
			}
			Step::Reject { pick, error } => {
				check_pick(&picker, step_no, pick)?;
				if !picker.reject(pick, PickerError::Other(error)) {
					debug!(step = step_no, pick, "host.reject_unobserved");
				}
			}
			Step::Clear => control.clear(),
			Step::Tick => {
				for outcome in tick(&mut control).await {
					info!(step = step_no, ?outcome, "host.pick_applied");
					report.outcomes.push(describe(&outcome));
				}
			}
			Step::Output { expect } => {
				let output = control.pull_output();
				let actual: Vec<String> = output.references().iter().map(|r| r.id().to_owned()).collect();
				info!(step = step_no, output = ?actual, "host.pull_output");
				if let Some(expected) = expect {
					if expected != actual {
						return Err(ScenarioError::UnexpectedOutput {
							step: step_no,
							expected,
							actual,
						});
					}
				}
				report.outputs.push(output);
			}
			Step::Teardown => control.teardown(),
		}
	}

	control.teardown();
	report.notifications = notifications.load(Ordering::SeqCst);
	Ok(report)
}

fn check_pick(picker: &ScriptedPicker, step: usize, pick: usize) -> Result<(), ScenarioError> {
	if pick < picker.request_count() {
		Ok(())
	} else {
		Err(ScenarioError::UnknownPick { step, pick })
	}
}

/// Yields to the runtime so pick tasks can observe their resolution, then ticks.
async fn tick(control: &mut LookupControl) -> Vec<PickOutcome> {
	let mut outcomes = Vec::new();
	for _ in 0..TICK_ROUNDS {
		tokio::task::yield_now().await;
		outcomes.extend(control.tick());
		if control.controller().is_none_or(|controller| controller.pending_picks() == 0) {
			break;
		}
	}
	outcomes
}

fn describe(outcome: &PickOutcome) -> String {
	match outcome {
		PickOutcome::Selected(reference) => format!("selected {}", reference_label(reference)),
		PickOutcome::Cleared => "cleared".into(),
		PickOutcome::Unchanged => "unchanged".into(),
		PickOutcome::Discarded => "discarded".into(),
		PickOutcome::Failed(error) => format!("failed: {error}"),
	}
}

fn reference_label(reference: &EntityReference) -> String {
	format!("{}:{} ({})", reference.entity_kind(), reference.id(), reference.display_name())
}
