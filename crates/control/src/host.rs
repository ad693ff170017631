//! Host-side collaborators: output notification and rendering glue.

use lookup_primitives::{ColorToken, SelectionState};

use crate::{Diagnostics, RecordPicker, TracingDiagnostics};

/// Fire-and-forget signal telling the host to pull the output when convenient.
pub trait OutputNotifier {
	fn notify_output_changed(&self);
}

impl<F> OutputNotifier for F
where
	F: Fn(),
{
	fn notify_output_changed(&self) {
		self()
	}
}

/// Everything a view needs to draw the lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
	/// Display name of the selected record, empty when nothing is selected.
	pub label: String,
	/// Whether the selected-item row is shown. Hidden for blank labels.
	pub item_visible: bool,
	pub color: ColorToken,
}

impl ViewModel {
	pub fn new(state: &SelectionState, color: &ColorToken) -> Self {
		let label = state.label().to_owned();
		Self {
			item_visible: !label.trim().is_empty(),
			label,
			color: color.clone(),
		}
	}
}

/// Rendering glue. Called after every store mutation, before any notification.
pub trait LookupView {
	fn render(&mut self, view: &ViewModel);
}

/// View for headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl LookupView for NullView {
	fn render(&mut self, _view: &ViewModel) {}
}

/// External collaborators a controller is wired to at initialization.
pub struct Collaborators {
	pub picker: Box<dyn RecordPicker>,
	pub notifier: Box<dyn OutputNotifier>,
	pub diagnostics: Box<dyn Diagnostics>,
	pub view: Box<dyn LookupView>,
}

impl Collaborators {
	/// Wires a picker and notifier, logging failures through `tracing` and rendering nowhere.
	pub fn new(picker: impl RecordPicker + 'static, notifier: impl OutputNotifier + 'static) -> Self {
		Self {
			picker: Box::new(picker),
			notifier: Box::new(notifier),
			diagnostics: Box::new(TracingDiagnostics),
			view: Box::new(NullView),
		}
	}

	pub fn with_view(mut self, view: impl LookupView + 'static) -> Self {
		self.view = Box::new(view);
		self
	}

	pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
		self.diagnostics = Box::new(diagnostics);
		self
	}
}
