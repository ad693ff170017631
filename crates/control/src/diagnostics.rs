//! Structured sink for pick failures.

use crate::PickError;

/// One failed pick.
#[derive(Debug)]
pub struct PickDiagnostic {
	/// Generation of the failed pick; `None` when its task ended before reporting one.
	pub generation: Option<u64>,
	pub entity_kind: String,
	pub error: PickError,
}

/// Write-only channel for failures the user never sees.
pub trait Diagnostics {
	fn report(&self, diagnostic: &PickDiagnostic);
}

impl<F> Diagnostics for F
where
	F: Fn(&PickDiagnostic),
{
	fn report(&self, diagnostic: &PickDiagnostic) {
		self(diagnostic)
	}
}

/// Default sink: one `warn` event per failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
	fn report(&self, diagnostic: &PickDiagnostic) {
		tracing::warn!(
			generation = ?diagnostic.generation,
			entity_kind = %diagnostic.entity_kind,
			error = %diagnostic.error,
			"lookup.pick.failed"
		);
	}
}
