//! Contract for the host's "pick one record" capability.

use lookup_primitives::{BoxFutureStatic, PickOptions, PickedRecord};
use thiserror::Error;

/// Why a picker request was rejected.
///
/// A dismissed picker is not an error: it resolves with no records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
	#[error("network failure: {0}")]
	Network(String),
	#[error("permission denied: {0}")]
	Permission(String),
	#[error("user navigated away before the picker resolved")]
	NavigatedAway,
	#[error("{0}")]
	Other(String),
}

/// Records resolved by one pick request: zero (dismissed) or one.
pub type PickResult = Result<Vec<PickedRecord>, PickerError>;

/// Asynchronous record picker provided by the host.
///
/// The request is issued when [`Self::pick`] is called; the returned future only
/// waits for its resolution, like a promise. There is no cancellation: dropping
/// the future stops waiting but does not close the host's dialog.
pub trait RecordPicker {
	fn pick(&self, options: PickOptions) -> BoxFutureStatic<PickResult>;
}

impl<F> RecordPicker for F
where
	F: Fn(PickOptions) -> BoxFutureStatic<PickResult>,
{
	fn pick(&self, options: PickOptions) -> BoxFutureStatic<PickResult> {
		self(options)
	}
}
