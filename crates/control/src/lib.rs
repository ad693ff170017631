//! Single-record lookup control: selection store, sync controller and host adapter.
//!
//! A lookup field has two sources of truth that race each other. The host pushes
//! bound values in on every refresh, and the user picks records through an
//! asynchronous picker that may resolve long after the request. [`SyncController`]
//! owns the [`SelectionStore`] and reconciles both, applying pick completions in
//! resolution order on the host's dispatch thread.
//!
//! ```text
//! host refresh ──► on_host_refresh ──► store.set ──► render
//! pick clicked ──► picker.pick ──► task ──► pump/next_completion ──► store.set ──► render ──► notify
//! clear clicked ─► store.clear ──► render ──► notify
//! host pull ─────► read_output
//! ```

pub mod config;
pub mod control;
pub mod controller;
pub mod diagnostics;
pub mod error;
mod generation;
pub mod host;
mod join_set;
pub mod picker;
pub mod scripted;
pub mod store;

pub use config::{EmptyPick, LookupConfig, PickOrdering};
pub use control::LookupControl;
pub use controller::{PickCompletion, PickOutcome, PickTicket, SyncController};
pub use diagnostics::{Diagnostics, PickDiagnostic, TracingDiagnostics};
pub use error::{ConfigError, PickError};
pub use host::{Collaborators, LookupView, NullView, OutputNotifier, ViewModel};
pub use lookup_primitives as primitives;
pub use picker::{PickResult, PickerError, RecordPicker};
pub use store::SelectionStore;
