//! Value types for lookup fields: record references, selection state, host snapshots.

/// Async future aliases.
pub mod future;
/// Picker scope and request options.
pub mod pick;
/// Entity references and the raw shapes hosts and pickers hand over.
pub mod reference;
/// Single-select state and the pull-accessor output shape.
pub mod selection;
/// Host refresh payloads.
pub mod snapshot;

pub use future::BoxFutureStatic;
pub use pick::{PickOptions, PickScope};
pub use reference::{EntityReference, PickedRecord, RawReference, ReferenceError};
pub use selection::{LookupOutput, SelectionState};
pub use snapshot::{BindingSnapshot, ColorToken};
