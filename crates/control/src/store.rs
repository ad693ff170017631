//! Holder of the current selection.

use lookup_primitives::{PickScope, SelectionState};

/// Current selection of one lookup plus the scope future picks are restricted to.
///
/// Pure state: writes never fail and never notify. Whoever calls [`Self::set`]
/// decides whether to render or tell the host.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
	state: SelectionState,
	scope: PickScope,
}

impl SelectionStore {
	/// Creates an empty store bound to `scope`.
	pub fn new(scope: PickScope) -> Self {
		Self {
			state: SelectionState::Empty,
			scope,
		}
	}

	pub fn set(&mut self, state: SelectionState) {
		self.state = state;
	}

	pub fn get(&self) -> &SelectionState {
		&self.state
	}

	pub fn clear(&mut self) {
		self.set(SelectionState::Empty);
	}

	pub fn scope(&self) -> &PickScope {
		&self.scope
	}
}
