use serde::Serialize;

use crate::EntityReference;

/// The current choice of a single-select lookup.
///
/// There is no partial or multi-valued form: a lookup either points at exactly
/// one record or at nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
	#[default]
	Empty,
	Selected(EntityReference),
}

impl SelectionState {
	pub fn reference(&self) -> Option<&EntityReference> {
		match self {
			Self::Empty => None,
			Self::Selected(reference) => Some(reference),
		}
	}

	pub const fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Text a view shows for this state.
	pub fn label(&self) -> &str {
		self.reference().map_or("", EntityReference::display_name)
	}
}

impl From<Option<EntityReference>> for SelectionState {
	fn from(reference: Option<EntityReference>) -> Self {
		reference.map_or(Self::Empty, Self::Selected)
	}
}

/// Value handed to the host by the pull accessor: zero or one reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupOutput {
	control_value: Vec<EntityReference>,
}

impl LookupOutput {
	pub fn references(&self) -> &[EntityReference] {
		&self.control_value
	}

	pub fn first(&self) -> Option<&EntityReference> {
		self.control_value.first()
	}

	pub fn is_empty(&self) -> bool {
		self.control_value.is_empty()
	}
}

impl From<&SelectionState> for LookupOutput {
	fn from(state: &SelectionState) -> Self {
		Self {
			control_value: state.reference().cloned().into_iter().collect(),
		}
	}
}
