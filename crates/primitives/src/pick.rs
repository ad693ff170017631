use serde::{Deserialize, Serialize};

/// Entity kind and view a lookup is bound to, captured once at initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickScope {
	pub entity_kind: String,
	pub view_id: String,
}

impl PickScope {
	pub fn new(entity_kind: impl Into<String>, view_id: impl Into<String>) -> Self {
		Self {
			entity_kind: entity_kind.into(),
			view_id: view_id.into(),
		}
	}

	/// Request options for one pick, restricted to this scope.
	pub fn options(&self) -> PickOptions {
		PickOptions {
			default_entity_kind: self.entity_kind.clone(),
			default_view_id: self.view_id.clone(),
			entity_kinds: vec![self.entity_kind.clone()],
			view_ids: vec![self.view_id.clone()],
			allow_multiple: false,
		}
	}
}

/// Options passed to a record picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickOptions {
	pub default_entity_kind: String,
	pub default_view_id: String,
	pub entity_kinds: Vec<String>,
	pub view_ids: Vec<String>,
	/// Always false: lookups are single-select.
	pub allow_multiple: bool,
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn options_are_scoped_and_single_select() {
		let options = PickScope::new("account", "view-1").options();
		assert_eq!(
			options,
			PickOptions {
				default_entity_kind: "account".into(),
				default_view_id: "view-1".into(),
				entity_kinds: vec!["account".into()],
				view_ids: vec!["view-1".into()],
				allow_multiple: false,
			}
		);
	}
}
