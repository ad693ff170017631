use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a reference cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
	#[error("entity reference has no id")]
	MissingId,
	#[error("entity reference {id:?} has no entity kind")]
	MissingKind { id: String },
}

/// Pointer to one record elsewhere in the host system.
///
/// Immutable once built. Two references are equal when they point at the same
/// record, i.e. `id` and `entity_kind` match; the display name is presentation
/// only and may go stale between refreshes.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReference", rename_all = "camelCase")]
pub struct EntityReference {
	id: String,
	display_name: String,
	entity_kind: String,
}

impl EntityReference {
	/// Builds a reference, rejecting blank ids and kinds. The display name may be empty.
	pub fn new(id: impl Into<String>, display_name: impl Into<String>, entity_kind: impl Into<String>) -> Result<Self, ReferenceError> {
		let id = id.into();
		if id.trim().is_empty() {
			return Err(ReferenceError::MissingId);
		}
		let entity_kind = entity_kind.into();
		if entity_kind.trim().is_empty() {
			return Err(ReferenceError::MissingKind { id });
		}
		Ok(Self {
			id,
			display_name: display_name.into(),
			entity_kind,
		})
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	pub fn entity_kind(&self) -> &str {
		&self.entity_kind
	}
}

impl PartialEq for EntityReference {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id && self.entity_kind == other.entity_kind
	}
}

impl Hash for EntityReference {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
		self.entity_kind.hash(state);
	}
}

/// Bound value exactly as the host hands it over.
///
/// Every field is optional: hosts routinely pass `{}` for "nothing bound".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReference {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default, alias = "name")]
	pub display_name: Option<String>,
	#[serde(default, alias = "entityType")]
	pub entity_kind: Option<String>,
}

impl From<&EntityReference> for RawReference {
	fn from(reference: &EntityReference) -> Self {
		Self {
			id: Some(reference.id.clone()),
			display_name: Some(reference.display_name.clone()),
			entity_kind: Some(reference.entity_kind.clone()),
		}
	}
}

impl TryFrom<RawReference> for EntityReference {
	type Error = ReferenceError;

	fn try_from(raw: RawReference) -> Result<Self, Self::Error> {
		Self::new(raw.id.unwrap_or_default(), raw.display_name.unwrap_or_default(), raw.entity_kind.unwrap_or_default())
	}
}

/// One item resolved by a record picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickedRecord {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub entity_type: String,
}

impl PickedRecord {
	pub fn new(id: impl Into<String>, name: impl Into<String>, entity_type: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			entity_type: entity_type.into(),
		}
	}
}

impl TryFrom<PickedRecord> for EntityReference {
	type Error = ReferenceError;

	fn try_from(record: PickedRecord) -> Result<Self, Self::Error> {
		Self::new(record.id, record.name, record.entity_type)
	}
}
