use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EntityReference, RawReference, SelectionState};

/// Opaque presentation color forwarded to the view, e.g. `rgb(10, 20, 30)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
	pub fn new(token: impl Into<String>) -> Self {
		Self(token.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for ColorToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<String> for ColorToken {
	fn from(token: String) -> Self {
		Self(token)
	}
}

impl From<&str> for ColorToken {
	fn from(token: &str) -> Self {
		Self::new(token)
	}
}

/// Bound values pushed in by the host on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingSnapshot {
	pub reference: Option<RawReference>,
	pub color: ColorToken,
}

/// Wire shape of a host refresh payload.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HostPayload {
	#[serde(default)]
	control_value: Option<Vec<RawReference>>,
	#[serde(default, alias = "ColorInRGB")]
	color_in_rgb: Option<String>,
}

impl BindingSnapshot {
	pub fn new(reference: Option<RawReference>, color: impl Into<ColorToken>) -> Self {
		Self {
			reference,
			color: color.into(),
		}
	}

	/// Snapshot carrying a well-formed reference.
	pub fn selected(reference: &EntityReference, color: impl Into<ColorToken>) -> Self {
		Self::new(Some(reference.into()), color)
	}

	/// Snapshot with nothing bound.
	pub fn empty(color: impl Into<ColorToken>) -> Self {
		Self::new(None, color)
	}

	/// Parses a host payload of shape `{"controlValue": [...], "colorInRgb": "..."}`.
	///
	/// Only the first bound value is used. Payloads that fail to parse yield an
	/// empty snapshot.
	pub fn from_json(payload: &str) -> Self {
		match serde_json::from_str::<HostPayload>(payload) {
			Ok(payload) => Self {
				reference: payload.control_value.and_then(|values| values.into_iter().next()),
				color: payload.color_in_rgb.map(ColorToken::from).unwrap_or_default(),
			},
			Err(error) => {
				tracing::warn!(%error, "lookup.snapshot.unparseable");
				Self::default()
			}
		}
	}

	/// Maps the bound value to a selection, treating absent or malformed references as empty.
	pub fn selection(&self) -> SelectionState {
		let Some(raw) = self.reference.clone() else {
			return SelectionState::Empty;
		};
		match EntityReference::try_from(raw) {
			Ok(reference) => SelectionState::Selected(reference),
			Err(error) => {
				tracing::debug!(%error, "lookup.snapshot.malformed_reference");
				SelectionState::Empty
			}
		}
	}
}
