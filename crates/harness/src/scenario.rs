//! Scenario files: the lookup binding, controller policies and a list of host events.

use std::path::{Path, PathBuf};

use lookup_control::LookupConfig;
use lookup_control::primitives::{PickedRecord, RawReference};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
	#[error("I/O error reading {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },
	#[error("scenario parse error: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("step {step}: expected output {expected:?}, got {actual:?}")]
	UnexpectedOutput { step: usize, expected: Vec<String>, actual: Vec<String> },
	#[error("step {step}: pick #{pick} was never issued or is already settled")]
	UnknownPick { step: usize, pick: usize },
}

/// Entity kind, view and color the lookup is initialized with.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Binding {
	pub entity_kind: String,
	#[serde(default)]
	pub view_id: String,
	#[serde(default)]
	pub color: String,
}

/// One host or user event.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
	/// Host pushes a bound value.
	Refresh {
		#[serde(default)]
		reference: Option<RawReference>,
		#[serde(default)]
		color: Option<String>,
	},
	/// Host pushes a raw JSON payload.
	RefreshJson { payload: String },
	/// User presses the pick button.
	Pick,
	/// The picker resolves pick `pick` (0-based, in issue order).
	Resolve {
		pick: usize,
		#[serde(default)]
		records: Vec<PickedRecord>,
	},
	/// The picker rejects pick `pick`.
	Reject { pick: usize, error: String },
	/// User presses the clear button.
	Clear,
	/// Host event tick: resolved picks are applied.
	Tick,
	/// Host pulls the output; optionally checked against the expected ids.
	Output {
		#[serde(default)]
		expect: Option<Vec<String>>,
	},
	/// Host tears the control down.
	Teardown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
	pub lookup: Binding,
	#[serde(default)]
	pub config: LookupConfig,
	#[serde(default, rename = "step")]
	pub steps: Vec<Step>,
}

impl Scenario {
	pub fn from_toml_str(input: &str) -> Result<Self, ScenarioError> {
		Ok(toml::from_str(input)?)
	}

	pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
		let input = std::fs::read_to_string(path).map_err(|error| ScenarioError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}
}
