//! Policies for racing picks and empty pick results.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How pick completions that race each other are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickOrdering {
	/// Every completion is applied in resolution order, so a slow early pick
	/// overwrites a faster later one.
	LastCompletedWins,
	/// Completions of picks superseded by a later pick are dropped. User clears
	/// and host refreshes do not supersede picks.
	#[default]
	LatestRequestWins,
}

/// What a pick that resolves with no records does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPick {
	/// Reset the selection to empty and notify the host.
	#[default]
	Clear,
	/// Leave the current selection alone; nothing is notified.
	Keep,
}

/// Lookup control configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
	pub ordering: PickOrdering,
	pub empty_pick: EmptyPick,
}

impl LookupConfig {
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn empty_input_uses_defaults() {
		let config = LookupConfig::from_toml_str("").unwrap();
		assert_eq!(config.ordering, PickOrdering::LatestRequestWins);
		assert_eq!(config.empty_pick, EmptyPick::Clear);
	}

	#[test]
	fn parses_policies() {
		let config = LookupConfig::from_toml_str(
			r#"
			ordering = "last_completed_wins"
			empty_pick = "keep"
			"#,
		)
		.unwrap();
		assert_eq!(
			config,
			LookupConfig {
				ordering: PickOrdering::LastCompletedWins,
				empty_pick: EmptyPick::Keep,
			}
		);
	}

	#[test]
	fn rejects_unknown_values() {
		assert!(matches!(LookupConfig::from_toml_str(r#"ordering = "first_wins""#), Err(ConfigError::Parse(_))));
		assert!(matches!(LookupConfig::from_toml_str("retries = 3"), Err(ConfigError::Parse(_))));
	}

	#[test]
	fn loads_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, r#"empty_pick = "keep""#).unwrap();
		let config = LookupConfig::from_path(file.path()).unwrap();
		assert_eq!(config.empty_pick, EmptyPick::Keep);

		let missing = file.path().with_extension("missing");
		assert!(matches!(LookupConfig::from_path(&missing), Err(ConfigError::Io { .. })));
	}
}
