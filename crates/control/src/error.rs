//! Error types for pick completion and configuration loading.

use std::path::PathBuf;

use lookup_primitives::ReferenceError;
use thiserror::Error;

use crate::PickerError;

/// Ways a pick can fail to produce a selection. None of them are fatal.
#[derive(Debug, Clone, Error)]
pub enum PickError {
	/// The picker rejected the request.
	#[error("picker rejected the request: {0}")]
	Rejected(#[from] PickerError),

	/// The picker resolved with a record that is not a valid reference.
	#[error("picker returned a malformed record: {0}")]
	MalformedRecord(#[from] ReferenceError),

	/// The task awaiting the picker panicked or was aborted.
	#[error("pick task ended abnormally: {0}")]
	TaskAborted(String),

	/// No async runtime is available to await the picker on.
	#[error("no async runtime available to await the picker")]
	NoRuntime,
}

/// Errors that can occur when loading lookup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or values.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}
