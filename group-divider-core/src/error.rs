use std::path::PathBuf;

use thiserror::Error;

/// Error kinds surfaced by the core.
///
/// Every operation returns one of these rather than leaving the session in
/// a partially mutated state: a failed load keeps the previous roster, a
/// failed generation keeps the previous current combination file.
///
/// The presentation layer is responsible for rendering user-facing
/// messages; the core only reports an unambiguous, typed reason.
#[derive(Error, Debug)]
pub enum Error {
	/// Empty or otherwise invalid name or numeric input.
	#[error("Invalid input: {message}")]
	Validation { message: String },

	/// An operation requiring a chosen item was called with none, or with
	/// a position that no longer exists.
	#[error("Invalid selection: {message}")]
	Selection { message: String },

	/// Group count outside `[1, participants]`.
	#[error("Number of groups must be between 1 and {participants}, got {groups}")]
	InvalidGroupCount { groups: usize, participants: usize },

	/// The operation requires at least one participant.
	#[error("The roster is empty")]
	EmptyRoster,

	#[error("File not found: {}", .0.display())]
	FileNotFound(PathBuf),

	/// Persisted data that could not be decoded.
	#[error("Malformed data: {0}")]
	Parse(String),

	/// A combination index beyond the number of stored partitions.
	#[error("No combination at index {index}, the file holds {count}")]
	IndexOutOfRange { index: usize, count: usize },

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl From<csv::Error> for Error {
	/// Splits delimited-file failures into their underlying filesystem
	/// error and genuine format errors.
	fn from(err: csv::Error) -> Self {
		let message = err.to_string();
		match err.into_kind() {
			csv::ErrorKind::Io(io_err) => Self::Io(io_err),
			_ => Self::Parse(message),
		}
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Parse(err.to_string())
	}
}

pub type Result<T> = std::result::Result<T, Error>;
