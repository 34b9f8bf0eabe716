use std::path::Path;

use crate::error::{Error, Result};
use crate::io::open_existing;

/// Ordered roster of participant names.
///
/// # Responsibilities
/// - Preserve insertion order (the only ordering participants have)
/// - Append and remove-by-position mutation
/// - Persist to and reload from a one-name-per-record delimited file
///
/// # Invariants
/// - Stored names are non-empty after trimming
/// - Duplicate names are permitted and distinguished by position
/// - A failed `load` never replaces the in-memory list
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Roster {
	names: Vec<String>,
}

impl Roster {
	/// Creates an empty roster.
	pub fn new() -> Self {
		Self { names: Vec::new() }
	}

	/// Returns the participant names in insertion order.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Returns the number of participants.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Appends a participant.
	///
	/// The name is trimmed before being stored.
	///
	/// # Errors
	/// Returns `Error::Validation` if the trimmed name is empty.
	pub fn add(&mut self, name: &str) -> Result<()> {
		let name = name.trim();
		if name.is_empty() {
			return Err(Error::Validation {
				message: "Participant name cannot be empty".to_owned(),
			});
		}
		self.names.push(name.to_owned());
		Ok(())
	}

	/// Removes the participant at the selected position and returns it.
	///
	/// # Parameters
	/// - `selection`: The chosen position, or `None` when the caller has
	///   nothing selected. Whether the caller confirmed the removal is not
	///   this type's business.
	///
	/// # Errors
	/// Returns `Error::Selection` when nothing is selected or the position
	/// is out of bounds.
	pub fn remove(&mut self, selection: Option<usize>) -> Result<String> {
		let index = selection.ok_or_else(|| Error::Selection {
			message: "No participant selected".to_owned(),
		})?;
		if index >= self.names.len() {
			return Err(Error::Selection {
				message: format!("No participant at position {}", index),
			});
		}
		Ok(self.names.remove(index))
	}

	/// Writes the roster to `path`, one name per record, no header.
	///
	/// # Errors
	/// - `Error::EmptyRoster` if there is nothing to save.
	/// - `Error::Io` on write failure.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		if self.names.is_empty() {
			return Err(Error::EmptyRoster);
		}

		let mut writer = csv::Writer::from_path(path.as_ref())?;
		for name in &self.names {
			writer.write_record([name.as_str()])?;
		}
		writer.flush()?;

		log::debug!("Saved {} participants to {}", self.names.len(), path.as_ref().display());
		Ok(())
	}

	/// Replaces the roster with the contents of `path`.
	///
	/// # Behavior
	/// - Reads the same one-name-per-record format written by `save`.
	/// - Fully empty records are skipped.
	/// - The in-memory list is replaced only once the whole file has been
	///   parsed; on any error the previous roster is kept.
	///
	/// # Returns
	/// The number of participants loaded.
	///
	/// # Errors
	/// - `Error::FileNotFound` if `path` does not exist.
	/// - `Error::Parse` on malformed records, `Error::Io` on read failure.
	pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
		let file = open_existing(path.as_ref())?;
		let mut reader = csv::ReaderBuilder::new()
			.has_headers(false)
			.flexible(true)
			.from_reader(file);

		let mut names = Vec::new();
		for record in reader.records() {
			let record = record?;
			if record.iter().all(str::is_empty) {
				continue;
			}
			if let Some(name) = record.get(0) {
				names.push(name.to_owned());
			}
		}

		self.names = names;
		log::debug!("Loaded {} participants from {}", self.names.len(), path.as_ref().display());
		Ok(self.names.len())
	}
}
