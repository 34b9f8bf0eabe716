use std::path::{Path, PathBuf};

use num_bigint::BigUint;
use rand::rngs::ThreadRng;

use crate::error::{Error, Result};
use crate::model::combinations::{self, CombinationSummaries};
use crate::model::generation_request::GenerationRequest;
use crate::model::partition::Partition;
use crate::model::partitioner::{self, GenerationOutcome, Partitioner};
use crate::model::roster::Roster;

/// State of one running session: the roster being edited and the
/// combination-set file currently open for viewing.
///
/// # Responsibilities
/// - Own the roster and delegate its mutations
/// - Run generations and track the resulting file as "current"
/// - Answer view requests (summaries, single partitions) against the
///   current file
///
/// # Invariants
/// - A fresh session has an empty roster and no current file
/// - The current file only changes when a generation or an explicit open
///   fully succeeds
#[derive(Debug)]
pub struct Session {
	roster: Roster,
	partitioner: Partitioner<ThreadRng>,
	current_combinations: Option<PathBuf>,
}

impl Session {
	/// Creates a session with an empty roster and no current combination
	/// file.
	pub fn new() -> Self {
		Self {
			roster: Roster::new(),
			partitioner: Partitioner::new(),
			current_combinations: None,
		}
	}

	pub fn roster(&self) -> &Roster {
		&self.roster
	}

	/// The combination-set file a previous `generate` or
	/// `open_combinations` made current, if any.
	pub fn current_combinations(&self) -> Option<&Path> {
		self.current_combinations.as_deref()
	}

	/// Appends a participant to the roster.
	///
	/// # Errors
	/// `Error::Validation` for a blank name.
	pub fn add_participant(&mut self, name: &str) -> Result<()> {
		self.roster.add(name)
	}

	/// Removes the selected participant and returns the name.
	///
	/// # Errors
	/// `Error::Selection` when nothing is selected or the position is out
	/// of bounds.
	pub fn remove_participant(&mut self, selection: Option<usize>) -> Result<String> {
		self.roster.remove(selection)
	}

	/// Saves the roster to `path`.
	pub fn save_roster<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		self.roster.save(path)
	}

	/// Replaces the roster with the contents of `path`, returning how many
	/// participants were loaded. A failed load keeps the previous roster.
	pub fn load_roster<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
		self.roster.load(path)
	}

	/// Counts the possible groupings of the current roster: C(N, K) for
	/// the session's N participants.
	pub fn count_possible(&self, num_groups: usize) -> Result<BigUint> {
		partitioner::count_possible(self.roster.len(), num_groups)
	}

	/// Runs one generation against the current roster and makes the
	/// resulting file current.
	///
	/// # Behavior
	/// - Delegates to `Partitioner::generate`, forwarding `progress`.
	/// - The current file pointer is updated only when generation and
	///   persistence both succeed; on any failure the previously current
	///   file (if any) stays in place.
	pub fn generate<F>(
		&mut self,
		request: &GenerationRequest,
		progress: F,
	) -> Result<GenerationOutcome>
	where
		F: FnMut(usize, usize),
	{
		let outcome = self.partitioner.generate(&self.roster, request, progress)?;
		self.current_combinations = Some(outcome.path.clone());
		Ok(outcome)
	}

	/// Adopts an existing combination-set file as current, returning how
	/// many partitions it holds.
	///
	/// The file is fully listed before being adopted, so a missing or
	/// malformed file never becomes current.
	pub fn open_combinations<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
		let mut count = 0;
		for label in combinations::list_summaries(path.as_ref())? {
			label?;
			count += 1;
		}
		self.current_combinations = Some(path.as_ref().to_path_buf());
		Ok(count)
	}

	/// Lists the labels of the current combination-set file.
	///
	/// # Errors
	/// `Error::Selection` when no file is current.
	pub fn summaries(&self) -> Result<CombinationSummaries> {
		let path = self.current_path()?;
		combinations::list_summaries(path)
	}

	/// Reads the partition stored at `index` of the current file.
	///
	/// # Errors
	/// `Error::Selection` when no file is current;
	/// `Error::IndexOutOfRange` beyond the stored count.
	pub fn partition(&self, index: usize) -> Result<Partition> {
		let path = self.current_path()?;
		combinations::get_partition(path, index)
	}

	fn current_path(&self) -> Result<&Path> {
		self.current_combinations.as_deref().ok_or_else(|| Error::Selection {
			message: "No combination file loaded".to_owned(),
		})
	}
}

impl Default for Session {
	fn default() -> Self {
		Self::new()
	}
}
