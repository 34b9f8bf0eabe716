use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Input parameters for one generation run.
///
/// `GenerationRequest` carries the numeric parameters collected by the
/// presentation layer (how many groups, how many independent draws) plus
/// the directory the combination-set file is written into.
///
/// # Invariants
/// - `num_combinations` is at least 1
/// - `num_groups` is only bounded here from below; the upper bound depends
///   on the roster size and is checked when the run starts
pub struct GenerationRequest {
	/// Number of groups each draw is split into.
	num_groups: usize,

	/// Number of independent draws to generate.
	num_combinations: usize,

	/// Directory the combination-set file is written into.
	output_dir: PathBuf,
}

impl GenerationRequest {
	/// Creates a request writing into the current working directory.
	///
	/// # Errors
	/// Returns `Error::Validation` if `num_combinations` is zero.
	pub fn new(num_groups: usize, num_combinations: usize) -> Result<Self> {
		if num_combinations == 0 {
			return Err(Error::Validation {
				message: "Number of combinations must be at least 1".to_owned(),
			});
		}
		Ok(Self {
			num_groups,
			num_combinations,
			output_dir: PathBuf::from("."),
		})
	}

	/// Redirects the combination-set file into another directory.
	///
	/// The directory must already exist; generation reports an IO error
	/// otherwise.
	pub fn set_output_dir<P: Into<PathBuf>>(&mut self, dir: P) {
		self.output_dir = dir.into();
	}

	pub fn num_groups(&self) -> usize {
		self.num_groups
	}

	pub fn num_combinations(&self) -> usize {
		self.num_combinations
	}

	pub fn output_dir(&self) -> &Path {
		&self.output_dir
	}
}
