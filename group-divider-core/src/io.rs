use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Error, Result};

/// Builds the path of a new combination-set file inside `dir`.
///
/// The name carries a wall-clock timestamp with second granularity, so
/// successive generations land in distinct files.
///
/// Example:
/// `"."` → `./combinations_20260806_153012.csv`
pub(crate) fn timestamped_combinations_path<P: AsRef<Path>>(dir: P) -> PathBuf {
	let stamp = Local::now().format("%Y%m%d_%H%M%S");
	dir.as_ref().join(format!("combinations_{}.csv", stamp))
}

/// Opens a file for reading, reporting a missing file as its own error
/// kind instead of a generic IO failure.
pub(crate) fn open_existing<P: AsRef<Path>>(path: P) -> Result<File> {
	let path = path.as_ref();
	if !path.exists() {
		return Err(Error::FileNotFound(path.to_path_buf()));
	}
	Ok(File::open(path)?)
}
