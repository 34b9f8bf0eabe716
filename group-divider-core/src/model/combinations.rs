use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};
use crate::io::open_existing;
use crate::model::partition::Partition;

/// Lazy iterator over the human-readable labels of a combination-set
/// file: "Combination 1", "Combination 2", …
///
/// Labels are produced one record at a time without deserializing the
/// partitions themselves. The iterator is restartable in the sense that
/// `list_summaries` can be called again on the same path: the file is
/// re-opened and never mutated.
pub struct CombinationSummaries {
	records: csv::StringRecordsIntoIter<File>,
	next_number: usize,
}

impl Iterator for CombinationSummaries {
	type Item = Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			match self.records.next()? {
				Ok(record) => {
					if record.iter().all(str::is_empty) {
						continue;
					}
					self.next_number += 1;
					return Some(Ok(format!("Combination {}", self.next_number)));
				}
				Err(err) => return Some(Err(err.into())),
			}
		}
	}
}

/// Opens a combination-set file and returns a lazy sequence of one label
/// per stored partition.
///
/// # Errors
/// - `Error::FileNotFound` if `path` does not exist.
/// - `Error::Io` / `Error::Parse` while iterating, on read failure or
///   malformed records.
pub fn list_summaries<P: AsRef<Path>>(path: P) -> Result<CombinationSummaries> {
	let file = open_existing(path)?;
	let reader = csv::ReaderBuilder::new()
		.has_headers(false)
		.flexible(true)
		.from_reader(file);
	Ok(CombinationSummaries {
		records: reader.into_records(),
		next_number: 0,
	})
}

/// Reads back the single partition stored at `index` (0-based) of a
/// combination-set file.
///
/// The file is scanned sequentially and only the requested record's field
/// is decoded; earlier and later partitions are never materialized.
///
/// # Errors
/// - `Error::FileNotFound` if `path` does not exist.
/// - `Error::IndexOutOfRange` if fewer than `index + 1` partitions are
///   stored.
/// - `Error::Parse` if the record does not hold a valid encoding.
pub fn get_partition<P: AsRef<Path>>(path: P, index: usize) -> Result<Partition> {
	let file = open_existing(path)?;
	let mut reader = csv::ReaderBuilder::new()
		.has_headers(false)
		.flexible(true)
		.from_reader(file);

	let mut count = 0;
	for record in reader.records() {
		let record = record?;
		if record.iter().all(str::is_empty) {
			continue;
		}
		if count == index {
			let field = record.get(0).ok_or_else(|| Error::Parse(
				"Combination record has no field".to_owned(),
			))?;
			return Ok(serde_json::from_str(field)?);
		}
		count += 1;
	}

	Err(Error::IndexOutOfRange { index, count })
}
