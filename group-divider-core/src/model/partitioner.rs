use std::path::{Path, PathBuf};

use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};
use crate::io::timestamped_combinations_path;
use crate::model::generation_request::GenerationRequest;
use crate::model::partition::Partition;
use crate::model::roster::Roster;

/// Computes how many distinct unordered groups of size `groups` can be
/// chosen from `participants` names: the binomial coefficient C(n, k).
///
/// This is an informational display value. It does not bound how many
/// partitions may actually be generated — draws are independent, so
/// duplicates across runs are possible and acceptable.
///
/// # Returns
/// The exact count as an arbitrary-precision integer; C(70, 35) already
/// overflows `u64`.
///
/// # Errors
/// - `Error::EmptyRoster` if `participants` is zero.
/// - `Error::InvalidGroupCount` if `groups` is zero or exceeds
///   `participants`.
pub fn count_possible(participants: usize, groups: usize) -> Result<BigUint> {
	if participants == 0 {
		return Err(Error::EmptyRoster);
	}
	if groups == 0 || groups > participants {
		return Err(Error::InvalidGroupCount { groups, participants });
	}

	// C(n, k) == C(n, n - k), walk the shorter side
	let k = groups.min(participants - groups);

	// Multiplicative form; each intermediate division is exact because
	// the product of i + 1 consecutive integers is divisible by (i + 1)!
	let mut count = BigUint::one();
	for i in 0..k {
		count = count * (participants - i) / (i + 1);
	}
	Ok(count)
}

/// Result of one generation run: the partitions drawn and the file they
/// were persisted to.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
	/// The timestamped combination-set file holding the partitions.
	pub path: PathBuf,

	/// The generated partitions, in draw order.
	pub partitions: Vec<Partition>,
}

/// Generates random partitions of a roster.
///
/// # Responsibilities
/// - Shuffle the roster once per draw and stride it into K groups
/// - Report cooperative progress to the caller after each draw
/// - Persist the whole run to a timestamped combination-set file
///
/// The generator holds no state besides its randomness source. In normal
/// operation that source is thread-local entropy (`Partitioner::new`),
/// making every draw independent and unseeded; tests inject a seeded
/// source through `Partitioner::with_rng`.
#[derive(Debug)]
pub struct Partitioner<R: Rng> {
	rng: R,
}

impl Partitioner<ThreadRng> {
	/// Creates a partitioner drawing from thread-local entropy.
	pub fn new() -> Self {
		Self { rng: rand::rng() }
	}
}

impl Default for Partitioner<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> Partitioner<R> {
	/// Creates a partitioner with an injected randomness source.
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}

	/// Generates `request.num_combinations()` independent partitions of
	/// `roster` and persists them to a timestamped file in the request's
	/// output directory.
	///
	/// # Parameters
	/// - `progress`: invoked after each draw with `(done, total)`. This is
	///   cooperative progress reporting for the presentation layer, not
	///   parallelism; pass `|_, _| {}` to ignore it.
	///
	/// # Behavior
	/// - Each draw shuffles the full roster uniformly, then the name at
	///   permuted position `i` joins group `i % k`.
	/// - One record per partition is written, the record's single field
	///   holding the partition as an array-of-arrays encoding.
	///
	/// # Errors
	/// - `Error::EmptyRoster` / `Error::InvalidGroupCount` under the same
	///   conditions as `count_possible`.
	/// - `Error::Io` if persistence fails, in which case the computed
	///   partitions are discarded rather than returned as current.
	pub fn generate<F>(
		&mut self,
		roster: &Roster,
		request: &GenerationRequest,
		mut progress: F,
	) -> Result<GenerationOutcome>
	where
		F: FnMut(usize, usize),
	{
		let participants = roster.len();
		if participants == 0 {
			return Err(Error::EmptyRoster);
		}
		let num_groups = request.num_groups();
		if num_groups == 0 || num_groups > participants {
			return Err(Error::InvalidGroupCount { groups: num_groups, participants });
		}

		let total = request.num_combinations();
		let mut partitions = Vec::with_capacity(total);
		for draw in 0..total {
			let mut shuffled = roster.names().to_vec();
			shuffled.shuffle(&mut self.rng);
			partitions.push(Partition::from_round_robin(shuffled, num_groups));
			progress(draw + 1, total);
		}

		let path = timestamped_combinations_path(request.output_dir());
		write_combination_set(&path, &partitions)?;
		log::info!(
			"Generated {} combinations of {} groups into {}",
			total,
			num_groups,
			path.display()
		);

		Ok(GenerationOutcome { path, partitions })
	}
}

/// Writes one record per partition, the single field holding the
/// partition's structured encoding.
fn write_combination_set(path: &Path, partitions: &[Partition]) -> Result<()> {
	let mut writer = csv::Writer::from_path(path)?;
	for partition in partitions {
		let encoded = serde_json::to_string(partition)?;
		writer.write_record([encoded.as_str()])?;
	}
	writer.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn roster_of(names: &[&str]) -> Roster {
		let mut roster = Roster::new();
		for name in names {
			roster.add(name).unwrap();
		}
		roster
	}

	fn seeded() -> Partitioner<StdRng> {
		Partitioner::with_rng(StdRng::seed_from_u64(42))
	}

	#[test]
	fn binomial_of_five_choose_two_is_ten() {
		assert_eq!(count_possible(5, 2).unwrap(), BigUint::from(10u32));
	}

	#[test]
	fn binomial_matches_known_values() {
		assert_eq!(count_possible(1, 1).unwrap(), BigUint::from(1u32));
		assert_eq!(count_possible(7, 1).unwrap(), BigUint::from(7u32));
		assert_eq!(count_possible(7, 7).unwrap(), BigUint::from(1u32));
		assert_eq!(count_possible(52, 5).unwrap(), BigUint::from(2_598_960u32));
		assert_eq!(count_possible(10, 3).unwrap(), count_possible(10, 7).unwrap());
	}

	#[test]
	fn binomial_is_exact_beyond_machine_integers() {
		// C(100, 50) has 30 digits
		let expected = BigUint::parse_bytes(b"100891344545564193334812497256", 10).unwrap();
		assert_eq!(count_possible(100, 50).unwrap(), expected);
	}

	#[test]
	fn counting_with_no_participants_is_rejected() {
		assert!(matches!(count_possible(0, 1), Err(Error::EmptyRoster)));
	}

	#[test]
	fn counting_with_invalid_group_counts_is_rejected() {
		assert!(matches!(count_possible(5, 0), Err(Error::InvalidGroupCount { .. })));
		assert!(matches!(count_possible(3, 5), Err(Error::InvalidGroupCount { .. })));
	}

	#[test]
	fn every_partition_preserves_the_roster_as_a_multiset() {
		let roster = roster_of(&["Ann", "Bo", "Cy", "Dee", "Eve"]);
		let dir = tempfile::tempdir().unwrap();
		let mut request = GenerationRequest::new(2, 10).unwrap();
		request.set_output_dir(dir.path());

		let outcome = seeded().generate(&roster, &request, |_, _| {}).unwrap();
		assert_eq!(outcome.partitions.len(), 10);

		let mut expected: Vec<String> = roster.names().to_vec();
		expected.sort();
		for partition in &outcome.partitions {
			let mut members: Vec<String> =
				partition.groups().iter().flatten().cloned().collect();
			members.sort();
			assert_eq!(members, expected);
		}
	}

	#[test]
	fn group_sizes_differ_by_at_most_one() {
		let roster = roster_of(&["Ann", "Bo", "Cy", "Dee", "Eve"]);
		let dir = tempfile::tempdir().unwrap();
		let mut request = GenerationRequest::new(2, 5).unwrap();
		request.set_output_dir(dir.path());

		let outcome = seeded().generate(&roster, &request, |_, _| {}).unwrap();
		for partition in &outcome.partitions {
			let sizes: Vec<usize> = partition.groups().iter().map(Vec::len).collect();
			assert_eq!(sizes.iter().sum::<usize>(), 5);
			let largest = sizes.iter().max().unwrap();
			let smallest = sizes.iter().min().unwrap();
			assert!(largest - smallest <= 1, "uneven sizes: {:?}", sizes);
		}
	}

	#[test]
	fn progress_is_reported_after_each_draw() {
		let roster = roster_of(&["Ann", "Bo", "Cy"]);
		let dir = tempfile::tempdir().unwrap();
		let mut request = GenerationRequest::new(3, 3).unwrap();
		request.set_output_dir(dir.path());

		let mut seen = Vec::new();
		seeded()
			.generate(&roster, &request, |done, total| seen.push((done, total)))
			.unwrap();
		assert_eq!(seen, [(1, 3), (2, 3), (3, 3)]);
	}

	#[test]
	fn more_groups_than_participants_is_rejected() {
		let roster = roster_of(&["Ann", "Bo", "Cy"]);
		let request = GenerationRequest::new(5, 1).unwrap();
		let result = seeded().generate(&roster, &request, |_, _| {});
		assert!(matches!(result, Err(Error::InvalidGroupCount { groups: 5, participants: 3 })));
	}

	#[test]
	fn generating_from_an_empty_roster_is_rejected() {
		let roster = Roster::new();
		let request = GenerationRequest::new(1, 1).unwrap();
		let result = seeded().generate(&roster, &request, |_, _| {});
		assert!(matches!(result, Err(Error::EmptyRoster)));
	}

	#[test]
	fn identical_seeds_draw_identical_partitions() {
		let roster = roster_of(&["Ann", "Bo", "Cy", "Dee", "Eve"]);
		let dir = tempfile::tempdir().unwrap();
		let mut request = GenerationRequest::new(2, 4).unwrap();
		request.set_output_dir(dir.path());

		let first = seeded().generate(&roster, &request, |_, _| {}).unwrap();
		let second = seeded().generate(&roster, &request, |_, _| {}).unwrap();
		assert_eq!(first.partitions, second.partitions);
	}

	#[test]
	fn persistence_failure_discards_the_run() {
		let roster = roster_of(&["Ann", "Bo"]);
		let mut request = GenerationRequest::new(2, 1).unwrap();
		request.set_output_dir("no_such_directory/nested");

		let result = seeded().generate(&roster, &request, |_, _| {});
		assert!(matches!(result, Err(Error::Io(_))));
	}
}
