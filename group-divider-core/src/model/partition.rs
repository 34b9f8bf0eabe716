use std::fmt;

use serde::{Deserialize, Serialize};

/// One random assignment of all roster participants into K groups.
///
/// A partition is an ordered sequence of groups, each an ordered sequence
/// of participant names drawn from one shuffle of the roster.
///
/// # Invariants
/// - The multiset union of all groups equals the source roster exactly:
///   no participant is omitted or duplicated within a single partition
/// - Group sizes differ by at most 1 (round-robin distribution)
///
/// # Serialized shape
/// A plain array of arrays of strings, so a stored partition is decoded
/// by a structured parser and never by evaluating text as code.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Partition {
	groups: Vec<Vec<String>>,
}

impl Partition {
	/// Distributes an already-shuffled list of names into `num_groups`
	/// groups, round-robin.
	///
	/// The name at permuted position `i` lands in group `i % num_groups`,
	/// preserving the permuted order within each group. With `n` names the
	/// first `n % num_groups` groups end up one name larger.
	///
	/// # Visibility
	/// - `pub(crate)`: partitions are only built from a shuffle performed
	///   by the partitioner, or decoded from a stored file.
	pub(crate) fn from_round_robin(shuffled: Vec<String>, num_groups: usize) -> Self {
		let mut groups = vec![Vec::new(); num_groups];
		for (position, name) in shuffled.into_iter().enumerate() {
			groups[position % num_groups].push(name);
		}
		Self { groups }
	}

	/// Returns the groups in order.
	pub fn groups(&self) -> &[Vec<String>] {
		&self.groups
	}

	/// Returns the number of groups.
	pub fn num_groups(&self) -> usize {
		self.groups.len()
	}

	/// Returns the total number of participants across all groups.
	pub fn num_participants(&self) -> usize {
		self.groups.iter().map(Vec::len).sum()
	}
}

/// Renders one group per line: `Group 1: Ann, Bo`.
///
/// This is the plain-text shape of the original view; any styling is the
/// presentation layer's business.
impl fmt::Display for Partition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (number, group) in self.groups.iter().enumerate() {
			if number > 0 {
				writeln!(f)?;
			}
			write!(f, "Group {}: {}", number + 1, group.join(", "))?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names(list: &[&str]) -> Vec<String> {
		list.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test]
	fn round_robin_strides_the_permutation() {
		let partition = Partition::from_round_robin(names(&["a", "b", "c", "d", "e"]), 2);
		assert_eq!(partition.groups(), [names(&["a", "c", "e"]), names(&["b", "d"])]);
	}

	#[test]
	fn one_group_holds_everyone() {
		let partition = Partition::from_round_robin(names(&["a", "b", "c"]), 1);
		assert_eq!(partition.num_groups(), 1);
		assert_eq!(partition.num_participants(), 3);
	}

	#[test]
	fn as_many_groups_as_names_yields_singletons() {
		let partition = Partition::from_round_robin(names(&["a", "b", "c"]), 3);
		assert!(partition.groups().iter().all(|group| group.len() == 1));
	}

	#[test]
	fn serializes_as_nested_arrays() {
		let partition = Partition::from_round_robin(names(&["a", "b", "c"]), 2);
		let encoded = serde_json::to_string(&partition).unwrap();
		assert_eq!(encoded, r#"[["a","c"],["b"]]"#);

		let decoded: Partition = serde_json::from_str(&encoded).unwrap();
		assert_eq!(decoded, partition);
	}

	#[test]
	fn display_lists_one_group_per_line() {
		let partition = Partition::from_round_robin(names(&["a", "b", "c"]), 2);
		assert_eq!(partition.to_string(), "Group 1: a, c\nGroup 2: b");
	}
}
