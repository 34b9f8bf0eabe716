//! Top-level module for the group divider core.
//!
//! This crate splits a roster of named participants into randomly
//! assigned groups, including:
//! - An ordered participant roster (`Roster`)
//! - A single random assignment into K groups (`Partition`)
//! - The partition generator with injectable randomness (`Partitioner`)
//! - Lazy readers over stored combination-set files
//! - A session object tying roster and current combination file together

/// Ordered list of participant names for the current session.
///
/// Supports append, remove-by-position and delimited-file persistence.
pub mod roster;

/// One random assignment of all roster participants into K groups.
///
/// Holds the round-robin distribution logic and the serialized shape
/// written to combination-set files.
pub mod partition;

/// Random partition generation and combinatorial counting.
///
/// Exposes `count_possible`, the `Partitioner` and its generation
/// outcome.
pub mod partitioner;

/// Validated input parameters for a generation run.
pub mod generation_request;

/// Lazy access to stored combination-set files.
///
/// Lists human-readable summaries and re-reads single partitions by
/// index without materializing the whole file.
pub mod combinations;

/// Explicit session state: the roster plus the current combination file.
///
/// Replaces process-global mutable state with a constructed object.
pub mod session;
