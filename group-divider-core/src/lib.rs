//! Group-splitting core library.
//!
//! This crate provides the headless core of a group divider utility:
//! - An ordered roster of participant names with delimited-file persistence
//! - Random partitioning of the roster into K nearly-equal groups
//! - Exact combinatorial counts (binomial coefficients)
//! - Combination-set files that can be listed lazily and re-read by index
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.
//! The presentation layer (whatever renders windows or prompts) is a
//! consumer of this crate, never the other way around.

/// Core domain types and partitioning logic.
///
/// This module exposes the high-level session interface while keeping
/// internal file handling private.
pub mod model;

/// Typed error kinds shared by all core operations.
pub mod error;

/// I/O utilities (timestamped paths, file opening).
///
/// Not exposed
pub(crate) mod io;
