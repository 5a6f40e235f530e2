//! Core library for the `dirsum` disk-usage summarizer.
//!
//! The pipeline has three stages, each owned by one module:
//!
//! 1. [`summary::Parser`] walks a root directory and builds a fully
//!    aggregated [`summary::Tree`] (one node per directory, sizes summed
//!    bottom-up, symlinks never followed).
//! 2. [`filtering::filter_tree`] derives a pruned copy of that tree from a
//!    [`summary::FilterCriteria`], without touching the filesystem again,
//!    and rejects runs that match nothing.
//! 3. [`output::TreePrinter`] renders the result as an indented listing,
//!    largest entries first.
//!
//! [`paths`] provides standalone helpers for acting on what a summary
//! surfaced (rename, move, copy, delete); [`utils`] holds the size
//! formatting shared by all stages, and [`config`] the persistent settings
//! loaded from the user's config file.

pub mod config;
pub mod filtering;
pub mod output;
pub mod paths;
pub mod summary;
pub mod utils;

pub use filtering::{filter_tree, search_tree};
pub use output::TreePrinter;
pub use summary::{FilterCriteria, Parser, Tree};
