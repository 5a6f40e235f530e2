//! Summary tree construction and filtering.
//!
//! This module contains the core engine: the directory walker that builds
//! an aggregated [`Tree`], the [`FilterCriteria`] value object, and the
//! copy-on-filter transformation that prunes a built tree to the subtrees
//! of interest.

pub mod criteria;
pub mod parser;
pub mod tree;

pub use criteria::FilterCriteria;
pub use parser::Parser;
pub use tree::Tree;
