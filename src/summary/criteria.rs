//! Filter criteria for pruning a summary tree.
//!
//! This module defines the immutable parameter object passed into tree
//! filtering. It carries no behavior beyond storage and construction.

/// Criteria used when filtering a summary tree.
///
/// A child subtree survives filtering when its aggregate size meets
/// `min_bytes`. When `names` is present, a subtree must additionally
/// contain a directory whose name matches one of the entries (or be an
/// ancestor of one) to survive.
#[derive(Clone, Debug, Default)]
pub struct FilterCriteria {
    /// Minimum aggregate size, in bytes, for a subtree to be kept.
    pub min_bytes: u64,

    /// Optional set of directory names a surviving branch must contain.
    pub names: Option<Vec<String>>,
}

impl FilterCriteria {
    /// Create size-only criteria.
    #[must_use]
    pub const fn from_min_bytes(min_bytes: u64) -> Self {
        Self {
            min_bytes,
            names: None,
        }
    }

    /// Create criteria from a threshold and an optional list of names.
    ///
    /// An empty name list is treated the same as no name filter.
    #[must_use]
    pub fn new(min_bytes: u64, names: Vec<String>) -> Self {
        Self {
            min_bytes,
            names: if names.is_empty() { None } else { Some(names) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_min_bytes() {
        let criteria = FilterCriteria::from_min_bytes(10_000_000);
        assert_eq!(criteria.min_bytes, 10_000_000);
        assert!(criteria.names.is_none());
    }

    #[test]
    fn test_new_with_names() {
        let criteria = FilterCriteria::new(500, vec!["target".to_string()]);
        assert_eq!(criteria.min_bytes, 500);
        assert_eq!(criteria.names.as_deref(), Some(&["target".to_string()][..]));
    }

    #[test]
    fn test_empty_names_means_no_name_filter() {
        let criteria = FilterCriteria::new(500, vec![]);
        assert!(criteria.names.is_none());
    }

    #[test]
    fn test_default_keeps_everything() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.min_bytes, 0);
        assert!(criteria.names.is_none());
    }
}
