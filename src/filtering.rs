//! Tree filtering and search entry points.
//!
//! This module wraps the pure [`Tree::filter`] / [`Tree::find_named`]
//! transformations with the empty-result policy: a run that matches
//! nothing is an explicit error, never silent empty output.

use anyhow::{Result, bail};

use crate::summary::{FilterCriteria, Tree};

/// Filter a summary tree, rejecting empty results.
///
/// Returns the filtered copy of `tree`. The result is considered empty —
/// and reported as an error — in two cases:
///
/// - a name filter is present and no branch survived it, regardless of
///   the root's own size (an explicit name query that matches nothing
///   should say so rather than print a bare root line);
/// - no name filter is present, no child survived the size threshold,
///   and the root itself is below it.
///
/// A root at or above the threshold with no surviving children is not an
/// error: the root line alone is still a meaningful summary.
///
/// # Errors
///
/// Returns a "no paths matched" error under the conditions above.
pub fn filter_tree(tree: &Tree, criteria: &FilterCriteria) -> Result<Tree> {
    let filtered = tree.filter(criteria);

    if filtered.children.is_empty() {
        let empty = match &criteria.names {
            Some(_) => !filtered_root_matches(&filtered, criteria),
            None => filtered.size < criteria.min_bytes,
        };
        if empty {
            bail!("No paths matched the filter criteria");
        }
    }

    Ok(filtered)
}

/// Whether the filtered root itself satisfies the name filter.
///
/// A root whose own name is one of the targets is a legitimate sole
/// survivor of a name query.
fn filtered_root_matches(filtered: &Tree, criteria: &FilterCriteria) -> bool {
    criteria
        .names
        .as_ref()
        .is_some_and(|names| names.iter().any(|n| !filtered.find_named(n).is_empty()))
}

/// Find every directory named `name` in the size-filtered view of `tree`.
///
/// The tree is first pruned to subtrees of at least `min_bytes`, then
/// searched; matches are returned as owned subtrees in walk order (the
/// presenter sorts them).
///
/// # Errors
///
/// Returns a distinct error for each empty outcome: the name occurring
/// nowhere in the tree at all, or occurring only in branches the size
/// threshold removed.
pub fn search_tree(tree: &Tree, name: &str, min_bytes: u64) -> Result<Vec<Tree>> {
    let filtered = tree.filter(&FilterCriteria::from_min_bytes(min_bytes));
    let matches: Vec<Tree> = filtered.find_named(name).into_iter().cloned().collect();

    if matches.is_empty() {
        if tree.find_named(name).is_empty() {
            bail!(
                "No directories named '{name}' found under {}",
                tree.path.display()
            );
        }
        bail!("No paths matched the filter criteria");
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn node(name: &str, size: u64, children: Vec<Tree>) -> Tree {
        let mut tree = Tree::new(PathBuf::from("/data").join(name), size);
        for child in children {
            tree.add_child(child);
        }
        tree
    }

    #[test]
    fn test_filter_tree_keeps_qualifying_children() {
        let tree = node(
            "root",
            1000,
            vec![node("big", 600, vec![]), node("small", 50, vec![])],
        );

        let filtered = filter_tree(&tree, &FilterCriteria::from_min_bytes(100)).unwrap();
        assert_eq!(filtered.children.len(), 1);
        assert_eq!(filtered.children[0].name(), "big");
    }

    #[test]
    fn test_empty_result_below_threshold_is_an_error() {
        let tree = node("root", 90, vec![node("tiny", 40, vec![])]);

        let err = filter_tree(&tree, &FilterCriteria::from_min_bytes(100)).unwrap_err();
        assert!(err.to_string().contains("No paths matched"));
    }

    #[test]
    fn test_root_above_threshold_survives_alone() {
        // Many small children, none qualifying on its own; the root total
        // still clears the bar, so a root-only summary is printed.
        let tree = node(
            "root",
            900,
            vec![node("a", 300, vec![]), node("b", 300, vec![])],
        );

        let filtered = filter_tree(&tree, &FilterCriteria::from_min_bytes(500)).unwrap();
        assert!(filtered.children.is_empty());
        assert_eq!(filtered.size, 900);
    }

    #[test]
    fn test_name_filter_without_matches_is_an_error_despite_root_size() {
        // Root size far above the threshold must not mask an empty name query.
        let tree = node(
            "root",
            50_000_000,
            vec![node("src", 40_000_000, vec![]), node("docs", 10_000_000, vec![])],
        );

        let criteria = FilterCriteria::new(100, vec!["node_modules".to_string()]);
        let err = filter_tree(&tree, &criteria).unwrap_err();
        assert!(err.to_string().contains("No paths matched"));
    }

    #[test]
    fn test_name_filter_with_matches_succeeds() {
        let tree = node(
            "root",
            1000,
            vec![node("src", 600, vec![node("target", 500, vec![])])],
        );

        let criteria = FilterCriteria::new(100, vec!["target".to_string()]);
        let filtered = filter_tree(&tree, &criteria).unwrap();
        assert_eq!(filtered.children[0].children[0].name(), "target");
    }

    #[test]
    fn test_name_filter_matching_only_the_root_succeeds() {
        let tree = node("target", 1000, vec![node("tiny", 50, vec![])]);

        let criteria = FilterCriteria::new(100, vec!["target".to_string()]);
        let filtered = filter_tree(&tree, &criteria).unwrap();
        assert_eq!(filtered.name(), "target");
    }

    #[test]
    fn test_search_tree_returns_matches() {
        let tree = node(
            "root",
            1000,
            vec![
                node("target", 600, vec![]),
                node("other", 400, vec![node("target", 300, vec![])]),
            ],
        );

        let matches = search_tree(&tree, "target", 0).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].size, 600);
        assert_eq!(matches[1].size, 300);
    }

    #[test]
    fn test_search_tree_unknown_name_is_a_distinct_error() {
        let tree = node("root", 1000, vec![node("src", 600, vec![])]);

        let err = search_tree(&tree, "node_modules", 0).unwrap_err();
        assert!(err.to_string().contains("No directories named 'node_modules'"));
    }

    #[test]
    fn test_search_tree_matches_removed_by_threshold() {
        // The name exists, but only in a branch the size filter prunes.
        let tree = node("root", 1000, vec![node("target", 50, vec![])]);

        let err = search_tree(&tree, "target", 100).unwrap_err();
        assert!(err.to_string().contains("No paths matched"));
    }

    #[test]
    fn test_search_tree_applies_threshold_through_ancestors() {
        // A qualifying match buried under a too-small parent is unreachable:
        // pruning is top-down on each branch's own total.
        let tree = node(
            "root",
            1000,
            vec![node("thin", 90, vec![node("target", 80, vec![])])],
        );

        let err = search_tree(&tree, "target", 100).unwrap_err();
        assert!(err.to_string().contains("No paths matched"));
    }
}
