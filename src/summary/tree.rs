//! The summary tree: one node per directory with its aggregate size.
//!
//! A [`Tree`] is built once per invocation by the parser, filtered into a
//! derived tree, and then consumed by the presenter. Nodes exclusively own
//! their children; there are no parent back-pointers.

use std::path::PathBuf;

use crate::summary::FilterCriteria;

/// One directory and its recursively aggregated size.
///
/// `size` covers every regular file transitively contained under `path`,
/// excluding anything reachable only through a symlinked directory.
/// `children` are stored in directory-walk order; they are only sorted at
/// presentation time.
#[derive(Clone, Debug)]
pub struct Tree {
    /// Absolute path of the directory this node represents.
    pub path: PathBuf,

    /// Aggregate size in bytes of the subtree rooted here.
    ///
    /// Set exactly once, when the parser finishes aggregating this node.
    /// Filtering copies the value unchanged; it never recomputes sizes.
    pub size: u64,

    /// Child subtrees, each fully aggregated before being attached.
    pub children: Vec<Tree>,
}

impl Tree {
    /// Create a node with no children.
    #[must_use]
    pub const fn new(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            size,
            children: Vec::new(),
        }
    }

    /// Attach a fully-built child subtree.
    pub fn add_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// The final component of this node's path.
    ///
    /// Falls back to the full path for roots without a final component
    /// (e.g. `/`).
    #[must_use]
    pub fn name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }

    /// Produce a filtered copy of this tree.
    ///
    /// The result shares the root's path and size but keeps only children
    /// whose aggregate size meets `criteria.min_bytes`, applied recursively.
    /// A child below the threshold is dropped along with its entire subtree,
    /// even if a deep descendant would qualify on its own — pruning only ever
    /// looks at a node's own total.
    ///
    /// When `criteria.names` is present, a branch survives only if it or
    /// some descendant's directory name matches one of the entries. A node
    /// whose own name matches is kept verbatim: no further pruning is
    /// applied beneath it.
    ///
    /// This is a pure transformation over the in-memory tree; no I/O is
    /// performed and `self` is left untouched.
    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> Self {
        let mut filtered = Self::new(self.path.clone(), self.size);

        for child in &self.children {
            if child.size < criteria.min_bytes {
                continue;
            }

            match &criteria.names {
                None => filtered.add_child(child.filter(criteria)),
                Some(names) if child.matches_name(names) => {
                    // Name match short-circuits pruning below this node.
                    filtered.add_child(child.clone());
                }
                Some(names) if child.contains_named(names) => {
                    filtered.add_child(child.filter(criteria));
                }
                Some(_) => {}
            }
        }

        filtered
    }

    /// Collect every node in the tree whose directory name equals `name`.
    ///
    /// Matching is exact and case-sensitive. Matches are not deduplicated:
    /// a matched node's descendants are still searched, so nested
    /// directories with the same name are all collected independently.
    #[must_use]
    pub fn find_named(&self, name: &str) -> Vec<&Self> {
        let mut matches = Vec::new();
        self.collect_named(name, &mut matches);
        matches
    }

    fn collect_named<'a>(&'a self, name: &str, matches: &mut Vec<&'a Self>) {
        if self.path.file_name().and_then(|n| n.to_str()) == Some(name) {
            matches.push(self);
        }

        for child in &self.children {
            child.collect_named(name, matches);
        }
    }

    /// Whether this node's own directory name is one of `names`.
    fn matches_name(&self, names: &[String]) -> bool {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| names.iter().any(|name| name == n))
    }

    /// Whether this node or any descendant matches one of `names`.
    fn contains_named(&self, names: &[String]) -> bool {
        self.matches_name(names) || self.children.iter().any(|c| c.contains_named(names))
    }
}
