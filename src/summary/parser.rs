//! Directory walking and summary tree construction.
//!
//! This module builds a [`Tree`] by recursively walking a root directory,
//! accumulating sizes bottom-up. The walk is single-threaded, depth-first
//! and fail-fast: the first filesystem error aborts the whole build.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};

use crate::paths::{PathKind, probe};
use crate::summary::Tree;

/// Recursive directory summarizer.
///
/// `Parser` walks a directory tree and produces a fully-aggregated
/// [`Tree`]. Every node's size is the sum of its direct file sizes and the
/// sizes reported by its (already complete) child subtrees. Symlinks are
/// never traversed, which keeps the tree acyclic regardless of on-disk
/// symlink cycles.
pub struct Parser {
    /// When `true`, suppresses the progress spinner.
    quiet: bool,
}

impl Parser {
    /// Create a parser with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Enable or disable quiet mode (suppresses the progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Walk `root` and build its summary tree.
    ///
    /// The root must be an existing directory; it is validated up front,
    /// before the walk starts. A symlinked root yields a zero-size,
    /// childless tree.
    ///
    /// # Errors
    ///
    /// Returns an error when the root is missing or not a directory, and on
    /// any filesystem error during the walk: an unreadable directory, or a
    /// file that vanishes between listing and stat. Errors are fatal — no
    /// entry is ever silently skipped or retried.
    ///
    /// # Panics
    ///
    /// May panic if the progress bar template string is invalid, which
    /// cannot happen as the template is hardcoded.
    pub fn parse(&self, root: &Path) -> Result<Tree> {
        match probe(root)? {
            PathKind::NotFound => bail!("No such directory: {}", root.display()),
            PathKind::File => bail!("Not a directory: {}", root.display()),
            PathKind::Directory => {}
        }

        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("Scanning...");
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb
        };

        let mut visited = 0u64;
        let tree = Self::build(root, &progress, &mut visited);
        progress.finish_and_clear();
        tree
    }

    /// Recursively aggregate one directory.
    ///
    /// Children are processed in listing order; a child node is only
    /// attached once its own subtree is fully aggregated.
    fn build(path: &Path, progress: &ProgressBar, visited: &mut u64) -> Result<Tree> {
        let metadata = fs::symlink_metadata(path)
            .with_context(|| format!("Failed to stat {}", path.display()))?;

        // Symlinked directories are zero-size leaves; never followed.
        if metadata.file_type().is_symlink() {
            return Ok(Tree::new(path.to_path_buf(), 0));
        }

        *visited += 1;
        progress.set_message(format!("Scanning... {visited} directories"));

        let mut tree = Tree::new(path.to_path_buf(), 0);
        let mut files_size = 0u64;
        let mut subdirs_size = 0u64;

        let entries = fs::read_dir(path)
            .with_context(|| format!("Failed to read directory {}", path.display()))?;

        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read an entry of {}", path.display()))?;
            let file_type = entry
                .file_type()
                .with_context(|| format!("Failed to stat {}", entry.path().display()))?;

            // Symlinks contribute nothing, whether they point at files or
            // directories; skipping them is the cycle-prevention mechanism.
            if file_type.is_symlink() {
                continue;
            }

            if file_type.is_file() {
                // A file vanishing between listing and stat is a fatal
                // error, not a zero-size entry.
                let file_metadata = entry
                    .metadata()
                    .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
                files_size += file_metadata.len();
            } else if file_type.is_dir() {
                let child = Self::build(&entry.path(), progress, visited)?;
                subdirs_size += child.size;
                tree.add_child(child);
            }
            // Other kinds (sockets, fifos, devices) contribute nothing.
        }

        tree.size = files_size + subdirs_size;
        Ok(tree)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
