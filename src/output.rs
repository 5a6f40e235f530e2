//! Rendering of summary trees as indented, size-annotated listings.
//!
//! The printer is the only place that knows about terminal coloring; the
//! tree types themselves have no output concerns. Output goes to a
//! pluggable [`Write`] sink so tests can capture it in a buffer.

use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::summary::Tree;
use crate::utils::format_size;

/// Renders [`Tree`] values to a sink, one line per node.
///
/// Each line is indented two spaces per depth level and shows the node's
/// formatted size followed by its directory name (or absolute path when
/// `absolute` is set). Children print in descending size order; the sort is
/// stable, so equal-size siblings keep their directory-walk order.
pub struct TreePrinter<'a> {
    /// Where rendered lines are written.
    sink: &'a mut dyn Write,

    /// Print absolute paths instead of bare directory names.
    absolute: bool,

    /// Apply ANSI colors (blue size, green path).
    color: bool,
}

impl<'a> TreePrinter<'a> {
    /// Create a printer writing to `sink`.
    #[must_use]
    pub fn new(sink: &'a mut dyn Write, absolute: bool, color: bool) -> Self {
        Self {
            sink,
            absolute,
            color,
        }
    }

    /// Print `tree` and all of its descendants.
    ///
    /// # Errors
    ///
    /// Returns an error if a node's size cannot be formatted or the sink
    /// rejects a write.
    pub fn print(&mut self, tree: &Tree) -> Result<()> {
        self.print_node(tree, 0, true)
    }

    /// Print a flat list of matched nodes, largest first.
    ///
    /// Each match is rendered as a single absolute-path line regardless of
    /// the printer's `absolute` setting; matches are not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns an error if a node's size cannot be formatted or the sink
    /// rejects a write.
    pub fn print_matches(&mut self, matches: &[&Tree]) -> Result<()> {
        let mut sorted = matches.to_vec();
        sorted.sort_by(|a, b| b.size.cmp(&a.size));

        let absolute = std::mem::replace(&mut self.absolute, true);
        for tree in sorted {
            self.print_node(tree, 0, false)?;
        }
        self.absolute = absolute;

        Ok(())
    }

    /// Emit one line for `tree`, then recurse into children when asked.
    fn print_node(&mut self, tree: &Tree, depth: usize, recursive: bool) -> Result<()> {
        let formatted_size = format_size(tree.size)?;
        let indent = "  ".repeat(depth);
        let directory = if self.absolute {
            tree.path.display().to_string()
        } else {
            tree.name()
        };

        let line = if self.color {
            format!(
                "{indent} |-> {} > {}",
                formatted_size.blue(),
                directory.green()
            )
        } else {
            format!("{indent} |-> {formatted_size} > {directory}")
        };
        writeln!(self.sink, "{line}").context("Failed to write to the output sink")?;

        if recursive {
            let mut children: Vec<&Tree> = tree.children.iter().collect();
            children.sort_by(|a, b| b.size.cmp(&a.size));

            for child in children {
                self.print_node(child, depth + 1, true)?;
            }
        }

        Ok(())
    }
}
