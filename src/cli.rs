//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their
//! validation using the [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI arguments can override
//! (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dirsum::config::FileConfig;

/// Fallback size threshold when neither the CLI nor the config file sets one.
const DEFAULT_MIN_SIZE: &str = "10MB";

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a directory tree, largest entries first
    Tree {
        /// Root directory to summarize
        root: PathBuf,

        /// Hide directories smaller than this (e.g. "500MB", "2GB", plain bytes)
        ///
        /// A directory below the threshold is hidden along with everything
        /// under it, even when a deeper subdirectory would qualify on its own.
        #[arg(short = 's', long)]
        size: Option<String>,

        /// Print absolute paths instead of directory names
        #[arg(short = 'a', long)]
        absolute: bool,

        /// Only show branches containing a directory with this exact name
        ///
        /// Can be specified multiple times; a branch survives if it leads to
        /// any of the given names.
        #[arg(short = 'n', long, action = clap::ArgAction::Append)]
        name: Vec<String>,
    },

    /// Find every directory with an exact name and list them by size
    Search {
        /// Root directory to search under
        root: PathBuf,

        /// Exact directory name to look for (case-sensitive)
        dir_name: String,

        /// Ignore matches smaller than this (e.g. "500MB", "2GB", plain bytes)
        #[arg(short = 's', long)]
        size: Option<String>,
    },

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file
/// values act as defaults when the corresponding CLI argument is not
/// provided.
#[derive(Parser)]
#[command(name = "dirsum")]
#[command(about = "Summarize disk usage of a directory tree, largest first")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub subcommand: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl Cli {
    /// Resolve the minimum-size threshold for a subcommand's `--size` value.
    ///
    /// Priority: CLI argument > config file > `"10MB"`.
    #[must_use]
    pub fn min_size(size: Option<&String>, config: &FileConfig) -> String {
        size.cloned()
            .or_else(|| config.filtering.min_size.clone())
            .unwrap_or_else(|| DEFAULT_MIN_SIZE.to_string())
    }

    /// Resolve the absolute-paths display flag.
    ///
    /// The CLI flag (when set) takes priority, then the config file value,
    /// then `false`.
    #[must_use]
    pub fn absolute(absolute: bool, config: &FileConfig) -> bool {
        absolute || config.display.absolute.unwrap_or(false)
    }

    /// Resolve whether output should be colorized.
    ///
    /// `--no-color` (when set) takes priority, then the config file value,
    /// then `true`.
    #[must_use]
    pub fn color(&self, config: &FileConfig) -> bool {
        !self.no_color && config.display.color.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use dirsum::config::file::{FileDisplayConfig, FileFilterConfig};

    #[test]
    fn test_tree_defaults() {
        let args = Cli::parse_from(["dirsum", "tree", "/data"]);
        let config = FileConfig::default();

        let Commands::Tree {
            root,
            size,
            absolute,
            name,
        } = args.subcommand
        else {
            panic!("expected tree subcommand");
        };

        assert_eq!(root, PathBuf::from("/data"));
        assert!(name.is_empty());
        assert_eq!(Cli::min_size(size.as_ref(), &config), "10MB");
        assert!(!Cli::absolute(absolute, &config));
    }

    #[test]
    fn test_tree_with_all_options() {
        let args = Cli::parse_from([
            "dirsum", "tree", "/data", "--size", "500MB", "--absolute", "--name", "target",
            "--name", "node_modules",
        ]);
        let config = FileConfig::default();

        let Commands::Tree {
            size,
            absolute,
            name,
            ..
        } = args.subcommand
        else {
            panic!("expected tree subcommand");
        };

        assert_eq!(Cli::min_size(size.as_ref(), &config), "500MB");
        assert!(Cli::absolute(absolute, &config));
        assert_eq!(name, vec!["target", "node_modules"]);
    }

    #[test]
    fn test_search_arguments() {
        let args = Cli::parse_from(["dirsum", "search", "/data", "target", "-s", "2GB"]);

        let Commands::Search {
            root,
            dir_name,
            size,
        } = args.subcommand
        else {
            panic!("expected search subcommand");
        };

        assert_eq!(root, PathBuf::from("/data"));
        assert_eq!(dir_name, "target");
        assert_eq!(size.as_deref(), Some("2GB"));
    }

    #[test]
    fn test_config_subcommands_parse() {
        let args = Cli::parse_from(["dirsum", "config", "path"]);
        assert!(matches!(
            args.subcommand,
            Commands::Config {
                command: ConfigCommand::Path
            }
        ));

        let args = Cli::parse_from(["dirsum", "config", "show"]);
        assert!(matches!(
            args.subcommand,
            Commands::Config {
                command: ConfigCommand::Show
            }
        ));

        let args = Cli::parse_from(["dirsum", "config", "init"]);
        assert!(matches!(
            args.subcommand,
            Commands::Config {
                command: ConfigCommand::Init
            }
        ));
    }

    #[test]
    fn test_config_min_size_used_when_cli_absent() {
        let config = FileConfig {
            filtering: FileFilterConfig {
                min_size: Some("50MB".to_string()),
            },
            ..FileConfig::default()
        };

        assert_eq!(Cli::min_size(None, &config), "50MB");
        let cli_value = "1GB".to_string();
        assert_eq!(Cli::min_size(Some(&cli_value), &config), "1GB");
    }

    #[test]
    fn test_config_absolute_used_when_cli_absent() {
        let config = FileConfig {
            display: FileDisplayConfig {
                absolute: Some(true),
                color: None,
            },
            ..FileConfig::default()
        };

        assert!(Cli::absolute(false, &config));
        assert!(Cli::absolute(true, &FileConfig::default()));
        assert!(!Cli::absolute(false, &FileConfig::default()));
    }

    #[test]
    fn test_color_resolution() {
        let args = Cli::parse_from(["dirsum", "tree", "/data"]);
        assert!(args.color(&FileConfig::default()));

        let no_color = Cli::parse_from(["dirsum", "tree", "/data", "--no-color"]);
        assert!(!no_color.color(&FileConfig::default()));

        let config_off = FileConfig {
            display: FileDisplayConfig {
                absolute: None,
                color: Some(false),
            },
            ..FileConfig::default()
        };
        assert!(!args.color(&config_off));

        // --no-color wins even when the config enables color.
        let config_on = FileConfig {
            display: FileDisplayConfig {
                absolute: None,
                color: Some(true),
            },
            ..FileConfig::default()
        };
        assert!(!no_color.color(&config_on));
    }

    #[test]
    fn test_no_color_is_global() {
        let args = Cli::parse_from(["dirsum", "search", "/data", "target", "--no-color"]);
        assert!(args.no_color);
    }
}
