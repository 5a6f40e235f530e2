//! # dirsum
//!
//! A CLI tool for summarizing the disk usage of a directory tree, largest
//! entries first.
//!
//! The tool walks a root directory once, aggregates sizes bottom-up into an
//! in-memory tree, then either prints the tree (pruned to the entries worth
//! looking at) or lists every directory with a given name sorted by size.
//!
//! ## Features
//!
//! - Recursive size aggregation with symlink-safe traversal
//! - Size-threshold and name filtering without re-walking the disk
//! - Exact-name search across the whole tree
//! - Human-readable sizes and colorized output
//! - Persistent configuration via `~/.config/dirsum/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Summarize a directory, hiding anything under 10MB
//! dirsum tree ~/Projects
//!
//! # Raise the threshold and show absolute paths
//! dirsum tree ~/Projects --size 500MB --absolute
//!
//! # Find every node_modules and rank them by size
//! dirsum search ~/Projects node_modules
//! ```

mod cli;

use std::io;
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{Context, Result, bail};
use clap::Parser as ClapParser;
use colored::Colorize;
use dirsum::{
    config::FileConfig,
    filtering::{filter_tree, search_tree},
    output::TreePrinter,
    summary::{FilterCriteria, Parser, Tree},
    utils::parse_size,
};

use cli::{Cli, Commands, ConfigCommand};

/// Entry point for the dirsum application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and
/// printing any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors from argument resolution, the directory walk, filtering,
/// or writing to stdout.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    match &args.subcommand {
        Commands::Config { command } => handle_config_command(command),
        Commands::Tree {
            root,
            size,
            absolute,
            name,
        } => {
            let file_config = load_config();
            let min_bytes = resolve_min_bytes(size.as_ref(), &file_config)?;
            let absolute = Cli::absolute(*absolute, &file_config);
            run_tree(root, min_bytes, absolute, name, args.color(&file_config))
        }
        Commands::Search {
            root,
            dir_name,
            size,
        } => {
            let file_config = load_config();
            let min_bytes = resolve_min_bytes(size.as_ref(), &file_config)?;
            run_search(root, dir_name, min_bytes, args.color(&file_config))
        }
    }
}

/// Summarize `root` and print its filtered tree.
fn run_tree(
    root: &Path,
    min_bytes: u64,
    absolute: bool,
    names: &[String],
    color: bool,
) -> Result<()> {
    let root = resolve_root(root)?;
    let tree = Parser::new().parse(&root)?;

    let criteria = FilterCriteria::new(min_bytes, names.to_vec());
    let filtered = filter_tree(&tree, &criteria)?;

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    TreePrinter::new(&mut lock, absolute, color).print(&filtered)
}

/// Find every directory named `dir_name` under `root` and list them by size.
fn run_search(root: &Path, dir_name: &str, min_bytes: u64, color: bool) -> Result<()> {
    let root = resolve_root(root)?;
    let tree = Parser::new().parse(&root)?;

    let matches = search_tree(&tree, dir_name, min_bytes)?;
    let matches: Vec<&Tree> = matches.iter().collect();

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    TreePrinter::new(&mut lock, false, color).print_matches(&matches)
}

/// Turn a root argument into an absolute path without resolving symlinks.
fn resolve_root(root: &Path) -> Result<PathBuf> {
    std::path::absolute(root)
        .with_context(|| format!("Failed to resolve path {}", root.display()))
}

/// Resolve and parse the layered minimum-size threshold.
fn resolve_min_bytes(size: Option<&String>, config: &FileConfig) -> Result<u64> {
    parse_size(&Cli::min_size(size, config))
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# dirsum configuration
# All values shown are their defaults. Uncomment and change as needed.

[filtering]
# Hide directories smaller than this (e.g. "500MB", "2GB", plain bytes)
# min_size = "10MB"

[display]
# Print absolute paths instead of directory names
# absolute = false

# Colorize output
# color = true
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    format!(
        "\
[filtering]
min_size  = {min_size}

[display]
absolute  = {absolute}
color     = {color}",
        min_size = show_str(config.filtering.min_size.as_deref(), "10MB"),
        absolute = show_bool(config.display.absolute, false),
        color = show_bool(config.display.color, true),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}
