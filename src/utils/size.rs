//! Size parsing and formatting utilities.
//!
//! This module converts between raw byte counts and human-readable size
//! strings such as `"  1.0 KB"` or `"10MB"`. All units are decimal
//! (1000-based): B, KB, MB, GB, TB, PB.

use std::sync::LazyLock;

use anyhow::{Result, bail};
use regex::Regex;

/// Supported units, smallest first. Each step is a factor of 1000.
const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB"];

/// Matches a bare byte count (digits only).
static BYTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a literal
    Regex::new(r"^[0-9]+$").unwrap()
});

/// Matches `<digits>[<space>]<unit>`, unit case-insensitive.
static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a literal
    Regex::new(r"(?i)^([0-9]+) ?(B|KB|MB|GB|TB|PB)$").unwrap()
});

/// Number of bytes represented by one step of the given unit index.
///
/// Index 0 is `B` (10^0), index 1 is `KB` (10^3), and so on.
fn unit_scale(index: usize) -> u64 {
    10u64.pow(3 * u32::try_from(index).unwrap_or(0))
}

/// Format a byte count as a human-readable size string.
///
/// Picks the largest unit such that the scaled value stays below 1000,
/// then renders it with one decimal place, right-justified to width 5,
/// followed by a space and the unit name.
///
/// # Errors
///
/// Returns an error when no unit is large enough, i.e. for values of
/// 10^18 bytes and above.
///
/// # Examples
///
/// ```
/// # use dirsum::utils::format_size;
/// assert_eq!(format_size(0).unwrap(), "  0.0 B");
/// assert_eq!(format_size(1000).unwrap(), "  1.0 KB");
/// assert_eq!(format_size(1_000_000_000).unwrap(), "  1.0 GB");
/// ```
pub fn format_size(n_bytes: u64) -> Result<String> {
    for (index, unit) in UNITS.iter().enumerate() {
        let scale = unit_scale(index);
        if n_bytes < scale.saturating_mul(1000) {
            #[allow(clippy::cast_precision_loss)]
            let value = n_bytes as f64 / scale as f64;
            return Ok(format!("{value:>5.1} {unit}"));
        }
    }

    bail!("Bytes could not be converted to a size: {n_bytes}")
}

/// Parse a human-readable size string into bytes.
///
/// Accepts either a bare integer (interpreted as bytes) or an integer
/// followed by an optional single space and a unit suffix from
/// {B, KB, MB, GB, TB, PB}, case-insensitive.
///
/// # Errors
///
/// Returns an error on malformed input, an unknown unit, or overflow.
///
/// # Examples
///
/// ```
/// # use dirsum::utils::parse_size;
/// assert_eq!(parse_size("42").unwrap(), 42);
/// assert_eq!(parse_size("10MB").unwrap(), 10_000_000);
/// assert_eq!(parse_size("1 GB").unwrap(), 1_000_000_000);
/// ```
pub fn parse_size(size: &str) -> Result<u64> {
    // Already bytes
    if BYTES_RE.is_match(size) {
        return size
            .parse()
            .map_err(|e| anyhow::anyhow!("Size could not be converted to bytes: {size}: {e}"));
    }

    // With units
    let Some(captures) = UNIT_RE.captures(size) else {
        bail!("Size could not be converted to bytes: {size}");
    };

    let number: u64 = captures[1]
        .parse()
        .map_err(|e| anyhow::anyhow!("Size could not be converted to bytes: {size}: {e}"))?;
    let unit = captures[2].to_uppercase();

    let index = UNITS
        .iter()
        .position(|u| *u == unit)
        .ok_or_else(|| anyhow::anyhow!("Unknown size unit: {unit}"))?;

    number
        .checked_mul(unit_scale(index))
        .ok_or_else(|| anyhow::anyhow!("Size value overflow: {size}"))
}
