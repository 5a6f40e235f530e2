//! Filesystem path wrappers for reorganizing files and directories.
//!
//! These helpers exist for callers that want to act on what a summary
//! shows them — rename, move, copy, or delete the directories it surfaced.
//! The summarization engine itself never calls them; it only shares the
//! [`probe`] classification.
//!
//! Every operation validates its preconditions (source exists, destination
//! free, name actually changes) and surfaces a distinct error per violated
//! condition. Nothing is retried.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use walkdir::WalkDir;

/// Classification of a filesystem path, from a single probe.
///
/// Symlinks are followed: a symlink to a directory classifies as
/// `Directory`, a broken symlink as `NotFound`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PathKind {
    /// Nothing exists at the path.
    NotFound,

    /// The path exists but is not a directory.
    File,

    /// The path is a directory.
    Directory,
}

/// Classify a path with one filesystem call.
///
/// # Errors
///
/// Returns an error for any I/O failure other than the path not existing
/// (e.g. permission denied on a parent component).
pub fn probe(path: &Path) -> Result<PathKind> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(PathKind::Directory),
        Ok(_) => Ok(PathKind::File),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathKind::NotFound),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to probe {}", path.display()))
        }
    }
}

/// A directory path with reorganization operations.
#[derive(Clone, Debug)]
pub struct Dir {
    path: PathBuf,
}

impl Dir {
    /// Wrap a directory path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path exists but is not a directory.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if probe(&path)? == PathKind::File {
            bail!(
                "Tried to create Dir from non-directory path: {}",
                path.display()
            );
        }
        Ok(Self { path })
    }

    /// The wrapped path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory's name (final path component).
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned())
    }

    /// Whether the directory currently exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// The parent directory.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.path.parent().map(|p| Self {
            path: p.to_path_buf(),
        })
    }

    /// Rename the directory in place.
    ///
    /// # Errors
    ///
    /// Returns an error when the new name equals the current one (unless
    /// `same_name_ok`), when the directory does not exist, or when the
    /// rename itself fails.
    pub fn rename(&mut self, new_name: &str, same_name_ok: bool) -> Result<()> {
        if new_name == self.name() && !same_name_ok {
            bail!("No change made to directory name: {}", self.name());
        }
        if !self.exists() {
            bail!("Directory does not exist: {}", self.path.display());
        }

        let new_path = self
            .path
            .parent()
            .map_or_else(|| PathBuf::from(new_name), |p| p.join(new_name));
        fs::rename(&self.path, &new_path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                self.path.display(),
                new_path.display()
            )
        })?;

        self.path = new_path;
        Ok(())
    }

    /// Rename the directory by applying a regex substitution to its name.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid pattern, and under the same
    /// conditions as [`Dir::rename`].
    pub fn rename_regex(
        &mut self,
        pattern: &str,
        replacement: &str,
        same_name_ok: bool,
    ) -> Result<()> {
        let re = Regex::new(pattern)
            .with_context(|| format!("Invalid rename pattern: {pattern}"))?;
        let new_name = re.replace_all(&self.name(), replacement).into_owned();
        self.rename(&new_name, same_name_ok)
    }

    /// Move the directory into another directory, keeping its name.
    ///
    /// # Errors
    ///
    /// Returns an error when the source is missing, the destination slot is
    /// already occupied, or the move fails.
    pub fn move_into(&mut self, dir: &Self) -> Result<()> {
        if !self.exists() {
            bail!("Directory does not exist: {}", self.path.display());
        }

        let dest = dir.path.join(self.name());
        if probe(&dest)? != PathKind::NotFound {
            bail!("Destination already exists: {}", dest.display());
        }

        fs::rename(&self.path, &dest).with_context(|| {
            format!(
                "Failed to move {} into {}",
                self.path.display(),
                dir.path.display()
            )
        })?;

        self.path = dest;
        Ok(())
    }

    /// Copy the directory tree to a new path.
    ///
    /// # Errors
    ///
    /// Returns an error when the source is missing, the destination already
    /// exists, or any file in the tree fails to copy.
    pub fn copy_to(&self, dest: &Path) -> Result<Self> {
        if !self.exists() {
            bail!("Directory does not exist: {}", self.path.display());
        }
        if probe(dest)? != PathKind::NotFound {
            bail!("Destination already exists: {}", dest.display());
        }

        copy_dir_recursive(&self.path, dest)?;
        Ok(Self {
            path: dest.to_path_buf(),
        })
    }

    /// Copy the directory tree into another directory, keeping its name.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Dir::copy_to`].
    pub fn copy_into(&self, dir: &Self) -> Result<Self> {
        self.copy_to(&dir.path.join(self.name()))
    }

    /// Delete the directory and everything under it.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory is missing (unless `missing_ok`)
    /// or the removal fails.
    pub fn delete(&self, missing_ok: bool) -> Result<()> {
        if !self.exists() {
            if missing_ok {
                return Ok(());
            }
            bail!("No directory at {}", self.path.display());
        }

        fs::remove_dir_all(&self.path)
            .with_context(|| format!("Failed to delete {}", self.path.display()))
    }

    /// Create the directory on disk, including missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn make(&self) -> Result<()> {
        fs::create_dir_all(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))
    }
}

/// A file path with reorganization operations.
#[derive(Clone, Debug)]
pub struct File {
    path: PathBuf,
}

impl File {
    /// Wrap a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path exists but is a directory.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if probe(&path)? == PathKind::Directory {
            bail!("Tried to create File from non-file path: {}", path.display());
        }
        Ok(Self { path })
    }

    /// The wrapped path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file's name (final path component).
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned())
    }

    /// The file's name without its extension.
    #[must_use]
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned())
    }

    /// The file's extension, without the leading dot.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
    }

    /// Whether the file currently exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// The containing directory.
    #[must_use]
    pub fn parent(&self) -> Option<Dir> {
        self.path.parent().map(|p| Dir {
            path: p.to_path_buf(),
        })
    }

    /// Rename the file in place.
    ///
    /// # Errors
    ///
    /// Returns an error when the new name equals the current one (unless
    /// `same_name_ok`), when the file does not exist, or when the rename
    /// itself fails.
    pub fn rename(&mut self, new_name: &str, same_name_ok: bool) -> Result<()> {
        if new_name == self.name() && !same_name_ok {
            bail!("No change made to file name: {}", self.name());
        }
        if !self.exists() {
            bail!("File does not exist: {}", self.path.display());
        }

        let new_path = self
            .path
            .parent()
            .map_or_else(|| PathBuf::from(new_name), |p| p.join(new_name));
        fs::rename(&self.path, &new_path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                self.path.display(),
                new_path.display()
            )
        })?;

        self.path = new_path;
        Ok(())
    }

    /// Rename the file by applying a regex substitution to its name.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid pattern, and under the same
    /// conditions as [`File::rename`].
    pub fn rename_regex(
        &mut self,
        pattern: &str,
        replacement: &str,
        same_name_ok: bool,
    ) -> Result<()> {
        let re = Regex::new(pattern)
            .with_context(|| format!("Invalid rename pattern: {pattern}"))?;
        let new_name = re.replace_all(&self.name(), replacement).into_owned();
        self.rename(&new_name, same_name_ok)
    }

    /// Move the file into a directory, keeping its name.
    ///
    /// # Errors
    ///
    /// Returns an error when the source is missing, the destination slot is
    /// already occupied, or the move fails.
    pub fn move_into(&mut self, dir: &Dir) -> Result<()> {
        if !self.exists() {
            bail!("File does not exist: {}", self.path.display());
        }

        let dest = dir.path().join(self.name());
        if probe(&dest)? != PathKind::NotFound {
            bail!("Destination already exists: {}", dest.display());
        }

        fs::rename(&self.path, &dest).with_context(|| {
            format!(
                "Failed to move {} into {}",
                self.path.display(),
                dir.path().display()
            )
        })?;

        self.path = dest;
        Ok(())
    }

    /// Copy the file to a new path.
    ///
    /// # Errors
    ///
    /// Returns an error when the source is missing, when the destination
    /// exists and `overwrite` is not set, or when the copy fails.
    pub fn copy_to(&self, dest: &Path, overwrite: bool) -> Result<Self> {
        if !self.exists() {
            bail!("File does not exist: {}", self.path.display());
        }
        if !overwrite && probe(dest)? != PathKind::NotFound {
            bail!("Destination already exists: {}", dest.display());
        }

        fs::copy(&self.path, dest).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                self.path.display(),
                dest.display()
            )
        })?;

        Ok(Self {
            path: dest.to_path_buf(),
        })
    }

    /// Copy the file into a directory, keeping its name.
    ///
    /// # Errors
    ///
    /// Same conditions as [`File::copy_to`].
    pub fn copy_into(&self, dir: &Dir, overwrite: bool) -> Result<Self> {
        self.copy_to(&dir.path().join(self.name()), overwrite)
    }

    /// Delete the file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is missing (unless `missing_ok`) or
    /// the removal fails.
    pub fn delete(&self, missing_ok: bool) -> Result<()> {
        if !self.exists() {
            if missing_ok {
                return Ok(());
            }
            bail!("No file at {}", self.path.display());
        }

        fs::remove_file(&self.path)
            .with_context(|| format!("Failed to delete {}", self.path.display()))
    }
}

/// Copy a directory tree, file by file. Symlinks are skipped.
fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry =
            entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("Failed to relativize {}", entry.path().display()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }

    Ok(())
}
