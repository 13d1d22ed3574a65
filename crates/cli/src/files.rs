// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File and line helpers for test fixtures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from pattern-based file lookup
#[derive(Debug, Error)]
pub enum FilesError {
    #[error("invalid glob pattern '{pattern}': {error}")]
    InvalidPattern { pattern: String, error: String },

    #[error("failed to read matched path: {0}")]
    Glob(#[from] glob::GlobError),
}

/// All lines of a file, without line terminators
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_string)
        .collect())
}

/// Number of lines in a file
pub fn count_lines(path: &Path) -> io::Result<usize> {
    Ok(fs::read_to_string(path)?.lines().count())
}

/// Whole file as text
pub fn file_to_string(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Check if `path` is a regular file, without following symlinks
pub fn path_is_file(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_file())
        .unwrap_or(false)
}

/// Check if every path exists
pub fn paths_exist<I, P>(paths: I) -> bool
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().all(|p| p.as_ref().exists())
}

/// Regular files directly in `start`, or in its whole tree when `recursive`.
///
/// Results are sorted. A `start` that is not a directory yields no files.
pub fn files_in(start: &Path, recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if start.is_dir() {
        collect_files(start, recursive, &mut files)?;
    }
    files.sort();
    Ok(files)
}

fn collect_files(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_file() {
            files.push(entry.path());
        } else if recursive && file_type.is_dir() {
            collect_files(&entry.path(), recursive, files)?;
        }
    }
    Ok(())
}

/// Regular files matching a glob pattern, sorted
pub fn files_matching(pattern: &str) -> Result<Vec<PathBuf>, FilesError> {
    let paths = glob::glob(pattern).map_err(|e| FilesError::InvalidPattern {
        pattern: pattern.to_string(),
        error: e.to_string(),
    })?;

    let mut files = Vec::new();
    for path in paths {
        let path = path?;
        if path_is_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Copy `src` to `dst`, returning the number of bytes copied
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<u64> {
    fs::copy(src, dst)
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
