//! Directory loading: turns files on disk into `insert_resource` calls.
//!
//! Every regular file below the root whose name matches the glob is read,
//! and each of its lines is indexed with the file path as resource id.
//! Hidden and git-ignored files are included; this is a plain enumeration,
//! not a project-aware walk.

use std::fs;
use std::path::Path;

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use crate::engine::IndexEngine;
use crate::error::{IndexError, Result};
use crate::types::LoadSummary;

/// Glob that selects every file.
pub const MATCH_ALL_FILES: &str = "*.*";

/// Loads every file under `root` whose name matches `file_glob`.
///
/// `*.*` selects every file, dotted or not. Unreadable entries are logged and
/// skipped; only an inaccessible root or a malformed glob is an error.
pub fn load_directory(
    engine: &mut IndexEngine,
    root: &Path,
    file_glob: &str,
) -> Result<LoadSummary> {
    let metadata = fs::metadata(root).map_err(|source| IndexError::io(root, source))?;
    if !metadata.is_dir() {
        return Err(IndexError::InvalidInput(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let mut overrides = OverrideBuilder::new(root);
    overrides.add(effective_glob(file_glob))?;
    let overrides = overrides.build()?;

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .overrides(overrides)
        .sort_by_file_path(|a, b| a.cmp(b));

    let mut summary = LoadSummary::default();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                log::warn!("skipping unreadable entry under {}: {error}", root.display());
                summary.errors += 1;
                continue;
            }
        };
        if !entry.file_type().is_some_and(|kind| kind.is_file()) {
            continue;
        }

        match load_file(engine, entry.path()) {
            Ok(lines) => {
                summary.files += 1;
                summary.lines += lines;
            }
            Err(error) => {
                log::warn!("skipping {}: {error}", entry.path().display());
                summary.errors += 1;
            }
        }
    }

    if engine.debug() {
        let memory = engine.memory_usage();
        log::info!(
            "words inserted {} from {} files with memory usage of {memory} bytes",
            engine.total_insertions(),
            summary.files
        );
    }

    Ok(summary)
}

/// Indexes each line of one file under the file's path. Returns the line count.
pub fn load_file(engine: &mut IndexEngine, path: &Path) -> Result<usize> {
    let bytes = fs::read(path).map_err(|source| IndexError::io(path, source))?;
    let text = String::from_utf8_lossy(&bytes);
    let resource = path.display().to_string();

    let mut lines = 0;
    for line in text.lines() {
        engine.insert_resource(&resource, line);
        lines += 1;
    }
    Ok(lines)
}

fn effective_glob(file_glob: &str) -> &str {
    if file_glob == MATCH_ALL_FILES {
        "*"
    } else {
        file_glob
    }
}
