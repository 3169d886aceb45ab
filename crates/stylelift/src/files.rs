use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Extensions of the files linted when a directory is walked
pub const EXTENSIONS: [&str; 6] = ["js", "jsx", "mjs", "cjs", "ts", "tsx"];

const SKIPPED_DIRECTORIES: [&str; 1] = ["node_modules"];

/// Expand `paths` into the sorted, de-duplicated list of files to lint.
///
/// Files named explicitly are always linted. Directories are walked recursively, keeping files
/// with one of [`EXTENSIONS`] and never descending into `node_modules`.
pub fn discover(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
  let mut files = BTreeSet::new();

  for path in paths {
    if path.is_file() {
      files.insert(path.clone());
      continue;
    }

    if !path.is_dir() {
      anyhow::bail!("No such file or directory: {}", path.display());
    }

    let walker = jwalk::WalkDir::new(path).process_read_dir(|_depth, _path, _state, children| {
      children.retain(|entry| {
        entry.as_ref().map_or(true, |entry| {
          !SKIPPED_DIRECTORIES
            .iter()
            .any(|skipped| entry.file_name() == *skipped)
        })
      });
    });

    for entry in walker {
      let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
      let entry_path = entry.path();

      if entry.file_type().is_file() && has_lintable_extension(&entry_path) {
        files.insert(entry_path);
      }
    }
  }

  tracing::debug!(count = files.len(), "Discovered files");

  Ok(files.into_iter().collect())
}

fn has_lintable_extension(path: &Path) -> bool {
  path
    .extension()
    .and_then(|extension| extension.to_str())
    .is_some_and(|extension| EXTENSIONS.contains(&extension))
}
