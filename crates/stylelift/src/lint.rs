use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use stylelift_core::{apply_fixes, Diagnostic};
use stylelift_no_inline_styles::lint_unit;
use stylelift_swc_runner::SourceUnit;

/// The diagnostics of one file, as found before any fix was applied
#[derive(Debug, Serialize)]
pub struct FileReport {
  pub path: PathBuf,
  pub diagnostics: Vec<Diagnostic>,
  /// Whether the fixes were written back to the file
  #[serde(skip)]
  pub fixed: bool,
  /// Fixes were requested but could not be applied or written
  #[serde(skip)]
  pub fix_failed: bool,
}

impl FileReport {
  /// Diagnostics still present in the file on disk
  pub fn unfixed(&self) -> impl Iterator<Item = &Diagnostic> {
    let fixed = self.fixed;
    self
      .diagnostics
      .iter()
      .filter(move |diagnostic| !(fixed && diagnostic.is_fixable()))
  }
}

#[derive(Debug, Default)]
pub struct Summary {
  pub reports: Vec<FileReport>,
  pub failures: usize,
}

impl Summary {
  pub fn is_clean(&self) -> bool {
    self.failures == 0
      && self
        .reports
        .iter()
        .all(|report| !report.fix_failed && report.unfixed().next().is_none())
  }
}

/// Lint every file in parallel. A file that cannot be read, parsed or fixed is logged and counted
/// without stopping the others.
pub fn run(files: &[PathBuf], fix: bool) -> Summary {
  let results: Vec<_> = files
    .par_iter()
    .map(|path| lint_file(path, fix))
    .collect();

  let mut summary = Summary::default();
  for result in results {
    match result {
      Ok(report) => {
        if report.fix_failed {
          summary.failures += 1;
        }
        summary.reports.push(report);
      }
      Err(err) => {
        tracing::error!("Error: {:#}", err);
        summary.failures += 1;
      }
    }
  }

  summary
}

pub fn lint_file(path: &Path, fix: bool) -> anyhow::Result<FileReport> {
  let code = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read {}", path.display()))?;
  let unit = SourceUnit::parse(path.to_string_lossy(), code)?;

  let diagnostics = lint_unit(&unit);
  tracing::debug!(
    path = %path.display(),
    count = diagnostics.len(),
    "Linted file"
  );

  Ok(report_file(path, unit.code(), diagnostics, fix))
}

/// Build the report of one linted file, writing its fixes back when `fix` is set.
///
/// A fix that cannot be applied or written is logged and flagged on the report; the diagnostics
/// are kept either way.
fn report_file(path: &Path, code: &str, diagnostics: Vec<Diagnostic>, fix: bool) -> FileReport {
  let mut report = FileReport {
    path: path.to_path_buf(),
    diagnostics,
    fixed: false,
    fix_failed: false,
  };

  if fix && report.diagnostics.iter().any(Diagnostic::is_fixable) {
    match write_fixes(path, code, &report.diagnostics) {
      Ok(()) => report.fixed = true,
      Err(err) => {
        tracing::error!("Error: {:#}", err);
        report.fix_failed = true;
      }
    }
  }

  report
}

fn write_fixes(path: &Path, code: &str, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
  let output = apply_fixes(
    code,
    diagnostics.iter().flat_map(|diagnostic| &diagnostic.suggestions),
  )
  .with_context(|| format!("Failed to fix {}", path.display()))?;

  std::fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))
}
