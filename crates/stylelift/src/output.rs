use std::io::Write;

use crate::lint::FileReport;

/// One line per diagnostic: `path:line:column  message  [fixable]`
pub fn write_text(out: &mut impl Write, reports: &[FileReport]) -> std::io::Result<()> {
  for report in reports {
    for diagnostic in &report.diagnostics {
      write!(
        out,
        "{}:{}:{}  {}",
        report.path.display(),
        diagnostic.loc.start.line,
        diagnostic.loc.start.column,
        diagnostic.message
      )?;
      if diagnostic.is_fixable() {
        write!(out, "  [fixable]")?;
      }
      writeln!(out)?;
    }
  }

  Ok(())
}

/// `[{ "path": ..., "diagnostics": [...] }, ...]`
pub fn write_json(out: &mut impl Write, reports: &[FileReport]) -> anyhow::Result<()> {
  serde_json::to_writer_pretty(&mut *out, reports)?;
  writeln!(out)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use pretty_assertions::assert_eq;
  use stylelift_core::{Diagnostic, Location, SourceLocation, SuggestedFix, TextEdit, TextRange};

  use super::*;

  fn diagnostic(line: usize, column: usize, message: &str, fixable: bool) -> Diagnostic {
    Diagnostic {
      rule: String::from("no-inline-styles"),
      message: message.to_string(),
      range: TextRange::new(0, 1),
      loc: SourceLocation {
        start: Location { line, column },
        end: Location { line, column },
      },
      suggestions: if fixable {
        vec![SuggestedFix {
          description: String::from("fix"),
          edits: vec![TextEdit::replace(0..1, "x")],
        }]
      } else {
        vec![]
      },
    }
  }

  fn reports() -> Vec<FileReport> {
    vec![
      FileReport {
        path: PathBuf::from("src/App.jsx"),
        diagnostics: vec![
          diagnostic(3, 17, "Inline style: { flex: 1 }", true),
          diagnostic(4, 19, "Inline style: { color: theme.text }", false),
        ],
        fixed: false,
        fix_failed: false,
      },
      FileReport {
        path: PathBuf::from("src/util.js"),
        diagnostics: vec![],
        fixed: false,
        fix_failed: false,
      },
    ]
  }

  #[test]
  fn test_write_text() {
    let mut out = Vec::new();

    write_text(&mut out, &reports()).unwrap();

    assert_eq!(
      String::from_utf8(out).unwrap(),
      "src/App.jsx:3:17  Inline style: { flex: 1 }  [fixable]\n\
       src/App.jsx:4:19  Inline style: { color: theme.text }\n"
    );
  }

  #[test]
  fn test_write_json() {
    let mut out = Vec::new();

    write_json(&mut out, &reports()).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json[0]["path"], "src/App.jsx");
    assert_eq!(json[0]["diagnostics"][0]["rule"], "no-inline-styles");
    assert_eq!(json[0]["diagnostics"][0]["loc"]["start"]["line"], 3);
    assert_eq!(json[0]["diagnostics"][1]["suggestions"], serde_json::json!([]));
    assert_eq!(json[1]["diagnostics"], serde_json::json!([]));
    assert!(json[0].get("fixed").is_none());
  }
}
