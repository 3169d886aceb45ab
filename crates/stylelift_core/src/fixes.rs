use crate::{SuggestedFix, TextEdit, TextRange};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApplyFixError {
  #[error("Edit {first:?} overlaps edit {second:?}")]
  Overlap { first: TextRange, second: TextRange },
  #[error("Invalid edit range {}..{} for text length {len}", .range.start, .range.end)]
  OutOfBounds { range: TextRange, len: usize },
  #[error("Edit range {}..{} splits a character", .range.start, .range.end)]
  NotCharBoundary { range: TextRange },
}

/// Apply every edit of `fixes` to `code` and return the rewritten text.
///
/// Edits are applied in range order. Byte-identical edits carried by more than one fix are
/// applied once; any other overlap (including two different insertions at the same offset)
/// rejects the whole batch and leaves the caller's text untouched.
pub fn apply_fixes<'a>(
  code: &str,
  fixes: impl IntoIterator<Item = &'a SuggestedFix>,
) -> Result<String, ApplyFixError> {
  let mut edits: Vec<&TextEdit> = fixes.into_iter().flat_map(|fix| &fix.edits).collect();

  edits.sort_by(|a, b| a.range.cmp(&b.range).then_with(|| a.text.cmp(&b.text)));
  edits.dedup();

  let mut previous: Option<&TextEdit> = None;
  for edit in &edits {
    let range = edit.range;

    if range.start > range.end || range.end > code.len() {
      return Err(ApplyFixError::OutOfBounds {
        range,
        len: code.len(),
      });
    }

    if !code.is_char_boundary(range.start) || !code.is_char_boundary(range.end) {
      return Err(ApplyFixError::NotCharBoundary { range });
    }

    if let Some(previous) = previous {
      let same_insertion_point =
        previous.range.is_empty() && range.is_empty() && previous.range.start == range.start;
      if range.start < previous.range.end || same_insertion_point {
        return Err(ApplyFixError::Overlap {
          first: previous.range,
          second: range,
        });
      }
    }

    previous = Some(*edit);
  }

  let inserted: usize = edits.iter().map(|edit| edit.text.len()).sum();
  let mut output = String::with_capacity(code.len() + inserted);
  let mut cursor = 0;
  for edit in edits {
    output.push_str(&code[cursor..edit.range.start]);
    output.push_str(&edit.text);
    cursor = edit.range.end;
  }
  output.push_str(&code[cursor..]);

  tracing::trace!(len = output.len(), "Applied fixes");

  Ok(output)
}
