use serde::Deserialize;
use serde::Serialize;

use super::TextRange;

/// Replace the text covered by `range` with `text`.
///
/// An empty range inserts `text` at `range.start`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct TextEdit {
  pub range: TextRange,
  pub text: String,
}

impl TextEdit {
  pub fn replace(range: impl Into<TextRange>, text: impl Into<String>) -> Self {
    TextEdit {
      range: range.into(),
      text: text.into(),
    }
  }

  pub fn insert(offset: usize, text: impl Into<String>) -> Self {
    TextEdit {
      range: TextRange::at(offset),
      text: text.into(),
    }
  }
}

/// A set of edits that must be applied together for the result to be valid source
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFix {
  /// User-facing summary of what the fix does
  pub description: String,

  /// Edits in ascending range order
  pub edits: Vec<TextEdit>,
}
