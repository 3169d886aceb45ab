use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use super::SourceLocation;
use super::SuggestedFix;
use super::TextRange;

/// A finding reported by a lint rule, anchored to a range of the source unit.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
  /// Name of the rule that emitted this diagnostic
  pub rule: String,

  /// A summary user-facing message
  pub message: String,

  /// Byte range of the anchor node
  pub range: TextRange,

  /// Line and column of the anchor node
  pub loc: SourceLocation,

  /// Zero or more fixes the user may apply
  #[serde(default)]
  pub suggestions: Vec<SuggestedFix>,
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}:{}  {}  {}",
      self.loc.start.line, self.loc.start.column, self.message, self.rule
    )
  }
}

impl Diagnostic {
  pub fn is_fixable(&self) -> bool {
    !self.suggestions.is_empty()
  }
}
