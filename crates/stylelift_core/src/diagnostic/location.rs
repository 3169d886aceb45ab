use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;

/// A half-open range of byte offsets into the text of a source unit
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct TextRange {
  pub start: usize,
  pub end: usize,
}

impl TextRange {
  pub fn new(start: usize, end: usize) -> Self {
    TextRange { start, end }
  }

  /// An empty range, used for insertions
  pub fn at(offset: usize) -> Self {
    TextRange::new(offset, offset)
  }

  pub fn is_empty(&self) -> bool {
    self.start == self.end
  }

  pub fn len(&self) -> usize {
    self.end.saturating_sub(self.start)
  }
}

impl From<Range<usize>> for TextRange {
  fn from(range: Range<usize>) -> Self {
    TextRange::new(range.start, range.end)
  }
}

impl From<TextRange> for Range<usize> {
  fn from(range: TextRange) -> Self {
    range.start..range.end
  }
}

/// A 1-based line and column; columns count characters, not bytes
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Location {
  pub line: usize,
  pub column: usize,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct SourceLocation {
  pub start: Location,
  pub end: Location,
}
