use std::ops::Range;
use std::path::Path;

use stylelift_core::{Location, SourceLocation, TextRange};
use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceFile, SourceMap, Span, Spanned};
use swc_core::ecma::ast::Module;
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};
use swc_core::ecma::visit::{Visit, VisitWith};

/// One file or buffer parsed with SWC, together with the exact text it was parsed from.
///
/// Every span produced while visiting [`SourceUnit::module`] can be mapped back to byte
/// offsets into [`SourceUnit::code`] with [`SourceUnit::byte_range`].
pub struct SourceUnit {
  file_name: String,
  code: String,
  source_file: Lrc<SourceFile>,
  module: Module,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
  #[error("Failed to parse {file_name}: {message}")]
  Syntax {
    file_name: String,
    message: String,
    range: Option<TextRange>,
  },
}

impl SourceUnit {
  /// Parse `code` as a module, picking the syntax from the extension of `file_name`.
  ///
  /// Errors the parser recovered from are reported as a failed parse as well, so that rules
  /// never plan fixes against a partial tree.
  pub fn parse(file_name: impl Into<String>, code: impl Into<String>) -> Result<Self, ParseError> {
    let file_name = file_name.into();
    let code = code.into();

    let source_map = Lrc::new(SourceMap::default());
    let source_file = source_map.new_source_file(
      FileName::Custom(file_name.clone()).into(),
      code.clone().into(),
    );

    let (parsed, recovered) = {
      let lexer = Lexer::new(
        syntax_for_file(&file_name),
        Default::default(),
        StringInput::from(&*source_file),
        None,
      );

      let mut parser = Parser::new_from(lexer);
      let parsed = parser.parse_module();
      (parsed, parser.take_errors())
    };

    let syntax_error = |err: swc_core::ecma::parser::error::Error| ParseError::Syntax {
      file_name: file_name.clone(),
      message: err.kind().msg().to_string(),
      range: span_range(&source_file, code.len(), err.span()).map(TextRange::from),
    };

    let module = parsed.map_err(syntax_error)?;
    if let Some(err) = recovered.into_iter().next() {
      return Err(syntax_error(err));
    }

    Ok(SourceUnit {
      file_name,
      code,
      source_file,
      module,
    })
  }

  pub fn file_name(&self) -> &str {
    &self.file_name
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn module(&self) -> &Module {
    &self.module
  }

  /// Run a read-only visitor over the module and hand it back.
  pub fn run_visit_const<V: Visit>(&self, mut visitor: V) -> V {
    self.module.visit_with(&mut visitor);
    visitor
  }

  /// Byte offsets of `span` into [`SourceUnit::code`].
  ///
  /// Returns `None` for synthesized (dummy) spans and for spans that do not fall on character
  /// boundaries of this unit's text.
  pub fn byte_range(&self, span: Span) -> Option<Range<usize>> {
    span_range(&self.source_file, self.code.len(), span)
      .filter(|range| self.code.is_char_boundary(range.start) && self.code.is_char_boundary(range.end))
  }

  /// The exact source text covered by `span`.
  pub fn snippet(&self, span: Span) -> Option<&str> {
    self.byte_range(span).and_then(|range| self.code.get(range))
  }

  /// 1-based line and column (in characters) of both ends of `range`.
  pub fn location(&self, range: &TextRange) -> SourceLocation {
    SourceLocation {
      start: self.position(range.start),
      end: self.position(range.end),
    }
  }

  fn position(&self, offset: usize) -> Location {
    let before = self.code.get(..offset).unwrap_or(&self.code);
    let line_start = before.rfind('\n').map_or(0, |index| index + 1);

    Location {
      line: before.matches('\n').count() + 1,
      column: before[line_start..].chars().count() + 1,
    }
  }
}

/// `.tsx` parses as TSX, other TypeScript extensions as plain TypeScript and everything else as
/// JavaScript with JSX enabled, since React Native projects keep JSX in `.js` files.
pub fn syntax_for_file(file_name: &str) -> Syntax {
  let extension = Path::new(file_name)
    .extension()
    .and_then(|extension| extension.to_str())
    .unwrap_or_default();

  match extension {
    "tsx" => Syntax::Typescript(TsSyntax {
      tsx: true,
      ..Default::default()
    }),
    "ts" | "mts" | "cts" => Syntax::Typescript(TsSyntax::default()),
    _ => Syntax::Es(EsSyntax {
      jsx: true,
      ..Default::default()
    }),
  }
}

fn span_range(source_file: &SourceFile, len: usize, span: Span) -> Option<Range<usize>> {
  if span.is_dummy() {
    return None;
  }

  let start = span.lo.0.checked_sub(source_file.start_pos.0)? as usize;
  let end = span.hi.0.checked_sub(source_file.start_pos.0)? as usize;

  (start <= end && end <= len).then_some(start..end)
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use swc_core::common::{Spanned, DUMMY_SP};
  use swc_core::ecma::ast::JSXOpeningElement;

  use super::*;

  #[derive(Default)]
  struct OpeningElementSpans(Vec<Span>);

  impl Visit for OpeningElementSpans {
    fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
      self.0.push(node.span());
    }
  }

  #[test]
  fn test_parse_jsx_in_js_file() {
    let unit = SourceUnit::parse("App.js", "const a = <View style={{}} />;").unwrap();
    let spans = unit.run_visit_const(OpeningElementSpans::default()).0;

    assert_eq!(spans.len(), 1);
    assert_eq!(unit.snippet(spans[0]), Some("<View style={{}} />"));
    assert_eq!(unit.byte_range(spans[0]), Some(10..29));
  }

  #[test]
  fn test_parse_tsx() {
    let code = "const a = <View style={{ width: 1 } as const} />;";
    let unit = SourceUnit::parse("App.tsx", code).unwrap();

    assert_eq!(unit.module().body.len(), 1);
    assert_eq!(unit.file_name(), "App.tsx");
  }

  #[test]
  fn test_jsx_is_rejected_in_plain_typescript() {
    let result = SourceUnit::parse("App.ts", "const a = <View />;");

    assert!(matches!(result, Err(ParseError::Syntax { .. })));
  }

  #[test]
  fn test_syntax_error_carries_file_name() {
    let Err(err) = SourceUnit::parse("broken.js", "const = ;") else {
      panic!("expected a parse error");
    };

    assert!(err.to_string().starts_with("Failed to parse broken.js"));
  }

  #[test]
  fn test_recovered_error_fails_the_parse() {
    let code = "with (a) {}";

    // The parser alone produces a module and keeps the strict-mode error aside
    let source_map = Lrc::new(SourceMap::default());
    let source_file =
      source_map.new_source_file(FileName::Custom("a.js".into()).into(), code.to_string().into());
    let lexer = Lexer::new(
      syntax_for_file("a.js"),
      Default::default(),
      StringInput::from(&*source_file),
      None,
    );
    let mut parser = Parser::new_from(lexer);
    assert!(parser.parse_module().is_ok());
    assert!(!parser.take_errors().is_empty());

    let result = SourceUnit::parse("a.js", code);

    let Err(ParseError::Syntax { range, .. }) = result else {
      panic!("expected a parse error");
    };
    assert!(range.is_some());
  }

  #[test]
  fn test_dummy_span_has_no_range() {
    let unit = SourceUnit::parse("a.js", "a;").unwrap();

    assert_eq!(unit.byte_range(DUMMY_SP), None);
    assert_eq!(unit.snippet(DUMMY_SP), None);
  }

  #[test]
  fn test_location_counts_characters() {
    let code = "const a = 'é';\nconst b = <Text />;";
    let unit = SourceUnit::parse("a.jsx", code).unwrap();
    let spans = unit.run_visit_const(OpeningElementSpans::default()).0;
    let range = unit.byte_range(spans[0]).unwrap();

    let location = unit.location(&range.into());

    assert_eq!(location.start, Location { line: 2, column: 11 });
    assert_eq!(location.end, Location { line: 2, column: 19 });
  }

  #[test]
  fn test_syntax_for_file() {
    assert!(matches!(
      syntax_for_file("a.tsx"),
      Syntax::Typescript(TsSyntax { tsx: true, .. })
    ));
    assert!(matches!(
      syntax_for_file("a.mts"),
      Syntax::Typescript(TsSyntax { tsx: false, .. })
    ));
    assert!(matches!(
      syntax_for_file("a.js"),
      Syntax::Es(EsSyntax { jsx: true, .. })
    ));
    assert!(matches!(
      syntax_for_file("buffer"),
      Syntax::Es(EsSyntax { jsx: true, .. })
    ));
  }
}
