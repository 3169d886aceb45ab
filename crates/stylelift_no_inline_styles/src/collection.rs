use std::collections::HashSet;

use swc_core::common::Span;
use swc_core::ecma::ast::{
  Expr, Ident, JSXAttr, JSXElementName, ObjectLit, Prop, PropName, PropOrSpread, SpreadElement,
};

use crate::classifier::StyleExpression;

/// An inline object literal found in a style attribute.
///
/// Candidates are captured during traversal and never change afterwards.
#[derive(Debug, Clone)]
pub struct CandidateStyle {
  object: ObjectLit,
  reference_span: Span,
  attribute_span: Span,
  owner: Option<JSXElementName>,
}

impl CandidateStyle {
  /// `owner` is the name of the nearest opening tag enclosing the attribute.
  pub fn new(
    expression: StyleExpression,
    attribute_span: Span,
    owner: Option<JSXElementName>,
  ) -> Self {
    CandidateStyle {
      object: expression.object,
      reference_span: expression.reference_span,
      attribute_span,
      owner,
    }
  }

  pub fn object(&self) -> &ObjectLit {
    &self.object
  }

  /// Span of the object literal; diagnostics are anchored here
  pub fn span(&self) -> Span {
    self.object.span
  }

  /// Span of the expression the attribute evaluates, replaced when the style is hoisted
  pub fn reference_span(&self) -> Span {
    self.reference_span
  }

  pub fn attribute_span(&self) -> Span {
    self.attribute_span
  }

  pub fn owner(&self) -> Option<&JSXElementName> {
    self.owner.as_ref()
  }

  /// The literal's properties in source order
  pub fn properties(&self) -> impl Iterator<Item = StyleProperty<'_>> {
    self.object.props.iter().map(StyleProperty::from)
  }
}

/// A borrowed view of one property of a style object literal
#[derive(Debug, Clone, Copy)]
pub enum StyleProperty<'a> {
  /// `key: value`
  KeyValue { key: &'a PropName, value: &'a Expr },
  /// `{ color }`
  Shorthand(&'a Ident),
  /// `{ ...base }`
  Spread(&'a SpreadElement),
  /// Methods, getters, setters
  Other(&'a Prop),
}

impl<'a> From<&'a PropOrSpread> for StyleProperty<'a> {
  fn from(prop: &'a PropOrSpread) -> Self {
    match prop {
      PropOrSpread::Spread(spread) => StyleProperty::Spread(spread),
      PropOrSpread::Prop(prop) => match &**prop {
        Prop::KeyValue(key_value) => StyleProperty::KeyValue {
          key: &key_value.key,
          value: &key_value.value,
        },
        Prop::Shorthand(ident) => StyleProperty::Shorthand(ident),
        other => StyleProperty::Other(other),
      },
    }
  }
}

/// Accumulates the candidates of one unit while it is traversed.
#[derive(Debug, Default)]
pub struct StyleCollectionBuilder {
  candidates: Vec<CandidateStyle>,
  seen: HashSet<Span>,
}

impl StyleCollectionBuilder {
  /// Append `expressions` in discovery order.
  ///
  /// Literals without a source position and literals that were already added are skipped.
  pub fn add(
    &mut self,
    attribute: &JSXAttr,
    owner: Option<&JSXElementName>,
    expressions: impl IntoIterator<Item = StyleExpression>,
  ) {
    for expression in expressions {
      let span = expression.object.span;

      if span.is_dummy() {
        tracing::trace!("Skipping style literal without a source position");
        continue;
      }

      if !self.seen.insert(span) {
        continue;
      }

      tracing::trace!(?span, "Collected inline style");
      self
        .candidates
        .push(CandidateStyle::new(expression, attribute.span, owner.cloned()));
    }
  }

  pub fn finalize(self) -> StyleCollection {
    StyleCollection {
      candidates: self.candidates,
    }
  }
}

/// The finalized, read-only candidates of one unit in discovery order
#[derive(Debug, Default)]
pub struct StyleCollection {
  candidates: Vec<CandidateStyle>,
}

impl StyleCollection {
  pub fn len(&self) -> usize {
    self.candidates.len()
  }

  pub fn is_empty(&self) -> bool {
    self.candidates.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, CandidateStyle> {
    self.candidates.iter()
  }
}

impl<'a> IntoIterator for &'a StyleCollection {
  type Item = &'a CandidateStyle;
  type IntoIter = std::slice::Iter<'a, CandidateStyle>;

  fn into_iter(self) -> Self::IntoIter {
    self.candidates.iter()
  }
}
