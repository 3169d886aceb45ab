use std::collections::HashSet;

use stylelift_core::{SuggestedFix, TextEdit};
use stylelift_swc_runner::SourceUnit;
use swc_core::common::Spanned;
use swc_core::ecma::ast::{Expr, Lit, ObjectLit, PropName, UnaryOp};

use crate::collection::{CandidateStyle, StyleProperty};
use crate::naming::{NamingError, NamingStrategy};

/// Binding the generated stylesheet is assigned to, unless the unit already uses the name
pub const STYLESHEET_BINDING: &str = "styles";

/// Callee registering the generated stylesheet
pub const STYLESHEET_FACTORY: &str = "StyleSheet.create";

pub const FIX_DESCRIPTION: &str = "Move the inline style into a StyleSheet entry";

/// Why a candidate is reported without a suggested fix
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum FixUnavailable {
  #[error("the style contains values that are not literal constants")]
  NotLiteral,
  #[error(transparent)]
  Naming(#[from] NamingError),
  #[error("the source unit has no top-level statement to insert the stylesheet after")]
  NoInsertionPoint,
  #[error("the style has no usable source range")]
  NoSourceRange,
}

/// The rewrite of one candidate: the replacement at the use site plus the stylesheet declaration
/// shared by every plan of the unit.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FixPlan {
  pub replacement: TextEdit,
  pub insertion: TextEdit,
}

impl FixPlan {
  pub fn into_suggested_fix(self) -> SuggestedFix {
    SuggestedFix {
      description: FIX_DESCRIPTION.to_string(),
      edits: vec![self.replacement, self.insertion],
    }
  }
}

/// Plans the hoisting of every fixable candidate of one unit.
///
/// Replacements are planned one candidate at a time with [`FixPlanner::plan`]. Once every
/// candidate has been planned, [`FixPlanner::stylesheet_declaration`] renders the single
/// declaration registering all entries, which is inserted after the last top-level statement.
pub struct FixPlanner<'a> {
  unit: &'a SourceUnit,
  naming: NamingStrategy,
  binding: String,
  insertion_offset: Option<usize>,
  entries: Vec<(String, &'a str)>,
}

impl<'a> FixPlanner<'a> {
  /// `identifiers` holds every identifier occurring in the unit; the stylesheet binding avoids
  /// them so references never resolve to a user binding.
  pub fn new(unit: &'a SourceUnit, identifiers: &HashSet<String>) -> Self {
    let insertion_offset = unit
      .module()
      .body
      .last()
      .and_then(|item| unit.byte_range(item.span()))
      .map(|range| range.end);

    FixPlanner {
      unit,
      naming: NamingStrategy::default(),
      binding: free_binding(identifiers),
      insertion_offset,
      entries: Vec::new(),
    }
  }

  pub fn binding(&self) -> &str {
    &self.binding
  }

  /// Plan the replacement of `candidate`'s reference expression with `styles.<name>`.
  ///
  /// A name is only consumed when the candidate is fixable.
  pub fn plan(&mut self, candidate: &CandidateStyle) -> Result<TextEdit, FixUnavailable> {
    if !is_fixable(candidate.object()) {
      return Err(FixUnavailable::NotLiteral);
    }

    if self.insertion_offset.is_none() {
      return Err(FixUnavailable::NoInsertionPoint);
    }

    let text = self
      .unit
      .snippet(candidate.span())
      .ok_or(FixUnavailable::NoSourceRange)?;
    let range = self
      .unit
      .byte_range(candidate.reference_span())
      .ok_or(FixUnavailable::NoSourceRange)?;

    let name = self.naming.derive_name(candidate)?;
    let replacement = TextEdit::replace(range, format!("{}.{}", self.binding, name));
    self.entries.push((name, text));

    Ok(replacement)
  }

  /// The declaration registering every entry planned so far, or `None` when nothing was planned.
  pub fn stylesheet_declaration(&self) -> Option<TextEdit> {
    let offset = self.insertion_offset?;
    if self.entries.is_empty() {
      return None;
    }

    let mut text = format!("\n\nconst {} = {}({{\n", self.binding, STYLESHEET_FACTORY);
    for (name, rendered) in &self.entries {
      text.push_str(&format!("  {name}: {rendered},\n"));
    }
    text.push_str("});");

    Some(TextEdit::insert(offset, text))
  }
}

fn free_binding(identifiers: &HashSet<String>) -> String {
  if !identifiers.contains(STYLESHEET_BINDING) {
    return STYLESHEET_BINDING.to_string();
  }

  (2..)
    .map(|suffix| format!("{STYLESHEET_BINDING}{suffix}"))
    .find(|name| !identifiers.contains(name))
    .unwrap_or_else(|| STYLESHEET_BINDING.to_string())
}

/// `true` when every property of `object` is `key: <literal constant>` with a static key.
pub fn is_fixable(object: &ObjectLit) -> bool {
  object
    .props
    .iter()
    .map(StyleProperty::from)
    .all(|property| match property {
      StyleProperty::KeyValue { key, value } => {
        !matches!(key, PropName::Computed(_)) && is_literal_constant(value)
      }
      StyleProperty::Shorthand(_) | StyleProperty::Spread(_) | StyleProperty::Other(_) => false,
    })
}

/// String, number, boolean, null and bigint literals, signed numbers, templates without
/// interpolation, and object or array literals built only from those.
pub fn is_literal_constant(expr: &Expr) -> bool {
  match expr {
    Expr::Lit(lit) => matches!(
      lit,
      Lit::Str(_) | Lit::Num(_) | Lit::Bool(_) | Lit::Null(_) | Lit::BigInt(_)
    ),
    Expr::Unary(unary) => {
      matches!(unary.op, UnaryOp::Minus | UnaryOp::Plus)
        && matches!(&*unary.arg, Expr::Lit(Lit::Num(_)))
    }
    Expr::Tpl(tpl) => tpl.exprs.is_empty(),
    Expr::Paren(paren) => is_literal_constant(&paren.expr),
    Expr::Object(object) => is_fixable(object),
    Expr::Array(array) => array.elems.iter().all(|element| {
      element
        .as_ref()
        .is_some_and(|element| element.spread.is_none() && is_literal_constant(&element.expr))
    }),
    _ => false,
  }
}
