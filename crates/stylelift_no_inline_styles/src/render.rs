use stylelift_swc_runner::SourceUnit;
use swc_core::common::Spanned;
use swc_core::ecma::ast::{ArrayLit, Expr, Lit, ObjectLit, PropName};

use crate::collection::{CandidateStyle, StyleProperty};
use crate::naming::is_identifier;

pub const MESSAGE_PREFIX: &str = "Inline style: ";

/// `Inline style: { color: 'red' }`
pub fn render_message(unit: &SourceUnit, candidate: &CandidateStyle) -> String {
  format!("{MESSAGE_PREFIX}{}", render_object(unit, candidate.object()))
}

fn render_object(unit: &SourceUnit, object: &ObjectLit) -> String {
  if object.props.is_empty() {
    return String::from("{}");
  }

  let properties: Vec<String> = object
    .props
    .iter()
    .map(|prop| render_property(unit, StyleProperty::from(prop)))
    .collect();

  format!("{{ {} }}", properties.join(", "))
}

fn render_property(unit: &SourceUnit, property: StyleProperty<'_>) -> String {
  match property {
    StyleProperty::KeyValue { key, value } => {
      format!("{}: {}", render_key(unit, key), render_value(unit, value))
    }
    StyleProperty::Shorthand(ident) => ident.sym.to_string(),
    StyleProperty::Spread(spread) => render_source(unit, spread.span()),
    StyleProperty::Other(prop) => render_source(unit, prop.span()),
  }
}

fn render_key(unit: &SourceUnit, key: &PropName) -> String {
  match key {
    PropName::Ident(ident) => ident.sym.to_string(),
    PropName::Str(string) => {
      let value = string.value.as_ref();
      if is_identifier(value) {
        value.to_string()
      } else {
        quote(value)
      }
    }
    PropName::Num(number) => quote(&numeric_key(number.value)),
    other => render_source(unit, other.span()),
  }
}

fn render_value(unit: &SourceUnit, value: &Expr) -> String {
  match value {
    Expr::Lit(Lit::Str(string)) => quote(&string.value),
    Expr::Object(object) => render_object(unit, object),
    Expr::Array(array) => render_array(unit, array),
    Expr::Paren(paren) => render_value(unit, &paren.expr),
    other => render_source(unit, other.span()),
  }
}

fn render_array(unit: &SourceUnit, array: &ArrayLit) -> String {
  if array.elems.is_empty() {
    return String::from("[]");
  }

  let elements: Vec<String> = array
    .elems
    .iter()
    .map(|element| match element {
      None => String::from("<1 empty item>"),
      Some(element) if element.spread.is_some() => {
        format!("...{}", render_source(unit, element.expr.span()))
      }
      Some(element) => render_value(unit, &element.expr),
    })
    .collect();

  format!("[ {} ]", elements.join(", "))
}

/// Single-quoted with `'`, `\` and control characters escaped, so a message stays on one line
fn quote(value: &str) -> String {
  let mut quoted = String::with_capacity(value.len() + 2);
  quoted.push('\'');

  for c in value.chars() {
    match c {
      '\'' => quoted.push_str("\\'"),
      '\\' => quoted.push_str("\\\\"),
      '\n' => quoted.push_str("\\n"),
      '\r' => quoted.push_str("\\r"),
      '\t' => quoted.push_str("\\t"),
      '\u{8}' => quoted.push_str("\\b"),
      '\u{c}' => quoted.push_str("\\f"),
      c if c.is_control() => quoted.push_str(&format!("\\x{:02X}", c as u32)),
      c => quoted.push(c),
    }
  }

  quoted.push('\'');
  quoted
}

/// Numeric keys are property names, so `3` is shown as `'3'` and `1.50` as `'1.5'`
fn numeric_key(value: f64) -> String {
  if value.fract() == 0.0 && value.abs() < 1e21 {
    format!("{value:.0}")
  } else {
    value.to_string()
  }
}

/// Source text with runs of whitespace collapsed to a single space
fn render_source(unit: &SourceUnit, span: swc_core::common::Span) -> String {
  unit
    .snippet(span)
    .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
    .unwrap_or_else(|| String::from("<unknown>"))
}
