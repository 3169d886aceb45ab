use std::collections::HashSet;

use stylelift_core::{Diagnostic, Reporter, SuggestedFix, TextRange};
use stylelift_swc_runner::SourceUnit;
use swc_core::ecma::ast::{Ident, JSXAttr, JSXElementName, JSXOpeningElement};
use swc_core::ecma::visit::{Visit, VisitWith};

use crate::classifier::{collect_style_expressions, is_style_attribute};
use crate::collection::{StyleCollection, StyleCollectionBuilder};
use crate::fix_planner::{FixPlan, FixPlanner};
use crate::render::render_message;
use crate::RULE_NAME;

/// The collecting stage: walks one unit and records every inline style literal.
///
/// Owners are tracked as a stack of opening-element names so that the nearest enclosing tag is
/// known when an attribute is reached, including for elements nested inside other attributes.
#[derive(Default)]
pub struct InlineStyleCollector {
  styles: StyleCollectionBuilder,
  owners: Vec<JSXElementName>,
  identifiers: HashSet<String>,
}

impl InlineStyleCollector {
  pub fn finish(self) -> CollectedUnit {
    CollectedUnit {
      styles: self.styles.finalize(),
      identifiers: self.identifiers,
    }
  }
}

impl Visit for InlineStyleCollector {
  fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
    self.owners.push(node.name.clone());
    node.visit_children_with(self);
    self.owners.pop();
  }

  fn visit_jsx_attr(&mut self, attr: &JSXAttr) {
    if is_style_attribute(attr) {
      self.styles.add(
        attr,
        self.owners.last(),
        collect_style_expressions(attr.value.as_ref()),
      );
    }

    attr.visit_children_with(self);
  }

  fn visit_ident(&mut self, ident: &Ident) {
    if !self.identifiers.contains(ident.sym.as_ref()) {
      self.identifiers.insert(ident.sym.to_string());
    }
  }
}

/// What the collecting stage hands to the reporting stage
#[derive(Debug, Default)]
pub struct CollectedUnit {
  pub styles: StyleCollection,
  /// Every identifier occurring in the unit, used to keep the stylesheet binding free
  pub identifiers: HashSet<String>,
}

pub fn collect(unit: &SourceUnit) -> CollectedUnit {
  unit.run_visit_const(InlineStyleCollector::default()).finish()
}

/// The reporting stage: one diagnostic per candidate, in discovery order.
///
/// Replacements are planned for every candidate first so that the shared stylesheet declaration
/// holds all entries; each fix then carries its own replacement plus that declaration.
pub fn report(unit: &SourceUnit, collected: &CollectedUnit, reporter: &mut dyn Reporter) {
  let mut planner = FixPlanner::new(unit, &collected.identifiers);

  let replacements: Vec<_> = collected
    .styles
    .iter()
    .map(|candidate| planner.plan(candidate))
    .collect();
  let declaration = planner.stylesheet_declaration();

  for (candidate, replacement) in collected.styles.iter().zip(replacements) {
    let suggestions: Vec<SuggestedFix> = match (replacement, &declaration) {
      (Ok(replacement), Some(insertion)) => vec![FixPlan {
        replacement,
        insertion: insertion.clone(),
      }
      .into_suggested_fix()],
      (Ok(_), None) => Vec::new(),
      (Err(reason), _) => {
        tracing::debug!(
          file = unit.file_name(),
          %reason,
          "Reporting inline style without a fix"
        );
        Vec::new()
      }
    };

    let range: TextRange = unit
      .byte_range(candidate.span())
      .or_else(|| unit.byte_range(candidate.attribute_span()))
      .map(TextRange::from)
      .unwrap_or_default();

    reporter.report(Diagnostic {
      rule: RULE_NAME.to_string(),
      message: render_message(unit, candidate),
      range,
      loc: unit.location(&range),
      suggestions,
    });
  }
}
