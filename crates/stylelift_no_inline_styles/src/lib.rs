//! Reports React Native style objects written inline in a `style` attribute and suggests hoisting
//! them into a `StyleSheet.create` declaration.
//!
//! ```text
//! <View style={{ color: 'red' }} />
//! ```
//!
//! becomes
//!
//! ```text
//! <View style={styles.viewStyle} />
//!
//! const styles = StyleSheet.create({
//!   viewStyle: { color: 'red' },
//! });
//! ```
//!
//! The rule runs in two stages over one [`SourceUnit`]: the collecting stage visits the module
//! and records every candidate literal, then the reporting stage emits one diagnostic per
//! candidate. A fix is only offered when every value of the literal is a constant.
use stylelift_core::{Diagnostic, Reporter};
use stylelift_swc_runner::SourceUnit;

pub mod classifier;
pub mod collection;
pub mod component_detector;
pub mod driver;
pub mod fix_planner;
pub mod naming;
pub mod render;

pub use component_detector::{ComponentGate, ReactComponentDetector};
pub use driver::{collect, report, CollectedUnit};

pub const RULE_NAME: &str = "no-inline-styles";

/// The rule, gated on whether a unit defines a UI component
pub struct NoInlineStyles<G = ReactComponentDetector> {
  gate: G,
}

impl NoInlineStyles<ReactComponentDetector> {
  pub fn new() -> Self {
    NoInlineStyles {
      gate: ReactComponentDetector,
    }
  }
}

impl Default for NoInlineStyles<ReactComponentDetector> {
  fn default() -> Self {
    Self::new()
  }
}

impl<G: ComponentGate> NoInlineStyles<G> {
  pub fn with_gate(gate: G) -> Self {
    NoInlineStyles { gate }
  }

  /// Lint one unit. Units that do not define a component are skipped entirely.
  pub fn check(&self, unit: &SourceUnit, reporter: &mut dyn Reporter) {
    if !self.gate.defines_component(unit.module()) {
      tracing::trace!(file = unit.file_name(), "No component defined, skipping");
      return;
    }

    let collected = collect(unit);
    tracing::trace!(
      file = unit.file_name(),
      candidates = collected.styles.len(),
      "Collected inline styles"
    );

    report(unit, &collected, reporter);
  }
}

/// Lint `unit` with the default component gate
pub fn lint_unit(unit: &SourceUnit) -> Vec<Diagnostic> {
  let mut diagnostics = Vec::new();
  NoInlineStyles::new().check(unit, &mut diagnostics);
  diagnostics
}

#[cfg(test)]
mod tests {
  use indoc::indoc;
  use pretty_assertions::assert_eq;
  use stylelift_core::{apply_fixes, SuggestedFix};
  use stylelift_swc_runner::test_utils::{parse_test_unit, parse_test_unit_with_name};
  use swc_core::ecma::ast::Module;

  use super::*;

  fn fix_all(code: &str) -> String {
    let unit = parse_test_unit(code);
    let diagnostics = lint_unit(&unit);
    apply_fixes(code, diagnostics.iter().flat_map(|d| &d.suggestions)).unwrap()
  }

  #[test]
  fn test_view_example() {
    let code = indoc! {r#"
      import { StyleSheet, View } from 'react-native';

      export function App() {
        return <View style={{color:'red'}} />;
      }
    "#};
    let unit = parse_test_unit(code);

    let diagnostics = lint_unit(&unit);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Inline style: { color: 'red' }");
    assert_eq!(
      diagnostics[0].suggestions[0].description,
      "Move the inline style into a StyleSheet entry"
    );
    assert_eq!(
      fix_all(code),
      indoc! {r#"
        import { StyleSheet, View } from 'react-native';

        export function App() {
          return <View style={styles.viewStyle} />;
        }

        const styles = StyleSheet.create({
          viewStyle: {color:'red'},
        });
      "#}
    );
  }

  #[test]
  fn test_conditional_styles() {
    let code = indoc! {r#"
      const Tag = ({ cond }) => <Tag style={cond ? {a: 1} : {a: 2}} />;
    "#};
    let unit = parse_test_unit(code);

    let diagnostics = lint_unit(&unit);

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
      fix_all(code),
      indoc! {r#"
        const Tag = ({ cond }) => <Tag style={cond ? styles.tagStyle : styles.tagStyle2} />;

        const styles = StyleSheet.create({
          tagStyle: {a: 1},
          tagStyle2: {a: 2},
        });
      "#}
    );
  }

  #[test]
  fn test_non_literal_value_has_no_fix() {
    let code = "const App = () => <View style={{color: getColor()}} />;";
    let unit = parse_test_unit(code);

    let diagnostics = lint_unit(&unit);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Inline style: { color: getColor() }");
    assert!(diagnostics[0].suggestions.is_empty());
    assert_eq!(fix_all(code), code);
  }

  #[test]
  fn test_references_are_not_reported() {
    let code = indoc! {r#"
      const App = () => (
        <View style={styles.container}>
          <Text style={getStyle()} />
          <Text style={[styles.a, theme.text]} />
        </View>
      );
    "#};
    let unit = parse_test_unit(code);

    assert!(lint_unit(&unit).is_empty());
  }

  #[test]
  fn test_mixed_array_keeps_references() {
    let code = indoc! {r#"
      const Card = () => <View style={[styles.card, {padding: 8}, {margin: size}]} />;
    "#};

    assert_eq!(
      fix_all(code),
      indoc! {r#"
        const Card = () => <View style={[styles.card, styles2.viewStyle, {margin: size}]} />;

        const styles2 = StyleSheet.create({
          viewStyle: {padding: 8},
        });
      "#}
    );
  }

  #[test]
  fn test_non_component_unit_is_skipped() {
    let unit = parse_test_unit("function helper() { return <View style={{a: 1}} />; }");

    assert!(lint_unit(&unit).is_empty());
  }

  #[test]
  fn test_custom_gate() {
    let unit = parse_test_unit("render(<View style={{a: 1}} />);");
    let mut diagnostics = Vec::new();

    NoInlineStyles::with_gate(|_: &Module| true).check(&unit, &mut diagnostics);

    assert_eq!(diagnostics.len(), 1);
  }

  #[test]
  fn test_typescript_wrappers_are_replaced() {
    let code = "export const App = () => <View style={{flex: 1} as const} />;\n";
    let unit = parse_test_unit_with_name("App.tsx", code);

    let diagnostics = lint_unit(&unit);
    let fixed = apply_fixes(code, &diagnostics[0].suggestions).unwrap();

    assert_eq!(
      fixed,
      indoc! {r#"
        export const App = () => <View style={styles.viewStyle} />;

        const styles = StyleSheet.create({
          viewStyle: {flex: 1},
        });
      "#}
    );
  }

  #[test]
  fn test_single_fix_applied_alone_is_valid() {
    let code = indoc! {r#"
      export default function Screen() {
        return <View style={{flex: 1}}><Text style={{fontSize: 12}} /></View>;
      }
    "#};
    let unit = parse_test_unit(code);
    let diagnostics = lint_unit(&unit);

    let fixed = apply_fixes(code, &diagnostics[1].suggestions).unwrap();

    assert_eq!(
      fixed,
      indoc! {r#"
        export default function Screen() {
          return <View style={{flex: 1}}><Text style={styles.textStyle} /></View>;
        }

        const styles = StyleSheet.create({
          viewStyle: {flex: 1},
          textStyle: {fontSize: 12},
        });
      "#}
    );
    parse_test_unit(&fixed);
  }

  #[test]
  fn test_fixed_output_has_nothing_left_to_fix() {
    let code = indoc! {r#"
      export const App = () => (
        <View style={{flex: 1}}>
          <Text style={[{color: 'red'}, on && {opacity: 0.5}]} />
        </View>
      );
    "#};

    let fixed = fix_all(code);
    let unit = parse_test_unit(&fixed);

    assert!(lint_unit(&unit).is_empty());
  }

  #[test]
  fn test_runs_are_deterministic() {
    let code = "const A = () => <View style={[{a: 1}, {b: 2}]}><View style={{c: 3}} /></View>;";

    let run = || -> Vec<SuggestedFix> {
      let unit = parse_test_unit(code);
      lint_unit(&unit)
        .into_iter()
        .flat_map(|diagnostic| diagnostic.suggestions)
        .collect()
    };

    assert_eq!(run(), run());
    assert_eq!(
      run()
        .iter()
        .map(|fix| fix.edits[0].text.as_str())
        .collect::<Vec<_>>(),
      vec!["styles.viewStyle", "styles.viewStyle2", "styles.viewStyle3"]
    );
  }
}
