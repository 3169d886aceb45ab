use swc_core::common::{Span, Spanned};
use swc_core::ecma::ast::{
  BinaryOp, Expr, JSXAttr, JSXAttrName, JSXAttrValue, JSXExpr, JSXExprContainer, ObjectLit,
};

/// Name of the attribute React Native components read their style from
pub const STYLE_ATTRIBUTE: &str = "style";

/// An object literal found inside a style attribute.
#[derive(Debug, Clone)]
pub struct StyleExpression {
  /// The literal as written
  pub object: ObjectLit,
  /// The expression the attribute evaluates at this position. This is wider than
  /// `object.span` when the literal is wrapped, e.g. `({ flex: 1 })` or `{ flex: 1 } as const`.
  pub reference_span: Span,
}

/// `true` for `style={...}`; the match is exact and case-sensitive.
pub fn is_style_attribute(attr: &JSXAttr) -> bool {
  matches!(&attr.name, JSXAttrName::Ident(name) if name.sym.as_ref() == STYLE_ATTRIBUTE)
}

/// Every object literal a style attribute value may evaluate to.
///
/// Arrays, both branches of a conditional and both operands of `&&`, `||` and `??` are searched
/// recursively. Identifiers, calls, member expressions and spread array elements are references
/// to styles declared elsewhere and yield nothing.
pub fn collect_style_expressions(value: Option<&JSXAttrValue>) -> Vec<StyleExpression> {
  let mut found = Vec::new();

  if let Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
    expr: JSXExpr::Expr(expr),
    ..
  })) = value
  {
    collect_from_expr(expr, &mut found);
  }

  found
}

fn collect_from_expr(expr: &Expr, found: &mut Vec<StyleExpression>) {
  match look_through_wrappers(expr) {
    Expr::Object(object) => found.push(StyleExpression {
      object: object.clone(),
      reference_span: expr.span(),
    }),
    Expr::Array(array) => {
      for element in array.elems.iter().flatten() {
        if element.spread.is_none() {
          collect_from_expr(&element.expr, found);
        }
      }
    }
    Expr::Cond(cond) => {
      collect_from_expr(&cond.cons, found);
      collect_from_expr(&cond.alt, found);
    }
    Expr::Bin(bin) if is_logical(bin.op) => {
      collect_from_expr(&bin.left, found);
      collect_from_expr(&bin.right, found);
    }
    _ => {}
  }
}

fn is_logical(op: BinaryOp) -> bool {
  matches!(
    op,
    BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing
  )
}

/// Parentheses and TypeScript-only wrappers do not change the value an expression evaluates to.
fn look_through_wrappers(mut expr: &Expr) -> &Expr {
  loop {
    expr = match expr {
      Expr::Paren(paren) => &*paren.expr,
      Expr::TsAs(ts_as) => &*ts_as.expr,
      Expr::TsConstAssertion(assertion) => &*assertion.expr,
      Expr::TsSatisfies(satisfies) => &*satisfies.expr,
      Expr::TsNonNull(non_null) => &*non_null.expr,
      Expr::TsTypeAssertion(assertion) => &*assertion.expr,
      _ => return expr,
    };
  }
}
