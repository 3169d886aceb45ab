use swc_core::ecma::ast::*;
use swc_core::ecma::visit::{Visit, VisitWith};

/// Decides whether the rule runs on a unit at all.
///
/// Any `Fn(&Module) -> bool` is a gate, so hosts with their own component detection can hand
/// in an opaque verdict.
pub trait ComponentGate {
  fn defines_component(&self, module: &Module) -> bool;
}

impl<F> ComponentGate for F
where
  F: Fn(&Module) -> bool,
{
  fn defines_component(&self, module: &Module) -> bool {
    self(module)
  }
}

/// Treats a unit as a React component module when one of its top-level declarations is a
/// component: a capitalised function, arrow or class rendering JSX or calling hooks, optionally
/// wrapped in a call such as `memo(...)` or `forwardRef(...)`, or a default-exported function.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReactComponentDetector;

impl ComponentGate for ReactComponentDetector {
  fn defines_component(&self, module: &Module) -> bool {
    module.body.iter().any(|item| match item {
      ModuleItem::Stmt(Stmt::Decl(decl)) => decl_defines_component(decl),
      ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => decl_defines_component(&export.decl),
      ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => match &export.decl {
        DefaultDecl::Fn(fn_expr) => function_renders(&fn_expr.function),
        DefaultDecl::Class(class_expr) => renders(&class_expr.class),
        _ => false,
      },
      ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) => {
        expr_contains_component(&export.expr)
      }
      _ => false,
    })
  }
}

fn decl_defines_component(decl: &Decl) -> bool {
  match decl {
    Decl::Fn(fn_decl) => {
      is_component_name(&fn_decl.ident.sym) && function_renders(&fn_decl.function)
    }
    Decl::Class(class_decl) => {
      is_component_name(&class_decl.ident.sym) && renders(&class_decl.class)
    }
    Decl::Var(var) => var.decls.iter().any(|declarator| {
      let Pat::Ident(binding) = &declarator.name else {
        return false;
      };

      is_component_name(&binding.id.sym)
        && declarator
          .init
          .as_deref()
          .is_some_and(expr_contains_component)
    }),
    _ => false,
  }
}

fn expr_contains_component(expr: &Expr) -> bool {
  match expr {
    Expr::Fn(fn_expr) => function_renders(&fn_expr.function),
    Expr::Arrow(arrow) => arrow_renders(arrow),
    Expr::Class(class_expr) => renders(&class_expr.class),
    Expr::Paren(paren) => expr_contains_component(&paren.expr),
    // memo(...), forwardRef(...), React.memo(forwardRef(...))
    Expr::Call(call) => call
      .args
      .iter()
      .any(|arg| arg.spread.is_none() && expr_contains_component(&arg.expr)),
    _ => false,
  }
}

/// Set once the visited subtree renders JSX or calls a hook
#[derive(Default)]
struct ContainsReact(bool);

impl Visit for ContainsReact {
  fn visit_jsx_element(&mut self, _: &JSXElement) {
    self.0 = true;
  }

  fn visit_jsx_fragment(&mut self, _: &JSXFragment) {
    self.0 = true;
  }

  fn visit_call_expr(&mut self, call: &CallExpr) {
    if calls_hook(&call.callee) {
      self.0 = true;
      return;
    }

    call.visit_children_with(self);
  }
}

fn calls_hook(callee: &Callee) -> bool {
  let Callee::Expr(expr) = callee else {
    return false;
  };

  matches!(&**expr, Expr::Ident(ident) if is_hook_name(&ident.sym))
}

/// `useState`, `useEffect`, ... but not `use` or `user`
fn is_hook_name(name: &str) -> bool {
  name
    .strip_prefix("use")
    .is_some_and(|rest| rest.starts_with(|c: char| c.is_uppercase()))
}

fn is_component_name(name: &str) -> bool {
  name.starts_with(|c: char| c.is_uppercase())
}

fn renders<N: VisitWith<ContainsReact>>(node: &N) -> bool {
  let mut visitor = ContainsReact::default();
  node.visit_with(&mut visitor);
  visitor.0
}

fn function_renders(function: &Function) -> bool {
  function.body.as_ref().is_some_and(|body| renders(body))
}

fn arrow_renders(arrow: &ArrowExpr) -> bool {
  match &*arrow.body {
    BlockStmtOrExpr::BlockStmt(block) => renders(block),
    BlockStmtOrExpr::Expr(expr) => renders(&**expr),
  }
}
