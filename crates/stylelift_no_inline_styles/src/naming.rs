use std::collections::HashSet;

use swc_core::ecma::ast::JSXElementName;

use crate::collection::CandidateStyle;

/// Appended to the lower-cased tag name: `<View>` yields `viewStyle`
pub const NAME_SUFFIX: &str = "Style";

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum NamingError {
  #[error("the style attribute has no enclosing opening tag")]
  MissingOwner,
  #[error("tag `{0}` does not form a valid style name")]
  UnresolvableTag(String),
}

/// Hands out stylesheet entry names for one source unit.
///
/// Names are derived from the tag owning the style attribute. A name that was already handed out
/// gets the next free numeric suffix, so `<View>` styles become `viewStyle`, `viewStyle2`, ...
#[derive(Debug, Default)]
pub struct NamingStrategy {
  used: HashSet<String>,
}

impl NamingStrategy {
  pub fn derive_name(&mut self, candidate: &CandidateStyle) -> Result<String, NamingError> {
    let base = base_name(candidate)?;
    Ok(self.claim(&base))
  }

  pub fn is_used(&self, name: &str) -> bool {
    self.used.contains(name)
  }

  fn claim(&mut self, base: &str) -> String {
    let mut name = base.to_string();
    let mut suffix = 1;

    while !self.used.insert(name.clone()) {
      suffix += 1;
      name = format!("{base}{suffix}");
    }

    name
  }
}

/// The undisambiguated name for `candidate`
pub fn base_name(candidate: &CandidateStyle) -> Result<String, NamingError> {
  let owner = candidate.owner().ok_or(NamingError::MissingOwner)?;
  let tag = resolve_tag_name(owner)
    .ok_or_else(|| NamingError::UnresolvableTag(display_tag_name(owner)))?;

  let name = format!("{}{NAME_SUFFIX}", tag.to_lowercase());
  if !is_identifier(&name) {
    return Err(NamingError::UnresolvableTag(tag.to_string()));
  }

  Ok(name)
}

/// `View` for `<View>`, `View` for `<Animated.View>`, nothing for `<svg:rect>`
pub fn resolve_tag_name(name: &JSXElementName) -> Option<&str> {
  match name {
    JSXElementName::Ident(ident) => Some(ident.sym.as_ref()),
    JSXElementName::JSXMemberExpr(member) => Some(member.prop.sym.as_ref()),
    JSXElementName::JSXNamespacedName(_) => None,
  }
}

fn display_tag_name(name: &JSXElementName) -> String {
  match name {
    JSXElementName::JSXNamespacedName(namespaced) => {
      format!("{}:{}", namespaced.ns.sym, namespaced.name.sym)
    }
    other => resolve_tag_name(other).unwrap_or_default().to_string(),
  }
}

pub(crate) fn is_identifier(name: &str) -> bool {
  let mut chars = name.chars();

  chars
    .next()
    .is_some_and(|first| first == '_' || first == '$' || first.is_alphabetic())
    && chars.all(|c| c == '_' || c == '$' || c.is_alphanumeric())
}
