use super::Diagnostic;

/// The channel rules emit their diagnostics through
pub trait Reporter {
  fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
  fn report(&mut self, diagnostic: Diagnostic) {
    self.push(diagnostic);
  }
}
