use regex::Regex;

use crate::runner::SourceUnit;

/// Parse `code` as a JSX module for testing
pub fn parse_test_unit(code: &str) -> SourceUnit {
  parse_test_unit_with_name("something/file.jsx", code)
}

/// Same as `parse_test_unit` with an explicit file name, which selects the syntax
pub fn parse_test_unit_with_name(file_name: &str, code: &str) -> SourceUnit {
  SourceUnit::parse(file_name, code).unwrap()
}

/// Remove whitespace from line starts and ends
pub fn remove_code_whitespace(code: &str) -> String {
  let re = Regex::new(r"\s*\n\s*").unwrap();
  re.replace_all(code, "\n").trim().to_string()
}
