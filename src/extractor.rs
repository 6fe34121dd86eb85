//! Pulls linter error codes out of diagnostic output.
//!
//! Linters such as pylint print diagnostics as `message text (error-code-name)`.
//! The code is recognised by its shape: letters separated by hyphens. Other
//! parenthesized content on the same line (line/column pairs, quoted names)
//! fails that shape and is ignored.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A validated linter error code, e.g. `missing-docstring`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ErrorCode(String);

impl ErrorCode {
    /// Wraps `name` if it has the shape of an error code.
    pub fn new(name: &str) -> Option<Self> {
        is_valid_error_code(name).then(|| Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty, at least one `-`, and nothing but ASCII letters otherwise.
pub fn is_valid_error_code(name: &str) -> bool {
    let mut has_hyphen = false;
    for c in name.chars() {
        match c {
            '-' => has_hyphen = true,
            c if c.is_ascii_alphabetic() => {}
            _ => return false,
        }
    }
    has_hyphen
}

/// Yields the text between every `(` and the next `)` on the line.
///
/// Parentheses do not nest: the first `)` after a `(` closes it. A `(` with no
/// closing `)` before the end of the line produces nothing.
fn parenthesized(line: &str) -> impl Iterator<Item = &str> {
    line.match_indices('(').filter_map(move |(open, _)| {
        let rest = &line[open + 1..];
        rest.find(')').map(|close| &rest[..close])
    })
}

/// Returns the first parenthesized token on `line` shaped like an error code.
pub fn extract_error_code(line: &str) -> Option<ErrorCode> {
    parenthesized(line).find_map(ErrorCode::new)
}

/// Collects the distinct error codes found across `lines`.
pub fn collect_errors<S: AsRef<str>>(lines: &[S]) -> BTreeSet<ErrorCode> {
    lines
        .iter()
        .filter_map(|line| extract_error_code(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("missing-docstring", true)]
    #[case("a-b-c", true)]
    #[case("-", true)]
    #[case("", false)]
    #[case("unused", false)]
    #[case("line-too-long2", false)]
    #[case("snake_case-name", false)]
    #[case("12, 4", false)]
    #[case("wrong import-order", false)]
    fn validity_predicate(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_valid_error_code(name), expected);
    }

    #[rstest]
    #[case("Missing docstring (missing-docstring)", Some("missing-docstring"))]
    #[case("Bad indentation (12, 4)", None)]
    #[case(
        "mod.py:3:0: W0611: Unused import os (unused-import)",
        Some("unused-import")
    )]
    #[case("Call (foo) then (bar-baz) then (qux-quux)", Some("bar-baz"))]
    #[case("Unclosed (missing-docstring", None)]
    #[case("Trailing paren (", None)]
    #[case("(no-nesting (inner-code))", Some("inner-code"))]
    #[case("No parentheses here", None)]
    #[case("Empty ()", None)]
    fn extracts_first_valid_code(#[case] line: &str, #[case] expected: Option<&str>) {
        let code = extract_error_code(line);
        assert_eq!(code.as_ref().map(ErrorCode::as_str), expected);
    }

    #[test]
    fn extracted_codes_always_satisfy_the_predicate() {
        let lines = [
            "x (a-b) (1-2)",
            "y (()) (c_d-e)",
            "z ((f-g))",
            "w (h-i",
            "v (FLAG_NOT_FOUND)",
        ];
        for line in lines {
            if let Some(code) = extract_error_code(line) {
                assert!(is_valid_error_code(code.as_str()), "{line}: {code}");
            }
        }
    }

    #[test]
    fn sentinel_text_is_not_a_code() {
        assert_eq!(extract_error_code("oops (FLAG_NOT_FOUND)"), None);
        assert_eq!(
            extract_error_code("upper (FLAG-NOT-FOUND)").map(|c| c.to_string()),
            Some("FLAG-NOT-FOUND".to_string())
        );
    }

    #[test]
    fn collect_errors_deduplicates_and_orders() {
        let single = collect_errors(&["a.py:1:0: W0611 (unused-import)"]);
        let doubled = collect_errors(&[
            "a.py:1:0: W0611 (unused-import)",
            "a.py:1:0: W0611 (unused-import)",
        ]);
        assert_eq!(single, doubled);
        assert_eq!(doubled.len(), 1);

        let errors = collect_errors(&[
            "************* Module a",
            "a.py:9:0: C0301 Line too long (120/100) (line-too-long)",
            "a.py:1:0: C0114 Missing module docstring (missing-module-docstring)",
            "a.py:3:4: W0612 Unused variable 'x' (unused-variable)",
            "",
            "Your code has been rated at 5.00/10",
        ]);
        let names: Vec<&str> = errors.iter().map(ErrorCode::as_str).collect();
        assert_eq!(
            names,
            vec!["line-too-long", "missing-module-docstring", "unused-variable"]
        );
    }
}
