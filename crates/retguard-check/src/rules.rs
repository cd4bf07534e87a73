//! Diagnostic constructors for the nil-return rules.

use retguard_diagnostics::{Diagnostic, Location, Severity};
use retguard_syntax::ast::Span;

/// RET001: a function returns nil-prone values but declares no error
/// result, so callers have no in-band failure signal.
pub fn build_ret001(span: Option<&Span>, file: &str, signature: &str) -> Diagnostic {
    Diagnostic::new(
        "RET001",
        Severity::Warning,
        "nilable result without error result",
        format!("Function `{signature}` should return `error`"),
        extract_location(span, file),
    )
}

/// RET002: a return statement pairs a literal nil error with a literal
/// nil value in a nil-prone slot, promising success while delivering
/// nothing.
pub fn build_ret002(
    span: Option<&Span>,
    file: &str,
    func_name: &str,
    index: usize,
    stmt: &str,
) -> Diagnostic {
    Diagnostic::new(
        "RET002",
        Severity::Error,
        "nil value returned alongside nil error",
        format!("Return value of `{func_name}` at {index} in `{stmt}` should not be `nil`"),
        extract_location(span, file),
    )
}

fn extract_location(span: Option<&Span>, file: &str) -> Location {
    match span {
        Some(span) => Location {
            file: span.file.clone(),
            line: span.start_line,
            column: span.start_col,
            end_line: span.end_line,
            end_column: span.end_col,
        },
        None => Location::new(file, 0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ret001_shape() {
        let span = Span::new("main.go", 7, 1);
        let diag = build_ret001(Some(&span), "main.go", "func testPtr() *int");
        assert_eq!(diag.rule, "RET001");
        assert_eq!(diag.id, "RET001-main.go:7");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(
            diag.explanation,
            "Function `func testPtr() *int` should return `error`"
        );
    }

    #[test]
    fn test_ret002_shape() {
        let span = Span::new("main.go", 14, 2);
        let diag = build_ret002(Some(&span), "main.go", "testPtrAndErr", 0, "return nil, nil");
        assert_eq!(diag.rule, "RET002");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(
            diag.explanation,
            "Return value of `testPtrAndErr` at 0 in `return nil, nil` should not be `nil`"
        );
        assert_eq!(diag.location.line, 14);
    }

    #[test]
    fn test_missing_span_falls_back_to_file() {
        let diag = build_ret001(None, "lib.go", "func get() *int");
        assert_eq!(diag.location.file, "lib.go");
        assert_eq!(diag.location.line, 0);
    }
}
