//! The nil-return analysis pass.

use retguard_diagnostics::Diagnostic;
use retguard_syntax::ast::AnalysisInput;
use retguard_syntax::printer::{render_signature, RenderError};
use retguard_syntax::types::TypeTable;
use tracing::debug;

use crate::returns::match_returns;
use crate::rules::build_ret001;
use crate::signature::scan;

/// Flags functions that hand back nil-prone values without an error
/// channel, and returns that pair literal nil values with a literal nil
/// error.
pub struct NilReturnAnalyzer;

impl NilReturnAnalyzer {
    /// Run the pass over a complete front-end input.
    pub fn analyze(input: &AnalysisInput) -> Result<Vec<Diagnostic>, RenderError> {
        let types = TypeTable::from_input(&input.types);
        let mut diagnostics = Vec::new();

        for file in &input.files {
            for decl in &file.decls {
                let Some(sig) = scan(&types, decl) else {
                    continue;
                };
                if !sig.has_maybe_nil() {
                    continue;
                }

                if sig.error_slot.is_none() {
                    // No error result: the signature itself is the
                    // finding. The body is irrelevant.
                    let signature = render_signature(decl)?;
                    diagnostics.push(build_ret001(decl.span.as_ref(), &file.path, &signature));
                    continue;
                }

                if let Some(body) = &decl.body {
                    match_returns(decl, &sig, body, &file.path, &mut diagnostics)?;
                }
            }
            debug!(file = %file.path, decls = file.decls.len(), "checked file");
        }

        Ok(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retguard_syntax::load_fixture;

    #[test]
    fn test_basic_fixture_findings() {
        let input = load_fixture("nilret/basic");
        let diags = NilReturnAnalyzer::analyze(&input).unwrap();

        assert_eq!(diags.len(), 4);

        // testPtr: *int with no error result.
        assert_eq!(diags[0].rule, "RET001");
        assert!(diags[0].explanation.contains("func testPtr() *int"));

        // testPtrAndErr: second return is `return nil, nil`.
        assert_eq!(diags[1].rule, "RET002");
        assert_eq!(
            diags[1].explanation,
            "Return value of `testPtrAndErr` at 0 in `return nil, nil` should not be `nil`"
        );

        // testItf: non-error interface with no error result.
        assert_eq!(diags[2].rule, "RET001");
        assert!(diags[2].explanation.contains("testItf"));

        // testItfAndErr: `return nil, nil`.
        assert_eq!(diags[3].rule, "RET002");
        assert!(diags[3].explanation.contains("testItfAndErr"));
    }

    #[test]
    fn test_basic_fixture_first_returns_clean() {
        let input = load_fixture("nilret/basic");
        let diags = NilReturnAnalyzer::analyze(&input).unwrap();

        // Each *AndErr function has an earlier clean return that must
        // not be flagged; exactly one finding per function.
        let per_func = |name: &str| {
            diags
                .iter()
                .filter(|d| d.explanation.contains(name))
                .count()
        };
        assert_eq!(per_func("testPtrAndErr"), 1);
        assert_eq!(per_func("testItfAndErr"), 1);
    }

    #[test]
    fn test_empty_input_clean() {
        let input = AnalysisInput {
            files: vec![],
            types: vec![],
            go_version: "1.26".into(),
            frontend_version: String::new(),
        };
        let diags = NilReturnAnalyzer::analyze(&input).unwrap();
        assert!(diags.is_empty());
    }
}
