//! Return statement matching for functions that do declare an error.
//!
//! Walks the body, finds return statements whose error expression is the
//! literal `nil`, and flags every nil-prone slot that is also literal nil
//! in the same statement.

use retguard_diagnostics::Diagnostic;
use retguard_syntax::ast::{Block, FuncDecl, Stmt};
use retguard_syntax::printer::{render_return, RenderError};
use retguard_syntax::walk::{walk, Flow};

use crate::signature::FunctionSignature;

/// Match returns in `body` against the scanned signature.
///
/// Only called for signatures with an error slot. Returns with the wrong
/// expression count (bare returns with named results, single-call
/// multi-value returns) are skipped; the nil literals this rule targets
/// cannot occur there.
pub fn match_returns(
    decl: &FuncDecl,
    sig: &FunctionSignature,
    body: &Block,
    file: &str,
    out: &mut Vec<Diagnostic>,
) -> Result<(), RenderError> {
    let error_slot = match sig.error_slot {
        Some(slot) => slot,
        None => return Ok(()),
    };

    let mut render_failure = None;
    walk(body, &mut |stmt| match stmt {
        // A nested function literal has its own signature; its returns
        // do not belong to this declaration.
        Stmt::Closure { .. } => Flow::Stop,
        Stmt::Return(ret) => {
            if ret.exprs.len() != sig.slots.len() {
                return Flow::Stop;
            }
            if !ret.exprs[error_slot].is_nil_literal() {
                return Flow::Stop;
            }
            for &index in &sig.maybe_nil {
                if ret.exprs[index].is_nil_literal() {
                    match render_return(ret) {
                        Ok(stmt_text) => out.push(crate::rules::build_ret002(
                            ret.span.as_ref(),
                            file,
                            &decl.name,
                            index,
                            &stmt_text,
                        )),
                        Err(e) => {
                            render_failure.get_or_insert(e);
                            return Flow::Stop;
                        }
                    }
                }
            }
            Flow::Stop
        }
        _ => Flow::Descend,
    });

    match render_failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
