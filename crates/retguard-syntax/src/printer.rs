//! Canonical source rendering for diagnostics.
//!
//! Diagnostic messages quote signatures and return statements back at the
//! user. Rendering goes through `fmt::Write` so a formatting failure is a
//! hard error rather than a silently truncated message.

use std::fmt::Write;

use crate::ast::{Field, FuncDecl, ReturnStmt};

/// Rendering a node back to source text failed.
#[derive(Debug, thiserror::Error)]
#[error("failed to render node to source text: {0}")]
pub struct RenderError(#[from] std::fmt::Error);

/// Renders a declaration header, body omitted: `func Get(id int) (*User, error)`.
pub fn render_signature(decl: &FuncDecl) -> Result<String, RenderError> {
    let mut out = String::new();
    write!(out, "func {}(", decl.name)?;
    write_fields(&mut out, &decl.params)?;
    out.push(')');

    match decl.results.len() {
        0 => {}
        1 if decl.results[0].name.is_none() => {
            write!(out, " {}", decl.results[0].type_src)?;
        }
        _ => {
            out.push_str(" (");
            write_fields(&mut out, &decl.results)?;
            out.push(')');
        }
    }
    Ok(out)
}

/// Renders a return statement: `return nil, nil`.
pub fn render_return(ret: &ReturnStmt) -> Result<String, RenderError> {
    let mut out = String::from("return");
    for (i, expr) in ret.exprs.iter().enumerate() {
        if i == 0 {
            out.push(' ');
        } else {
            out.push_str(", ");
        }
        write!(out, "{}", expr.src())?;
    }
    Ok(out)
}

fn write_fields(out: &mut String, fields: &[Field]) -> Result<(), RenderError> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if let Some(name) = &field.name {
            write!(out, "{name} ")?;
        }
        write!(out, "{}", field.type_src)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;

    fn field(name: Option<&str>, type_src: &str) -> Field {
        Field {
            name: name.map(Into::into),
            type_src: type_src.into(),
            type_id: 0,
        }
    }

    #[test]
    fn test_signature_single_unnamed_result() {
        let decl = FuncDecl {
            name: "testPtr".into(),
            span: None,
            params: vec![],
            results: vec![field(None, "*int")],
            body: None,
        };
        assert_eq!(render_signature(&decl).unwrap(), "func testPtr() *int");
    }

    #[test]
    fn test_signature_multiple_results_parenthesized() {
        let decl = FuncDecl {
            name: "testPtrAndErr".into(),
            span: None,
            params: vec![field(Some("id"), "int")],
            results: vec![field(None, "*int"), field(None, "error")],
            body: None,
        };
        assert_eq!(
            render_signature(&decl).unwrap(),
            "func testPtrAndErr(id int) (*int, error)"
        );
    }

    #[test]
    fn test_signature_named_results() {
        let decl = FuncDecl {
            name: "open".into(),
            span: None,
            params: vec![],
            results: vec![field(Some("f"), "*os.File"), field(Some("err"), "error")],
            body: None,
        };
        assert_eq!(
            render_signature(&decl).unwrap(),
            "func open() (f *os.File, err error)"
        );
    }

    #[test]
    fn test_render_return() {
        let ret = ReturnStmt {
            span: None,
            exprs: vec![
                Expr::Ident { name: "nil".into() },
                Expr::Other {
                    src: "errors.New(\"boom\")".into(),
                },
            ],
        };
        assert_eq!(
            render_return(&ret).unwrap(),
            "return nil, errors.New(\"boom\")"
        );
    }

    #[test]
    fn test_render_bare_return() {
        let ret = ReturnStmt {
            span: None,
            exprs: vec![],
        };
        assert_eq!(render_return(&ret).unwrap(), "return");
    }
}
