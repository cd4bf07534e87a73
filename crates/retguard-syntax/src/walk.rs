//! Statement traversal.

use crate::ast::{Block, Stmt};

/// Controls whether the walk descends into a statement's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Descend,
    Stop,
}

/// Depth-first pre-order walk over every statement in a block.
///
/// The callback sees each statement before its children and decides with
/// [`Flow`] whether children are visited. Statements are visited in source
/// order; `if` branches visit the then-block before the else-block.
pub fn walk<F>(block: &Block, visit: &mut F)
where
    F: FnMut(&Stmt) -> Flow,
{
    for stmt in &block.stmts {
        if visit(stmt) == Flow::Stop {
            continue;
        }
        match stmt {
            Stmt::If { then, els, .. } => {
                walk(then, visit);
                if let Some(els) = els {
                    walk(els, visit);
                }
            }
            Stmt::Loop { body, .. } | Stmt::Block { body } | Stmt::Closure { body, .. } => {
                walk(body, visit);
            }
            Stmt::Switch { cases, .. } => {
                for case in cases {
                    walk(case, visit);
                }
            }
            Stmt::Return(_) | Stmt::Simple { .. } => {}
        }
    }
}
