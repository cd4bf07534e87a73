//! Syntax tree wrappers for Go function declarations.
//!
//! These types mirror the JSON schema produced by the retguard front-end
//! (a `go/ast` + `go/types` walker). The front-end resolves types ahead of
//! time; every type reference here is an ID into [`crate::types::TypeRef`]
//! entries carried alongside the tree.

use serde::{Deserialize, Serialize};

use crate::types::TypeRef;

/// Root type — complete analysis input from the front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub files: Vec<SourceFile>,
    pub types: Vec<TypeRef>,
    pub go_version: String,
    #[serde(default)]
    pub frontend_version: String,
}

/// One Go source file with its top-level function declarations.
///
/// Methods are serialized as plain declarations with a qualified name
/// (`(*Handler).Get`); the check treats them the same as free functions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: String,
    pub package_name: String,
    #[serde(default)]
    pub decls: Vec<FuncDecl>,
}

/// A function declaration with resolved result types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: String,
    #[serde(default)]
    pub span: Option<Span>,
    #[serde(default)]
    pub params: Vec<Field>,
    /// Declared results, one entry per slot. Grouped declarations like
    /// `(a, b *int)` arrive pre-expanded by the front-end.
    #[serde(default)]
    pub results: Vec<Field>,
    /// Absent for declarations without a body (assembly stubs, externs).
    #[serde(default)]
    pub body: Option<Block>,
}

/// One parameter or result slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: Option<String>,
    /// Canonical source text of the type expression (`*int`, `io.Reader`).
    pub type_src: String,
    /// Resolved type ID; 0 when the front-end could not resolve the type.
    #[serde(default)]
    pub type_id: u32,
}

/// A braced statement list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub stmts: Vec<Stmt>,
}

/// A statement, shaped for the one traversal this tool performs.
///
/// Only structure that can contain return statements is kept; everything
/// else arrives as an opaque [`Stmt::Simple`] leaf with its source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Stmt {
    Return(ReturnStmt),
    If {
        then: Block,
        #[serde(default)]
        els: Option<Block>,
        #[serde(default)]
        span: Option<Span>,
    },
    Loop {
        body: Block,
        #[serde(default)]
        span: Option<Span>,
    },
    Switch {
        #[serde(default)]
        cases: Vec<Block>,
        #[serde(default)]
        span: Option<Span>,
    },
    Block {
        body: Block,
    },
    /// A statement-level function literal (`go func(){...}()`, `defer`,
    /// or a literal assigned to a variable). Its body belongs to a
    /// different signature.
    Closure {
        body: Block,
        #[serde(default)]
        span: Option<Span>,
    },
    Simple {
        #[serde(default)]
        src: String,
        #[serde(default)]
        span: Option<Span>,
    },
}

/// A return statement with one expression per result slot.
///
/// Bare returns (named results) and single-call multi-value returns carry
/// fewer expressions than the signature has slots; consumers must check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnStmt {
    #[serde(default)]
    pub span: Option<Span>,
    #[serde(default)]
    pub exprs: Vec<Expr>,
}

/// An expression in a return statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expr {
    Ident { name: String },
    Other { src: String },
}

impl Expr {
    /// Whether this expression is the literal `nil` identifier.
    ///
    /// Purely syntactic: a variable that happens to hold nil is not
    /// detected, by design.
    pub fn is_nil_literal(&self) -> bool {
        matches!(self, Expr::Ident { name } if name == "nil")
    }

    /// Canonical source text of the expression.
    pub fn src(&self) -> &str {
        match self {
            Expr::Ident { name } => name,
            Expr::Other { src } => src,
        }
    }
}

/// Source location span (1-based, matching Go's `token.Position`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    pub file: String,
    pub start_line: u32,
    pub start_col: u32,
    #[serde(default)]
    pub end_line: u32,
    #[serde(default)]
    pub end_col: u32,
}

impl Span {
    pub fn new(file: impl Into<String>, line: u32, col: u32) -> Self {
        Self {
            file: file.into(),
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col,
        }
    }
}
