//! Nil-return safety check.
//!
//! Two rules over type-annotated Go declarations:
//!
//! * **RET001** — a function returns a pointer or non-error interface
//!   but declares no `error` result.
//! * **RET002** — a return statement pairs a literal `nil` error with a
//!   literal `nil` in a nil-prone result slot.

pub mod analysis;
pub mod classify;
pub mod returns;
pub mod rules;
pub mod signature;

pub use analysis::NilReturnAnalyzer;
