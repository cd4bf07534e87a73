//! Diagnostic model and output formatters.

pub mod diagnostic;
pub mod human;

pub use diagnostic::{AnalysisSummary, Diagnostic, Location, Severity};
pub use human::format_human;
