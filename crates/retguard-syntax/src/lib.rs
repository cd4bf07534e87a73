//! Type-annotated Go syntax consumed from the retguard front-end.
//!
//! The front-end parses and type-checks Go source, then serializes the
//! declarations and resolved types as JSON. This crate owns that schema
//! plus the traversal and rendering helpers the checks build on.

pub mod ast;
pub mod printer;
pub mod types;
pub mod walk;

use std::path::Path;

use ast::AnalysisInput;

/// Failure to load front-end output.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid front-end JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads front-end output from a JSON file.
pub fn load_json_file(path: &Path) -> Result<AnalysisInput, InputError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Loads a checked-in fixture by name, e.g. `"nilret/basic"`.
#[cfg(any(test, feature = "test-fixtures"))]
pub fn load_fixture(name: &str) -> AnalysisInput {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(format!("{name}.json"));
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    serde_json::from_str(&data)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
}
