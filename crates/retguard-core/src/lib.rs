//! Configuration and run orchestration.

pub mod config;
pub mod orchestrator;

pub use config::{load_config, Config, DEFAULT_CONFIG_TOML};
pub use orchestrator::{analyze_file, analyze_input, AnalysisOutput, OrchestratorError};
