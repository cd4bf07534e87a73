//! Configuration loading from retguard.toml.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub retguard: RetguardConfig,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetguardConfig {
    pub severity_threshold: String,
    pub max_diagnostics: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub nilret: RuleConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub enabled: bool,
}

impl Default for RetguardConfig {
    fn default() -> Self {
        Self {
            severity_threshold: "warning".to_string(),
            max_diagnostics: 100,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            nilret: RuleConfig { enabled: true },
        }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Find and load retguard.toml, walking up from `start_dir`.
/// Returns default config if no file found.
pub fn load_config(start_dir: &Path) -> Config {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = std::fs::read_to_string(&path).unwrap_or_default();
            toml::from_str(&content).unwrap_or_default()
        }
        None => Config::default(),
    }
}

/// Walk up directories looking for retguard.toml.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join("retguard.toml");
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Default TOML content for `retguard init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"[retguard]
severity_threshold = "warning"
max_diagnostics = 100

[rules.nilret]
enabled = true
"#;
