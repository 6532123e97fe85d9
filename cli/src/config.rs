use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hexalchemy_core::GeneratorConfig;

/// Reads generator settings from a TOML file, missing keys keep their defaults.
pub fn load(path: Option<&Path>) -> Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Could not parse config {}", path.display()))
}
