use std::fs;

use serde::Deserialize;

use crate::domain::errors::AudioError;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ScanConfig {
    pub target: String,
    pub patterns: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub report: Option<String>,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, AudioError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
