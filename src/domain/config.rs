//! Tool configuration as read from `readme-outputs.toml` (or YAML).

use crate::domain::BuildTarget;
use crate::render::TableStyle;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_START_MARKER: &str = "<!-- Output table (auto generated do not modify) -->";
pub const DEFAULT_END_MARKER: &str = "<!-- END -->";

pub const DEFAULT_HEADER: [&str; 4] = ["File", "Module Type", "Transpiled", "Source Maps"];

/// The two literal comments that fence the generated region of the README.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self { start: DEFAULT_START_MARKER.to_string(), end: DEFAULT_END_MARKER.to_string() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// README to update, relative to the project root.
    pub readme: PathBuf,
    /// `package.json` to read metadata from, relative to the project root.
    pub package: PathBuf,
    pub markers: Markers,
    pub header: Vec<String>,
    pub style: TableStyle,
    /// Explicit build targets. When absent the default plan is derived from
    /// `package.json`.
    pub targets: Option<Vec<BuildTarget>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            readme: PathBuf::from("README.md"),
            package: PathBuf::from("package.json"),
            markers: Markers::default(),
            header: DEFAULT_HEADER.iter().map(|h| h.to_string()).collect(),
            style: TableStyle::default(),
            targets: None,
        }
    }
}
