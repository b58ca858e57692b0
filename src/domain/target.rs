//! Build targets and the artifacts they emit.

use serde::Deserialize;
use std::fmt;

/// Module format of an emitted bundle, spelled the way the bundler spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ModuleFormat {
    Cjs,
    Esm,
    Umd,
    Iife,
    Amd,
    System,
    Other(String),
}

impl ModuleFormat {
    pub fn as_str(&self) -> &str {
        match self {
            ModuleFormat::Cjs => "cjs",
            ModuleFormat::Esm => "esm",
            ModuleFormat::Umd => "umd",
            ModuleFormat::Iife => "iife",
            ModuleFormat::Amd => "amd",
            ModuleFormat::System => "system",
            ModuleFormat::Other(name) => name,
        }
    }
}

impl From<String> for ModuleFormat {
    fn from(value: String) -> Self {
        let key = value.trim().to_ascii_lowercase();
        match key.as_str() {
            "cjs" | "commonjs" => ModuleFormat::Cjs,
            "esm" | "es" | "module" => ModuleFormat::Esm,
            "umd" => ModuleFormat::Umd,
            "iife" => ModuleFormat::Iife,
            "amd" => ModuleFormat::Amd,
            "system" | "systemjs" => ModuleFormat::System,
            _ => ModuleFormat::Other(value),
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a bundle ships its source map.
///
/// Only `External` (the bundler's `sourcemap: true`) counts as shipping a map
/// in the output table. Inline and hidden maps are reported as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawSourceMap")]
pub enum SourceMapMode {
    #[default]
    None,
    Inline,
    Hidden,
    External,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSourceMap {
    Flag(bool),
    Named(String),
}

impl From<RawSourceMap> for SourceMapMode {
    fn from(raw: RawSourceMap) -> Self {
        match raw {
            RawSourceMap::Flag(true) => SourceMapMode::External,
            RawSourceMap::Flag(false) => SourceMapMode::None,
            RawSourceMap::Named(name) => match name.trim().to_ascii_lowercase().as_str() {
                "external" => SourceMapMode::External,
                "inline" => SourceMapMode::Inline,
                "hidden" => SourceMapMode::Hidden,
                "none" | "" => SourceMapMode::None,
                other => {
                    tracing::warn!("Unknown sourcemap mode '{}', treating as none", other);
                    SourceMapMode::None
                }
            },
        }
    }
}

/// A processing step applied to every output of a target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ProcessingStep {
    Resolve,
    Transpile,
    CommonJs,
    Banner,
    Other(String),
}

impl From<String> for ProcessingStep {
    fn from(value: String) -> Self {
        let key = value.trim().to_ascii_lowercase();
        match key.as_str() {
            "resolve" | "node-resolve" => ProcessingStep::Resolve,
            "transpile" | "babel" => ProcessingStep::Transpile,
            "commonjs" => ProcessingStep::CommonJs,
            "banner" => ProcessingStep::Banner,
            _ => ProcessingStep::Other(value),
        }
    }
}

/// One emitted file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct OutputArtifact {
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub format: Option<ModuleFormat>,
    #[serde(default)]
    pub sourcemap: SourceMapMode,
}

impl OutputArtifact {
    pub fn new(file: impl Into<String>, format: ModuleFormat, sourcemap: SourceMapMode) -> Self {
        Self { file: file.into(), format: Some(format), sourcemap }
    }
}

/// One bundler invocation: a set of outputs sharing the same processing steps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BuildTarget {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub outputs: Vec<OutputArtifact>,
    #[serde(default)]
    pub steps: Vec<ProcessingStep>,
}

impl BuildTarget {
    pub fn new(
        name: impl Into<String>,
        outputs: Vec<OutputArtifact>,
        steps: Vec<ProcessingStep>,
    ) -> Self {
        Self { name: name.into(), outputs, steps }
    }

    /// Whether every output of this target goes through the transpiler.
    pub fn transpiled(&self) -> bool {
        self.steps.contains(&ProcessingStep::Transpile)
    }
}
