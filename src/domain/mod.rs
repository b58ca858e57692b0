//! Core data types shared by every stage of the pipeline.

pub mod config;
pub mod package;
pub mod target;

pub use config::{Config, Markers, DEFAULT_END_MARKER, DEFAULT_HEADER, DEFAULT_START_MARKER};
pub use package::{Author, PackageMeta};
pub use target::{BuildTarget, ModuleFormat, OutputArtifact, ProcessingStep, SourceMapMode};

/// Which kind of build the table documents.
///
/// Production builds write source maps next to the bundle; watch builds inline
/// them into the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    #[default]
    Production,
    Watch,
}

impl BuildMode {
    pub fn from_watch_flag(watch: bool) -> Self {
        if watch {
            BuildMode::Watch
        } else {
            BuildMode::Production
        }
    }

    pub fn sourcemap(self) -> SourceMapMode {
        match self {
            BuildMode::Production => SourceMapMode::External,
            BuildMode::Watch => SourceMapMode::Inline,
        }
    }
}
