//! Everything one invocation works from, loaded once at startup.

use crate::config::{load_config, load_package};
use crate::describe::{describe, DescriptorRow, ROW_CELLS};
use crate::domain::{BuildMode, BuildTarget, Config, PackageMeta};
use crate::plan::default_targets;
use crate::readme::{update_readme, UpdateOutcome, WriteMode};
use crate::render::{render, render_banner};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI-level overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct ProjectOptions {
    pub config_path: Option<PathBuf>,
    pub readme: Option<PathBuf>,
    pub header: Option<Vec<String>>,
    pub mode: BuildMode,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub package: PackageMeta,
    pub targets: Vec<BuildTarget>,
    pub mode: BuildMode,
}

impl Project {
    pub fn load(root: &Path, options: ProjectOptions) -> Result<Self> {
        if !root.is_dir() {
            anyhow::bail!("Project root is not a directory: {}", root.display());
        }

        let mut config = load_config(root, options.config_path.as_deref())?;
        if let Some(readme) = options.readme {
            config.readme = readme;
        }
        if let Some(header) = options.header {
            config.header = header;
        }
        if config.header.len() != ROW_CELLS {
            anyhow::bail!(
                "Table header must have {} columns \
                 (file, module type, transpiled, source maps), got {}: {:?}",
                ROW_CELLS,
                config.header.len(),
                config.header
            );
        }

        let package_path = root.join(&config.package);
        let (package, targets) = match config.targets.clone() {
            Some(targets) => {
                // Explicit targets only need package metadata for the banner.
                let package = if package_path.exists() {
                    load_package(&package_path)?
                } else {
                    tracing::debug!(
                        "No package metadata at {}; banner fields will be empty",
                        package_path.display()
                    );
                    PackageMeta::default()
                };
                (package, targets)
            }
            None => {
                let package = load_package(&package_path).context(
                    "No build targets configured, so package metadata is required to derive them",
                )?;
                let targets = default_targets(&package, options.mode);
                (package, targets)
            }
        };

        tracing::info!(
            "Loaded {} build target(s) from {}",
            targets.len(),
            if config.targets.is_some() { "config" } else { "package metadata" }
        );

        Ok(Self { root: root.to_path_buf(), config, package, targets, mode: options.mode })
    }

    pub fn readme_path(&self) -> PathBuf {
        self.root.join(&self.config.readme)
    }

    pub fn rows(&self) -> Vec<DescriptorRow> {
        describe(&self.targets)
    }

    pub fn table(&self) -> String {
        render(self.config.header.as_slice(), &self.rows(), &self.config.style)
    }

    pub fn banner(&self) -> String {
        render_banner(&self.package)
    }

    pub fn update_readme(&self, mode: WriteMode) -> Result<UpdateOutcome> {
        update_readme(&self.readme_path(), &self.config.markers, &self.table(), mode)
    }
}
