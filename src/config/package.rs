//! `package.json` loading

use crate::domain::PackageMeta;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_package(path: &Path) -> Result<PackageMeta> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading package metadata: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid package metadata: {}", path.display()))
}
