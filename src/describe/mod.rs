//! Turns build targets into one descriptor row per emitted file.

use crate::domain::{BuildTarget, ModuleFormat, SourceMapMode};

/// Number of cells in every rendered row.
pub const ROW_CELLS: usize = 4;

/// Flat description of one output artifact, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorRow {
    pub file: String,
    pub format: Option<ModuleFormat>,
    pub transpiled: bool,
    pub has_source_map: bool,
}

impl DescriptorRow {
    /// Table cells in header order: file, module type, transpiled, source maps.
    pub fn cells(&self) -> [String; ROW_CELLS] {
        [
            self.file.clone(),
            self.format.as_ref().map(ModuleFormat::to_string).unwrap_or_default(),
            yes_no(self.transpiled).to_string(),
            yes_no(self.has_source_map).to_string(),
        ]
    }
}

/// Describe every output of every target, targets first, then outputs, both
/// in input order.
pub fn describe(targets: &[BuildTarget]) -> Vec<DescriptorRow> {
    let mut rows = Vec::with_capacity(targets.iter().map(|t| t.outputs.len()).sum());
    for target in targets {
        let transpiled = target.transpiled();
        for output in &target.outputs {
            rows.push(DescriptorRow {
                file: output.file.clone(),
                format: output.format.clone(),
                transpiled,
                // Inline and hidden maps do not ship a separate file.
                has_source_map: output.sourcemap == SourceMapMode::External,
            });
        }
        tracing::debug!("Described target '{}' ({} outputs)", target.name, target.outputs.len());
    }
    rows
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
