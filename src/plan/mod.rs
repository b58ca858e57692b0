//! Default build plan derived from `package.json` entry points.

use crate::domain::{
    BuildMode, BuildTarget, ModuleFormat, OutputArtifact, PackageMeta, ProcessingStep,
};

/// Steps every default target runs through.
fn default_steps() -> Vec<ProcessingStep> {
    vec![
        ProcessingStep::Resolve,
        ProcessingStep::Transpile,
        ProcessingStep::CommonJs,
        ProcessingStep::Banner,
    ]
}

/// Two targets: `modern` (CommonJS `main` and ES `module` entry points) and
/// `legacy` (the UMD `unpkg` bundle).
///
/// Entry points missing from `package.json` are skipped, and a target left
/// without outputs is dropped.
pub fn default_targets(pkg: &PackageMeta, mode: BuildMode) -> Vec<BuildTarget> {
    let sourcemap = mode.sourcemap();
    let artifact = |file: &Option<String>, format: ModuleFormat| {
        file.as_ref().map(|file| OutputArtifact::new(file.clone(), format, sourcemap))
    };

    let plan = [
        (
            "modern",
            vec![artifact(&pkg.main, ModuleFormat::Cjs), artifact(&pkg.module, ModuleFormat::Esm)],
        ),
        ("legacy", vec![artifact(&pkg.unpkg, ModuleFormat::Umd)]),
    ];

    plan.into_iter()
        .filter_map(|(name, outputs)| {
            let outputs: Vec<OutputArtifact> = outputs.into_iter().flatten().collect();
            if outputs.is_empty() {
                tracing::debug!("Skipping target '{}': no entry points in package metadata", name);
                return None;
            }
            Some(BuildTarget::new(name, outputs, default_steps()))
        })
        .collect()
}
