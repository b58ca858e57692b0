//! Update command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::args::ProjectArgs;
use crate::readme::{UpdateOutcome, WriteMode};

#[derive(Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// README to update (relative to --root)
    #[arg(long, value_name = "FILE")]
    pub readme: Option<PathBuf>,

    /// Fail if the README is out of date instead of rewriting it
    #[arg(long)]
    pub check: bool,
}

pub fn run(args: UpdateArgs) -> Result<()> {
    let project = args.project.load(args.readme)?;
    let readme = project.readme_path();
    let mode = if args.check { WriteMode::Check } else { WriteMode::Write };

    match (project.update_readme(mode)?, mode) {
        (UpdateOutcome::Updated, WriteMode::Check) => {
            anyhow::bail!(
                "README output table is out of date: {} (run `readme-outputs update`)",
                readme.display()
            )
        }
        (UpdateOutcome::Updated, WriteMode::Write) => {
            println!("Updated output table in {}", readme.display());
        }
        (UpdateOutcome::Unchanged, _) => {
            println!("Output table in {} is up to date", readme.display());
        }
        (UpdateOutcome::MarkersMissing, mode) => {
            let note = format!(
                "Markers not found in {}; expected '{}' followed by '{}'",
                readme.display(),
                project.config.markers.start,
                project.config.markers.end
            );
            // A check run that found nothing to check must be visible in CI logs.
            if mode == WriteMode::Check {
                eprintln!("warning: {note}");
            } else {
                println!("{note}");
            }
        }
    }

    Ok(())
}
