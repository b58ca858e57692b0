//! Banner command implementation

use anyhow::Result;
use clap::Args;

use super::args::ProjectArgs;

#[derive(Args)]
pub struct BannerArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: BannerArgs) -> Result<()> {
    let project = args.project.load(None)?;
    println!("{}", project.banner());
    Ok(())
}
