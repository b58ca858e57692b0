//! Table command implementation

use anyhow::Result;
use clap::Args;

use super::args::ProjectArgs;

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: TableArgs) -> Result<()> {
    let project = args.project.load(None)?;
    println!("{}", project.table());
    Ok(())
}
