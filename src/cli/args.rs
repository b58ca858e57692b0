//! Arguments shared by every subcommand.

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args};
use std::path::PathBuf;

use super::utils::parse_csv;
use crate::domain::BuildMode;
use crate::project::{Project, ProjectOptions};

#[derive(Args)]
pub struct ProjectArgs {
    /// Project root containing package.json and the README
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Path to config file (readme-outputs.toml or readme-outputs.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the table header (comma-separated)
    #[arg(long, value_name = "COLUMNS")]
    pub header: Option<String>,

    /// Describe a watch build (inline source maps)
    ///
    /// Any non-empty `ROLLUP_WATCH` other than 0/false/no/off also selects watch mode.
    #[arg(
        short = 'w',
        long,
        env = "ROLLUP_WATCH",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub watch: bool,
}

impl ProjectArgs {
    pub fn load(&self, readme: Option<PathBuf>) -> Result<Project> {
        let options = ProjectOptions {
            config_path: self.config.clone(),
            readme,
            header: parse_csv(&self.header),
            mode: BuildMode::from_watch_flag(self.watch),
        };
        Project::load(&self.root, options)
    }
}
