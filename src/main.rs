//! readme-outputs binary entry point

use anyhow::Result;

fn main() -> Result<()> {
    readme_outputs::cli::run()
}
