//! Configuration and package metadata loading.
//!
//! Precedence is CLI flags > config file > defaults; the CLI overrides are
//! applied by [`crate::project::Project::load`].

pub mod loader;
pub mod package;

pub use loader::load_config;
pub use package::load_package;
