//! readme-outputs: describe a JavaScript library's build outputs
//!
//! Turns the bundler's build targets into a markdown table of emitted files
//! (path, module format, transpiled, source maps) and splices it into the
//! README between two marker comments.

pub mod cli;
pub mod config;
pub mod describe;
pub mod domain;
pub mod plan;
pub mod project;
pub mod readme;
pub mod render;
pub mod splice;

pub use describe::{describe, DescriptorRow};
pub use project::{Project, ProjectOptions};
pub use render::{render, TableStyle};
pub use splice::{splice, SpliceError};
