//! Output rendering (markdown table, license banner)

pub mod banner;
pub mod table;

pub use banner::render_banner;
pub use table::{render, render_matrix, TableStyle};
