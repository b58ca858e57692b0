//! Rewrites the generated region of the README in place.

use crate::domain::Markers;
use crate::splice::{locate, splice};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Write the spliced document back to disk.
    Write,
    /// Only report whether the document would change.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    Unchanged,
    /// One of the markers was not found; the document was left as it was.
    MarkersMissing,
}

/// Surround the table with blank lines so it renders as its own markdown block.
pub fn frame_table(table: &str) -> String {
    format!("\n\n{table}\n\n")
}

/// Splice `table` into the document at `path` between `markers`.
///
/// The file is read once and, in [`WriteMode::Write`], written once.
pub fn update_readme(
    path: &Path,
    markers: &Markers,
    table: &str,
    mode: WriteMode,
) -> Result<UpdateOutcome> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed reading document: {}", path.display()))?;

    let updated = splice(&original, &markers.start, &markers.end, &frame_table(table))
        .with_context(|| format!("Invalid markers for {}", path.display()))?;

    let outcome = if locate(&original, &markers.start, &markers.end).is_none() {
        tracing::warn!(
            "Markers '{}' ... '{}' not found in {}; leaving it unchanged",
            markers.start,
            markers.end,
            path.display()
        );
        UpdateOutcome::MarkersMissing
    } else if updated == original {
        UpdateOutcome::Unchanged
    } else {
        UpdateOutcome::Updated
    };

    if mode == WriteMode::Write {
        fs::write(path, &updated)
            .with_context(|| format!("Failed writing document: {}", path.display()))?;
        tracing::debug!("Wrote {} ({:?})", path.display(), outcome);
    }

    Ok(outcome)
}
