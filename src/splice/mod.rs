//! Marker-delimited text replacement.

use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpliceError {
    #[error("start marker must not be empty")]
    EmptyStartMarker,
    #[error("end marker must not be empty")]
    EmptyEndMarker,
}

/// Byte range strictly between the first `start_marker` and the first
/// `end_marker` that follows it.
///
/// Returns `None` when either marker is missing, including the case where the
/// end marker only occurs before the start marker.
pub fn locate(document: &str, start_marker: &str, end_marker: &str) -> Option<Range<usize>> {
    let start = document.find(start_marker)? + start_marker.len();
    let end = start + document[start..].find(end_marker)?;
    Some(start..end)
}

/// Replace the text between the markers with `replacement`, keeping both
/// markers and everything around them.
///
/// A document without both markers is returned unchanged; compare the result
/// with the input (or call [`locate`]) to detect that case.
pub fn splice(
    document: &str,
    start_marker: &str,
    end_marker: &str,
    replacement: &str,
) -> Result<String, SpliceError> {
    if start_marker.is_empty() {
        return Err(SpliceError::EmptyStartMarker);
    }
    if end_marker.is_empty() {
        return Err(SpliceError::EmptyEndMarker);
    }

    let Some(interior) = locate(document, start_marker, end_marker) else {
        return Ok(document.to_string());
    };

    let mut spliced =
        String::with_capacity(document.len() - interior.len() + replacement.len());
    spliced.push_str(&document[..interior.start]);
    spliced.push_str(replacement);
    spliced.push_str(&document[interior.end..]);
    Ok(spliced)
}
