//! Marker-delimited doc-block injection
//!
//! Inserts or replaces a region delimited by clavix markers inside a project
//! file, leaving everything outside the markers byte-for-byte intact.

use anyhow::{anyhow, Result};
use log::debug;
use std::path::Path;
use tokio::fs;

pub const BEGIN_MARKER: &str = "<!-- CLAVIX:BEGIN -->";
pub const END_MARKER: &str = "<!-- CLAVIX:END -->";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    Created,
    Updated,
    Unchanged,
}

/// Pure string form of the injection. Appends a new marked region when none
/// exists, otherwise replaces the region's interior.
pub fn inject_block(existing: &str, block: &str) -> Result<String> {
    let framed = format!("{}\n{}\n{}", BEGIN_MARKER, block.trim_end(), END_MARKER);

    match (existing.find(BEGIN_MARKER), existing.find(END_MARKER)) {
        (Some(start), Some(end)) => {
            if end < start {
                return Err(anyhow!("clavix markers are out of order"));
            }
            let after = end + END_MARKER.len();
            Ok(format!(
                "{}{}{}",
                &existing[..start],
                framed,
                &existing[after..]
            ))
        }
        (None, None) => {
            if existing.is_empty() {
                Ok(format!("{}\n", framed))
            } else {
                let separator = if existing.ends_with('\n') { "\n" } else { "\n\n" };
                Ok(format!("{}{}{}\n", existing, separator, framed))
            }
        }
        _ => Err(anyhow!("found one clavix marker without its pair")),
    }
}

/// File-level injection. Creates the file when missing; writes only when the
/// content would actually change.
pub async fn inject_into_file(path: &Path, block: &str) -> Result<InjectOutcome> {
    if !path.exists() {
        let content = inject_block("", block)?;
        fs::write(path, content).await?;
        debug!("created {} with clavix block", path.display());
        return Ok(InjectOutcome::Created);
    }

    let existing = fs::read_to_string(path).await?;
    let updated = inject_block(&existing, block)?;
    if updated == existing {
        return Ok(InjectOutcome::Unchanged);
    }
    fs::write(path, updated).await?;
    debug!("updated clavix block in {}", path.display());
    Ok(InjectOutcome::Updated)
}
