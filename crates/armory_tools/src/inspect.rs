//! Snapshot inspection.

use std::path::Path;

use armory_core::error::{ProductionError, Result};
use armory_core::production::MaterialProduction;
use armory_core::snapshot::ProductionSnapshot;

/// Output format for a rendered snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed RON.
    #[default]
    Ron,
    /// Pretty-printed JSON.
    Json,
}

fn io_error(path: &Path, e: &std::io::Error) -> ProductionError {
    ProductionError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

/// Write a plan to a binary snapshot file.
///
/// # Errors
/// Returns an error if encoding or writing fails.
pub fn write_snapshot(path: &Path, production: &MaterialProduction) -> Result<()> {
    let bytes = production.serialize()?;
    std::fs::write(path, bytes).map_err(|e| io_error(path, &e))?;
    tracing::info!(path = %path.display(), "Wrote production snapshot");
    Ok(())
}

/// Read a binary snapshot file.
///
/// # Errors
/// Returns an error if reading or decoding fails.
pub fn read_snapshot(path: &Path) -> Result<ProductionSnapshot> {
    let bytes = std::fs::read(path).map_err(|e| io_error(path, &e))?;
    ProductionSnapshot::decode(&bytes)
}

/// Render a snapshot as text.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render(snapshot: &ProductionSnapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Ron => snapshot.to_ron(),
        OutputFormat::Json => serde_json::to_string_pretty(snapshot)
            .map_err(|e| ProductionError::Serialization(e.to_string())),
    }
}
