// mod.rs - Result writers module

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::NeffMode;
use crate::data::Msa;

pub mod db;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

/// Render the console summary line for one pipeline run.
///
/// The normalized value is reported with three decimals; the raw cluster
/// count as a whole number.
pub fn format_summary(cutoff: f64, value: f64, mode: NeffMode) -> String {
    match mode {
        NeffMode::Normalized => format!(
            "Effective family size at {}% identity: {:.3}.",
            cutoff, value
        ),
        NeffMode::ClusterCount => format!(
            "Effective family size at {}% identity: {}.",
            cutoff, value as usize
        ),
    }
}

/// Write the normalized-mode Neff value as a single decimal line.
///
/// No header or trailing metadata: the file must parse back to the same
/// floating-point value.
pub fn write_neff_value(file_path: &str, value: f64) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", value).map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Write per-sequence cluster labels as `{id}\t{label}` lines, in row order
pub fn write_cluster_assignments(
    file_path: &str,
    msa: &Msa,
    assignment: &[usize],
) -> Result<(), String> {
    if msa.len() != assignment.len() {
        return Err(format!(
            "Cluster assignment has {} labels for {} sequences",
            assignment.len(),
            msa.len()
        ));
    }

    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    for (sequence, label) in msa.iter().zip(assignment.iter()) {
        writeln!(writer, "{}\t{}", sequence.id(), label)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Cluster assignments written to: {}", file_path);
    Ok(())
}
