//! Audit command: recompute stored carbon values against the factor table.

use std::io::Write;

use anyhow::Result;
use fp_core::{Activity, EmissionModel};

/// Writes a report and returns the number of mismatched activities.
pub fn run<W: Write>(writer: &mut W, model: &EmissionModel, activities: &[Activity]) -> Result<usize> {
    let mismatches = model.audit(activities);

    if mismatches.is_empty() {
        writeln!(
            writer,
            "All {} activities match their stamped carbon.",
            activities.len()
        )?;
        return Ok(0);
    }

    writeln!(
        writer,
        "{} of {} activities have a stale carbon stamp:",
        mismatches.len(),
        activities.len()
    )?;
    for mismatch in &mismatches {
        writeln!(
            writer,
            "- {} ({} {}): stored {} kg, expected {} kg",
            mismatch.id, mismatch.value, mismatch.activity_type, mismatch.stored_kg, mismatch.expected_kg
        )?;
    }
    Ok(mismatches.len())
}
