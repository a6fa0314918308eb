//! Types command: the emission factor table.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use fp_core::{EmissionFactorEntry, EmissionModel};

/// Formats one line per activity type.
pub fn format_entries(entries: &[EmissionFactorEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        writeln!(
            output,
            "{} {:<20} {:>6} kg/{:<5} {}",
            entry.display.icon,
            entry.activity_type.as_str(),
            entry.factor,
            entry.display.unit,
            entry.display.label
        )
        .unwrap();
    }
    output
}

pub fn run<W: Write>(writer: &mut W, model: &EmissionModel, json: bool) -> Result<()> {
    let entries = model.entries()?;
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        write!(writer, "{}", format_entries(&entries))?;
    }
    Ok(())
}
