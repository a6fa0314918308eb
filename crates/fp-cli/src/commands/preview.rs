//! Preview command: estimate carbon for partial input without storing anything.

use std::io::Write;

use anyhow::Result;
use fp_core::{ActivityType, EmissionModel};

pub fn run<W: Write>(
    writer: &mut W,
    model: &EmissionModel,
    activity_type: ActivityType,
    raw_value: &str,
) -> Result<()> {
    let entry = model.entry(activity_type)?;
    writeln!(
        writer,
        "{} {}: {} kg/{}",
        entry.display.icon, entry.display.label, entry.factor, entry.display.unit
    )?;

    match model.preview(activity_type, raw_value) {
        Some(kg) => writeln!(writer, "Estimated Carbon Emission: {kg:.2} kg CO₂")?,
        None => writeln!(writer, "Enter a quantity in {} to see an estimate.", entry.display.unit)?,
    }
    Ok(())
}
