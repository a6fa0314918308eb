//! List command: recent activities, newest first.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use fp_core::{Activity, label_for, recent};

/// Formats activities as one line each.
pub fn format_activities(activities: &[Activity]) -> String {
    let mut output = String::new();

    if activities.is_empty() {
        writeln!(output, "No activities logged yet.").unwrap();
        writeln!(
            output,
            "Hint: Run 'fp log <type> <value>' to add your first activity."
        )
        .unwrap();
        return output;
    }

    for activity in activities {
        let label = label_for(activity.activity_type);
        writeln!(
            output,
            "{}  {} {}: {} {}  {:.2} kg  [{}]",
            activity.activity_date.format("%b %-d"),
            label.icon,
            label.label,
            activity.value,
            label.unit,
            activity.carbon_kg,
            activity.id
        )
        .unwrap();
    }
    output
}

pub fn run<W: Write>(writer: &mut W, activities: &[Activity], limit: usize, json: bool) -> Result<()> {
    let shown = recent(activities, limit);
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(shown)?)?;
    } else {
        write!(writer, "{}", format_activities(shown))?;
    }
    Ok(())
}
