//! Summary command: the day's footprint, month totals, breakdown and tips.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use fp_core::{Activity, AggregateSnapshot, summarize};

/// Generates a 10-character progress bar for a percentage.
/// Non-zero shares below 5% get a single block for visibility.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn progress_bar(percentage: f64) -> String {
    let filled = if percentage > 0.0 && percentage < 5.0 {
        1
    } else {
        (percentage / 10.0).round().clamp(0.0, 10.0) as usize
    };
    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Formats the human-readable summary.
pub fn format_summary(snapshot: &AggregateSnapshot) -> String {
    let mut output = String::new();

    writeln!(output, "FOOTPRINT: {}", snapshot.day.format("%A, %b %-d, %Y")).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "{}", snapshot.status.label).unwrap();
    writeln!(output, "Today:         {:.1} kg CO₂", snapshot.daily_total).unwrap();
    writeln!(output, "This month:    {:.1} kg", snapshot.monthly_total).unwrap();
    writeln!(output, "Daily average: {:.1} kg", snapshot.daily_average).unwrap();
    writeln!(output, "{}", snapshot.status.message).unwrap();

    writeln!(output).unwrap();
    writeln!(output, "TODAY'S BREAKDOWN").unwrap();
    writeln!(output, "─────────────────").unwrap();
    if snapshot.day_count == 0 {
        writeln!(output, "No activities logged today.").unwrap();
    } else {
        for share in snapshot.category_breakdown.shares(snapshot.daily_total) {
            writeln!(
                output,
                "{:<12} {:>6.2} kg {:>4.0}% {}",
                share.category.label(),
                share.carbon_kg,
                share.percentage,
                progress_bar(share.percentage)
            )
            .unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(output, "TIPS").unwrap();
    writeln!(output, "────").unwrap();
    for suggestion in &snapshot.suggestions {
        writeln!(output, "- {suggestion}").unwrap();
    }

    output
}

pub fn run<W: Write>(
    writer: &mut W,
    activities: &[Activity],
    day: NaiveDate,
    json: bool,
) -> Result<()> {
    let snapshot = summarize(activities, day);
    tracing::debug!(
        daily_total = snapshot.daily_total,
        monthly_total = snapshot.monthly_total,
        "computed summary"
    );

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    } else {
        write!(writer, "{}", format_summary(&snapshot))?;
    }
    Ok(())
}
