//! Log command: stamp an activity with its carbon mass and persist it.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use fp_core::{Activity, ActivityType, EmissionModel, label_for};
use fp_db::Database;

/// Stamps and stores an activity for `user_id`.
///
/// Dates after `today` are rejected, matching the date picker of the logging form.
#[expect(clippy::too_many_arguments, reason = "mirrors the logging form fields")]
pub fn run<W: Write>(
    writer: &mut W,
    db: &mut Database,
    model: &EmissionModel,
    user_id: &str,
    activity_type: ActivityType,
    value: f64,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<Activity> {
    if date > today {
        anyhow::bail!("cannot log an activity in the future: {date} is after {today}");
    }

    let new_activity = model
        .new_activity(activity_type, value, date)
        .context("failed to calculate carbon")?;
    let activity = db
        .insert_activity(user_id, &new_activity, Utc::now())
        .context("failed to store activity")?;
    tracing::info!(id = %activity.id, %activity_type, carbon_kg = activity.carbon_kg, "activity logged");

    let label = label_for(activity_type);
    writeln!(
        writer,
        "Added {value} {} of {} on {date}: {:.2} kg CO₂",
        label.unit, label.label, activity.carbon_kg
    )?;
    writeln!(writer, "ID: {}", activity.id)?;

    Ok(activity)
}
