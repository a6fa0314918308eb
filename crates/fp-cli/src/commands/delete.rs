//! Delete command: remove a logged activity by ID.

use std::io::Write;

use anyhow::Result;
use fp_db::Database;

pub fn run<W: Write>(writer: &mut W, db: &mut Database, user_id: &str, id: &str) -> Result<()> {
    if !db.delete_activity(user_id, id)? {
        anyhow::bail!("no activity with ID {id}");
    }
    let remaining = db.count_activities(user_id)?;
    tracing::info!(id, remaining, "activity deleted");
    writeln!(writer, "Activity deleted: {id} ({remaining} remaining)")?;
    Ok(())
}
