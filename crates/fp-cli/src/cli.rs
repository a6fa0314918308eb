//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fp_core::summary::RECENT_LIMIT;
use fp_core::{ActivityType, parse_date};

/// Carbon footprint tracker.
///
/// Logs everyday activities (travel, electricity, meals) and estimates the
/// resulting CO₂ emissions by day, month and category.
#[derive(Debug, Parser)]
#[command(name = "fp", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log an activity and stamp its carbon mass.
    Log {
        /// Activity type (car, bike, `public_transport`, electricity, `vegetarian_meal`, `non_vegetarian_meal`).
        activity_type: ActivityType,

        /// Quantity in the activity's unit (km, kWh or meals).
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Day the activity happened (YYYY-MM-DD). Defaults to today.
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Estimate the carbon mass of an activity without logging it.
    Preview {
        /// Activity type.
        activity_type: ActivityType,

        /// Quantity as typed; partial input yields no estimate.
        #[arg(allow_hyphen_values = true, default_value = "")]
        value: String,
    },

    /// Delete a logged activity.
    Delete {
        /// Activity ID as shown by `fp list`.
        id: String,
    },

    /// List recent activities, newest first.
    List {
        /// Maximum number of activities to show.
        #[arg(long, default_value_t = RECENT_LIMIT)]
        limit: usize,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the day's footprint, monthly totals, breakdown and tips.
    Summary {
        /// Day to summarize (YYYY-MM-DD). Defaults to today.
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the emission factor table.
    Types {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Recompute every stored carbon value and report mismatches.
    Audit,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_log_with_date() {
        let cli = Cli::parse_from(["fp", "log", "car", "12.5", "--date", "2025-03-14"]);
        match cli.command {
            Some(Commands::Log {
                activity_type,
                value,
                date,
            }) => {
                assert_eq!(activity_type, ActivityType::Car);
                assert_eq!(value, 12.5);
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 14));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_activity_type() {
        let result = Cli::try_parse_from(["fp", "log", "plane", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_malformed_date() {
        let result = Cli::try_parse_from(["fp", "summary", "--date", "14/03/2025"]);
        assert!(result.is_err());
    }
}
