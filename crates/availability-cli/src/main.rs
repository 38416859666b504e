//! `staff-avail` CLI — run period availability analysis over a JSON dataset.
//!
//! ## Usage
//!
//! ```sh
//! # Free periods shared by two people over a week
//! staff-avail --data staff.json analyze --people s1,s2 --from 2026-03-16 --to 2026-03-21
//!
//! # Period table for a date (empty on the rest day)
//! staff-avail periods --date 2026-03-20
//!
//! # People in a department
//! staff-avail --data staff.json people --department CSE
//! ```
//!
//! The dataset path may also come from `STAFF_AVAIL_DATA_PATH`. Logs go to
//! stderr and are controlled by `RUST_LOG`.

mod config;

use anyhow::{Context, Result};
use availability_engine::{
    analyze_availability, periods_for, school_day, AvailabilityRequest, Dataset, MemoryStore,
    PeriodSlot, PersonId, RecordStore, SchoolDay,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "staff-avail",
    version,
    about = "Find teaching periods when selected staff are all free"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON dataset (people, timetables, meetings, participants)
    #[arg(short, long, global = true)]
    data: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a selection of people over an inclusive date range
    Analyze {
        /// Comma-separated person ids
        #[arg(short, long, value_delimiter = ',', required = true)]
        people: Vec<String>,
        /// First date (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Last date (YYYY-MM-DD); defaults to --from
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Show the period table in effect on a date
    Periods {
        #[arg(long)]
        date: NaiveDate,
    },
    /// List people, optionally filtered by department
    People {
        #[arg(long)]
        department: Option<String>,
    },
}

#[derive(Serialize)]
struct PeriodTable {
    date: NaiveDate,
    day: Option<SchoolDay>,
    periods: Vec<PeriodSlot>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = AppConfig::load().context("Failed to load configuration")?;
    let pretty = cli.pretty || cfg.pretty.unwrap_or(false);

    match cli.command {
        Commands::Analyze { people, from, to } => {
            let store = open_store(cli.data.or(cfg.data_path))?;
            let request = AvailabilityRequest {
                people: people
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(PersonId::from)
                    .collect(),
                start: from,
                end: to.unwrap_or(from),
            };
            let result = analyze_availability(&store, &request)
                .await
                .context("Availability analysis failed")?;
            if result.is_empty() {
                tracing::warn!("no school days in range or empty selection");
            }
            print_json(&result, pretty)?;
        }
        Commands::Periods { date } => {
            let day = school_day(date);
            let table = PeriodTable {
                date,
                day,
                periods: day
                    .map(|d| periods_for(d.weekday()).to_vec())
                    .unwrap_or_default(),
            };
            print_json(&table, pretty)?;
        }
        Commands::People { department } => {
            let store = open_store(cli.data.or(cfg.data_path))?;
            let mut people = store.people().await.context("Failed to read people")?;
            if let Some(dept) = department {
                people.retain(|p| p.department.eq_ignore_ascii_case(&dept));
            }
            people.sort_by(|a, b| a.name.cmp(&b.name));
            print_json(&people, pretty)?;
        }
    }

    Ok(())
}

fn open_store(path: Option<String>) -> Result<MemoryStore> {
    let path = path.context("No dataset given: pass --data or set STAFF_AVAIL_DATA_PATH")?;
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read file: {}", path))?;
    let dataset = Dataset::from_json(&json)
        .with_context(|| format!("Failed to parse dataset: {}", path))?;
    Ok(MemoryStore::new(dataset))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
