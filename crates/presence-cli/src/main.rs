//! `presence` CLI — normalize ICS feeds and answer who-is-free queries.
//!
//! ## Usage
//!
//! ```sh
//! # Normalize an ICS feed to busy-block JSON (stdin → stdout)
//! presence normalize < work.ics
//!
//! # Normalize from file to file
//! presence normalize -i work.ics -o blocks.json
//!
//! # Who is free right now, given each member's calendar file?
//! presence check --calendar alice=alice.ics --calendar bob=bob.ics
//!
//! # Include a member with no calendar (reports unknown)
//! presence check --calendar alice=alice.ics --member carol
//!
//! # Check a specific clock time instead of now
//! presence check --calendar alice=alice.ics --time 9:05
//!
//! # Pin the evaluation instant (RFC 3339 UTC) for reproducible output
//! presence check --calendar alice=alice.ics --now 2026-03-02T15:30:00Z
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use presence_engine::classify::Member;
use presence_engine::service::{group_availability, upload_feed};
use presence_engine::store::MemoryStore;
use presence_engine::{normalize_events, parse_feed};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "presence",
    version,
    about = "Weekly calendar normalization and group free/busy queries"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize an ICS feed into busy-block JSON
    Normalize {
        /// Input ICS file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Report who is free, busy, or unknown across a set of calendars
    Check {
        /// Member calendar as USER=FILE (repeatable)
        #[arg(long = "calendar", value_name = "USER=FILE")]
        calendars: Vec<String>,
        /// Additional member with no calendar file (repeatable)
        #[arg(long = "member", value_name = "USER")]
        members: Vec<String>,
        /// Clock time to check (H:MM, HH:MM, or HH:MM:SS; defaults to now)
        #[arg(long)]
        time: Option<String>,
        /// Evaluation instant as RFC 3339 UTC (defaults to the current time)
        #[arg(long, value_name = "INSTANT")]
        now: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { input, output } => {
            let feed = read_input(input.as_deref())?;
            let blocks = normalize_events(&parse_feed(&feed));
            let json = serde_json::to_string_pretty(&blocks)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check {
            calendars,
            members,
            time,
            now,
        } => {
            let mut store = MemoryStore::new();
            let mut group = Vec::new();

            for spec in &calendars {
                let (user_id, path) = spec
                    .split_once('=')
                    .with_context(|| format!("expected USER=FILE, got '{}'", spec))?;
                let feed = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read calendar file: {}", path))?;
                upload_feed(&mut store, user_id, &feed)?;
                group.push(Member::new(user_id, None));
            }
            for user_id in &members {
                group.push(Member::new(user_id, None));
            }

            let now = match now {
                Some(raw) => raw
                    .parse::<DateTime<Utc>>()
                    .with_context(|| format!("invalid --now instant: '{}'", raw))?,
                None => Utc::now(),
            };

            let report = group_availability(&store, &group, time.as_deref(), now)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
