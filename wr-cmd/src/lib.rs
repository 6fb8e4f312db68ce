//! Command implementations for the weather report CLI.
//!
//! Every command is generic over [`ReportsApi`] and writes its output to the
//! given writer, so the binary passes the HTTP gateway and stdout while the
//! tests pass an in-memory API and a buffer.

use chrono::{DateTime, Local, Utc};
use clap::Subcommand;
use std::io::Write;
use std::path::PathBuf;
use wr_api::ReportsApi;
use wr_core::datetime::input_to_utc;
use wr_core::query::{SortKey, SortOrder, DEFAULT_PAGE_SIZE};

pub mod list;
pub mod output;
pub mod reports;

#[cfg(test)]
pub(crate) mod testing;

#[derive(Subcommand)]
pub enum Command {
    /// Generate a new weather report
    Generate {
        /// Report instant (RFC 3339, or YYYY-MM-DDTHH:MM in local time); defaults to now
        #[arg(long, value_parser = parse_instant)]
        timestamp: Option<DateTime<Utc>>,
    },

    /// Show a single report
    Get {
        /// Report id
        id: String,
    },

    /// List stored reports, one page at a time unless --all is given
    List {
        /// Fetch every report without pagination
        #[arg(long)]
        all: bool,

        /// One-based page number
        #[arg(long, default_value_t = 1)]
        page: u64,

        /// Reports per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u64,

        /// Only reports at or after this instant
        #[arg(long, value_parser = parse_instant)]
        from: Option<DateTime<Utc>>,

        /// Only reports at or before this instant
        #[arg(long, value_parser = parse_instant)]
        to: Option<DateTime<Utc>>,

        /// timestamp, temperature, pressure, humidity or cloudCover
        #[arg(long, value_parser = parse_sort_key, default_value = "timestamp")]
        sort_by: SortKey,

        /// asc or desc
        #[arg(long, value_parser = parse_sort_order, default_value = "desc")]
        order: SortOrder,

        /// Also write the listed reports to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Compare two reports (deviation is the second minus the first)
    Compare {
        /// First report id
        id1: String,
        /// Second report id
        id2: String,
    },
}

pub async fn run<A: ReportsApi, W: Write>(
    api: &A,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Generate { timestamp } => reports::run_generate(api, timestamp, out).await,
        Command::Get { id } => reports::run_get(api, &id, out).await,
        Command::List {
            all,
            page,
            limit,
            from,
            to,
            sort_by,
            order,
            csv,
        } => {
            let options = list::ListOptions {
                all,
                page,
                limit,
                from,
                to,
                sort_by,
                sort_order: order,
                csv,
            };
            list::run_list(api, &options, out).await
        }
        Command::Compare { id1, id2 } => reports::run_compare(api, &id1, &id2, out).await,
    }
}

/// Accept RFC 3339, or a `datetime-local` style value read in local time.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value.trim()) {
        return Ok(instant.with_timezone(&Utc));
    }
    input_to_utc(value, &Local).ok_or_else(|| format!("invalid date and time: {}", value))
}

fn parse_sort_key(value: &str) -> Result<SortKey, String> {
    SortKey::parse(value).ok_or_else(|| {
        let names: Vec<&str> = SortKey::ALL.iter().map(|key| key.as_str()).collect();
        format!("unknown sort key {} (expected one of {})", value, names.join(", "))
    })
}

fn parse_sort_order(value: &str) -> Result<SortOrder, String> {
    SortOrder::parse(value).ok_or_else(|| format!("unknown sort order {} (expected asc or desc)", value))
}
