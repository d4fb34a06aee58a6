// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Stoic Calendar project*
//!
//! Command line access to the Stoic Calendar timeline calculations and dot
//! grid layout.  This is the only place the host clock is read.
//!

mod config;
mod error;
mod report;

use chrono::{Datelike, Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use config::{Config, config_file_path};
use error::CliError;
use report::{LayoutReport, StatsReport, TimelineReport};
use serde::Serialize;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use stoic_calendar_core::{DateRange, Timeline, TimelineKind, parse_local_day};
use stoic_calendar_renderer::{GridEngine, Size};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Stoic Calendar entry point
fn main() {
    let args = Cli::parse();
    setup_logging(args.verbose);

    if let Err(error) = run(args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// Log to stderr so that JSON on stdout stays clean
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("stoic_calendar")
        .build();
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]) {
        eprintln!("Unable to set up logging: {error}");
    }
}

fn run(args: Cli) -> Result<(), CliError> {
    let config = match (&args.command, args.config.as_deref()) {
        (Command::Config { init: true }, Some(path)) if !path.exists() => Config::default(),
        (_, path) => Config::load(path)?,
    };
    let engine = GridEngine::new(config.layout);

    match args.command {
        Command::Stats {
            start,
            end,
            today,
            json,
        } => {
            let today = resolve_today(today.as_deref())?;
            let range = DateRange::new(parse_local_day(&start)?, parse_local_day(&end)?)?;
            print(&StatsReport::new(&range, today), json)?;
        }
        Command::Range {
            kind,
            year,
            month,
            today,
            json,
        } => {
            let today = resolve_today(today.as_deref())?;
            let kind = kind.to_timeline_kind(year, month, today)?;
            let range = kind.date_range(today)?;
            print(&StatsReport::new(&range, today), json)?;
        }
        Command::Layout {
            dots,
            width,
            height,
            positions,
            json,
        } => {
            let container = Size {
                x: width,
                y: height,
            };
            let layout = engine.layout(dots, container);
            if !layout.fits(container) {
                warn!("{dots} dots don't fit in {width}x{height} at the minimum dot size");
            }
            let report = LayoutReport {
                layout,
                offset: layout.centering_offset(container),
                positions: positions.then(|| layout.dot_positions().collect()),
            };
            print(&report, json)?;
        }
        Command::Timelines { file, today, json } => {
            let today = resolve_today(today.as_deref())?;
            let path = match file {
                Some(path) => path,
                None => config.timelines_path()?,
            };
            info!("Reading timelines from {}", path.display());
            let data = fs::read_to_string(&path)
                .map_err(|source| CliError::TimelinesFile { path, source })?;
            let timelines: Vec<Timeline> = serde_json::from_str(&data)?;

            let reports = timelines
                .iter()
                .map(|timeline| {
                    let range = timeline.date_range(today)?;
                    Ok(TimelineReport::new(timeline, &range, today))
                })
                .collect::<Result<Vec<_>, CliError>>()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in reports {
                    println!("{report}");
                }
            }
        }
        Command::Config { init } => {
            let path = match args.config {
                Some(path) => path,
                None => config_file_path()?,
            };
            if init && !path.exists() {
                let path = config.save(Some(path.as_path()))?;
                println!("Created {}", path.display());
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Print as pretty JSON or as text
fn print<T: Serialize + Display>(report: &T, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Use the given day, or the host's current local day
fn resolve_today(today: Option<&str>) -> Result<NaiveDate, CliError> {
    match today {
        Some(today) => Ok(parse_local_day(today)?),
        None => Ok(Local::now().date_naive()),
    }
}

/// Stoic Calendar CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Stoic Calendar: see how much of a date range has passed, one dot per day"
)]
pub struct Cli {
    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Day stats for any date range
    Stats {
        /// First day (ISO-8601)
        #[arg(long)]
        start: String,

        /// Last day (ISO-8601)
        #[arg(long)]
        end: String,

        /// Day to measure from (defaults to today)
        #[arg(long)]
        today: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Day stats for a year, month or the current week
    Range {
        #[arg(value_enum)]
        kind: RangeKind,

        /// Defaults to the current year
        #[arg(long)]
        year: Option<i32>,

        /// Defaults to the current month
        #[arg(long)]
        month: Option<u32>,

        /// Day to measure from (defaults to today)
        #[arg(long)]
        today: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Lay out a dot grid in a container
    Layout {
        /// Number of dots (days)
        #[arg(long)]
        dots: u32,

        /// Container width in pixels
        #[arg(long)]
        width: f64,

        /// Container height in pixels
        #[arg(long)]
        height: f64,

        /// Also print every dot's position
        #[arg(long)]
        positions: bool,

        #[arg(long)]
        json: bool,
    },

    /// Day stats for every saved timeline
    Timelines {
        /// Path to a JSON list of timelines (defaults to the config's)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Day to measure from (defaults to today)
        #[arg(long)]
        today: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Print the config in use
    Config {
        /// Write a default config file if there isn't one
        #[arg(long)]
        init: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Year,
    Month,
    Week,
}

impl RangeKind {
    fn to_timeline_kind(
        self,
        year: Option<i32>,
        month: Option<u32>,
        today: NaiveDate,
    ) -> Result<TimelineKind, CliError> {
        match (self, year, month) {
            (RangeKind::Week, Some(_), _) => Err(CliError::UnusedOption("--year", "week")),
            (RangeKind::Week, _, Some(_)) | (RangeKind::Year, _, Some(_)) => {
                Err(CliError::UnusedOption("--month", self.name()))
            }
            (RangeKind::Year, year, None) => Ok(TimelineKind::Year {
                year: year.unwrap_or(today.year()),
            }),
            (RangeKind::Month, year, month) => Ok(TimelineKind::Month {
                year: year.unwrap_or(today.year()),
                month: month.unwrap_or(today.month()),
            }),
            (RangeKind::Week, None, None) => Ok(TimelineKind::CurrentWeek),
        }
    }

    fn name(self) -> &'static str {
        match self {
            RangeKind::Year => "year",
            RangeKind::Month => "month",
            RangeKind::Week => "week",
        }
    }
}
