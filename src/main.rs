use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};

mod config;
mod error;
mod logging;
mod models;
mod report;
mod schedule;
mod store;

use config::AppConfig;
use models::{AssignmentRecord, ClassRecord};

#[derive(Parser)]
#[command(name = "class-reminder")]
#[command(about = "Today's classes and upcoming assignments at a glance", long_about = None)]
struct Cli {
    /// Directory holding classes.json and assignments.json
    #[arg(long, global = true, env = "REMINDER_DATA_DIR", default_value = config::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    /// Lookahead window for assignments, in days
    #[arg(long, global = true, env = "REMINDER_DAYS_AHEAD", default_value_t = config::DEFAULT_DAYS_AHEAD)]
    days_ahead: i64,
    /// Reference instant as "YYYY-MM-DD HH:MM" instead of the local clock
    #[arg(long, global = true, value_parser = parse_now)]
    now: Option<NaiveDateTime>,
    /// Log debug diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print today's classes followed by upcoming assignments (default)
    Report {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print only today's classes
    Classes,
    /// Print only upcoming assignments
    Assignments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    All,
    Classes,
    Assignments,
}

fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    schedule::parse_due(value)
        .ok_or_else(|| format!("expected \"YYYY-MM-DD HH:MM\", got {value:?}"))
}

fn load_classes(config: &AppConfig) -> anyhow::Result<Vec<ClassRecord>> {
    let path = config.classes_path();
    store::load_records(&path).context("failed to load classes")
}

fn load_assignments(config: &AppConfig) -> anyhow::Result<Vec<AssignmentRecord>> {
    let path = config.assignments_path();
    store::load_records(&path).context("failed to load assignments")
}

/// Every stage sees the same `now`.
fn render(config: &AppConfig, now: NaiveDateTime, section: Section) -> anyhow::Result<String> {
    let classes = match section {
        Section::Assignments => Vec::new(),
        _ => load_classes(config)?,
    };
    let assignments = match section {
        Section::Classes => Vec::new(),
        _ => load_assignments(config)?,
    };

    let today = schedule::filter_today(&classes, now).context("failed to filter today's classes")?;
    let upcoming = schedule::filter_upcoming(&assignments, now, config.days_ahead);
    tracing::debug!(
        "{} classes today, {} assignments upcoming",
        today.len(),
        upcoming.len()
    );

    let output = match section {
        Section::All => report::build_report(&today, &upcoming, now, config.days_ahead),
        Section::Classes => report::format_classes(&today, now),
        Section::Assignments => report::format_assignments(&upcoming, now, config.days_ahead),
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(if cli.verbose { "debug" } else { "warn" });

    let config = AppConfig::new(&cli.data_dir, cli.days_ahead);
    let now = cli.now.unwrap_or_else(|| Local::now().naive_local());
    tracing::debug!("using data dir {} at {}", config.data_dir.display(), now);

    match cli.command.unwrap_or(Commands::Report { out: None }) {
        Commands::Report { out } => {
            let report = render(&config, now, Section::All)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, report)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Report written to {}.", path.display());
                }
                None => print!("{report}"),
            }
        }
        Commands::Classes => print!("{}", render(&config, now, Section::Classes)?),
        Commands::Assignments => print!("{}", render(&config, now, Section::Assignments)?),
    }

    Ok(())
}
