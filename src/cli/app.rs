//! CLI definitions and entry point

use std::path::PathBuf;

use chrono::{NaiveDate, Weekday};
use clap::{Parser, Subcommand};

use super::commands;
use relnag::config::Config;
use relnag::core::models::Priority;
use relnag::output::OutputMode;

/// relnag - Release-driven reminder escalation
#[derive(Parser, Debug)]
#[command(
    name = "relnag",
    version,
    about = "Release-driven reminder escalation",
    long_about = "Chase the owners of release-tracked issues.\n\n\
                  Reminders get more frequent as the release approaches and\n\
                  escalate from managers to directors and VPs."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.relnag/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process flagged issues and send reminders
    Run {
        /// JSON file with the flagged issues
        #[arg(short, long)]
        issues: PathBuf,

        /// Reference date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Render everything but do not send
        #[arg(long)]
        dry_run: bool,

        /// Subject line (overrides config)
        #[arg(short, long)]
        title: Option<String>,

        /// Phonebook JSON file (overrides config)
        #[arg(long)]
        phonebook: Option<PathBuf>,
    },

    /// Show cadence and escalation for a priority
    Policy {
        /// Priority: high, normal (anything else is treated as default)
        #[arg(short, long, default_value = "normal")]
        priority: Priority,

        /// Days until release (otherwise computed from the release schedule)
        #[arg(long, allow_negative_numbers = true)]
        days: Option<i64>,

        /// Reference date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Weekday to evaluate (defaults to the reference date's)
        #[arg(short, long)]
        weekday: Option<Weekday>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.unwrap_or_else(Config::config_path);

    match cli.command {
        Some(Command::Run {
            issues,
            date,
            dry_run,
            title,
            phonebook,
        }) => commands::run(
            &config_path,
            &issues,
            phonebook.as_deref(),
            date,
            title.as_deref(),
            dry_run,
            output_mode,
        ),
        Some(Command::Policy {
            priority,
            days,
            date,
            weekday,
        }) => commands::policy(&config_path, priority, days, date, weekday, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("relnag v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("relnag v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'relnag --help' for usage");
                println!("Run 'relnag run --issues <FILE> --dry-run' to preview reminders");
            }
            Ok(())
        },
    }
}
