//! CLI entry point for the ticket analyzer.
//!
//! Loads a JSON ticket document, keeps the tickets on one route and prints
//! the fastest flight per carrier together with price statistics.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use ticket_analyzer::{
    output::print_report,
    parser::load_tickets,
    route::{DEFAULT_DESTINATION, DEFAULT_ORIGIN, Route, filter_tickets, filter_tickets_lenient},
    stats::RouteStats,
};
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "ticket_analyzer", version)]
#[command(about = "Fastest flight per carrier and price statistics for one route", long_about = None)]
#[command(after_help = "A TICKETS_JSON path starting with '-' must follow `--`, e.g. `ticket_analyzer -- -tickets.json`.")]
struct Cli {
    /// JSON document with a top-level `tickets` array
    #[arg(value_name = "TICKETS_JSON")]
    tickets: PathBuf,

    /// Origin city name tickets must depart from
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Destination city name tickets must arrive at
    #[arg(long, default_value = DEFAULT_DESTINATION)]
    destination: String,

    /// Skip tickets with malformed times instead of aborting the run
    #[arg(long, default_value_t = false)]
    skip_malformed: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Wrong arguments are not a failure: show usage and do nothing.
            debug!(error = %e, "Argument parsing failed");
            println!("{}", Cli::command().render_usage());
            return Ok(());
        }
    };

    run(&cli)
}

/// Logging setup: colored stderr, plus a JSON rolling log file when
/// `LOG_FILE_PATH` is set.
fn init_logging() -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::INFO));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_file = Path::new(&log_file_path);
            let log_dir = log_file
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("logs"));
            let log_file_name = log_file
                .file_name()
                .unwrap_or(OsStr::new("ticket_analyzer.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));
            (Some(layer), Some(file_guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}

/// Filter read from `env_var`, falling back to `default` when the variable is
/// unset. Unparseable directives are ignored.
fn env_filter(env_var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(env_var)
        .from_env_lossy()
}

/// Runs the load, filter and report stages for one ticket document.
#[tracing::instrument(skip(cli), fields(path = %cli.tickets.display()))]
fn run(cli: &Cli) -> Result<()> {
    let route = Route::new(&cli.origin, &cli.destination);

    let raw = load_tickets(&cli.tickets).context("Failed to load tickets")?;
    info!(total = raw.len(), "Tickets loaded");

    let tickets = if cli.skip_malformed {
        let outcome = filter_tickets_lenient(&raw, &route);
        if outcome.skipped > 0 {
            warn!(skipped = outcome.skipped, "Malformed tickets skipped");
        }
        outcome.tickets
    } else {
        filter_tickets(&raw, &route).context("Failed to filter tickets")?
    };
    info!(route = %route, matched = tickets.len(), "Tickets matched route");

    let stats = RouteStats::from_tickets(route, &tickets);
    print_report(&stats).context("Failed to write report")?;

    Ok(())
}
