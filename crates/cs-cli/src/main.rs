//! CLI entry point for climascope.
//!
//! This binary provides the command-line interface for browsing the
//! compiled-in archive of Philippine typhoon records (2024 and 2025
//! seasons) and running the canned searches over it.
//!
//! # Usage
//!
//! ```bash
//! climascope [OPTIONS] <COMMAND>
//!
//! # Interactive TUI
//! climascope browse
//!
//! # Print one season's records
//! climascope show --season 2024 --month october
//!
//! # Run a canned search
//! climascope search strongest --top 5
//!
//! # Generate JSON report
//! climascope report --format json --output report.json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use cs_archive::{Archive, ArchiveStats};
use cs_core::{Config, DataError, Month, TyphoonRecord};
use cs_query::{SearchEngine, SearchKind};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Terminal browser for Philippine typhoon records, 2024-2025 seasons.
///
/// All data is compiled into the binary; no network access or external
/// files are required.
#[derive(Parser)]
#[command(name = "climascope", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true, env = "CLIMASCOPE_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Start the interactive TUI.
    Browse,

    /// Print a season's records.
    Show {
        /// The season year (2024 or 2025).
        #[arg(short, long)]
        season: u16,

        /// Restrict output to one month (name or number).
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Run one canned search and print its report.
    Search {
        /// The search to run.
        #[arg(value_enum)]
        kind: SearchArg,

        /// How many records the strongest search returns.
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Print a season's advisories.
    Advisories {
        /// The season year (2024 or 2025).
        #[arg(short, long)]
        season: u16,
    },

    /// Generate an archive report.
    Report {
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,

        /// Output file (defaults to stdout).
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
}

/// Canned search selector.
#[derive(Clone, Copy, ValueEnum)]
enum SearchArg {
    /// Top-N records by peak wind speed.
    Strongest,
    /// The single record with the highest damage cost.
    MostDamaging,
    /// All record names, A-Z.
    Alphabetical,
    /// The single record with the longest PAR stay.
    LongestStay,
    /// All records whose track crossed land.
    Landfall,
}

impl From<SearchArg> for SearchKind {
    fn from(arg: SearchArg) -> Self {
        match arg {
            SearchArg::Strongest => Self::Strongest,
            SearchArg::MostDamaging => Self::MostDamaging,
            SearchArg::Alphabetical => Self::Alphabetical,
            SearchArg::LongestStay => Self::LongestStay,
            SearchArg::Landfall => Self::Landfall,
        }
    }
}

/// Report output format.
#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// JSON format.
    Json,
    /// CSV format.
    Csv,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `no_color` - Disable ANSI colors in output
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Builds a [`Config`] from CLI arguments.
///
/// Loads the configuration file when `--config` is given, otherwise falls
/// back to defaults. The result is validated either way.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            info!(path = %path, "Loading configuration");
            Config::load(path)?
        }
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Parses a month argument given as a name ("October") or number ("10").
fn parse_month(value: &str) -> color_eyre::Result<Month> {
    Month::from_name(value)
        .or_else(|| value.trim().parse().ok().and_then(Month::from_number))
        .ok_or_else(|| color_eyre::eyre::eyre!("Not a month: {value}"))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the interactive TUI.
///
/// # Errors
///
/// Returns an error if the TUI fails.
async fn run_browse(config: Config) -> color_eyre::Result<()> {
    info!("Starting TUI");

    // Handle SIGTERM for graceful shutdown on Unix
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = cs_tui::run(config) => {
                result.map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        cs_tui::run(config)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?;
    }

    Ok(())
}

/// Prints a season's records, optionally restricted to one month.
///
/// # Errors
///
/// Returns an error if the season is not archived, or if the requested
/// month has no records.
fn run_show(archive: &Archive, season: u16, month: Option<&str>) -> color_eyre::Result<()> {
    let records: Vec<&TyphoonRecord> = match month {
        Some(value) => {
            let month = parse_month(value)?;
            let records = archive.month_records(season, month)?;
            if records.is_empty() {
                return Err(DataError::EmptyMonth { season, month }.into());
            }
            records
        }
        None => archive.season(season)?.iter().collect(),
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for record in records {
        print_record(&mut handle, record)?;
    }

    Ok(())
}

/// Runs one canned search and prints its report.
fn run_search(archive: &Archive, config: Config, kind: SearchKind) -> color_eyre::Result<()> {
    let report = SearchEngine::new(archive, config.search).run(kind);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "{}", report.title)?;
    writeln!(handle, "{}", "=".repeat(report.title.len()))?;
    writeln!(handle)?;
    for line in &report.lines {
        writeln!(handle, "{line}")?;
    }
    writeln!(handle)?;
    writeln!(handle, "{}", report.commentary)?;

    Ok(())
}

/// Prints a season's advisories.
///
/// # Errors
///
/// Returns an error if the season is not archived.
fn run_advisories(season: u16) -> color_eyre::Result<()> {
    let sections =
        cs_archive::advisories::for_season(season).ok_or(DataError::UnknownSeason(season))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "{season} Season Advisories")?;
    for section in sections {
        writeln!(handle)?;
        writeln!(handle, "{}", section.title)?;
        for bullet in &section.bullets {
            writeln!(handle, "  - {bullet}")?;
        }
    }

    Ok(())
}

/// Generates an archive report in the specified format.
///
/// # Arguments
///
/// * `archive` - The compiled-in archive
/// * `format` - Output format (JSON or CSV)
/// * `output` - Output file path (stdout if None)
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
fn run_report(
    archive: &Archive,
    format: ReportFormat,
    output: Option<Utf8PathBuf>,
) -> color_eyre::Result<()> {
    info!("Generating report");

    let stats = archive.stats();

    let content = match format {
        ReportFormat::Json => generate_json_report(&stats, archive.records())?,
        ReportFormat::Csv => generate_csv_report(archive.records()),
    };

    if let Some(output_path) = output {
        std::fs::write(output_path.as_std_path(), &content)?;
        info!(path = %output_path, "Report written");
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{content}")?;
    }

    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Prints one record as a labelled block.
fn print_record(handle: &mut impl Write, record: &TyphoonRecord) -> color_eyre::Result<()> {
    writeln!(handle)?;
    writeln!(handle, "{} ({})", record.name, record.category)?;
    writeln!(handle, "  Month:      {} {}", record.month.label(), record.season)?;
    writeln!(handle, "  Arrival:    {}", record.arrival)?;
    writeln!(handle, "  Departure:  {}", record.departure)?;
    writeln!(handle, "  Stay:       {} days", record.interval)?;
    writeln!(handle, "  Crossing:   {}", record.crossing.label())?;
    writeln!(
        handle,
        "  Landfall:   {}",
        record.landfall_time().unwrap_or("None")
    )?;
    writeln!(handle, "  Developed:  {}", record.developed.label())?;
    writeln!(handle, "  Path:       {}", record.path)?;
    writeln!(handle, "  Wind speed: {} km/h", record.wind_speed_kph)?;
    writeln!(handle, "  Casualties: {}", record.casualties)?;
    writeln!(handle, "  Damage:     PHP {:.2}", record.damage_php)?;
    writeln!(handle, "  Places:")?;
    for place in record.places() {
        writeln!(handle, "    - {place}")?;
    }
    Ok(())
}

/// Generates a JSON report.
fn generate_json_report(
    stats: &ArchiveStats,
    records: &[TyphoonRecord],
) -> color_eyre::Result<String> {
    #[derive(serde::Serialize)]
    struct Report<'a> {
        stats: &'a ArchiveStats,
        records: &'a [TyphoonRecord],
    }

    let report = Report { stats, records };
    serde_json::to_string_pretty(&report)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize JSON: {}", e))
}

/// Generates a CSV report.
fn generate_csv_report(records: &[TyphoonRecord]) -> String {
    use std::fmt::Write;

    let mut output = String::from(
        "name,season,month,category,wind_speed_kph,casualties,damage_php,crossing,developed\n",
    );

    for record in records {
        let name = escape_csv(&record.name);
        let category = escape_csv(&record.category);
        let developed = escape_csv(record.developed.label());

        // Use write! to avoid extra allocation from format!
        let _ = writeln!(
            output,
            "{name},{},{},{category},{},{},{:.2},{},{developed}",
            record.season,
            record.month.label(),
            record.wind_speed_kph,
            record.casualties,
            record.damage_php,
            record.crossing.label(),
        );
    }

    output
}

/// Escapes a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_owned()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    match &cli.command {
        Commands::Browse => {
            let config = build_config(&cli)?;
            run_browse(config).await
        }
        Commands::Show { season, month } => {
            let archive = Archive::new();
            run_show(&archive, *season, month.as_deref())
        }
        Commands::Search { kind, top } => {
            let mut config = build_config(&cli)?;
            if let Some(top) = top {
                config.search.top_n = *top;
            }
            let archive = Archive::new();
            run_search(&archive, config, (*kind).into())
        }
        Commands::Advisories { season } => run_advisories(*season),
        Commands::Report { format, output } => {
            let archive = Archive::new();
            run_report(&archive, *format, output.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("October").unwrap(), Month::October);
        assert_eq!(parse_month("october").unwrap(), Month::October);
        assert_eq!(parse_month("10").unwrap(), Month::October);
        assert!(parse_month("Smarch").is_err());
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("Aghon"), "Aghon");
        assert_eq!(escape_csv("Pepito Manaloto"), "Pepito Manaloto");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_report_has_all_records() {
        let archive = Archive::new();
        let csv = generate_csv_report(archive.records());

        // Header plus one line per record
        assert_eq!(csv.lines().count(), archive.records().len() + 1);
        assert!(csv.lines().nth(1).is_some_and(|l| l.starts_with("Aghon,2024,May,")));
    }

    #[test]
    fn test_json_report_round_trips() {
        let archive = Archive::new();
        let json = generate_json_report(&archive.stats(), archive.records()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["stats"]["records"].as_u64(),
            Some(archive.records().len() as u64)
        );
        assert_eq!(value["records"][0]["name"].as_str(), Some("Aghon"));
    }
}
