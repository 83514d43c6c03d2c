//! Access Log Inspection Tool
//!
//! CLI consumer of the filter-aggregation engine. Loads the FunOlympics
//! access log once, applies the filters given on the command line, and prints
//! the requested view as text or JSON. Stands in for the dashboard's
//! presentation layer.
//!
//! Usage:
//!   log-inspect --log-path ./fun_olympics.csv summary
//!   log-inspect --log-path ./fun_olympics.csv --continent Europe breakdown -d country
//!   log-inspect --log-path ./fun_olympics.csv --event Tennis hourly --json

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use funolympics_analytics::dataset::events::event_labels;
use funolympics_analytics::{
    apply_filter, count_by, cross_filter_options, hourly_counts, hourly_counts_by_event,
    peak_hour, summarize, Dataset, Dimension, FilterSelection, OptionDimension,
};

/// Inspect and aggregate the FunOlympics viewership access log.
#[derive(Parser, Debug)]
#[command(name = "log-inspect")]
#[command(about = "Filter and aggregate FunOlympics viewership logs")]
struct Cli {
    /// Path to the access log CSV
    #[arg(long, env = "FUNOLYMPICS_LOG")]
    log_path: PathBuf,

    /// Restrict to a sporting event (repeatable)
    #[arg(long = "event")]
    events: Vec<String>,

    /// Restrict to a country (repeatable)
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Restrict to a continent (repeatable)
    #[arg(long = "continent")]
    continents: Vec<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Total visits, peak viewing hour, most popular event
    Summary,

    /// Visits per one-hour bucket across the day
    Hourly,

    /// Group-by counts over a dimension
    Breakdown {
        /// country | age_group | gender | income_status | sporting_event
        #[arg(short, long)]
        dimension: String,
    },

    /// Per-event hourly count rows (heatmap source data)
    Heatmap,

    /// Selection widget options after cross-filter narrowing
    Options {
        /// events | countries | continents
        #[arg(short, long)]
        target: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dataset = Dataset::load(&cli.log_path)
        .with_context(|| format!("failed to load access log {}", cli.log_path.display()))?;
    info!(rows = dataset.len(), "dataset ready");

    let selection = FilterSelection::new()
        .with_events(cli.events.iter().cloned())
        .with_countries(cli.countries.iter().cloned())
        .with_continents(cli.continents.iter().cloned());
    let filtered = apply_filter(dataset.records(), &selection);

    match &cli.command {
        Commands::Summary => print_summary(&filtered, cli.json)?,
        Commands::Hourly => print_hourly(&filtered, cli.json)?,
        Commands::Breakdown { dimension } => {
            let Some(dimension) = Dimension::parse(dimension) else {
                bail!(
                    "unknown dimension {:?}; expected one of: {}",
                    dimension,
                    Dimension::all()
                        .iter()
                        .map(|d| d.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            };
            print_breakdown(&filtered, dimension, cli.json)?;
        }
        Commands::Heatmap => print_heatmap(&filtered, cli.json)?,
        Commands::Options { target } if target == "events" => {
            // The event widget is driven by the fixed label table, not by
            // cross-filter narrowing.
            print_event_options(cli.json)?;
        }
        Commands::Options { target } => {
            let Some(target) = OptionDimension::parse(target) else {
                bail!(
                    "unknown target {:?}; expected events, countries or continents",
                    target
                );
            };
            print_options(&dataset, &cli, target)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "funolympics_analytics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_summary(filtered: &[&funolympics_analytics::ViewRecord], as_json: bool) -> Result<()> {
    let summary = summarize(filtered.iter().copied());
    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    println!("=== Viewership Summary ===\n");
    println!("Total visits:       {}", summary.total);
    match summary.peak_hour {
        Some(hour) => println!("Peak viewing time:  {:02}:00", hour),
        None => println!("Peak viewing time:  -"),
    }
    match &summary.top_event {
        Some(event) => println!("Most popular event: {}", event),
        None => println!("Most popular event: -"),
    }
    Ok(())
}

fn print_hourly(filtered: &[&funolympics_analytics::ViewRecord], as_json: bool) -> Result<()> {
    let series = hourly_counts(filtered.iter().copied());
    if as_json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }
    println!("=== Visits per Hour ===\n");
    if series.is_empty() {
        println!("(no records in scope)");
        return Ok(());
    }
    let peak = peak_hour(&series).ok();
    for bucket in &series {
        let marker = if peak == Some(bucket.hour) { "  <- peak" } else { "" };
        println!("{:02}:00  {:>8}{}", bucket.hour, bucket.count, marker);
    }
    Ok(())
}

fn print_breakdown(
    filtered: &[&funolympics_analytics::ViewRecord],
    dimension: Dimension,
    as_json: bool,
) -> Result<()> {
    let counts = count_by(filtered.iter().copied(), dimension);
    if as_json {
        let rows: Vec<_> = counts
            .iter()
            .map(|(value, count)| json!({ "value": value, "count": count }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "dimension": dimension.as_str(),
                "rows": rows,
            }))?
        );
        return Ok(());
    }
    println!("=== Visits by {} ===\n", dimension.as_str());
    if counts.is_empty() {
        println!("(no records in scope)");
        return Ok(());
    }
    for (value, count) in &counts {
        println!("{:<28} {:>8}", value, count);
    }
    Ok(())
}

fn print_heatmap(filtered: &[&funolympics_analytics::ViewRecord], as_json: bool) -> Result<()> {
    let rows = hourly_counts_by_event(filtered.iter().copied());
    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    println!("=== Visits per Event per Hour ===\n");
    if rows.is_empty() {
        println!("(no sport views in scope)");
        return Ok(());
    }
    for row in &rows {
        print!("{:<20}", row.event);
        for count in &row.counts {
            print!(" {:>4}", count);
        }
        println!();
    }
    Ok(())
}

fn print_event_options(as_json: bool) -> Result<()> {
    let labels = event_labels();
    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "target": "events",
                "options": labels,
            }))?
        );
        return Ok(());
    }
    println!("=== Available events ===\n");
    for label in labels {
        println!("{}", label);
    }
    Ok(())
}

fn print_options(dataset: &Dataset, cli: &Cli, target: OptionDimension) -> Result<()> {
    let options = cross_filter_options(dataset, &cli.continents, &cli.countries, target);
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "target": target.as_str(),
                "options": options,
            }))?
        );
        return Ok(());
    }
    println!("=== Available {} ===\n", target.as_str());
    for option in &options {
        println!("{}", option);
    }
    Ok(())
}
