// Marine Insight CLI Entry Point
// Queries in, one JSON insight packet per query out.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

use marine_insight::interpreter::CoordinateResolver;
use marine_insight::{
    format_knowledge_entry, logging, ocean_topic_info, search_marine_knowledge, AppConfig,
    MarineAnalyzer, ReferenceData,
};

#[derive(Parser)]
#[command(
    name = "marine-insight",
    version,
    about = "Interpret free-text marine queries into species, region and map view"
)]
struct Cli {
    /// Reference tables JSON file (overrides MARINE_INSIGHT_REFERENCE)
    #[arg(long, global = true)]
    reference: Option<PathBuf>,

    /// Log filter, e.g. info or marine_insight=debug (overrides MARINE_INSIGHT_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze queries; reads one query per stdin line when none are given
    Analyze {
        queries: Vec<String>,
        /// Pretty-print each JSON document
        #[arg(long)]
        pretty: bool,
    },
    /// Print the offline knowledge entry or ocean-topic note for a query
    Knowledge {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Print the map view for raw region text
    Coordinates {
        region: Vec<String>,
    },
    /// Print the active reference tables as an override file
    Reference,
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn run_analyze(analyzer: &MarineAnalyzer, queries: Vec<String>, pretty: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !queries.is_empty() {
        for query in &queries {
            print_json(&mut out, &analyzer.analyze(query), pretty)?;
        }
        return Ok(());
    }

    let mut count = 0usize;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read query from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        print_json(&mut out, &analyzer.analyze(&line), pretty)?;
        count += 1;
    }
    info!(count, "stdin exhausted");
    Ok(())
}

fn run_knowledge(query: &str) -> anyhow::Result<()> {
    if let Some(entry) = search_marine_knowledge(query) {
        print!("{}", format_knowledge_entry(entry));
    } else if let Some(info) = ocean_topic_info(query) {
        println!("{}", info);
    } else {
        anyhow::bail!("No knowledge entry for '{}'", query);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::from_env()?
        .with_reference_path(cli.reference)
        .with_log_filter(cli.log_level)
        .with_json_logs(cli.log_json);
    logging::init(&config)?;

    let reference = ReferenceData::load(config.reference_path.as_deref())
        .inspect_err(|e| error!("Failed to load reference tables: {}", e))
        .context("Failed to load reference tables")?;

    match cli.command {
        Command::Analyze { queries, pretty } => {
            run_analyze(&MarineAnalyzer::with_reference(reference), queries, pretty)?;
        }
        Command::Knowledge { query } => {
            run_knowledge(&query.join(" "))?;
        }
        Command::Coordinates { region } => {
            let region = region.join(" ");
            let coordinates = CoordinateResolver::new(reference.gazetteer())
                .resolve(Some(region.as_str()));
            print_json(&mut io::stdout().lock(), &coordinates, false)?;
        }
        Command::Reference => {
            println!("{}", reference.to_json_string()?);
        }
    }

    Ok(())
}
