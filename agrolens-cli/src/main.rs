//! Agrolens CLI — market intelligence from the command line.
//!
//! Commands:
//! - `intelligence` — summary card + chart + recommendation for a pair
//! - `records` — paginated normalized records
//! - `filters` — state/district topology and commodity choices
//! - `pairs` — (region, commodity) pairs that have a source
//! - `dashboard` — farmer-scoped intelligence using profile defaults
//! - `seed` — write deterministic synthetic CSVs for demos
//!
//! All query commands print the JSON wire shape to stdout.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use agrolens_core::sample::{generate_records, write_region_csv};
use agrolens_service::{
    FarmerProfile, InMemoryProfileDirectory, IntelligenceRequest, MarketService, RecordsRequest,
    ServiceConfig,
};

#[derive(Parser)]
#[command(name = "agrolens", about = "Agrolens CLI — mandi market intelligence")]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory override (wins over the config file).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full market intelligence: price card, trend chart, recommendation.
    Intelligence {
        /// Region key, e.g. Kerala_Kottayam.
        #[arg(long, default_value = "Kerala_Kottayam")]
        region: String,

        /// Commodity name, e.g. Banana.
        #[arg(long, default_value = "Banana")]
        commodity: String,

        /// Days of price history (1..=30).
        #[arg(long, default_value_t = 14)]
        days: usize,
    },
    /// Paginated individual records for the data table.
    Records {
        #[arg(long, default_value = "Kerala_Kottayam")]
        region: String,

        #[arg(long, default_value = "Banana")]
        commodity: String,

        /// Page number (1-based).
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Records per page (10..=200).
        #[arg(long, default_value_t = 50)]
        page_size: usize,
    },
    /// State/district topology and commodity choices from the sources.
    Filters,
    /// (region, commodity) pairs that have a source, optionally narrowed.
    Pairs {
        #[arg(long)]
        region: Option<String>,

        #[arg(long)]
        commodity: Option<String>,
    },
    /// Farmer dashboard using saved profile preferences.
    Dashboard {
        /// Farmer profile id.
        #[arg(long)]
        farmer_id: String,

        /// JSON file holding an array of farmer profiles.
        #[arg(long)]
        profiles: PathBuf,
    },
    /// Write deterministic synthetic region CSVs for demos and tests.
    Seed {
        /// Region keys to seed.
        #[arg(long, required = true)]
        region: Vec<String>,

        /// Commodities per region.
        #[arg(long, required = true)]
        commodity: Vec<String>,

        /// Days of history per pair.
        #[arg(long, default_value_t = 30)]
        days: usize,

        /// First date of the generated history (YYYY-MM-DD).
        #[arg(long, default_value = "2024-06-01")]
        start: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.data_dir)?;

    match cli.command {
        Commands::Intelligence {
            region,
            commodity,
            days,
        } => {
            let service = MarketService::new(config);
            let summary = service.intelligence(&IntelligenceRequest {
                region,
                commodity,
                days,
            })?;
            print_json(&summary)
        }
        Commands::Records {
            region,
            commodity,
            page,
            page_size,
        } => {
            let service = MarketService::new(config);
            let paged = service.records(&RecordsRequest {
                region,
                commodity,
                page,
                page_size,
            })?;
            print_json(&paged)
        }
        Commands::Filters => {
            let service = MarketService::new(config);
            print_json(&service.filters()?)
        }
        Commands::Pairs { region, commodity } => {
            let service = MarketService::new(config);
            let pairs = service.available_pairs(region.as_deref(), commodity.as_deref())?;
            print_json(&pairs)
        }
        Commands::Dashboard {
            farmer_id,
            profiles,
        } => {
            let service = MarketService::new(config);
            let directory = load_profiles(&profiles)?;
            print_json(&service.dashboard(&directory, &farmer_id)?)
        }
        Commands::Seed {
            region,
            commodity,
            days,
            start,
        } => run_seed(&config, &region, &commodity, days, &start),
    }
}

fn load_config(config: Option<&std::path::Path>, data_dir: Option<PathBuf>) -> Result<ServiceConfig> {
    let mut loaded = match config {
        Some(path) => ServiceConfig::from_file(path).map_err(anyhow::Error::msg)?,
        None => ServiceConfig::default(),
    };
    if let Some(dir) = data_dir {
        loaded.data_dir = dir;
    }
    Ok(loaded)
}

fn load_profiles(path: &std::path::Path) -> Result<InMemoryProfileDirectory> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read profiles file {}", path.display()))?;
    let profiles: Vec<FarmerProfile> =
        serde_json::from_str(&content).context("parse profiles JSON")?;
    Ok(InMemoryProfileDirectory::from_profiles(profiles))
}

fn run_seed(
    config: &ServiceConfig,
    regions: &[String],
    commodities: &[String],
    days: usize,
    start: &str,
) -> Result<()> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .with_context(|| format!("invalid start date '{start}'"))?;
    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("create data dir {}", config.data_dir.display()))?;

    for region in regions {
        let mut records = Vec::new();
        for commodity in commodities {
            records.extend(generate_records(region, commodity, start, days));
        }
        let path = config.data_dir.join(format!("{region}.csv"));
        write_region_csv(&path, &records)?;
        println!(
            "seeded {} with {} synthetic record(s) across {} commodity(ies)",
            path.display(),
            records.len(),
            commodities.len()
        );
    }
    eprintln!("WARNING: seeded data is synthetic — do not mistake it for sourced mandi prices");
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
