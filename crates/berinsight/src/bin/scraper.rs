//! Offline document generator. Synthesizes an insight document and
//! replaces the persisted file atomically, the same way a real collection
//! pipeline would hand off its output.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use berinsight::scraper::{generate_document, GenerationSpec};
use berinsight::store::write_document;
use berinsight::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "berinsight-scraper", about = "Generate the insight document")]
struct Args {
    /// Where to write the document
    #[arg(long, env = "DATA_PATH", default_value = "/data/insights.json")]
    output: PathBuf,

    /// Number of complaint records
    #[arg(long, default_value_t = 200)]
    complaints: usize,

    /// Number of suggestion records
    #[arg(long, default_value_t = 100)]
    suggestions: usize,

    /// Number of general insight records
    #[arg(long, default_value_t = 50)]
    insights: usize,

    /// Spread record dates over this many trailing days
    #[arg(long, default_value_t = 30)]
    days_back: i64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let args = Args::parse();
    info!("Starting berinsight scraper");
    info!("Data path: {}", args.output.display());

    let spec = GenerationSpec {
        complaints: args.complaints,
        suggestions: args.suggestions,
        insights: args.insights,
        days_back: args.days_back,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let document = generate_document(&spec, &mut rng);
    let total = document.items.len();
    write_document(&args.output, &document)?;

    info!("Saved {} item(s) to {}", total, args.output.display());
    info!("Scraper completed successfully");
    Ok(())
}
