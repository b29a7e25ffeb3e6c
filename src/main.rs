use std::process::ExitCode;

use nestmap::config::Settings;
use nestmap::core::{DistanceMetric, GraphAssembler};
use nestmap::ingest;
use nestmap::models::CrimeWeights;
use tracing::{error, info};

fn init_logging(level: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting NestMap graph assembly...");

    let area_records = match ingest::load_area_records(&settings.data.areas_file) {
        Ok(records) => records,
        Err(err) => {
            error!("Failed to load area data: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let listing_records = match ingest::load_listing_records(&settings.data.listings_file) {
        Ok(records) => records,
        Err(err) => {
            error!("Failed to load listing data: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let weights: CrimeWeights = settings.scoring.weights.into();
    let metric: DistanceMetric = settings.matching.metric;
    let assembler = GraphAssembler::new(settings.preferences, weights, metric);

    let outcome = match assembler.assemble(&area_records, &listing_records) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("Graph assembly failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let graph = &outcome.graph;
    println!("Number of area nodes: {}", graph.area_count());
    println!("Number of listing nodes: {}", graph.listing_count());
    println!("Number of edges: {}", graph.edge_count());

    if outcome.areas_skipped + outcome.listings_skipped > 0 {
        println!(
            "Skipped {} area row(s) and {} listing row(s) with defects",
            outcome.areas_skipped, outcome.listings_skipped
        );
    }
    if outcome.listings_rejected > 0 {
        println!(
            "{} listing(s) rejected by preferences",
            outcome.listings_rejected
        );
    }
    if outcome.listings_unmatched > 0 {
        println!(
            "{} listing(s) could not be matched (no valid areas)",
            outcome.listings_unmatched
        );
    }

    if let Some(export_file) = &settings.data.export_file {
        let export = graph.export();
        let json = match serde_json::to_string_pretty(&export) {
            Ok(json) => json,
            Err(err) => {
                error!("Failed to serialize graph export: {}", err);
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = std::fs::write(export_file, json) {
            error!("Failed to write {}: {}", export_file, err);
            return ExitCode::FAILURE;
        }
        info!("Graph export written to {}", export_file);
    }

    ExitCode::SUCCESS
}
