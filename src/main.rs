use clap::Parser;
use price_scraper::core::engine::DATASET_FILE;
use price_scraper::utils::{logger, validation::Validate};
use price_scraper::{CliConfig, CollectorEngine, LocalStorage, TickerPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting price-scraper CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = TickerPipeline::new(config.clone());
    let engine = CollectorEngine::new(pipeline, storage, config.iterations, config.interval);

    // The loop runs on a background task; block here until it completes.
    let handle = engine.spawn();
    match handle.await? {
        Ok(dataset) => {
            tracing::info!("✅ Scraping run completed with {} rows", dataset.len());
            println!("✅ Scraping run completed with {} rows", dataset.len());
            println!("📁 Output saved to: {}/{}", config.output_path, DATASET_FILE);
        }
        Err(e) => {
            tracing::error!("❌ Scraping run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
