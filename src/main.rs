use catalog_flatten::utils::{logger, validation::Validate};
use catalog_flatten::{CatalogPipeline, CliConfig, FlattenEngine};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting catalog-flatten CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("📂 Source: {}", config.input_path);
    tracing::info!("📄 Destination: {}", config.output_path);

    let pipeline = CatalogPipeline::new(config);
    let engine = FlattenEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            println!("✅ CSV generated successfully!");
            println!("📊 Statistics:");
            println!("   - Categories processed: {}", summary.categories);
            println!("   - Total rows: {}", summary.rows);
            println!("   - Output saved to: {}", summary.output_path);
            println!("   - File size: {} bytes", summary.file_size);
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
