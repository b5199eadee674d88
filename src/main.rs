use clap::Parser;
use roster_gen::utils::{logger, validation::Validate};
use roster_gen::{CliConfig, LocalStorage, RosterEngine, RosterPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting roster-gen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::default();
    let pipeline = RosterPipeline::new(storage, config);
    let engine = RosterEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!("Lineup generation completed");
            println!(
                "Generated {} with {} players",
                summary.output_path, summary.player_count
            );
        }
        Err(e) => {
            tracing::error!("Lineup generation failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
