use clap::Parser;
use pv_yield::utils::{logger, validation::Validate};
use pv_yield::{CliConfig, Estimator, PvgisClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pv-yield CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = PvgisClient::new();
    let estimator = Estimator::new(client).with_api_base(config.api_base.clone());

    match estimator
        .compute_estimate(&config.lat, &config.lon, config.orientation)
        .await
    {
        Ok(estimate) => {
            tracing::info!("Estimate complete");
            println!("✅ Annual yield: {:.1} kWh/kWp/year", estimate.productible);
            println!(
                "   Tilt: {}°  Azimuth: {}°",
                estimate.tilt_degrees, estimate.azimuth_degrees
            );
        }
        Err(e) => {
            tracing::error!("Estimate failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
