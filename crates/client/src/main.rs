//! Battler info overlay binary.
//!
//! Composition root that assembles:
//! 1. Configuration from the environment (and `.env`)
//! 2. The battle scenario and effect catalog
//! 3. A frontend (CLI by default)
//!
//! # Examples
//!
//! ```bash
//! BATTLE_SCENARIO=crates/battle/content/data/scenarios/wild_single.ron \
//!     cargo run -p battle-info-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use battle_info_client::{Client, ClientConfig};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&client_config.session_id)?;
    tracing::info!("Starting battler info");

    // 3. Load battle content
    let scenario = client_config.load_scenario()?;
    let producer = client_config.load_producer(frontend_config.hail_style)?;
    tracing::info!(
        scenario = %scenario.name,
        catalog = ?client_config.catalog_path,
        "Battle content loaded"
    );

    // 4. Build and run
    let mut builder = Client::builder()
        .scenario(scenario)
        .producer(producer)
        .frontend_config(frontend_config)
        .frontend(CliFrontend::new(cli_config));
    if let Some(index) = client_config.inspect {
        builder = builder.inspect(index);
    }
    let client = builder.build()?;

    let action = client.run().await?;
    println!("{action}");

    tracing::info!("Client shutdown complete");
    Ok(())
}
