use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;

use mempool_fee_levels::cli::Cli;
use mempool_fee_levels::config::Config;
use mempool_fee_levels::error::AppError;
use mempool_fee_levels::estimator::FeeLevelEngine;
use mempool_fee_levels::logging::init_logging;
use mempool_fee_levels::output;
use mempool_fee_levels::services::rpc::CoreRpcClient;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env().map_err(AppError::Config)?;
    tracing::info!(
        "Estimating fee levels from node at {}:{}",
        config.rpc_host,
        config.rpc_port
    );

    let client = CoreRpcClient::from_config(&config)?;
    let engine = FeeLevelEngine::new(Arc::new(client), cli.estimator_config());
    let summaries = engine.estimate().await?;

    if cli.json {
        println!("{}", output::render_json(&summaries)?);
    } else {
        print!("{}", output::render_text(&summaries));
    }

    Ok(())
}
