pub mod cli;
pub mod core;
pub mod providers;
pub mod web;

use crate::core::ConversionHistory;
use crate::core::config::AppConfig;
use crate::providers::exchangerate_api::ExchangeRateApiProvider;
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Serve { bind: Option<SocketAddr> },
    Rates,
    Convert { amount: f64, from: String, to: String },
}

/// Loads the config, applies the API key override and builds the rate provider.
fn load(
    config_path: Option<&str>,
    api_key: Option<String>,
) -> Result<(AppConfig, ExchangeRateApiProvider)> {
    let mut config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    }
    .with_api_key(api_key);
    debug!("Loaded config: {config:#?}");

    let provider =
        ExchangeRateApiProvider::new(&config.providers.exchangerate, config.api_key.take())?;
    Ok((config, provider))
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    api_key: Option<String>,
) -> Result<()> {
    let (config, provider) = load(config_path, api_key)?;

    match command {
        AppCommand::Serve { bind } => {
            info!("Currency converter starting...");
            let state = web::AppState::new(Arc::new(provider), ConversionHistory::new());
            web::serve(state, bind.unwrap_or(config.server.bind)).await
        }
        AppCommand::Rates => cli::rates::run(&provider).await,
        AppCommand::Convert { amount, from, to } => {
            cli::convert::run(&provider, amount, &from, &to).await
        }
    }
}
