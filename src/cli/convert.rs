use super::ui;
use crate::core::{RateProvider, convert, load_rates};
use anyhow::{Result, bail};
use tracing::info;

/// Converts once and prints the result. Unlike the web page this reports
/// failures as errors.
pub async fn run(provider: &dyn RateProvider, amount: f64, from: &str, to: &str) -> Result<()> {
    let from = from.to_uppercase();
    let to = to.to_uppercase();

    let Some(rates) = load_rates(provider).await else {
        bail!("Die Wechselkurse konnten nicht abgerufen werden.");
    };

    let converted_amount = convert(amount, &from, &to, &rates)?;
    info!("{amount:?} {from} entspricht {converted_amount:?} {to}.");

    println!("{}", ui::conversion_line(amount, &from, converted_amount, &to));
    Ok(())
}
