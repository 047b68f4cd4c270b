//! Currency rate abstractions and conversion

use crate::core::error::{ConvertError, FetchError};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::warn;

/// All fetched rates are quoted against one unit of this currency.
pub const BASE_CURRENCY: &str = "CHF";

/// Currencies shown in the rates table, in display order.
pub const DISPLAY_CURRENCIES: [&str; 20] = [
    "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CNY", "INR", "SGD", "CHF", "MYR", "NZD", "THB",
    "ZAR", "HKD", "SEK", "NOK", "MXN", "DKK", "RUB",
];

/// Currency code to the value of one [`BASE_CURRENCY`] in that currency.
pub type RateTable = HashMap<String, f64>;

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateTable, FetchError>;
}

/// Fetches the current rate table, logging and swallowing any failure.
///
/// An empty table counts as no rates at all.
pub async fn load_rates(provider: &dyn RateProvider) -> Option<RateTable> {
    match provider.fetch_rates().await {
        Ok(rates) if rates.is_empty() => {
            warn!("Die API hat eine leere Wechselkurstabelle geliefert");
            None
        }
        Ok(rates) => Some(rates),
        Err(FetchError::MissingRates) => {
            warn!("Antwort der API enthält keine Wechselkurse (conversion_rates fehlt)");
            None
        }
        Err(e) => {
            warn!("Fehler beim Abrufen der Wechselkurse von der API: {e}");
            None
        }
    }
}

/// Converts `amount` from one currency to another via their base-currency rates.
pub fn convert(amount: f64, from: &str, to: &str, rates: &RateTable) -> Result<f64, ConvertError> {
    if from == to {
        let err = ConvertError::IdenticalCurrency;
        warn!("{err}");
        return Err(err);
    }

    let (Some(from_rate), Some(to_rate)) = (rates.get(from), rates.get(to)) else {
        let err = ConvertError::UnknownCurrency {
            from: from.to_string(),
            to: to.to_string(),
        };
        warn!("{err}");
        return Err(err);
    };

    Ok(amount * (to_rate / from_rate))
}

/// One row of the rates table: `amount` of `base` equals `rate` of `currency`.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRate {
    pub amount: f64,
    pub base: &'static str,
    pub rate: f64,
    pub currency: &'static str,
}

/// Builds the rates table for [`DISPLAY_CURRENCIES`], skipping codes the table lacks.
pub fn display_table(rates: Option<&RateTable>) -> Vec<DisplayRate> {
    let Some(rates) = rates else {
        return Vec::new();
    };

    DISPLAY_CURRENCIES
        .iter()
        .filter_map(|code| {
            rates.get(*code).map(|rate| DisplayRate {
                amount: 1.0,
                base: BASE_CURRENCY,
                rate: *rate,
                currency: *code,
            })
        })
        .collect()
}
