use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// A completed conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRecord {
    pub amount: f64,
    pub from_currency: String,
    pub converted_amount: f64,
    pub to_currency: String,
    pub recorded_at: DateTime<Utc>,
}

impl ConversionRecord {
    pub fn new(amount: f64, from_currency: &str, converted_amount: f64, to_currency: &str) -> Self {
        Self {
            amount,
            from_currency: from_currency.to_string(),
            converted_amount,
            to_currency: to_currency.to_string(),
            recorded_at: Utc::now(),
        }
    }
}

/// Append-only, insertion-ordered log of conversions shared across requests.
#[derive(Clone, Default)]
pub struct ConversionHistory {
    inner: Arc<Mutex<Vec<ConversionRecord>>>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, record: ConversionRecord) {
        let mut records = self.inner.lock().await;
        records.push(record);
        debug!(len = records.len(), "History APPEND");
    }

    /// Returns every record in insertion order.
    pub async fn records(&self) -> Vec<ConversionRecord> {
        self.inner.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
