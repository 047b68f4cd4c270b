use super::AppState;
use super::views;
use crate::core::{ConversionRecord, DisplayRate, convert, display_table, load_rates};
use axum::Form;
use axum::extract::State;
use axum::response::Html;
use serde::Deserialize;
use tracing::{info, warn};

/// Shown for every failed conversion, whatever the cause.
pub const CONVERSION_FAILED: &str = "Die Umrechnung konnte nicht durchgeführt werden.";

/// Raw fields of the conversion form. Every field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct ConversionForm {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub from_currency: Option<String>,
    #[serde(default)]
    pub to_currency: Option<String>,
}

/// A submitted conversion after normalization.
#[derive(Debug, PartialEq)]
pub struct ConversionRequest {
    pub amount: Option<f64>,
    pub from_currency: String,
    pub to_currency: String,
}

impl From<ConversionForm> for ConversionRequest {
    fn from(form: ConversionForm) -> Self {
        let amount = form
            .amount
            .and_then(|a| a.trim().parse::<f64>().ok())
            .filter(|a| a.is_finite());
        ConversionRequest {
            amount,
            from_currency: form.from_currency.unwrap_or_default().to_uppercase(),
            to_currency: form.to_currency.unwrap_or_default().to_uppercase(),
        }
    }
}

/// What a request to `/` ends up showing.
#[derive(Debug)]
pub enum Page {
    Rates(Vec<DisplayRate>),
    Converted(ConversionRecord),
    Failed(&'static str),
}

impl Page {
    pub fn render(&self) -> String {
        match self {
            Page::Rates(conversions) => views::index_page(conversions),
            Page::Converted(record) => views::result_page(record),
            Page::Failed(message) => views::error_page(message),
        }
    }
}

/// Fetches rates and, for a submission, converts and records it.
///
/// Without rates a submission is ignored and the (empty) rates page is shown.
pub async fn handle(state: &AppState, request: Option<ConversionRequest>) -> Page {
    let rates = load_rates(state.provider.as_ref()).await;

    if let (Some(request), Some(rates)) = (request, rates.as_ref()) {
        let from = request.from_currency.as_str();
        let to = request.to_currency.as_str();

        let Some(amount) = request.amount else {
            warn!("Kein gültiger Betrag angegeben");
            warn!("{CONVERSION_FAILED}");
            return Page::Failed(CONVERSION_FAILED);
        };

        return match convert(amount, from, to, rates) {
            Ok(converted_amount) => {
                // Debug keeps the fraction, so 100 is logged as 100.0
                info!("{amount:?} {from} entspricht {converted_amount:?} {to}.");
                let record = ConversionRecord::new(amount, from, converted_amount, to);
                state.history.append(record.clone()).await;
                Page::Converted(record)
            }
            Err(_) => {
                warn!("{CONVERSION_FAILED}");
                Page::Failed(CONVERSION_FAILED)
            }
        };
    }

    Page::Rates(display_table(rates.as_ref()))
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(handle(&state, None).await.render())
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ConversionForm>,
) -> Html<String> {
    Html(handle(&state, Some(form.into())).await.render())
}

pub async fn history(State(state): State<AppState>) -> Html<String> {
    let records = state.history.records().await;
    Html(views::history_page(&records))
}
