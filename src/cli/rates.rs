use super::ui;
use crate::core::currency::BASE_CURRENCY;
use crate::core::{DisplayRate, RateProvider, display_table, load_rates};
use anyhow::Result;
use comfy_table::Cell;

pub fn rates_as_table(rates: &[DisplayRate]) -> String {
    let mut table = ui::table_with_header(&[BASE_CURRENCY, "Währung", "Kurs"]);
    for row in rates {
        table.add_row(vec![
            ui::amount_cell(row.amount, 0),
            Cell::new(row.currency),
            ui::amount_cell(row.rate, 4),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::paint("Aktuelle Wechselkurse", ui::Tone::Heading),
        table
    )
}

/// Prints the CHF rates table, or a notice when no rates could be fetched.
pub async fn run(provider: &dyn RateProvider) -> Result<()> {
    let rates = load_rates(provider).await;
    let table = display_table(rates.as_ref());

    if table.is_empty() {
        println!("{}", ui::paint("Keine Wechselkurse verfügbar.", ui::Tone::Notice));
    } else {
        println!("{}", rates_as_table(&table));
    }
    Ok(())
}
