//! Terminal rendering for the CLI subcommands

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// How a piece of terminal output is emphasised.
#[derive(Debug, Clone, Copy)]
pub enum Tone {
    Heading,
    Amount,
    Notice,
    Muted,
}

pub fn paint(text: &str, tone: Tone) -> String {
    let styled = style(text);
    match tone {
        Tone::Heading => styled.bold().underlined(),
        Tone::Amount => styled.green().bold(),
        Tone::Notice => styled.yellow(),
        Tone::Muted => styled.dim(),
    }
    .to_string()
}

/// Rounded table whose columns are headed by `columns`.
pub fn table_with_header(columns: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(columns.iter().map(|column| {
            Cell::new(column)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        }));
    table
}

/// Right-aligned amount with a fixed number of decimals.
pub fn amount_cell(value: f64, decimals: usize) -> Cell {
    Cell::new(format!("{value:.decimals$}")).set_alignment(CellAlignment::Right)
}

/// `"<amount> <from> entspricht <converted> <to>"` with both amounts at two decimals.
pub fn conversion_line(amount: f64, from: &str, converted_amount: f64, to: &str) -> String {
    format!(
        "{amount:.2} {from} {} {}",
        paint("entspricht", Tone::Muted),
        paint(&format!("{converted_amount:.2} {to}"), Tone::Amount)
    )
}
