//! HTML pages. All user-controlled text goes through [`escape`].

use crate::core::{ConversionRecord, DisplayRate};
use std::fmt::Write;

const STYLE: &str = "body{font-family:sans-serif;margin:2em auto;max-width:48em}\
table{border-collapse:collapse}td,th{border:1px solid #ccc;padding:.3em .8em;text-align:right}\
nav a{margin-right:1em}.error{color:#b00}";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"de\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Währungsrechner</a><a href=\"/history\">Verlauf</a></nav>\n\
         <h1>{title}</h1>\n{body}</body>\n</html>\n"
    )
}

pub fn index_page(conversions: &[DisplayRate]) -> String {
    let mut body = String::from(
        "<form method=\"post\" action=\"/\">\n\
         <label>Betrag <input name=\"amount\" type=\"number\" step=\"any\" required></label>\n\
         <label>Von <input name=\"from_currency\" size=\"4\" required></label>\n\
         <label>Nach <input name=\"to_currency\" size=\"4\" required></label>\n\
         <button type=\"submit\">Umrechnen</button>\n</form>\n\
         <h2>Aktuelle Wechselkurse</h2>\n",
    );

    if conversions.is_empty() {
        body.push_str("<p>Keine Wechselkurse verfügbar.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Betrag</th><th>Kurs</th></tr>\n");
        for row in conversions {
            let _ = writeln!(
                body,
                "<tr><td>{} {}</td><td>{:.4} {}</td></tr>",
                row.amount, row.base, row.rate, row.currency
            );
        }
        body.push_str("</table>\n");
    }

    layout("Währungsrechner", &body)
}

pub fn result_page(record: &ConversionRecord) -> String {
    let body = format!(
        "<p>{:.2} {} entspricht <strong>{:.2} {}</strong>.</p>\n\
         <p><a href=\"/\">Weitere Umrechnung</a></p>\n",
        record.amount,
        escape(&record.from_currency),
        record.converted_amount,
        escape(&record.to_currency)
    );
    layout("Ergebnis", &body)
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        "<p class=\"error\">{}</p>\n<p><a href=\"/\">Zurück</a></p>\n",
        escape(message)
    );
    layout("Fehler", &body)
}

pub fn history_page(records: &[ConversionRecord]) -> String {
    let mut body = String::new();

    if records.is_empty() {
        body.push_str("<p>Noch keine Umrechnungen.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>Zeit (UTC)</th><th>Betrag</th><th>Ergebnis</th></tr>\n",
        );
        for record in records {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{:.2} {}</td><td>{:.2} {}</td></tr>",
                record.recorded_at.format("%Y-%m-%d %H:%M:%S"),
                record.amount,
                escape(&record.from_currency),
                record.converted_amount,
                escape(&record.to_currency)
            );
        }
        body.push_str("</table>\n");
    }

    layout("Umrechnungsverlauf", &body)
}
