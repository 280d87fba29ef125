//! Reference dates and Portuguese month names

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{NotaError, NotaResult};

/// Month names in pt-BR, January first
pub const MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Capitalised month name for a date
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Four-digit year for a date
pub fn year_label(date: NaiveDate) -> String {
    date.year().to_string()
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a reference date given as `YYYY-MM-DD` or `YYYY-MM` (first of the month)
pub fn parse_reference_date(input: &str) -> NotaResult<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d").map_err(|_| {
        NotaError::Config(format!(
            "Invalid date '{}': expected YYYY-MM-DD or YYYY-MM",
            input
        ))
    })
}
