use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Day-first date layout used by the source dataset.
pub const FUNDING_DATE_FORMAT: &str = "%d/%m/%Y";

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse a `dd/mm/yyyy` date string.
///
/// Day and month may be one or two digits; the year must be exactly four.
/// Anything else (other separators, trailing text, impossible dates) yields
/// `None` so the caller can drop the row.
pub fn parse_funding_date(raw: &str) -> Option<NaiveDate> {
    let year_part = raw.rsplit('/').next()?;
    if year_part.len() != 4 || !year_part.bytes().all(|b| b.is_ascii_digit()) {
        debug!("rejecting date \"{}\": year is not four digits", raw);
        return None;
    }

    match NaiveDate::parse_from_str(raw, FUNDING_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            debug!("rejecting date \"{}\": {}", raw, e);
            None
        }
    }
}

// ── Labels ────────────────────────────────────────────────────────────────────

/// Axis label for a calendar month, formatted `"{month}-{year}"` without
/// zero padding, e.g. `"1-2015"`.
pub fn month_year_label(year: i32, month: u32) -> String {
    format!("{}-{}", month, year)
}

/// `(year, month)` pair for a date.
pub fn year_month(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
