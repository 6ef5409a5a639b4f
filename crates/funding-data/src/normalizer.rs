//! Cleaning pipeline turning raw CSV rows into the [`FundingTable`].
//!
//! Each row goes through the same fixed sequence: default the investors and
//! amount cells, clean and validate the amount, convert it to crores, parse
//! the date strictly, and finally reject rows still missing a required field.
//! Rejections never surface as errors; they are counted in
//! [`NormalizeStats`] and logged.

use funding_core::currency::CurrencyConverter;
use funding_core::models::{FundingRecord, FundingTable, UNDISCLOSED_INVESTORS};
use funding_core::time_utils::{parse_funding_date, year_month};
use serde::Serialize;
use tracing::{debug, info};

use crate::reader::RawFundingRow;

/// Substrings replaced with `"0"` in the amount cell, in this order.
const UNDISCLOSED_AMOUNT_TOKENS: [&str; 3] = ["undisclosed", "unknown", "Undisclosed"];

// ── Stats ─────────────────────────────────────────────────────────────────────

/// Per-reason counts of rows the normalizer dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeStats {
    pub rows_in: usize,
    pub rows_kept: usize,
    pub invalid_amount: usize,
    pub invalid_date: usize,
    pub missing_fields: usize,
}

impl NormalizeStats {
    pub fn rows_dropped(&self) -> usize {
        self.invalid_amount + self.invalid_date + self.missing_fields
    }

    fn record(&mut self, reason: DropReason) {
        match reason {
            DropReason::InvalidAmount => self.invalid_amount += 1,
            DropReason::InvalidDate => self.invalid_date += 1,
            DropReason::MissingField(_) => self.missing_fields += 1,
        }
    }
}

/// Why a row was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropReason {
    InvalidAmount,
    InvalidDate,
    MissingField(&'static str),
}

// ── Normalizer ────────────────────────────────────────────────────────────────

/// Applies the cleaning pipeline with a given currency conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    converter: CurrencyConverter,
}

impl Normalizer {
    pub fn new(converter: CurrencyConverter) -> Self {
        Self { converter }
    }

    /// Clean every row, keeping survivors in their original order.
    pub fn normalize(&self, rows: Vec<RawFundingRow>) -> (FundingTable, NormalizeStats) {
        let mut stats = NormalizeStats {
            rows_in: rows.len(),
            ..NormalizeStats::default()
        };
        let mut records = Vec::with_capacity(rows.len());

        for row in rows {
            let serial = row.serial.clone();
            match self.normalize_row(row) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    debug!(
                        "Dropping row {}: {:?}",
                        serial.as_deref().unwrap_or("?"),
                        reason
                    );
                    stats.record(reason);
                }
            }
        }

        stats.rows_kept = records.len();
        info!(
            "Normalized {} of {} rows (amount: {}, date: {}, missing fields: {} dropped)",
            stats.rows_kept,
            stats.rows_in,
            stats.invalid_amount,
            stats.invalid_date,
            stats.missing_fields
        );

        (FundingTable::new(records), stats)
    }

    fn normalize_row(&self, row: RawFundingRow) -> Result<FundingRecord, DropReason> {
        let investors = row
            .investors
            .unwrap_or_else(|| UNDISCLOSED_INVESTORS.to_string());

        let raw_amount = row.amount.as_deref().unwrap_or("0");
        let amount = clean_amount(raw_amount).ok_or(DropReason::InvalidAmount)?;
        let amount = self.converter.convert(amount);

        let date = match row.date.as_deref() {
            None => return Err(DropReason::MissingField("date")),
            Some(raw) => parse_funding_date(raw).ok_or(DropReason::InvalidDate)?,
        };
        let (year, month) = year_month(date);

        let startup = row.startup.ok_or(DropReason::MissingField("startup"))?;
        let city = row.city.ok_or(DropReason::MissingField("city"))?;
        let round = row.round.ok_or(DropReason::MissingField("round"))?;

        Ok(FundingRecord {
            date,
            startup,
            vertical: row.vertical.unwrap_or_default(),
            subvertical: row.subvertical.unwrap_or_default(),
            city,
            investors,
            round,
            amount,
            year,
            month,
        })
    }
}

// ── Amount cleaning ───────────────────────────────────────────────────────────

/// Clean a raw amount cell and parse it.
///
/// Separators are removed and undisclosed markers become `"0"`; the result
/// must then be a non-empty run of ASCII digits. Anything else (decimals,
/// `"N/A"`, stray text) yields `None`.
///
/// ```
/// use funding_data::normalizer::clean_amount;
///
/// assert_eq!(clean_amount("10,00,000"), Some(1_000_000.0));
/// assert_eq!(clean_amount("undisclosed"), Some(0.0));
/// assert_eq!(clean_amount("12.5"), None);
/// ```
pub fn clean_amount(raw: &str) -> Option<f64> {
    let mut cleaned = raw.replace(',', "");
    for token in UNDISCLOSED_AMOUNT_TOKENS {
        cleaned = cleaned.replace(token, "0");
    }

    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
