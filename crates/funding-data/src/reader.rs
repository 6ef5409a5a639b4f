//! CSV loading for the funding dataset.
//!
//! Opens the source file, validates its header against the fixed column
//! layout, and decodes each record into a [`RawFundingRow`] with every field
//! still optional. Cleaning happens later in [`crate::normalizer`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use funding_core::error::{FundingError, Result};
use serde::Deserialize;
use tracing::{debug, warn};

// ── Column layout ─────────────────────────────────────────────────────────────

pub const COL_SERIAL: &str = "Sr No";
pub const COL_DATE: &str = "Date dd/mm/yyyy";
pub const COL_STARTUP: &str = "Startup Name";
pub const COL_VERTICAL: &str = "Industry Vertical";
pub const COL_SUBVERTICAL: &str = "SubVertical";
pub const COL_CITY: &str = "City  Location";
pub const COL_INVESTORS: &str = "Investors Name";
pub const COL_ROUND: &str = "InvestmentnType";
pub const COL_AMOUNT: &str = "Amount in USD";

/// Columns the normalizer reads. `Remarks` is allowed but never decoded.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    COL_SERIAL,
    COL_DATE,
    COL_STARTUP,
    COL_VERTICAL,
    COL_SUBVERTICAL,
    COL_CITY,
    COL_INVESTORS,
    COL_ROUND,
    COL_AMOUNT,
];

const UTF8_BOM: char = '\u{feff}';

// ── RawFundingRow ─────────────────────────────────────────────────────────────

/// One CSV record exactly as it appears in the file, keyed by canonical names.
///
/// Empty cells decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFundingRow {
    #[serde(rename = "Sr No")]
    pub serial: Option<String>,
    #[serde(rename = "Date dd/mm/yyyy")]
    pub date: Option<String>,
    #[serde(rename = "Startup Name")]
    pub startup: Option<String>,
    #[serde(rename = "Industry Vertical")]
    pub vertical: Option<String>,
    #[serde(rename = "SubVertical")]
    pub subvertical: Option<String>,
    #[serde(rename = "City  Location")]
    pub city: Option<String>,
    #[serde(rename = "Investors Name")]
    pub investors: Option<String>,
    #[serde(rename = "InvestmentnType")]
    pub round: Option<String>,
    #[serde(rename = "Amount in USD")]
    pub amount: Option<String>,
}

/// Rows decoded from one CSV source.
#[derive(Debug, Clone, Default)]
pub struct CsvReadOutcome {
    pub rows: Vec<RawFundingRow>,
    /// Records the CSV layer could not decode (bad UTF-8, broken quoting).
    pub undecodable: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read the funding CSV at `path`.
///
/// A missing or unreadable file and a header without the required columns
/// are fatal. Individual records that fail to decode are skipped and counted.
pub fn read_funding_csv(path: &Path) -> Result<CsvReadOutcome> {
    if !path.exists() {
        return Err(FundingError::DataPathNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| FundingError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = read_funding_from(file)?;
    debug!(
        "Decoded {} rows from {} ({} undecodable)",
        outcome.rows.len(),
        path.display(),
        outcome.undecodable
    );
    Ok(outcome)
}

/// Read funding records from any byte source.
pub fn read_funding_from<R: Read>(source: R) -> Result<CsvReadOutcome> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(source);

    let headers = clean_headers(reader.headers()?);
    ensure_required_columns(&headers)?;
    reader.set_headers(headers);

    let mut outcome = CsvReadOutcome::default();
    for (index, result) in reader.deserialize::<RawFundingRow>().enumerate() {
        match result {
            Ok(row) => outcome.rows.push(row),
            Err(e) => {
                // Header is line 1, so data record `index` sits on line index + 2.
                warn!("Skipping undecodable record near line {}: {}", index + 2, e);
                outcome.undecodable += 1;
            }
        }
    }

    Ok(outcome)
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// Strip a leading BOM and surrounding whitespace from every header label.
fn clean_headers(raw: &StringRecord) -> StringRecord {
    raw.iter()
        .map(|h| h.trim_start_matches(UTF8_BOM).trim())
        .collect()
}

fn ensure_required_columns(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FundingError::MissingColumns(missing))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
