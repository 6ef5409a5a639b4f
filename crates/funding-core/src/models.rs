use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder written into the investors field when the source leaves it
/// blank.
pub const UNDISCLOSED_INVESTORS: &str = "Undisclosed";

/// One cleaned funding event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingRecord {
    /// Date the round was announced.
    pub date: NaiveDate,
    /// Startup name as written in the source.
    pub startup: String,
    /// Industry vertical; empty when the source left it blank.
    pub vertical: String,
    /// Sub-vertical; empty when the source left it blank.
    pub subvertical: String,
    /// City location.
    pub city: String,
    /// Comma-separated investor names.
    pub investors: String,
    /// Investment stage label (e.g. "Seed Funding", "Private Equity").
    pub round: String,
    /// Amount in crores of rupees, rounded to two places.
    pub amount: f64,
    /// Calendar year of `date`.
    pub year: i32,
    /// Calendar month of `date`, 1-12.
    pub month: u32,
}

impl FundingRecord {
    /// Investor names listed on this record, split on commas and trimmed.
    /// Empty fragments are skipped.
    pub fn investor_names(&self) -> impl Iterator<Item = &str> {
        split_investors(&self.investors)
    }
}

/// Split a comma-separated investors field into trimmed, non-empty names.
pub fn split_investors(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').map(str::trim).filter(|s| !s.is_empty())
}

// ── FundingTable ──────────────────────────────────────────────────────────────

/// The normalized, read-only dataset every report is computed from.
///
/// Built once by the normalizer and then only lent out; there is no API for
/// mutating records after construction.
#[derive(Debug, Clone, Default)]
pub struct FundingTable {
    records: Vec<FundingRecord>,
}

impl FundingTable {
    /// Wrap already-normalized records, preserving their order.
    pub fn new(records: Vec<FundingRecord>) -> Self {
        Self { records }
    }

    /// All records in source order.
    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, FundingRecord> {
        self.records.iter()
    }

    /// Sum of the `amount` column.
    pub fn total_amount(&self) -> f64 {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Sorted, de-duplicated startup names.
    pub fn startup_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self.records.iter().map(|r| r.startup.as_str()).collect();
        names.into_iter().map(str::to_string).collect()
    }

    /// Sorted, de-duplicated investor names gathered by splitting every
    /// investors field on commas.
    pub fn investor_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|r| r.investor_names())
            .collect();
        names.into_iter().map(str::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a FundingTable {
    type Item = &'a FundingRecord;
    type IntoIter = std::slice::Iter<'a, FundingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
