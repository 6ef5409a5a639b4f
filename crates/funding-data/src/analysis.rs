//! Load pipeline for the funding dashboard.
//!
//! Reads the CSV, runs the normalizer, and returns the table together with
//! [`LoadMetadata`] describing what was kept and dropped.

use std::path::Path;
use std::time::Instant;

use funding_core::currency::CurrencyConverter;
use funding_core::error::Result;
use funding_core::models::FundingTable;
use serde::Serialize;
use tracing::info;

use crate::normalizer::{NormalizeStats, Normalizer};
use crate::reader::read_funding_csv;

// ── Public types ──────────────────────────────────────────────────────────────

/// Summary of one dataset load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadMetadata {
    /// Records the CSV layer decoded.
    pub rows_read: usize,
    /// Records the CSV layer could not decode.
    pub undecodable_records: usize,
    /// Normalizer counts, including rows kept.
    pub normalize: NormalizeStats,
    /// Wall-clock seconds spent reading the file.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent normalizing.
    pub normalize_time_seconds: f64,
}

impl LoadMetadata {
    pub fn rows_kept(&self) -> usize {
        self.normalize.rows_kept
    }

    /// Rows removed by cleaning plus records that never decoded.
    pub fn rows_dropped(&self) -> usize {
        self.normalize.rows_dropped() + self.undecodable_records
    }

    /// Short status line, e.g. `"2,372 rows (672 dropped)"`.
    pub fn summary(&self) -> String {
        format!(
            "{} rows ({} dropped)",
            funding_core::formatting::format_number(self.rows_kept() as f64, 0),
            funding_core::formatting::format_number(self.rows_dropped() as f64, 0)
        )
    }
}

// ── Public function ───────────────────────────────────────────────────────────

/// Load and normalize the dataset at `path`.
///
/// Fails only on conditions that make the dataset unusable: the file is
/// missing or unreadable, or its header lacks a required column.
pub fn load_dataset(
    path: &Path,
    converter: CurrencyConverter,
) -> Result<(FundingTable, LoadMetadata)> {
    // ── Step 1: Read ──────────────────────────────────────────────────────────
    let load_start = Instant::now();
    let outcome = read_funding_csv(path)?;
    let load_time = load_start.elapsed().as_secs_f64();
    let rows_read = outcome.rows.len();

    // ── Step 2: Normalize ─────────────────────────────────────────────────────
    let normalize_start = Instant::now();
    let (table, stats) = Normalizer::new(converter).normalize(outcome.rows);
    let normalize_time = normalize_start.elapsed().as_secs_f64();

    let metadata = LoadMetadata {
        rows_read,
        undecodable_records: outcome.undecodable,
        normalize: stats,
        load_time_seconds: load_time,
        normalize_time_seconds: normalize_time,
    };

    info!(
        "Loaded {} from {} in {:.3}s (read {:.3}s, normalize {:.3}s)",
        metadata.summary(),
        path.display(),
        load_time + normalize_time,
        load_time,
        normalize_time
    );

    Ok((table, metadata))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
