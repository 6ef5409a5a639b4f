//! Group-by helpers over funding records.

use std::collections::BTreeMap;

use funding_core::models::FundingRecord;
use serde::Serialize;

// ── AggregatedStats ───────────────────────────────────────────────────────────

/// Summed amount and event count for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AggregatedStats {
    pub amount: f64,
    pub count: u32,
}

impl AggregatedStats {
    /// Add a single record to the running totals.
    pub fn add_record(&mut self, record: &FundingRecord) {
        self.amount += record.amount;
        self.count += 1;
    }
}

// ── FundingAggregator ─────────────────────────────────────────────────────────

/// Stateless helper that groups records by a key.
///
/// Every grouping returns `(key, stats)` pairs sorted by key ascending.
pub struct FundingAggregator;

impl FundingAggregator {
    /// Group by startup name.
    pub fn by_startup<'a>(
        records: impl IntoIterator<Item = &'a FundingRecord>,
    ) -> Vec<(String, AggregatedStats)> {
        Self::group_by(records, |r| r.startup.clone())
    }

    /// Group by calendar year.
    pub fn by_year<'a>(
        records: impl IntoIterator<Item = &'a FundingRecord>,
    ) -> Vec<(i32, AggregatedStats)> {
        Self::group_by(records, |r| r.year)
    }

    /// Group by `(year, month)`.
    pub fn by_month<'a>(
        records: impl IntoIterator<Item = &'a FundingRecord>,
    ) -> Vec<((i32, u32), AggregatedStats)> {
        Self::group_by(records, |r| (r.year, r.month))
    }

    /// Group by industry vertical, skipping records whose vertical is empty.
    pub fn by_vertical<'a>(
        records: impl IntoIterator<Item = &'a FundingRecord>,
    ) -> Vec<(String, AggregatedStats)> {
        Self::group_by(
            records.into_iter().filter(|r| !r.vertical.is_empty()),
            |r| r.vertical.clone(),
        )
    }

    /// Group by investment stage label.
    pub fn by_round<'a>(
        records: impl IntoIterator<Item = &'a FundingRecord>,
    ) -> Vec<(String, AggregatedStats)> {
        Self::group_by(records, |r| r.round.clone())
    }

    /// Sum up the stats of all groups.
    pub fn calculate_totals<K>(groups: &[(K, AggregatedStats)]) -> AggregatedStats {
        let mut totals = AggregatedStats::default();
        for (_, stats) in groups {
            totals.amount += stats.amount;
            totals.count += stats.count;
        }
        totals
    }

    // ── Private ───────────────────────────────────────────────────────────────

    fn group_by<'a, K: Ord>(
        records: impl IntoIterator<Item = &'a FundingRecord>,
        key_fn: impl Fn(&FundingRecord) -> K,
    ) -> Vec<(K, AggregatedStats)> {
        let mut map: BTreeMap<K, AggregatedStats> = BTreeMap::new();
        for record in records {
            map.entry(key_fn(record)).or_default().add_record(record);
        }
        map.into_iter().collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
