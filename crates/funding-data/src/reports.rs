//! Report projections computed from the [`FundingTable`].
//!
//! Each report is a plain value built in one pass over the table; the UI
//! renders it without touching the records again.

use chrono::NaiveDate;
use funding_core::formatting::percentage;
use funding_core::models::{split_investors, FundingRecord, FundingTable};
use funding_core::time_utils::month_year_label;
use serde::Serialize;
use tracing::debug;

use crate::aggregator::{AggregatedStats, FundingAggregator};

/// Rows shown in each top-N list.
pub const TOP_N: usize = 5;

// ── Policies ──────────────────────────────────────────────────────────────────

/// How an investor name is compared against a record's investors field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvestorMatch {
    /// The field contains the name anywhere, e.g. `"Sequoia"` matches
    /// `"Sequoia Capital, Accel"`.
    #[default]
    Substring,
    /// One comma-separated, trimmed token equals the name.
    Exact,
}

impl InvestorMatch {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "substring" => Some(Self::Substring),
            "exact" => Some(Self::Exact),
            _ => None,
        }
    }

    pub fn matches(self, investors: &str, name: &str) -> bool {
        match self {
            Self::Substring => investors.contains(name),
            Self::Exact => split_investors(investors).any(|n| n == name),
        }
    }
}

/// How a top-N list is cut from grouped data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankingMode {
    /// Keep the first N groups in key order, then order those by amount.
    #[default]
    Grouped,
    /// Order every group by amount, then keep the first N.
    Sorted,
}

impl RankingMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "grouped" => Some(Self::Grouped),
            "sorted" => Some(Self::Sorted),
            _ => None,
        }
    }
}

/// Metric plotted by the month-on-month chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum MomMetric {
    #[default]
    Total,
    Count,
}

impl MomMetric {
    pub fn toggle(self) -> Self {
        match self {
            Self::Total => Self::Count,
            Self::Count => Self::Total,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Count => "Count",
        }
    }
}

// ── Shared rows ───────────────────────────────────────────────────────────────

/// One funding event as listed in a detail table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentRow {
    pub date: NaiveDate,
    pub startup: String,
    pub vertical: String,
    pub city: String,
    pub round: String,
    pub investors: String,
    pub amount: f64,
}

impl From<&FundingRecord> for InvestmentRow {
    fn from(r: &FundingRecord) -> Self {
        Self {
            date: r.date,
            startup: r.startup.clone(),
            vertical: r.vertical.clone(),
            city: r.city.clone(),
            round: r.round.clone(),
            investors: r.investors.clone(),
            amount: r.amount,
        }
    }
}

/// A named amount, used for rankings and breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAmount {
    pub name: String,
    pub amount: f64,
}

/// A named amount plus its percentage of the listed total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareOfTotal {
    pub name: String,
    pub amount: f64,
    pub share: f64,
}

/// Summed amount for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyAmount {
    pub year: i32,
    pub amount: f64,
}

/// One point of the month-on-month series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: u32,
    /// `"{month}-{year}"`, e.g. `"3-2016"`.
    pub label: String,
    pub total: f64,
    pub count: u32,
}

impl MonthlyPoint {
    pub fn value(&self, metric: MomMetric) -> f64 {
        match metric {
            MomMetric::Total => self.total,
            MomMetric::Count => f64::from(self.count),
        }
    }
}

// ── OverallReport ─────────────────────────────────────────────────────────────

/// Headline metrics and the month-on-month series for the whole table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverallReport {
    /// Sum of every amount.
    pub total: f64,
    /// Largest per-startup summed amount; `None` for an empty table.
    pub max_startup_total: Option<f64>,
    /// Mean of per-startup summed amounts; `None` for an empty table.
    pub average_startup_total: Option<f64>,
    /// Distinct startups.
    pub funded_startups: usize,
    /// Monthly totals in chronological order.
    pub monthly: Vec<MonthlyPoint>,
}

impl OverallReport {
    pub fn compute(table: &FundingTable) -> Self {
        let per_startup = FundingAggregator::by_startup(table);
        let funded_startups = per_startup.len();

        let max_startup_total = per_startup
            .iter()
            .map(|(_, s)| s.amount)
            .max_by(f64::total_cmp);
        let average_startup_total = (funded_startups > 0).then(|| {
            let totals = FundingAggregator::calculate_totals(&per_startup);
            totals.amount / funded_startups as f64
        });

        let monthly = FundingAggregator::by_month(table)
            .into_iter()
            .map(|((year, month), stats)| MonthlyPoint {
                year,
                month,
                label: month_year_label(year, month),
                total: stats.amount,
                count: stats.count,
            })
            .collect();

        Self {
            total: table.total_amount(),
            max_startup_total,
            average_startup_total,
            funded_startups,
            monthly,
        }
    }

    /// `(label, value)` pairs of the month-on-month chart for `metric`.
    pub fn mom_series(&self, metric: MomMetric) -> Vec<(String, f64)> {
        self.monthly
            .iter()
            .map(|p| (p.label.clone(), p.value(metric)))
            .collect()
    }
}

// ── InvestorReport ────────────────────────────────────────────────────────────

/// Portfolio summary for one investor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvestorReport {
    pub investor: String,
    /// Number of matching records.
    pub matched: usize,
    /// First matching records in table order.
    pub recent: Vec<InvestmentRow>,
    /// Largest per-startup totals.
    pub biggest: Vec<RankedAmount>,
    /// Per-vertical totals with their share of the listed sum.
    pub sectors: Vec<ShareOfTotal>,
    pub yearly: Vec<YearlyAmount>,
}

impl InvestorReport {
    pub fn compute(
        table: &FundingTable,
        investor: &str,
        matching: InvestorMatch,
        ranking: RankingMode,
    ) -> Self {
        let name = investor.trim();
        if name.is_empty() {
            return Self::default();
        }

        let matched: Vec<&FundingRecord> = table
            .iter()
            .filter(|r| matching.matches(&r.investors, name))
            .collect();
        debug!("Investor \"{}\" matched {} records", name, matched.len());

        let recent = matched
            .iter()
            .take(TOP_N)
            .map(|r| InvestmentRow::from(*r))
            .collect();

        let biggest = rank_top(
            FundingAggregator::by_startup(matched.iter().copied()),
            ranking,
        );

        // Sectors keep key order unless the caller asked for a sorted ranking.
        let mut verticals = FundingAggregator::by_vertical(matched.iter().copied());
        if ranking == RankingMode::Sorted {
            sort_by_amount_desc(&mut verticals);
        }
        verticals.truncate(TOP_N);
        let sectors = with_shares(verticals);

        let yearly = yearly_amounts(matched.iter().copied());

        Self {
            investor: name.to_string(),
            matched: matched.len(),
            recent,
            biggest,
            sectors,
            yearly,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

// ── StartupReport ─────────────────────────────────────────────────────────────

/// Descriptive fields and totals for one startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartupProfile {
    pub vertical: String,
    pub subvertical: String,
    pub city: String,
    pub total_raised: f64,
    pub rounds: usize,
    /// Distinct investor names across every round, sorted.
    pub investors: Vec<String>,
}

/// Funding history for one startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StartupReport {
    pub startup: String,
    /// `None` when no record carries this startup name.
    pub profile: Option<StartupProfile>,
    /// Every round in table order.
    pub rounds: Vec<InvestmentRow>,
    /// Summed amount per stage label.
    pub stages: Vec<RankedAmount>,
    pub yearly: Vec<YearlyAmount>,
}

impl StartupReport {
    pub fn compute(table: &FundingTable, startup: &str) -> Self {
        let matched: Vec<&FundingRecord> =
            table.iter().filter(|r| r.startup == startup).collect();
        let Some(first) = matched.first() else {
            debug!("No records for startup \"{}\"", startup);
            return Self {
                startup: startup.to_string(),
                ..Self::default()
            };
        };

        let mut investors: Vec<String> = matched
            .iter()
            .flat_map(|r| r.investor_names())
            .map(str::to_string)
            .collect();
        investors.sort();
        investors.dedup();

        let profile = StartupProfile {
            vertical: first.vertical.clone(),
            subvertical: first.subvertical.clone(),
            city: first.city.clone(),
            total_raised: matched.iter().map(|r| r.amount).sum(),
            rounds: matched.len(),
            investors,
        };

        let stages = FundingAggregator::by_round(matched.iter().copied())
            .into_iter()
            .map(|(name, stats)| RankedAmount {
                name,
                amount: stats.amount,
            })
            .collect();

        Self {
            startup: startup.to_string(),
            profile: Some(profile),
            rounds: matched.iter().map(|r| InvestmentRow::from(*r)).collect(),
            stages,
            yearly: yearly_amounts(matched.iter().copied()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
    }
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn sort_by_amount_desc(groups: &mut [(String, AggregatedStats)]) {
    // Stable: ties keep key order.
    groups.sort_by(|a, b| b.1.amount.total_cmp(&a.1.amount));
}

fn rank_top(mut groups: Vec<(String, AggregatedStats)>, mode: RankingMode) -> Vec<RankedAmount> {
    match mode {
        RankingMode::Grouped => {
            groups.truncate(TOP_N);
            sort_by_amount_desc(&mut groups);
        }
        RankingMode::Sorted => {
            sort_by_amount_desc(&mut groups);
            groups.truncate(TOP_N);
        }
    }
    groups
        .into_iter()
        .map(|(name, stats)| RankedAmount {
            name,
            amount: stats.amount,
        })
        .collect()
}

fn with_shares(groups: Vec<(String, AggregatedStats)>) -> Vec<ShareOfTotal> {
    let shown_total = FundingAggregator::calculate_totals(&groups).amount;
    groups
        .into_iter()
        .map(|(name, stats)| ShareOfTotal {
            name,
            amount: stats.amount,
            share: percentage(stats.amount, shown_total, 1),
        })
        .collect()
}

fn yearly_amounts<'a>(records: impl IntoIterator<Item = &'a FundingRecord>) -> Vec<YearlyAmount> {
    FundingAggregator::by_year(records)
        .into_iter()
        .map(|(year, stats)| YearlyAmount {
            year,
            amount: stats.amount,
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn rec(date: &str, startup: &str, vertical: &str, investors: &str, round: &str, amount: f64) -> FundingRecord {
        let date = NaiveDate::parse_from_str(date, "%d/%m/%Y").unwrap();
        FundingRecord {
            date,
            startup: startup.to_string(),
            vertical: vertical.to_string(),
            subvertical: format!("{vertical} sub"),
            city: "Bengaluru".to_string(),
            investors: investors.to_string(),
            round: round.to_string(),
            amount,
            year: date.year(),
            month: date.month(),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample_table() -> FundingTable {
        FundingTable::new(vec![
            rec("10/01/2017", "Ola", "Transport", "Sequoia Capital, Accel", "Series C", 100.0),
            rec("15/01/2017", "Swiggy", "Food", "Accel", "Series A", 20.0),
            rec("02/03/2017", "Ola", "Transport", "SoftBank", "Series D", 300.0),
            rec("20/06/2018", "Zomato", "Food", "Sequoia-adjacent Fund", "Series B", 50.0),
            rec("01/01/2019", "Byju", "EdTech", "Undisclosed", "Seed", 0.0),
        ])
    }

    // ── OverallReport ─────────────────────────────────────────────────────────

    #[test]
    fn test_overall_total_is_sum_of_amounts() {
        let table = sample_table();
        let report = OverallReport::compute(&table);
        assert!(approx(report.total, 470.0));
        assert!(approx(report.total, table.total_amount()));
    }

    #[test]
    fn test_overall_count_is_distinct_startups() {
        let report = OverallReport::compute(&sample_table());
        assert_eq!(report.funded_startups, 4);
    }

    #[test]
    fn test_overall_max_and_average_use_startup_sums() {
        let report = OverallReport::compute(&sample_table());
        // Ola: 400, Swiggy: 20, Zomato: 50, Byju: 0
        assert!(approx(report.max_startup_total.unwrap(), 400.0));
        assert!(approx(report.average_startup_total.unwrap(), 470.0 / 4.0));
    }

    #[test]
    fn test_overall_monthly_series() {
        let report = OverallReport::compute(&sample_table());
        let labels: Vec<&str> = report.monthly.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["1-2017", "3-2017", "6-2018", "1-2019"]);

        let totals = report.mom_series(MomMetric::Total);
        assert!(approx(totals[0].1, 120.0));
        let counts = report.mom_series(MomMetric::Count);
        assert!(approx(counts[0].1, 2.0));
        assert!(approx(counts[3].1, 1.0));
    }

    #[test]
    fn test_overall_empty_table() {
        let report = OverallReport::compute(&FundingTable::default());
        assert_eq!(report.total, 0.0);
        assert_eq!(report.funded_startups, 0);
        assert!(report.max_startup_total.is_none());
        assert!(report.average_startup_total.is_none());
        assert!(report.monthly.is_empty());
    }

    #[test]
    fn test_mom_metric_toggle() {
        assert_eq!(MomMetric::Total.toggle(), MomMetric::Count);
        assert_eq!(MomMetric::Count.toggle(), MomMetric::Total);
        assert_eq!(MomMetric::Count.label(), "Count");
    }

    // ── InvestorMatch ─────────────────────────────────────────────────────────

    #[test]
    fn test_substring_match() {
        let m = InvestorMatch::Substring;
        assert!(m.matches("Sequoia Capital, Accel", "Sequoia"));
        assert!(m.matches("Sequoia-adjacent Fund", "Sequoia"));
        assert!(!m.matches("Accel", "Sequoia"));
    }

    #[test]
    fn test_exact_match() {
        let m = InvestorMatch::Exact;
        assert!(m.matches("Sequoia Capital, Accel", "Accel"));
        assert!(m.matches("Sequoia Capital, Accel", "Sequoia Capital"));
        assert!(!m.matches("Sequoia Capital, Accel", "Sequoia"));
        assert!(!m.matches("Sequoia-adjacent Fund", "Sequoia"));
    }

    #[test]
    fn test_policy_from_name() {
        assert_eq!(InvestorMatch::from_name("exact"), Some(InvestorMatch::Exact));
        assert_eq!(InvestorMatch::from_name("fuzzy"), None);
        assert_eq!(RankingMode::from_name("sorted"), Some(RankingMode::Sorted));
        assert_eq!(RankingMode::from_name("grouped"), Some(RankingMode::Grouped));
    }

    // ── InvestorReport ────────────────────────────────────────────────────────

    #[test]
    fn test_investor_substring_filter() {
        let report = InvestorReport::compute(
            &sample_table(),
            "Sequoia",
            InvestorMatch::Substring,
            RankingMode::Grouped,
        );
        assert_eq!(report.matched, 2);
        let startups: Vec<&str> = report.recent.iter().map(|r| r.startup.as_str()).collect();
        assert_eq!(startups, vec!["Ola", "Zomato"]);
    }

    #[test]
    fn test_investor_exact_filter() {
        let report = InvestorReport::compute(
            &sample_table(),
            "Sequoia",
            InvestorMatch::Exact,
            RankingMode::Grouped,
        );
        assert!(report.is_empty());
        assert!(report.recent.is_empty());
        assert!(report.biggest.is_empty());
        assert!(report.sectors.is_empty());
        assert!(report.yearly.is_empty());
    }

    #[test]
    fn test_investor_biggest_sorted_descending() {
        let report = InvestorReport::compute(
            &sample_table(),
            "Accel",
            InvestorMatch::Substring,
            RankingMode::Grouped,
        );
        let names: Vec<&str> = report.biggest.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ola", "Swiggy"]);
        assert!(approx(report.biggest[0].amount, 100.0));
    }

    #[test]
    fn test_investor_recent_limited_to_table_order_prefix() {
        let records: Vec<FundingRecord> = (1..=8)
            .map(|i| rec(&format!("{:02}/01/2018", i), &format!("S{i}"), "Tech", "Tiger Global", "Seed", i as f64))
            .collect();
        let report = InvestorReport::compute(
            &FundingTable::new(records),
            "Tiger Global",
            InvestorMatch::Substring,
            RankingMode::Grouped,
        );
        assert_eq!(report.recent.len(), TOP_N);
        assert_eq!(report.recent[0].startup, "S1");
        assert_eq!(report.recent[4].startup, "S5");
    }

    #[test]
    fn test_ranking_grouped_versus_sorted() {
        // Keys ascending: A..F; F has the largest amount but is the sixth key.
        let records = vec![
            rec("01/01/2018", "A", "Tech", "Fund", "Seed", 1.0),
            rec("01/01/2018", "B", "Tech", "Fund", "Seed", 2.0),
            rec("01/01/2018", "C", "Tech", "Fund", "Seed", 3.0),
            rec("01/01/2018", "D", "Tech", "Fund", "Seed", 4.0),
            rec("01/01/2018", "E", "Tech", "Fund", "Seed", 5.0),
            rec("01/01/2018", "F", "Tech", "Fund", "Seed", 99.0),
        ];
        let table = FundingTable::new(records);

        let grouped = InvestorReport::compute(&table, "Fund", InvestorMatch::Substring, RankingMode::Grouped);
        let names: Vec<&str> = grouped.biggest.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["E", "D", "C", "B", "A"]);

        let sorted = InvestorReport::compute(&table, "Fund", InvestorMatch::Substring, RankingMode::Sorted);
        let names: Vec<&str> = sorted.biggest.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["F", "E", "D", "C", "B"]);
    }

    #[test]
    fn test_investor_sectors_with_shares() {
        let report = InvestorReport::compute(
            &sample_table(),
            "Accel",
            InvestorMatch::Substring,
            RankingMode::Grouped,
        );
        let names: Vec<&str> = report.sectors.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Transport"]);
        assert!(approx(report.sectors[0].share, 16.7));
        assert!(approx(report.sectors[1].share, 83.3));
    }

    #[test]
    fn test_investor_sectors_skip_empty_vertical() {
        let table = FundingTable::new(vec![
            rec("01/01/2018", "A", "", "Fund", "Seed", 10.0),
            rec("01/01/2018", "B", "Tech", "Fund", "Seed", 5.0),
        ]);
        let report = InvestorReport::compute(&table, "Fund", InvestorMatch::Substring, RankingMode::Grouped);
        assert_eq!(report.sectors.len(), 1);
        assert!(approx(report.sectors[0].share, 100.0));
    }

    #[test]
    fn test_investor_yearly() {
        let report = InvestorReport::compute(
            &sample_table(),
            "Sequoia",
            InvestorMatch::Substring,
            RankingMode::Grouped,
        );
        assert_eq!(
            report.yearly,
            vec![
                YearlyAmount { year: 2017, amount: 100.0 },
                YearlyAmount { year: 2018, amount: 50.0 },
            ]
        );
    }

    #[test]
    fn test_investor_blank_name_is_empty() {
        let report = InvestorReport::compute(&sample_table(), "  ", InvestorMatch::Substring, RankingMode::Grouped);
        assert!(report.is_empty());
    }

    // ── StartupReport ─────────────────────────────────────────────────────────

    #[test]
    fn test_startup_report_profile() {
        let report = StartupReport::compute(&sample_table(), "Ola");
        let profile = report.profile.as_ref().unwrap();
        assert_eq!(profile.vertical, "Transport");
        assert_eq!(profile.subvertical, "Transport sub");
        assert_eq!(profile.city, "Bengaluru");
        assert_eq!(profile.rounds, 2);
        assert!(approx(profile.total_raised, 400.0));
        assert_eq!(profile.investors, vec!["Accel", "Sequoia Capital", "SoftBank"]);
    }

    #[test]
    fn test_startup_report_rounds_and_stages() {
        let report = StartupReport::compute(&sample_table(), "Ola");
        let rounds: Vec<&str> = report.rounds.iter().map(|r| r.round.as_str()).collect();
        assert_eq!(rounds, vec!["Series C", "Series D"]);
        let stages: Vec<&str> = report.stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(stages, vec!["Series C", "Series D"]);
        assert_eq!(report.yearly.len(), 1);
        assert!(approx(report.yearly[0].amount, 400.0));
    }

    #[test]
    fn test_startup_report_exact_name_only() {
        let report = StartupReport::compute(&sample_table(), "Ol");
        assert!(report.is_empty());
        assert!(report.rounds.is_empty());
        assert_eq!(report.startup, "Ol");
    }
}
