//! Overall analysis view: headline metrics and the month-on-month chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use funding_core::formatting::{format_crores, format_number, format_optional_crores};
use funding_data::reports::{MomMetric, OverallReport};

use crate::charts::{render_line_chart, ValueFormat};
use crate::components::metric::MetricCard;
use crate::themes::Theme;

/// Render the headline metric cards above the MoM chart for `metric`.
pub fn render_overall_view(
    frame: &mut Frame,
    area: Rect,
    report: &OverallReport,
    metric: MomMetric,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    let metrics = [
        MetricCard::new("Total", format_crores(report.total, 0), theme),
        MetricCard::new(
            "Max",
            format_optional_crores(report.max_startup_total, 0),
            theme,
        ),
        MetricCard::new(
            "Avg",
            format_optional_crores(report.average_startup_total, 0),
            theme,
        ),
        MetricCard::new(
            "Funded Startups",
            format_number(report.funded_startups as f64, 0),
            theme,
        ),
    ];
    for (card, slot) in metrics.iter().zip(cards.iter()) {
        card.render(frame, *slot);
    }

    let format = match metric {
        MomMetric::Total => ValueFormat::Crores,
        MomMetric::Count => ValueFormat::Count,
    };
    let title = format!("MoM {} (m to toggle)", metric.label());
    render_line_chart(
        frame,
        rows[1],
        &title,
        &report.mom_series(metric),
        format,
        "No funding data to chart",
        theme,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
