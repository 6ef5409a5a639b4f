//! Startup view: pick a startup, then see its profile, every funding round,
//! the stage breakdown and year-on-year totals.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use funding_core::formatting::{format_crores, percentage};
use funding_data::reports::{InvestmentRow, RankedAmount, StartupProfile, StartupReport};

use crate::charts::{render_empty_panel, render_line_chart, ValueFormat};
use crate::components::share_bar::{ShareBar, ShareBarConfig};
use crate::selector::NameSelector;
use crate::themes::Theme;

/// Width of the name selector column.
pub const SELECTOR_WIDTH: u16 = 34;

pub fn render_startup_view(
    frame: &mut Frame,
    area: Rect,
    selector: &NameSelector,
    report: Option<&StartupReport>,
    theme: &Theme,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SELECTOR_WIDTH), Constraint::Min(20)])
        .split(area);

    selector.render(frame, columns[0], theme);

    match report {
        None => render_empty_panel(
            frame,
            columns[1],
            "Startup Analysis",
            "Select a startup and press Enter",
            theme,
        ),
        Some(r) => match &r.profile {
            None => render_empty_panel(
                frame,
                columns[1],
                &format!("Startup Analysis: {}", r.startup),
                "No funding rounds found",
                theme,
            ),
            Some(profile) => render_report(frame, columns[1], r, profile, theme),
        },
    }
}

fn render_report(
    frame: &mut Frame,
    area: Rect,
    report: &StartupReport,
    profile: &StartupProfile,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(5),
            Constraint::Length(10),
        ])
        .split(area);

    render_profile(frame, rows[0], &report.startup, profile, theme);
    render_rounds_table(frame, rows[1], &report.rounds, theme);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    render_stages(frame, bottom[0], &report.stages, theme);

    let yearly: Vec<(String, f64)> = report
        .yearly
        .iter()
        .map(|y| (y.year.to_string(), y.amount))
        .collect();
    render_line_chart(
        frame,
        bottom[1],
        "YoY Funding",
        &yearly,
        ValueFormat::Crores,
        "No yearly data",
        theme,
    );
}

/// Label/value lines for the profile panel.
pub fn profile_lines<'a>(profile: &'a StartupProfile, theme: &Theme) -> Vec<Line<'a>> {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), theme.label),
            Span::styled(value, theme.value),
        ])
    };
    let or_dash = |s: &str| {
        if s.is_empty() {
            "-".to_string()
        } else {
            s.to_string()
        }
    };

    vec![
        field("Vertical", or_dash(&profile.vertical)),
        field("Subvertical", or_dash(&profile.subvertical)),
        field("City", profile.city.clone()),
        field("Total raised", format_crores(profile.total_raised, 2)),
        field("Rounds", profile.rounds.to_string()),
        field("Investors", profile.investors.join(", ")),
    ]
}

fn render_profile(
    frame: &mut Frame,
    area: Rect,
    startup: &str,
    profile: &StartupProfile,
    theme: &Theme,
) {
    frame.render_widget(
        Paragraph::new(profile_lines(profile, theme))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.table_border)
                    .title(Span::styled(format!(" {} ", startup), theme.header)),
            ),
        area,
    );
}

fn render_rounds_table(frame: &mut Frame, area: Rect, rounds: &[InvestmentRow], theme: &Theme) {
    let header = Row::new(
        ["Date", "Round", "Investors", "City", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme.table_header)),
    );

    let data_rows: Vec<Row> = rounds
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Row::new(vec![
                Cell::from(r.date.format("%d/%m/%Y").to_string()),
                Cell::from(r.round.clone()),
                Cell::from(r.investors.clone()),
                Cell::from(r.city.clone()),
                Cell::from(format_crores(r.amount, 2)),
            ])
            .style(theme.row_style(i))
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
        Constraint::Length(12),
        Constraint::Length(14),
    ];

    let table = Table::new(data_rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(Span::styled(" Funding Rounds ", theme.bold)),
    );
    frame.render_widget(table, area);
}

fn render_stages(frame: &mut Frame, area: Rect, stages: &[RankedAmount], theme: &Theme) {
    let total: f64 = stages.iter().map(|s| s.amount).sum();
    let bar_width = area.width.saturating_sub(2 + 16 + 1 + 22).clamp(4, 40);

    let lines: Vec<Line> = stages
        .iter()
        .map(|s| {
            ShareBar::new(&s.name, percentage(s.amount, total, 1), s.amount, theme)
                .with_config(ShareBarConfig {
                    width: bar_width,
                    name_width: 16,
                    ..ShareBarConfig::default()
                })
                .to_line()
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(Span::styled(" Stage Breakdown ", theme.bold)),
        ),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
