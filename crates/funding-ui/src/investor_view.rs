//! Investor view: pick an investor, then see recent deals, biggest bets,
//! sector split and year-on-year totals.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use funding_core::formatting::format_crores;
use funding_data::reports::{InvestmentRow, InvestorReport, ShareOfTotal};

use crate::charts::{render_bar_chart, render_empty_panel, render_line_chart, ValueFormat};
use crate::components::share_bar::{ShareBar, ShareBarConfig};
use crate::selector::NameSelector;
use crate::themes::Theme;

/// Width of the name selector column.
pub const SELECTOR_WIDTH: u16 = 34;

pub fn render_investor_view(
    frame: &mut Frame,
    area: Rect,
    selector: &NameSelector,
    report: Option<&InvestorReport>,
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
            "Investor Analysis",
            "Select an investor and press Enter",
            theme,
        ),
        Some(r) if r.is_empty() => render_empty_panel(
            frame,
            columns[1],
            &format!("Investor Analysis: {}", r.investor),
            "No investments found",
            theme,
        ),
        Some(r) => render_report(frame, columns[1], r, theme),
    }
}

fn render_report(frame: &mut Frame, area: Rect, report: &InvestorReport, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(report.recent.len() as u16 + 3),
            Constraint::Min(7),
            Constraint::Length(10),
        ])
        .split(area);

    render_recent_table(
        frame,
        rows[0],
        &format!("{}: Most Recent Investments", report.investor),
        &report.recent,
        theme,
    );

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let biggest: Vec<(String, f64)> = report
        .biggest
        .iter()
        .map(|r| (r.name.clone(), r.amount))
        .collect();
    render_bar_chart(
        frame,
        middle[0],
        "Biggest Investments",
        &biggest,
        "No investments",
        theme,
    );
    render_sectors(frame, middle[1], &report.sectors, theme);

    let yearly: Vec<(String, f64)> = report
        .yearly
        .iter()
        .map(|y| (y.year.to_string(), y.amount))
        .collect();
    render_line_chart(
        frame,
        rows[2],
        "YoY Investment",
        &yearly,
        ValueFormat::Crores,
        "No yearly data",
        theme,
    );
}

fn render_recent_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[InvestmentRow],
    theme: &Theme,
) {
    let header = Row::new(
        ["Date", "Startup", "Vertical", "City", "Round", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme.table_header)),
    );

    let data_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Row::new(vec![
                Cell::from(r.date.format("%d/%m/%Y").to_string()),
                Cell::from(r.startup.clone()),
                Cell::from(r.vertical.clone()),
                Cell::from(r.city.clone()),
                Cell::from(r.round.clone()),
                Cell::from(format_crores(r.amount, 2)),
            ])
            .style(theme.row_style(i))
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Percentage(25),
        Constraint::Percentage(20),
        Constraint::Length(12),
        Constraint::Percentage(20),
        Constraint::Length(14),
    ];

    let table = Table::new(data_rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(Span::styled(format!(" {} ", title), theme.bold)),
    );
    frame.render_widget(table, area);
}

fn render_sectors(frame: &mut Frame, area: Rect, sectors: &[ShareOfTotal], theme: &Theme) {
    if sectors.is_empty() {
        render_empty_panel(frame, area, "Sectors Invested In", "No sector data", theme);
        return;
    }

    // Leave room for borders, the name column and the label.
    let bar_width = area.width.saturating_sub(2 + 16 + 1 + 22).clamp(4, 40);
    let lines: Vec<Line> = sectors
        .iter()
        .map(|s| {
            ShareBar::new(&s.name, s.share, s.amount, theme)
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
                .title(Span::styled(" Sectors Invested In ", theme.bold)),
        ),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
