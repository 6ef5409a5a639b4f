//! Chart and panel helpers shared by the report views.

use ratatui::{
    layout::{Alignment, Direction, Rect},
    symbols,
    text::{Line, Span, Text},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use funding_core::formatting::{format_crores, format_number};

use crate::themes::Theme;

/// How values on a chart axis are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// `"1,234 Cr"`
    Crores,
    /// `"1,234"`
    Count,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Crores => format_crores(value, 0),
            Self::Count => format_number(value, 0),
        }
    }
}

fn panel<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.table_border)
        .title(Span::styled(format!(" {} ", title), theme.bold))
}

/// Bordered panel with a centred dim message, used for zero states.
pub fn render_empty_panel(frame: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme.dim)),
    ]);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(panel(title, theme)),
        area,
    );
}

/// Evenly spaced x-axis labels: first, middle and last.
pub fn axis_labels(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].clone()],
        2 => labels.to_vec(),
        n => vec![
            labels[0].clone(),
            labels[n / 2].clone(),
            labels[n - 1].clone(),
        ],
    }
}

/// Line chart of `(label, value)` points in order.
///
/// An empty series renders `empty_message` instead.
pub fn render_line_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &[(String, f64)],
    format: ValueFormat,
    empty_message: &str,
    theme: &Theme,
) {
    if series.is_empty() {
        render_empty_panel(frame, area, title, empty_message, theme);
        return;
    }

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, (_, v))| (i as f64, *v))
        .collect();
    let labels: Vec<String> = series.iter().map(|(l, _)| l.clone()).collect();

    let x_max = (series.len().saturating_sub(1)).max(1) as f64;
    let y_top = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let y_max = if y_top > 0.0 { y_top * 1.1 } else { 1.0 };

    let marker = if series.len() == 1 {
        symbols::Marker::Dot
    } else {
        symbols::Marker::Braille
    };
    let dataset = Dataset::default()
        .marker(marker)
        .graph_type(GraphType::Line)
        .style(theme.chart_line)
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(panel(title, theme))
        .x_axis(
            Axis::default()
                .style(theme.chart_axis)
                .bounds([0.0, x_max])
                .labels(axis_labels(&labels)),
        )
        .y_axis(
            Axis::default()
                .style(theme.chart_axis)
                .bounds([0.0, y_max])
                .labels(vec![
                    format.format(0.0),
                    format.format(y_max / 2.0),
                    format.format(y_max),
                ]),
        );

    frame.render_widget(chart, area);
}

/// Horizontal bar chart of named crore amounts, drawn in the given order.
pub fn render_bar_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[(String, f64)],
    empty_message: &str,
    theme: &Theme,
) {
    if items.is_empty() {
        render_empty_panel(frame, area, title, empty_message, theme);
        return;
    }

    // Bar values are integers; keep two decimals of precision.
    let bars: Vec<Bar> = items
        .iter()
        .map(|(name, amount)| {
            Bar::default()
                .value((amount * 100.0).round().max(0.0) as u64)
                .text_value(format_crores(*amount, 2))
                .label(Line::from(name.clone()))
                .style(theme.chart_bar)
                .value_style(theme.value)
        })
        .collect();

    let chart = BarChart::default()
        .block(panel(title, theme))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
