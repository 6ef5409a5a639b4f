use crate::themes::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A bordered headline figure: a dim label on top and a bold value below.
pub struct MetricCard<'a> {
    pub label: &'a str,
    pub value: String,
    pub theme: &'a Theme,
}

impl<'a> MetricCard<'a> {
    pub fn new(label: &'a str, value: impl Into<String>, theme: &'a Theme) -> Self {
        Self {
            label,
            value: value.into(),
            theme,
        }
    }

    pub fn to_lines(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(Span::styled(self.label, self.theme.label)),
            Line::from(Span::styled(self.value.clone(), self.theme.value)),
        ]
    }

    /// Draw the card into `area`; four rows is enough for border plus both
    /// lines.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.to_lines())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.table_border),
            );
        frame.render_widget(paragraph, area);
    }
}
