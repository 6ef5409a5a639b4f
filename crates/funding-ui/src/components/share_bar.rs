use crate::themes::Theme;
use funding_core::formatting::format_crores;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Configuration controlling the visual appearance of a share bar.
pub struct ShareBarConfig {
    /// Width in terminal columns of the bar portion.
    pub width: u16,
    /// Width the name column is padded or truncated to.
    pub name_width: usize,
    pub filled_char: char,
    pub empty_char: char,
}

impl Default for ShareBarConfig {
    fn default() -> Self {
        Self {
            width: 30,
            name_width: 20,
            filled_char: '\u{2588}', // █  FULL BLOCK
            empty_char: '\u{2591}',  // ░  LIGHT SHADE
        }
    }
}

// ── ShareBar ─────────────────────────────────────────────────────────────────

/// Horizontal bar showing one slice of a breakdown.
///
/// Renders as `name  ████░░░░ 42.0% (12.50 Cr)`.
pub struct ShareBar<'a> {
    pub name: &'a str,
    /// Share of the listed total, clamped to `[0.0, 100.0]`.
    pub percentage: f64,
    /// Amount in crores.
    pub amount: f64,
    pub theme: &'a Theme,
    pub config: ShareBarConfig,
}

impl<'a> ShareBar<'a> {
    pub fn new(name: &'a str, percentage: f64, amount: f64, theme: &'a Theme) -> Self {
        Self {
            name,
            percentage: percentage.clamp(0.0, 100.0),
            amount,
            theme,
            config: ShareBarConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ShareBarConfig) -> Self {
        self.config = config;
        self
    }

    /// Render the bar as a [`Line`].
    pub fn to_line(&self) -> Line<'a> {
        let filled = ((self.percentage / 100.0) * self.config.width as f64).round() as u16;
        let filled = filled.min(self.config.width);
        let empty = self.config.width - filled;

        let filled_str: String =
            std::iter::repeat_n(self.config.filled_char, filled as usize).collect();
        let empty_str: String =
            std::iter::repeat_n(self.config.empty_char, empty as usize).collect();

        let label = format!(
            " {:.1}% ({})",
            self.percentage,
            format_crores(self.amount, 2)
        );

        Line::from(vec![
            Span::styled(fit_width(self.name, self.config.name_width), self.theme.label),
            Span::raw(" "),
            Span::styled(filled_str, self.theme.share_style(self.percentage)),
            Span::styled(empty_str, self.theme.share_empty),
            Span::styled(label, self.theme.share_label),
        ])
    }
}

/// Pad `text` with spaces to exactly `width` display columns, truncating with
/// `…` when it is too wide.
pub fn fit_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current <= width {
        return format!("{}{}", text, " ".repeat(width - current));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
