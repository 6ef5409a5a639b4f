use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative marks placed either side of the application title.
pub const ACCENT: &str = "₹ ₹ ₹";

/// Dashboard header rendering four lines:
///
/// 1. Application title with accent decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Dataset and load summary in `[ dataset | summary ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Dataset file name (e.g. "startup_funding.csv").
    pub dataset: &'a str,
    /// Load summary (e.g. "2,372 rows (672 dropped)").
    pub summary: &'a str,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(dataset: &'a str, summary: &'a str, theme: &'a Theme) -> Self {
        Self {
            dataset,
            summary,
            theme,
        }
    }

    /// Render the header as exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            Line::from(vec![
                Span::styled(ACCENT, self.theme.header_accent),
                Span::styled(" STARTUP FUNDING DASHBOARD ", self.theme.header),
                Span::styled(ACCENT, self.theme.header_accent),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.dataset, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(self.summary, self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_header_to_lines_count() {
        let theme = Theme::dark();
        let lines = Header::new("startup_funding.csv", "10 rows (0 dropped)", &theme).to_lines();
        assert_eq!(lines.len(), 4, "header must produce exactly 4 lines");
    }

    #[test]
    fn test_header_title_line_content() {
        let theme = Theme::dark();
        let lines = Header::new("startup_funding.csv", "10 rows (0 dropped)", &theme).to_lines();
        let title_text = line_text(&lines[0]);
        assert!(
            title_text.contains("STARTUP FUNDING DASHBOARD"),
            "title line must contain the app name, got: {title_text}"
        );
        assert!(title_text.starts_with(ACCENT));
    }

    #[test]
    fn test_header_separator_line() {
        let theme = Theme::dark();
        let lines = Header::new("a.csv", "", &theme).to_lines();
        let sep_text = line_text(&lines[1]);
        assert_eq!(sep_text.chars().count(), 60);
        assert!(sep_text.chars().all(|c| c == '='));
    }

    #[test]
    fn test_header_info_line() {
        let theme = Theme::dark();
        let lines = Header::new("funding.csv", "2,372 rows (672 dropped)", &theme).to_lines();
        assert_eq!(
            line_text(&lines[2]),
            "[ funding.csv | 2,372 rows (672 dropped) ]"
        );
        assert_eq!(lines[2].spans.len(), 5);
    }

    #[test]
    fn test_header_empty_fourth_line() {
        let theme = Theme::dark();
        let lines = Header::new("a.csv", "b", &theme).to_lines();
        assert!(line_text(&lines[3]).is_empty());
    }
}
