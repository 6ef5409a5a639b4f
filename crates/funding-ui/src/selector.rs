//! Filterable single-choice list used to pick a startup or investor name.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::themes::Theme;

/// Rows moved by PgUp / PgDn.
pub const PAGE_SIZE: usize = 10;

/// A sorted list of names plus a case-insensitive filter and a cursor.
#[derive(Debug, Clone)]
pub struct NameSelector {
    title: &'static str,
    names: Vec<String>,
    filter: String,
    /// Indices into `names` that match `filter`.
    visible: Vec<usize>,
    state: ListState,
}

impl NameSelector {
    pub fn new(title: &'static str, names: Vec<String>) -> Self {
        let mut selector = Self {
            title,
            names,
            filter: String::new(),
            visible: Vec::new(),
            state: ListState::default(),
        };
        selector.refresh();
        selector
    }

    // ── Filter ────────────────────────────────────────────────────────────────

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn push_char(&mut self, c: char) {
        self.filter.push(c);
        self.refresh();
    }

    pub fn pop_char(&mut self) {
        if self.filter.pop().is_some() {
            self.refresh();
        }
    }

    pub fn clear_filter(&mut self) {
        if !self.filter.is_empty() {
            self.filter.clear();
            self.refresh();
        }
    }

    // ── Cursor ────────────────────────────────────────────────────────────────

    pub fn move_by(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        let current = self.state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.state.select(Some(next));
    }

    pub fn next(&mut self) {
        self.move_by(1);
    }

    pub fn previous(&mut self) {
        self.move_by(-1);
    }

    pub fn page_down(&mut self) {
        self.move_by(PAGE_SIZE as isize);
    }

    pub fn page_up(&mut self) {
        self.move_by(-(PAGE_SIZE as isize));
    }

    /// Name under the cursor, if any name matches the filter.
    pub fn selected(&self) -> Option<&str> {
        let pos = self.state.selected()?;
        let index = *self.visible.get(pos)?;
        Some(self.names[index].as_str())
    }

    /// Names matching the current filter, in list order.
    pub fn visible_names(&self) -> impl Iterator<Item = &str> {
        self.visible.iter().map(|&i| self.names[i].as_str())
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    fn refresh(&mut self) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .names
            .iter()
            .enumerate()
            .filter(|(_, name)| needle.is_empty() || name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        self.state
            .select(if self.visible.is_empty() { None } else { Some(0) });
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Draw the filter line and the list into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let filter_line = if self.filter.is_empty() {
            Line::from(Span::styled("type to filter", theme.dim))
        } else {
            Line::from(vec![
                Span::styled("/ ", theme.label),
                Span::styled(self.filter.as_str(), theme.filter),
            ])
        };
        frame.render_widget(
            Paragraph::new(filter_line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.table_border)
                    .title(format!(" {} ", self.title)),
            ),
            chunks[0],
        );

        let items: Vec<ListItem> = self
            .visible_names()
            .map(|name| ListItem::new(name.to_string()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.table_border)
                    .title(format!(" {} / {} ", self.visible.len(), self.names.len())),
            )
            .style(theme.text)
            .highlight_style(theme.selection)
            .highlight_symbol("> ");

        let mut state = self.state.clone();
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn names() -> Vec<String> {
        ["Accel Partners", "Kalaari Capital", "Sequoia Capital", "SoftBank", "Tiger Global"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_initial_selection_is_first() {
        let s = NameSelector::new("Investor", names());
        assert_eq!(s.selected(), Some("Accel Partners"));
        assert_eq!(s.visible_len(), 5);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut s = NameSelector::new("Investor", names());
        for c in "CAPITAL".chars() {
            s.push_char(c);
        }
        let visible: Vec<&str> = s.visible_names().collect();
        assert_eq!(visible, vec!["Kalaari Capital", "Sequoia Capital"]);
        assert_eq!(s.selected(), Some("Kalaari Capital"));
    }

    #[test]
    fn test_filter_no_match_clears_selection() {
        let mut s = NameSelector::new("Investor", names());
        s.push_char('z');
        s.push_char('z');
        assert_eq!(s.visible_len(), 0);
        assert_eq!(s.selected(), None);
        s.pop_char();
        s.pop_char();
        assert_eq!(s.visible_len(), 5);
        assert_eq!(s.selected(), Some("Accel Partners"));
    }

    #[test]
    fn test_clear_filter() {
        let mut s = NameSelector::new("Investor", names());
        s.push_char('s');
        s.push_char('o');
        assert_eq!(s.filter(), "so");
        s.clear_filter();
        assert_eq!(s.filter(), "");
        assert_eq!(s.visible_len(), 5);
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut s = NameSelector::new("Investor", names());
        s.previous();
        assert_eq!(s.selected(), Some("Accel Partners"));
        s.next();
        s.next();
        assert_eq!(s.selected(), Some("Sequoia Capital"));
        s.page_down();
        assert_eq!(s.selected(), Some("Tiger Global"));
        s.page_up();
        assert_eq!(s.selected(), Some("Accel Partners"));
    }

    #[test]
    fn test_cursor_on_empty_list() {
        let mut s = NameSelector::new("Startup", Vec::new());
        s.next();
        s.page_up();
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_render_shows_names_and_filter() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let mut s = NameSelector::new("Investor", names());
        s.push_char('t');
        s.push_char('i');

        terminal
            .draw(|frame| {
                let area = frame.area();
                s.render(frame, area, &theme);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Tiger Global"));
        assert!(text.contains("/ ti"));
        assert!(!text.contains("SoftBank"));
    }
}
