//! Main application state and TUI event loop for the funding dashboard.
//!
//! [`App`] borrows the normalized table, owns the theme, the active view, one
//! name selector per detail view and the last computed report of each view.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};
use tracing::{debug, info};

use funding_core::models::FundingTable;
use funding_data::reports::{
    InvestorMatch, InvestorReport, MomMetric, OverallReport, RankingMode, StartupReport,
};

use crate::components::header::Header;
use crate::selector::NameSelector;
use crate::themes::Theme;
use crate::{investor_view, overall_view, startup_view};

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which report the TUI is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Overall,
    Startup,
    Investor,
}

impl ViewMode {
    /// Tab order.
    pub const ALL: [ViewMode; 3] = [ViewMode::Overall, ViewMode::Startup, ViewMode::Investor];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "overall" => Some(Self::Overall),
            "startup" => Some(Self::Startup),
            "investor" => Some(Self::Investor),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Overall => "Overall Analysis",
            Self::Startup => "Startup",
            Self::Investor => "Investor",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Overall => 0,
            Self::Startup => 1,
            Self::Investor => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ── AppConfig ─────────────────────────────────────────────────────────────────

/// Presentation options resolved from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub theme_name: String,
    pub view_mode: ViewMode,
    pub investor_match: InvestorMatch,
    pub ranking: RankingMode,
    /// Shown in the header, usually the dataset file name.
    pub dataset_label: String,
    /// Load summary shown next to the dataset label.
    pub summary: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_name: "auto".to_string(),
            view_mode: ViewMode::Overall,
            investor_match: InvestorMatch::default(),
            ranking: RankingMode::default(),
            dataset_label: String::new(),
            summary: String::new(),
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the dashboard TUI.
pub struct App<'a> {
    pub theme: Theme,
    pub view_mode: ViewMode,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    pub mom_metric: MomMetric,
    /// Computed once at construction; the table never changes.
    pub overall: OverallReport,
    pub startups: NameSelector,
    pub investors: NameSelector,
    pub startup_report: Option<StartupReport>,
    pub investor_report: Option<InvestorReport>,
    table: &'a FundingTable,
    investor_match: InvestorMatch,
    ranking: RankingMode,
    dataset_label: String,
    summary: String,
}

impl<'a> App<'a> {
    pub fn new(table: &'a FundingTable, config: AppConfig) -> Self {
        let overall = OverallReport::compute(table);
        info!(
            "Overall analysis: {} startups, {} months",
            overall.funded_startups,
            overall.monthly.len()
        );

        Self {
            theme: Theme::from_name(&config.theme_name),
            view_mode: config.view_mode,
            should_quit: false,
            mom_metric: MomMetric::default(),
            overall,
            startups: NameSelector::new("Startup", table.startup_names()),
            investors: NameSelector::new("Investor", table.investor_names()),
            startup_report: None,
            investor_report: None,
            table,
            investor_match: config.investor_match,
            ranking: config.ranking,
            dataset_label: config.dataset_label,
            summary: config.summary,
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the TUI until `q` (`Alt+q` in the selector views) or `Ctrl+C`.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout on the current
    /// thread; every report is computed synchronously when confirmed.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            if let Err(e) = terminal.draw(|frame| self.render(frame)) {
                break Err(e);
            }

            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key)
                    }
                    Ok(_) => {}
                    Err(e) => break Err(e),
                },
                Ok(false) => {}
                Err(e) => break Err(e),
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// Apply one key press to the application state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.view_mode = self.view_mode.next(),
            KeyCode::BackTab => self.view_mode = self.view_mode.previous(),
            KeyCode::Enter => self.confirm(),
            KeyCode::Up => self.with_selector(NameSelector::previous),
            KeyCode::Down => self.with_selector(NameSelector::next),
            KeyCode::PageUp => self.with_selector(NameSelector::page_up),
            KeyCode::PageDown => self.with_selector(NameSelector::page_down),
            KeyCode::Backspace => self.with_selector(NameSelector::pop_char),
            KeyCode::Esc => self.with_selector(NameSelector::clear_filter),
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => self.command(c),
            KeyCode::Char(c) if self.view_mode == ViewMode::Overall => self.command(c),
            KeyCode::Char(c) => self.with_selector(|s| s.push_char(c)),
            _ => {}
        }
    }

    /// Single-key commands. Plain keys reach here only in the Overall view;
    /// the selector views type every character into the filter and take
    /// commands with Alt held.
    fn command(&mut self, c: char) {
        match c {
            'q' => self.should_quit = true,
            '1' | '2' | '3' => {
                let index = c as usize - '1' as usize;
                self.view_mode = ViewMode::ALL[index];
            }
            'm' if self.view_mode == ViewMode::Overall => {
                self.mom_metric = self.mom_metric.toggle();
            }
            _ => {}
        }
    }

    fn with_selector(&mut self, f: impl FnOnce(&mut NameSelector)) {
        match self.view_mode {
            ViewMode::Overall => {}
            ViewMode::Startup => f(&mut self.startups),
            ViewMode::Investor => f(&mut self.investors),
        }
    }

    /// Compute the detail report for the highlighted name.
    fn confirm(&mut self) {
        match self.view_mode {
            ViewMode::Overall => {}
            ViewMode::Startup => {
                let Some(name) = self.startups.selected().map(str::to_string) else {
                    debug!("Enter pressed with no startup selected");
                    return;
                };
                let report = StartupReport::compute(self.table, &name);
                info!("Startup analysis for \"{}\": {} rounds", name, report.rounds.len());
                self.startup_report = Some(report);
            }
            ViewMode::Investor => {
                let Some(name) = self.investors.selected().map(str::to_string) else {
                    debug!("Enter pressed with no investor selected");
                    return;
                };
                let report =
                    InvestorReport::compute(self.table, &name, self.investor_match, self.ranking);
                info!("Investor analysis for \"{}\": {} matches", name, report.matched);
                self.investor_report = Some(report);
            }
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let header = Header::new(&self.dataset_label, &self.summary, &self.theme);
        frame.render_widget(Paragraph::new(Text::from(header.to_lines())), chunks[0]);

        let tabs = Tabs::new(ViewMode::ALL.iter().map(|m| m.title()))
            .select(self.view_mode.index())
            .style(self.theme.tab)
            .highlight_style(self.theme.tab_active)
            .divider("|")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.table_border),
            );
        frame.render_widget(tabs, chunks[1]);

        match self.view_mode {
            ViewMode::Overall => overall_view::render_overall_view(
                frame,
                chunks[2],
                &self.overall,
                self.mom_metric,
                &self.theme,
            ),
            ViewMode::Startup => startup_view::render_startup_view(
                frame,
                chunks[2],
                &self.startups,
                self.startup_report.as_ref(),
                &self.theme,
            ),
            ViewMode::Investor => investor_view::render_investor_view(
                frame,
                chunks[2],
                &self.investors,
                self.investor_report.as_ref(),
                &self.theme,
            ),
        }

        frame.render_widget(Paragraph::new(self.help_line()), chunks[3]);
    }

    fn help_line(&self) -> Line<'static> {
        let keys = match self.view_mode {
            ViewMode::Overall => "Tab/1-3 switch view | m Total/Count | q quit",
            ViewMode::Startup | ViewMode::Investor => {
                "Tab/Alt+1-3 switch view | type to filter | ↑↓ PgUp/PgDn select | Enter show | Esc clear | Alt+q quit"
            }
        };
        Line::from(Span::styled(keys, self.theme.dim))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use funding_core::models::FundingRecord;
    use ratatui::backend::TestBackend;

    fn record(date: &str, startup: &str, investors: &str, amount: f64) -> FundingRecord {
        let date = NaiveDate::parse_from_str(date, "%d/%m/%Y").unwrap();
        FundingRecord {
            date,
            startup: startup.to_string(),
            vertical: "Tech".to_string(),
            subvertical: String::new(),
            city: "Delhi".to_string(),
            investors: investors.to_string(),
            round: "Seed".to_string(),
            amount,
            year: date.year(),
            month: date.month(),
        }
    }

    fn table() -> FundingTable {
        FundingTable::new(vec![
            record("01/01/2017", "Ola", "Sequoia Capital, Accel", 10.0),
            record("01/02/2017", "Quikr", "Matrix Partners", 5.0),
            record("01/03/2018", "Zomato", "Sequoia-adjacent Fund", 7.0),
        ])
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn config(view_mode: ViewMode) -> AppConfig {
        AppConfig {
            theme_name: "dark".to_string(),
            view_mode,
            dataset_label: "startup_funding.csv".to_string(),
            summary: "3 rows (0 dropped)".to_string(),
            ..AppConfig::default()
        }
    }

    // ── ViewMode ──────────────────────────────────────────────────────────────

    #[test]
    fn test_view_mode_from_name() {
        assert_eq!(ViewMode::from_name("overall"), Some(ViewMode::Overall));
        assert_eq!(ViewMode::from_name("startup"), Some(ViewMode::Startup));
        assert_eq!(ViewMode::from_name("investor"), Some(ViewMode::Investor));
        assert_eq!(ViewMode::from_name("daily"), None);
    }

    #[test]
    fn test_view_mode_cycles() {
        assert_eq!(ViewMode::Overall.next(), ViewMode::Startup);
        assert_eq!(ViewMode::Investor.next(), ViewMode::Overall);
        assert_eq!(ViewMode::Overall.previous(), ViewMode::Investor);
    }

    // ── App::new ──────────────────────────────────────────────────────────────

    #[test]
    fn test_app_creation_defaults() {
        let t = table();
        let app = App::new(&t, config(ViewMode::Startup));
        assert_eq!(app.view_mode, ViewMode::Startup);
        assert!(!app.should_quit);
        assert_eq!(app.overall.funded_startups, 3);
        assert_eq!(app.startups.visible_len(), 3);
        assert_eq!(app.investors.visible_len(), 4);
        assert_eq!(app.mom_metric, MomMetric::Total);
    }

    // ── Keys ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_quit_keys() {
        let t = table();
        let mut app = App::new(&t, config(ViewMode::Overall));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new(&t, config(ViewMode::Investor));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = App::new(&t, config(ViewMode::Startup));
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT));
        assert!(app.should_quit);
    }

    #[test]
    fn test_selector_views_type_command_letters() {
        let t = FundingTable::new(vec![
            record("01/01/2017", "Qualcomm Ventures", "Qualcomm", 1.0),
            record("01/01/2017", "1mg", "3one4 Capital", 1.0),
        ]);
        let mut app = App::new(&t, config(ViewMode::Investor));
        type_str(&mut app, "qualcomm");
        assert!(!app.should_quit);
        assert_eq!(app.view_mode, ViewMode::Investor);
        assert_eq!(app.investors.selected(), Some("Qualcomm"));

        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.investors.filter(), "qualcomm2");

        // Plain digits still switch views from the Overall tab.
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "3");
        assert_eq!(app.view_mode, ViewMode::Investor);
        assert_eq!(app.investors.filter(), "qualcomm2");

        let mut app = App::new(&t, config(ViewMode::Startup));
        type_str(&mut app, "1m");
        assert_eq!(app.view_mode, ViewMode::Startup);
        assert_eq!(app.startups.selected(), Some("1mg"));
    }

    #[test]
    fn test_view_switch_keys() {
        let t = table();
        let mut app = App::new(&t, config(ViewMode::Overall));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.view_mode, ViewMode::Startup);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.view_mode, ViewMode::Overall);
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.view_mode, ViewMode::Investor);
        app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT));
        assert_eq!(app.view_mode, ViewMode::Overall);
        app.handle_key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT));
        assert_eq!(app.view_mode, ViewMode::Startup);
    }

    #[test]
    fn test_overall_report_ready_without_enter() {
        let t = table();
        let app = App::new(&t, config(ViewMode::Overall));
        assert!((app.overall.total - 22.0).abs() < 1e-9);
        assert_eq!(app.overall.funded_startups, 3);
        assert_eq!(app.overall.monthly.len(), 3);
    }

    #[test]
    fn test_m_toggles_metric_only_in_overall() {
        let t = table();
        let mut app = App::new(&t, config(ViewMode::Overall));
        app.handle_key(key(KeyCode::Char('m')));
        assert_eq!(app.mom_metric, MomMetric::Count);

        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('m')));
        assert_eq!(app.mom_metric, MomMetric::Count);
        assert_eq!(app.startups.filter(), "m");

        app.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::ALT));
        assert_eq!(app.mom_metric, MomMetric::Count);
    }

    #[test]
    fn test_typing_filters_and_q_becomes_text() {
        let t = table();
        let mut app = App::new(&t, config(ViewMode::Startup));
        type_str(&mut app, "zo");
        assert_eq!(app.startups.selected(), Some("Zomato"));

        app.handle_key(key(KeyCode::Esc));
        type_str(&mut app, "q");
        type_str(&mut app, "Q");
        assert!(!app.should_quit);
        assert_eq!(app.startups.filter(), "qQ");

        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.startups.filter(), "");
    }

    #[test]
    fn test_enter_computes_startup_report() {
        let t = table();
        let mut app = App::new(&t, config(ViewMode::Startup));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        let report = app.startup_report.as_ref().unwrap();
        assert_eq!(report.startup, "Quikr");
        assert_eq!(report.rounds.len(), 1);
    }

    #[test]
    fn test_enter_computes_investor_report_with_substring_policy() {
        let t = table();
        let mut app = App::new(&t, config(ViewMode::Investor));
        // Investors sorted: Accel, Matrix Partners, Sequoia Capital, Sequoia-adjacent Fund
        type_str(&mut app, "sequoia c");
        app.handle_key(key(KeyCode::Enter));
        let report = app.investor_report.as_ref().unwrap();
        assert_eq!(report.investor, "Sequoia Capital");
        assert_eq!(report.matched, 1);
    }

    #[test]
    fn test_exact_policy_from_config() {
        let t = FundingTable::new(vec![
            record("01/01/2017", "A", "Sequoia", 1.0),
            record("01/01/2017", "B", "Sequoia Capital", 1.0),
        ]);
        let mut cfg = config(ViewMode::Investor);
        cfg.investor_match = InvestorMatch::Exact;
        let mut app = App::new(&t, cfg);
        // First sorted investor is "Sequoia".
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.investor_report.as_ref().unwrap().matched, 1);

        let mut app = App::new(&t, config(ViewMode::Investor));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.investor_report.as_ref().unwrap().matched, 2);
    }

    #[test]
    fn test_enter_with_no_selection_keeps_previous_report() {
        let t = table();
        let mut app = App::new(&t, config(ViewMode::Startup));
        type_str(&mut app, "xyz");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.startup_report.is_none());
    }

    // ── Render ────────────────────────────────────────────────────────────────

    #[test]
    fn test_render_every_view_does_not_panic() {
        let t = table();
        let mut app = App::new(&t, config(ViewMode::Overall));
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();

        for view in ViewMode::ALL {
            app.view_mode = view;
            app.handle_key(key(KeyCode::Enter));
            terminal.draw(|frame| app.render(frame)).unwrap();
        }

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("STARTUP FUNDING DASHBOARD"));
        assert!(text.contains("startup_funding.csv"));
        assert!(text.contains("Overall Analysis"));
    }

    #[test]
    fn test_render_overall_metrics_on_first_draw() {
        let t = table();
        let app = App::new(&t, config(ViewMode::Overall));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("22 Cr"));
        assert!(text.contains("Funded Startups"));
    }

    #[test]
    fn test_render_empty_table() {
        let t = FundingTable::default();
        let mut app = App::new(&t, config(ViewMode::Investor));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.investor_report.is_none());
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }
}
