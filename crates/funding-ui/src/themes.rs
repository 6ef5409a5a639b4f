use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// If the variable is absent or unparseable, `BackgroundType::Dark` is
/// returned.
pub fn detect_background() -> BackgroundType {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|val| parse_colorfgbg(&val))
        .unwrap_or(BackgroundType::Dark)
}

/// Parse a `"foreground;background"` value. Background colours 0–6 are dark,
/// 7 and above are light.
pub fn parse_colorfgbg(value: &str) -> Option<BackgroundType> {
    let bg = value.split(';').next_back()?.trim().parse::<u8>().ok()?;
    Some(if bg <= 6 {
        BackgroundType::Dark
    } else {
        BackgroundType::Light
    })
}

/// Every style the dashboard draws with.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_accent: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Navigation ───────────────────────────────────────────────────────────
    pub tab: Style,
    pub tab_active: Style,
    /// Highlighted entry in a name selector.
    pub selection: Style,
    /// Filter text typed into a selector.
    pub filter: Style,

    // ── Charts ───────────────────────────────────────────────────────────────
    pub chart_line: Style,
    pub chart_bar: Style,
    pub chart_axis: Style,
    /// Share bar fill at or above 50 %.
    pub share_high: Style,
    /// Share bar fill between 20 % and 50 %.
    pub share_medium: Style,
    /// Share bar fill below 20 %.
    pub share_low: Style,
    pub share_empty: Style,
    pub share_label: Style,

    // ── Table ────────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            tab: Style::default().fg(Color::Gray),
            tab_active: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            selection: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            filter: Style::default().fg(Color::Yellow),

            chart_line: Style::default().fg(Color::Cyan),
            chart_bar: Style::default().fg(Color::Green),
            chart_axis: Style::default().fg(Color::Gray),
            share_high: Style::default().fg(Color::Magenta),
            share_medium: Style::default().fg(Color::Cyan),
            share_low: Style::default().fg(Color::Green),
            share_empty: Style::default().fg(Color::DarkGray),
            share_label: Style::default().fg(Color::Gray),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text so content stays legible against a
    /// white or light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            tab: Style::default().fg(Color::DarkGray),
            tab_active: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            selection: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            filter: Style::default().fg(Color::Magenta),

            chart_line: Style::default().fg(Color::Blue),
            chart_bar: Style::default().fg(Color::Green),
            chart_axis: Style::default().fg(Color::DarkGray),
            share_high: Style::default().fg(Color::Magenta),
            share_medium: Style::default().fg(Color::Blue),
            share_low: Style::default().fg(Color::Green),
            share_empty: Style::default().fg(Color::Gray),
            share_label: Style::default().fg(Color::DarkGray),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// Avoids bold modifiers to maximise compatibility with minimal terminal
    /// emulators.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            header_accent: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            tab: Style::default().fg(Color::White),
            tab_active: Style::default().fg(Color::Yellow),
            selection: Style::default().fg(Color::Black).bg(Color::White),
            filter: Style::default().fg(Color::Yellow),

            chart_line: Style::default().fg(Color::Cyan),
            chart_bar: Style::default().fg(Color::Green),
            chart_axis: Style::default().fg(Color::White),
            share_high: Style::default().fg(Color::Red),
            share_medium: Style::default().fg(Color::Yellow),
            share_low: Style::default().fg(Color::Green),
            share_empty: Style::default().fg(Color::DarkGray),
            share_label: Style::default().fg(Color::White),

            table_header: Style::default().fg(Color::Cyan),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            BackgroundType::Dark => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Fill style for a share bar at `percentage` of the listed total.
    ///
    /// * `< 20 %`  → `share_low`
    /// * `20–50 %` → `share_medium`
    /// * `≥ 50 %`  → `share_high`
    pub fn share_style(&self, percentage: f64) -> Style {
        if percentage >= 50.0 {
            self.share_high
        } else if percentage >= 20.0 {
            self.share_medium
        } else {
            self.share_low
        }
    }

    /// Alternating row style for tables.
    pub fn row_style(&self, index: usize) -> Style {
        if index % 2 == 0 {
            self.table_row
        } else {
            self.table_row_alt
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
