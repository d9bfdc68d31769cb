//! View rendering modules

mod diff_view;
mod split;

pub use diff_view::render_diff;
pub use split::render_split;

use crate::app::App;
use crate::config::ViewMode;
use diffbro_core::{CharKind, LineKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

const ADDED_FG: Color = Color::Green;
const REMOVED_FG: Color = Color::Red;
const MODIFIED_FG: Color = Color::Yellow;
const ADDED_CHAR_BG: Color = Color::Rgb(30, 90, 40);
const REMOVED_CHAR_BG: Color = Color::Rgb(110, 30, 30);
const ACCENT: Color = Color::Cyan;

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.view_mode {
        ViewMode::Split => render_split(frame, app, chunks[1]),
        ViewMode::Diff => render_diff(frame, app, chunks[1]),
    }
    render_footer(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray))
        }
    };

    let mut spans = vec![
        Span::styled("Diff Bro ", Style::default().add_modifier(Modifier::BOLD)),
        tab("Split View", app.view_mode == ViewMode::Split),
        tab("Diff View", app.view_mode == ViewMode::Diff),
    ];
    if app.view_mode == ViewMode::Diff {
        spans.push(Span::raw(" "));
        spans.push(tab("Char Diff", app.show_char_diff));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help = match app.view_mode {
        ViewMode::Split => {
            "F2 diff view  F4 swap  F5 clear all  F6 clear pane  Tab switch pane  Ctrl+Q quit"
        }
        ViewMode::Diff => {
            "F2 split view  F3/c char diff  F4 swap  F5 clear all  \u{2191}\u{2193}/PgUp/PgDn scroll  q quit"
        }
    };
    let footer = Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray)));
    frame.render_widget(footer, area);
}

/// Centered message used when there is nothing to compare
fn render_empty_state(frame: &mut Frame, area: Rect, title: &str, hint: &str) {
    let top = area.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..top).map(|_| Line::raw("")).collect();
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Added => Style::default().fg(ADDED_FG),
        LineKind::Removed => Style::default().fg(REMOVED_FG),
        LineKind::Modified => Style::default().fg(MODIFIED_FG),
        LineKind::Empty => Style::default().fg(Color::DarkGray),
        LineKind::Equal => Style::default(),
    }
}

fn gutter_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Equal | LineKind::Empty => Style::default().fg(Color::DarkGray),
        other => line_style(other).add_modifier(Modifier::DIM),
    }
}

fn char_style(kind: CharKind) -> Style {
    match kind {
        CharKind::Equal => line_style(LineKind::Modified),
        CharKind::Added => Style::default().fg(Color::White).bg(ADDED_CHAR_BG),
        CharKind::Removed => Style::default().fg(Color::White).bg(REMOVED_CHAR_BG),
    }
}

/// Expands tabs to the next tab stop, keeping track of the column across
/// successive pieces of the same line
struct TabExpander {
    tab_width: usize,
    column: usize,
}

impl TabExpander {
    fn new(tab_width: usize) -> Self {
        Self {
            tab_width: tab_width.max(1),
            column: 0,
        }
    }

    fn expand(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch == '\t' {
                let advance = self.tab_width - self.column % self.tab_width;
                out.extend(std::iter::repeat(' ').take(advance));
                self.column += advance;
            } else {
                out.push(ch);
                self.column += ch.width().unwrap_or(0);
            }
        }
        out
    }
}
