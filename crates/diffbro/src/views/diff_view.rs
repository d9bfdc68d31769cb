//! Diff view - both sides aligned row by row with highlighted changes

use super::{char_style, gutter_style, line_style, render_empty_state, TabExpander};
use crate::app::App;
use diffbro_core::{CharSpan, Comparison, DiffStats, LineKind, LineRecord, Side};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Visible rows of one side, ready to draw
struct SideLines {
    gutter: Vec<Line<'static>>,
    content: Vec<Line<'static>>,
    max_width: usize,
}

impl SideLines {
    fn with_capacity(rows: usize) -> Self {
        Self {
            gutter: Vec::with_capacity(rows),
            content: Vec::with_capacity(rows),
            max_width: 0,
        }
    }

    fn push(
        &mut self,
        record: &LineRecord,
        chars: Option<&[CharSpan]>,
        number_width: usize,
        tab_width: usize,
    ) {
        let number = if record.kind == LineKind::Empty {
            String::new()
        } else {
            record.line_number.to_string()
        };
        self.gutter.push(Line::from(Span::styled(
            format!("{number:>number_width$} "),
            gutter_style(record.kind),
        )));

        let spans = match chars {
            Some(chars) => char_spans(chars, tab_width),
            None => {
                let text = TabExpander::new(tab_width).expand(&record.content);
                vec![Span::styled(text, line_style(record.kind))]
            }
        };
        let width: usize = spans.iter().map(|s| s.content.width()).sum();
        self.max_width = self.max_width.max(width);
        self.content.push(Line::from(spans));
    }
}

/// Group consecutive characters of the same kind into one span
fn char_spans(chars: &[CharSpan], tab_width: usize) -> Vec<Span<'static>> {
    let mut tabs = TabExpander::new(tab_width);
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_kind = None;

    for span in chars {
        if run_kind != Some(span.kind) {
            if let Some(kind) = run_kind {
                spans.push(Span::styled(
                    tabs.expand(&std::mem::take(&mut run)),
                    char_style(kind),
                ));
            }
            run_kind = Some(span.kind);
        }
        run.push(span.ch);
    }
    if let Some(kind) = run_kind {
        spans.push(Span::styled(tabs.expand(&run), char_style(kind)));
    }
    spans
}

fn stats_line(stats: &DiffStats) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let value = |n: usize, color: Color| {
        Span::styled(
            n.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };
    Line::from(vec![
        Span::styled(" Total Lines: ", label),
        value(stats.total, Color::White),
        Span::styled("  \u{25cf} Added: ", Style::default().fg(super::ADDED_FG)),
        value(stats.added, super::ADDED_FG),
        Span::styled("  \u{25cf} Removed: ", Style::default().fg(super::REMOVED_FG)),
        value(stats.removed, super::REMOVED_FG),
        Span::styled("  \u{25cf} Modified: ", Style::default().fg(super::MODIFIED_FG)),
        value(stats.modified, super::MODIFIED_FG),
        Span::styled("  Unchanged: ", label),
        value(stats.equal, Color::White),
    ])
}

/// Build the visible window of both sides
fn build_rows(
    comparison: &Comparison,
    offset: usize,
    height: usize,
    show_char_diff: bool,
    tab_width: usize,
) -> (SideLines, SideLines) {
    let number_width = comparison.result.len().to_string().len();
    let mut left = SideLines::with_capacity(height);
    let mut right = SideLines::with_capacity(height);

    for (idx, (l, r)) in comparison.result.rows().enumerate().skip(offset).take(height) {
        let chars = if show_char_diff {
            comparison.char_diff(idx)
        } else {
            None
        };
        left.push(l, chars.as_ref().map(|c| c.side(Side::Left)), number_width, tab_width);
        right.push(r, chars.as_ref().map(|c| c.side(Side::Right)), number_width, tab_width);
    }

    (left, right)
}

/// Paragraph scroll offsets are u16; very wide lines saturate
fn scroll_columns(horizontal_scroll: usize) -> u16 {
    u16::try_from(horizontal_scroll).unwrap_or(u16::MAX)
}

fn render_side(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: SideLines,
    horizontal_scroll: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let gutter_width = lines
        .gutter
        .first()
        .map(|line| line.width() as u16)
        .unwrap_or(0);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(gutter_width), Constraint::Min(1)])
        .split(inner);

    frame.render_widget(Paragraph::new(lines.gutter), columns[0]);
    frame.render_widget(
        Paragraph::new(lines.content).scroll((0, scroll_columns(horizontal_scroll))),
        columns[1],
    );
}

pub fn render_diff(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.both_empty() {
        render_empty_state(
            frame,
            area,
            "Enter text in both panels to see the differences",
            "The diff comparison will appear here automatically",
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    // Borders take two rows and two columns
    let visible_height = panes[0].height.saturating_sub(2) as usize;
    let visible_width = panes[0].width.saturating_sub(2) as usize;
    app.page_height = visible_height;

    let total = match app.comparison() {
        Ok(comparison) => comparison.result.len(),
        Err(message) => {
            let message = message.to_string();
            render_empty_state(frame, area, "Cannot compare these texts", &message);
            return;
        }
    };
    app.clamp_scroll(total, visible_height);

    let show_char_diff = app.show_char_diff;
    let tab_width = app.tab_width;
    let offset = app.scroll_offset;
    // Memoized, so this is the comparison fetched above
    let Ok(comparison) = app.comparison() else {
        return;
    };
    let stats = comparison.stats;
    let (left, right) = build_rows(comparison, offset, visible_height, show_char_diff, tab_width);

    let gutter = left.gutter.first().map(|l| l.width()).unwrap_or(0);
    let max_width = left.max_width.max(right.max_width);
    app.clamp_horizontal_scroll(max_width, visible_width.saturating_sub(gutter));

    let stats_bar = Paragraph::new(stats_line(&stats)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(stats_bar, chunks[0]);

    render_side(frame, panes[0], "Original", left, app.horizontal_scroll);
    render_side(frame, panes[1], "Modified", right, app.horizontal_scroll);

    if total > visible_height {
        let mut state = ScrollbarState::new(total.saturating_sub(visible_height)).position(offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            panes[1],
            &mut state,
        );
    }
}
