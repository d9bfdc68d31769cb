//! Split view - both texts side by side, editable

use super::ACCENT;
use crate::app::App;
use diffbro_core::Side;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

fn pane_block(app: &App, side: Side) -> Block<'static> {
    let label = match side {
        Side::Left => "Original Text",
        Side::Right => "Modified Text",
    };
    let (lines, chars) = app.counts(side);
    let focused = app.focus == side;
    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(vec![
            Span::styled(
                format!(" {label} "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} \u{b7} {} ", plural(lines, "line"), plural(chars, "char")),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
}

pub fn render_split(frame: &mut Frame, app: &mut App, area: Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_block = pane_block(app, Side::Left);
    let right_block = pane_block(app, Side::Right);

    // Only the focused pane shows a cursor
    let hidden = Style::default();
    let visible = Style::default().add_modifier(Modifier::REVERSED);
    let (left_cursor, right_cursor) = match app.focus {
        Side::Left => (visible, hidden),
        Side::Right => (hidden, visible),
    };

    app.left.set_block(left_block);
    app.left.set_cursor_style(left_cursor);
    app.right.set_block(right_block);
    app.right.set_cursor_style(right_cursor);

    frame.render_widget(&app.left, panes[0]);
    frame.render_widget(&app.right, panes[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "line"), "1 line");
        assert_eq!(plural(0, "char"), "0 chars");
        assert_eq!(plural(12, "char"), "12 chars");
    }
}
