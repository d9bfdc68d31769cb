//! Interactive state: the two editable panes and the view toggles

use crate::config::{Config, ViewMode};
use crate::storage::{SlotStore, Slots};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use diffbro_core::{Comparison, DiffEngine, Side};
use ratatui::style::Style;
use tui_textarea::TextArea;

const LEFT_PLACEHOLDER: &str = "Paste or type your original text here...";
const RIGHT_PLACEHOLDER: &str = "Paste or type your modified text here...";

/// Last comparison, keyed by the texts it was computed from
struct CachedComparison {
    text1: String,
    text2: String,
    outcome: Result<Comparison, String>,
}

pub struct App {
    pub left: TextArea<'static>,
    pub right: TextArea<'static>,
    pub focus: Side,
    pub view_mode: ViewMode,
    pub show_char_diff: bool,
    /// First visible row of the diff view
    pub scroll_offset: usize,
    pub horizontal_scroll: usize,
    /// Rows that fit in the diff view, updated on render
    pub page_height: usize,
    pub tab_width: usize,
    pub should_quit: bool,
    engine: DiffEngine,
    store: Option<SlotStore>,
    cache: Option<CachedComparison>,
}

fn make_textarea(text: &str, placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(text.split('\n').map(String::from).collect());
    textarea.set_placeholder_text(placeholder);
    textarea.set_cursor_line_style(Style::default());
    textarea
}

/// Terminals deliver pasted newlines as carriage returns
fn normalize_paste(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

impl App {
    pub fn new(config: &Config, slots: Slots, store: Option<SlotStore>) -> Self {
        Self {
            left: make_textarea(&slots.text1, LEFT_PLACEHOLDER),
            right: make_textarea(&slots.text2, RIGHT_PLACEHOLDER),
            focus: Side::Left,
            view_mode: config.view,
            show_char_diff: config.char_diff,
            scroll_offset: 0,
            horizontal_scroll: 0,
            page_height: 0,
            tab_width: config.tab_width,
            should_quit: false,
            engine: DiffEngine::new().with_max_input_bytes(config.input_limit()),
            store,
            cache: None,
        }
    }

    pub fn text(&self, side: Side) -> String {
        match side {
            Side::Left => self.left.lines().join("\n"),
            Side::Right => self.right.lines().join("\n"),
        }
    }

    pub fn set_text(&mut self, side: Side, text: &str) {
        match side {
            Side::Left => self.left = make_textarea(text, LEFT_PLACEHOLDER),
            Side::Right => self.right = make_textarea(text, RIGHT_PLACEHOLDER),
        }
    }

    pub fn slots(&self) -> Slots {
        Slots {
            text1: self.text(Side::Left),
            text2: self.text(Side::Right),
        }
    }

    pub fn both_empty(&self) -> bool {
        self.text(Side::Left).is_empty() && self.text(Side::Right).is_empty()
    }

    /// (line count, char count) for a pane
    pub fn counts(&self, side: Side) -> (usize, usize) {
        let text = self.text(side);
        (text.split('\n').count(), text.chars().count())
    }

    fn focused_mut(&mut self) -> &mut TextArea<'static> {
        match self.focus {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            store.save_or_log(&self.slots());
        }
    }

    /// The comparison of the current texts, recomputed only when they change
    pub fn comparison(&mut self) -> Result<&Comparison, &str> {
        let text1 = self.text(Side::Left);
        let text2 = self.text(Side::Right);
        let stale = match &self.cache {
            Some(cached) => cached.text1 != text1 || cached.text2 != text2,
            None => true,
        };

        if stale {
            let outcome = self
                .engine
                .compare(&text1, &text2)
                .map_err(|err| err.to_string());
            self.cache = Some(CachedComparison {
                text1,
                text2,
                outcome,
            });
        }

        match &self.cache {
            Some(cached) => cached.outcome.as_ref().map_err(String::as_str),
            None => Err("no comparison"),
        }
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
        self.scroll_offset = 0;
        self.horizontal_scroll = 0;
    }

    /// Only meaningful while the diff view is showing
    pub fn toggle_char_diff(&mut self) {
        if self.view_mode == ViewMode::Diff {
            self.show_char_diff = !self.show_char_diff;
        }
    }

    pub fn swap(&mut self) {
        let text1 = self.text(Side::Left);
        let text2 = self.text(Side::Right);
        self.set_text(Side::Left, &text2);
        self.set_text(Side::Right, &text1);
        tracing::debug!("swapped texts");
        self.persist();
    }

    pub fn clear_all(&mut self) {
        self.set_text(Side::Left, "");
        self.set_text(Side::Right, "");
        self.scroll_offset = 0;
        self.horizontal_scroll = 0;
        self.persist();
    }

    pub fn clear_focused(&mut self) {
        self.set_text(self.focus, "");
        self.persist();
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.opposite();
    }

    /// A paste replaces the whole focused pane
    pub fn handle_paste(&mut self, text: &str) {
        if self.view_mode != ViewMode::Split {
            return;
        }
        self.set_text(self.focus, &normalize_paste(text));
        self.persist();
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }

    pub fn scroll_horizontal_by(&mut self, delta: isize) {
        self.horizontal_scroll = self.horizontal_scroll.saturating_add_signed(delta);
    }

    /// Keep the vertical offset inside the content
    pub fn clamp_scroll(&mut self, total_rows: usize, visible_rows: usize) {
        let max = total_rows.saturating_sub(visible_rows);
        self.scroll_offset = self.scroll_offset.min(max);
    }

    pub fn clamp_horizontal_scroll(&mut self, max_line_width: usize, visible_width: usize) {
        let max = max_line_width.saturating_sub(visible_width);
        self.horizontal_scroll = self.horizontal_scroll.min(max);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(2) => return self.toggle_view(),
            KeyCode::F(3) => return self.toggle_char_diff(),
            KeyCode::F(4) => return self.swap(),
            KeyCode::F(5) => return self.clear_all(),
            _ => {}
        }

        match self.view_mode {
            ViewMode::Split => match key.code {
                KeyCode::Tab => self.switch_focus(),
                KeyCode::F(6) => self.clear_focused(),
                _ => {
                    if self.focused_mut().input(key) {
                        self.persist();
                    }
                }
            },
            ViewMode::Diff => {
                let page = self.page_height.max(1) as isize;
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                    KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
                    KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
                    KeyCode::PageUp => self.scroll_by(-page),
                    KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page),
                    KeyCode::Home | KeyCode::Char('g') => self.scroll_offset = 0,
                    KeyCode::End | KeyCode::Char('G') => self.scroll_offset = usize::MAX,
                    KeyCode::Left | KeyCode::Char('h') => self.scroll_horizontal_by(-4),
                    KeyCode::Right | KeyCode::Char('l') => self.scroll_horizontal_by(4),
                    KeyCode::Char('c') => self.toggle_char_diff(),
                    _ => {}
                }
            }
        }
    }
}
