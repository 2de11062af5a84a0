//! Single-line edit buffer shared by [`Input`](crate::input::Input) and
//! [`InputNumber`](crate::input_number::InputNumber).
//!
//! Edits are values ([`Edit`]) so a widget can [`preview`](LineBuffer::preview)
//! the candidate text, decide whether to admit it, and only then commit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// A text mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    InsertStr(String),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    DeleteWordBackward,
    ClearToStart,
    ClearToEnd,
}

/// A cursor movement that leaves the text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    WordLeft,
    WordRight,
    Home,
    End,
}

/// Char-indexed text with a cursor in `0..=len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Set the cursor, clamped to the text length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.chars.len());
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The buffer as it would be after `edit`, or `None` when the edit
    /// changes nothing.
    pub fn preview(&self, edit: &Edit) -> Option<LineBuffer> {
        let mut next = self.clone();
        next.apply(edit).then_some(next)
    }

    /// Apply `edit`; returns whether the text changed.
    pub fn apply(&mut self, edit: &Edit) -> bool {
        match edit {
            Edit::Insert(c) => {
                self.chars.insert(self.cursor, *c);
                self.cursor += 1;
                true
            }
            Edit::InsertStr(s) => {
                let before = self.chars.len();
                for c in s.chars().filter(|c| !c.is_control()) {
                    self.chars.insert(self.cursor, c);
                    self.cursor += 1;
                }
                self.chars.len() != before
            }
            Edit::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                self.chars.remove(self.cursor);
                true
            }
            Edit::Delete => {
                if self.cursor >= self.chars.len() {
                    return false;
                }
                self.chars.remove(self.cursor);
                true
            }
            Edit::DeleteWordBackward => {
                let start = self.word_start();
                if start == self.cursor {
                    return false;
                }
                self.chars.drain(start..self.cursor);
                self.cursor = start;
                true
            }
            Edit::ClearToStart => {
                if self.cursor == 0 {
                    return false;
                }
                self.chars.drain(..self.cursor);
                self.cursor = 0;
                true
            }
            Edit::ClearToEnd => {
                if self.cursor >= self.chars.len() {
                    return false;
                }
                self.chars.truncate(self.cursor);
                true
            }
        }
    }

    pub fn move_cursor(&mut self, motion: Motion) {
        self.cursor = match motion {
            Motion::Left => self.cursor.saturating_sub(1),
            Motion::Right => (self.cursor + 1).min(self.chars.len()),
            Motion::Home => 0,
            Motion::End => self.chars.len(),
            Motion::WordLeft => self.word_start(),
            Motion::WordRight => {
                let len = self.chars.len();
                let mut pos = self.cursor;
                while pos < len && self.chars[pos].is_alphanumeric() {
                    pos += 1;
                }
                while pos < len && !self.chars[pos].is_alphanumeric() {
                    pos += 1;
                }
                pos
            }
        };
    }

    fn word_start(&self) -> usize {
        let mut pos = self.cursor;
        while pos > 0 && !self.chars[pos - 1].is_alphanumeric() {
            pos -= 1;
        }
        while pos > 0 && self.chars[pos - 1].is_alphanumeric() {
            pos -= 1;
        }
        pos
    }

    /// Render the visible window of the text into `width` columns.
    ///
    /// When `focused` the cursor cell is drawn with `cursor` and the window
    /// scrolls so the cursor stays visible.
    pub fn line(&self, width: usize, focused: bool, text: Style, cursor: Style) -> Line<'static> {
        if width == 0 {
            return Line::default();
        }
        let offset = if focused && self.cursor >= width {
            self.cursor + 1 - width
        } else {
            0
        };
        let end = (offset + width).min(self.chars.len());
        let visible = &self.chars[offset..end];

        if !focused {
            return Line::from(Span::styled(visible.iter().collect::<String>(), text));
        }

        let at = self.cursor - offset;
        let mut spans = Vec::with_capacity(3);
        if at > 0 {
            spans.push(Span::styled(visible[..at].iter().collect::<String>(), text));
        }
        match visible.get(at) {
            Some(c) => {
                spans.push(Span::styled(c.to_string(), cursor));
                if at + 1 < visible.len() {
                    spans.push(Span::styled(visible[at + 1..].iter().collect::<String>(), text));
                }
            }
            None => spans.push(Span::styled(" ", cursor)),
        }
        Line::from(spans)
    }
}

impl From<&str> for LineBuffer {
    fn from(text: &str) -> Self {
        let mut buffer = LineBuffer::new();
        buffer.set_text(text);
        buffer
    }
}

/// Map a key press to a text edit.
pub fn edit_from_key(key: &KeyEvent) -> Option<Edit> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('w'), m) if m.contains(KeyModifiers::CONTROL) => {
            Some(Edit::DeleteWordBackward)
        }
        (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => Some(Edit::ClearToStart),
        (KeyCode::Char('k'), m) if m.contains(KeyModifiers::CONTROL) => Some(Edit::ClearToEnd),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(Edit::Insert(c)),
        (KeyCode::Backspace, m) if m.contains(KeyModifiers::ALT) => Some(Edit::DeleteWordBackward),
        (KeyCode::Backspace, _) => Some(Edit::Backspace),
        (KeyCode::Delete, _) => Some(Edit::Delete),
        _ => None,
    }
}

/// Map a key press to a cursor motion.
pub fn motion_from_key(key: &KeyEvent) -> Option<Motion> {
    let word = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Left if word => Some(Motion::WordLeft),
        KeyCode::Right if word => Some(Motion::WordRight),
        KeyCode::Left => Some(Motion::Left),
        KeyCode::Right => Some(Motion::Right),
        KeyCode::Home => Some(Motion::Home),
        KeyCode::End => Some(Motion::End),
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Motion::Home),
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Motion::End),
        _ => None,
    }
}
