//! Numeric input with formatting, admission and stepping.
//!
//! The field keeps the literal display text.  Each edit is previewed and
//! passed through [`admit`](crate::numeric::admit); admitted edits replace the
//! text and emit [`Message::Changed`] with the parsed value.  Arrow keys, the
//! `▲▼` controls and the mouse wheel (while focused) step the value through
//! [`step`](crate::numeric::step).
//!
//! ```rust,ignore
//! let price = InputNumber::new()
//!     .with_label("Price")
//!     .with_format(NumberFormat::new().with_precision(2).with_min(0.0))
//!     .with_prefix("$")
//!     .with_value(19.99);
//! ```

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tactile_core::{Command, Component, Wheel};
use tracing::trace;

use crate::edit::{edit_from_key, motion_from_key, Edit, LineBuffer};
use crate::field::{field_builders, render_adornment, FieldProps};
use crate::layout::{field_height, layout_field, FieldSpec, CONTROL_WIDTH};
use crate::numeric::{Direction, NumberFormat};
use crate::theme::Theme;

/// Where the step controls sit inside the box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlsPosition {
    #[default]
    Right,
    Left,
    Both,
}

/// Messages for [`InputNumber`].
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A key press to handle.
    KeyPress(KeyEvent),
    /// Pasted text.
    Paste(String),
    /// A wheel notch over the field.  Ignored unless focused.
    Wheel(Wheel),
    /// A control was clicked.
    Step(Direction),
    /// Request focus.
    Focus,
    /// Request blur.
    Blur,
    /// The text changed; carries the parsed value.
    Changed(Option<f64>),
    /// Focus was gained.
    Focused,
    /// Focus was lost.
    Blurred,
}

/// A numeric text field.
#[derive(Debug, Clone)]
pub struct InputNumber {
    pub(crate) field: FieldProps,
    buffer: LineBuffer,
    format: NumberFormat,
    placeholder: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
    show_controls: bool,
    controls_position: ControlsPosition,
    focus: bool,
    theme: Theme,
}

impl Default for InputNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl InputNumber {
    pub fn new() -> Self {
        Self {
            field: FieldProps::new("input"),
            buffer: LineBuffer::new(),
            format: NumberFormat::default(),
            placeholder: None,
            prefix: None,
            suffix: None,
            show_controls: true,
            controls_position: ControlsPosition::default(),
            focus: false,
            theme: Theme::default(),
        }
    }

    field_builders!();

    /// Set the format, re-formatting any value already present.
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        let value = self.value();
        self.format = format;
        if let Some(value) = value {
            self.buffer.set_text(&self.format.format(value));
        }
        self
    }

    /// Initial value, shown as `format(value)`.
    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(Some(value));
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Text drawn before the number, e.g. a currency symbol.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Text drawn after the number, e.g. a unit.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn show_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    pub fn with_controls_position(mut self, position: ControlsPosition) -> Self {
        self.controls_position = position;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// The display text exactly as shown.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// The parsed display text.
    pub fn value(&self) -> Option<f64> {
        self.format.parse(&self.buffer.text())
    }

    /// Replace the text with `format(value)`, or clear it.
    pub fn set_value(&mut self, value: Option<f64>) {
        match value {
            Some(value) => self.buffer.set_text(&self.format.format(value)),
            None => self.buffer.clear(),
        }
    }

    pub fn focus(&mut self) {
        if !self.field.disabled {
            self.focus = true;
        }
    }

    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Which control, if any, sits at (`column`, `row`) when the field is
    /// drawn into `area`.
    pub fn control_at(&self, area: Rect, column: u16, row: u16) -> Option<Direction> {
        let layout = layout_field(&self.spec(), area);
        [layout.controls_left, layout.controls_right]
            .into_iter()
            .flatten()
            .filter(|rect| rect.width >= CONTROL_WIDTH && row >= rect.y && row < rect.bottom())
            .find_map(|rect| match column.checked_sub(rect.x) {
                Some(0) => Some(Direction::Up),
                Some(1) => Some(Direction::Down),
                _ => None,
            })
    }

    fn spec(&self) -> FieldSpec<'_> {
        let (left, right) = match (self.show_controls, self.controls_position) {
            (false, _) => (false, false),
            (true, ControlsPosition::Right) => (false, true),
            (true, ControlsPosition::Left) => (true, false),
            (true, ControlsPosition::Both) => (true, true),
        };
        self.field
            .spec(self.prefix.as_deref(), self.suffix.as_deref(), left, right)
    }

    fn edit(&mut self, edit: Edit) -> Command<Message> {
        let Some(candidate) = self.buffer.preview(&edit) else {
            return Command::none();
        };
        let current = self.buffer.text();
        let text = candidate.text();
        if !self.format.admit(&current, &text) {
            return Command::none();
        }
        self.buffer = candidate;
        Command::message(Message::Changed(self.format.parse(&text)))
    }

    fn step(&mut self, direction: Direction) -> Command<Message> {
        let current = self.buffer.text();
        let Some(outcome) = self.format.step(&current, direction) else {
            trace!(%current, "step produced no value; text kept");
            return Command::none();
        };
        trace!(text = %outcome.text, value = outcome.value, "stepped");
        self.buffer.set_text(&outcome.text);
        Command::message(Message::Changed(Some(outcome.value)))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match key.code {
            KeyCode::Up => return self.step(Direction::Up),
            KeyCode::Down => return self.step(Direction::Down),
            _ => {}
        }
        if let Some(motion) = motion_from_key(&key) {
            self.buffer.move_cursor(motion);
            return Command::none();
        }
        match edit_from_key(&key) {
            Some(edit) => self.edit(edit),
            None => Command::none(),
        }
    }
}

impl Component for InputNumber {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if self.field.disabled {
            return Command::none();
        }
        match msg {
            Message::Focus => {
                if self.focus {
                    return Command::none();
                }
                self.focus = true;
                Command::message(Message::Focused)
            }
            Message::Blur => {
                if !self.focus {
                    return Command::none();
                }
                self.focus = false;
                Command::message(Message::Blurred)
            }
            Message::Step(direction) => self.step(direction),
            Message::KeyPress(_) | Message::Paste(_) | Message::Wheel(_) if !self.focus => {
                Command::none()
            }
            Message::KeyPress(key) => self.handle_key(key),
            Message::Paste(text) => self.edit(Edit::InsertStr(text)),
            Message::Wheel(Wheel::Up) => self.step(Direction::Up),
            Message::Wheel(Wheel::Down) => self.step(Direction::Down),
            Message::Changed(_) | Message::Focused | Message::Blurred => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let spec = self.spec();
        let layout = layout_field(&spec, area);
        let text_style = self.field.render_chrome(frame, &layout, &self.theme, self.focus);

        let adornment = text_style.patch(self.theme.adornment());
        render_adornment(frame, layout.leading, spec.leading, adornment);
        render_adornment(frame, layout.trailing, spec.trailing, adornment);

        let control = text_style.patch(self.theme.control(self.field.disabled));
        for rect in [layout.controls_left, layout.controls_right].into_iter().flatten() {
            let arrows = Line::from(vec![Span::styled("▲", control), Span::styled("▼", control)]);
            frame.render_widget(Paragraph::new(arrows), rect);
        }

        let body = layout.body;
        if self.buffer.is_empty() && !self.focus {
            if let Some(ref placeholder) = self.placeholder {
                let style = text_style.patch(self.theme.placeholder());
                frame.render_widget(Paragraph::new(Span::styled(placeholder.clone(), style)), body);
            }
            return;
        }
        let line = self.buffer.line(
            usize::from(body.width),
            self.focus,
            text_style,
            text_style.patch(self.theme.cursor()),
        );
        frame.render_widget(Paragraph::new(line), body);
    }

    fn focused(&self) -> bool {
        self.focus
    }

    fn height(&self) -> u16 {
        field_height(&self.spec())
    }
}
