//! Labelled single-line text input.
//!
//! ```rust,ignore
//! let email = Input::new()
//!     .with_label("Email")
//!     .with_placeholder("you@example.com")
//!     .with_description("We never share it")
//!     .required(true);
//! ```
//!
//! Every edit emits [`Message::Changed`]; Enter emits [`Message::Submit`].

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tactile_core::{Command, Component};

use crate::edit::{edit_from_key, motion_from_key, Edit, LineBuffer};
use crate::field::{field_builders, render_adornment, FieldProps};
use crate::layout::{field_height, layout_field, FieldSpec};
use crate::theme::Theme;

/// Messages for [`Input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press to handle.
    KeyPress(KeyEvent),
    /// Pasted text.
    Paste(String),
    /// Request focus.
    Focus,
    /// Request blur.
    Blur,
    /// The text changed.
    Changed(String),
    /// Enter was pressed.
    Submit(String),
    /// Focus was gained.
    Focused,
    /// Focus was lost.
    Blurred,
}

/// A text field with optional label, description, error and icons.
#[derive(Debug, Clone)]
pub struct Input {
    pub(crate) field: FieldProps,
    buffer: LineBuffer,
    placeholder: Option<String>,
    leading_icon: Option<String>,
    trailing_icon: Option<String>,
    focus: bool,
    theme: Theme,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            field: FieldProps::new("input"),
            buffer: LineBuffer::new(),
            placeholder: None,
            leading_icon: None,
            trailing_icon: None,
            focus: false,
            theme: Theme::default(),
        }
    }

    field_builders!();

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.buffer.set_text(value);
        self
    }

    pub fn with_leading_icon(mut self, icon: impl Into<String>) -> Self {
        self.leading_icon = Some(icon.into());
        self
    }

    pub fn with_trailing_icon(mut self, icon: impl Into<String>) -> Self {
        self.trailing_icon = Some(icon.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn value(&self) -> String {
        self.buffer.text()
    }

    pub fn set_value(&mut self, value: &str) {
        self.buffer.set_text(value);
    }

    pub fn focus(&mut self) {
        if !self.field.disabled {
            self.focus = true;
        }
    }

    pub fn blur(&mut self) {
        self.focus = false;
    }

    fn spec(&self) -> FieldSpec<'_> {
        self.field.spec(
            self.leading_icon.as_deref(),
            self.trailing_icon.as_deref(),
            false,
            false,
        )
    }

    fn apply(&mut self, edit: Edit) -> Command<Message> {
        if self.buffer.apply(&edit) {
            Command::message(Message::Changed(self.value()))
        } else {
            Command::none()
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        if key.code == KeyCode::Enter {
            return Command::message(Message::Submit(self.value()));
        }
        if let Some(motion) = motion_from_key(&key) {
            self.buffer.move_cursor(motion);
            return Command::none();
        }
        match edit_from_key(&key) {
            Some(edit) => self.apply(edit),
            None => Command::none(),
        }
    }
}

impl Component for Input {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Focus => {
                if self.field.disabled || self.focus {
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
            Message::KeyPress(_) | Message::Paste(_) if !self.focus || self.field.disabled => {
                Command::none()
            }
            Message::KeyPress(key) => self.handle_key(key),
            Message::Paste(text) => self.apply(Edit::InsertStr(text)),
            Message::Changed(_) | Message::Submit(_) | Message::Focused | Message::Blurred => {
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let spec = self.spec();
        let layout = layout_field(&spec, area);
        let text_style = self.field.render_chrome(frame, &layout, &self.theme, self.focus);

        let adornment = text_style.patch(self.theme.adornment());
        render_adornment(frame, layout.leading, spec.leading, adornment);
        render_adornment(frame, layout.trailing, spec.trailing, adornment);

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
