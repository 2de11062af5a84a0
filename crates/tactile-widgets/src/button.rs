//! Pressable button.
//!
//! ```rust,ignore
//! let save = Button::new("Save").with_variant(ButtonVariant::Soft).with_leading_icon("✓");
//! ```

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tactile_core::{Command, Component};

use crate::layout::display_width;
use crate::theme::{ButtonVariant, Size, State, Theme};

/// Messages for [`Button`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press to handle.
    KeyPress(KeyEvent),
    /// The button was clicked.
    Click,
    /// The button was activated.
    Pressed,
}

/// A labelled button with optional icons.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: Size,
    leading_icon: Option<String>,
    trailing_icon: Option<String>,
    full_width: bool,
    disabled: bool,
    focus: bool,
    theme: Theme,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: Size::default(),
            leading_icon: None,
            trailing_icon: None,
            full_width: false,
            disabled: false,
            focus: false,
            theme: Theme::default(),
        }
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
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

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn focus(&mut self) {
        if !self.disabled {
            self.focus = true;
        }
    }

    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Columns the button takes when not full width.
    pub fn width(&self) -> u16 {
        let metrics = self.size.metrics();
        let icons = [&self.leading_icon, &self.trailing_icon]
            .into_iter()
            .flatten()
            .map(|icon| display_width(icon) + 1)
            .sum::<u16>();
        let border = if metrics.bordered { 2 } else { 0 };
        display_width(&self.label) + icons + 2 * metrics.padding_x + border
    }

    /// Whether (`column`, `row`) falls on the button when drawn into `area`.
    pub fn hit(&self, area: Rect, column: u16, row: u16) -> bool {
        self.rect(area).contains((column, row).into())
    }

    fn rect(&self, area: Rect) -> Rect {
        let width = if self.full_width {
            area.width
        } else {
            self.width().min(area.width)
        };
        Rect::new(area.x, area.y, width, self.size.rows().min(area.height))
    }

    fn press(&self) -> Command<Message> {
        if self.disabled {
            Command::none()
        } else {
            Command::message(Message::Pressed)
        }
    }

    fn content(&self) -> Line<'static> {
        let mut spans = Vec::new();
        if let Some(ref icon) = self.leading_icon {
            spans.push(Span::raw(format!("{icon} ")));
        }
        spans.push(Span::raw(self.label.clone()));
        if let Some(ref icon) = self.trailing_icon {
            spans.push(Span::raw(format!(" {icon}")));
        }
        Line::from(spans)
    }
}

impl Component for Button {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.press(),
                _ => Command::none(),
            },
            Message::KeyPress(_) => Command::none(),
            Message::Click => self.press(),
            Message::Pressed => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let rect = self.rect(area);

        let state = State {
            focused: self.focus,
            disabled: self.disabled,
            invalid: false,
        };
        let surface = self.theme.button(self.variant, self.size, state);
        let block = surface
            .block()
            .unwrap_or_else(|| Block::default().style(surface.fill));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let content = Paragraph::new(self.content())
            .style(surface.fill)
            .alignment(Alignment::Center);
        frame.render_widget(content, inner);
    }

    fn focused(&self) -> bool {
        self.focus
    }

    fn height(&self) -> u16 {
        self.size.rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Palette, Role};
    use crossterm::event::KeyModifiers;
    use ratatui::style::Modifier;
    use tactile_core::testing::{render_component, render_component_buffer};

    fn key(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_and_space_press_when_focused() {
        let mut button = Button::new("Go");
        assert!(button.update(key(KeyCode::Enter)).is_none());
        button.focus();
        assert_eq!(button.update(key(KeyCode::Enter)).into_message(), Some(Message::Pressed));
        assert_eq!(
            button.update(key(KeyCode::Char(' '))).into_message(),
            Some(Message::Pressed)
        );
        assert!(button.update(key(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn click_presses() {
        let mut button = Button::new("Go");
        assert_eq!(button.update(Message::Click).into_message(), Some(Message::Pressed));
    }

    #[test]
    fn disabled_never_presses() {
        let mut button = Button::new("Go").disabled(true);
        button.focus();
        assert!(!button.focused());
        assert!(button.update(Message::Click).is_none());
    }

    #[test]
    fn renders_label_in_a_box() {
        let out = render_component(&Button::new("Save"), 20, 3);
        let rows: Vec<&str> = out.lines().collect();
        assert!(rows[0].starts_with('╭'));
        assert!(rows[1].contains("Save"));
        assert_eq!(Button::new("Save").width(), 8);
    }

    #[test]
    fn small_button_is_one_row() {
        let button = Button::new("Save").with_size(Size::Sm);
        assert_eq!(button.height(), 1);
        assert_eq!(button.width(), 6);
        assert!(render_component(&button, 20, 1).starts_with(" Save "));
    }

    #[test]
    fn icons_surround_label() {
        let button = Button::new("Next")
            .with_leading_icon("←")
            .with_trailing_icon("→");
        let out = render_component(&button, 30, 3);
        assert!(out.lines().nth(1).unwrap().contains("← Next →"));
    }

    #[test]
    fn hit_covers_the_drawn_box_only() {
        let area = Rect::new(0, 0, 30, 3);
        let button = Button::new("Go");
        assert!(button.hit(area, 0, 0));
        assert!(button.hit(area, button.width() - 1, 2));
        assert!(!button.hit(area, button.width(), 1));
        assert!(Button::new("Go").full_width(true).hit(area, 29, 1));
    }

    #[test]
    fn full_width_spans_area() {
        let out = render_component(&Button::new("Wide").full_width(true), 30, 3);
        assert!(out.lines().next().unwrap().ends_with('╮'));
    }

    #[test]
    fn variant_sets_colors() {
        let primary = render_component_buffer(&Button::new("A"), 10, 3);
        assert_eq!(primary[(2, 1)].bg, Palette::TRUECOLOR.color(Role::Primary));
        let soft = render_component_buffer(&Button::new("A").with_variant(ButtonVariant::Soft), 10, 3);
        assert_eq!(soft[(2, 1)].fg, Palette::TRUECOLOR.color(Role::Primary));
    }

    #[test]
    fn disabled_is_dimmed() {
        let buf = render_component_buffer(&Button::new("A").disabled(true), 10, 3);
        assert!(buf[(2, 1)].modifier.contains(Modifier::DIM));
    }
}
