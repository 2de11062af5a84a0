//! On/off toggle with optional label, description and error.
//!
//! ```text
//! ●    Enable notifications
//!      Get notified about new messages
//! ```

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tactile_core::{Command, Component, ElementId};

use crate::theme::{Size, State, Theme};

const THUMB: &str = "●";

/// Messages for [`Switch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press to handle.
    KeyPress(KeyEvent),
    /// The switch was clicked.
    Click,
    /// The switch flipped to the carried state.
    Toggled(bool),
}

/// Accessibility facts for a [`Switch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchAccessibility {
    pub id: ElementId,
    pub checked: bool,
    pub disabled: bool,
    pub invalid: bool,
    pub described_by: Vec<ElementId>,
}

/// A toggle switch.
#[derive(Debug, Clone)]
pub struct Switch {
    id: ElementId,
    label: Option<String>,
    description: Option<String>,
    error: Option<String>,
    size: Size,
    checked: bool,
    disabled: bool,
    focus: bool,
    theme: Theme,
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

impl Switch {
    pub fn new() -> Self {
        Self {
            id: ElementId::next("switch"),
            label: None,
            description: None,
            error: None,
            size: Size::default(),
            checked: false,
            disabled: false,
            focus: false,
            theme: Theme::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
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

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
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

    pub fn accessibility(&self) -> SwitchAccessibility {
        let mut described_by = Vec::new();
        if self.description.is_some() {
            described_by.push(self.id.child("description"));
        }
        if self.error.is_some() {
            described_by.push(self.id.child("error"));
        }
        SwitchAccessibility {
            id: self.id.clone(),
            checked: self.checked,
            disabled: self.disabled,
            invalid: self.error.is_some(),
            described_by,
        }
    }

    fn toggle(&mut self) -> Command<Message> {
        if self.disabled {
            return Command::none();
        }
        self.checked = !self.checked;
        Command::message(Message::Toggled(self.checked))
    }

    fn track(&self) -> Line<'static> {
        let width = usize::from(self.size.metrics().switch_track);
        let state = State {
            focused: self.focus,
            disabled: self.disabled,
            invalid: self.error.is_some(),
        };
        let style = self.theme.switch_track(self.checked, state);
        let thumb_at = if self.checked { width.saturating_sub(1) } else { 0 };
        let cells = (0..width)
            .map(|i| Span::styled(if i == thumb_at { THUMB } else { " " }, style))
            .collect::<Vec<_>>();
        Line::from(cells)
    }

    fn text_rows(&self) -> Vec<Line<'static>> {
        let mut rows = Vec::new();
        if let Some(ref label) = self.label {
            let mut style = self.theme.label(self.disabled);
            if self.focus {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            rows.push(Line::from(Span::styled(label.clone(), style)));
        }
        if let Some(ref description) = self.description {
            rows.push(Line::from(Span::styled(
                description.clone(),
                self.theme.description(self.disabled),
            )));
        }
        if let Some(ref error) = self.error {
            rows.push(Line::from(Span::styled(error.clone(), self.theme.error())));
        }
        rows
    }
}

impl Component for Switch {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => self.toggle(),
                _ => Command::none(),
            },
            Message::KeyPress(_) => Command::none(),
            Message::Click => self.toggle(),
            Message::Toggled(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let track_width = self.size.metrics().switch_track.min(area.width);
        let track = Rect::new(area.x, area.y, track_width, area.height.min(1));
        frame.render_widget(Paragraph::new(self.track()), track);

        let text_x = area.x.saturating_add(track_width + 1);
        let text_width = area.right().saturating_sub(text_x);
        let text = Rect::new(text_x, area.y, text_width, area.height);
        frame.render_widget(Paragraph::new(self.text_rows()), text);
    }

    fn focused(&self) -> bool {
        self.focus
    }

    fn height(&self) -> u16 {
        let rows = [self.label.is_some(), self.description.is_some(), self.error.is_some()]
            .into_iter()
            .filter(|present| *present)
            .count();
        u16::try_from(rows).unwrap_or(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tactile_core::testing::{render_component, render_component_buffer};

    fn key(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn space_toggles_when_focused() {
        let mut switch = Switch::new();
        assert!(switch.update(key(KeyCode::Char(' '))).is_none());
        switch.focus();
        assert_eq!(
            switch.update(key(KeyCode::Char(' '))).into_message(),
            Some(Message::Toggled(true))
        );
        assert_eq!(
            switch.update(key(KeyCode::Enter)).into_message(),
            Some(Message::Toggled(false))
        );
        assert!(switch.update(key(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn click_toggles_without_focus() {
        let mut switch = Switch::new().checked(true);
        assert_eq!(switch.update(Message::Click).into_message(), Some(Message::Toggled(false)));
        assert!(!switch.is_checked());
    }

    #[test]
    fn disabled_never_toggles() {
        let mut switch = Switch::new().disabled(true).checked(true);
        switch.focus();
        assert!(!switch.focused());
        assert!(switch.update(Message::Click).is_none());
        assert!(switch.is_checked());
    }

    #[test]
    fn thumb_moves_with_state() {
        let off = render_component(&Switch::new(), 10, 1);
        assert!(off.starts_with("●   "));
        let on = render_component(&Switch::new().checked(true), 10, 1);
        assert!(on.starts_with("   ●"));
    }

    #[test]
    fn track_width_follows_size() {
        let width = |size| {
            let out = render_component(&Switch::new().with_size(size).checked(true), 10, 1);
            out.find(THUMB).unwrap() + 1
        };
        assert_eq!(width(Size::Sm), 3);
        assert_eq!(width(Size::Md), 4);
        assert_eq!(width(Size::Lg), 5);
    }

    #[test]
    fn label_description_and_error_stack() {
        let switch = Switch::new()
            .with_label("Enable notifications")
            .with_description("Get notified")
            .with_error("Required");
        assert_eq!(switch.height(), 3);
        let out = render_component(&switch, 40, 3);
        let rows: Vec<&str> = out.lines().collect();
        assert!(rows[0].starts_with("●    Enable notifications"));
        assert!(rows[1].trim_start().starts_with("Get notified"));
        assert!(rows[2].trim_start().starts_with("Required"));
    }

    #[test]
    fn checked_track_uses_primary() {
        let theme = Theme::default();
        let on = render_component_buffer(&Switch::new().checked(true), 10, 1);
        let expected = theme.switch_track(true, State::default()).bg;
        assert_eq!(Some(on[(0, 0)].bg), expected);
        let off = render_component_buffer(&Switch::new(), 10, 1);
        assert_ne!(off[(0, 0)].bg, on[(0, 0)].bg);
    }

    #[test]
    fn disabled_dims_track() {
        let buf = render_component_buffer(&Switch::new().disabled(true), 10, 1);
        assert!(buf[(0, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn without_label_is_one_row() {
        let switch = Switch::new();
        assert_eq!(switch.height(), 1);
        assert!(switch.accessibility().described_by.is_empty());
    }

    #[test]
    fn accessibility_reports_state() {
        let switch = Switch::new()
            .with_id("notify")
            .checked(true)
            .with_description("help")
            .with_error("bad");
        let a11y = switch.accessibility();
        assert!(a11y.checked);
        assert!(a11y.invalid);
        assert_eq!(
            a11y.described_by,
            vec![ElementId::new("notify-description"), ElementId::new("notify-error")]
        );
    }
}
