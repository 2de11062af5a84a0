use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

/// Terminal events delivered to [`Model::on_event`](crate::Model::on_event).
///
/// Each variant wraps the corresponding [`crossterm::event::Event`] payload,
/// so key codes, modifiers and mouse positions keep the full crossterm API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event (clicks, wheel).
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// The key event, if this is a key *press* (repeats included, releases
    /// excluded).
    pub fn key_press(&self) -> Option<KeyEvent> {
        match self {
            TerminalEvent::Key(key) if key.kind != KeyEventKind::Release => Some(*key),
            _ => None,
        }
    }

    /// The wheel direction, if this is a scroll event.
    pub fn wheel(&self) -> Option<Wheel> {
        match self {
            TerminalEvent::Mouse(mouse) => Wheel::from_kind(mouse.kind),
            _ => None,
        }
    }
}

/// Direction of a pointer-wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wheel {
    /// Wheel rolled away from the user.
    Up,
    /// Wheel rolled towards the user.
    Down,
}

impl Wheel {
    /// Map a crossterm mouse event kind to a wheel direction.
    pub fn from_kind(kind: MouseEventKind) -> Option<Self> {
        match kind {
            MouseEventKind::ScrollUp => Some(Wheel::Up),
            MouseEventKind::ScrollDown => Some(Wheel::Down),
            _ => None,
        }
    }
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(k) => TerminalEvent::Key(k),
            crossterm::event::Event::Mouse(m) => TerminalEvent::Mouse(m),
            crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            crossterm::event::Event::FocusGained => TerminalEvent::FocusGained,
            crossterm::event::Event::FocusLost => TerminalEvent::FocusLost,
            crossterm::event::Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn mouse(kind: MouseEventKind) -> TerminalEvent {
        TerminalEvent::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn scroll_maps_to_wheel() {
        assert_eq!(mouse(MouseEventKind::ScrollUp).wheel(), Some(Wheel::Up));
        assert_eq!(mouse(MouseEventKind::ScrollDown).wheel(), Some(Wheel::Down));
        assert_eq!(mouse(MouseEventKind::Moved).wheel(), None);
    }

    #[test]
    fn key_release_is_not_a_press() {
        let release = TerminalEvent::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(release.key_press().is_none());

        let press = TerminalEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(press.key_press().is_some());
    }
}
