//! Interactive browser over [`STORIES`].
//!
//! The left column lists every story; the stage shows the selected
//! [`Preview`] and the panel under it shows the most recent actions.

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use tactile_core::{Command, Component, Model, TerminalEvent};
use tactile_widgets::theme::Role;
use tactile_widgets::Theme;

use crate::stories::{self, Preview, STORIES};

/// Recent actions kept on screen.
const ACTION_ROWS: usize = 6;
const SIDEBAR_WIDTH: u16 = 36;

pub struct Catalog {
    selected: usize,
    preview: Preview,
    theme: Theme,
    /// Where the preview was last drawn; mouse clicks are resolved against it.
    stage: Cell<Rect>,
}

#[derive(Debug)]
pub enum Msg {
    Preview(stories::Message),
    NextStory,
    PrevStory,
    Quit,
}

impl Catalog {
    /// Index into [`STORIES`] of the story on stage.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.preview = STORIES[index].build().with_theme(self.theme);
        tracing::debug!(story = %STORIES[index].title(), "story selected");
    }
}

impl Model for Catalog {
    type Message = Msg;
    type Flags = Theme;

    fn init(theme: Theme) -> (Self, Command<Msg>) {
        let catalog = Catalog {
            selected: 0,
            preview: STORIES[0].build().with_theme(theme),
            theme,
            stage: Cell::new(Rect::default()),
        };
        (catalog, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        let count = STORIES.len();
        match msg {
            Msg::Preview(m) => return self.preview.update(m).map(Msg::Preview),
            Msg::NextStory => self.select((self.selected + 1) % count),
            Msg::PrevStory => self.select((self.selected + count - 1) % count),
            Msg::Quit => return Command::quit(),
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame) {
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
                .areas(frame.area());
        let [stage, actions, help] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(ACTION_ROWS as u16 + 2),
            Constraint::Length(1),
        ])
        .areas(main);

        let items: Vec<ListItem> = STORIES.iter().map(|story| ListItem::new(story.title())).collect();
        let accent = Style::default().fg(self.theme.palette.color(Role::Primary));
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Stories "))
            .highlight_style(accent.add_modifier(Modifier::BOLD))
            .highlight_symbol("› ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, sidebar, &mut state);

        let stage_block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", STORIES[self.selected].title()));
        let inner = stage_block.inner(stage);
        frame.render_widget(stage_block, stage);
        self.stage.set(inner);
        self.preview.view(frame, inner);

        let recent = self.preview.actions();
        let recent: Vec<Line> = recent[recent.len().saturating_sub(ACTION_ROWS)..]
            .iter()
            .map(|action| Line::raw(action.as_str()))
            .collect();
        frame.render_widget(
            Paragraph::new(recent).block(Block::default().borders(Borders::ALL).title(" Actions ")),
            actions,
        );

        let key = accent;
        let hints = Line::from(vec![
            Span::styled("PgUp/PgDn", key),
            Span::raw(" story  "),
            Span::styled("Tab", key),
            Span::raw(" focus  "),
            Span::styled("↑/↓ wheel", key),
            Span::raw(" step  "),
            Span::styled("Esc", key),
            Span::raw(" quit"),
        ]);
        frame.render_widget(Paragraph::new(hints), help);
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        if let Some(wheel) = event.wheel() {
            return Some(Msg::Preview(stories::Message::Wheel(wheel)));
        }
        match event {
            TerminalEvent::Paste(text) => {
                return Some(Msg::Preview(stories::Message::Paste(text)));
            }
            TerminalEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                return Some(Msg::Preview(stories::Message::Click {
                    area: self.stage.get(),
                    column: mouse.column,
                    row: mouse.row,
                }));
            }
            _ => {}
        }
        let key = event.key_press()?;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Some(Msg::Quit),
            KeyCode::Char('c') if ctrl => Some(Msg::Quit),
            KeyCode::PageDown => Some(Msg::NextStory),
            KeyCode::Char('n') if ctrl => Some(Msg::NextStory),
            KeyCode::PageUp => Some(Msg::PrevStory),
            KeyCode::Char('p') if ctrl => Some(Msg::PrevStory),
            _ => Some(Msg::Preview(stories::Message::Key(key))),
        }
    }
}
