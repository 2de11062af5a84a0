//! Story catalog: named, pre-configured arrangements of each widget.
//!
//! A [`Story`] builds a [`Preview`], a focusable stack of widgets that routes
//! keys to whichever widget has focus and records every notification the
//! widgets emit (`onChange(15)`, `onClick`, ...).  The `catalog` demo browses
//! [`STORIES`] interactively; tests use the same previews headlessly.

use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tactile_core::{Command, Component, Wheel};
use tactile_widgets::button::{self, Button};
use tactile_widgets::input::{self, Input};
use tactile_widgets::input_number::{self, ControlsPosition, InputNumber};
use tactile_widgets::numeric::NumberFormat;
use tactile_widgets::switch::{self, Switch};
use tactile_widgets::{ButtonVariant, FocusRing, Size, Theme, Variant};

/// One entry in the catalog.
pub struct Story {
    /// Component the story belongs to, e.g. `"InputNumber"`.
    pub component: &'static str,
    /// Story name, e.g. `"WithPrefixSuffix"`.
    pub name: &'static str,
    build: fn() -> Preview,
}

impl Story {
    /// Construct a fresh preview for this story.
    pub fn build(&self) -> Preview {
        (self.build)()
    }

    /// Catalog path, e.g. `"Core/Button/Primary"`.
    pub fn title(&self) -> String {
        format!("Core/{}/{}", self.component, self.name)
    }
}

/// Look up a story by component and name.
pub fn find(component: &str, name: &str) -> Option<&'static Story> {
    STORIES
        .iter()
        .find(|story| story.component == component && story.name == name)
}

/// A widget placed in a [`Preview`].
#[derive(Debug, Clone)]
pub enum Widget {
    Button(Button),
    Input(Input),
    Number(InputNumber),
    Switch(Switch),
    /// A heading; never focusable.
    Note(String),
}

impl Widget {
    fn with_theme(self, theme: Theme) -> Self {
        match self {
            Widget::Button(w) => Widget::Button(w.with_theme(theme)),
            Widget::Input(w) => Widget::Input(w.with_theme(theme)),
            Widget::Number(w) => Widget::Number(w.with_theme(theme)),
            Widget::Switch(w) => Widget::Switch(w.with_theme(theme)),
            note @ Widget::Note(_) => note,
        }
    }

    fn focusable(&self) -> bool {
        match self {
            Widget::Button(w) => !w.is_disabled(),
            Widget::Input(w) => !w.is_disabled(),
            Widget::Number(w) => !w.is_disabled(),
            Widget::Switch(w) => !w.is_disabled(),
            Widget::Note(_) => false,
        }
    }

    fn height(&self) -> u16 {
        match self {
            Widget::Button(w) => w.height(),
            Widget::Input(w) => w.height(),
            Widget::Number(w) => w.height(),
            Widget::Switch(w) => w.height(),
            Widget::Note(_) => 1,
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        match self {
            Widget::Button(w) => w.view(frame, area),
            Widget::Input(w) => w.view(frame, area),
            Widget::Number(w) => w.view(frame, area),
            Widget::Switch(w) => w.view(frame, area),
            Widget::Note(text) => {
                let style = Style::default().add_modifier(Modifier::BOLD);
                frame.render_widget(Paragraph::new(text.as_str()).style(style), area);
            }
        }
    }
}

/// Messages for [`Preview`].
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A key press for the focused widget (Tab and BackTab move focus).
    Key(KeyEvent),
    /// Pasted text for the focused widget.
    Paste(String),
    /// A wheel notch for the focused widget.
    Wheel(Wheel),
    FocusNext,
    FocusPrev,
    /// A left click at (`column`, `row`) on a preview drawn into `area`.
    Click { area: Rect, column: u16, row: u16 },
    Button(usize, button::Message),
    Input(usize, input::Message),
    Number(usize, input_number::Message),
    Switch(usize, switch::Message),
}

/// Actions kept in a preview's log; older entries are dropped.
pub const ACTION_LOG_LIMIT: usize = 64;

/// A live story: widgets, focus and the action log.
#[derive(Debug, Clone)]
pub struct Preview {
    widgets: Vec<Widget>,
    focus: FocusRing,
    actions: Vec<String>,
    readout: Option<Option<f64>>,
}

impl Preview {
    /// Stack `widgets` and focus the first focusable one.
    pub fn new(widgets: Vec<Widget>) -> Self {
        let mut preview = Self {
            focus: FocusRing::new(widgets.len()),
            widgets,
            actions: Vec::new(),
            readout: None,
        };
        let widgets = &preview.widgets;
        if let Some(index) = preview.focus.focus_first(|i| widgets[i].focusable()) {
            match &mut preview.widgets[index] {
                Widget::Button(w) => w.focus(),
                Widget::Input(w) => w.focus(),
                Widget::Number(w) => w.focus(),
                Widget::Switch(w) => w.focus(),
                Widget::Note(_) => {}
            }
        }
        preview
    }

    /// Restyle every widget with `theme`.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.widgets = self.widgets.into_iter().map(|w| w.with_theme(theme)).collect();
        self
    }

    /// Show a `Current value:` line tracking numeric changes.
    pub fn with_readout(mut self) -> Self {
        self.readout = Some(None);
        self
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Index of the focused widget, if any widget can take focus.
    pub fn focused_index(&self) -> Option<usize> {
        self.focus
            .focused()
            .filter(|&i| self.widgets.get(i).is_some_and(Widget::focusable))
    }

    /// The most recent notifications (at most [`ACTION_LOG_LIMIT`]), oldest
    /// first.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn clear_actions(&mut self) {
        self.actions.clear();
    }

    /// The readout line, when enabled.
    pub fn readout(&self) -> Option<String> {
        self.readout.map(|value| match value {
            Some(value) => format!("Current value: {value}"),
            None => "Current value: none".to_string(),
        })
    }

    fn record(&mut self, action: String) -> Command<Message> {
        tracing::debug!(%action, "story action");
        self.actions.push(action);
        if self.actions.len() > ACTION_LOG_LIMIT {
            let excess = self.actions.len() - ACTION_LOG_LIMIT;
            self.actions.drain(..excess);
        }
        Command::none()
    }

    fn set_focus(&mut self, index: usize, focused: bool) -> Command<Message> {
        match self.widgets.get_mut(index) {
            Some(Widget::Input(w)) => {
                let msg = if focused { input::Message::Focus } else { input::Message::Blur };
                w.update(msg).map(move |m| Message::Input(index, m))
            }
            Some(Widget::Number(w)) => {
                let msg = if focused {
                    input_number::Message::Focus
                } else {
                    input_number::Message::Blur
                };
                w.update(msg).map(move |m| Message::Number(index, m))
            }
            Some(Widget::Button(w)) => {
                if focused { w.focus() } else { w.blur() }
                Command::none()
            }
            Some(Widget::Switch(w)) => {
                if focused { w.focus() } else { w.blur() }
                Command::none()
            }
            Some(Widget::Note(_)) | None => Command::none(),
        }
    }

    fn move_focus(&mut self, forward: bool) -> Command<Message> {
        let Some(previous) = self.focused_index() else {
            return Command::none();
        };
        let widgets = &self.widgets;
        let available = |i: usize| widgets[i].focusable();
        let next = if forward {
            self.focus.focus_next(available)
        } else {
            self.focus.focus_prev(available)
        };
        match next {
            Some(next) if next != previous => {
                let blur = self.set_focus(previous, false);
                let focus = self.set_focus(next, true);
                Command::batch([blur, focus])
            }
            _ => Command::none(),
        }
    }

    /// Row rects for each widget, then the readout row when enabled.
    fn rows(&self, area: Rect) -> Rc<[Rect]> {
        let mut constraints: Vec<Constraint> = self
            .widgets
            .iter()
            .map(|w| Constraint::Length(w.height()))
            .collect();
        if self.readout.is_some() {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Fill(1));
        Layout::vertical(constraints).spacing(1).split(area)
    }

    fn click(&mut self, area: Rect, column: u16, row: u16) -> Command<Message> {
        let rows = self.rows(area);
        let Some(index) = rows
            .iter()
            .take(self.widgets.len())
            .position(|rect| rect.contains((column, row).into()))
        else {
            return Command::none();
        };
        let rect = rows[index];
        match &mut self.widgets[index] {
            Widget::Number(w) => match w.control_at(rect, column, row) {
                Some(direction) => w
                    .update(input_number::Message::Step(direction))
                    .map(move |m| Message::Number(index, m)),
                None => Command::none(),
            },
            Widget::Button(w) if w.hit(rect, column, row) => w
                .update(button::Message::Click)
                .map(move |m| Message::Button(index, m)),
            Widget::Switch(w) => w
                .update(switch::Message::Click)
                .map(move |m| Message::Switch(index, m)),
            _ => Command::none(),
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Command<Message> {
        let Some(index) = self.focused_index() else {
            return Command::none();
        };
        match &mut self.widgets[index] {
            Widget::Button(w) => w
                .update(button::Message::KeyPress(key))
                .map(move |m| Message::Button(index, m)),
            Widget::Input(w) => w
                .update(input::Message::KeyPress(key))
                .map(move |m| Message::Input(index, m)),
            Widget::Number(w) => w
                .update(input_number::Message::KeyPress(key))
                .map(move |m| Message::Number(index, m)),
            Widget::Switch(w) => w
                .update(switch::Message::KeyPress(key))
                .map(move |m| Message::Switch(index, m)),
            Widget::Note(_) => Command::none(),
        }
    }
}

impl Component for Preview {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Key(key) => match key.code {
                KeyCode::Tab => self.move_focus(true),
                KeyCode::BackTab => self.move_focus(false),
                _ => self.route_key(key),
            },
            Message::FocusNext => self.move_focus(true),
            Message::FocusPrev => self.move_focus(false),
            Message::Click { area, column, row } => self.click(area, column, row),
            Message::Paste(text) => match self.focused_index() {
                Some(index) => match &mut self.widgets[index] {
                    Widget::Input(w) => w
                        .update(input::Message::Paste(text))
                        .map(move |m| Message::Input(index, m)),
                    Widget::Number(w) => w
                        .update(input_number::Message::Paste(text))
                        .map(move |m| Message::Number(index, m)),
                    _ => Command::none(),
                },
                None => Command::none(),
            },
            Message::Wheel(wheel) => match self.focused_index() {
                Some(index) => match &mut self.widgets[index] {
                    Widget::Number(w) => w
                        .update(input_number::Message::Wheel(wheel))
                        .map(move |m| Message::Number(index, m)),
                    _ => Command::none(),
                },
                None => Command::none(),
            },

            Message::Button(_, button::Message::Pressed) => self.record("onClick".into()),
            Message::Input(_, input::Message::Changed(text)) => {
                self.record(format!("onChange({text:?})"))
            }
            Message::Input(_, input::Message::Submit(text)) => {
                self.record(format!("onSubmit({text:?})"))
            }
            Message::Input(_, input::Message::Focused)
            | Message::Number(_, input_number::Message::Focused) => self.record("onFocus".into()),
            Message::Input(_, input::Message::Blurred)
            | Message::Number(_, input_number::Message::Blurred) => self.record("onBlur".into()),
            Message::Number(_, input_number::Message::Changed(value)) => {
                if self.readout.is_some() {
                    self.readout = Some(value);
                }
                match value {
                    Some(value) => self.record(format!("onChange({value})")),
                    None => self.record("onChange(none)".into()),
                }
            }
            Message::Switch(_, switch::Message::Toggled(checked)) => {
                self.record(format!("onChange({checked})"))
            }

            Message::Button(index, m) => match self.widgets.get_mut(index) {
                Some(Widget::Button(w)) => w.update(m).map(move |m| Message::Button(index, m)),
                _ => Command::none(),
            },
            Message::Input(index, m) => match self.widgets.get_mut(index) {
                Some(Widget::Input(w)) => w.update(m).map(move |m| Message::Input(index, m)),
                _ => Command::none(),
            },
            Message::Number(index, m) => match self.widgets.get_mut(index) {
                Some(Widget::Number(w)) => w.update(m).map(move |m| Message::Number(index, m)),
                _ => Command::none(),
            },
            Message::Switch(index, m) => match self.widgets.get_mut(index) {
                Some(Widget::Switch(w)) => w.update(m).map(move |m| Message::Switch(index, m)),
                _ => Command::none(),
            },
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let rows = self.rows(area);

        for (widget, row) in self.widgets.iter().zip(rows.iter()) {
            widget.view(frame, *row);
        }
        if let Some(text) = self.readout() {
            let row = rows[self.widgets.len()];
            let style = Style::default().add_modifier(Modifier::DIM);
            frame.render_widget(Paragraph::new(text).style(style), row);
        }
    }

    fn focused(&self) -> bool {
        self.focused_index().is_some()
    }

    fn height(&self) -> u16 {
        let widgets: u16 = self.widgets.iter().map(Widget::height).sum();
        let count = u16::try_from(self.widgets.len()).unwrap_or(u16::MAX);
        widgets + count.saturating_sub(1) + u16::from(self.readout.is_some()) * 2
    }
}

fn button(label: &str) -> Button {
    Button::new(label)
}

fn text_input(placeholder: &str) -> Input {
    Input::new().with_placeholder(placeholder)
}

fn number(placeholder: &str) -> InputNumber {
    InputNumber::new().with_placeholder(placeholder)
}

fn one(widget: Widget) -> Preview {
    Preview::new(vec![widget])
}

macro_rules! story {
    ($component:literal, $name:literal, $build:expr) => {
        Story {
            component: $component,
            name: $name,
            build: $build,
        }
    };
}

/// Every story, grouped by component.
pub static STORIES: &[Story] = &[
    // Button
    story!("Button", "Primary", || {
        one(Widget::Button(button("Click me").with_variant(ButtonVariant::Primary)))
    }),
    story!("Button", "Ghost", || {
        one(Widget::Button(button("Click me").with_variant(ButtonVariant::Ghost)))
    }),
    story!("Button", "Soft", || {
        one(Widget::Button(button("Click me").with_variant(ButtonVariant::Soft)))
    }),
    story!("Button", "Sizes", || {
        Preview::new(vec![
            Widget::Button(button("Small").with_size(Size::Sm)),
            Widget::Button(button("Medium").with_size(Size::Md)),
            Widget::Button(button("Large").with_size(Size::Lg)),
        ])
    }),
    story!("Button", "WithIcons", || {
        Preview::new(vec![
            Widget::Button(button("Back").with_leading_icon("←").with_variant(ButtonVariant::Ghost)),
            Widget::Button(button("Next").with_trailing_icon("→")),
        ])
    }),
    story!("Button", "Disabled", || {
        one(Widget::Button(button("Click me").disabled(true)))
    }),
    // Input
    story!("Input", "Default", || {
        one(Widget::Input(text_input("Enter text...").with_variant(Variant::Default)))
    }),
    story!("Input", "Filled", || {
        one(Widget::Input(text_input("Enter text...").with_variant(Variant::Filled)))
    }),
    story!("Input", "Outlined", || {
        one(Widget::Input(text_input("Enter text...").with_variant(Variant::Outlined)))
    }),
    story!("Input", "WithLabel", || {
        one(Widget::Input(text_input("Enter your email").with_label("Email address")))
    }),
    story!("Input", "WithDescription", || {
        one(Widget::Input(
            text_input("Enter your password")
                .with_label("Password")
                .with_description("Must be at least 8 characters long"),
        ))
    }),
    story!("Input", "WithError", || {
        one(Widget::Input(
            text_input("Enter your email")
                .with_label("Email address")
                .with_error("Please enter a valid email address"),
        ))
    }),
    story!("Input", "Sizes", || {
        Preview::new(vec![
            Widget::Input(text_input("Small input").with_size(Size::Sm)),
            Widget::Input(text_input("Medium input").with_size(Size::Md)),
            Widget::Input(text_input("Large input").with_size(Size::Lg)),
        ])
    }),
    story!("Input", "WithIcons", || {
        Preview::new(vec![
            Widget::Input(text_input("Search...").with_leading_icon("⌕")),
            Widget::Input(text_input("Password").with_trailing_icon("◉")),
        ])
    }),
    story!("Input", "Disabled", || {
        one(Widget::Input(
            text_input("This input is disabled")
                .with_label("Disabled input")
                .disabled(true),
        ))
    }),
    story!("Input", "FullWidth", || {
        one(Widget::Input(
            text_input("This input takes full width")
                .with_label("Full width input")
                .full_width(true),
        ))
    }),
    // InputNumber
    story!("InputNumber", "Default", || {
        one(Widget::Number(number("Enter number...").with_variant(Variant::Default)))
    }),
    story!("InputNumber", "Filled", || {
        one(Widget::Number(number("Enter number...").with_variant(Variant::Filled)))
    }),
    story!("InputNumber", "Outlined", || {
        one(Widget::Number(number("Enter number...").with_variant(Variant::Outlined)))
    }),
    story!("InputNumber", "WithLabel", || {
        one(Widget::Number(number("Enter amount").with_label("Amount")))
    }),
    story!("InputNumber", "WithDescription", || {
        one(Widget::Number(
            number("Enter price")
                .with_label("Price")
                .with_description("Enter the price in USD"),
        ))
    }),
    story!("InputNumber", "WithError", || {
        one(Widget::Number(
            number("Enter quantity")
                .with_label("Quantity")
                .with_error("Quantity must be greater than 0"),
        ))
    }),
    story!("InputNumber", "Sizes", || {
        Preview::new(vec![
            Widget::Number(number("Small input").with_size(Size::Sm)),
            Widget::Number(number("Medium input").with_size(Size::Md)),
            Widget::Number(number("Large input").with_size(Size::Lg)),
        ])
    }),
    story!("InputNumber", "WithMinMax", || {
        one(Widget::Number(
            number("Enter age")
                .with_label("Age")
                .with_format(NumberFormat::new().with_min(0.0).with_max(120.0))
                .with_description("Age must be between 0 and 120"),
        ))
    }),
    story!("InputNumber", "WithStep", || {
        one(Widget::Number(
            number("Enter quantity")
                .with_label("Quantity")
                .with_format(NumberFormat::new().with_step(5.0).with_min(0.0))
                .with_description("Increments of 5"),
        ))
    }),
    story!("InputNumber", "WithPrecision", || {
        one(Widget::Number(
            number("Enter price")
                .with_label("Price")
                .with_format(NumberFormat::new().with_precision(2))
                .with_description("Two decimal places"),
        ))
    }),
    story!("InputNumber", "WithPrefixSuffix", || {
        Preview::new(vec![
            Widget::Number(
                number("0.00")
                    .with_label("Price")
                    .with_prefix("$")
                    .with_format(NumberFormat::new().with_precision(2)),
            ),
            Widget::Number(number("0").with_label("Weight").with_suffix("kg")),
            Widget::Number(
                number("0")
                    .with_label("Percentage")
                    .with_suffix("%")
                    .with_format(NumberFormat::new().with_max(100.0)),
            ),
        ])
    }),
    story!("InputNumber", "WithThousandSeparator", || {
        one(Widget::Number(
            number("Enter large number")
                .with_label("Large Number")
                .with_format(NumberFormat::new().with_grouping_separator(','))
                .with_description("Numbers will be formatted with commas"),
        ))
    }),
    story!("InputNumber", "WithoutControls", || {
        one(Widget::Number(
            number("Enter number")
                .with_label("Number Input")
                .show_controls(false)
                .with_description("No increment/decrement buttons"),
        ))
    }),
    story!("InputNumber", "ControlsLeft", || {
        one(Widget::Number(
            number("Enter number")
                .with_label("Number Input")
                .with_controls_position(ControlsPosition::Left)
                .with_description("Controls on the left side"),
        ))
    }),
    story!("InputNumber", "ControlsBoth", || {
        one(Widget::Number(
            number("Enter number")
                .with_label("Number Input")
                .with_controls_position(ControlsPosition::Both)
                .with_description("Controls on both sides"),
        ))
    }),
    story!("InputNumber", "IntegerOnly", || {
        one(Widget::Number(
            number("Enter quantity")
                .with_label("Quantity")
                .with_format(NumberFormat::new().allow_decimal(false))
                .with_description("Only whole numbers allowed"),
        ))
    }),
    story!("InputNumber", "PositiveOnly", || {
        one(Widget::Number(
            number("Enter count")
                .with_label("Count")
                .with_format(NumberFormat::new().allow_negative(false).with_min(0.0))
                .with_description("Only positive numbers allowed"),
        ))
    }),
    story!("InputNumber", "Disabled", || {
        one(Widget::Number(
            number("This input is disabled")
                .with_label("Disabled input")
                .disabled(true)
                .with_value(42.0),
        ))
    }),
    story!("InputNumber", "FullWidth", || {
        one(Widget::Number(
            number("This input takes full width")
                .with_label("Full width input")
                .full_width(true),
        ))
    }),
    story!("InputNumber", "Interactive", || {
        let format = NumberFormat::new()
            .with_min(0.0)
            .with_max(1000.0)
            .with_step(10.0)
            .with_precision(2)
            .with_grouping_separator(',');
        one(Widget::Number(
            number("Enter a number")
                .with_label("Interactive Example")
                .with_format(format)
                .with_prefix("$"),
        ))
        .with_readout()
    }),
    story!("InputNumber", "Currency", || {
        Preview::new(vec![
            Widget::Number(
                number("0.00")
                    .with_label("USD Amount")
                    .with_prefix("$")
                    .with_format(NumberFormat::new().with_precision(2).with_grouping_separator(','))
                    .with_description("US Dollar amount"),
            ),
            Widget::Number(
                number("0,00")
                    .with_label("EUR Amount")
                    .with_prefix("€")
                    .with_format(
                        NumberFormat::new()
                            .with_precision(2)
                            .with_grouping_separator('.')
                            .with_decimal_separator(','),
                    )
                    .with_description("Euro amount (European format)"),
            ),
        ])
    }),
    // Switch
    story!("Switch", "Default", || {
        one(Widget::Switch(Switch::new().with_label("Enable notifications")))
    }),
    story!("Switch", "WithDescription", || {
        one(Widget::Switch(
            Switch::new()
                .with_label("Enable notifications")
                .with_description("Receive email updates about your account"),
        ))
    }),
    story!("Switch", "WithError", || {
        one(Widget::Switch(
            Switch::new()
                .with_label("Enable notifications")
                .with_error("This field is required"),
        ))
    }),
    story!("Switch", "Checked", || {
        one(Widget::Switch(Switch::new().with_label("Enable notifications").checked(true)))
    }),
    story!("Switch", "Disabled", || {
        one(Widget::Switch(Switch::new().with_label("Enable notifications").disabled(true)))
    }),
    story!("Switch", "DisabledChecked", || {
        one(Widget::Switch(
            Switch::new()
                .with_label("Enable notifications")
                .disabled(true)
                .checked(true),
        ))
    }),
    story!("Switch", "Sizes", || {
        Preview::new(
            [(Size::Sm, "Small"), (Size::Md, "Medium"), (Size::Lg, "Large")]
                .into_iter()
                .flat_map(|(size, label)| {
                    [
                        Widget::Switch(Switch::new().with_size(size).with_label(label)),
                        Widget::Switch(
                            Switch::new()
                                .with_size(size)
                                .with_label(format!("{label} checked"))
                                .checked(true),
                        ),
                    ]
                })
                .collect(),
        )
    }),
    story!("Switch", "WithoutLabel", || {
        Preview::new(vec![
            Widget::Switch(Switch::new()),
            Widget::Switch(Switch::new().checked(true)),
            Widget::Switch(Switch::new().disabled(true)),
            Widget::Switch(Switch::new().disabled(true).checked(true)),
        ])
    }),
    story!("Switch", "AllStates", || {
        Preview::new(vec![
            Widget::Note("Default".into()),
            Widget::Switch(Switch::new().with_label("Default switch")),
            Widget::Switch(Switch::new().with_label("Default checked").checked(true)),
            Widget::Note("With Description".into()),
            Widget::Switch(
                Switch::new()
                    .with_label("Notifications")
                    .with_description("Get notified about updates"),
            ),
            Widget::Switch(
                Switch::new()
                    .with_label("Marketing")
                    .with_description("Receive promotional emails")
                    .checked(true),
            ),
            Widget::Note("With Error".into()),
            Widget::Switch(
                Switch::new()
                    .with_label("Required field")
                    .with_error("This field is required"),
            ),
            Widget::Note("Disabled".into()),
            Widget::Switch(Switch::new().with_label("Disabled switch").disabled(true)),
            Widget::Switch(
                Switch::new()
                    .with_label("Disabled checked")
                    .disabled(true)
                    .checked(true),
            ),
        ])
    }),
];
