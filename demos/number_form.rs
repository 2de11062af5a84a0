//! # Number Form Example
//!
//! An order form composed from tactile widgets:
//! - Two `InputNumber` fields with different formats
//! - A `Switch` and a `Button`
//! - Focus cycling with `FocusRing`
//! - Mouse clicks on the `▲▼` controls via `InputNumber::control_at`
//!
//! Run with: `cargo run --example number_form`

use tactile::crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use tactile::ratatui::layout::{Constraint, Layout, Rect};
use tactile::ratatui::style::{Color, Modifier, Style};
use tactile::ratatui::widgets::Paragraph;
use tactile::ratatui::Frame;
use tactile::widgets::button::{self, Button};
use tactile::widgets::input_number::{self, InputNumber};
use tactile::widgets::switch::{self, Switch};
use tactile::widgets::{FocusRing, NumberFormat};
use tactile::{Command, Component, Model, TerminalEvent, Wheel};

const GIFT_WRAP: f64 = 4.5;

struct OrderForm {
    quantity: InputNumber,
    price: InputNumber,
    gift: Switch,
    submit: Button,
    focus: FocusRing,
    size: (u16, u16),
    placed: Option<String>,
}

#[derive(Debug)]
enum Msg {
    Quantity(input_number::Message),
    Price(input_number::Message),
    Gift(switch::Message),
    Submit(button::Message),
    Key(tactile::crossterm::event::KeyEvent),
    Click { column: u16, row: u16 },
    Resize(u16, u16),
    FocusNext,
    Quit,
}

impl OrderForm {
    fn areas(&self) -> [Rect; 5] {
        let area = Rect::new(0, 0, self.size.0, self.size.1);
        Layout::vertical([
            Constraint::Length(self.quantity.height()),
            Constraint::Length(self.price.height()),
            Constraint::Length(self.gift.height()),
            Constraint::Length(self.submit.height()),
            Constraint::Fill(1),
        ])
        .spacing(1)
        .areas(area)
    }

    fn total(&self) -> Option<f64> {
        let quantity = self.quantity.value()?;
        let price = self.price.value()?;
        let wrap = if self.gift.is_checked() { GIFT_WRAP } else { 0.0 };
        Some(quantity * price + wrap)
    }

    fn apply_focus(&mut self) {
        self.quantity.blur();
        self.price.blur();
        self.gift.blur();
        self.submit.blur();
        match self.focus.focused() {
            Some(0) => self.quantity.focus(),
            Some(1) => self.price.focus(),
            Some(2) => self.gift.focus(),
            Some(3) => self.submit.focus(),
            _ => {}
        }
    }

    fn route_key(&mut self, key: tactile::crossterm::event::KeyEvent) -> Command<Msg> {
        match self.focus.focused() {
            Some(0) => self
                .quantity
                .update(input_number::Message::KeyPress(key))
                .map(Msg::Quantity),
            Some(1) => self
                .price
                .update(input_number::Message::KeyPress(key))
                .map(Msg::Price),
            Some(2) => self.gift.update(switch::Message::KeyPress(key)).map(Msg::Gift),
            Some(3) => self.submit.update(button::Message::KeyPress(key)).map(Msg::Submit),
            _ => Command::none(),
        }
    }

    fn click(&mut self, column: u16, row: u16) -> Command<Msg> {
        let [quantity, price, gift, submit, _] = self.areas();
        if let Some(direction) = self.quantity.control_at(quantity, column, row) {
            return self
                .quantity
                .update(input_number::Message::Step(direction))
                .map(Msg::Quantity);
        }
        if let Some(direction) = self.price.control_at(price, column, row) {
            return self
                .price
                .update(input_number::Message::Step(direction))
                .map(Msg::Price);
        }
        let hit = |rect: Rect| rect.contains((column, row).into());
        if hit(gift) {
            return self.gift.update(switch::Message::Click).map(Msg::Gift);
        }
        if self.submit.hit(submit, column, row) {
            return self.submit.update(button::Message::Click).map(Msg::Submit);
        }
        Command::none()
    }
}

impl Model for OrderForm {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let quantity = InputNumber::new()
            .with_label("Quantity")
            .with_format(
                NumberFormat::new()
                    .allow_decimal(false)
                    .allow_negative(false)
                    .with_min(1.0)
                    .with_max(99.0),
            )
            .with_value(1.0)
            .with_description("Between 1 and 99");
        let price = InputNumber::new()
            .with_label("Unit price")
            .with_prefix("$")
            .with_suffix("USD")
            .with_format(NumberFormat::new().with_precision(2).with_min(0.0).with_step(0.25))
            .with_value(12.5);
        let mut form = OrderForm {
            quantity,
            price,
            gift: Switch::new()
                .with_label("Gift wrap")
                .with_description(format!("Adds ${GIFT_WRAP:.2}")),
            submit: Button::new("Place order").with_trailing_icon("→"),
            focus: FocusRing::new(4),
            size: tactile::crossterm::terminal::size().unwrap_or((80, 24)),
            placed: None,
        };
        form.apply_focus();
        (form, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Quantity(m) => return self.quantity.update(m).map(Msg::Quantity),
            Msg::Price(m) => return self.price.update(m).map(Msg::Price),
            Msg::Gift(m) => return self.gift.update(m).map(Msg::Gift),
            Msg::Submit(button::Message::Pressed) => {
                self.placed = Some(match self.total() {
                    Some(total) => format!("Order placed: ${total:.2}"),
                    None => "Fill in quantity and price first".to_string(),
                });
            }
            Msg::Submit(m) => return self.submit.update(m).map(Msg::Submit),
            Msg::Key(key) => return self.route_key(key),
            Msg::Click { column, row } => return self.click(column, row),
            Msg::Resize(width, height) => self.size = (width, height),
            Msg::FocusNext => {
                self.focus.focus_next(|_| true);
                self.apply_focus();
            }
            Msg::Quit => return Command::quit(),
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame) {
        let [quantity, price, gift, submit, summary] = self.areas();
        self.quantity.view(frame, quantity);
        self.price.view(frame, price);
        self.gift.view(frame, gift);
        self.submit.view(frame, submit);

        let total = match self.total() {
            Some(total) => format!("Total: ${total:.2}"),
            None => "Total: -".to_string(),
        };
        let mut lines = vec![total];
        if let Some(ref placed) = self.placed {
            lines.push(placed.clone());
        }
        lines.push("Tab focus · ↑/↓ or wheel step · click ▲▼ · Esc quit".to_string());
        let style = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
        frame.render_widget(Paragraph::new(lines.join("\n")).style(style), summary);
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Resize(width, height) => Some(Msg::Resize(width, height)),
            TerminalEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Msg::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                kind => {
                    let wheel = Wheel::from_kind(kind)?;
                    match self.focus.focused() {
                        Some(0) => Some(Msg::Quantity(input_number::Message::Wheel(wheel))),
                        Some(1) => Some(Msg::Price(input_number::Message::Wheel(wheel))),
                        _ => None,
                    }
                }
            },
            TerminalEvent::Key(_) => {
                let key = event.key_press()?;
                match key.code {
                    KeyCode::Esc => Some(Msg::Quit),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(Msg::Quit)
                    }
                    KeyCode::Tab => Some(Msg::FocusNext),
                    _ => Some(Msg::Key(key)),
                }
            }
            _ => None,
        }
    }
}

#[tactile::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let form = tactile::run::<OrderForm>(()).await?;
    if let Some(total) = form.total() {
        println!("Final total: ${total:.2}");
    }
    Ok(())
}
