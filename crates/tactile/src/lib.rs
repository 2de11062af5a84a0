//! **tactile**: a presentational component kit for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! tactile = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`tactile_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Program`], [`run`],
//!   [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`tactile_widgets`]
//!   (buttons, text and numeric inputs, switches, the numeric codec).
//! * The [`stories`] module holds the story catalog and [`catalog`] the
//!   [`Model`] that browses it (run by the `catalog` demo).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use tactile::widgets::{InputNumber, NumberFormat};
//! use tactile::{Command, Component, Model};
//! use ratatui::Frame;
//!
//! struct Price {
//!     input: InputNumber,
//! }
//!
//! impl Model for Price {
//!     type Message = tactile::widgets::input_number::Message;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Self::Message>) {
//!         let mut input = InputNumber::new()
//!             .with_label("Price")
//!             .with_prefix("$")
//!             .with_format(NumberFormat::new().with_precision(2));
//!         input.focus();
//!         (Price { input }, Command::none())
//!     }
//!
//!     fn update(&mut self, msg: Self::Message) -> Command<Self::Message> {
//!         self.input.update(msg)
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         self.input.view(frame, frame.area());
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     tactile::run::<Price>(()).await.unwrap();
//! }
//! ```

pub use tactile_core::*;
pub mod widgets {
    pub use tactile_widgets::*;
}

pub mod catalog;
pub mod stories;

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
