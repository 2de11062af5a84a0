//! Form widgets for the **tactile** component kit.
//!
//! Every widget implements [`tactile_core::Component`], so it can be embedded
//! in any [`tactile_core::Model`] and placed with ordinary [`ratatui`]
//! layouts.  Styling comes from [`theme`] tables; geometry for labelled fields
//! comes from the pure [`layout`] functions.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`button`] | Pressable button with variants, sizes and icons |
//! | [`input`] | Labelled single-line text input |
//! | [`input_number`] | Numeric input with formatting, admission and stepping |
//! | [`switch`] | On/off toggle |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`numeric`] | Format, parse, admit and step numeric display text |
//! | [`edit`] | [`LineBuffer`](edit::LineBuffer) and key-to-edit mapping |
//! | [`field`] | Accessibility record shared by text fields |
//! | [`focus`] | [`FocusRing`](focus::FocusRing) for cycling focus across widgets |
//! | [`layout`] | Pure layout of label, box, adornments and message rows |
//! | [`theme`] | Sizes, variants and palettes |

pub mod button;
pub mod edit;
pub mod field;
pub mod focus;
pub mod input;
pub mod input_number;
pub mod layout;
pub mod numeric;
pub mod switch;
pub mod theme;

pub use button::Button;
pub use focus::FocusRing;
pub use input::Input;
pub use input_number::{ControlsPosition, InputNumber};
pub use numeric::{Direction, NumberFormat};
pub use switch::Switch;
pub use theme::{ButtonVariant, Palette, Size, Theme, Variant};
