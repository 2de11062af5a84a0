//! Core runtime for the **tactile** component kit.
//!
//! `tactile-core` provides the traits, types, and runtime shared by every
//! tactile widget.  Widgets are [`Component`]s: they receive input messages,
//! mutate their own state, and report what happened through a [`Command`].
//! Applications are [`Model`]s driven by a [`Program`].
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Component`] | Reusable widget that renders into a [`ratatui::layout::Rect`] |
//! | [`Model`] | Top-level application trait (init / update / view / on_event) |
//! | [`Command`] | Notification or side effect returned from `update` |
//! | [`TerminalEvent`] | Key, mouse, focus and paste input from crossterm |
//! | [`ElementId`] | Deterministic identifier linking labels and messages to a field |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for tests |
//!
//! # Logging
//!
//! Set [`ProgramOptions::log_file`] (or call
//! [`logging::init_file_logging`]) to route `tracing` output to a file.  The
//! `TACTILE_LOG` environment variable controls the filter.

pub mod command;
pub mod component;
pub mod event;
pub mod id;
pub mod logging;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::{TerminalEvent, Wheel};
pub use id::ElementId;
pub use model::Model;
pub use runtime::{OutputTarget, Program, ProgramError, ProgramOptions};

/// Run a tactile application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
