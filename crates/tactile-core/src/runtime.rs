use crate::command::{Command, Effect};
use crate::event::TerminalEvent;
use crate::logging::{self, LoggingError};
use crate::model::Model;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    EventStream,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::{cursor, queue};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Once;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

type Backend = CrosstermBackend<Box<dyn Write + Send>>;

/// Stream the terminal UI is drawn on.
///
/// Pick [`Stderr`](OutputTarget::Stderr) when stdout is piped into another
/// program.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

impl OutputTarget {
    fn writer(self) -> Box<dyn Write + Send> {
        match self {
            OutputTarget::Stdout => Box::new(io::stdout()),
            OutputTarget::Stderr => Box::new(io::stderr()),
        }
    }
}

/// Failure while starting, running or tearing down a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("logging setup failed: {0}")]
    Logging(#[from] LoggingError),
}

/// Settings for a [`Program`].  Override fields with struct update syntax:
///
/// ```rust,ignore
/// let options = ProgramOptions {
///     title: Some("catalog".into()),
///     log_file: Some("catalog.log".into()),
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Redraw rate ceiling; clamped to `1..=120`.
    pub fps: u32,
    /// Draw on the alternate screen.
    pub alt_screen: bool,
    /// Report mouse input.  Wheel stepping in numeric inputs needs this.
    pub mouse_capture: bool,
    /// Deliver pasted text as a single [`TerminalEvent::Paste`].
    pub bracketed_paste: bool,
    /// Window title, if any.
    pub title: Option<String>,
    /// Put the terminal back before a panic message is printed.
    pub catch_panics: bool,
    /// Stop when the process receives ctrl-c.
    pub handle_signals: bool,
    /// Append `tracing` output to this file.
    pub log_file: Option<PathBuf>,
    pub output: OutputTarget,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        ProgramOptions {
            fps: 60,
            alt_screen: true,
            mouse_capture: true,
            bracketed_paste: true,
            title: None,
            catch_panics: true,
            handle_signals: true,
            log_file: None,
            output: OutputTarget::Stdout,
        }
    }
}

/// Terminal modes a session switches on and must switch off again.
#[derive(Debug, Clone, Copy)]
struct Modes {
    alt_screen: bool,
    mouse_capture: bool,
    bracketed_paste: bool,
    output: OutputTarget,
}

impl Modes {
    fn from_options(options: &ProgramOptions) -> Self {
        Modes {
            alt_screen: options.alt_screen,
            mouse_capture: options.mouse_capture,
            bracketed_paste: options.bracketed_paste,
            output: options.output,
        }
    }

    fn enter(self, title: Option<&str>) -> io::Result<()> {
        enable_raw_mode()?;
        let mut out = self.output.writer();
        if self.alt_screen {
            queue!(out, EnterAlternateScreen)?;
        }
        if self.bracketed_paste {
            queue!(out, EnableBracketedPaste)?;
        }
        if self.mouse_capture {
            queue!(out, EnableMouseCapture)?;
        }
        if let Some(title) = title {
            queue!(out, SetTitle(title))?;
        }
        queue!(out, cursor::Hide)?;
        out.flush()
    }

    /// Undo [`Modes::enter`].  Every step runs even when an earlier one fails;
    /// the first error is returned.
    fn leave(self) -> io::Result<()> {
        let mut out = self.output.writer();
        let steps = [
            queue!(out, DisableBracketedPaste),
            queue!(out, DisableMouseCapture),
            queue!(out, cursor::Show),
            if self.alt_screen {
                queue!(out, LeaveAlternateScreen)
            } else {
                Ok(())
            },
            out.flush(),
            disable_raw_mode(),
        ];
        steps.into_iter().collect()
    }
}

fn install_panic_hook(modes: Modes) {
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = modes.leave();
            previous(info);
        }));
    });
}

/// Switch the terminal into `modes` and build the drawing surface.  The
/// caller restores the modes when this fails, whichever step it stopped at.
fn start_terminal(modes: Modes, title: Option<&str>) -> io::Result<Terminal<Backend>> {
    modes.enter(title)?;
    Terminal::new(CrosstermBackend::new(modes.output.writer()))
}

/// Outcome of one wait in the event loop.
enum Wake<Msg> {
    Interrupted,
    Message(Msg),
    Terminal(TerminalEvent),
    ReadFailed(io::Error),
    InputClosed,
    Frame,
}

/// Drives a [`Model`] on a real terminal.
///
/// Messages are applied one at a time in arrival order.  Terminal input is
/// turned into messages by [`Model::on_event`]; queued messages are handled
/// before new input.  The loop ends on [`Command::quit`], on ctrl-c, or when
/// the input stream closes, and hands the final model back.
///
/// ```rust,ignore
/// let form = Program::<OrderForm>::new(())?.run().await?;
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<Backend>,
    modes: Modes,
    options: ProgramOptions,
    queue_tx: mpsc::UnboundedSender<M::Message>,
    queue_rx: mpsc::UnboundedReceiver<M::Message>,
    dirty: bool,
    quitting: bool,
}

impl<M: Model> Program<M> {
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        if let Some(path) = &options.log_file {
            logging::init_file_logging(path)?;
        }

        let modes = Modes::from_options(&options);
        if options.catch_panics {
            install_panic_hook(modes);
        }
        let terminal = match start_terminal(modes, options.title.as_deref()) {
            Ok(terminal) => terminal,
            Err(err) => {
                tracing::debug!(%err, "terminal setup failed; restoring modes");
                let _ = modes.leave();
                return Err(err.into());
            }
        };

        let (queue_tx, queue_rx) = mpsc::unbounded_channel();
        let (model, startup) = M::init(flags);
        let mut program = Program {
            model,
            terminal,
            modes,
            options,
            queue_tx,
            queue_rx,
            dirty: true,
            quitting: false,
        };
        tracing::debug!(fps = program.options.fps, "program started");
        program.run_command(startup);
        Ok(program)
    }

    /// A handle for feeding messages in from other tasks.
    pub fn sender(&self) -> mpsc::UnboundedSender<M::Message> {
        self.queue_tx.clone()
    }

    /// Run until the model quits, restore the terminal, and return the model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let outcome = self.event_loop().await;
        tracing::debug!("program stopping");
        self.modes.leave()?;
        outcome.map(|()| self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        let fps = self.options.fps.clamp(1, 120);
        let mut ticker = tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(fps)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut input = EventStream::new();

        self.draw()?;
        while !self.quitting {
            match self.wait(&mut input, &mut ticker).await {
                Wake::Interrupted => {
                    tracing::debug!("interrupted by ctrl-c");
                    break;
                }
                Wake::InputClosed => break,
                Wake::ReadFailed(err) => tracing::warn!(%err, "could not read terminal input"),
                Wake::Message(msg) => self.apply(msg),
                Wake::Terminal(event) => {
                    if let TerminalEvent::Resize(..) = event {
                        self.dirty = true;
                    }
                    if let Some(msg) = self.model.on_event(event) {
                        self.apply(msg);
                    }
                }
                Wake::Frame if self.dirty => {
                    self.draw()?;
                    self.dirty = false;
                }
                Wake::Frame => {}
            }
        }
        Ok(())
    }

    async fn wait(
        &mut self,
        input: &mut EventStream,
        ticker: &mut tokio::time::Interval,
    ) -> Wake<M::Message> {
        let signals = self.options.handle_signals;
        tokio::select! {
            biased;
            _ = tokio::signal::ctrl_c(), if signals => Wake::Interrupted,
            Some(msg) = self.queue_rx.recv() => Wake::Message(msg),
            next = input.next() => match next {
                Some(Ok(event)) => Wake::Terminal(event.into()),
                Some(Err(err)) => Wake::ReadFailed(err),
                None => Wake::InputClosed,
            },
            _ = ticker.tick() => Wake::Frame,
        }
    }

    fn apply(&mut self, msg: M::Message) {
        let command = self.model.update(msg);
        self.run_command(command);
        self.dirty = true;
    }

    fn run_command(&mut self, command: Command<M::Message>) {
        let mut pending = vec![command];
        while let Some(command) = pending.pop() {
            match command.effect {
                Effect::None => {}
                Effect::Quit => self.quitting = true,
                Effect::Emit(msg) => {
                    let _ = self.queue_tx.send(msg);
                }
                Effect::Task(task) => {
                    let queue = self.queue_tx.clone();
                    tokio::spawn(async move {
                        let _ = queue.send(task.await);
                    });
                }
                // Reversed so batched messages are queued in their given order.
                Effect::Batch(commands) => pending.extend(commands.into_iter().rev()),
            }
        }
    }

    fn draw(&mut self) -> Result<(), ProgramError> {
        let model = &self.model;
        self.terminal.draw(|frame| model.view(frame))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_is_captured_by_default() {
        let options = ProgramOptions::default();
        assert!(options.mouse_capture);
        assert!(options.alt_screen);
        assert_eq!(options.fps, 60);
        assert_eq!(options.output, OutputTarget::Stdout);
        assert!(options.log_file.is_none());
    }

    #[test]
    fn logging_failure_is_a_program_error() {
        let err: ProgramError = LoggingError::AlreadyInstalled.into();
        assert!(matches!(err, ProgramError::Logging(_)));
        assert!(err.to_string().contains("logging setup failed"));
    }

    #[test]
    fn modes_follow_options() {
        let options = ProgramOptions {
            alt_screen: false,
            output: OutputTarget::Stderr,
            ..ProgramOptions::default()
        };
        let modes = Modes::from_options(&options);
        assert!(!modes.alt_screen);
        assert!(modes.mouse_capture);
        assert_eq!(modes.output, OutputTarget::Stderr);
    }

    // Setup failures call `leave` after a partial (or no) `enter`.
    #[test]
    fn leaving_modes_that_were_never_entered_is_harmless() {
        let modes = Modes::from_options(&ProgramOptions {
            alt_screen: false,
            output: OutputTarget::Stderr,
            ..ProgramOptions::default()
        });
        assert!(modes.leave().is_ok());
        assert!(modes.leave().is_ok());
    }
}
