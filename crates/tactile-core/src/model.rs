use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait driven by [`Program`](crate::Program).
///
/// The runtime runs an **init -> event -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] for early side effects.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Terminal input arrives as a [`TerminalEvent`] and is turned into a
///    message by [`on_event`](Model::on_event).
/// 4. [`update`](Model::update) processes each message and optionally returns
///    a [`Command`].
/// 5. Steps 2-4 repeat until a [`Command::quit`] is returned.
///
/// # Example
///
/// ```rust,ignore
/// use tactile_core::{Command, Model, TerminalEvent};
/// use ratatui::Frame;
/// use ratatui::widgets::Paragraph;
///
/// struct Hello;
///
/// enum Msg { Quit }
///
/// impl Model for Hello {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         (Hello, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Quit => Command::quit(),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         frame.render_widget(Paragraph::new("press any key"), frame.area());
///     }
///
///     fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
///         matches!(event, TerminalEvent::Key(_)).then_some(Msg::Quit)
///     }
/// }
/// ```
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].  Use `()` when none is
    /// needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state.  Should be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Translate a terminal event into a message.
    ///
    /// Return `None` to ignore the event.  The default ignores everything.
    fn on_event(&self, _event: TerminalEvent) -> Option<Self::Message> {
        None
    }
}
