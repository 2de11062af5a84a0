use std::collections::VecDeque;

use crate::command::{Command, Effect};
use crate::component::Component;
use crate::event::TerminalEvent;
use crate::model::Model;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Drives a [`Model`] headlessly.
///
/// Messages produced by [`Command::message`] are queued and applied by
/// [`settle`](TestProgram::settle) in the order they were produced, the same
/// order the real runtime uses.  Async commands never run.
///
/// ```rust,ignore
/// let mut catalog = TestProgram::<Catalog>::new(());
/// catalog.press(KeyCode::PageDown);
/// assert!(catalog.render_string(100, 30).contains("Core/Button/Ghost"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    queue: VecDeque<M::Message>,
    quit: bool,
}

impl<M: Model> TestProgram<M> {
    /// Call [`Model::init`] and queue whatever its command produced.
    pub fn new(flags: M::Flags) -> Self {
        let (model, startup) = M::init(flags);
        let mut program = TestProgram {
            model,
            queue: VecDeque::new(),
            quit: false,
        };
        program.enqueue(startup);
        program
    }

    /// Apply one message; follow-up messages are queued, not applied.
    pub fn send(&mut self, msg: M::Message) {
        let command = self.model.update(msg);
        self.enqueue(command);
    }

    /// Offer `event` to [`Model::on_event`], apply the resulting message and
    /// settle.
    pub fn send_event(&mut self, event: TerminalEvent) {
        if let Some(msg) = self.model.on_event(event) {
            self.send(msg);
            self.settle();
        }
    }

    /// Shorthand for [`send_event`](TestProgram::send_event) with a key press
    /// and no modifiers.
    pub fn press(&mut self, code: KeyCode) {
        self.send_event(TerminalEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    /// Apply queued messages until the queue is empty.
    pub fn settle(&mut self) {
        while let Some(msg) = self.queue.pop_front() {
            self.send(msg);
        }
    }

    /// Messages waiting to be applied.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn render(&self, width: u16, height: u16) -> Buffer {
        render_buffer(width, height, |frame| self.model.view(frame))
    }

    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn enqueue(&mut self, command: Command<M::Message>) {
        let mut stack = vec![command];
        while let Some(command) = stack.pop() {
            match command.effect {
                Effect::Emit(msg) => self.queue.push_back(msg),
                Effect::Quit => self.quit = true,
                Effect::Batch(commands) => stack.extend(commands.into_iter().rev()),
                Effect::None | Effect::Task(_) => {}
            }
        }
    }
}

/// Render a single [`Component`] into a `width` x `height` area and return the
/// screen as text, one line per row.
///
/// ```rust,ignore
/// let input = InputNumber::new().with_value(1234567.0);
/// assert!(render_component(&input, 30, 3).contains("1,234,567"));
/// ```
pub fn render_component<C: Component>(component: &C, width: u16, height: u16) -> String {
    buffer_to_string(&render_component_buffer(component, width, height))
}

/// Like [`render_component`] but returns the raw [`Buffer`] so tests can
/// inspect cell styles.
pub fn render_component_buffer<C: Component>(component: &C, width: u16, height: u16) -> Buffer {
    render_buffer(width, height, |frame| {
        let area = frame.area();
        component.view(frame, area);
    })
}

fn render_buffer(width: u16, height: u16, draw: impl FnOnce(&mut ratatui::Frame)) -> Buffer {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    terminal.backend().buffer().clone()
}

/// Concatenate every row of `buf` into a line; rows are separated by
/// newlines and trailing whitespace is preserved.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    struct Counter {
        count: i64,
    }

    #[derive(Debug)]
    enum CounterMsg {
        Increment,
        Double,
        Quit,
    }

    impl Model for Counter {
        type Message = CounterMsg;
        type Flags = i64;

        fn init(initial: i64) -> (Self, Command<CounterMsg>) {
            (Counter { count: initial }, Command::none())
        }

        fn update(&mut self, msg: CounterMsg) -> Command<CounterMsg> {
            match msg {
                CounterMsg::Increment => self.count += 1,
                CounterMsg::Double => {
                    self.count *= 2;
                    return Command::message(CounterMsg::Increment);
                }
                CounterMsg::Quit => return Command::quit(),
            }
            Command::none()
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = format!("Count: {}", self.count);
            frame.render_widget(Paragraph::new(text), frame.area());
        }

        fn on_event(&self, event: TerminalEvent) -> Option<CounterMsg> {
            event.key_press().map(|_| CounterMsg::Increment)
        }
    }

    struct Label(&'static str);

    impl Component for Label {
        type Message = ();

        fn update(&mut self, _msg: ()) -> Command<()> {
            Command::none()
        }

        fn view(&self, frame: &mut ratatui::Frame, area: Rect) {
            frame.render_widget(Paragraph::new(self.0), area);
        }
    }

    #[test]
    fn init_uses_flags() {
        let prog = TestProgram::<Counter>::new(42);
        assert_eq!(prog.model().count, 42);
    }

    #[test]
    fn send_updates_model() {
        let mut prog = TestProgram::<Counter>::new(0);
        prog.send(CounterMsg::Increment);
        prog.send(CounterMsg::Increment);
        assert_eq!(prog.model().count, 2);
    }

    #[test]
    fn follow_up_messages_wait_for_settle() {
        let mut prog = TestProgram::<Counter>::new(3);
        prog.send(CounterMsg::Double);
        assert_eq!(prog.model().count, 6);
        assert_eq!(prog.pending(), 1);
        prog.settle();
        assert_eq!(prog.model().count, 7);
        assert_eq!(prog.pending(), 0);
    }

    #[test]
    fn events_route_through_on_event() {
        let mut prog = TestProgram::<Counter>::new(0);
        prog.press(KeyCode::Char('x'));
        prog.send_event(TerminalEvent::FocusLost);
        assert_eq!(prog.model().count, 1);
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Counter>::new(0);
        prog.send(CounterMsg::Quit);
        assert!(prog.quit_requested());
    }

    #[test]
    fn quit_inside_batch_is_recorded() {
        let mut prog = TestProgram::<Counter>::new(0);
        assert!(!prog.quit_requested());
        prog.enqueue(Command::batch(vec![
            Command::message(CounterMsg::Increment),
            Command::quit(),
        ]));
        assert!(prog.quit_requested());
        prog.settle();
        assert_eq!(prog.model().count, 1);
    }

    #[test]
    fn render_string_shows_model() {
        let prog = TestProgram::<Counter>::new(5);
        assert!(prog.render_string(20, 1).contains("Count: 5"));
    }

    #[test]
    fn render_component_into_area() {
        let out = render_component(&Label("hello"), 10, 2);
        assert_eq!(out, "hello     \n          ");
    }
}
