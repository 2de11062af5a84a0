use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

/// What a call to [`Component::update`](crate::Component::update) or
/// [`Model::update`](crate::Model::update) wants to happen next.
///
/// Widgets report notifications (a value changed, a button was pressed) by
/// returning them as commands instead of holding callbacks.  A parent lifts a
/// child's command into its own message type with [`Command::map`]:
///
/// ```rust,ignore
/// self.quantity.update(msg).map(FormMsg::Quantity)
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) effect: Effect<Msg>,
}

pub(crate) enum Effect<Msg: Send + 'static> {
    None,
    /// Deliver the message back to `update`.
    Emit(Msg),
    Quit,
    /// Run on the tokio runtime; the output is delivered as a message.
    Task(BoxFuture<'static, Msg>),
    Batch(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    fn from_effect(effect: Effect<Msg>) -> Self {
        Command { effect }
    }

    pub fn none() -> Self {
        Self::from_effect(Effect::None)
    }

    /// Deliver `msg` to `update` before any new terminal input.
    pub fn message(msg: Msg) -> Self {
        Self::from_effect(Effect::Emit(msg))
    }

    pub fn quit() -> Self {
        Self::from_effect(Effect::Quit)
    }

    /// Await `future` off the update path and deliver `map(output)`.
    pub fn perform<F, T>(future: F, map: impl FnOnce(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::from_effect(Effect::Task(Box::pin(async move { map(future.await) })))
    }

    /// Run several commands in order.  No-ops are dropped; zero commands
    /// collapse to [`Command::none`] and one command is returned unwrapped.
    pub fn batch(commands: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut commands: Vec<_> = commands.into_iter().filter(|c| !c.is_none()).collect();
        if commands.len() > 1 {
            return Self::from_effect(Effect::Batch(commands));
        }
        commands.pop().unwrap_or_else(Command::none)
    }

    /// Convert the carried messages with `f`.
    pub fn map<Out: Send + 'static>(
        self,
        f: impl Fn(Msg) -> Out + Send + Sync + 'static,
    ) -> Command<Out> {
        self.map_shared(Arc::new(f))
    }

    fn map_shared<Out: Send + 'static>(
        self,
        f: Arc<dyn Fn(Msg) -> Out + Send + Sync>,
    ) -> Command<Out> {
        let effect = match self.effect {
            Effect::None => Effect::None,
            Effect::Quit => Effect::Quit,
            Effect::Emit(msg) => Effect::Emit(f(msg)),
            Effect::Task(task) => Effect::Task(Box::pin(async move { f(task.await) })),
            Effect::Batch(commands) => Effect::Batch(
                commands
                    .into_iter()
                    .map(|command| command.map_shared(Arc::clone(&f)))
                    .collect(),
            ),
        };
        Command::from_effect(effect)
    }

    pub fn is_none(&self) -> bool {
        matches!(self.effect, Effect::None)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self.effect, Effect::Quit)
    }

    /// The message, if this command is exactly one [`Command::message`].
    pub fn into_message(self) -> Option<Msg> {
        match self.effect {
            Effect::Emit(msg) => Some(msg),
            _ => None,
        }
    }

    /// Every immediate message, batches flattened in order.  Tasks are
    /// skipped.
    pub fn into_messages(self) -> Vec<Msg> {
        let mut messages = Vec::new();
        let mut stack = vec![self];
        while let Some(command) = stack.pop() {
            match command.effect {
                Effect::Emit(msg) => messages.push(msg),
                Effect::Batch(commands) => stack.extend(commands.into_iter().rev()),
                Effect::None | Effect::Quit | Effect::Task(_) => {}
            }
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_reports_none() {
        let command: Command<()> = Command::none();
        assert!(command.is_none());
        assert!(!command.is_quit());
    }

    #[test]
    fn message_comes_back_out() {
        assert_eq!(Command::message(42).into_message(), Some(42));
    }

    #[test]
    fn quit_reports_quit() {
        assert!(Command::<()>::quit().is_quit());
    }

    #[test]
    fn empty_batch_is_none() {
        assert!(Command::<()>::batch(Vec::new()).is_none());
    }

    #[test]
    fn batch_of_one_is_unwrapped() {
        let command = Command::batch(vec![Command::none(), Command::message(1)]);
        assert_eq!(command.into_message(), Some(1));
    }

    #[test]
    fn nested_batches_flatten_in_order() {
        let command = Command::batch(vec![
            Command::message(1),
            Command::batch(vec![Command::message(2), Command::message(3)]),
        ]);
        assert_eq!(command.into_messages(), vec![1, 2, 3]);
    }

    #[test]
    fn map_converts_messages() {
        let mapped = Command::message(42).map(|n: i32| n.to_string());
        assert_eq!(mapped.into_message().as_deref(), Some("42"));
    }

    #[test]
    fn map_keeps_quit() {
        assert!(Command::<i32>::quit().map(|n| n + 1).is_quit());
    }

    #[test]
    fn map_reaches_into_batches() {
        let command = Command::batch(vec![Command::message(1), Command::message(2)]);
        let mapped = command.map(|n: i32| format!("#{n}"));
        assert_eq!(mapped.into_messages(), vec!["#1", "#2"]);
    }

    #[test]
    fn perform_is_not_an_immediate_message() {
        let command = Command::perform(async { 7 }, |n: i32| n * 2);
        assert!(!command.is_none());
        assert!(command.into_messages().is_empty());
    }
}
