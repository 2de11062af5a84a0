use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable widget that renders into a given [`Rect`] area.
///
/// Every tactile widget (buttons, inputs, switches) implements `Component`.
/// A parent model or component decides *where* each child renders by passing
/// it a sub-region of the frame, and routes input to whichever child has
/// focus.
///
/// # Composition pattern
///
/// Wrap the child's message type in a variant of the parent message and use
/// [`Command::map`] to lift the child's commands:
///
/// ```rust,ignore
/// use tactile_core::{Command, Component};
/// use tactile_widgets::input_number::{self, InputNumber};
///
/// struct Order { quantity: InputNumber }
///
/// enum OrderMsg { Quantity(input_number::Message) }
///
/// impl Order {
///     fn update(&mut self, msg: OrderMsg) -> Command<OrderMsg> {
///         match msg {
///             OrderMsg::Quantity(input_number::Message::Changed(value)) => {
///                 // react to the parsed value
///                 Command::none()
///             }
///             OrderMsg::Quantity(m) => self.quantity.update(m).map(OrderMsg::Quantity),
///         }
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's message type.
    ///
    /// Input messages (key presses, wheel, focus) flow in; notification
    /// messages (changed, pressed, toggled) flow back out through the returned
    /// [`Command`].
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] describing
    /// what the parent should be told.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations confine all drawing to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// A parent can query `focused()` to decide which child receives keyboard
    /// events.  The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }

    /// Number of terminal rows this component wants.
    ///
    /// Parents use this to build layout constraints.  The default is a
    /// single row.
    fn height(&self) -> u16 {
        1
    }
}
