//! Options and chrome shared by [`Input`](crate::input::Input) and
//! [`InputNumber`](crate::input_number::InputNumber).

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tactile_core::ElementId;

use crate::layout::{FieldLayout, FieldSpec, MessageKind};
use crate::theme::{Size, State, Theme, Variant};

/// Accessibility facts about a field, the terminal stand-in for ARIA
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccessibility {
    pub id: ElementId,
    /// Set when a label is shown; the label names the field `id`.
    pub label_for: Option<ElementId>,
    /// Ids of the visible message under the box.
    pub described_by: Vec<ElementId>,
    pub invalid: bool,
    pub required: bool,
    pub disabled: bool,
}

/// Decorator options common to text-like fields.
#[derive(Debug, Clone)]
pub struct FieldProps {
    pub(crate) id: ElementId,
    pub(crate) label: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) error: Option<String>,
    pub(crate) variant: Variant,
    pub(crate) size: Size,
    pub(crate) full_width: bool,
    pub(crate) disabled: bool,
    pub(crate) required: bool,
}

impl FieldProps {
    pub(crate) fn new(prefix: &str) -> Self {
        Self {
            id: ElementId::next(prefix),
            label: None,
            description: None,
            error: None,
            variant: Variant::default(),
            size: Size::default(),
            full_width: false,
            disabled: false,
            required: false,
        }
    }

    pub(crate) fn spec<'a>(
        &'a self,
        leading: Option<&'a str>,
        trailing: Option<&'a str>,
        controls_left: bool,
        controls_right: bool,
    ) -> FieldSpec<'a> {
        FieldSpec {
            label: self.label.as_deref(),
            description: self.description.as_deref(),
            error: self.error.as_deref(),
            leading,
            trailing,
            controls_left,
            controls_right,
            size: self.size,
            full_width: self.full_width,
        }
    }

    pub(crate) fn accessibility(&self) -> FieldAccessibility {
        let described_by = if self.error.is_some() {
            vec![self.id.child("error")]
        } else if self.description.is_some() {
            vec![self.id.child("description")]
        } else {
            Vec::new()
        };
        FieldAccessibility {
            id: self.id.clone(),
            label_for: self.label.as_ref().map(|_| self.id.clone()),
            described_by,
            invalid: self.error.is_some(),
            required: self.required,
            disabled: self.disabled,
        }
    }

    /// Draw label, box and message; returns the style for text in the box.
    pub(crate) fn render_chrome(
        &self,
        frame: &mut Frame,
        layout: &FieldLayout,
        theme: &Theme,
        focused: bool,
    ) -> Style {
        if let (Some(rect), Some(label)) = (layout.label, self.label.as_deref()) {
            let mut spans = vec![Span::styled(label.to_string(), theme.label(self.disabled))];
            if self.required {
                spans.push(Span::styled(" *", theme.error()));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), rect);
        }

        let state = State {
            focused,
            disabled: self.disabled,
            invalid: self.error.is_some(),
        };
        let surface = theme.field(self.variant, self.size, state);
        match surface.block() {
            Some(block) => frame.render_widget(block, layout.frame),
            None => frame.render_widget(Block::default().style(surface.fill), layout.frame),
        }

        if let Some((rect, kind)) = layout.message {
            let (text, style) = match kind {
                MessageKind::Error => (self.error.as_deref(), theme.error()),
                MessageKind::Description => {
                    (self.description.as_deref(), theme.description(self.disabled))
                }
            };
            if let Some(text) = text {
                frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), rect);
            }
        }

        surface.fill
    }
}

/// Draw `text` into an optional rect.
pub(crate) fn render_adornment(frame: &mut Frame, rect: Option<Rect>, text: Option<&str>, style: Style) {
    if let (Some(rect), Some(text)) = (rect, text) {
        frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), rect);
    }
}

/// Builder methods for the shared [`FieldProps`] of a widget with a
/// `field` member.
macro_rules! field_builders {
    () => {
        /// Use a caller-supplied identifier instead of a generated one.
        pub fn with_id(mut self, id: impl Into<tactile_core::ElementId>) -> Self {
            self.field.id = id.into();
            self
        }

        pub fn with_label(mut self, label: impl Into<String>) -> Self {
            self.field.label = Some(label.into());
            self
        }

        /// Helper text under the box; hidden while an error is shown.
        pub fn with_description(mut self, description: impl Into<String>) -> Self {
            self.field.description = Some(description.into());
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.field.error = Some(error.into());
            self
        }

        pub fn with_variant(mut self, variant: $crate::theme::Variant) -> Self {
            self.field.variant = variant;
            self
        }

        pub fn with_size(mut self, size: $crate::theme::Size) -> Self {
            self.field.size = size;
            self
        }

        pub fn full_width(mut self, full_width: bool) -> Self {
            self.field.full_width = full_width;
            self
        }

        pub fn disabled(mut self, disabled: bool) -> Self {
            self.field.disabled = disabled;
            self
        }

        pub fn required(mut self, required: bool) -> Self {
            self.field.required = required;
            self
        }

        /// Replace or clear the error after construction.
        pub fn set_error(&mut self, error: Option<String>) {
            self.field.error = error;
        }

        pub fn id(&self) -> &tactile_core::ElementId {
            &self.field.id
        }

        pub fn is_disabled(&self) -> bool {
            self.field.disabled
        }

        pub fn accessibility(&self) -> $crate::field::FieldAccessibility {
            self.field.accessibility()
        }
    };
}

pub(crate) use field_builders;
