//! Pure layout for labelled fields.
//!
//! A field is a stack of optional rows around a box:
//!
//! ```text
//! Quantity                    <- label
//! ╭──────────────────────────╮
//! │ $ 1,234.50        USD ▲▼ │ <- box: controls, adornments, body
//! ╰──────────────────────────╯
//! Between 0 and 10,000        <- description or error
//! ```
//!
//! [`layout_field`] turns a [`FieldSpec`] and an area into rects without
//! touching a frame, so widgets, hit-testing and tests share one answer.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::theme::Size;

/// Box width used when a field is not full width.
pub const FIELD_WIDTH: u16 = 32;

/// Columns taken by one set of step controls (`▲▼`).
pub const CONTROL_WIDTH: u16 = 2;

/// Which message occupies the row under the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Description,
    Error,
}

/// The optional slots of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    pub label: Option<&'a str>,
    pub description: Option<&'a str>,
    pub error: Option<&'a str>,
    /// Icon or prefix drawn before the body.
    pub leading: Option<&'a str>,
    /// Icon or suffix drawn after the body.
    pub trailing: Option<&'a str>,
    pub controls_left: bool,
    pub controls_right: bool,
    pub size: Size,
    pub full_width: bool,
}

impl<'a> FieldSpec<'a> {
    /// The message shown under the box.  An error hides the description.
    pub fn message(&self) -> Option<(&'a str, MessageKind)> {
        match (self.error, self.description) {
            (Some(error), _) => Some((error, MessageKind::Error)),
            (None, Some(description)) => Some((description, MessageKind::Description)),
            (None, None) => None,
        }
    }
}

/// Rects for every slot of a field.  Absent slots are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldLayout {
    pub label: Option<Rect>,
    /// The box including its border.
    pub frame: Rect,
    pub controls_left: Option<Rect>,
    pub leading: Option<Rect>,
    /// Where the text goes.
    pub body: Rect,
    pub trailing: Option<Rect>,
    pub controls_right: Option<Rect>,
    pub message: Option<(Rect, MessageKind)>,
}

/// Rows needed to show every slot of `spec`.
pub fn field_height(spec: &FieldSpec) -> u16 {
    u16::from(spec.label.is_some()) + spec.size.rows() + u16::from(spec.message().is_some())
}

/// Lay out `spec` inside `area`.  Rows that do not fit are clipped.
pub fn layout_field(spec: &FieldSpec, area: Rect) -> FieldLayout {
    let width = if spec.full_width {
        area.width
    } else {
        area.width.min(FIELD_WIDTH)
    };
    let mut rows = Rect::new(area.x, area.y, width, area.height);

    let label = spec.label.map(|_| take_top(&mut rows, 1));
    let frame = take_top(&mut rows, spec.size.rows());
    let message = spec.message().map(|(_, kind)| (take_top(&mut rows, 1), kind));

    let metrics = spec.size.metrics();
    let mut inner = if metrics.bordered {
        Rect::new(
            frame.x.saturating_add(1),
            frame.y.saturating_add(1),
            frame.width.saturating_sub(2),
            frame.height.saturating_sub(2),
        )
    } else {
        frame
    };

    let controls_left = spec.controls_left.then(|| take_left(&mut inner, CONTROL_WIDTH));
    let controls_right = spec.controls_right.then(|| take_right(&mut inner, CONTROL_WIDTH));

    take_left(&mut inner, metrics.padding_x);
    take_right(&mut inner, metrics.padding_x);

    let leading = spec.leading.map(|text| {
        let rect = take_left(&mut inner, display_width(text));
        take_left(&mut inner, 1);
        rect
    });
    let trailing = spec.trailing.map(|text| {
        let rect = take_right(&mut inner, display_width(text));
        take_right(&mut inner, 1);
        rect
    });

    FieldLayout {
        label,
        frame,
        controls_left,
        leading,
        body: inner,
        trailing,
        controls_right,
        message,
    }
}

/// Terminal columns taken by `text`.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

fn take_top(rect: &mut Rect, height: u16) -> Rect {
    let height = height.min(rect.height);
    let top = Rect::new(rect.x, rect.y, rect.width, height);
    rect.y += height;
    rect.height -= height;
    top
}

fn take_left(rect: &mut Rect, width: u16) -> Rect {
    let width = width.min(rect.width);
    let left = Rect::new(rect.x, rect.y, width, rect.height);
    rect.x += width;
    rect.width -= width;
    left
}

fn take_right(rect: &mut Rect, width: u16) -> Rect {
    let width = width.min(rect.width);
    rect.width -= width;
    Rect::new(rect.x + rect.width, rect.y, width, rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 60, 10)
    }

    #[test]
    fn bare_small_field_is_one_row() {
        let spec = FieldSpec {
            size: Size::Sm,
            ..FieldSpec::default()
        };
        let layout = layout_field(&spec, area());
        assert_eq!(field_height(&spec), 1);
        assert_eq!(layout.frame, Rect::new(0, 0, FIELD_WIDTH, 1));
        assert_eq!(layout.body, Rect::new(1, 0, FIELD_WIDTH - 2, 1));
        assert!(layout.label.is_none());
        assert!(layout.message.is_none());
    }

    #[test]
    fn label_box_and_message_stack() {
        let spec = FieldSpec {
            label: Some("Amount"),
            description: Some("help"),
            ..FieldSpec::default()
        };
        let layout = layout_field(&spec, area());
        assert_eq!(field_height(&spec), 5);
        assert_eq!(layout.label, Some(Rect::new(0, 0, FIELD_WIDTH, 1)));
        assert_eq!(layout.frame, Rect::new(0, 1, FIELD_WIDTH, 3));
        assert_eq!(layout.body.y, 2);
        assert_eq!(
            layout.message,
            Some((Rect::new(0, 4, FIELD_WIDTH, 1), MessageKind::Description))
        );
    }

    #[test]
    fn error_replaces_description() {
        let spec = FieldSpec {
            description: Some("help"),
            error: Some("bad"),
            ..FieldSpec::default()
        };
        assert_eq!(spec.message(), Some(("bad", MessageKind::Error)));
        assert_eq!(field_height(&spec), 4);
    }

    #[test]
    fn full_width_uses_whole_area() {
        let spec = FieldSpec {
            full_width: true,
            ..FieldSpec::default()
        };
        assert_eq!(layout_field(&spec, area()).frame.width, 60);
    }

    #[test]
    fn controls_and_adornments_surround_body() {
        let spec = FieldSpec {
            leading: Some("$"),
            trailing: Some("USD"),
            controls_left: true,
            controls_right: true,
            ..FieldSpec::default()
        };
        let layout = layout_field(&spec, area());
        // border 1 | controls 2 | pad 1 | "$" 1 | gap 1 | body | gap 1 | "USD" 3 | pad 1 | controls 2 | border 1
        assert_eq!(layout.controls_left, Some(Rect::new(1, 1, 2, 1)));
        assert_eq!(layout.leading, Some(Rect::new(4, 1, 1, 1)));
        assert_eq!(layout.body, Rect::new(6, 1, 18, 1));
        assert_eq!(layout.trailing, Some(Rect::new(25, 1, 3, 1)));
        assert_eq!(layout.controls_right, Some(Rect::new(29, 1, 2, 1)));
    }

    #[test]
    fn tiny_area_clips_instead_of_overflowing() {
        let spec = FieldSpec {
            label: Some("Label"),
            error: Some("bad"),
            controls_right: true,
            ..FieldSpec::default()
        };
        let layout = layout_field(&spec, Rect::new(0, 0, 3, 2));
        assert_eq!(layout.frame.height, 1);
        assert_eq!(layout.message.map(|(rect, _)| rect.height), Some(0));
        assert_eq!(layout.body.width, 0);
    }

    #[test]
    fn wide_characters_measure_by_columns() {
        assert_eq!(display_width("€"), 1);
        assert_eq!(display_width("円"), 2);
    }
}
