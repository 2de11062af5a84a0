//! Table-driven styling.
//!
//! Widgets never pick colors themselves.  A size maps to [`SizeMetrics`] and
//! a variant maps to a row of [`Role`]s; a [`Palette`] resolves roles to
//! terminal colors.  Swapping the palette restyles every widget.

use std::env;

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType};
use tracing::debug;

/// Environment variable that forces the palette: `ansi` or `truecolor`.
pub const COLOR_MODE_ENV: &str = "TACTILE_COLOR_MODE";

/// Widget size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Terminal dimensions for a [`Size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMetrics {
    /// Draw a border around the widget (three rows instead of one).
    pub bordered: bool,
    /// Blank columns between the edge and the content.
    pub padding_x: u16,
    /// Render the content in bold.
    pub bold: bool,
    /// Columns taken by a switch track.
    pub switch_track: u16,
}

const SIZE_METRICS: [SizeMetrics; 3] = [
    SizeMetrics {
        bordered: false,
        padding_x: 1,
        bold: false,
        switch_track: 3,
    },
    SizeMetrics {
        bordered: true,
        padding_x: 1,
        bold: false,
        switch_track: 4,
    },
    SizeMetrics {
        bordered: true,
        padding_x: 2,
        bold: true,
        switch_track: 5,
    },
];

impl Size {
    pub const ALL: [Size; 3] = [Size::Sm, Size::Md, Size::Lg];

    pub fn metrics(self) -> SizeMetrics {
        SIZE_METRICS[self as usize]
    }

    /// Rows taken by a single-line control of this size.
    pub fn rows(self) -> u16 {
        if self.metrics().bordered {
            3
        } else {
            1
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }
}

/// Visual variant of text and numeric fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Default,
    Filled,
    Outlined,
}

/// Visual variant of buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Soft,
}

/// Semantic color slots resolved by a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Primary,
    PrimaryHover,
    OnPrimary,
    Surface,
    SurfaceDark,
    Subtle,
    Text,
    TextSoft,
    Muted,
    Border,
    Shadow,
    Danger,
    DangerSoft,
    Track,
}

const ROLE_COUNT: usize = 14;

/// Colors for every [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    name: &'static str,
    colors: [Color; ROLE_COUNT],
}

impl Palette {
    /// 24-bit palette matching the neumorphic light theme.
    pub const TRUECOLOR: Palette = Palette {
        name: "truecolor",
        colors: [
            Color::Rgb(0x25, 0x63, 0xeb), // Primary
            Color::Rgb(0x3b, 0x82, 0xf6), // PrimaryHover
            Color::Rgb(0xff, 0xff, 0xff), // OnPrimary
            Color::Rgb(0xf2, 0xf3, 0xf7), // Surface
            Color::Rgb(0xe6, 0xe8, 0xef), // SurfaceDark
            Color::Rgb(0xf3, 0xf4, 0xf6), // Subtle
            Color::Rgb(0x11, 0x18, 0x27), // Text
            Color::Rgb(0x1f, 0x29, 0x37), // TextSoft
            Color::Rgb(0x6b, 0x72, 0x80), // Muted
            Color::Rgb(0xd1, 0xd5, 0xdb), // Border
            Color::Rgb(0xd1, 0xd5, 0xe0), // Shadow
            Color::Rgb(0xdc, 0x26, 0x26), // Danger
            Color::Rgb(0xfe, 0xca, 0xca), // DangerSoft
            Color::Rgb(0xe5, 0xe7, 0xeb), // Track
        ],
    };

    /// 16-color fallback for terminals without truecolor support.
    pub const ANSI: Palette = Palette {
        name: "ansi",
        colors: [
            Color::Blue,
            Color::LightBlue,
            Color::White,
            Color::Reset,
            Color::Reset,
            Color::Reset,
            Color::Reset,
            Color::Reset,
            Color::DarkGray,
            Color::Gray,
            Color::DarkGray,
            Color::Red,
            Color::LightRed,
            Color::DarkGray,
        ],
    };

    pub fn color(&self, role: Role) -> Color {
        self.colors[role as usize]
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Pick a palette from `TACTILE_COLOR_MODE`, falling back to `COLORTERM`.
    pub fn from_env() -> Palette {
        let mode = env::var(COLOR_MODE_ENV).ok();
        let colorterm = env::var("COLORTERM").ok();
        let palette = Self::detect(mode.as_deref(), colorterm.as_deref());
        debug!(palette = palette.name, "palette selected");
        palette
    }

    fn detect(mode: Option<&str>, colorterm: Option<&str>) -> Palette {
        match mode.map(|m| m.trim().to_ascii_lowercase()).as_deref() {
            Some("ansi") => return Palette::ANSI,
            Some("truecolor") => return Palette::TRUECOLOR,
            _ => {}
        }
        match colorterm.map(|c| c.to_ascii_lowercase()) {
            Some(c) if c.contains("truecolor") || c.contains("24bit") => Palette::TRUECOLOR,
            _ => Palette::ANSI,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::TRUECOLOR
    }
}

/// Role assignments for one variant.
#[derive(Debug, Clone, Copy)]
struct VariantTokens {
    fill: Option<Role>,
    text: Role,
    bold: bool,
    border: Option<(BorderType, Role)>,
}

const FIELD_VARIANTS: [VariantTokens; 3] = [
    // Default
    VariantTokens {
        fill: Some(Role::Surface),
        text: Role::Text,
        bold: false,
        border: Some((BorderType::Rounded, Role::Shadow)),
    },
    // Filled
    VariantTokens {
        fill: Some(Role::Subtle),
        text: Role::Text,
        bold: false,
        border: Some((BorderType::QuadrantInside, Role::Subtle)),
    },
    // Outlined
    VariantTokens {
        fill: None,
        text: Role::Text,
        bold: false,
        border: Some((BorderType::Plain, Role::Border)),
    },
];

const BUTTON_VARIANTS: [VariantTokens; 3] = [
    // Primary
    VariantTokens {
        fill: Some(Role::Primary),
        text: Role::OnPrimary,
        bold: true,
        border: Some((BorderType::Rounded, Role::Primary)),
    },
    // Ghost
    VariantTokens {
        fill: Some(Role::Surface),
        text: Role::TextSoft,
        bold: false,
        border: Some((BorderType::Rounded, Role::Shadow)),
    },
    // Soft
    VariantTokens {
        fill: Some(Role::Surface),
        text: Role::Primary,
        bold: false,
        border: Some((BorderType::Rounded, Role::Shadow)),
    },
];

/// Interaction state that modifies a variant's base style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    pub focused: bool,
    pub disabled: bool,
    pub invalid: bool,
}

/// Resolved styles for a widget's box.
#[derive(Debug, Clone)]
pub struct Surface {
    /// Background and text style for the whole box.
    pub fill: Style,
    /// Border, when the size draws one.
    pub border: Option<(BorderType, Style)>,
}

impl Surface {
    /// A block for the border, if any, with the fill applied.
    pub fn block(&self) -> Option<Block<'static>> {
        self.border.map(|(border_type, style)| {
            Block::bordered()
                .border_type(border_type)
                .border_style(style)
                .style(self.fill)
        })
    }
}

/// Styles for every widget, resolved from a [`Palette`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
}

impl Theme {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn from_env() -> Self {
        Self::new(Palette::from_env())
    }

    fn fg(&self, role: Role) -> Style {
        Style::default().fg(self.palette.color(role))
    }

    fn resolve(&self, tokens: VariantTokens, size: Size, state: State) -> Surface {
        let mut fill = self.fg(tokens.text);
        if let Some(role) = tokens.fill {
            fill = fill.bg(self.palette.color(role));
        }
        if tokens.bold || size.metrics().bold {
            fill = fill.add_modifier(Modifier::BOLD);
        }

        let border_role = if state.invalid {
            Some(Role::Danger)
        } else if state.focused {
            Some(Role::PrimaryHover)
        } else {
            tokens.border.map(|(_, role)| role)
        };

        let border = match (size.metrics().bordered, tokens.border, border_role) {
            (true, Some((border_type, _)), Some(role)) => {
                let mut style = self.fg(role);
                if let Some(bg) = tokens.fill {
                    style = style.bg(self.palette.color(bg));
                }
                Some((border_type, style))
            }
            _ => None,
        };

        // Without a border, error and focus show on the text itself.
        if border.is_none() {
            if state.invalid {
                fill = fill.fg(self.palette.color(Role::Danger));
            } else if state.focused {
                fill = fill.add_modifier(Modifier::UNDERLINED);
            }
        }

        let mut surface = Surface { fill, border };
        if state.disabled {
            surface.fill = surface.fill.add_modifier(Modifier::DIM);
            if let Some((_, ref mut style)) = surface.border {
                *style = style.add_modifier(Modifier::DIM);
            }
        }
        surface
    }

    pub fn field(&self, variant: Variant, size: Size, state: State) -> Surface {
        self.resolve(FIELD_VARIANTS[variant as usize], size, state)
    }

    pub fn button(&self, variant: ButtonVariant, size: Size, state: State) -> Surface {
        self.resolve(BUTTON_VARIANTS[variant as usize], size, state)
    }

    pub fn label(&self, disabled: bool) -> Style {
        dim_if(self.fg(Role::Text).add_modifier(Modifier::BOLD), disabled)
    }

    pub fn description(&self, disabled: bool) -> Style {
        dim_if(self.fg(Role::Muted), disabled)
    }

    pub fn error(&self) -> Style {
        self.fg(Role::Danger)
    }

    pub fn adornment(&self) -> Style {
        self.fg(Role::Muted)
    }

    pub fn placeholder(&self) -> Style {
        self.fg(Role::Muted)
    }

    pub fn cursor(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn control(&self, disabled: bool) -> Style {
        dim_if(self.fg(Role::Muted), disabled)
    }

    /// Track style: primary when on, danger tint when invalid.
    pub fn switch_track(&self, checked: bool, state: State) -> Style {
        let role = if state.invalid {
            Role::DangerSoft
        } else if checked {
            Role::Primary
        } else {
            Role::Track
        };
        let mut style = Style::default()
            .bg(self.palette.color(role))
            .fg(self.palette.color(Role::OnPrimary));
        if state.focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        dim_if(style, state.disabled)
    }
}

fn dim_if(style: Style, disabled: bool) -> Style {
    if disabled {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_table_rows() {
        assert_eq!(Size::Sm.rows(), 1);
        assert_eq!(Size::Md.rows(), 3);
        assert_eq!(Size::Lg.rows(), 3);
        assert!(Size::Lg.metrics().padding_x > Size::Md.metrics().padding_x);
        assert!(Size::Lg.metrics().switch_track > Size::Sm.metrics().switch_track);
    }

    #[test]
    fn palettes_cover_every_role() {
        assert_eq!(Palette::TRUECOLOR.color(Role::Track), Color::Rgb(0xe5, 0xe7, 0xeb));
        assert_eq!(Palette::ANSI.color(Role::Track), Color::DarkGray);
        assert_eq!(Palette::TRUECOLOR.color(Role::Primary), Color::Rgb(0x25, 0x63, 0xeb));
    }

    #[test]
    fn detect_prefers_explicit_mode() {
        assert_eq!(Palette::detect(Some("ansi"), Some("truecolor")), Palette::ANSI);
        assert_eq!(Palette::detect(Some(" TrueColor "), None), Palette::TRUECOLOR);
    }

    #[test]
    fn detect_falls_back_to_colorterm() {
        assert_eq!(Palette::detect(None, Some("24bit")), Palette::TRUECOLOR);
        assert_eq!(Palette::detect(Some("bogus"), None), Palette::ANSI);
        assert_eq!(Palette::detect(None, None), Palette::ANSI);
    }

    #[test]
    fn invalid_field_has_danger_border() {
        let theme = Theme::default();
        let state = State {
            invalid: true,
            ..State::default()
        };
        let surface = theme.field(Variant::Outlined, Size::Md, state);
        let (_, style) = surface.border.unwrap();
        assert_eq!(style.fg, Some(Palette::TRUECOLOR.color(Role::Danger)));
    }

    #[test]
    fn small_fields_have_no_border() {
        let theme = Theme::default();
        let surface = theme.field(Variant::Default, Size::Sm, State::default());
        assert!(surface.border.is_none());
        assert!(surface.block().is_none());
    }

    #[test]
    fn small_invalid_field_colors_text() {
        let theme = Theme::default();
        let state = State {
            invalid: true,
            ..State::default()
        };
        let surface = theme.field(Variant::Default, Size::Sm, state);
        assert_eq!(surface.fill.fg, Some(Palette::TRUECOLOR.color(Role::Danger)));
    }

    #[test]
    fn focus_highlights_border() {
        let theme = Theme::default();
        let state = State {
            focused: true,
            ..State::default()
        };
        let (_, style) = theme.field(Variant::Default, Size::Md, state).border.unwrap();
        assert_eq!(style.fg, Some(Palette::TRUECOLOR.color(Role::PrimaryHover)));
    }

    #[test]
    fn disabled_dims() {
        let theme = Theme::default();
        let state = State {
            disabled: true,
            ..State::default()
        };
        let surface = theme.button(ButtonVariant::Primary, Size::Md, state);
        assert!(surface.fill.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn variants_differ() {
        let theme = Theme::default();
        let default = theme.field(Variant::Default, Size::Md, State::default());
        let outlined = theme.field(Variant::Outlined, Size::Md, State::default());
        assert_ne!(default.fill.bg, outlined.fill.bg);
        assert_eq!(outlined.fill.bg, None);

        let primary = theme.button(ButtonVariant::Primary, Size::Md, State::default());
        let soft = theme.button(ButtonVariant::Soft, Size::Md, State::default());
        assert_eq!(primary.fill.fg, Some(Palette::TRUECOLOR.color(Role::OnPrimary)));
        assert_eq!(soft.fill.fg, Some(Palette::TRUECOLOR.color(Role::Primary)));
    }
}
