//! Row styles for the default item delegate.
//!
//! [`ItemStyle`] is the styling primitive used for every row: a ratatui
//! [`Style`] for the text plus left/right padding and an optional left
//! border. [`ItemStyles`] is the table the delegate picks from, one title and
//! one description style per [`DisplayState`], plus the emphasis layered onto
//! characters that matched the filter.

use std::borrow::Cow;

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::line;
use ratatui::text::{Line, Span};

use crate::context::DisplayState;

/// Errors raised while building styles from configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The string is not a colour ratatui understands (`#rrggbb`, a name, or
    /// an ANSI index).
    #[error("invalid color {input:?}")]
    InvalidColor { input: String },
}

/// The terminal background a palette is chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    Light,
    #[default]
    Dark,
}

/// A colour pair that resolves against the terminal background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveColor {
    /// Used on light backgrounds.
    pub light: Color,
    /// Used on dark backgrounds.
    pub dark: Color,
}

impl AdaptiveColor {
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Parse both halves from colour strings such as `"#1a1a1a"`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] naming the first string that
    /// does not parse.
    pub fn from_hex(light: &str, dark: &str) -> Result<Self, StyleError> {
        Ok(Self {
            light: parse_color(light)?,
            dark: parse_color(dark)?,
        })
    }

    /// Pick the colour for the given background.
    pub const fn resolve(self, background: Background) -> Color {
        match background {
            Background::Light => self.light,
            Background::Dark => self.dark,
        }
    }
}

fn parse_color(input: &str) -> Result<Color, StyleError> {
    input.parse::<Color>().map_err(|_| StyleError::InvalidColor {
        input: input.to_string(),
    })
}

/// A left-edge border drawn once per rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub symbol: Cow<'static, str>,
    pub style: Style,
}

/// Style for one line of a row: text style, padding and an optional border.
///
/// Deriving a variant always returns a new value, so a base style can be
/// shared freely between states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemStyle {
    /// Style applied to the text itself.
    pub text: Style,
    /// Blank cells between the border (or line start) and the text.
    pub padding_left: u16,
    /// Blank cells after the text.
    pub padding_right: u16,
    /// Optional border drawn before the left padding.
    pub border_left: Option<Border>,
}

impl ItemStyle {
    /// An unstyled, unpadded line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text foreground colour.
    pub fn fg(mut self, color: Color) -> Self {
        self.text = self.text.fg(color);
        self
    }

    /// Replace the text style.
    pub fn with_text(mut self, text: Style) -> Self {
        self.text = text;
        self
    }

    /// Set left and right padding in cells.
    pub fn with_padding(mut self, left: u16, right: u16) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    /// Draw `symbol` in `style` at the left edge of the line.
    pub fn with_border_left(mut self, symbol: impl Into<Cow<'static, str>>, style: Style) -> Self {
        self.border_left = Some(Border {
            symbol: symbol.into(),
            style,
        });
        self
    }

    /// Total horizontal padding in cells.
    pub fn horizontal_padding(&self) -> u16 {
        self.padding_left.saturating_add(self.padding_right)
    }

    /// The bare text style, for styling runs inside a line without repeating
    /// padding or border.
    pub fn inline(&self) -> Style {
        self.text
    }

    /// Render `text` as a complete line.
    pub fn render(&self, text: impl Into<Cow<'static, str>>) -> Line<'static> {
        self.render_spans(vec![Span::styled(text, self.text)])
    }

    /// Wrap already styled runs with this style's border and padding.
    ///
    /// The runs keep their own styles. Border and padding appear exactly
    /// once, however many runs there are.
    pub fn render_spans(&self, content: Vec<Span<'static>>) -> Line<'static> {
        let mut spans = Vec::with_capacity(content.len() + 3);
        if let Some(border) = &self.border_left {
            spans.push(Span::styled(border.symbol.clone(), border.style));
        }
        if self.padding_left > 0 {
            spans.push(Span::styled(
                " ".repeat(self.padding_left as usize),
                self.padding_style(),
            ));
        }
        spans.extend(content);
        if self.padding_right > 0 {
            spans.push(Span::styled(
                " ".repeat(self.padding_right as usize),
                self.padding_style(),
            ));
        }
        Line::from(spans)
    }

    // Padding carries the background only, never underline or colour.
    fn padding_style(&self) -> Style {
        match self.text.bg {
            Some(bg) => Style::default().bg(bg),
            None => Style::default(),
        }
    }
}

/// Style definitions for the default item delegate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStyles {
    /// Title of an unselected row.
    pub normal_title: ItemStyle,
    /// Description of an unselected row.
    pub normal_desc: ItemStyle,
    /// Title of the selected row.
    pub selected_title: ItemStyle,
    /// Description of the selected row.
    pub selected_desc: ItemStyle,
    /// Title while the filter input is open but still empty.
    pub dimmed_title: ItemStyle,
    /// Description while the filter input is open but still empty.
    pub dimmed_desc: ItemStyle,
    /// Layered on top of the title style for characters matching the filter.
    pub filter_match: Style,
}

const TEXT: AdaptiveColor = AdaptiveColor::new(
    Color::Rgb(0x1a, 0x1a, 0x1a),
    Color::Rgb(0xdd, 0xdd, 0xdd),
);
const SUBDUED: AdaptiveColor = AdaptiveColor::new(
    Color::Rgb(0xa4, 0x9f, 0xa5),
    Color::Rgb(0x77, 0x77, 0x77),
);
const FAINT: AdaptiveColor = AdaptiveColor::new(
    Color::Rgb(0xc2, 0xb8, 0xc2),
    Color::Rgb(0x4d, 0x4d, 0x4d),
);
const ACCENT: AdaptiveColor = AdaptiveColor::new(
    Color::Rgb(0xee, 0x6f, 0xf8),
    Color::Rgb(0xee, 0x6f, 0xf8),
);
const ACCENT_BORDER: AdaptiveColor = AdaptiveColor::new(
    Color::Rgb(0xf7, 0x93, 0xff),
    Color::Rgb(0xad, 0x58, 0xb4),
);

impl ItemStyles {
    /// Default palette resolved for the given terminal background.
    ///
    /// Normal and dimmed rows are indented by two cells; the selected row
    /// trades one of those cells for an accent-coloured left border, so the
    /// text of every state starts in the same column.
    pub fn new(background: Background) -> Self {
        let normal_title = ItemStyle::new()
            .fg(TEXT.resolve(background))
            .with_padding(2, 0);
        let normal_desc = normal_title.clone().fg(SUBDUED.resolve(background));

        let border = ACCENT_BORDER.resolve(background);
        let selected_title = ItemStyle::new()
            .fg(ACCENT.resolve(background))
            .with_padding(1, 0)
            .with_border_left(line::VERTICAL, Style::default().fg(border));
        let selected_desc = selected_title.clone().fg(border);

        let dimmed_title = ItemStyle::new()
            .fg(SUBDUED.resolve(background))
            .with_padding(2, 0);
        let dimmed_desc = dimmed_title.clone().fg(FAINT.resolve(background));

        Self {
            normal_title,
            normal_desc,
            selected_title,
            selected_desc,
            dimmed_title,
            dimmed_desc,
            filter_match: Style::default().add_modifier(Modifier::UNDERLINED),
        }
    }

    /// Every slot unstyled and unpadded.
    pub fn plain() -> Self {
        Self {
            normal_title: ItemStyle::new(),
            normal_desc: ItemStyle::new(),
            selected_title: ItemStyle::new(),
            selected_desc: ItemStyle::new(),
            dimmed_title: ItemStyle::new(),
            dimmed_desc: ItemStyle::new(),
            filter_match: Style::default(),
        }
    }

    /// The (title, description) pair for a display state.
    pub fn for_state(&self, state: DisplayState) -> (&ItemStyle, &ItemStyle) {
        match state {
            DisplayState::Normal => (&self.normal_title, &self.normal_desc),
            DisplayState::Selected => (&self.selected_title, &self.selected_desc),
            DisplayState::Dimmed => (&self.dimmed_title, &self.dimmed_desc),
        }
    }
}

impl Default for ItemStyles {
    fn default() -> Self {
        Self::new(Background::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptive_color_resolves_by_background() {
        let c = AdaptiveColor::new(Color::Black, Color::White);
        assert_eq!(c.resolve(Background::Light), Color::Black);
        assert_eq!(c.resolve(Background::Dark), Color::White);
    }

    #[test]
    fn adaptive_color_from_hex() {
        let c = AdaptiveColor::from_hex("#1a1a1a", "#dddddd").unwrap();
        assert_eq!(c, TEXT);
    }

    #[test]
    fn adaptive_color_rejects_garbage() {
        let err = AdaptiveColor::from_hex("#1a1a1a", "not-a-colour").unwrap_err();
        assert_eq!(
            err,
            StyleError::InvalidColor {
                input: "not-a-colour".into()
            }
        );
    }

    #[test]
    fn render_applies_border_and_padding_once() {
        let style = ItemStyle::new()
            .with_padding(1, 2)
            .with_border_left("|", Style::default());
        let line = style.render_spans(vec![Span::raw("a"), Span::raw("b"), Span::raw("c")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "| abc  ");
        assert_eq!(line.spans.iter().filter(|s| s.content == "|").count(), 1);
    }

    #[test]
    fn padding_does_not_inherit_modifiers() {
        let style = ItemStyle::new()
            .with_text(Style::default().bg(Color::Blue).add_modifier(Modifier::UNDERLINED))
            .with_padding(1, 0);
        let line = style.render("x");
        assert_eq!(line.spans[0].style, Style::default().bg(Color::Blue));
    }

    #[test]
    fn default_states_keep_text_aligned() {
        let styles = ItemStyles::default();
        let indent = |s: &ItemStyle| {
            s.padding_left as usize
                + s.border_left
                    .as_ref()
                    .map_or(0, |b| crate::runeutil::display_width(&b.symbol))
        };
        assert_eq!(indent(&styles.normal_title), 2);
        assert_eq!(indent(&styles.selected_title), 2);
        assert_eq!(indent(&styles.dimmed_title), 2);
        assert_eq!(styles.normal_title.horizontal_padding(), 2);
    }

    #[test]
    fn light_and_dark_palettes_differ() {
        assert_ne!(
            ItemStyles::new(Background::Light).normal_title,
            ItemStyles::new(Background::Dark).normal_title
        );
    }

    #[test]
    fn for_state_picks_matching_pair() {
        let styles = ItemStyles::default();
        let (t, d) = styles.for_state(DisplayState::Selected);
        assert_eq!(t, &styles.selected_title);
        assert_eq!(d, &styles.selected_desc);
    }
}
