//! Item delegates: how a list draws each of its rows.
//!
//! A list owns its items, scrolling and filtering. For every visible row it
//! asks an [`ItemDelegate`] how tall rows are, how much space goes between
//! them, and what the row at a given index looks like right now.
//!
//! [`DefaultDelegate`] renders a title line and an optional description line
//! for any item that exposes them through [`Item::as_titled`]. The title and
//! description are truncated to the row width, styled according to the
//! row's [`DisplayState`], and characters matching an active filter are
//! emphasised in the title.

use ratatui::text::Line;
use taro_core::{Command, TerminalEvent};

use crate::context::{DisplayState, ListContext};
use crate::highlight::style_chars;
use crate::item::Item;
use crate::key::{Binding, KeyMap};
use crate::runeutil::{fit, Fitted, ELLIPSIS};
use crate::style::ItemStyles;

/// What happened when a row was asked to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Lines were written to the sink.
    Rendered,
    /// The item cannot be drawn by this delegate; nothing was written.
    Unsupported,
}

impl RenderOutcome {
    pub fn is_rendered(self) -> bool {
        self == RenderOutcome::Rendered
    }
}

/// Trait for rendering list rows.
///
/// The list calls [`height`](ItemDelegate::height) and
/// [`spacing`](ItemDelegate::spacing) to lay out pages, so both must be exact
/// and cheap. [`render`](ItemDelegate::render) appends one row's lines to
/// `out`; it must not mutate anything. Input reaches the delegate only
/// through [`update`](ItemDelegate::update), which the list calls outside of
/// rendering.
pub trait ItemDelegate<I: Item>: Send + Sync {
    /// Message type produced by [`update`](ItemDelegate::update).
    type Message: Send + 'static;

    /// Lines per row.
    fn height(&self) -> u16;

    /// Blank lines between consecutive rows.
    fn spacing(&self) -> u16;

    /// React to an input event, optionally changing list state before the
    /// next frame.
    fn update(&self, _event: &TerminalEvent, _ctx: &mut ListContext) -> Command<Self::Message> {
        Command::none()
    }

    /// Append the lines for row `index` to `out`.
    fn render(
        &self,
        out: &mut Vec<Line<'static>>,
        ctx: &ListContext,
        index: usize,
        item: &I,
    ) -> RenderOutcome;

    /// Bindings to add to the list's short help.
    fn short_help(&self) -> Vec<&Binding> {
        Vec::new()
    }

    /// Binding groups to add to the list's full help.
    fn full_help(&self) -> Vec<Vec<&Binding>> {
        Vec::new()
    }
}

/// Row configuration handed to a [`RowRenderer`].
#[derive(Debug, Clone, Copy)]
pub struct RowLayout<'a> {
    pub styles: &'a ItemStyles,
    pub show_description: bool,
}

/// Strategy that turns one item into lines.
///
/// [`DefaultDelegate`] uses [`StandardRenderer`] unless another renderer is
/// installed with [`DefaultDelegate::with_renderer`]. Closures with the
/// matching signature implement this trait.
pub trait RowRenderer: Send + Sync {
    fn render(
        &self,
        layout: &RowLayout<'_>,
        out: &mut Vec<Line<'static>>,
        ctx: &ListContext,
        index: usize,
        item: &dyn Item,
    ) -> RenderOutcome;
}

impl<F> RowRenderer for F
where
    F: Fn(&RowLayout<'_>, &mut Vec<Line<'static>>, &ListContext, usize, &dyn Item) -> RenderOutcome
        + Send
        + Sync,
{
    fn render(
        &self,
        layout: &RowLayout<'_>,
        out: &mut Vec<Line<'static>>,
        ctx: &ListContext,
        index: usize,
        item: &dyn Item,
    ) -> RenderOutcome {
        self(layout, out, ctx, index, item)
    }
}

/// Hook that sees input events before the list redraws.
///
/// Closures taking `(&TerminalEvent, &mut ListContext)` and returning a
/// [`Command`] implement this trait.
///
/// # Example
///
/// A list hands each event to its delegate, then lifts the delegate's
/// messages into its own message type and feeds them back into its update:
///
/// ```
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
/// use taro_core::{Command, TerminalEvent};
/// use taro_list::{DefaultDelegate, DefaultItem, ItemDelegate, ListContext};
///
/// #[derive(Debug, PartialEq)]
/// enum ListMsg {
///     Delegate(usize),
/// }
///
/// let delegate = DefaultDelegate::new().with_update(
///     |event: &TerminalEvent, ctx: &mut ListContext| match event.as_key() {
///         Some(k) if k.code == KeyCode::Char('x') => Command::batch([
///             Command::message(ctx.index()),
///             Command::perform(async { 0 }, |n| n),
///         ]),
///         _ => Command::none(),
///     },
/// );
///
/// let mut ctx = ListContext::new().with_selected(3);
/// let press = TerminalEvent::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
/// let cmd = ItemDelegate::<DefaultItem>::update(&delegate, &press, &mut ctx);
///
/// // Async work goes to the runtime; immediate messages are handled now.
/// let msgs = cmd.map(ListMsg::Delegate).into_messages();
/// assert_eq!(msgs, vec![ListMsg::Delegate(3)]);
/// ```
pub trait DelegateUpdate<M: Send + 'static>: Send + Sync {
    fn update(&self, event: &TerminalEvent, ctx: &mut ListContext) -> Command<M>;
}

impl<M, F> DelegateUpdate<M> for F
where
    M: Send + 'static,
    F: Fn(&TerminalEvent, &mut ListContext) -> Command<M> + Send + Sync,
{
    fn update(&self, event: &TerminalEvent, ctx: &mut ListContext) -> Command<M> {
        self(event, ctx)
    }
}

/// Update hook that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreEvents;

impl<M: Send + 'static> DelegateUpdate<M> for IgnoreEvents {
    fn update(&self, _event: &TerminalEvent, _ctx: &mut ListContext) -> Command<M> {
        Command::none()
    }
}

/// The built-in row renderer: truncate, pick a style, highlight matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRenderer;

impl RowRenderer for StandardRenderer {
    fn render(
        &self,
        layout: &RowLayout<'_>,
        out: &mut Vec<Line<'static>>,
        ctx: &ListContext,
        index: usize,
        item: &dyn Item,
    ) -> RenderOutcome {
        let Some(titled) = item.as_titled() else {
            tracing::trace!(index, "item has no title or description, row left empty");
            return RenderOutcome::Unsupported;
        };
        let styles = layout.styles;

        // Padding is not part of the text budget. Measuring against the
        // normal title keeps every state's text in the same columns.
        let text_width = match ctx.width() {
            0 => None,
            w => Some(usize::from(
                w.saturating_sub(styles.normal_title.horizontal_padding()),
            )),
        };

        let state = ctx.display_state(index);
        let (title_style, desc_style) = styles.for_state(state);
        let title = fit_within(titled.title(), text_width);

        let matches = ctx.matches_for_item(index);
        let highlight = ctx.is_filtered() && !matches.is_empty() && state != DisplayState::Dimmed;

        let title_line = if highlight {
            let unmatched = title_style.inline();
            let matched = unmatched.patch(styles.filter_match);

            // Positions index the truncated title, ellipsis included.
            let text = title.to_text();
            let len = text.chars().count();
            let dropped = matches.iter().filter(|&&p| p >= len).count();
            if dropped > 0 {
                tracing::trace!(
                    index,
                    dropped,
                    len,
                    filter = %ctx.filter_state(),
                    "match positions past truncated title dropped"
                );
            }

            let runs = style_chars(&text, matches, matched, unmatched);
            title_style.render_spans(runs)
        } else {
            title_style.render(title.to_text())
        };
        out.push(title_line);

        if layout.show_description {
            let desc = fit_within(titled.description(), text_width);
            out.push(desc_style.render(desc.to_text()));
        }
        RenderOutcome::Rendered
    }
}

fn fit_within(text: &str, width: Option<usize>) -> Fitted<'_> {
    match width {
        Some(w) => fit(text, w, ELLIPSIS),
        None => Fitted {
            kept: text,
            tail: "",
            truncated: false,
        },
    }
}

/// A standard delegate for titled items, styled by [`ItemStyles`].
///
/// The description line can be hidden with
/// [`with_show_description(false)`](DefaultDelegate::with_show_description),
/// which renders single-line rows. Spacing between rows defaults to one
/// line.
///
/// Rendering can be replaced wholesale with
/// [`with_renderer`](DefaultDelegate::with_renderer), and an input hook
/// installed with [`with_update`](DefaultDelegate::with_update). Bindings
/// from [`with_key_map`](DefaultDelegate::with_key_map) are advertised in the
/// list's help.
///
/// # Example
///
/// ```ignore
/// let delegate = DefaultDelegate::new()
///     .with_styles(ItemStyles::new(Background::Light))
///     .with_update(|event: &TerminalEvent, ctx: &mut ListContext| {
///         if matches!(event.as_key(), Some(k) if k.code == KeyCode::Char('x')) {
///             return Command::message(Msg::Remove(ctx.index()));
///         }
///         Command::none()
///     });
/// ```
pub struct DefaultDelegate<M: Send + 'static = ()> {
    /// Render the description under the title.
    pub show_description: bool,
    pub styles: ItemStyles,
    spacing: u16,
    renderer: Box<dyn RowRenderer>,
    updater: Box<dyn DelegateUpdate<M>>,
    key_map: Option<Box<dyn KeyMap>>,
}

impl DefaultDelegate {
    /// Create a two-line delegate with default styles.
    pub fn new() -> Self {
        Self {
            show_description: true,
            styles: ItemStyles::default(),
            spacing: 1,
            renderer: Box::new(StandardRenderer),
            updater: Box::new(IgnoreEvents),
            key_map: None,
        }
    }
}

impl Default for DefaultDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Send + 'static> DefaultDelegate<M> {
    /// Show or hide the description line.
    pub fn with_show_description(mut self, show: bool) -> Self {
        self.show_description = show;
        self
    }

    /// Replace the style table.
    pub fn with_styles(mut self, styles: ItemStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Set the number of blank lines between rows.
    pub fn with_spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the number of blank lines between rows.
    pub fn set_spacing(&mut self, spacing: u16) {
        self.spacing = spacing;
    }

    /// Replace the built-in row rendering.
    pub fn with_renderer(mut self, renderer: impl RowRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Install an input hook. The delegate's message type becomes the hook's.
    pub fn with_update<N: Send + 'static>(
        self,
        hook: impl DelegateUpdate<N> + 'static,
    ) -> DefaultDelegate<N> {
        DefaultDelegate {
            show_description: self.show_description,
            styles: self.styles,
            spacing: self.spacing,
            renderer: self.renderer,
            updater: Box::new(hook),
            key_map: self.key_map,
        }
    }

    /// Advertise bindings in the list's help.
    pub fn with_key_map(mut self, key_map: impl KeyMap + 'static) -> Self {
        self.key_map = Some(Box::new(key_map));
        self
    }

    fn layout(&self) -> RowLayout<'_> {
        RowLayout {
            styles: &self.styles,
            show_description: self.show_description,
        }
    }
}

impl<I: Item, M: Send + 'static> ItemDelegate<I> for DefaultDelegate<M> {
    type Message = M;

    fn height(&self) -> u16 {
        if self.show_description {
            2
        } else {
            1
        }
    }

    fn spacing(&self) -> u16 {
        self.spacing
    }

    fn update(&self, event: &TerminalEvent, ctx: &mut ListContext) -> Command<M> {
        self.updater.update(event, ctx)
    }

    fn render(
        &self,
        out: &mut Vec<Line<'static>>,
        ctx: &ListContext,
        index: usize,
        item: &I,
    ) -> RenderOutcome {
        self.renderer.render(&self.layout(), out, ctx, index, item)
    }

    fn short_help(&self) -> Vec<&Binding> {
        self.key_map
            .as_ref()
            .map_or_else(Vec::new, |k| k.short_help())
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        self.key_map
            .as_ref()
            .map_or_else(Vec::new, |k| k.full_help())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FilterState;
    use crate::item::DefaultItem;
    use crate::key::KeyCombination;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::style::Style;
    use ratatui::text::Span;

    fn pi() -> DefaultItem {
        DefaultItem::new("Raspberry Pi's", "It's a tiny computer!")
    }

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render(d: &DefaultDelegate, ctx: &ListContext, index: usize) -> Vec<Line<'static>> {
        let mut out = Vec::new();
        let outcome = ItemDelegate::<DefaultItem>::render(d, &mut out, ctx, index, &pi());
        assert!(outcome.is_rendered());
        out
    }

    #[test]
    fn height_follows_description_flag() {
        let d = DefaultDelegate::new();
        assert_eq!(ItemDelegate::<DefaultItem>::height(&d), 2);
        let d = d.with_show_description(false);
        assert_eq!(ItemDelegate::<DefaultItem>::height(&d), 1);
    }

    #[test]
    fn spacing_defaults_to_one_and_is_settable() {
        let mut d = DefaultDelegate::new();
        assert_eq!(ItemDelegate::<DefaultItem>::spacing(&d), 1);
        d.set_spacing(3);
        assert_eq!(ItemDelegate::<DefaultItem>::spacing(&d), 3);
    }

    #[test]
    fn single_line_layout_emits_title_only() {
        let d = DefaultDelegate::new().with_show_description(false);
        let out = render(&d, &ListContext::new(), 0);
        assert_eq!(out.len(), 1);
        assert!(plain(&out[0]).ends_with("Raspberry Pi's"));
    }

    #[test]
    fn unsupported_item_writes_nothing() {
        let d = DefaultDelegate::new();
        let mut out = Vec::new();
        let outcome = d.render(&mut out, &ListContext::new(), 0, &"just a string");
        assert_eq!(outcome, RenderOutcome::Unsupported);
        assert!(out.is_empty());
    }

    #[test]
    fn text_that_fits_is_untouched() {
        let d = DefaultDelegate::new();
        let out = render(&d, &ListContext::new().with_width(80).with_selected(9), 0);
        assert_eq!(plain(&out[0]), "  Raspberry Pi's");
        assert_eq!(plain(&out[1]), "  It's a tiny computer!");
    }

    #[test]
    fn title_and_description_truncate_independently() {
        let d = DefaultDelegate::new();
        let out = render(&d, &ListContext::new().with_width(18).with_selected(9), 0);
        // 18 cells minus 2 of padding leaves 16 for text.
        assert_eq!(plain(&out[0]), "  Raspberry Pi's");
        assert_eq!(plain(&out[1]), "  It's a tiny com\u{2026}");
    }

    #[test]
    fn width_smaller_than_padding_leaves_no_text() {
        let d = DefaultDelegate::new().with_show_description(false);
        let out = render(&d, &ListContext::new().with_width(1).with_selected(9), 0);
        assert_eq!(plain(&out[0]), "  ");
    }

    #[test]
    fn dimmed_rows_are_not_highlighted() {
        let d = DefaultDelegate::new();
        let ctx = ListContext::new()
            .with_filter(FilterState::Filtering, "")
            .with_matches(vec![vec![0, 1]]);
        let out = render(&d, &ctx, 0);
        assert_eq!(out[0], d.styles.dimmed_title.render("Raspberry Pi's"));
    }

    fn numbered(
        _: &RowLayout<'_>,
        out: &mut Vec<Line<'static>>,
        _: &ListContext,
        index: usize,
        item: &dyn Item,
    ) -> RenderOutcome {
        out.push(Line::raw(format!("{index}: {}", item.filter_value())));
        RenderOutcome::Rendered
    }

    #[test]
    fn custom_renderer_replaces_builtin() {
        let d = DefaultDelegate::new().with_renderer(numbered);
        let mut out = Vec::new();
        let outcome = d.render(&mut out, &ListContext::new(), 4, &"plain");
        assert!(outcome.is_rendered());
        assert_eq!(out, vec![Line::raw("4: plain")]);
    }

    #[derive(Debug, PartialEq)]
    enum Msg {
        Remove(usize),
    }

    #[test]
    fn update_hook_can_move_selection_and_emit_commands() {
        let d = DefaultDelegate::new().with_update(|event: &TerminalEvent, ctx: &mut ListContext| {
            match event.as_key().map(|k| k.code) {
                Some(KeyCode::Char('x')) => Command::message(Msg::Remove(ctx.index())),
                Some(KeyCode::Char('n')) => {
                    ctx.select(ctx.index() + 1);
                    Command::none()
                }
                _ => Command::none(),
            }
        });
        let mut ctx = ListContext::new().with_selected(2);

        let press = |c| TerminalEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        let cmd = ItemDelegate::<DefaultItem>::update(&d, &press('n'), &mut ctx);
        assert!(cmd.is_none());
        assert_eq!(ctx.index(), 3);

        let cmd = ItemDelegate::<DefaultItem>::update(&d, &press('x'), &mut ctx);
        assert_eq!(cmd.into_message(), Some(Msg::Remove(3)));
    }

    #[test]
    fn default_update_ignores_events() {
        let d = DefaultDelegate::new();
        let mut ctx = ListContext::new();
        let cmd = ItemDelegate::<DefaultItem>::update(&d, &TerminalEvent::FocusLost, &mut ctx);
        assert!(cmd.is_none());
        assert_eq!(ctx, ListContext::new());
    }

    struct PiKeys {
        choose: Binding,
        remove: Binding,
    }

    impl KeyMap for PiKeys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.choose]
        }

        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.choose, &self.remove]]
        }
    }

    #[test]
    fn help_is_empty_until_key_map_is_set() {
        let d = DefaultDelegate::new();
        assert!(ItemDelegate::<DefaultItem>::short_help(&d).is_empty());
        assert!(ItemDelegate::<DefaultItem>::full_help(&d).is_empty());

        let d = d.with_key_map(PiKeys {
            choose: Binding::new(KeyCombination::new(KeyCode::Enter), "choose"),
            remove: Binding::new(KeyCombination::new(KeyCode::Char('x')), "remove"),
        });
        let short = ItemDelegate::<DefaultItem>::short_help(&d);
        assert_eq!(short.len(), 1);
        assert_eq!(short[0].description, "choose");
        assert_eq!(ItemDelegate::<DefaultItem>::full_help(&d)[0].len(), 2);
    }

    #[test]
    fn plain_styles_render_bare_text() {
        let d = DefaultDelegate::new().with_styles(ItemStyles::plain());
        let out = render(&d, &ListContext::new(), 0);
        assert_eq!(out[0], Line::from(vec![Span::styled("Raspberry Pi's", Style::default())]));
    }
}
