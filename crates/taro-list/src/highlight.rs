//! Split text into styled runs by matched character positions.

use ratatui::style::Style;
use ratatui::text::Span;

/// Style the characters of `text` at `positions` with `matched` and the rest
/// with `unmatched`, merging neighbours that share a style into one span.
///
/// Positions are character (not byte) indices. They may arrive unsorted or
/// repeated; positions at or past the end of `text` are ignored.
///
/// ```
/// use ratatui::style::{Modifier, Style};
/// use taro_list::highlight::style_chars;
///
/// let em = Style::default().add_modifier(Modifier::UNDERLINED);
/// let spans = style_chars("Raspberry", &[0, 1], em, Style::default());
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].content, "Ra");
/// assert_eq!(spans[1].content, "spberry");
/// ```
pub fn style_chars(
    text: &str,
    positions: &[usize],
    matched: Style,
    unmatched: Style,
) -> Vec<Span<'static>> {
    let mut wanted = positions.to_vec();
    wanted.sort_unstable();
    wanted.dedup();
    let mut wanted = wanted.into_iter().peekable();

    let mut spans = Vec::new();
    let mut run_start = 0;
    let mut run_matched: Option<bool> = None;

    for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
        while wanted.next_if(|&p| p < char_idx).is_some() {}
        let is_match = wanted.next_if_eq(&char_idx).is_some();

        match run_matched {
            Some(prev) if prev == is_match => {}
            Some(prev) => {
                spans.push(run(&text[run_start..byte_idx], prev, matched, unmatched));
                run_start = byte_idx;
                run_matched = Some(is_match);
            }
            None => run_matched = Some(is_match),
        }
    }

    if let Some(prev) = run_matched {
        spans.push(run(&text[run_start..], prev, matched, unmatched));
    }
    spans
}

fn run(text: &str, is_match: bool, matched: Style, unmatched: Style) -> Span<'static> {
    Span::styled(text.to_string(), if is_match { matched } else { unmatched })
}
