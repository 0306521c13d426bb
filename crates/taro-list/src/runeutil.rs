//! Unicode text utilities for row rendering.
//!
//! Widths are measured in terminal cells with [`unicode_width`], and text is
//! only ever cut between extended grapheme clusters, so combining marks and
//! emoji sequences are kept whole and wide glyphs never overflow a budget.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The single-cell indicator appended to truncated text.
pub const ELLIPSIS: &str = "\u{2026}"; // "…"

/// Calculate the display width of a string in terminal cells.
///
/// East Asian wide and fullwidth characters count as 2 cells, zero-width
/// and combining characters as 0.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Return the longest prefix of `s` that fits within `max_width` cells,
/// cutting only at grapheme boundaries.
pub fn take_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, grapheme) in s.grapheme_indices(true) {
        let gw = display_width(grapheme);
        if width + gw > max_width {
            return &s[..idx];
        }
        width += gw;
    }
    s
}

/// The result of fitting text into a cell budget.
///
/// `kept` is the untouched prefix of the input and `tail` the (possibly
/// shortened) indicator that follows it. Rendering the pair in order never
/// exceeds the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fitted<'a> {
    /// Prefix of the original text that survived.
    pub kept: &'a str,
    /// Indicator appended after `kept`. Empty when nothing was cut.
    pub tail: &'a str,
    /// Whether any of the original text was dropped.
    pub truncated: bool,
}

impl Fitted<'_> {
    /// Concatenate the kept prefix and the tail.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.kept.len() + self.tail.len());
        out.push_str(self.kept);
        out.push_str(self.tail);
        out
    }
}

/// Fit `s` into `max_width` cells, reserving room for `tail` when the text
/// has to be cut.
///
/// If the tail alone is at least as wide as the budget, nothing of `s`
/// survives and the tail itself is shortened to fit.
///
/// # Examples
///
/// ```
/// use taro_list::runeutil::{fit, ELLIPSIS};
///
/// let f = fit("Raspberry Pi's", 8, ELLIPSIS);
/// assert_eq!(f.kept, "Raspber");
/// assert_eq!(f.to_text(), "Raspber\u{2026}");
///
/// assert_eq!(fit("hello world", 8, "...").to_text(), "hello...");
/// assert!(!fit("hi", 10, "...").truncated);
/// ```
pub fn fit<'a>(s: &'a str, max_width: usize, tail: &'a str) -> Fitted<'a> {
    if display_width(s) <= max_width {
        return Fitted {
            kept: s,
            tail: "",
            truncated: false,
        };
    }

    let tail_width = display_width(tail);
    if tail_width >= max_width {
        return Fitted {
            kept: "",
            tail: take_width(tail, max_width),
            truncated: true,
        };
    }

    Fitted {
        kept: take_width(s, max_width - tail_width),
        tail,
        truncated: true,
    }
}
