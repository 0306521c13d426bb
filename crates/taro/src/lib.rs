//! **taro** -- styled, filter-aware list rows for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything needed to draw
//! list rows from a single dependency:
//!
//! ```toml
//! [dependencies]
//! taro = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`taro_core`] are available at the crate root
//!   ([`Command`], [`TerminalEvent`]).
//! * The [`list`] module re-exports everything from [`taro_list`]
//!   (delegates, styles, list context, truncation helpers).
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do
//!   not need to depend on them directly.
//!
//! # Quick start
//!
//! ```
//! use taro::list::{DefaultDelegate, DefaultItem, FilterState, ItemDelegate, ListContext};
//!
//! let delegate = DefaultDelegate::new();
//! let ctx = ListContext::new()
//!     .with_width(30)
//!     .with_filter(FilterState::FilterApplied, "ra")
//!     .with_matches(vec![vec![0, 1]]);
//!
//! let mut lines = Vec::new();
//! delegate.render(&mut lines, &ctx, 0, &DefaultItem::new("Raspberry Pi's", "Tiny"));
//! assert_eq!(lines.len(), 2);
//! ```

pub use taro_core::*;
pub mod list {
    pub use taro_list::*;
}

// Re-export dependencies for downstream crates
pub use crossterm;
pub use ratatui;
