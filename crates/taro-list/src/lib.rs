//! Item delegates for **taro** lists.
//!
//! A list widget owns its items, scrolling and filtering; an
//! [`ItemDelegate`] decides what each visible row looks like. This crate
//! provides the delegate trait, a [`DefaultDelegate`] that draws a title and
//! description for any [`TitledItem`], and the pieces it is built from.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`context`] | [`ListContext`]: the list state a delegate may observe |
//! | [`delegate`] | [`ItemDelegate`], [`DefaultDelegate`] and render/update hooks |
//! | [`highlight`] | Splitting text into matched/unmatched styled runs |
//! | [`item`] | [`Item`] and [`TitledItem`] traits |
//! | [`key`] | Key bindings advertised to help overlays |
//! | [`runeutil`] | Grapheme-aware width measurement and truncation |
//! | [`style`] | [`ItemStyle`] and the per-state [`ItemStyles`] table |
//!
//! # Example
//!
//! ```
//! use taro_list::{DefaultDelegate, DefaultItem, ItemDelegate, ListContext};
//!
//! let delegate = DefaultDelegate::new();
//! let ctx = ListContext::new().with_width(40);
//! let item = DefaultItem::new("Raspberry Pi's", "It's a tiny computer!");
//!
//! let mut lines = Vec::new();
//! let outcome = delegate.render(&mut lines, &ctx, 0, &item);
//! assert!(outcome.is_rendered());
//! assert_eq!(lines.len(), 2);
//! ```

pub mod context;
pub mod delegate;
pub mod highlight;
pub mod item;
pub mod key;
pub mod runeutil;
pub mod style;

pub use context::{DisplayState, FilterState, ListContext};
pub use delegate::{
    DefaultDelegate, DelegateUpdate, IgnoreEvents, ItemDelegate, RenderOutcome, RowLayout,
    RowRenderer, StandardRenderer,
};
pub use item::{DefaultItem, Item, TitledItem};
pub use key::{Binding, KeyCombination, KeyMap};
pub use style::{AdaptiveColor, Background, Border, ItemStyle, ItemStyles, StyleError};
