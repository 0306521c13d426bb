//! Shared types for **taro** list delegates.
//!
//! Item delegates are pure renderers, but they can also observe input through
//! an update hook. `taro-core` holds the two types that cross that boundary:
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`TerminalEvent`] | An input event forwarded by the enclosing list |
//! | [`Command`] | A follow-up effect handed back to the list or application |
//!
//! Nothing here touches the terminal. Whoever owns the event loop converts
//! crossterm events into [`TerminalEvent`]s and decides what to do with the
//! returned [`Command`]s.

pub mod command;
pub mod event;

pub use command::Command;
pub use event::TerminalEvent;
