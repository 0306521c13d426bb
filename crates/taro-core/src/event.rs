use crossterm::event::{KeyEvent, MouseEvent};

/// Terminal events forwarded from the enclosing list to its item delegate.
///
/// The list receives raw [`crossterm::event::Event`]s from whatever drives the
/// application and hands them, converted into `TerminalEvent`, to
/// the delegate's update hook before the next redraw.
///
/// # Example
///
/// ```rust,ignore
/// use taro_core::TerminalEvent;
///
/// fn wants_delete(ev: &TerminalEvent) -> bool {
///     matches!(ev.as_key(), Some(k) if k.code == KeyCode::Char('x'))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// The key event, if this is one.
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            TerminalEvent::Key(k) => Some(k),
            _ => None,
        }
    }
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(k) => TerminalEvent::Key(k),
            crossterm::event::Event::Mouse(m) => TerminalEvent::Mouse(m),
            crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            crossterm::event::Event::FocusGained => TerminalEvent::FocusGained,
            crossterm::event::Event::FocusLost => TerminalEvent::FocusLost,
            crossterm::event::Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}

impl From<KeyEvent> for TerminalEvent {
    fn from(key: KeyEvent) -> Self {
        TerminalEvent::Key(key)
    }
}
