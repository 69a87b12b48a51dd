// triwin/src/event.rs
//
//! Events taken off the native event queue.

/// A single event taken off the native event queue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// The user asked to close the window via the window manager.
    CloseRequested,
    /// A key was pressed while the window had focus.
    KeyPressed(Key),
}

/// The keys the event loop distinguishes. Everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Key {
    Escape,
    Q,
    Other,
}
