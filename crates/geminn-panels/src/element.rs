//! Host capabilities
//!
//! The toggling logic never touches a real DOM. Hosts hand it elements that
//! can report and change their hidden marker, click events that can cancel
//! their default action, and a way to run a static selector query.

/// An element whose visibility is driven by a marker class
pub trait ToggleableElement {
    /// Whether the hidden marker is currently present
    fn is_hidden(&self) -> bool;

    fn set_hidden(&self, hidden: bool);

    /// Flip the marker based on this element's own current state
    fn toggle(&self) {
        self.set_hidden(!self.is_hidden());
    }
}

/// The click delivered to a tab handler
pub trait ClickEvent {
    /// Suppress the browser's default action (e.g. anchor navigation)
    fn prevent_default(&self);
}

/// Static element lookup, queried once per selector at construction time.
///
/// A selector that matches nothing yields an empty vector, never an error.
pub trait ElementSource<E> {
    fn select_all(&self, selector: &str) -> Vec<E>;
}
