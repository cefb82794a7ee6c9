//! DOM capability the controller needs from its host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches `web_sys` directly. Element lookup, class
//! and inline-style mutation, and containment checks all go through
//! [`MenuDom`], which the browser binding implements over the live document
//! and tests implement over an in-memory tree.

use super::state::Display;

/// Element lookup and mutation over some document.
///
/// Methods take `&self`: a DOM is shared, interior-mutable state, and a
/// controller only ever holds one handle to it.
pub trait MenuDom {
    /// Cheap, cloneable handle to one element.
    type Node: Clone;

    /// First element in the document carrying `class`.
    fn first_by_class(&self, class: &str) -> Option<Self::Node>;

    /// Element whose identifier is `id`.
    fn by_id(&self, id: &str) -> Option<Self::Node>;

    /// Every element in the document carrying `class`, in document order.
    fn all_by_class(&self, class: &str) -> Vec<Self::Node>;

    /// First descendant of `root` carrying `class`.
    fn descendant_by_class(&self, root: &Self::Node, class: &str) -> Option<Self::Node>;

    /// Whether `node` is `ancestor` or lies inside it.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Whether `node` is still attached to the document.
    fn is_connected(&self, node: &Self::Node) -> bool;

    /// Add or remove `class` on `node`.
    fn set_class(&self, node: &Self::Node, class: &str, present: bool);

    /// Set the inline `display` style of `node`.
    fn set_display(&self, node: &Self::Node, display: Display);
}

/// A click as seen by the menu's listeners.
#[derive(Debug, Clone)]
pub struct ClickEvent<N> {
    pub target: N,
    propagation_stopped: bool,
}

impl<N> ClickEvent<N> {
    #[must_use]
    pub fn new(target: N) -> Self {
        Self { target, propagation_stopped: false }
    }

    /// Prevent listeners further up the tree (the document) from seeing this click.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    #[must_use]
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
