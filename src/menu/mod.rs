//! Collapsible navigation menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state` is the pure two-state machine, `dom` the capability seam to the
//! host page, and `controller` wires the two together behind the `Toggle`
//! and `Dismissable` traits. `browser` (hydrate only) attaches a controller
//! to the live document with real listeners and timers.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod controller;
pub mod dom;
pub mod state;

#[cfg(test)]
pub(crate) mod fake_dom;

pub use controller::{CloseTicket, Dismissable, MenuController, MenuElements, Toggle};
pub use dom::{ClickEvent, MenuDom};
pub use state::{Display, Gesture, IconVisibility, MenuState};
