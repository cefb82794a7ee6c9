//! Menu toggle controller.
//!
//! DESIGN
//! ======
//! A controller is an owned value returned by a successful initialization;
//! there is no global toggle symbol. The "already installed" guard is a
//! constructor argument: the composition root passes whatever toggle it
//! already holds, and initialization defers to it.
//!
//! Listeners are modelled as plain methods taking a [`ClickEvent`]. The
//! browser binding forwards real DOM clicks to them; tests call them (or
//! [`MenuController::dispatch_click`]) directly.
//!
//! The delayed close after a menu-item click is represented by a
//! [`CloseTicket`]. The platform timer hands the ticket back through
//! [`MenuController::fire_close`], which ignores it unless it is still the
//! current one, so a timer outliving the widget does nothing.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use super::dom::{ClickEvent, MenuDom};
use super::state::{Gesture, MenuState};
use crate::config::MenuConfig;
use crate::error::InitError;

/// Anything that can flip the menu between open and closed.
///
/// A host page that ships its own toggle implements this and hands it to
/// [`MenuController::initialize`] to suppress the built-in controller.
pub trait Toggle {
    fn toggle(&mut self);
}

/// Capability shared by every dismissal gesture.
pub trait Dismissable {
    /// Close if open; otherwise do nothing.
    fn request_close(&mut self);
}

/// Handle for one scheduled delayed close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseTicket(u64);

/// Elements the controller was wired to at initialization.
#[derive(Debug, Clone)]
pub struct MenuElements<N> {
    pub panel: N,
    pub trigger: N,
    pub items: Vec<N>,
    pub open_icon: Option<N>,
    pub close_icon: Option<N>,
}

impl<N: Clone> MenuElements<N> {
    /// Resolve every element named by `config`.
    ///
    /// The panel is looked up by class, then by identifier. Items and icons
    /// are optional.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::MissingPanel`] or [`InitError::MissingTrigger`]
    /// when a required element is absent.
    pub fn locate<D>(dom: &D, config: &MenuConfig) -> Result<Self, InitError>
    where
        D: MenuDom<Node = N>,
    {
        let panel = dom
            .first_by_class(&config.panel_class)
            .or_else(|| dom.by_id(&config.panel_id))
            .ok_or(InitError::MissingPanel)?;
        let trigger = dom
            .first_by_class(&config.trigger_class)
            .ok_or(InitError::MissingTrigger)?;

        let items = dom.all_by_class(&config.item_class);
        let open_icon = dom.descendant_by_class(&trigger, &config.open_icon_class);
        let close_icon = dom.descendant_by_class(&trigger, &config.close_icon_class);

        Ok(Self { panel, trigger, items, open_icon, close_icon })
    }
}

/// Owner of the menu's open/closed state and the elements reflecting it.
pub struct MenuController<D: MenuDom> {
    dom: D,
    elements: MenuElements<D::Node>,
    shown_class: String,
    close_delay: Duration,
    state: MenuState,
    pending_close: Option<CloseTicket>,
    tickets_issued: u64,
    torn_down: bool,
}

impl<D: MenuDom> MenuController<D> {
    /// Install a controller over `dom`, reporting why when it abstains.
    ///
    /// The initial presentation is applied immediately: the shown class is
    /// removed from the panel and the open icon is the visible one.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::AlreadyInstalled`] when `existing` is present,
    /// and the lookup errors of [`MenuElements::locate`] otherwise.
    pub fn try_initialize(
        existing: Option<&dyn Toggle>,
        dom: D,
        config: &MenuConfig,
    ) -> Result<Self, InitError> {
        if existing.is_some() {
            return Err(InitError::AlreadyInstalled);
        }
        config.validate()?;
        let elements = MenuElements::locate(&dom, config)?;

        let controller = Self {
            dom,
            elements,
            shown_class: config.shown_class.clone(),
            close_delay: Duration::from_millis(u64::from(config.close_delay_ms)),
            state: MenuState::default(),
            pending_close: None,
            tickets_issued: 0,
            torn_down: false,
        };
        controller.render();
        log::trace!("menu controller installed with {} items", controller.elements.items.len());
        Ok(controller)
    }

    /// Install a controller over `dom`, or silently abstain.
    pub fn initialize(existing: Option<&dyn Toggle>, dom: D, config: &MenuConfig) -> Option<Self> {
        match Self::try_initialize(existing, dom, config) {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::debug!("menu controller not installed: {e}");
                None
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn elements(&self) -> &MenuElements<D::Node> {
        &self.elements
    }

    /// Delay the platform timer should wait before calling [`Self::fire_close`].
    #[must_use]
    pub fn close_delay(&self) -> Duration {
        self.close_delay
    }

    /// The delayed close currently awaiting its timer, if any.
    #[must_use]
    pub fn pending_close(&self) -> Option<CloseTicket> {
        self.pending_close
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Trigger listener: keeps the document listener from seeing this click,
    /// then toggles. An explicit trigger click also supersedes any pending
    /// delayed close.
    pub fn handle_trigger_click(&mut self, event: &mut ClickEvent<D::Node>) {
        event.stop_propagation();
        if self.torn_down {
            return;
        }
        self.pending_close = None;
        self.toggle();
    }

    /// Menu-item listener: schedule a delayed close when the menu is open.
    ///
    /// Returns the ticket the caller's timer must hand back to
    /// [`Self::fire_close`] after [`Self::close_delay`]. A new ticket
    /// replaces any earlier one.
    pub fn handle_item_click(&mut self) -> Option<CloseTicket> {
        if self.torn_down || !self.state.is_open() {
            return None;
        }
        self.tickets_issued += 1;
        let ticket = CloseTicket(self.tickets_issued);
        self.pending_close = Some(ticket);
        Some(ticket)
    }

    /// Document listener: close on a click outside both panel and trigger.
    pub fn handle_document_click(&mut self, event: &ClickEvent<D::Node>) {
        if event.propagation_stopped() || self.torn_down || !self.state.is_open() {
            return;
        }
        if self.is_outside(&event.target) {
            self.apply(Gesture::Outside);
        }
    }

    /// Timer callback for a delayed close.
    ///
    /// Returns `false` (and does nothing) when `ticket` is stale: superseded,
    /// cancelled by a trigger click, or issued before [`Self::teardown`].
    pub fn fire_close(&mut self, ticket: CloseTicket) -> bool {
        if self.torn_down || self.pending_close != Some(ticket) {
            log::trace!("ignoring stale close ticket {ticket:?}");
            return false;
        }
        self.pending_close = None;
        self.apply(Gesture::ItemSelected);
        true
    }

    /// Deliver a click to the menu's listeners in bubbling order.
    ///
    /// Item listeners run first, then the trigger listener, then the document
    /// listener (unless the trigger stopped propagation). Returns the ticket
    /// of a delayed close if an item click scheduled one.
    pub fn dispatch_click(&mut self, target: D::Node) -> Option<CloseTicket> {
        let mut event = ClickEvent::new(target);
        let mut scheduled = None;

        let on_item = self
            .elements
            .items
            .iter()
            .any(|item| self.dom.contains(item, &event.target));
        if on_item {
            scheduled = self.handle_item_click();
        }

        if self.dom.contains(&self.elements.trigger, &event.target) {
            self.handle_trigger_click(&mut event);
        }

        self.handle_document_click(&event);
        scheduled
    }

    /// Detach the controller from its state: drops the pending close and
    /// turns every later call into a no-op.
    pub fn teardown(&mut self) {
        self.pending_close = None;
        self.torn_down = true;
    }

    fn is_outside(&self, target: &D::Node) -> bool {
        !self.dom.contains(&self.elements.panel, target)
            && !self.dom.contains(&self.elements.trigger, target)
    }

    fn apply(&mut self, gesture: Gesture) {
        if self.state.next(gesture) != self.state {
            self.toggle();
        }
    }

    fn elements_attached(&self) -> bool {
        self.dom.is_connected(&self.elements.panel) && self.dom.is_connected(&self.elements.trigger)
    }

    fn render(&self) {
        let icons = self.state.icons();
        self.dom
            .set_class(&self.elements.panel, &self.shown_class, self.state.is_open());
        if let Some(icon) = &self.elements.close_icon {
            self.dom.set_display(icon, icons.close_icon);
        }
        if let Some(icon) = &self.elements.open_icon {
            self.dom.set_display(icon, icons.open_icon);
        }
    }
}

impl<D: MenuDom> Toggle for MenuController<D> {
    /// Flip open/closed and update the panel class and icons.
    ///
    /// Does nothing if the panel or trigger has left the document, or if the
    /// controller has been torn down.
    fn toggle(&mut self) {
        if self.torn_down || !self.elements_attached() {
            return;
        }
        self.state.flip();
        self.render();
        log::trace!("menu {}", if self.state.is_open() { "opened" } else { "closed" });
    }
}

impl<D: MenuDom> Dismissable for MenuController<D> {
    fn request_close(&mut self) {
        self.apply(Gesture::Outside);
    }
}
