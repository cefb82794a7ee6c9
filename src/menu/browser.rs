//! Browser binding: attach a [`MenuController`] to the live document.
//!
//! Requires a browser environment (`hydrate` feature). The controller lives in
//! an `Rc<RefCell<_>>`; every listener holds only a `Weak` to it, so dropping
//! the [`MenuBinding`] is enough to make late callbacks harmless. Dropping
//! also removes the listeners and cancels the pending close timer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Node};

use super::controller::{MenuController, Toggle};
use super::dom::{ClickEvent, MenuDom};
use super::state::Display;
use crate::config::MenuConfig;
use crate::error::InitError;

type SharedController = Rc<RefCell<MenuController<WebDom>>>;
type ClickListener = Closure<dyn FnMut(Event)>;

/// [`MenuDom`] over a `web_sys::Document`.
#[derive(Clone, Debug)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl MenuDom for WebDom {
    type Node = Element;

    fn first_by_class(&self, class: &str) -> Option<Element> {
        self.document.get_elements_by_class_name(class).item(0)
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn all_by_class(&self, class: &str) -> Vec<Element> {
        let found = self.document.get_elements_by_class_name(class);
        (0..found.length()).filter_map(|i| found.item(i)).collect()
    }

    fn descendant_by_class(&self, root: &Element, class: &str) -> Option<Element> {
        root.get_elements_by_class_name(class).item(0)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node;
        ancestor.contains(Some(node))
    }

    fn is_connected(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn set_class(&self, node: &Element, class: &str, present: bool) {
        let class_list = node.class_list();
        if present {
            let _ = class_list.add_1(class);
        } else {
            let _ = class_list.remove_1(class);
        }
    }

    fn set_display(&self, node: &Element, display: Display) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("display", display.as_css());
        }
    }
}

/// A mounted menu: the controller plus every listener and timer wired to it.
pub struct MenuBinding {
    controller: SharedController,
    pending_close: Rc<RefCell<Option<Timeout>>>,
    listeners: Vec<(EventTarget, ClickListener)>,
}

impl MenuBinding {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controller.borrow().is_open()
    }

    fn listen(&mut self, target: EventTarget, handler: impl FnMut(Event) + 'static) {
        let listener = Closure::<dyn FnMut(Event)>::new(handler);
        if target
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.push((target, listener));
        }
    }
}

impl Toggle for MenuBinding {
    fn toggle(&mut self) {
        self.controller.borrow_mut().toggle();
    }
}

impl Drop for MenuBinding {
    fn drop(&mut self) {
        for (target, listener) in self.listeners.drain(..) {
            let _ = target
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
        // Dropping a gloo Timeout clears it.
        self.pending_close.borrow_mut().take();
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.teardown();
        }
    }
}

/// Mount the menu on the current document, or silently abstain.
pub fn mount(existing: Option<&dyn Toggle>, config: &MenuConfig) -> Option<MenuBinding> {
    match try_mount(existing, config) {
        Ok(binding) => Some(binding),
        Err(e) => {
            log::debug!("menu not mounted: {e}");
            None
        }
    }
}

/// Mount the menu on the current document.
///
/// Registers one click listener on the trigger, one per menu item, and one on
/// the document.
///
/// # Errors
///
/// Returns [`InitError::NoDocument`] outside a browser, and any reason
/// [`MenuController::try_initialize`] abstains for.
pub fn try_mount(existing: Option<&dyn Toggle>, config: &MenuConfig) -> Result<MenuBinding, InitError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(InitError::NoDocument)?;
    let controller = MenuController::try_initialize(existing, WebDom::new(document.clone()), config)?;
    let elements = controller.elements().clone();

    let controller = Rc::new(RefCell::new(controller));
    let pending_close = Rc::new(RefCell::new(None::<Timeout>));
    let mut binding = MenuBinding {
        controller: Rc::clone(&controller),
        pending_close: Rc::clone(&pending_close),
        listeners: Vec::new(),
    };

    {
        let weak = Rc::downgrade(&controller);
        let pending_close = Rc::clone(&pending_close);
        let trigger = elements.trigger.clone();
        binding.listen(elements.trigger.clone().into(), move |event: Event| {
            // Keep the document listener from treating this as an outside click.
            event.stop_propagation();
            let Some(controller) = weak.upgrade() else {
                return;
            };
            pending_close.borrow_mut().take();
            let mut click = ClickEvent::new(trigger.clone());
            controller.borrow_mut().handle_trigger_click(&mut click);
        });
    }

    for item in &elements.items {
        let weak = Rc::downgrade(&controller);
        let pending_close = Rc::clone(&pending_close);
        binding.listen(item.clone().into(), move |_event: Event| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            let Some(ticket) = controller.borrow_mut().handle_item_click() else {
                return;
            };
            let delay_ms = u32::try_from(controller.borrow().close_delay().as_millis()).unwrap_or(u32::MAX);
            let weak_timer = Rc::downgrade(&controller);
            let timeout = Timeout::new(delay_ms, move || {
                if let Some(controller) = weak_timer.upgrade() {
                    controller.borrow_mut().fire_close(ticket);
                }
            });
            // Replacing the stored timeout cancels any earlier one.
            *pending_close.borrow_mut() = Some(timeout);
        });
    }

    {
        let weak = Rc::downgrade(&controller);
        binding.listen(document.into(), move |event: Event| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            controller.borrow_mut().handle_document_click(&ClickEvent::new(target));
        });
    }

    Ok(binding)
}
