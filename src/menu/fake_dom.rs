//! In-memory element tree implementing [`MenuDom`] for native tests.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use super::dom::MenuDom;
use super::state::Display;

#[derive(Debug, Default)]
struct FakeElement {
    id: Option<String>,
    classes: BTreeSet<String>,
    parent: Option<usize>,
    display: Option<Display>,
}

/// Shared handle to a fake document. Clones see the same tree.
#[derive(Clone, Debug)]
pub(crate) struct FakeDom {
    elements: Rc<RefCell<Vec<FakeElement>>>,
}

pub(crate) const ROOT: usize = 0;

impl FakeDom {
    /// Empty document holding only the root (`<body>`).
    pub(crate) fn new() -> Self {
        Self { elements: Rc::new(RefCell::new(vec![FakeElement::default()])) }
    }

    pub(crate) fn append(&self, parent: usize, classes: &[&str]) -> usize {
        self.append_with_id(parent, None, classes)
    }

    pub(crate) fn append_with_id(&self, parent: usize, id: Option<&str>, classes: &[&str]) -> usize {
        let mut elements = self.elements.borrow_mut();
        elements.push(FakeElement {
            id: id.map(str::to_owned),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            parent: Some(parent),
            display: None,
        });
        elements.len() - 1
    }

    /// Remove `node` (and its subtree) from the document.
    pub(crate) fn detach(&self, node: usize) {
        self.elements.borrow_mut()[node].parent = None;
    }

    pub(crate) fn has_class(&self, node: usize, class: &str) -> bool {
        self.elements.borrow()[node].classes.contains(class)
    }

    pub(crate) fn display(&self, node: usize) -> Option<Display> {
        self.elements.borrow()[node].display
    }

    fn parent_of(&self, node: usize) -> Option<usize> {
        self.elements.borrow()[node].parent
    }

    fn ancestors_or_self(&self, node: usize) -> Vec<usize> {
        let mut chain = vec![node];
        let mut cursor = node;
        while let Some(parent) = self.parent_of(cursor) {
            chain.push(parent);
            cursor = parent;
        }
        chain
    }
}

impl MenuDom for FakeDom {
    type Node = usize;

    fn first_by_class(&self, class: &str) -> Option<usize> {
        self.all_by_class(class).into_iter().next()
    }

    fn by_id(&self, id: &str) -> Option<usize> {
        let found = self
            .elements
            .borrow()
            .iter()
            .position(|el| el.id.as_deref() == Some(id));
        found.filter(|node| self.is_connected(node))
    }

    fn all_by_class(&self, class: &str) -> Vec<usize> {
        let candidates: Vec<usize> = self
            .elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, el)| el.classes.contains(class))
            .map(|(i, _)| i)
            .collect();
        candidates.into_iter().filter(|node| self.is_connected(node)).collect()
    }

    fn descendant_by_class(&self, root: &usize, class: &str) -> Option<usize> {
        self.all_by_class(class)
            .into_iter()
            .find(|node| node != root && self.contains(root, node))
    }

    fn contains(&self, ancestor: &usize, node: &usize) -> bool {
        self.ancestors_or_self(*node).contains(ancestor)
    }

    fn is_connected(&self, node: &usize) -> bool {
        self.ancestors_or_self(*node).last() == Some(&ROOT)
    }

    fn set_class(&self, node: &usize, class: &str, present: bool) {
        let mut elements = self.elements.borrow_mut();
        let classes = &mut elements[*node].classes;
        if present {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }

    fn set_display(&self, node: &usize, display: Display) {
        self.elements.borrow_mut()[*node].display = Some(display);
    }
}

/// Handles into the standard navigation page built by [`nav_page`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavPage {
    pub panel: usize,
    pub trigger: usize,
    pub open_icon: usize,
    pub close_icon: usize,
    pub first_item: usize,
    pub second_item: usize,
    /// Inside the panel but not a menu item.
    pub panel_heading: usize,
    /// Icon glyph nested inside the trigger.
    pub trigger_glyph: usize,
    /// Page content outside both panel and trigger.
    pub content: usize,
}

/// Header with a hamburger trigger (two icons) and a panel with two items.
pub(crate) fn nav_page() -> (FakeDom, NavPage) {
    let dom = FakeDom::new();
    let header = dom.append(ROOT, &["header"]);
    let trigger = dom.append(header, &["hamburger"]);
    let open_icon = dom.append(trigger, &["menuIcon"]);
    let trigger_glyph = dom.append(open_icon, &["glyph"]);
    let close_icon = dom.append(trigger, &["closeIcon"]);
    let panel = dom.append_with_id(header, Some("navMenu"), &["menu"]);
    let panel_heading = dom.append(panel, &["menu__heading"]);
    let first_item = dom.append(panel, &["menuItem"]);
    let second_item = dom.append(panel, &["menuItem"]);
    let content = dom.append(ROOT, &["content"]);

    let page = NavPage {
        panel,
        trigger,
        open_icon,
        close_icon,
        first_item,
        second_item,
        panel_heading,
        trigger_glyph,
        content,
    };
    (dom, page)
}
