//! Collapsible site navigation with a hamburger trigger.

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

use leptos::prelude::*;

use crate::config::MenuConfig;

/// One navigation link rendered as a menu item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self { label: label.into(), href: href.into() }
    }
}

/// Links shown in the site header.
#[must_use]
pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Search", "/"),
        NavLink::new("Favorites", "/favorites"),
        NavLink::new("History", "/history"),
    ]
}

/// Site header with a hamburger trigger and collapsible link panel.
///
/// Markup uses the structural names from `config`. On hydration the menu
/// controller is mounted once and unmounted when the component is cleaned up.
#[component]
pub fn NavMenu(links: Vec<NavLink>, #[prop(optional)] config: Option<MenuConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        use crate::menu::Toggle;
        use crate::menu::browser::{MenuBinding, mount};

        let binding = StoredValue::new_local(None::<MenuBinding>);
        let mount_config = config.clone();
        Effect::new(move || {
            binding.update_value(|slot| {
                let existing = slot.as_ref().map(|b| b as &dyn Toggle);
                if let Some(mounted) = mount(existing, &mount_config) {
                    *slot = Some(mounted);
                }
            });
        });
        on_cleanup(move || {
            binding.update_value(|slot| {
                slot.take();
            });
        });
    }

    let item_class = config.item_class.clone();
    let items = links
        .into_iter()
        .map(move |link| {
            view! {
                <a class=item_class.clone() href=link.href>
                    {link.label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">
                "Tuneshelf"
            </a>
            <button class=config.trigger_class type="button" aria-label="Toggle navigation">
                <span class=config.open_icon_class>"\u{2630}"</span>
                <span class=config.close_icon_class>"\u{2715}"</span>
            </button>
            <nav class=config.panel_class id=config.panel_id>
                {items}
            </nav>
        </header>
    }
}
