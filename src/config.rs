//! Structural names and timing for the navigation menu.
//!
//! Defaults match the markup rendered by [`crate::components::nav_menu`].
//! A host page with different markup can supply its own names, built in code
//! or deserialized from its own settings; missing fields take the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_PANEL_CLASS: &str = "menu";
pub const DEFAULT_PANEL_ID: &str = "navMenu";
pub const DEFAULT_TRIGGER_CLASS: &str = "hamburger";
pub const DEFAULT_OPEN_ICON_CLASS: &str = "menuIcon";
pub const DEFAULT_CLOSE_ICON_CLASS: &str = "closeIcon";
pub const DEFAULT_ITEM_CLASS: &str = "menuItem";
pub const DEFAULT_SHOWN_CLASS: &str = "showMenu";
pub const DEFAULT_CLOSE_DELAY_MS: u32 = 100;

/// Error returned by [`MenuConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A structural name was empty and would never match an element.
    #[error("menu config field `{field}` must not be empty")]
    EmptyName { field: &'static str },
}

/// Class names, identifier, and close delay the controller works with.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Primary lookup for the menu panel.
    pub panel_class: String,
    /// Fallback lookup for the menu panel when no element has `panel_class`.
    pub panel_id: String,
    pub trigger_class: String,
    /// Searched only inside the trigger.
    pub open_icon_class: String,
    /// Searched only inside the trigger.
    pub close_icon_class: String,
    /// Searched across the whole document.
    pub item_class: String,
    /// Toggled on the panel; its presence is the visible state.
    pub shown_class: String,
    /// Delay between a menu-item click and the menu closing.
    pub close_delay_ms: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            panel_class: DEFAULT_PANEL_CLASS.to_owned(),
            panel_id: DEFAULT_PANEL_ID.to_owned(),
            trigger_class: DEFAULT_TRIGGER_CLASS.to_owned(),
            open_icon_class: DEFAULT_OPEN_ICON_CLASS.to_owned(),
            close_icon_class: DEFAULT_CLOSE_ICON_CLASS.to_owned(),
            item_class: DEFAULT_ITEM_CLASS.to_owned(),
            shown_class: DEFAULT_SHOWN_CLASS.to_owned(),
            close_delay_ms: DEFAULT_CLOSE_DELAY_MS,
        }
    }
}

impl MenuConfig {
    /// Reject blank structural names. Checked when a controller installs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyName`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("panel_class", &self.panel_class),
            ("panel_id", &self.panel_id),
            ("trigger_class", &self.trigger_class),
            ("open_icon_class", &self.open_icon_class),
            ("close_icon_class", &self.close_icon_class),
            ("item_class", &self.item_class),
            ("shown_class", &self.shown_class),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyName { field });
            }
        }
        Ok(())
    }
}
